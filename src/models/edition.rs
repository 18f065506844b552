//! Edition reference data structure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A resolved reference to one day's e-paper edition.
///
/// Immutable once constructed; every lookup produces a fresh instance and
/// re-probes the asset origin, so a reference never goes stale silently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EditionReference {
    /// Calendar date this reference represents (local wall-clock date)
    pub logical_date: NaiveDate,

    /// Human-readable date, `DD.MM.YYYY`
    pub display_label: String,

    /// Filename confirmed to exist, or the canonical fallback if none was
    pub candidate_path: String,

    /// `candidate_path` joined to the asset-origin base
    pub resolved_url: String,

    /// Whether a probe against `resolved_url` succeeded
    pub available: bool,
}

impl EditionReference {
    /// Format the reference for display using a template.
    ///
    /// Supported placeholders:
    /// - `{date}`, `{file}`, `{url}`, `{status}`
    pub fn format(&self, template: &str) -> String {
        template
            .replace("{date}", &self.display_label)
            .replace("{file}", &self.candidate_path)
            .replace("{url}", &self.resolved_url)
            .replace(
                "{status}",
                if self.available {
                    "available"
                } else {
                    "not uploaded"
                },
            )
    }
}

/// Canonical filename and relative publish path for one day's edition.
///
/// Shown to operators in "how to publish today's edition" instructions;
/// producing it involves no I/O.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadInstructions {
    /// Canonical filename, e.g. `epaper-17-07-25.pdf`
    pub filename: String,

    /// Relative path to place the file at, e.g. `public/epaper-17-07-25.pdf`
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_reference() -> EditionReference {
        EditionReference {
            logical_date: NaiveDate::from_ymd_opt(2025, 7, 17).unwrap(),
            display_label: "17.07.2025".to_string(),
            candidate_path: "epaper-17-07-25.pdf".to_string(),
            resolved_url: "https://assets.example.com/epaper-17-07-25.pdf".to_string(),
            available: true,
        }
    }

    #[test]
    fn test_format() {
        let reference = sample_reference();
        let result = reference.format("[{date}] {file} ({status})");
        assert_eq!(result, "[17.07.2025] epaper-17-07-25.pdf (available)");
    }

    #[test]
    fn test_format_unavailable() {
        let mut reference = sample_reference();
        reference.available = false;
        assert_eq!(reference.format("{status}"), "not uploaded");
    }
}
