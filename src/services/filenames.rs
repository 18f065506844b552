// src/services/filenames.rs

//! Candidate filename generation.
//!
//! Editions are uploaded by hand and the exact filename varies, so lookup
//! enumerates every pattern that has been observed in practice: each base
//! name crossed with three join styles and two orderings, plus the bare
//! date-only form. The generation order is also the selection order when
//! several files exist for the same day, so it must stay stable.

use chrono::NaiveDate;

/// Join styles between base name and date key, in precedence order.
const JOIN_STYLES: [&str; 3] = ["-", "_", ""];

/// Compact date key used in edition filenames: `DD-MM-YY`.
///
/// The two-digit year is intentional; externally-produced uploads use it
/// and the key must match them byte for byte.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%d-%m-%y").to_string()
}

/// Human-readable date label: `DD.MM.YYYY`.
pub fn display_label(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Generate every candidate filename for a date key, in precedence order.
///
/// For each base name, for each join style, the base-first form comes
/// before the date-first form. The bare `<key>.<ext>` pattern goes last.
/// With the default five base names this yields 31 candidates.
pub fn candidates(key: &str, base_names: &[String], extension: &str) -> Vec<String> {
    let mut patterns = Vec::with_capacity(base_names.len() * JOIN_STYLES.len() * 2 + 1);

    for base in base_names {
        for join in JOIN_STYLES {
            patterns.push(format!("{base}{join}{key}.{extension}"));
            patterns.push(format!("{key}{join}{base}.{extension}"));
        }
    }

    patterns.push(format!("{key}.{extension}"));
    patterns
}

/// The canonical filename for a date key: first base name, hyphen-joined.
///
/// This is both the preferred upload name and the fallback reported when
/// no candidate exists.
pub fn canonical(key: &str, base_names: &[String], extension: &str) -> String {
    let base = base_names.first().map_or("epaper", String::as_str);
    format!("{base}-{key}.{extension}")
}
