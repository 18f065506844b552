// src/services/locator.rs

//! Edition resolution service.
//!
//! Maps a calendar date to the best-guess URL of that day's e-paper by
//! probing a fixed candidate filename set against the asset origin. The
//! origin offers no directory listing, so discovery is probe-only.

use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};
use futures::future;
use futures::stream::{self, StreamExt};

use crate::error::Result;
use crate::models::{Config, EditionReference, UploadInstructions};
use crate::services::filenames;
use crate::services::probe::{ExistenceProbe, HttpProbe};
use crate::utils::{http, url};

/// Service for resolving edition references.
///
/// Stateless apart from its configuration and HTTP client: no lookup
/// result is cached, so a file uploaded between two calls is found by the
/// second one without any cache-busting.
pub struct EditionLocator {
    config: Arc<Config>,
    probe: Arc<dyn ExistenceProbe>,
}

impl EditionLocator {
    /// Create a locator probing over HTTP with the configured client.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = http::create_async_client(&config.http)?;
        Ok(Self::with_probe(config, Arc::new(HttpProbe::new(client))))
    }

    /// Create a locator with a custom probe backend.
    pub fn with_probe(config: Arc<Config>, probe: Arc<dyn ExistenceProbe>) -> Self {
        Self { config, probe }
    }

    /// Resolve the edition reference for a calendar date.
    ///
    /// Never fails: a date with no uploaded file resolves to the canonical
    /// fallback filename with `available = false`, and so does a date whose
    /// probes all error out (unreachable origin included).
    pub async fn resolve_for_date(&self, date: NaiveDate) -> EditionReference {
        let locator = &self.config.locator;
        let key = filenames::date_key(date);
        let candidates = filenames::candidates(&key, &locator.base_names, &locator.extension);

        log::debug!(
            "Resolving edition for {}: {} candidates",
            key,
            candidates.len()
        );

        // Launch every probe at once, then judge the outcomes in generation
        // order. Racing to the first success would make the winner depend
        // on response latency when several files exist for the same day.
        let probes = candidates.iter().map(|name| {
            let target = url::join(&locator.base_url, name);
            async move { self.probe.exists(&target).await }
        });
        let outcomes = future::join_all(probes).await;

        let confirmed = candidates
            .iter()
            .zip(&outcomes)
            .find(|(_, exists)| **exists)
            .map(|(name, _)| name.clone());

        let (candidate_path, available) = match confirmed {
            Some(name) => {
                log::debug!("Found edition for {}: {}", key, name);
                (name, true)
            }
            None => {
                log::debug!("No edition found for {}", key);
                let fallback = filenames::canonical(&key, &locator.base_names, &locator.extension);
                (fallback, false)
            }
        };

        EditionReference {
            logical_date: date,
            display_label: filenames::display_label(date),
            resolved_url: url::join(&locator.base_url, &candidate_path),
            candidate_path,
            available,
        }
    }

    /// Resolve the edition reference for the current local calendar date.
    pub async fn resolve_for_today(&self) -> EditionReference {
        self.resolve_for_date(Local::now().date_naive()).await
    }

    /// Resolve references for `day_count` days ending at `anchor`.
    ///
    /// Returns one reference per day in descending date order, `anchor`
    /// first. Days resolve concurrently (bounded by `http.max_concurrent`)
    /// but the output order is the date order, not completion order.
    pub async fn resolve_range(&self, anchor: NaiveDate, day_count: usize) -> Vec<EditionReference> {
        let concurrency = self.config.http.max_concurrent.max(1);
        let dates = (0..day_count as u64).filter_map(|offset| anchor.checked_sub_days(Days::new(offset)));

        stream::iter(dates)
            .map(|date| self.resolve_for_date(date))
            .buffered(concurrency)
            .collect()
            .await
    }

    /// Resolve a range and keep only editions that actually exist.
    ///
    /// Used by archive listings that hide days with nothing uploaded.
    pub async fn existing_editions(
        &self,
        anchor: NaiveDate,
        day_count: usize,
    ) -> Vec<EditionReference> {
        self.resolve_range(anchor, day_count)
            .await
            .into_iter()
            .filter(|reference| reference.available)
            .collect()
    }

    /// Canonical upload filename and publish path for a date. No I/O.
    pub fn upload_instructions(&self, date: NaiveDate) -> UploadInstructions {
        let locator = &self.config.locator;
        let key = filenames::date_key(date);
        let filename = filenames::canonical(&key, &locator.base_names, &locator.extension);
        let path = format!("{}/{}", locator.publish_dir.trim_matches('/'), filename);
        UploadInstructions { filename, path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator_with_defaults() -> EditionLocator {
        EditionLocator::new(Arc::new(Config::default())).unwrap()
    }

    #[test]
    fn test_upload_instructions() {
        let locator = locator_with_defaults();
        let date = NaiveDate::from_ymd_opt(2025, 7, 17).unwrap();

        let instructions = locator.upload_instructions(date);
        assert_eq!(instructions.filename, "epaper-17-07-25.pdf");
        assert_eq!(instructions.path, "public/epaper-17-07-25.pdf");
    }

    #[test]
    fn test_upload_instructions_single_digit_date() {
        let locator = locator_with_defaults();
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();

        let instructions = locator.upload_instructions(date);
        assert_eq!(instructions.filename, "epaper-03-03-25.pdf");
    }
}
