// src/services/probe.rs

//! Existence probing against the asset origin.
//!
//! A probe answers one question: does a file exist at this URL right now?
//! Anything that keeps the answer from arriving (connection failure,
//! timeout, non-success status) counts as "no" for that URL; probe
//! failures never escape to the caller.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CACHE_CONTROL;

/// Trait for existence-probe backends.
#[async_trait]
pub trait ExistenceProbe: Send + Sync {
    /// Check whether a file exists at the given URL.
    async fn exists(&self, url: &str) -> bool;
}

/// HTTP existence probe using lightweight `HEAD` requests.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Create a probe backed by the given HTTP client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ExistenceProbe for HttpProbe {
    async fn exists(&self, url: &str) -> bool {
        // no-cache so a freshly uploaded file is seen immediately
        let result = self
            .client
            .head(url)
            .header(CACHE_CONTROL, "no-cache")
            .send()
            .await;

        match result {
            Ok(response) => {
                let ok = response.status().is_success();
                if !ok {
                    log::debug!("Probe miss {} ({})", url, response.status());
                }
                ok
            }
            Err(error) => {
                log::debug!("Probe failed for {}: {}", url, error);
                false
            }
        }
    }
}
