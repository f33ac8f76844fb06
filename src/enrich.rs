//! Optional post-pass that decorates ranked names from an outside source.
//!
//! Enrichment is best effort. The engine hands an enricher a copy of the
//! accumulated results; if the enricher errors or times out, the copy is
//! discarded and the local results are used as-is.

use crate::config::EnrichmentConfig;
use crate::engine::types::{GeneratedName, tagged};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info};

#[async_trait]
pub trait Enricher: Send + Sync {
    fn name(&self) -> &'static str;
    async fn enrich(&self, names: Vec<GeneratedName>) -> Result<Vec<GeneratedName>>;
}

/// Leaves results untouched
pub struct NoopEnricher;

#[async_trait]
impl Enricher for NoopEnricher {
    fn name(&self) -> &'static str {
        "noop"
    }

    async fn enrich(&self, names: Vec<GeneratedName>) -> Result<Vec<GeneratedName>> {
        Ok(names)
    }
}

/// Posts result names to a JSON lookup endpoint and applies the returned
/// meanings and origins. Match tags are kept.
pub struct HttpEnricher {
    client: reqwest::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct LookupRequest<'a> {
    names: Vec<&'a str>,
}

#[derive(Debug, Deserialize)]
pub struct LookupEntry {
    pub name: String,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
}

#[derive(Deserialize)]
struct LookupResponse {
    #[serde(default)]
    entries: Vec<LookupEntry>,
}

impl HttpEnricher {
    pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_millis(timeout_ms))
            .build()
            .context("Failed to build reqwest client with timeout")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl Enricher for HttpEnricher {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn enrich(&self, names: Vec<GeneratedName>) -> Result<Vec<GeneratedName>> {
        if names.is_empty() {
            return Ok(names);
        }
        debug!(
            "Requesting enrichment for {} names from {}",
            names.len(),
            self.endpoint
        );

        let body = LookupRequest {
            names: names.iter().map(|n| n.name.as_str()).collect(),
        };
        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .context("Failed to send enrichment request")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            anyhow::bail!("Enrichment endpoint error {}: {}", status, error_text);
        }

        let parsed: LookupResponse = response
            .json()
            .await
            .context("Failed to parse enrichment response")?;
        Ok(apply_entries(names, parsed.entries))
    }
}

/// Overwrite meaning/origin for names that have an entry, keeping the match tag
pub fn apply_entries(mut names: Vec<GeneratedName>, entries: Vec<LookupEntry>) -> Vec<GeneratedName> {
    let by_name: HashMap<String, LookupEntry> =
        entries.into_iter().map(|e| (e.name.clone(), e)).collect();

    for record in names.iter_mut() {
        let Some(entry) = by_name.get(&record.name) else {
            continue;
        };
        if let Some(meaning) = entry.meaning.as_deref().filter(|m| !m.trim().is_empty()) {
            record.meaning = match record.tag() {
                Some(tag) => tagged(meaning.trim(), tag),
                None => meaning.trim().to_string(),
            };
        }
        if let Some(origin) = entry.origin.as_deref().filter(|o| !o.trim().is_empty()) {
            record.origin = origin.trim().to_string();
        }
    }
    names
}

/// Pick the enricher for a configuration: HTTP when an endpoint is set and
/// enrichment is enabled, otherwise the no-op.
pub fn from_config(config: &EnrichmentConfig) -> Result<Arc<dyn Enricher>> {
    match config.endpoint.as_deref() {
        Some(endpoint) if config.enabled => {
            info!("Using HTTP enrichment at {}", endpoint);
            Ok(Arc::new(HttpEnricher::new(endpoint, config.timeout_ms)?))
        }
        _ => Ok(Arc::new(NoopEnricher)),
    }
}
