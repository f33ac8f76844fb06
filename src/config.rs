use crate::engine::MAX_RESULT_LIMIT;
use serde::{Deserialize, Serialize};

/// Main configuration loaded from ism_forge.toml and environment variables
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub enrichment: EnrichmentConfig,
}

/// Ranking behavior and corpus source
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    pub result_limit: usize,
    pub min_syllable_matches: usize,
    /// TOML corpus file; the built-in corpus is used when unset
    pub corpus_path: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            result_limit: 10,
            min_syllable_matches: 2,
            corpus_path: None,
        }
    }
}

/// Optional external enrichment source
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    pub enabled: bool,
    pub endpoint: Option<String>,
    pub timeout_ms: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: None,
            timeout_ms: 3000,
        }
    }
}

impl Config {
    /// Load configuration from TOML file and environment variables
    /// Uses ISM_FORGE_CONFIG environment variable or defaults to "ism_forge.toml"
    pub fn load() -> anyhow::Result<Self> {
        // ISM_ENV_FILE if set, otherwise ./.env
        if let Ok(env_path) = std::env::var("ISM_ENV_FILE") {
            let _ = dotenvy::from_path(env_path);
        } else {
            let _ = dotenvy::from_path(".env");
        }

        let config_path =
            std::env::var("ISM_FORGE_CONFIG").unwrap_or_else(|_| "ism_forge.toml".to_string());

        let mut config: Config = if let Ok(content) = std::fs::read_to_string(&config_path) {
            toml::from_str(&content)?
        } else {
            tracing::debug!("Config file {} not found, using defaults", config_path);
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply ISM_* overrides from `lookup` (env-first)
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(limit) = lookup("ISM_RESULT_LIMIT").and_then(|v| v.parse::<usize>().ok()) {
            self.engine.result_limit = limit;
            tracing::debug!("ISM_RESULT_LIMIT env override applied");
        }
        if let Some(min) = lookup("ISM_MIN_SYLLABLE_MATCHES").and_then(|v| v.parse::<usize>().ok())
        {
            self.engine.min_syllable_matches = min;
        }
        if let Some(path) = lookup("ISM_CORPUS_PATH").filter(|p| !p.trim().is_empty()) {
            self.engine.corpus_path = Some(path);
            tracing::debug!("ISM_CORPUS_PATH env override applied");
        }
        if let Some(url) = lookup("ISM_ENRICH_URL").filter(|u| !u.trim().is_empty()) {
            self.enrichment.endpoint = Some(url);
        }
        if let Some(timeout) = lookup("ISM_ENRICH_TIMEOUT_MS").and_then(|v| v.parse::<u64>().ok())
        {
            self.enrichment.timeout_ms = timeout;
        }
        if let Some(disable) = lookup("ISM_ENRICH_DISABLE")
            && (disable == "1" || disable.eq_ignore_ascii_case("true"))
        {
            self.enrichment.enabled = false;
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=MAX_RESULT_LIMIT).contains(&self.engine.result_limit) {
            anyhow::bail!("result_limit must be between 1 and {}", MAX_RESULT_LIMIT);
        }
        if self.engine.min_syllable_matches == 0 {
            anyhow::bail!("min_syllable_matches must be at least 1");
        }
        if self.enrichment.timeout_ms == 0 {
            anyhow::bail!("enrichment timeout_ms must be > 0");
        }
        if let Some(endpoint) = &self.enrichment.endpoint
            && !endpoint.starts_with("http://")
            && !endpoint.starts_with("https://")
        {
            anyhow::bail!(
                "enrichment endpoint '{}' must start with http:// or https://",
                endpoint
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.engine.result_limit, 10);
        assert_eq!(config.engine.min_syllable_matches, 2);
        assert!(config.engine.corpus_path.is_none());
        assert!(config.enrichment.endpoint.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            [enrichment]
            endpoint = "https://names.example/lookup"
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.result_limit, 10);
        assert_eq!(config.enrichment.timeout_ms, 3000);
        assert!(config.enrichment.enabled);
        assert_eq!(
            config.enrichment.endpoint.as_deref(),
            Some("https://names.example/lookup")
        );
    }

    #[test]
    fn test_env_overrides() {
        let mut config = Config::default();
        config.apply_env_overrides(lookup_from(&[
            ("ISM_RESULT_LIMIT", "5"),
            ("ISM_CORPUS_PATH", "/tmp/names.toml"),
            ("ISM_ENRICH_URL", "http://localhost:8080/lookup"),
            ("ISM_ENRICH_TIMEOUT_MS", "250"),
            ("ISM_ENRICH_DISABLE", "true"),
        ]));
        assert_eq!(config.engine.result_limit, 5);
        assert_eq!(config.engine.corpus_path.as_deref(), Some("/tmp/names.toml"));
        assert_eq!(config.enrichment.timeout_ms, 250);
        assert!(!config.enrichment.enabled);
    }

    #[test]
    fn test_unparseable_override_ignored() {
        let mut config = Config::default();
        config.apply_env_overrides(lookup_from(&[("ISM_RESULT_LIMIT", "lots")]));
        assert_eq!(config.engine.result_limit, 10);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.engine.result_limit = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.engine.result_limit = 11;
        assert!(config.validate().is_err());
        config.engine.result_limit = 10;
        assert!(config.validate().is_ok());

        let mut config = Config::default();
        config.enrichment.endpoint = Some("ftp://names".into());
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.engine.min_syllable_matches = 0;
        assert!(config.validate().is_err());
    }
}
