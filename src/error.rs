//! Domain-specific error types for ism-forge

use thiserror::Error;

/// Main error type for the name engine and its collaborators
#[derive(Error, Debug)]
pub enum IsmForgeError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Corpus error: {message}")]
    Corpus { message: String },

    #[error("Enrichment error: {message}")]
    Enrichment { message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Timeout error: {operation} timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Invalid parameters: {message}")]
    InvalidParams { message: String },
}

impl From<anyhow::Error> for IsmForgeError {
    fn from(err: anyhow::Error) -> Self {
        IsmForgeError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IsmForgeError {
    fn from(err: serde_json::Error) -> Self {
        IsmForgeError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for IsmForgeError {
    fn from(err: toml::de::Error) -> Self {
        IsmForgeError::Corpus {
            message: format!("TOML parse error: {}", err),
        }
    }
}

impl From<std::io::Error> for IsmForgeError {
    fn from(err: std::io::Error) -> Self {
        IsmForgeError::Corpus {
            message: format!("I/O error: {}", err),
        }
    }
}

impl From<reqwest::Error> for IsmForgeError {
    fn from(err: reqwest::Error) -> Self {
        IsmForgeError::Enrichment {
            message: format!("HTTP request failed: {}", err),
        }
    }
}

/// Result type alias for ism-forge operations
pub type Result<T> = std::result::Result<T, IsmForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_names_operation() {
        let err = IsmForgeError::Timeout {
            operation: "enrichment".into(),
            timeout_ms: 250,
        };
        assert_eq!(
            err.to_string(),
            "Timeout error: enrichment timed out after 250ms"
        );
    }

    #[test]
    fn test_anyhow_maps_to_internal() {
        let err: IsmForgeError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, IsmForgeError::Internal { ref message } if message == "boom"));
    }
}
