//! # Data-Source Errors

use thiserror::Error;

use super::Domain;

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Failures obtaining or parsing a raw domain document
#[derive(Debug, Clone, Error)]
pub enum SourceError {
    #[error("cannot read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("malformed JSON document: {0}")]
    Parse(String),

    #[error("no document registered for domain '{0}'")]
    Missing(Domain),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = SourceError::Io {
            path: "/data/tariffs.json".into(),
            reason: "permission denied".into(),
        };
        assert!(err.to_string().contains("/data/tariffs.json"));

        let err = SourceError::Missing(Domain::Tariffs);
        assert!(err.to_string().contains("tariffs"));
    }
}
