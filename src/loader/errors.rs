//! Load pipeline errors.

use thiserror::Error;

use crate::schema::ValidationReport;
use crate::source::{Domain, SourceError};

/// Result type for load operations
pub type LoadResult<T> = Result<T, LoadError>;

/// The single error raised when a load-and-validate cycle fails.
///
/// A failed load never yields a partial value: the document is either
/// accepted whole or rejected whole.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The raw document could not be obtained or parsed at all.
    #[error("{domain} source unavailable: {source}")]
    Source {
        domain: Domain,
        #[source]
        source: SourceError,
    },

    /// The document was readable but violates the domain schema.
    #[error("{domain} document rejected: {report}")]
    Rejected {
        domain: Domain,
        report: ValidationReport,
    },

    /// The document passed validation but did not decode into its typed
    /// form. Guards against schema/type drift; not expected in practice.
    #[error("{domain} document decode failed: {reason}")]
    Decode { domain: Domain, reason: String },
}

impl LoadError {
    /// The domain whose load failed.
    pub fn domain(&self) -> Domain {
        match self {
            LoadError::Source { domain, .. }
            | LoadError::Rejected { domain, .. }
            | LoadError::Decode { domain, .. } => *domain,
        }
    }

    /// The validation report, when this is a rejection.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            LoadError::Rejected { report, .. } => Some(report),
            _ => None,
        }
    }
}
