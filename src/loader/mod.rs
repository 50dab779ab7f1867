//! Shared load pipeline: fetch, validate, decode.
//!
//! Each domain loader delegates here. A failed step emits one diagnostic
//! record before the error is returned. A document is accepted whole or
//! rejected whole; there is no partial result, no retry, no fallback
//! default, and no memoization. Every call re-reads and re-validates.

mod errors;

use serde::de::DeserializeOwned;
use serde_json::Value;

pub use errors::{LoadError, LoadResult};

use crate::observability::Logger;
use crate::schema::Schema;
use crate::source::{DataSource, Domain};

/// Runs one load-and-validate cycle for a domain document.
pub(crate) fn load_document<T: DeserializeOwned>(
    source: &dyn DataSource,
    domain: Domain,
    schema: &Schema,
) -> LoadResult<T> {
    let raw = fetch(source, domain)?;
    let validated = validate(domain, schema, raw)?;
    decode(domain, validated)
}

fn fetch(source: &dyn DataSource, domain: Domain) -> LoadResult<Value> {
    source.document(domain).map_err(|source_err| {
        Logger::error(
            "SOURCE_UNAVAILABLE",
            &[
                ("domain", domain.to_string()),
                ("reason", source_err.to_string()),
            ],
        );
        LoadError::Source {
            domain,
            source: source_err,
        }
    })
}

fn validate(domain: Domain, schema: &Schema, raw: Value) -> LoadResult<Value> {
    match schema.validate(&raw) {
        Ok(()) => Ok(raw),
        Err(report) => {
            Logger::error(
                "DOCUMENT_REJECTED",
                &[
                    ("domain", domain.to_string()),
                    ("violations", report.violations().len().to_string()),
                    (
                        "first",
                        report.first().map(|v| v.to_string()).unwrap_or_default(),
                    ),
                ],
            );
            Err(LoadError::Rejected { domain, report })
        }
    }
}

fn decode<T: DeserializeOwned>(domain: Domain, validated: Value) -> LoadResult<T> {
    serde_json::from_value(validated).map_err(|e| {
        Logger::error(
            "DOCUMENT_DECODE_FAILED",
            &[("domain", domain.to_string()), ("reason", e.to_string())],
        );
        LoadError::Decode {
            domain,
            reason: e.to_string(),
        }
    })
}
