//! Raw-document sources.
//!
//! Loaders never read the filesystem directly: they ask an injected
//! `DataSource` for the untyped document of their domain. Implementations
//! re-read on every call; nothing here caches.

mod errors;

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

pub use errors::{SourceError, SourceResult};

/// The three data domains served by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    Tariffs,
    Emissions,
    SimulationParams,
}

impl Domain {
    /// Stable identifier used in diagnostics and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Tariffs => "tariffs",
            Domain::Emissions => "emissions",
            Domain::SimulationParams => "simulation-params",
        }
    }

    /// Canonical document file name for this domain.
    pub fn file_name(&self) -> &'static str {
        match self {
            Domain::Tariffs => "tariffs.json",
            Domain::Emissions => "emissions.json",
            Domain::SimulationParams => "simulation_params.json",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Provider of raw, untyped domain documents.
pub trait DataSource {
    /// Returns the raw document for the given domain.
    fn document(&self, domain: Domain) -> SourceResult<Value>;
}

/// Reads documents from a directory holding one JSON file per domain.
///
/// The source holds no state beyond the directory path; every call
/// re-reads and re-parses the file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    dir: PathBuf,
}

impl JsonFileSource {
    /// Creates a source over the given directory.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, domain: Domain) -> PathBuf {
        self.dir.join(domain.file_name())
    }
}

impl DataSource for JsonFileSource {
    fn document(&self, domain: Domain) -> SourceResult<Value> {
        let path = self.path_for(domain);
        let content = fs::read_to_string(&path).map_err(|e| SourceError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_str(&content).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

/// Serves the documents compiled into the crate from `fixtures/`.
///
/// The embedded text is parsed fresh on every call, like any other source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureSource;

impl FixtureSource {
    pub fn new() -> Self {
        Self
    }
}

impl DataSource for FixtureSource {
    fn document(&self, domain: Domain) -> SourceResult<Value> {
        let raw = match domain {
            Domain::Tariffs => include_str!("../../fixtures/tariffs.json"),
            Domain::Emissions => include_str!("../../fixtures/emissions.json"),
            Domain::SimulationParams => include_str!("../../fixtures/simulation_params.json"),
        };
        serde_json::from_str(raw).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

/// In-memory source holding explicit `Domain -> document` entries.
///
/// Intended for tests; a domain without an entry yields
/// `SourceError::Missing`.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: HashMap<Domain, Value>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the document for a domain.
    pub fn with(mut self, domain: Domain, document: Value) -> Self {
        self.documents.insert(domain, document);
        self
    }
}

impl DataSource for InMemorySource {
    fn document(&self, domain: Domain) -> SourceResult<Value> {
        self.documents
            .get(&domain)
            .cloned()
            .ok_or(SourceError::Missing(domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_domain_identifiers() {
        assert_eq!(Domain::Tariffs.as_str(), "tariffs");
        assert_eq!(Domain::Emissions.file_name(), "emissions.json");
        assert_eq!(Domain::SimulationParams.to_string(), "simulation-params");
    }

    #[test]
    fn test_in_memory_roundtrip() {
        let doc = json!({"tariffs": []});
        let source = InMemorySource::new().with(Domain::Tariffs, doc.clone());
        assert_eq!(source.document(Domain::Tariffs).unwrap(), doc);
    }

    #[test]
    fn test_in_memory_missing_domain() {
        let source = InMemorySource::new();
        let err = source.document(Domain::Emissions).unwrap_err();
        assert!(matches!(err, SourceError::Missing(Domain::Emissions)));
    }

    #[test]
    fn test_file_source_reads_document() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("tariffs.json"),
            r#"{"tariffs": []}"#,
        )
        .unwrap();

        let source = JsonFileSource::new(tmp.path());
        let doc = source.document(Domain::Tariffs).unwrap();
        assert_eq!(doc, json!({"tariffs": []}));
    }

    #[test]
    fn test_file_source_missing_file() {
        let tmp = TempDir::new().unwrap();
        let source = JsonFileSource::new(tmp.path());
        let err = source.document(Domain::Tariffs).unwrap_err();
        match err {
            SourceError::Io { path, .. } => assert!(path.ends_with("tariffs.json")),
            other => panic!("expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_file_source_broken_json() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("emissions.json"), "{not json").unwrap();

        let source = JsonFileSource::new(tmp.path());
        let err = source.document(Domain::Emissions).unwrap_err();
        assert!(matches!(err, SourceError::Parse(_)));
    }

    #[test]
    fn test_file_source_rereads_every_call() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tariffs.json");
        let source = JsonFileSource::new(tmp.path());

        std::fs::write(&path, r#"{"tariffs": []}"#).unwrap();
        assert_eq!(source.document(Domain::Tariffs).unwrap(), json!({"tariffs": []}));

        std::fs::write(&path, r#"{"tariffs": [1]}"#).unwrap();
        assert_eq!(source.document(Domain::Tariffs).unwrap(), json!({"tariffs": [1]}));
    }

    #[test]
    fn test_fixture_source_serves_all_domains() {
        let source = FixtureSource::new();
        for domain in [Domain::Tariffs, Domain::Emissions, Domain::SimulationParams] {
            let doc = source.document(domain).unwrap();
            assert!(doc.is_object(), "{} fixture should be an object", domain);
        }
    }
}
