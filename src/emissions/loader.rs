//! Emissions document loader.

use crate::loader::{self, LoadResult};
use crate::source::{DataSource, Domain};

use super::schema;
use super::types::EmissionsInventory;

/// Loads and validates the emissions document from an injected source.
///
/// Every call re-reads and re-validates; nothing is cached between calls.
pub struct EmissionsLoader<'a> {
    source: &'a dyn DataSource,
}

impl<'a> EmissionsLoader<'a> {
    /// Creates a loader over the given source.
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    /// Runs one full load-and-validate cycle.
    pub fn load(&self) -> LoadResult<EmissionsInventory> {
        loader::load_document(self.source, Domain::Emissions, &schema::document_schema())
    }
}
