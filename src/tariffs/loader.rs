//! Tariff document loader.

use crate::loader::{self, LoadResult};
use crate::source::{DataSource, Domain};

use super::schema;
use super::types::TariffBook;

/// Loads and validates the tariffs document from an injected source.
///
/// Every call re-reads and re-validates; nothing is cached between calls.
pub struct TariffLoader<'a> {
    source: &'a dyn DataSource,
}

impl<'a> TariffLoader<'a> {
    /// Creates a loader over the given source.
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    /// Runs one full load-and-validate cycle.
    pub fn load(&self) -> LoadResult<TariffBook> {
        loader::load_document(self.source, Domain::Tariffs, &schema::document_schema())
    }
}
