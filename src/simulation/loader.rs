//! Simulation-parameters document loader.

use crate::loader::{self, LoadResult};
use crate::source::{DataSource, Domain};

use super::schema;
use super::types::SimulationParams;

/// Loads and validates the simulation-parameters document from an
/// injected source.
///
/// Every call re-reads and re-validates; nothing is cached between calls.
pub struct SimulationParamsLoader<'a> {
    source: &'a dyn DataSource,
}

impl<'a> SimulationParamsLoader<'a> {
    /// Creates a loader over the given source.
    pub fn new(source: &'a dyn DataSource) -> Self {
        Self { source }
    }

    /// Runs one full load-and-validate cycle.
    pub fn load(&self) -> LoadResult<SimulationParams> {
        loader::load_document(
            self.source,
            Domain::SimulationParams,
            &schema::document_schema(),
        )
    }
}
