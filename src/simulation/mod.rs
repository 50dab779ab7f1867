//! Simulation-parameters domain: a singleton document, so `load()` is the
//! whole accessor surface.

mod loader;
mod schema;
mod types;

pub use loader::SimulationParamsLoader;
pub use schema::document_schema;
pub use types::{Incentive, IncentiveType, SimulationParams};
