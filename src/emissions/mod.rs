//! Emissions domain: energy sources, conversion factors, and their
//! lookup accessors.

mod loader;
mod queries;
mod schema;
mod types;

pub use loader::EmissionsLoader;
pub use queries::{
    find_conversion_factor, find_conversion_factors_by_context, find_energy_source_by_name,
    find_energy_sources_by_type,
};
pub use schema::document_schema;
pub use types::{
    ConversionContext, ConversionFactor, EmissionsInventory, EnergySource, EnergySourceType,
};
