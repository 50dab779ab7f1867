//! Tariffs domain: schema, loader, and lookup accessors.

mod loader;
mod queries;
mod schema;
mod types;

pub use loader::TariffLoader;
pub use queries::{find_tariff_by_name, find_tariffs_by_type};
pub use schema::document_schema;
pub use types::{Tariff, TariffBook, TariffType, TimeRange};
