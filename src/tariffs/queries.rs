//! Lookup accessors over the tariffs document.
//!
//! Each call runs the loader's full load-and-validate cycle; repeated
//! calls re-pay validation cost. A lookup miss is `Ok(None)` or an empty
//! vec, never an error; load failures propagate as `LoadError`.

use crate::loader::LoadResult;
use crate::source::DataSource;

use super::loader::TariffLoader;
use super::types::{Tariff, TariffType};

/// First tariff named `name`, or `None` when the name is unknown.
pub fn find_tariff_by_name(source: &dyn DataSource, name: &str) -> LoadResult<Option<Tariff>> {
    let book = TariffLoader::new(source).load()?;
    Ok(book.tariffs.into_iter().find(|t| t.name == name))
}

/// All tariffs of `tariff_type`, in document order.
pub fn find_tariffs_by_type(
    source: &dyn DataSource,
    tariff_type: TariffType,
) -> LoadResult<Vec<Tariff>> {
    let book = TariffLoader::new(source).load()?;
    Ok(book
        .tariffs
        .into_iter()
        .filter(|t| t.tariff_type == tariff_type)
        .collect())
}
