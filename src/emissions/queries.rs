//! Lookup accessors over the emissions document.
//!
//! Each call runs the loader's full load-and-validate cycle; repeated
//! calls re-pay validation cost. A lookup miss is `Ok(None)` or an empty
//! vec, never an error; load failures propagate as `LoadError`.

use crate::loader::LoadResult;
use crate::source::DataSource;

use super::loader::EmissionsLoader;
use super::types::{ConversionContext, ConversionFactor, EnergySource, EnergySourceType};

/// First energy source named `name`, or `None` when the name is unknown.
pub fn find_energy_source_by_name(
    source: &dyn DataSource,
    name: &str,
) -> LoadResult<Option<EnergySource>> {
    let inventory = EmissionsLoader::new(source).load()?;
    Ok(inventory.energy_sources.into_iter().find(|s| s.name == name))
}

/// All energy sources of `source_type`, in document order.
pub fn find_energy_sources_by_type(
    source: &dyn DataSource,
    source_type: EnergySourceType,
) -> LoadResult<Vec<EnergySource>> {
    let inventory = EmissionsLoader::new(source).load()?;
    Ok(inventory
        .energy_sources
        .into_iter()
        .filter(|s| s.source_type == source_type)
        .collect())
}

/// Factor for the exact (fromUnit, toUnit) pair, or `None`.
pub fn find_conversion_factor(
    source: &dyn DataSource,
    from_unit: &str,
    to_unit: &str,
) -> LoadResult<Option<ConversionFactor>> {
    let inventory = EmissionsLoader::new(source).load()?;
    Ok(inventory
        .conversion_factors
        .into_iter()
        .find(|f| f.from_unit == from_unit && f.to_unit == to_unit))
}

/// All factors tagged with `context`, in document order.
pub fn find_conversion_factors_by_context(
    source: &dyn DataSource,
    context: ConversionContext,
) -> LoadResult<Vec<ConversionFactor>> {
    let inventory = EmissionsLoader::new(source).load()?;
    Ok(inventory
        .conversion_factors
        .into_iter()
        .filter(|f| f.context == Some(context))
        .collect())
}
