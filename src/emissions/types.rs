//! Emissions domain types: energy sources and unit conversion factors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The emissions document: generation sources plus unit conversions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionsInventory {
    pub energy_sources: Vec<EnergySource>,
    pub conversion_factors: Vec<ConversionFactor>,
}

impl EmissionsInventory {
    /// First source whose name matches exactly (first match wins on
    /// duplicates).
    pub fn find_source_by_name(&self, name: &str) -> Option<&EnergySource> {
        self.energy_sources.iter().find(|s| s.name == name)
    }

    /// All sources of the given type, preserving document order.
    pub fn sources_of_type(&self, source_type: EnergySourceType) -> Vec<&EnergySource> {
        self.energy_sources
            .iter()
            .filter(|s| s.source_type == source_type)
            .collect()
    }

    /// Factor for the exact (fromUnit, toUnit) pair.
    pub fn find_factor(&self, from_unit: &str, to_unit: &str) -> Option<&ConversionFactor> {
        self.conversion_factors
            .iter()
            .find(|f| f.from_unit == from_unit && f.to_unit == to_unit)
    }

    /// All factors tagged with the given context, preserving document order.
    pub fn factors_in_context(&self, context: ConversionContext) -> Vec<&ConversionFactor> {
        self.conversion_factors
            .iter()
            .filter(|f| f.context == Some(context))
            .collect()
    }
}

/// A generation technology and its emission profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergySource {
    pub name: String,
    #[serde(rename = "type")]
    pub source_type: EnergySourceType,
    /// Operating emissions, kg CO2 per kWh generated.
    #[serde(rename = "co2PerKWh")]
    pub co2_per_kwh: f64,
    /// Cradle-to-grave emissions, g CO2-eq per kWh.
    pub lifecycle_emissions: f64,
    /// Net conversion efficiency, percent.
    pub conversion_efficiency: f64,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergySourceType {
    Renewable,
    Fossil,
    Nuclear,
    Hybrid,
}

/// A unit conversion keyed by the (fromUnit, toUnit) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionFactor {
    pub from_unit: String,
    pub to_unit: String,
    pub factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ConversionContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionContext {
    Energy,
    Emissions,
    Power,
}
