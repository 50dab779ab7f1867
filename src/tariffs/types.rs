//! Tariff domain types.
//!
//! Values are created fresh on every load and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The tariffs document: a named collection of tariff records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffBook {
    pub tariffs: Vec<Tariff>,
}

impl TariffBook {
    /// First tariff whose name matches exactly, scanning in document order.
    ///
    /// If two tariffs share a name the first one wins; duplicates are
    /// neither resolved nor rejected.
    pub fn find_by_name(&self, name: &str) -> Option<&Tariff> {
        self.tariffs.iter().find(|t| t.name == name)
    }

    /// All tariffs of the given type, preserving document order.
    pub fn of_type(&self, tariff_type: TariffType) -> Vec<&Tariff> {
        self.tariffs
            .iter()
            .filter(|t| t.tariff_type == tariff_type)
            .collect()
    }
}

/// A retail electricity tariff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tariff {
    pub name: String,
    #[serde(rename = "type")]
    pub tariff_type: TariffType,
    /// Fixed component of the bill.
    pub base_price: f64,
    /// Price per kWh consumed.
    pub energy_price: f64,
    /// Contracted-power component, when the tariff has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_price: Option<f64>,
    /// Hour-of-day multipliers, in document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_ranges: Option<Vec<TimeRange>>,
    pub updated_at: DateTime<Utc>,
}

/// Pricing model of a tariff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TariffType {
    Fixed,
    Variable,
}

/// An hour window with a price multiplier.
///
/// startHour and endHour are independent 0-23 values; a window whose start
/// exceeds its end is carried as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    pub start_hour: u8,
    pub end_hour: u8,
    pub multiplier: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn tariff(name: &str, tariff_type: TariffType) -> Tariff {
        Tariff {
            name: name.into(),
            tariff_type,
            base_price: 3.45,
            energy_price: 0.14,
            power_price: None,
            time_ranges: None,
            updated_at: Utc.with_ymd_and_hms(2024, 11, 5, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_find_by_name_exact_match() {
        let book = TariffBook {
            tariffs: vec![tariff("Tarifa Base", TariffType::Fixed)],
        };
        assert!(book.find_by_name("Tarifa Base").is_some());
        assert!(book.find_by_name("Tarifa").is_none());
        assert!(book.find_by_name("tarifa base").is_none());
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        let mut first = tariff("Doble", TariffType::Fixed);
        first.base_price = 1.0;
        let mut second = tariff("Doble", TariffType::Variable);
        second.base_price = 2.0;

        let book = TariffBook {
            tariffs: vec![first, second],
        };
        let found = book.find_by_name("Doble").unwrap();
        assert_eq!(found.base_price, 1.0);
    }

    #[test]
    fn test_of_type_preserves_order() {
        let book = TariffBook {
            tariffs: vec![
                tariff("A", TariffType::Variable),
                tariff("B", TariffType::Fixed),
                tariff("C", TariffType::Variable),
            ],
        };
        let variable = book.of_type(TariffType::Variable);
        let names: Vec<_> = variable.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["A", "C"]);
    }

    #[test]
    fn test_type_wire_names() {
        assert_eq!(serde_json::to_string(&TariffType::Fixed).unwrap(), "\"fixed\"");
        assert_eq!(
            serde_json::to_string(&TariffType::Variable).unwrap(),
            "\"variable\""
        );
    }
}
