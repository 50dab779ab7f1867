//! Financial simulation parameter types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The singleton simulation-parameters document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    /// Up-front system cost.
    pub initial_investment: f64,
    /// Expected operating life, years.
    pub system_lifespan: u32,
    /// Annual maintenance cost.
    pub maintenance_cost: f64,
    /// Output lost per year, percent.
    pub annual_degradation: f64,
    /// Yearly energy price drift, percent; negative means deflation.
    pub energy_price_inflation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financing_years: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    /// Applicable incentives, in document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incentives: Option<Vec<Incentive>>,
    pub updated_at: DateTime<Utc>,
}

/// A public incentive applicable to the investment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incentive {
    pub name: String,
    #[serde(rename = "type")]
    pub incentive_type: IncentiveType,
    pub amount: f64,
    /// Cap on the claimable amount, when one applies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IncentiveType {
    Rebate,
    TaxCredit,
    Grant,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incentive_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&IncentiveType::Rebate).unwrap(),
            "\"rebate\""
        );
        assert_eq!(
            serde_json::to_string(&IncentiveType::TaxCredit).unwrap(),
            "\"taxCredit\""
        );
        assert_eq!(
            serde_json::to_string(&IncentiveType::Grant).unwrap(),
            "\"grant\""
        );
    }

    #[test]
    fn test_optional_fields_decode_as_absent() {
        let raw = serde_json::json!({
            "initialInvestment": 12500.0,
            "systemLifespan": 25,
            "maintenanceCost": 150.0,
            "annualDegradation": 0.5,
            "energyPriceInflation": 3.2,
            "updatedAt": "2024-11-05T09:30:00Z"
        });
        let params: SimulationParams = serde_json::from_value(raw).unwrap();
        assert_eq!(params.financing_rate, None);
        assert_eq!(params.incentives, None);
        assert_eq!(params.system_lifespan, 25);
    }

    #[test]
    fn test_expiration_date_decodes() {
        let raw = serde_json::json!({
            "name": "Subvención autoconsumo",
            "type": "grant",
            "amount": 3000.0,
            "expirationDate": "2026-12-31"
        });
        let incentive: Incentive = serde_json::from_value(raw).unwrap();
        assert_eq!(
            incentive.expiration_date,
            NaiveDate::from_ymd_opt(2026, 12, 31)
        );
    }
}
