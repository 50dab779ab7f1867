//! Declarative schema for the simulation-parameters document.

use crate::schema::{Field, FieldType, NumBounds, Schema};

/// Allowed incentive `type` values.
pub const INCENTIVE_TYPES: &[&str] = &["rebate", "taxCredit", "grant"];

/// Schema for the simulation-parameters document.
pub fn document_schema() -> Schema {
    Schema::new(
        "simulation-params",
        vec![
            Field::required(
                "initialInvestment",
                FieldType::Number(NumBounds::positive()),
            ),
            Field::required("systemLifespan", FieldType::Integer(NumBounds::positive())),
            Field::required(
                "maintenanceCost",
                FieldType::Number(NumBounds::non_negative()),
            ),
            Field::required(
                "annualDegradation",
                FieldType::Number(NumBounds::range(0.0, 100.0)),
            ),
            Field::required(
                "energyPriceInflation",
                FieldType::Number(NumBounds::range(-100.0, 100.0)),
            ),
            Field::optional("financingRate", FieldType::Number(NumBounds::non_negative())),
            Field::optional("financingYears", FieldType::Integer(NumBounds::positive())),
            Field::optional("taxRate", FieldType::Number(NumBounds::range(0.0, 100.0))),
            Field::optional(
                "incentives",
                FieldType::array(FieldType::object(incentive_fields())),
            ),
            Field::required("updatedAt", FieldType::Timestamp),
        ],
    )
}

fn incentive_fields() -> Vec<Field> {
    vec![
        Field::required("name", FieldType::String),
        Field::required("type", FieldType::Enum { allowed: INCENTIVE_TYPES }),
        Field::required("amount", FieldType::Number(NumBounds::positive())),
        Field::optional("maxLimit", FieldType::Number(NumBounds::positive())),
        Field::optional("expirationDate", FieldType::Date),
    ]
}
