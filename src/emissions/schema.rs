//! Declarative schema for the emissions document.

use crate::schema::{Field, FieldType, NumBounds, Schema};

/// Allowed energy source `type` values.
pub const ENERGY_SOURCE_TYPES: &[&str] = &["renewable", "fossil", "nuclear", "hybrid"];

/// Allowed conversion factor `context` values.
pub const CONVERSION_CONTEXTS: &[&str] = &["energy", "emissions", "power"];

/// Schema for the emissions document.
pub fn document_schema() -> Schema {
    Schema::new(
        "emissions",
        vec![
            Field::required(
                "energySources",
                FieldType::array(FieldType::object(energy_source_fields())),
            ),
            Field::required(
                "conversionFactors",
                FieldType::array(FieldType::object(conversion_factor_fields())),
            ),
        ],
    )
}

fn energy_source_fields() -> Vec<Field> {
    vec![
        Field::required("name", FieldType::String),
        Field::required("type", FieldType::Enum { allowed: ENERGY_SOURCE_TYPES }),
        Field::required("co2PerKWh", FieldType::Number(NumBounds::non_negative())),
        Field::required(
            "lifecycleEmissions",
            FieldType::Number(NumBounds::non_negative()),
        ),
        Field::required(
            "conversionEfficiency",
            FieldType::Number(NumBounds::range(0.0, 100.0)),
        ),
        Field::required("updatedAt", FieldType::Timestamp),
    ]
}

fn conversion_factor_fields() -> Vec<Field> {
    vec![
        Field::required("fromUnit", FieldType::String),
        Field::required("toUnit", FieldType::String),
        Field::required("factor", FieldType::Number(NumBounds::positive())),
        Field::optional("context", FieldType::Enum { allowed: CONVERSION_CONTEXTS }),
        Field::optional("notes", FieldType::String),
    ]
}
