//! Declarative schema for the tariffs document.
//!
//! The outer wrapper (a named collection of tariff records) is declared
//! first; each element then validates independently.

use crate::schema::{Field, FieldType, NumBounds, Schema};

/// Allowed tariff `type` values.
pub const TARIFF_TYPES: &[&str] = &["fixed", "variable"];

/// Schema for the tariffs document.
pub fn document_schema() -> Schema {
    Schema::new(
        "tariffs",
        vec![Field::required(
            "tariffs",
            FieldType::array(FieldType::object(tariff_fields())),
        )],
    )
}

fn tariff_fields() -> Vec<Field> {
    vec![
        Field::required("name", FieldType::String),
        Field::required("type", FieldType::Enum { allowed: TARIFF_TYPES }),
        Field::required("basePrice", FieldType::Number(NumBounds::positive())),
        Field::required("energyPrice", FieldType::Number(NumBounds::positive())),
        Field::optional("powerPrice", FieldType::Number(NumBounds::positive())),
        Field::optional(
            "timeRanges",
            FieldType::array(FieldType::object(time_range_fields())),
        ),
        Field::required("updatedAt", FieldType::Timestamp),
    ]
}

fn time_range_fields() -> Vec<Field> {
    // startHour and endHour are bounded independently; nothing relates the
    // two, so windows with start > end pass validation.
    vec![
        Field::required("startHour", FieldType::Integer(NumBounds::range(0.0, 23.0))),
        Field::required("endHour", FieldType::Integer(NumBounds::range(0.0, 23.0))),
        Field::required("multiplier", FieldType::Number(NumBounds::positive())),
    ]
}
