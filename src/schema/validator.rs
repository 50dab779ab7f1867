//! Schema interpretation against untyped JSON documents.
//!
//! The validator walks the document once, outer to inner, in field
//! declaration order, and collects every violation it finds. It never
//! mutates the document and never coerces values. A type mismatch on a
//! composite value is reported once; the mismatched value is not descended
//! into.

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

use super::errors::{ValidationReport, Violation, ViolationKind};
use super::types::{Field, FieldType, Schema};

impl Schema {
    /// Validates a document, reporting every detectable violation.
    ///
    /// Fields not declared by the schema are ignored.
    pub fn validate(&self, document: &Value) -> Result<(), ValidationReport> {
        let mut violations = Vec::new();

        match document.as_object() {
            Some(root) => validate_fields(root, self.fields(), "", &mut violations),
            None => violations.push(Violation::new(
                "$root",
                ViolationKind::TypeMismatch {
                    expected: "object",
                    actual: json_type_name(document),
                },
            )),
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationReport::new(self.name(), violations))
        }
    }
}

fn validate_fields(
    obj: &serde_json::Map<String, Value>,
    fields: &[Field],
    prefix: &str,
    out: &mut Vec<Violation>,
) {
    for field in fields {
        let path = make_path(prefix, field.name);
        match obj.get(field.name) {
            Some(value) => validate_value(value, &field.def.field_type, &path, out),
            None => {
                if field.def.required {
                    out.push(Violation::new(path, ViolationKind::MissingRequired));
                }
            }
        }
    }
}

fn validate_value(value: &Value, expected: &FieldType, path: &str, out: &mut Vec<Violation>) {
    // A present-but-null value is a mismatch for every declared type,
    // optional fields included.
    match expected {
        FieldType::String => {
            if !value.is_string() {
                out.push(mismatch(path, "string", value));
            }
        }
        FieldType::Timestamp => match value.as_str() {
            Some(raw) => {
                if DateTime::parse_from_rfc3339(raw).is_err() {
                    out.push(Violation::new(
                        path,
                        ViolationKind::MalformedTimestamp { actual: raw.into() },
                    ));
                }
            }
            None => out.push(mismatch(path, "string", value)),
        },
        FieldType::Date => match value.as_str() {
            Some(raw) => {
                if NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_err() {
                    out.push(Violation::new(
                        path,
                        ViolationKind::MalformedDate { actual: raw.into() },
                    ));
                }
            }
            None => out.push(mismatch(path, "string", value)),
        },
        FieldType::Number(bounds) => match value.as_f64() {
            Some(n) => {
                if let Err(constraint) = bounds.check(n) {
                    out.push(out_of_range(path, constraint, value));
                }
            }
            None => out.push(mismatch(path, "number", value)),
        },
        FieldType::Integer(bounds) => {
            if value.is_i64() || value.is_u64() {
                if let Some(n) = value.as_f64() {
                    if let Err(constraint) = bounds.check(n) {
                        out.push(out_of_range(path, constraint, value));
                    }
                }
            } else {
                out.push(mismatch(path, "integer", value));
            }
        }
        FieldType::Enum { allowed } => match value.as_str() {
            Some(raw) => {
                if !allowed.contains(&raw) {
                    out.push(Violation::new(
                        path,
                        ViolationKind::NotInEnum {
                            allowed,
                            actual: raw.into(),
                        },
                    ));
                }
            }
            None => out.push(mismatch(path, "string", value)),
        },
        FieldType::Array { element } => match value.as_array() {
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{}[{}]", path, index);
                    validate_value(item, element, &item_path, out);
                }
            }
            None => out.push(mismatch(path, "array", value)),
        },
        FieldType::Object { fields } => match value.as_object() {
            Some(obj) => validate_fields(obj, fields, path, out),
            None => out.push(mismatch(path, "object", value)),
        },
    }
}

fn mismatch(path: &str, expected: &'static str, actual: &Value) -> Violation {
    Violation::new(
        path,
        ViolationKind::TypeMismatch {
            expected,
            actual: json_type_name(actual),
        },
    )
}

fn out_of_range(path: &str, constraint: String, actual: &Value) -> Violation {
    Violation::new(
        path,
        ViolationKind::OutOfRange {
            constraint,
            actual: actual.to_string(),
        },
    )
}

/// Returns the JSON type name for mismatch messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                "integer"
            } else {
                "number"
            }
        }
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

#[cfg(test)]
mod tests {
    use super::super::types::{Field, NumBounds};
    use super::*;
    use serde_json::json;

    fn sample_schema() -> Schema {
        Schema::new(
            "sample",
            vec![
                Field::required("name", FieldType::String),
                Field::required("kind", FieldType::Enum { allowed: &["solar", "wind"] }),
                Field::required("rating", FieldType::Number(NumBounds::range(0.0, 100.0))),
                Field::optional("count", FieldType::Integer(NumBounds::positive())),
                Field::optional("updatedAt", FieldType::Timestamp),
                Field::optional(
                    "parts",
                    FieldType::array(FieldType::object(vec![
                        Field::required("label", FieldType::String),
                        Field::required("weight", FieldType::Number(NumBounds::positive())),
                    ])),
                ),
            ],
        )
    }

    #[test]
    fn test_valid_document_passes() {
        let doc = json!({
            "name": "Array A",
            "kind": "solar",
            "rating": 87.5,
            "count": 4,
            "updatedAt": "2024-11-05T09:30:00Z",
            "parts": [{"label": "panel", "weight": 18.2}]
        });
        assert!(sample_schema().validate(&doc).is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let doc = json!({"name": "Array A", "kind": "wind", "rating": 10.0});
        assert!(sample_schema().validate(&doc).is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let doc = json!({"kind": "solar", "rating": 50.0});
        let report = sample_schema().validate(&doc).unwrap_err();
        assert_eq!(report.violations().len(), 1);
        assert_eq!(report.first().map(|v| v.path.as_str()), Some("name"));
        assert_eq!(
            report.first().map(|v| &v.kind),
            Some(&ViolationKind::MissingRequired)
        );
    }

    #[test]
    fn test_type_mismatch_cites_expected_and_actual() {
        let doc = json!({"name": 42, "kind": "solar", "rating": 50.0});
        let report = sample_schema().validate(&doc).unwrap_err();
        assert_eq!(
            report.first().map(|v| &v.kind),
            Some(&ViolationKind::TypeMismatch {
                expected: "string",
                actual: "integer",
            })
        );
    }

    #[test]
    fn test_null_is_never_valid_even_for_optional_fields() {
        let doc = json!({"name": "A", "kind": "solar", "rating": 50.0, "count": null});
        let report = sample_schema().validate(&doc).unwrap_err();
        assert_eq!(report.first().map(|v| v.path.as_str()), Some("count"));
        assert_eq!(
            report.first().map(|v| &v.kind),
            Some(&ViolationKind::TypeMismatch {
                expected: "integer",
                actual: "null",
            })
        );
    }

    #[test]
    fn test_enum_violation_lists_allowed_set() {
        let doc = json!({"name": "A", "kind": "coal", "rating": 50.0});
        let report = sample_schema().validate(&doc).unwrap_err();
        match report.first().map(|v| &v.kind) {
            Some(ViolationKind::NotInEnum { allowed, actual }) => {
                assert_eq!(*allowed, &["solar", "wind"]);
                assert_eq!(actual, "coal");
            }
            other => panic!("expected NotInEnum, got {:?}", other),
        }
    }

    #[test]
    fn test_range_violation_cites_path() {
        let doc = json!({"name": "A", "kind": "solar", "rating": 120.0});
        let report = sample_schema().validate(&doc).unwrap_err();
        assert!(report.cites("rating"));
        match report.first().map(|v| &v.kind) {
            Some(ViolationKind::OutOfRange { constraint, actual }) => {
                assert_eq!(constraint, "between 0 and 100");
                assert_eq!(actual, "120.0");
            }
            other => panic!("expected OutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_integer_rejects_float() {
        let doc = json!({"name": "A", "kind": "solar", "rating": 50.0, "count": 2.5});
        let report = sample_schema().validate(&doc).unwrap_err();
        assert_eq!(
            report.first().map(|v| &v.kind),
            Some(&ViolationKind::TypeMismatch {
                expected: "integer",
                actual: "number",
            })
        );
    }

    #[test]
    fn test_integer_bounds_checked() {
        let doc = json!({"name": "A", "kind": "solar", "rating": 50.0, "count": 0});
        let report = sample_schema().validate(&doc).unwrap_err();
        assert!(report.cites("count"));
    }

    #[test]
    fn test_malformed_timestamp() {
        let doc = json!({
            "name": "A", "kind": "solar", "rating": 50.0,
            "updatedAt": "last tuesday"
        });
        let report = sample_schema().validate(&doc).unwrap_err();
        assert_eq!(
            report.first().map(|v| &v.kind),
            Some(&ViolationKind::MalformedTimestamp {
                actual: "last tuesday".into(),
            })
        );
    }

    #[test]
    fn test_array_element_paths_carry_index() {
        let doc = json!({
            "name": "A", "kind": "solar", "rating": 50.0,
            "parts": [
                {"label": "panel", "weight": 18.2},
                {"label": "inverter", "weight": -3.0}
            ]
        });
        let report = sample_schema().validate(&doc).unwrap_err();
        assert_eq!(
            report.first().map(|v| v.path.as_str()),
            Some("parts[1].weight")
        );
    }

    #[test]
    fn test_array_elements_validate_independently() {
        let doc = json!({
            "name": "A", "kind": "solar", "rating": 50.0,
            "parts": [
                {"weight": 1.0},
                {"label": "mount", "weight": 0.0}
            ]
        });
        let report = sample_schema().validate(&doc).unwrap_err();
        let paths: Vec<_> = report.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["parts[0].label", "parts[1].weight"]);
    }

    #[test]
    fn test_mismatched_composite_is_not_descended_into() {
        let doc = json!({"name": "A", "kind": "solar", "rating": 50.0, "parts": "none"});
        let report = sample_schema().validate(&doc).unwrap_err();
        assert_eq!(report.violations().len(), 1);
        assert_eq!(
            report.first().map(|v| &v.kind),
            Some(&ViolationKind::TypeMismatch {
                expected: "array",
                actual: "string",
            })
        );
    }

    #[test]
    fn test_non_object_root() {
        let report = sample_schema().validate(&json!([1, 2, 3])).unwrap_err();
        assert_eq!(report.first().map(|v| v.path.as_str()), Some("$root"));
    }

    #[test]
    fn test_undeclared_fields_are_ignored() {
        let doc = json!({
            "name": "A", "kind": "solar", "rating": 50.0,
            "comment": "not declared anywhere"
        });
        assert!(sample_schema().validate(&doc).is_ok());
    }

    #[test]
    fn test_violations_follow_declaration_order() {
        // name missing, kind wrong enum, rating out of range: reported in
        // the order the schema declares the fields, not document order.
        let doc = json!({"rating": -1.0, "kind": "coal"});
        let report = sample_schema().validate(&doc).unwrap_err();
        let paths: Vec<_> = report.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["name", "kind", "rating"]);
    }

    #[test]
    fn test_validation_is_deterministic() {
        let doc = json!({"rating": -1.0, "kind": "coal"});
        let schema = sample_schema();
        let first = schema.validate(&doc).unwrap_err();
        for _ in 0..50 {
            assert_eq!(schema.validate(&doc).unwrap_err(), first);
        }
    }
}
