//! Schema type definitions.
//!
//! Supported field types:
//! - string: UTF-8 string
//! - timestamp: RFC 3339 timestamp carried as a string
//! - date: YYYY-MM-DD calendar date carried as a string
//! - number: 64-bit float with optional bounds (integers accepted)
//! - integer: 64-bit integer with optional bounds (floats rejected)
//! - enum: closed set of string values
//! - array: homogeneous array, each element validated independently
//! - object: nested object with its own ordered field list

/// Numeric bounds attached to number and integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumBounds {
    /// Lower bound, if any.
    pub min: Option<f64>,
    /// Upper bound (inclusive), if any.
    pub max: Option<f64>,
    /// Whether the lower bound itself is excluded.
    pub min_exclusive: bool,
}

impl NumBounds {
    /// No constraint at all.
    pub const fn unbounded() -> Self {
        Self {
            min: None,
            max: None,
            min_exclusive: false,
        }
    }

    /// Strictly greater than zero.
    pub const fn positive() -> Self {
        Self {
            min: Some(0.0),
            max: None,
            min_exclusive: true,
        }
    }

    /// Zero or greater.
    pub const fn non_negative() -> Self {
        Self {
            min: Some(0.0),
            max: None,
            min_exclusive: false,
        }
    }

    /// Inclusive range.
    pub const fn range(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            min_exclusive: false,
        }
    }

    /// Checks a value, returning the violated constraint description.
    pub fn check(&self, value: f64) -> Result<(), String> {
        if let Some(min) = self.min {
            let below = if self.min_exclusive {
                value <= min
            } else {
                value < min
            };
            if below {
                return Err(self.describe());
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(self.describe());
            }
        }
        Ok(())
    }

    /// Human-readable constraint, used in range violations.
    pub fn describe(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) if self.min_exclusive => {
                format!("> {} and <= {}", min, max)
            }
            (Some(min), Some(max)) => format!("between {} and {}", min, max),
            (Some(min), None) if self.min_exclusive => format!("> {}", min),
            (Some(min), None) => format!(">= {}", min),
            (None, Some(max)) => format!("<= {}", max),
            (None, None) => "any".into(),
        }
    }
}

/// Supported field types.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldType {
    /// UTF-8 string.
    String,
    /// RFC 3339 timestamp carried as a string.
    Timestamp,
    /// Calendar date carried as a YYYY-MM-DD string.
    Date,
    /// 64-bit float with optional bounds. Integer values are accepted.
    Number(NumBounds),
    /// 64-bit integer with optional bounds. Float values are rejected.
    Integer(NumBounds),
    /// Closed string enumeration.
    Enum {
        /// The allowed wire values.
        allowed: &'static [&'static str],
    },
    /// Homogeneous array; each element validates independently.
    Array {
        /// Element type (boxed to allow recursive types).
        element: Box<FieldType>,
    },
    /// Nested object with its own ordered field list.
    Object {
        /// Nested field declarations, in declaration order.
        fields: Vec<Field>,
    },
}

impl FieldType {
    /// Convenience constructor for array fields.
    pub fn array(element: FieldType) -> Self {
        FieldType::Array {
            element: Box::new(element),
        }
    }

    /// Convenience constructor for object fields.
    pub fn object(fields: Vec<Field>) -> Self {
        FieldType::Object { fields }
    }

    /// Returns the type name used in mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String | FieldType::Timestamp | FieldType::Date | FieldType::Enum { .. } => {
                "string"
            }
            FieldType::Number(_) => "number",
            FieldType::Integer(_) => "integer",
            FieldType::Array { .. } => "array",
            FieldType::Object { .. } => "object",
        }
    }
}

/// A field declaration: type plus required/optional status.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Field data type.
    pub field_type: FieldType,
    /// Whether the field must be present.
    pub required: bool,
}

/// A named field. Declaration order is significant: it is the order
/// violations are reported in.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Wire name of the field.
    pub name: &'static str,
    /// The field's declaration.
    pub def: FieldDef,
}

impl Field {
    /// Declares a required field.
    pub fn required(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            def: FieldDef {
                field_type,
                required: true,
            },
        }
    }

    /// Declares an optional field.
    pub fn optional(name: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            def: FieldDef {
                field_type,
                required: false,
            },
        }
    }
}

/// A complete document schema: a name for diagnostics plus the root
/// object's ordered fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    name: &'static str,
    fields: Vec<Field>,
}

impl Schema {
    /// Creates a new schema.
    pub fn new(name: &'static str, fields: Vec<Field>) -> Self {
        Self { name, fields }
    }

    /// Returns the schema name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the root fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }
}
