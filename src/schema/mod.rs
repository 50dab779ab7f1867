//! Declarative document validation.
//!
//! A schema is data, not code: an ordered list of field declarations
//! interpreted by a generic validator. Validation is exhaustive and
//! deterministic: every violation is reported, outer to inner, in field
//! declaration order.
//!
//! # Design Principles
//!
//! - Documents are accepted whole or rejected whole
//! - No coercion, no defaults, no mutation of the document
//! - Absent optional fields are valid; present ones obey their own rules
//! - Error paths name the offending field, including array indices

mod errors;
mod types;
mod validator;

pub use errors::{ValidationReport, Violation, ViolationKind};
pub use types::{Field, FieldDef, FieldType, NumBounds, Schema};
