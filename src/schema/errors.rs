//! Validation failure types.
//!
//! A validation pass never stops at the first problem: it walks the whole
//! document and reports every violation it can detect. The report order is
//! deterministic: outer to inner, field declaration order, array index
//! order.

use std::fmt;

/// What went wrong at a single field path.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationKind {
    /// Value has the wrong JSON type.
    TypeMismatch {
        /// The declared type.
        expected: &'static str,
        /// The JSON type actually found.
        actual: &'static str,
    },
    /// Numeric value is outside its declared bounds.
    OutOfRange {
        /// Human-readable constraint, e.g. "> 0".
        constraint: String,
        /// The offending value.
        actual: String,
    },
    /// String value is not a member of the declared enumeration.
    NotInEnum {
        /// The allowed wire values.
        allowed: &'static [&'static str],
        /// The value actually found.
        actual: String,
    },
    /// A required field is absent.
    MissingRequired,
    /// String value is not an RFC 3339 timestamp.
    MalformedTimestamp {
        /// The value actually found.
        actual: String,
    },
    /// String value is not a YYYY-MM-DD date.
    MalformedDate {
        /// The value actually found.
        actual: String,
    },
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::TypeMismatch { expected, actual } => {
                write!(f, "expected {}, got {}", expected, actual)
            }
            ViolationKind::OutOfRange { constraint, actual } => {
                write!(f, "expected number {}, got {}", constraint, actual)
            }
            ViolationKind::NotInEnum { allowed, actual } => {
                write!(f, "expected one of [{}], got '{}'", allowed.join(", "), actual)
            }
            ViolationKind::MissingRequired => write!(f, "required field is missing"),
            ViolationKind::MalformedTimestamp { actual } => {
                write!(f, "expected RFC 3339 timestamp, got '{}'", actual)
            }
            ViolationKind::MalformedDate { actual } => {
                write!(f, "expected YYYY-MM-DD date, got '{}'", actual)
            }
        }
    }
}

/// A single schema violation at a concrete field path
/// (e.g. `tariffs[2].timeRanges[0].endHour`).
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Path of the offending field, indices included.
    pub path: String,
    /// The kind of failure.
    pub kind: ViolationKind,
}

impl Violation {
    /// Creates a violation at the given path.
    pub fn new(path: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "field '{}': {}", self.path, self.kind)
    }
}

/// Every violation found in one validation pass, in report order.
///
/// Never empty: a clean pass returns `Ok(())` instead of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    schema: &'static str,
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub(crate) fn new(schema: &'static str, violations: Vec<Violation>) -> Self {
        Self { schema, violations }
    }

    /// Name of the schema the document was validated against.
    pub fn schema(&self) -> &'static str {
        self.schema
    }

    /// All violations, in report order.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The first violation, if any.
    pub fn first(&self) -> Option<&Violation> {
        self.violations.first()
    }

    /// Whether any violation path contains the given fragment.
    pub fn cites(&self, path_fragment: &str) -> bool {
        self.violations.iter().any(|v| v.path.contains(path_fragment))
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} violation(s) against '{}'",
            self.violations.len(),
            self.schema
        )?;
        for violation in &self.violations {
            write!(f, "; {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}
