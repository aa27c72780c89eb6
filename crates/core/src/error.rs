//! Domain error model.
//!
//! Errors carry structured data only. Rendering them for a person (translated
//! labels, highlighted form fields) is the presentation shell's job.

use serde::Serialize;
use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationKind {
    /// Empty or whitespace-only text.
    Empty,
    /// A number that must be strictly positive (and finite) was not.
    NotPositive,
    /// Text contained something other than letters.
    NotAlphabetic,
    /// A length fell outside an inclusive range.
    OutOfRange { min: usize, max: usize },
    /// The value collides with an existing identity.
    Duplicate,
}

impl core::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ViolationKind::Empty => f.write_str("must not be empty"),
            ViolationKind::NotPositive => f.write_str("must be greater than zero"),
            ViolationKind::NotAlphabetic => f.write_str("must contain letters only"),
            ViolationKind::OutOfRange { min, max } => {
                write!(f, "length must be between {min} and {max}")
            }
            ViolationKind::Duplicate => f.write_str("already exists"),
        }
    }
}

/// One field-level failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    #[serde(flatten)]
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn new(field: &'static str, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl core::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.field, self.kind)
    }
}

/// A candidate value was rejected; lists every failing field, not just the first.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("validation failed: {}", join(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// True if `field` failed with `kind`.
    pub fn has(&self, field: &str, kind: ViolationKind) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.kind == kind)
    }

    /// True if `field` failed for any reason.
    pub fn mentions(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    pub fn is_duplicate(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.kind == ViolationKind::Duplicate)
    }
}

fn join(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates field violations so callers can report all of them at once.
#[derive(Debug, Default)]
pub struct Violations(Vec<FieldViolation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `kind` against `field` unless `ok` holds.
    pub fn check(&mut self, ok: bool, field: &'static str, kind: ViolationKind) -> &mut Self {
        if !ok {
            self.0.push(FieldViolation::new(field, kind));
        }
        self
    }

    pub fn push(&mut self, field: &'static str, kind: ViolationKind) {
        self.0.push(FieldViolation::new(field, kind));
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations: self.0 })
        }
    }
}

/// A referenced identifier is absent.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[error("not found: {id}")]
pub struct NotFoundError {
    pub id: String,
}

impl NotFoundError {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Credentials were well-formed but did not match.
///
/// Deliberately says nothing about which part was wrong.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize)]
#[error("invalid credentials")]
pub struct CredentialError;

/// Domain-level error.
///
/// Every variant is recoverable: callers get it back as a value and the state
/// that produced it is unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    Credentials(#[from] CredentialError),
}
