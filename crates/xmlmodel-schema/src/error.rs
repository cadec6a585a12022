//! Error types for schema classification and validation.

use std::fmt;

/// The declared shape of a record type is not supported.
///
/// Schema errors are programming-time defects; retrying never helps.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A list field has no element type.
    #[error("list field requires an element type")]
    MissingElementType,

    /// A list field's element type is not a record type.
    #[error("list field element type must be a record type")]
    NonRecordElementType,

    /// A field has no declared type at all.
    #[error("field has no declared type")]
    MissingDeclaredType,

    /// A value's shape contradicts the field classification.
    #[error("expected {expected} value, found {found}")]
    ValueMismatch {
        /// What the classification admits.
        expected: &'static str,
        /// What the value holds.
        found: &'static str,
    },

    /// Record nesting is deeper than the configured limit.
    #[error("record nesting exceeds the depth limit of {limit}")]
    DepthExceeded {
        /// The configured limit.
        limit: usize,
    },

    /// An error attributed to one field of one record type.
    #[error("invalid field `{record}.{field}`: {source}")]
    InField {
        /// Record type identifier.
        record: String,
        /// Field identifier.
        field: String,
        /// The underlying error.
        #[source]
        source: Box<SchemaError>,
    },
}

impl SchemaError {
    /// Attribute this error to `record.field`.
    #[must_use]
    pub fn in_field(self, record: &str, field: &str) -> Self {
        Self::InField {
            record: record.to_owned(),
            field: field.to_owned(),
            source: Box::new(self),
        }
    }

    /// The innermost error, skipping field attribution.
    #[must_use]
    pub fn root_cause(&self) -> &SchemaError {
        match self {
            Self::InField { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// One offending field reported by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Dotted path to the field (`inner.value`, `items.1.name`).
    pub location: String,
    /// What is wrong with it.
    pub message: String,
}

impl FieldError {
    /// An error at `location`.
    #[must_use]
    pub fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Prefix the location with `parent`.
    #[must_use]
    pub fn nested_under(mut self, parent: &str) -> Self {
        self.location = if self.location.is_empty() {
            parent.to_owned()
        } else {
            format!("{parent}.{}", self.location)
        };
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.location.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.location, self.message)
        }
    }
}

/// Raw data does not satisfy a record schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} for {record}: {}", count(.errors), join(.errors))]
pub struct ValidationError {
    /// Record type identifier.
    pub record: String,
    /// Every offending field.
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// A validation error listing `errors`.
    #[must_use]
    pub fn new(record: impl Into<String>, errors: Vec<FieldError>) -> Self {
        Self {
            record: record.into(),
            errors,
        }
    }

    /// A validation error with a single field error.
    #[must_use]
    pub fn single(
        record: impl Into<String>,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::new(record, vec![FieldError::new(location, message)])
    }

    /// Whether any error is reported at exactly `location`.
    #[must_use]
    pub fn has_error_at(&self, location: &str) -> bool {
        self.errors.iter().any(|e| e.location == location)
    }
}

fn count(errors: &[FieldError]) -> String {
    match errors.len() {
        1 => "1 validation error".to_owned(),
        n => format!("{n} validation errors"),
    }
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
