//! Field classification: the XML role of a declared type.
//!
//! - [`Classification::Scalar`]: attribute (or element text for the content field)
//! - [`Classification::Record`]: one nested element
//! - [`Classification::RecordList`]: zero or more flat sibling elements
//! - [`Classification::Mixed`]: either of the two, decided by the value
//!
//! Unions are record-like as soon as one arm is record-like. Each arm keeps
//! its own role: record arms add single-element candidates and record
//! sequence arms add item candidates. Sequences must name a record element
//! type; anything else is a [`SchemaError`].

use crate::error::SchemaError;
use crate::types::{FieldDescriptor, RecordSchema, SchemaRef, TypeDescriptor};

/// The XML role of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Serialized as an attribute, or as text for the content field.
    Scalar,
    /// Serialized as one nested element of one of the candidate types.
    Record(Vec<SchemaRef>),
    /// Serialized as sibling elements, each of one of the candidate types.
    RecordList(Vec<SchemaRef>),
    /// A union with both record and record sequence arms.
    Mixed {
        /// Candidates for a single nested element.
        records: Vec<SchemaRef>,
        /// Candidates for sibling list items.
        items: Vec<SchemaRef>,
    },
}

impl Classification {
    /// Whether the field maps to child elements.
    #[must_use]
    pub fn is_record_like(&self) -> bool {
        !matches!(self, Self::Scalar)
    }

    /// Short name of the classification.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Record(_) => "record",
            Self::RecordList(_) => "record list",
            Self::Mixed { .. } => "record or record list",
        }
    }
}

/// Classify a declared type.
///
/// # Errors
///
/// Returns `SchemaError::MissingElementType` for a sequence without element
/// type and `SchemaError::NonRecordElementType` for a sequence of non-records.
pub fn classify(declared_type: &TypeDescriptor) -> Result<Classification, SchemaError> {
    match declared_type {
        TypeDescriptor::Scalar(_) | TypeDescriptor::Null => Ok(Classification::Scalar),
        TypeDescriptor::Record(schema) => Ok(Classification::Record(vec![*schema])),
        TypeDescriptor::Sequence(element) => {
            let mut candidates = Vec::new();
            sequence_candidates(element.as_deref(), &mut candidates)?;
            Ok(Classification::RecordList(candidates))
        }
        TypeDescriptor::Union(arms) => {
            let mut records = Vec::new();
            let mut items = None;
            union_candidates(arms, &mut records, &mut items)?;
            Ok(match items {
                None if records.is_empty() => Classification::Scalar,
                None => Classification::Record(records),
                Some(items) if records.is_empty() => Classification::RecordList(items),
                Some(items) => Classification::Mixed { records, items },
            })
        }
    }
}

/// Classify a field of `schema`, attributing any error to it.
///
/// # Errors
///
/// Returns `SchemaError::InField` wrapping the classification error, or
/// `SchemaError::MissingDeclaredType` when the field has no type at all.
pub fn classify_field(
    schema: &RecordSchema,
    field: &FieldDescriptor,
) -> Result<Classification, SchemaError> {
    field
        .declared_type()
        .ok_or(SchemaError::MissingDeclaredType)
        .and_then(classify)
        .map_err(|e| e.in_field(schema.identifier(), field.identifier()))
}

fn union_candidates(
    arms: &[TypeDescriptor],
    records: &mut Vec<SchemaRef>,
    items: &mut Option<Vec<SchemaRef>>,
) -> Result<(), SchemaError> {
    for arm in arms {
        match arm {
            TypeDescriptor::Scalar(_) | TypeDescriptor::Null => {}
            TypeDescriptor::Record(schema) => push_unique(records, *schema),
            TypeDescriptor::Sequence(element) => {
                sequence_candidates(element.as_deref(), items.get_or_insert_with(Vec::new))?;
            }
            TypeDescriptor::Union(nested) => union_candidates(nested, records, items)?,
        }
    }
    Ok(())
}

fn sequence_candidates(
    element: Option<&TypeDescriptor>,
    candidates: &mut Vec<SchemaRef>,
) -> Result<(), SchemaError> {
    match element.ok_or(SchemaError::MissingElementType)? {
        TypeDescriptor::Record(schema) => push_unique(candidates, *schema),
        TypeDescriptor::Union(arms) => {
            for arm in arms {
                sequence_candidates(Some(arm), candidates)?;
            }
        }
        _ => return Err(SchemaError::NonRecordElementType),
    }
    Ok(())
}

fn push_unique(candidates: &mut Vec<SchemaRef>, schema: SchemaRef) {
    if !candidates.contains(&schema) {
        candidates.push(schema);
    }
}
