//! XML name resolution for record types and fields.

use crate::types::{FieldDescriptor, RecordSchema};

/// Serialization direction, selecting which alias applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Record to XML.
    Serialize,
    /// XML to record.
    Deserialize,
}

/// The element name of a record type.
///
/// Precedence: explicit name, then the derivation function applied to the
/// identifier, then the identifier verbatim.
#[must_use]
pub fn element_name(schema: &RecordSchema) -> String {
    if let Some(name) = schema.xml_name() {
        return name.to_owned();
    }
    match schema.name_function() {
        Some(derive) => derive(schema.identifier()),
        None => schema.identifier().to_owned(),
    }
}

/// The attribute (or bag key) name of a field.
///
/// The alias for `direction` wins when `use_alias` is set and one is defined.
#[must_use]
pub fn member_name(field: &FieldDescriptor, direction: Direction, use_alias: bool) -> &str {
    let alias = match direction {
        Direction::Serialize => field.serialization_alias(),
        Direction::Deserialize => field.validation_alias(),
    };
    match alias {
        Some(alias) if use_alias => alias,
        _ => field.identifier(),
    }
}
