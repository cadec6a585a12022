//! Record to XML: the tree encoder and the `serialize` entry points.
//!
//! Each record becomes one element named after its schema. Fields are
//! visited in declaration order with the content field last:
//!
//! - scalar values become attributes (or the element text for the content field)
//! - record values become one child element
//! - list values become one flat sibling child per item, without a wrapper
//!
//! Null values are skipped. Every field is classified before its value is
//! looked at, so an unsupported declaration fails even for empty records.

use tracing::{debug, trace};
use xmlmodel_schema::{
    Classification, Direction, FieldDescriptor, RecordSchema, RecordValue, SchemaError, Value,
    XmlModel, classify_field, element_name, member_name,
};

use crate::config::SerializeOptions;
use crate::element::Element;
use crate::error::XmlError;
use crate::text::render;

/// Builds element trees from record values.
#[derive(Debug, Clone, Default)]
pub struct Encoder {
    by_alias: bool,
    submodel_by_alias: bool,
    max_depth: Option<usize>,
}

impl Encoder {
    /// An encoder honouring the alias and depth settings of `options`.
    #[must_use]
    pub fn new(options: &SerializeOptions) -> Self {
        Self {
            by_alias: options.by_alias,
            submodel_by_alias: options.submodel_by_alias,
            max_depth: options.max_depth,
        }
    }

    /// Encode `record` as an element tree.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if a field declaration cannot be mapped, a value
    /// contradicts its field's classification, or nesting exceeds the limit.
    pub fn encode(&self, record: &RecordValue) -> Result<Element, SchemaError> {
        self.encode_record(record, 0)
    }

    fn encode_record(&self, record: &RecordValue, depth: usize) -> Result<Element, SchemaError> {
        if let Some(limit) = self.max_depth.filter(|limit| depth > *limit) {
            return Err(SchemaError::DepthExceeded { limit });
        }

        let schema = record.schema();
        let mut element = Element::new(element_name(schema));
        debug!(record = schema.identifier(), tag = element.tag(), depth, "encoding record");

        let mut content = None;
        for field in schema.fields() {
            let classification = classify_field(schema, field)?;
            if field.is_content() {
                content = Some((field, classification));
                continue;
            }
            self.encode_field(&mut element, schema, field, &classification, record, depth)?;
        }
        if let Some((field, classification)) = content {
            self.encode_field(&mut element, schema, field, &classification, record, depth)?;
        }

        Ok(element)
    }

    fn encode_field(
        &self,
        element: &mut Element,
        schema: &RecordSchema,
        field: &FieldDescriptor,
        classification: &Classification,
        record: &RecordValue,
        depth: usize,
    ) -> Result<(), SchemaError> {
        let value = match record.get(field.identifier()) {
            None | Some(Value::Null) => return Ok(()),
            Some(value) => value,
        };
        trace!(
            field = field.identifier(),
            classification = classification.as_str(),
            value = value.kind(),
            "encoding field"
        );
        let mismatch = |expected: &'static str, found: &Value| {
            SchemaError::ValueMismatch {
                expected,
                found: found.kind(),
            }
            .in_field(schema.identifier(), field.identifier())
        };

        match (classification, value) {
            (Classification::Record(_) | Classification::Mixed { .. }, Value::Record(nested)) => {
                element.push_child(self.encode_child(field, nested, depth)?);
            }
            (Classification::RecordList(_) | Classification::Mixed { .. }, Value::List(items)) => {
                for item in items {
                    let Value::Record(nested) = item else {
                        return Err(mismatch("record", item));
                    };
                    element.push_child(self.encode_child(field, nested, depth)?);
                }
            }
            (Classification::Mixed { .. }, other) => {
                return Err(mismatch("record or list", other));
            }
            (Classification::Scalar | Classification::Record(_), scalar) => {
                let Some(text) = scalar.to_text() else {
                    return Err(mismatch("scalar", scalar));
                };
                if field.is_content() {
                    element.set_text(Some(text));
                } else {
                    let name = member_name(field, Direction::Serialize, self.by_alias);
                    element.set_attribute(name, text);
                }
            }
            (Classification::RecordList(_), other) => return Err(mismatch("list", other)),
        }
        Ok(())
    }

    fn encode_child(
        &self,
        field: &FieldDescriptor,
        nested: &RecordValue,
        depth: usize,
    ) -> Result<Element, SchemaError> {
        let mut child = self.encode_record(nested, depth + 1)?;
        if self.submodel_by_alias {
            if let Some(alias) = field.serialization_alias() {
                child.set_tag(alias);
            }
        }
        Ok(child)
    }
}

/// Serialize `value` as XML text.
///
/// # Errors
///
/// Returns `XmlError::Schema` if the record type cannot be mapped to XML.
pub fn serialize<T: XmlModel>(value: &T, options: &SerializeOptions) -> Result<String, XmlError> {
    serialize_record(&value.to_record(), options)
}

/// Serialize a dynamic record as XML text.
///
/// # Errors
///
/// Returns `XmlError::Schema` if the record type cannot be mapped to XML.
pub fn serialize_record(
    record: &RecordValue,
    options: &SerializeOptions,
) -> Result<String, XmlError> {
    let element = Encoder::new(options).encode(record)?;
    render(&element, options.include_declaration, options.indent)
}
