//! XML to record: the tree decoder and the `deserialize` entry points.
//!
//! The decoder walks an element against a target schema and collects a
//! [`RawFieldBag`]; it never invents values. Validation then coerces the raw
//! text, applies defaults and rejects missing required fields.

use tracing::{debug, trace};
use xmlmodel_schema::{
    Classification, Direction, RawFieldBag, RawRecord, RawValue, RecordSchema, RecordValue,
    SchemaError, SchemaRef, XmlModel, classify_field, element_name, member_name, validate,
};

use crate::config::DeserializeOptions;
use crate::element::Element;
use crate::error::XmlError;
use crate::text::parse;

/// Collects raw field bags from element trees.
#[derive(Debug, Clone)]
pub struct Decoder {
    by_alias: bool,
    max_depth: Option<usize>,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(&DeserializeOptions::default())
    }
}

impl Decoder {
    /// A decoder honouring the alias and depth settings of `options`.
    #[must_use]
    pub fn new(options: &DeserializeOptions) -> Self {
        Self {
            by_alias: options.by_alias,
            max_depth: options.max_depth,
        }
    }

    /// Decode `element` against `schema`.
    ///
    /// The root tag is not checked against the schema's element name.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError` if a field declaration cannot be mapped or
    /// nesting exceeds the limit.
    pub fn decode(
        &self,
        element: &Element,
        schema: &'static RecordSchema,
    ) -> Result<RawFieldBag, SchemaError> {
        self.decode_record(element, schema, 0)
    }

    fn decode_record(
        &self,
        element: &Element,
        schema: &'static RecordSchema,
        depth: usize,
    ) -> Result<RawFieldBag, SchemaError> {
        if let Some(limit) = self.max_depth.filter(|limit| depth > *limit) {
            return Err(SchemaError::DepthExceeded { limit });
        }
        debug!(record = schema.identifier(), tag = element.tag(), depth, "decoding record");

        let mut bag = RawFieldBag::new();
        for field in schema.fields() {
            let classification = classify_field(schema, field)?;
            let key = member_name(field, Direction::Deserialize, self.by_alias);
            trace!(
                field = field.identifier(),
                key,
                classification = classification.as_str(),
                "decoding field"
            );

            match &classification {
                Classification::Scalar => {
                    let raw = if field.is_content() {
                        element.text()
                    } else {
                        element.attribute(key)
                    };
                    if let Some(text) = raw {
                        bag.insert(key, RawValue::Text(text.to_owned()));
                    }
                }
                Classification::Record(candidates) => {
                    if let Some(record) = self.decode_single(element, candidates, depth)? {
                        bag.insert(key, RawValue::Record(record));
                    }
                }
                Classification::RecordList(candidates) => {
                    let items = self.decode_items(element, candidates, depth)?;
                    bag.insert(key, RawValue::List(items));
                }
                Classification::Mixed { records, items } => {
                    let items = self.decode_items(element, items, depth)?;
                    let raw = match self.decode_single(element, records, depth)? {
                        Some(record) if items.is_empty() => RawValue::Record(record),
                        _ => RawValue::List(items),
                    };
                    bag.insert(key, raw);
                }
            }
        }

        debug!(record = schema.identifier(), keys = bag.len(), "decoded record");
        Ok(bag)
    }

    /// The first child matching a candidate, tried in declaration order.
    fn decode_single(
        &self,
        element: &Element,
        candidates: &[SchemaRef],
        depth: usize,
    ) -> Result<Option<RawRecord>, SchemaError> {
        for candidate in candidates {
            let schema = candidate.get();
            if let Some(child) = element.find(&element_name(schema)) {
                let fields = self.decode_record(child, schema, depth + 1)?;
                return Ok(Some(RawRecord::new(schema, fields)));
            }
        }
        Ok(None)
    }

    /// Every child matching a candidate, grouped by candidate.
    fn decode_items(
        &self,
        element: &Element,
        candidates: &[SchemaRef],
        depth: usize,
    ) -> Result<Vec<RawRecord>, SchemaError> {
        let mut items = Vec::new();
        for candidate in candidates {
            let schema = candidate.get();
            for child in element.find_all(&element_name(schema)) {
                let fields = self.decode_record(child, schema, depth + 1)?;
                items.push(RawRecord::new(schema, fields));
            }
        }
        Ok(items)
    }
}

/// Deserialize XML text into a `T`.
///
/// # Errors
///
/// Returns `XmlError::Parse` for malformed text, `XmlError::Schema` if `T`
/// cannot be mapped, and `XmlError::Validation` if the data does not satisfy
/// `T`'s schema.
pub fn deserialize<T: XmlModel>(xml: &str, options: &DeserializeOptions) -> Result<T, XmlError> {
    let record = deserialize_record(T::schema(), xml, options)?;
    Ok(T::from_record(record)?)
}

/// Deserialize XML text into a validated dynamic record of `schema`.
///
/// # Errors
///
/// See [`deserialize`].
pub fn deserialize_record(
    schema: &'static RecordSchema,
    xml: &str,
    options: &DeserializeOptions,
) -> Result<RecordValue, XmlError> {
    let element = parse(xml)?;
    let bag = Decoder::new(options).decode(&element, schema)?;
    Ok(validate(schema, bag)?)
}
