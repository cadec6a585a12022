//! Raw field bags and schema-driven validation.
//!
//! The decoder produces a [`RawFieldBag`] holding raw attribute/text strings
//! and nested raw records. [`validate`] checks it against the target schema:
//! it resolves aliases, coerces scalar text to the declared kind, applies
//! defaults, reports missing required fields, and collects every offending
//! field before failing.

use tracing::debug;

use crate::error::{FieldError, ValidationError};
use crate::types::{FieldDescriptor, RecordSchema, ScalarKind, TypeDescriptor};
use crate::value::{RecordValue, Value};

/// A raw, unvalidated field value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// Attribute value or element text.
    Text(String),
    /// A nested element decoded against one candidate schema.
    Record(RawRecord),
    /// Sibling elements decoded against candidate schemas.
    List(Vec<RawRecord>),
}

impl RawValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Record(_) => "record",
            Self::List(_) => "list",
        }
    }
}

/// A nested raw record together with the schema it was decoded against.
#[derive(Debug, Clone)]
pub struct RawRecord {
    schema: &'static RecordSchema,
    fields: RawFieldBag,
}

impl RawRecord {
    /// A raw record of `schema`.
    #[must_use]
    pub fn new(schema: &'static RecordSchema, fields: RawFieldBag) -> Self {
        Self { schema, fields }
    }

    /// The schema that matched.
    #[must_use]
    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// The raw fields.
    #[must_use]
    pub fn fields(&self) -> &RawFieldBag {
        &self.fields
    }
}

impl PartialEq for RawRecord {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.fields == other.fields
    }
}

/// Ordered mapping from bag key to raw value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawFieldBag {
    entries: Vec<(String, RawValue)>,
}

impl RawFieldBag {
    /// An empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: RawValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// The value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&RawValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Remove and return the value under `key`.
    pub fn remove(&mut self, key: &str) -> Option<RawValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validate `bag` against `schema`, producing a complete [`RecordValue`].
///
/// Keys are looked up by the field's validation alias first, then by its
/// identifier. Keys matching no field are ignored.
///
/// # Errors
///
/// Returns `ValidationError` listing every missing or invalid field,
/// including those of nested records.
pub fn validate(
    schema: &'static RecordSchema,
    mut bag: RawFieldBag,
) -> Result<RecordValue, ValidationError> {
    let mut record = RecordValue::new(schema);
    let mut errors = Vec::new();

    for field in schema.fields() {
        match take_raw(&mut bag, field) {
            Some(raw) => match coerce(field.declared_type(), raw) {
                Ok(value) => record.set(field.identifier(), value),
                Err(field_errors) => errors.extend(
                    field_errors
                        .into_iter()
                        .map(|e| e.nested_under(field.identifier())),
                ),
            },
            None => {
                if let Some(default) = field.default_value() {
                    record.set(field.identifier(), default.clone());
                } else if field.is_required() {
                    errors.push(FieldError::new(field.identifier(), "field required"));
                } else {
                    record.set(field.identifier(), Value::Null);
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(record)
    } else {
        debug!(
            record = schema.identifier(),
            errors = errors.len(),
            "validation failed"
        );
        Err(ValidationError::new(schema.identifier(), errors))
    }
}

fn take_raw(bag: &mut RawFieldBag, field: &FieldDescriptor) -> Option<RawValue> {
    field
        .validation_alias()
        .and_then(|alias| bag.remove(alias))
        .or_else(|| bag.remove(field.identifier()))
}

fn coerce(
    declared_type: Option<&TypeDescriptor>,
    raw: RawValue,
) -> Result<Value, Vec<FieldError>> {
    let Some(declared_type) = declared_type else {
        return coerce_untyped(raw);
    };

    match (declared_type, raw) {
        (TypeDescriptor::Scalar(kind), RawValue::Text(text)) => {
            coerce_scalar(*kind, text).map_err(|msg| vec![FieldError::new("", msg)])
        }
        (TypeDescriptor::Record(expected), RawValue::Record(record)) => {
            if expected.is(record.schema) {
                validate_nested(record)
            } else {
                Err(vec![FieldError::new(
                    "",
                    format!(
                        "expected record {}, found record {}",
                        expected.get().identifier(),
                        record.schema.identifier()
                    ),
                )])
            }
        }
        (TypeDescriptor::Sequence(element), RawValue::List(items)) => {
            coerce_list(element.as_deref(), items)
        }
        (TypeDescriptor::Union(arms), raw) => coerce_union(arms, raw),
        (declared_type, raw) => Err(vec![FieldError::new(
            "",
            format!("expected {}, found {}", declared_type.describe(), raw.kind()),
        )]),
    }
}

fn coerce_union(arms: &[TypeDescriptor], raw: RawValue) -> Result<Value, Vec<FieldError>> {
    let mut first_error = None;
    for arm in arms.iter().filter(|arm| accepts_shape(arm, &raw)) {
        match coerce(Some(arm), raw.clone()) {
            Ok(value) => return Ok(value),
            Err(errors) => {
                first_error.get_or_insert(errors);
            }
        }
    }
    Err(first_error.unwrap_or_else(|| {
        vec![FieldError::new(
            "",
            format!(
                "expected {}, found {}",
                TypeDescriptor::Union(arms.to_vec()).describe(),
                raw.kind()
            ),
        )]
    }))
}

fn accepts_shape(ty: &TypeDescriptor, raw: &RawValue) -> bool {
    match (ty, raw) {
        (TypeDescriptor::Scalar(_), RawValue::Text(_))
        | (TypeDescriptor::Record(_), RawValue::Record(_))
        | (TypeDescriptor::Sequence(_), RawValue::List(_)) => true,
        (TypeDescriptor::Union(arms), raw) => arms.iter().any(|arm| accepts_shape(arm, raw)),
        _ => false,
    }
}

fn coerce_untyped(raw: RawValue) -> Result<Value, Vec<FieldError>> {
    match raw {
        RawValue::Text(text) => Ok(Value::Str(text)),
        RawValue::Record(record) => validate_nested(record),
        RawValue::List(items) => coerce_list(None, items),
    }
}

/// Validate list items, rejecting items whose schema `element` does not admit.
/// Untyped lists admit every item.
fn coerce_list(
    element: Option<&TypeDescriptor>,
    items: Vec<RawRecord>,
) -> Result<Value, Vec<FieldError>> {
    let mut values = Vec::with_capacity(items.len());
    let mut errors = Vec::new();
    for (i, item) in items.into_iter().enumerate() {
        let index = i.to_string();
        if let Some(element) = element.filter(|e| !admits(e, item.schema)) {
            errors.push(FieldError::new(
                index,
                format!(
                    "expected {}, found record {}",
                    element.describe(),
                    item.schema.identifier()
                ),
            ));
            continue;
        }
        match validate_nested(item) {
            Ok(value) => values.push(value),
            Err(item_errors) => {
                errors.extend(item_errors.into_iter().map(|e| e.nested_under(&index)));
            }
        }
    }
    if errors.is_empty() {
        Ok(Value::List(values))
    } else {
        Err(errors)
    }
}

fn admits(element: &TypeDescriptor, schema: &RecordSchema) -> bool {
    match element {
        TypeDescriptor::Record(expected) => expected.is(schema),
        TypeDescriptor::Union(arms) => arms.iter().any(|arm| admits(arm, schema)),
        _ => false,
    }
}

fn validate_nested(record: RawRecord) -> Result<Value, Vec<FieldError>> {
    validate(record.schema, record.fields)
        .map(Value::Record)
        .map_err(|e| e.errors)
}

fn coerce_scalar(kind: ScalarKind, text: String) -> Result<Value, String> {
    match kind {
        ScalarKind::String | ScalarKind::Any => Ok(Value::Str(text)),
        ScalarKind::Integer => text
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|e| format!("invalid integer `{text}`: {e}")),
        ScalarKind::Float => text
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|e| format!("invalid float `{text}`: {e}")),
        ScalarKind::Boolean => parse_bool(&text)
            .map(Value::Bool)
            .ok_or_else(|| format!("invalid boolean `{text}`")),
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
