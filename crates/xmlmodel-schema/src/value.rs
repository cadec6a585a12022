//! Dynamic value model shared by the encoder, decoder, and validator.

use std::fmt;

use crate::error::ValidationError;
use crate::model::XmlModel;
use crate::types::RecordSchema;

/// A field value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Float.
    Float(f64),
    /// Text.
    Str(String),
    /// A nested record.
    Record(RecordValue),
    /// A list of values.
    List(Vec<Value>),
}

impl Value {
    /// Whether this value is absent.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the value's shape, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Record(_) => "record",
            Self::List(_) => "list",
        }
    }

    /// Locale-independent text form of a scalar value.
    ///
    /// Returns `None` for null, records, and lists.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Bool(b) => Some(if *b { "true" } else { "false" }.to_owned()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(f) => Some(f.to_string()),
            Self::Str(s) => Some(s.clone()),
            Self::Null | Self::Record(_) | Self::List(_) => None,
        }
    }

    /// The nested record, if this is one.
    #[must_use]
    pub fn as_record(&self) -> Option<&RecordValue> {
        match self {
            Self::Record(record) => Some(record),
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )+
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Self::Str(v.clone())
    }
}

impl From<RecordValue> for Value {
    fn from(v: RecordValue) -> Self {
        Self::Record(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Self::List(v.into_iter().map(Into::into).collect())
    }
}

/// Conversion from a validated [`Value`] into a Rust type.
pub trait FromValue: Sized {
    /// Convert `value`, describing the mismatch on failure.
    ///
    /// # Errors
    ///
    /// Returns a message when the value has the wrong shape or is out of range.
    fn from_value(value: Value) -> Result<Self, String>;
}

fn mismatch(expected: &str, value: &Value) -> String {
    format!("expected {expected}, found {}", value.kind())
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, String> {
        Ok(value)
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(mismatch("string", &other)),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(mismatch("boolean", &other)),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Float(f) => Ok(f),
            #[allow(clippy::cast_precision_loss)]
            Value::Int(i) => Ok(i as f64),
            other => Err(mismatch("float", &other)),
        }
    }
}

macro_rules! impl_from_value_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_value(value: Value) -> Result<Self, String> {
                    match value {
                        Value::Int(i) => <$ty>::try_from(i).map_err(|_| {
                            format!("integer {i} out of range for {}", stringify!($ty))
                        }),
                        other => Err(mismatch("integer", &other)),
                    }
                }
            }
        )+
    };
}

impl_from_value_int!(i64, i32, i16, i8, u64, u32, u16, u8, usize);

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, String> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

/// A record instance in dynamic form: its schema plus field values.
#[derive(Clone)]
pub struct RecordValue {
    schema: &'static RecordSchema,
    fields: Vec<(String, Value)>,
}

impl RecordValue {
    /// An empty record of `schema`.
    #[must_use]
    pub fn new(schema: &'static RecordSchema) -> Self {
        Self {
            schema,
            fields: Vec::with_capacity(schema.fields().len()),
        }
    }

    /// An empty record of `T`'s schema.
    #[must_use]
    pub fn of<T: XmlModel>() -> Self {
        Self::new(T::schema())
    }

    /// Set `identifier` to `value` and return the record.
    #[must_use]
    pub fn with(mut self, identifier: &str, value: impl Into<Value>) -> Self {
        self.set(identifier, value);
        self
    }

    /// Set `identifier` to `value`, replacing any previous value.
    pub fn set(&mut self, identifier: &str, value: impl Into<Value>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(id, _)| id == identifier) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((identifier.to_owned(), value)),
        }
    }

    /// The record's schema; this is the record's runtime type.
    #[must_use]
    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// The value of `identifier`, if set.
    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, v)| v)
    }

    /// Field values in the order they were set.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(id, v)| (id.as_str(), v))
    }

    /// Remove and return the value of `identifier`; null when unset.
    pub fn take_value(&mut self, identifier: &str) -> Value {
        self.fields
            .iter()
            .position(|(id, _)| id == identifier)
            .map_or(Value::Null, |i| self.fields.remove(i).1)
    }

    /// Remove `identifier` and convert it to `T`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value cannot be converted.
    pub fn take<T: FromValue>(&mut self, identifier: &str) -> Result<T, ValidationError> {
        let value = self.take_value(identifier);
        T::from_value(value).map_err(|msg| self.error(identifier, msg))
    }

    /// Remove `identifier` and convert the nested record to `T`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is not a record of `T`'s schema.
    pub fn take_record<T: XmlModel>(&mut self, identifier: &str) -> Result<T, ValidationError> {
        match self.take_value(identifier) {
            Value::Record(record) => self.nested(identifier, record),
            other => Err(self.error(identifier, mismatch("record", &other))),
        }
    }

    /// Like [`take_record`](Self::take_record), but null yields `None`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is neither null nor a record of `T`.
    pub fn take_optional_record<T: XmlModel>(
        &mut self,
        identifier: &str,
    ) -> Result<Option<T>, ValidationError> {
        match self.take_value(identifier) {
            Value::Null => Ok(None),
            Value::Record(record) => self.nested(identifier, record).map(Some),
            other => Err(self.error(identifier, mismatch("record", &other))),
        }
    }

    /// Remove `identifier` and convert each list item to `T`. Null yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the value is not a list of `T` records.
    pub fn take_records<T: XmlModel>(
        &mut self,
        identifier: &str,
    ) -> Result<Vec<T>, ValidationError> {
        let items = match self.take_value(identifier) {
            Value::Null => return Ok(Vec::new()),
            Value::List(items) => items,
            other => return Err(self.error(identifier, mismatch("list", &other))),
        };
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Record(record) => self.nested(&format!("{identifier}.{i}"), record),
                other => Err(self.error(&format!("{identifier}.{i}"), mismatch("record", &other))),
            })
            .collect()
    }

    /// Convert this record into `T`.
    ///
    /// # Errors
    ///
    /// Returns whatever `T::from_record` reports.
    pub fn into_model<T: XmlModel>(self) -> Result<T, ValidationError> {
        T::from_record(self)
    }

    fn nested<T: XmlModel>(
        &self,
        location: &str,
        record: RecordValue,
    ) -> Result<T, ValidationError> {
        if !std::ptr::eq(record.schema, T::schema()) {
            return Err(self.error(
                location,
                format!(
                    "expected record {}, found record {}",
                    T::schema().identifier(),
                    record.schema.identifier()
                ),
            ));
        }
        T::from_record(record).map_err(|e| {
            let errors = e
                .errors
                .into_iter()
                .map(|err| err.nested_under(location))
                .collect();
            ValidationError::new(self.schema.identifier(), errors)
        })
    }

    fn error(&self, location: &str, message: String) -> ValidationError {
        ValidationError::single(self.schema.identifier(), location, message)
    }
}

impl PartialEq for RecordValue {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema) && self.fields == other.fields
    }
}

impl fmt::Debug for RecordValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct(self.schema.identifier());
        for (id, value) in &self.fields {
            s.field(id, value);
        }
        s.finish()
    }
}
