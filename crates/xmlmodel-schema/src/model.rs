//! The [`XmlModel`] trait connecting a Rust type with its schema.

use crate::error::ValidationError;
use crate::types::RecordSchema;
use crate::value::RecordValue;

/// A Rust type described by a [`RecordSchema`].
///
/// `to_record` and `from_record` convert between the type and its dynamic
/// [`RecordValue`] form. `from_record` receives a record that already went
/// through [`validate`](crate::validate), so every schema field is present
/// (defaults applied, missing optionals null) and scalars carry their
/// declared kinds.
///
/// ```
/// use std::sync::LazyLock;
///
/// use xmlmodel_schema::{
///     FieldDescriptor, RecordSchema, RecordValue, TypeDescriptor, ValidationError, XmlModel,
/// };
///
/// struct Example {
///     name: String,
///     value: i64,
/// }
///
/// impl XmlModel for Example {
///     fn schema() -> &'static RecordSchema {
///         static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
///             RecordSchema::builder("Example")
///                 .field(FieldDescriptor::new("name", TypeDescriptor::string()))
///                 .field(FieldDescriptor::new("value", TypeDescriptor::integer()))
///                 .build()
///         });
///         &SCHEMA
///     }
///
///     fn to_record(&self) -> RecordValue {
///         RecordValue::of::<Self>()
///             .with("name", &self.name)
///             .with("value", self.value)
///     }
///
///     fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
///         Ok(Self {
///             name: record.take("name")?,
///             value: record.take("value")?,
///         })
///     }
/// }
/// ```
pub trait XmlModel: Sized {
    /// The schema of this type.
    fn schema() -> &'static RecordSchema;

    /// Convert this instance to its dynamic form.
    fn to_record(&self) -> RecordValue;

    /// Build an instance from a validated record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if a field cannot be converted.
    fn from_record(record: RecordValue) -> Result<Self, ValidationError>;
}
