//! Schema descriptors: record schemas, fields, and declared types.
//!
//! A [`RecordSchema`] is built once per record type (usually inside a
//! `LazyLock` static) and is immutable afterwards. Nested record types are
//! referenced through [`SchemaRef`], a function pointer resolved on use, so a
//! schema may refer to itself.

use std::fmt;

use crate::model::XmlModel;
use crate::value::Value;

/// Identifier of the reserved content field.
///
/// The value of this field becomes the element's text (or nested elements)
/// instead of an attribute.
pub const CONTENT_FIELD: &str = "xml_content";

/// Derives an element name from a record identifier.
pub type NameFunction = fn(&str) -> String;

/// Lowercase name derivation, the default for every schema.
#[must_use]
pub fn lowercase(identifier: &str) -> String {
    identifier.to_lowercase()
}

/// Uppercase name derivation.
#[must_use]
pub fn uppercase(identifier: &str) -> String {
    identifier.to_uppercase()
}

/// Kind of a scalar field, used by the validator for coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// Text kept verbatim.
    String,
    /// Signed 64-bit integer.
    Integer,
    /// 64-bit float.
    Float,
    /// Boolean.
    Boolean,
    /// Any scalar; kept as text.
    Any,
}

impl ScalarKind {
    /// Returns a short name for this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Any => "any",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to a record schema, resolved lazily.
#[derive(Clone, Copy)]
pub struct SchemaRef(fn() -> &'static RecordSchema);

impl SchemaRef {
    /// Reference the schema returned by `schema`.
    #[must_use]
    pub const fn new(schema: fn() -> &'static RecordSchema) -> Self {
        Self(schema)
    }

    /// Reference the schema of an [`XmlModel`] type.
    #[must_use]
    pub fn of<T: XmlModel>() -> Self {
        Self(T::schema)
    }

    /// Resolve the referenced schema.
    #[must_use]
    pub fn get(&self) -> &'static RecordSchema {
        (self.0)()
    }

    /// Whether this reference points at `schema`.
    #[must_use]
    pub fn is(&self, schema: &RecordSchema) -> bool {
        std::ptr::eq(self.get(), schema)
    }
}

impl PartialEq for SchemaRef {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.get(), other.get())
    }
}

impl fmt::Debug for SchemaRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SchemaRef")
            .field(&self.get().identifier())
            .finish()
    }
}

/// The declared type of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDescriptor {
    /// A scalar value.
    Scalar(ScalarKind),
    /// The null type; only meaningful as a union arm.
    Null,
    /// A nested record.
    Record(SchemaRef),
    /// A homogeneous sequence. `None` means the element type is unknown.
    Sequence(Option<Box<TypeDescriptor>>),
    /// Any of the arms, in declaration order.
    Union(Vec<TypeDescriptor>),
}

impl TypeDescriptor {
    /// A string scalar.
    #[must_use]
    pub fn string() -> Self {
        Self::Scalar(ScalarKind::String)
    }

    /// An integer scalar.
    #[must_use]
    pub fn integer() -> Self {
        Self::Scalar(ScalarKind::Integer)
    }

    /// A float scalar.
    #[must_use]
    pub fn float() -> Self {
        Self::Scalar(ScalarKind::Float)
    }

    /// A boolean scalar.
    #[must_use]
    pub fn boolean() -> Self {
        Self::Scalar(ScalarKind::Boolean)
    }

    /// A scalar of any kind.
    #[must_use]
    pub fn any() -> Self {
        Self::Scalar(ScalarKind::Any)
    }

    /// A nested record of type `T`.
    #[must_use]
    pub fn record<T: XmlModel>() -> Self {
        Self::Record(SchemaRef::of::<T>())
    }

    /// A nested record whose schema is returned by `schema`.
    #[must_use]
    pub fn record_of(schema: fn() -> &'static RecordSchema) -> Self {
        Self::Record(SchemaRef::new(schema))
    }

    /// A sequence of `element`.
    #[must_use]
    pub fn list_of(element: TypeDescriptor) -> Self {
        Self::Sequence(Some(Box::new(element)))
    }

    /// A sequence of records of type `T`.
    #[must_use]
    pub fn list<T: XmlModel>() -> Self {
        Self::list_of(Self::record::<T>())
    }

    /// A sequence without element type information.
    #[must_use]
    pub fn bare_list() -> Self {
        Self::Sequence(None)
    }

    /// `inner` or null.
    #[must_use]
    pub fn optional(inner: TypeDescriptor) -> Self {
        Self::Union(vec![inner, Self::Null])
    }

    /// Any of `arms`.
    #[must_use]
    pub fn union(arms: impl IntoIterator<Item = TypeDescriptor>) -> Self {
        Self::Union(arms.into_iter().collect())
    }

    /// Whether null is an admissible value.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Union(arms) => arms.iter().any(Self::is_nullable),
            _ => false,
        }
    }

    /// Short human-readable description, used in error messages.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Scalar(kind) => kind.as_str().to_owned(),
            Self::Null => "null".to_owned(),
            Self::Record(schema) => format!("record {}", schema.get().identifier()),
            Self::Sequence(Some(element)) => format!("list of {}", element.describe()),
            Self::Sequence(None) => "list".to_owned(),
            Self::Union(arms) => arms
                .iter()
                .map(Self::describe)
                .collect::<Vec<_>>()
                .join(" | "),
        }
    }
}

/// One field of a record schema.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
    identifier: String,
    declared_type: Option<TypeDescriptor>,
    required: bool,
    default: Option<Value>,
    serialization_alias: Option<String>,
    validation_alias: Option<String>,
    content: bool,
}

impl FieldDescriptor {
    /// A field with the given identifier and declared type.
    ///
    /// The field is required unless its type is nullable, in which case a
    /// missing value becomes null.
    #[must_use]
    pub fn new(identifier: impl Into<String>, declared_type: TypeDescriptor) -> Self {
        let identifier = identifier.into();
        let content = identifier == CONTENT_FIELD;
        Self {
            identifier,
            required: !declared_type.is_nullable(),
            declared_type: Some(declared_type),
            default: None,
            serialization_alias: None,
            validation_alias: None,
            content,
        }
    }

    /// A field without any declared type information.
    ///
    /// Encoding or decoding a record with such a field fails with a schema error.
    #[must_use]
    pub fn untyped(identifier: impl Into<String>) -> Self {
        let mut field = Self::new(identifier, TypeDescriptor::any());
        field.declared_type = None;
        field
    }

    /// The content field, under the reserved [`CONTENT_FIELD`] identifier.
    #[must_use]
    pub fn content(declared_type: TypeDescriptor) -> Self {
        Self::new(CONTENT_FIELD, declared_type)
    }

    /// Mark this field as the content field regardless of its identifier.
    #[must_use]
    pub fn as_content(mut self) -> Self {
        self.content = true;
        self
    }

    /// Use `value` when the field is missing.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self.required = false;
        self
    }

    /// Allow the field to be missing; a missing value becomes null.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Require the field even if its type is nullable.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self.default = None;
        self
    }

    /// Use `alias` in both directions.
    #[must_use]
    pub fn with_alias(self, alias: impl Into<String>) -> Self {
        let alias = alias.into();
        self.with_serialization_alias(alias.clone())
            .with_validation_alias(alias)
    }

    /// Use `alias` when serializing.
    #[must_use]
    pub fn with_serialization_alias(mut self, alias: impl Into<String>) -> Self {
        self.serialization_alias = Some(alias.into());
        self
    }

    /// Use `alias` when deserializing.
    #[must_use]
    pub fn with_validation_alias(mut self, alias: impl Into<String>) -> Self {
        self.validation_alias = Some(alias.into());
        self
    }

    /// The field identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The declared type, if any.
    #[must_use]
    pub fn declared_type(&self) -> Option<&TypeDescriptor> {
        self.declared_type.as_ref()
    }

    /// Whether a missing value is a validation error.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// The default value, if any.
    #[must_use]
    pub fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    /// Alias used when serializing.
    #[must_use]
    pub fn serialization_alias(&self) -> Option<&str> {
        self.serialization_alias.as_deref()
    }

    /// Alias used when deserializing.
    #[must_use]
    pub fn validation_alias(&self) -> Option<&str> {
        self.validation_alias.as_deref()
    }

    /// Whether this is the content field.
    #[must_use]
    pub fn is_content(&self) -> bool {
        self.content
    }
}

/// Schema of a record type.
#[derive(Debug)]
pub struct RecordSchema {
    identifier: String,
    xml_name: Option<String>,
    name_function: Option<NameFunction>,
    fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    /// Start building a schema for the record type named `identifier`.
    #[must_use]
    pub fn builder(identifier: impl Into<String>) -> RecordSchemaBuilder {
        RecordSchemaBuilder {
            schema: Self {
                identifier: identifier.into(),
                xml_name: None,
                name_function: Some(lowercase),
                fields: Vec::new(),
            },
        }
    }

    /// The record type identifier.
    #[must_use]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Explicit element name override.
    #[must_use]
    pub fn xml_name(&self) -> Option<&str> {
        self.xml_name.as_deref()
    }

    /// Name derivation function; `None` uses the identifier verbatim.
    #[must_use]
    pub fn name_function(&self) -> Option<NameFunction> {
        self.name_function
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Look up a field by identifier.
    #[must_use]
    pub fn field(&self, identifier: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.identifier() == identifier)
    }

    /// The content field, if the schema has one.
    #[must_use]
    pub fn content_field(&self) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.is_content())
    }
}

/// Builder for [`RecordSchema`].
#[derive(Debug)]
pub struct RecordSchemaBuilder {
    schema: RecordSchema,
}

impl RecordSchemaBuilder {
    /// Set an explicit element name.
    #[must_use]
    pub fn xml_name(mut self, name: impl Into<String>) -> Self {
        self.schema.xml_name = Some(name.into());
        self
    }

    /// Set the name derivation function; `None` uses the identifier verbatim.
    #[must_use]
    pub fn name_function(mut self, function: Option<NameFunction>) -> Self {
        self.schema.name_function = function;
        self
    }

    /// Append a field. A field with the same identifier is replaced in place.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        match self
            .schema
            .fields
            .iter_mut()
            .find(|f| f.identifier() == field.identifier())
        {
            Some(existing) => *existing = field,
            None => self.schema.fields.push(field),
        }
        self
    }

    /// Finish the schema.
    #[must_use]
    pub fn build(self) -> RecordSchema {
        self.schema
    }
}
