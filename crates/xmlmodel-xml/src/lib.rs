//! XML mapping for xmlmodel records.
//!
//! This crate turns records described by `xmlmodel-schema` into XML text and
//! back. Scalar fields become attributes, nested records become child
//! elements, lists of records become flat sibling elements, and the content
//! field becomes the element text.
//!
//! # Key components
//!
//! - [`serialize`] and [`deserialize`] for [`XmlModel`](xmlmodel_schema::XmlModel) types
//! - [`serialize_record`] and [`deserialize_record`] for dynamic records
//! - [`Encoder`] and [`Decoder`] between records and the [`Element`] tree
//! - [`render`] and [`parse`] between the tree and text
//! - [`XmlModelExt`] for method-style access
//!
//! # Example
//!
//! ```
//! use std::sync::LazyLock;
//!
//! use xmlmodel_schema::{
//!     FieldDescriptor, RecordSchema, RecordValue, TypeDescriptor, ValidationError, XmlModel,
//! };
//! use xmlmodel_xml::XmlModelExt;
//!
//! #[derive(Debug, PartialEq)]
//! struct Example {
//!     name: String,
//!     value: i64,
//! }
//!
//! impl XmlModel for Example {
//!     fn schema() -> &'static RecordSchema {
//!         static SCHEMA: LazyLock<RecordSchema> = LazyLock::new(|| {
//!             RecordSchema::builder("Example")
//!                 .field(FieldDescriptor::new("name", TypeDescriptor::string()))
//!                 .field(FieldDescriptor::new("value", TypeDescriptor::integer()))
//!                 .build()
//!         });
//!         &SCHEMA
//!     }
//!
//!     fn to_record(&self) -> RecordValue {
//!         RecordValue::of::<Self>()
//!             .with("name", &self.name)
//!             .with("value", self.value)
//!     }
//!
//!     fn from_record(mut record: RecordValue) -> Result<Self, ValidationError> {
//!         Ok(Self {
//!             name: record.take("name")?,
//!             value: record.take("value")?,
//!         })
//!     }
//! }
//!
//! let example = Example { name: "test".to_owned(), value: 123 };
//! let xml = example.to_xml().unwrap();
//! assert_eq!(xml, r#"<?xml version="1.0" ?><example name="test" value="123"/>"#);
//! assert_eq!(Example::from_xml(&xml).unwrap(), example);
//! ```

pub mod config;
pub mod decode;
pub mod element;
pub mod encode;
pub mod error;
pub mod ext;
pub mod text;

#[cfg(test)]
mod fixtures;

pub use config::{DeserializeOptions, SerializeOptions, XmlModelConfig};
pub use decode::{Decoder, deserialize, deserialize_record};
pub use element::Element;
pub use encode::{Encoder, serialize, serialize_record};
pub use error::{ParseError, XmlError};
pub use ext::XmlModelExt;
pub use text::{XML_DECLARATION, parse, render};
