//! Record schemas and the value model for xmlmodel.
//!
//! This crate describes record types explicitly instead of relying on runtime
//! reflection. A record type declares its [`RecordSchema`] once and converts
//! to and from the dynamic [`RecordValue`] representation; everything else
//! (XML encoding and decoding) is driven by that schema.
//!
//! # Key components
//!
//! - [`RecordSchema`], [`FieldDescriptor`] and [`TypeDescriptor`] describe a record type
//! - [`classify`] and [`classify_field`] derive the XML role of a field
//! - [`element_name`] and [`member_name`] resolve XML names
//! - [`validate`] turns a [`RawFieldBag`] into a typed [`RecordValue`]
//! - [`XmlModel`] connects a Rust type with its schema

pub mod classify;
pub mod error;
pub mod model;
pub mod naming;
pub mod types;
pub mod validate;
pub mod value;

pub use classify::{Classification, classify, classify_field};
pub use error::{FieldError, SchemaError, ValidationError};
pub use model::XmlModel;
pub use naming::{Direction, element_name, member_name};
pub use types::{
    CONTENT_FIELD, FieldDescriptor, NameFunction, RecordSchema, RecordSchemaBuilder, ScalarKind,
    SchemaRef, TypeDescriptor, lowercase, uppercase,
};
pub use validate::{RawFieldBag, RawRecord, RawValue, validate};
pub use value::{FromValue, RecordValue, Value};
