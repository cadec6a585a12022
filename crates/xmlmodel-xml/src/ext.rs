//! Convenience methods on every [`XmlModel`].

use xmlmodel_schema::XmlModel;

use crate::config::{DeserializeOptions, SerializeOptions};
use crate::decode::deserialize;
use crate::encode::serialize;
use crate::error::XmlError;

/// Method-style access to [`serialize`] and [`deserialize`].
pub trait XmlModelExt: XmlModel {
    /// Serialize with the declaration and compact output.
    ///
    /// # Errors
    ///
    /// See [`serialize`].
    fn to_xml(&self) -> Result<String, XmlError> {
        serialize(self, &SerializeOptions::default())
    }

    /// Serialize with explicit options.
    ///
    /// # Errors
    ///
    /// See [`serialize`].
    fn to_xml_with(&self, options: &SerializeOptions) -> Result<String, XmlError> {
        serialize(self, options)
    }

    /// Deserialize with validation aliases enabled.
    ///
    /// # Errors
    ///
    /// See [`deserialize`].
    fn from_xml(xml: &str) -> Result<Self, XmlError> {
        deserialize(xml, &DeserializeOptions::default())
    }
}

impl<T: XmlModel> XmlModelExt for T {}
