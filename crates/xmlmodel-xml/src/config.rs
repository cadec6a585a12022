//! Serialization options and environment-driven configuration.
//!
//! Options default to the conventional behaviour: the declaration is
//! written, aliases are ignored when serializing and honoured when
//! deserializing, and output is compact.

use tracing::warn;

/// Options controlling record serialization.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SerializeOptions {
    /// Prefix the output with `<?xml version="1.0" ?>`.
    pub include_declaration: bool,
    /// Name attributes by their serialization alias.
    pub by_alias: bool,
    /// Name child elements by the field's serialization alias.
    pub submodel_by_alias: bool,
    /// Indent nested elements by this many spaces.
    pub indent: Option<usize>,
    /// Maximum record nesting depth; the root is depth 0.
    pub max_depth: Option<usize>,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            include_declaration: true,
            by_alias: false,
            submodel_by_alias: false,
            indent: None,
            max_depth: None,
        }
    }
}

impl SerializeOptions {
    /// Set whether the declaration is written.
    #[must_use]
    pub fn with_declaration(mut self, include: bool) -> Self {
        self.include_declaration = include;
        self
    }

    /// Set whether attributes use serialization aliases.
    #[must_use]
    pub fn with_by_alias(mut self, by_alias: bool) -> Self {
        self.by_alias = by_alias;
        self
    }

    /// Set whether child elements use the field's serialization alias.
    #[must_use]
    pub fn with_submodel_by_alias(mut self, submodel_by_alias: bool) -> Self {
        self.submodel_by_alias = submodel_by_alias;
        self
    }

    /// Indent nested elements by `width` spaces.
    #[must_use]
    pub fn with_indent(mut self, width: usize) -> Self {
        self.indent = Some(width);
        self
    }

    /// Limit record nesting to `limit` levels below the root.
    #[must_use]
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}

/// Options controlling record deserialization.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeserializeOptions {
    /// Look fields up by their validation alias.
    pub by_alias: bool,
    /// Maximum record nesting depth; the root is depth 0.
    pub max_depth: Option<usize>,
}

impl Default for DeserializeOptions {
    fn default() -> Self {
        Self {
            by_alias: true,
            max_depth: None,
        }
    }
}

impl DeserializeOptions {
    /// Set whether fields are looked up by validation alias.
    #[must_use]
    pub fn with_by_alias(mut self, by_alias: bool) -> Self {
        self.by_alias = by_alias;
        self
    }

    /// Limit record nesting to `limit` levels below the root.
    #[must_use]
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}

/// Combined configuration for both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct XmlModelConfig {
    /// Serialization options.
    pub serialize: SerializeOptions,
    /// Deserialization options.
    pub deserialize: DeserializeOptions,
}

impl XmlModelConfig {
    /// Load configuration from environment variables.
    ///
    /// Reads `XMLMODEL_INCLUDE_DECLARATION`, `XMLMODEL_BY_ALIAS`,
    /// `XMLMODEL_SUBMODEL_BY_ALIAS`, `XMLMODEL_INDENT`,
    /// `XMLMODEL_DESERIALIZE_BY_ALIAS` and `XMLMODEL_MAX_DEPTH`. Unset
    /// variables keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(v) = lookup("XMLMODEL_INCLUDE_DECLARATION") {
            config.serialize.include_declaration = parse_flag(&v);
        }
        if let Some(v) = lookup("XMLMODEL_BY_ALIAS") {
            config.serialize.by_alias = parse_flag(&v);
        }
        if let Some(v) = lookup("XMLMODEL_SUBMODEL_BY_ALIAS") {
            config.serialize.submodel_by_alias = parse_flag(&v);
        }
        if let Some(v) = lookup("XMLMODEL_INDENT") {
            if let Some(width) = parse_number("XMLMODEL_INDENT", &v) {
                config.serialize.indent = Some(width);
            }
        }
        if let Some(v) = lookup("XMLMODEL_DESERIALIZE_BY_ALIAS") {
            config.deserialize.by_alias = parse_flag(&v);
        }
        if let Some(v) = lookup("XMLMODEL_MAX_DEPTH") {
            if let Some(limit) = parse_number("XMLMODEL_MAX_DEPTH", &v) {
                config.serialize.max_depth = Some(limit);
                config.deserialize.max_depth = Some(limit);
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn parse_number(key: &str, value: &str) -> Option<usize> {
    match value.trim().parse() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!(key, value, error = %e, "ignoring invalid numeric setting");
            None
        }
    }
}
