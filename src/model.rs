//! Model descriptor structs for serde deserialization.
//!
//! This module defines the shape of the descriptors an external parser
//! hands to the generator: named models, their nested property descriptors
//! (a `Model` used in property position), and enum entries. The wire format
//! is camelCase JSON.

use serde::{Deserialize, Serialize};

/// Shape kind of a model or property descriptor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportKind {
    /// Plain object with named fields.
    #[default]
    Interface,
    /// Enumerated constant set.
    Enum,
    /// Composition of other models (`all-of`).
    AllOf,
    /// Exactly one of several alternatives.
    OneOf,
    /// Any of several alternatives.
    AnyOf,
    /// Sequence of a single item type.
    Array,
    /// String-keyed map of a single value type.
    Dictionary,
    /// Scalar or otherwise unstructured type.
    Generic,
    /// Reference to another named model.
    Reference,
}

/// A named type descriptor describing one emitted source type.
///
/// Properties reuse the same struct; a property with an empty `name` is
/// anonymous and represents an inline composition member or an inherited
/// reference rather than a literal named field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub export: ExportKind,

    /// For `reference` kinds, the name of the referenced model; otherwise
    /// the rendered type name of the field.
    #[serde(rename = "type", default)]
    pub type_name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub is_nullable: bool,

    /// Ordered nested property descriptors.
    #[serde(default)]
    pub properties: Vec<Model>,

    /// Ordered enum entries for enum-typed models and properties.
    #[serde(rename = "enum", default)]
    pub enum_entries: Vec<EnumEntry>,

    /// Named sub-enum groups.
    #[serde(default)]
    pub enums: Vec<EnumGroup>,

    /// Set by the emission pre-pass when another model references this one
    /// as a composition member.
    #[serde(default)]
    pub referenced_as_all_of: bool,
}

impl Model {
    /// Total number of renderable items. Models with zero items produce no
    /// output file.
    pub fn item_count(&self) -> usize {
        self.properties.len() + self.enum_entries.len() + self.enums.len()
    }
}

/// A constant name/value pair belonging to an enum-typed model or property.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumEntry {
    pub name: String,
    pub value: EnumValue,
    #[serde(default)]
    pub description: Option<String>,
}

/// Enum value can be string, integer, float, boolean, or null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// A named sub-enum group nested under a model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnumGroup {
    pub name: String,
    #[serde(default)]
    pub entries: Vec<EnumEntry>,
}

/// Parse a list of model descriptors from a JSON string.
pub fn parse_models(json: &str) -> Result<Vec<Model>, String> {
    serde_json::from_str(json).map_err(|err| format!("Failed to parse model descriptors: {err}"))
}
