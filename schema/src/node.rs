use crate::field::Attrs;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// The declared `type` of a schema node.
///
/// Unknown type names are kept in [`SchemaType::Other`] so that callers can
/// decide whether to skip or reject them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SchemaType {
    Boolean,
    String,
    Number,
    Integer,
    Array,
    Object,
    Other(String),
}

impl SchemaType {
    pub fn as_str(&self) -> &str {
        match self {
            SchemaType::Boolean  => "boolean",
            SchemaType::String   => "string",
            SchemaType::Number   => "number",
            SchemaType::Integer  => "integer",
            SchemaType::Array    => "array",
            SchemaType::Object   => "object",
            SchemaType::Other(s) => s,
        }
    }

    /// `number` and `integer` both render as numeric inputs.
    pub fn is_numeric(&self) -> bool {
        matches!(self, SchemaType::Number | SchemaType::Integer)
    }
}

impl From<String> for SchemaType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "boolean" => SchemaType::Boolean,
            "string"  => SchemaType::String,
            "number"  => SchemaType::Number,
            "integer" => SchemaType::Integer,
            "array"   => SchemaType::Array,
            "object"  => SchemaType::Object,
            _         => SchemaType::Other(s),
        }
    }
}

impl From<SchemaType> for String {
    fn from(t: SchemaType) -> Self {
        match t {
            SchemaType::Other(s) => s,
            other => other.as_str().to_owned(),
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `required` is a flag on leaf nodes and a list of property names on objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Required {
    Flag(bool),
    Properties(Vec<String>),
}

impl Required {
    pub fn is_set(&self) -> bool {
        matches!(self, Required::Flag(true))
    }

    pub fn contains(&self, property: &str) -> bool {
        match self {
            Required::Properties(names) => names.iter().any(|n| n == property),
            Required::Flag(_) => false,
        }
    }
}

/// One JSON-Schema-like fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<Required>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attrs: Option<Attrs>,

    // string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    // array
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,

    // choices
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enum_: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Value>>,

    // object
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaNode>,
}

impl SchemaNode {
    pub fn new(schema_type: SchemaType) -> Self {
        SchemaNode {
            schema_type,
            title:       None,
            description: None,
            default:     None,
            required:    None,
            disabled:    false,
            visible:     None,
            attrs:       None,
            min_length:  None,
            max_length:  None,
            pattern:     None,
            format:      None,
            min_items:   None,
            max_items:   None,
            enum_:       None,
            one_of:      None,
            any_of:      None,
            properties:  IndexMap::new(),
        }
    }

    /// Nodes are visible unless `visible` is explicitly `false`.
    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }

    pub fn is_required(&self) -> bool {
        self.required.as_ref().is_some_and(Required::is_set)
    }

    /// The choice list driving this node, in `enum`, `oneOf`, `anyOf` precedence.
    pub fn choices(&self) -> Option<Choices<'_>> {
        if let Some(entries) = &self.enum_ {
            Some(Choices::Enum(entries))
        } else if let Some(entries) = &self.one_of {
            Some(Choices::OneOf(entries))
        } else {
            self.any_of.as_deref().map(Choices::AnyOf)
        }
    }
}

/// Which choice keyword a node carries, borrowing its raw entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Choices<'a> {
    Enum(&'a [Value]),
    OneOf(&'a [Value]),
    AnyOf(&'a [Value]),
}
