use crate::node::SchemaType;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A three-valued selection flag.
///
/// `Unset` and `Off` are distinct: an explicit `false` supplied by a caller
/// must survive defaulting, while `Unset` is free to be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum Toggle {
    #[default]
    Unset,
    Off,
    On,
}

impl Toggle {
    pub fn is_unset(&self) -> bool {
        *self == Toggle::Unset
    }

    pub fn is_on(&self) -> bool {
        *self == Toggle::On
    }

    /// Returns `self` unless unset, in which case `fallback` decides.
    pub fn or(self, fallback: bool) -> Toggle {
        match self {
            Toggle::Unset => Toggle::from(fallback),
            set => set,
        }
    }
}

impl From<bool> for Toggle {
    fn from(b: bool) -> Self {
        if b { Toggle::On } else { Toggle::Off }
    }
}

impl From<Option<bool>> for Toggle {
    fn from(b: Option<bool>) -> Self {
        b.map_or(Toggle::Unset, Toggle::from)
    }
}

impl From<Toggle> for Option<bool> {
    fn from(t: Toggle) -> Self {
        match t {
            Toggle::Unset => None,
            Toggle::Off   => Some(false),
            Toggle::On    => Some(true),
        }
    }
}

/// The `value` attribute of a field.
///
/// Lists hold one slot per position; `None` slots serialize as `null` and mean
/// "nothing chosen here yet".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    List(Vec<Option<Value>>),
    Scalar(Value),
}

impl FieldValue {
    /// The empty scalar `""` used by plain inputs.
    pub fn empty() -> Self {
        FieldValue::Scalar(Value::String(String::new()))
    }

    pub fn empty_list() -> Self {
        FieldValue::List(Vec::new())
    }

    pub fn is_list(&self) -> bool {
        matches!(self, FieldValue::List(_))
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(values) => FieldValue::List(values.into_iter().map(Some).collect()),
            other => FieldValue::Scalar(other),
        }
    }
}

/// HTML input attributes of a field.
///
/// The same shape is used for caller overrides (`attrs` on a schema node) and
/// for the compiled result; anything not modelled here lands in `extra` and is
/// passed through untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Attrs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Toggle::is_unset")]
    pub checked: Toggle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minlength: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Attrs {
    pub fn input_type(&self) -> Option<&str> {
        self.input_type.as_deref()
    }

    pub fn is_type(&self, input_type: &str) -> bool {
        self.input_type() == Some(input_type)
    }

    /// Sets `type` unless the caller already chose one.
    pub fn default_type(&mut self, input_type: &str) {
        if self.input_type.is_none() {
            self.input_type = Some(input_type.to_owned());
        }
    }
}

/// One selectable option of a radio, select or checkbox group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceItem {
    pub value: Value,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub ref_: Option<String>,
    #[serde(default, skip_serializing_if = "Toggle::is_unset")]
    pub checked: Toggle,
    #[serde(default, skip_serializing_if = "Toggle::is_unset")]
    pub selected: Toggle,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ChoiceItem {
    pub fn new(value: Value, label: impl Into<String>) -> Self {
        ChoiceItem {
            value,
            label:    label.into(),
            name:     None,
            ref_:     None,
            checked:  Toggle::Unset,
            selected: Toggle::Unset,
            extra:    IndexMap::new(),
        }
    }

    /// Builds an item from one raw `enum`/`oneOf`/`anyOf` entry.
    ///
    /// Scalars become `{value, label: String(value)}`. Objects keep their
    /// members; `const` and `title` are accepted in place of `value` and
    /// `label`, and a missing label falls back to the stringified value.
    pub fn from_entry(entry: &Value) -> Self {
        let map = match entry {
            Value::Object(map) => map,
            scalar => return ChoiceItem::new(scalar.clone(), display_value(scalar)),
        };

        let mut item = ChoiceItem::new(Value::Null, String::new());
        let mut label = None;
        for (key, member) in map {
            match key.as_str() {
                "value" => item.value = member.clone(),
                "const" if !map.contains_key("value") => item.value = member.clone(),
                "label" => label = Some(display_value(member)),
                "title" if !map.contains_key("label") => label = Some(display_value(member)),
                "name" => item.name = member.as_str().map(str::to_owned),
                "ref" => item.ref_ = member.as_str().map(str::to_owned),
                "checked" => item.checked = Toggle::from(member.as_bool()),
                "selected" => item.selected = Toggle::from(member.as_bool()),
                _ => {
                    item.extra.insert(key.clone(), member.clone());
                }
            }
        }
        item.label = label.unwrap_or_else(|| display_value(&item.value));
        item
    }
}

/// Stringifies a JSON value the way it would be shown as a label.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The compiled, renderer-agnostic description of one form input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub schema_type: SchemaType,
    pub label:       String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_array_field: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<ChoiceItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u64>,
    pub attrs: Attrs,
}

impl FieldDescriptor {
    pub fn new(schema_type: SchemaType, attrs: Attrs) -> Self {
        FieldDescriptor {
            schema_type,
            label:          String::new(),
            description:    String::new(),
            is_array_field: None,
            items:          None,
            min_items:      None,
            max_items:      None,
            attrs,
        }
    }

    /// The choice items, empty for fields without any.
    pub fn items(&self) -> &[ChoiceItem] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn is_array_field(&self) -> bool {
        self.is_array_field == Some(true)
    }
}
