use crate::utils::is_truthy;
use schemaform_schema::{FieldDescriptor, FieldValue, SchemaNode};

/// Starts a descriptor from the caller's `attrs` overrides and `name`, then
/// applies [`set_common_fields`].
pub fn new_field(schema: &SchemaNode, name: Option<&str>) -> FieldDescriptor {
    let mut attrs = schema.attrs.clone().unwrap_or_default();
    if let Some(name) = name {
        attrs.name = Some(name.to_owned());
    }
    set_common_fields(schema, FieldDescriptor::new(schema.schema_type.clone(), attrs))
}

/// Fills in the attributes every field kind shares.
///
/// A truthy `attrs.value` already on `field` wins over `schema.default`;
/// with neither, the value is `""`. Falsy defaults such as `0` and `false`
/// therefore become `""` as well.
pub fn set_common_fields(schema: &SchemaNode, mut field: FieldDescriptor) -> FieldDescriptor {
    field.schema_type = schema.schema_type.clone();
    field.label       = schema.title.clone().unwrap_or_default();
    field.description = schema.description.clone().unwrap_or_default();

    let value = match field.attrs.value.take() {
        Some(value) if is_set(&value) => value,
        _ => schema
            .default
            .as_ref()
            .filter(|default| is_truthy(default))
            .cloned()
            .map(FieldValue::from)
            .unwrap_or_else(FieldValue::empty),
    };
    field.attrs.value    = Some(value);
    field.attrs.required = schema.is_required();
    field.attrs.disabled = schema.disabled;
    field
}

fn is_set(value: &FieldValue) -> bool {
    match value {
        FieldValue::List(_) => true,
        FieldValue::Scalar(value) => is_truthy(value),
    }
}
