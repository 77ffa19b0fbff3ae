use crate::{
    common::new_field,
    items::{name_items, parse_items},
    utils::is_truthy,
};
use schemaform_schema::{
    Choices, FieldDescriptor, FieldValue, SchemaNode, DEFAULT_MAX_ITEMS, DEFAULT_MIN_ITEMS,
};
use serde_json::Value;

/// Parses a `boolean` node into a checkbox (or caller-chosen) input.
pub fn parse_boolean(schema: &SchemaNode, name: Option<&str>) -> FieldDescriptor {
    let mut field = new_field(schema, name);
    let default_checked = schema.default.as_ref().is_some_and(is_truthy);

    field.attrs.default_type("checkbox");
    field.attrs.checked = field.attrs.checked.or(default_checked);
    field.attrs.value   = None;
    field
}

/// Parses `string`, `number` and `integer` nodes.
///
/// A node carrying `enum` becomes a single-choice `select` instead of a
/// plain input.
pub fn parse_string(schema: &SchemaNode, name: Option<&str>) -> FieldDescriptor {
    if let Some(entries) = &schema.enum_ {
        return parse_string_choices(schema, entries, name);
    }

    let mut field = new_field(schema, name);
    field.attrs.default_type(input_type_for(schema));

    if schema.min_length.is_some() {
        field.attrs.minlength = schema.min_length;
    }
    if schema.max_length.is_some() {
        field.attrs.maxlength = schema.max_length;
    }
    if schema.pattern.is_some() {
        field.attrs.pattern = schema.pattern.clone();
    }
    field
}

fn input_type_for(schema: &SchemaNode) -> &'static str {
    match schema.format.as_deref() {
        Some("email") => "email",
        Some("uri")   => "url",
        _ if schema.schema_type.is_numeric() => "number",
        _ => "text",
    }
}

fn parse_string_choices(schema: &SchemaNode, entries: &[Value], name: Option<&str>) -> FieldDescriptor {
    let mut field = with_item_bounds(new_field(schema, name), schema);

    field.items = Some(parse_items(entries));
    field.attrs.default_type("select");
    field.attrs.multiple = Some(false);
    field
}

/// Parses an `array` node: a free-form list input, or a choice group when the
/// node carries `enum`, `oneOf` or `anyOf`.
pub fn parse_array(schema: &SchemaNode, name: Option<&str>) -> FieldDescriptor {
    let field = with_item_bounds(new_field(schema, name), schema);

    match schema.choices() {
        None                          => parse_free_array(field),
        Some(Choices::Enum(entries))  => parse_enum_array(field, entries),
        Some(Choices::OneOf(entries)) => parse_one_of(field, entries),
        Some(Choices::AnyOf(entries)) => parse_any_of(field, entries),
    }
}

fn with_item_bounds(mut field: FieldDescriptor, schema: &SchemaNode) -> FieldDescriptor {
    field.min_items = Some(schema.min_items.unwrap_or(DEFAULT_MIN_ITEMS));
    field.max_items = Some(schema.max_items.unwrap_or(DEFAULT_MAX_ITEMS));
    field
}

fn parse_free_array(mut field: FieldDescriptor) -> FieldDescriptor {
    field.attrs.default_type("text");
    field.items = Some(Vec::new());

    if field.attrs.is_type("select") {
        field.attrs.value    = Some(list_value(field.attrs.value.take()));
        field.attrs.multiple = Some(true);
        field.is_array_field = Some(true);
    } else {
        // Plain inputs hold one scalar; a list default has no place here.
        if field.attrs.value.as_ref().is_some_and(FieldValue::is_list) {
            field.attrs.value = Some(FieldValue::empty());
        }
        if field.attrs.is_type("text") {
            field.is_array_field = Some(true);
        }
    }
    field
}

fn parse_enum_array(mut field: FieldDescriptor, entries: &[Value]) -> FieldDescriptor {
    field.items = Some(parse_items(entries));
    field.attrs.default_type("select");
    field.attrs.value = Some(list_value(field.attrs.value.take()));

    if field.attrs.is_type("select") {
        field.attrs.multiple = Some(true);
        field.is_array_field = Some(true);
    }
    field
}

fn parse_one_of(mut field: FieldDescriptor, entries: &[Value]) -> FieldDescriptor {
    field.items = Some(name_items(parse_items(entries), field.attrs.name.as_deref(), true));
    field.attrs.input_type = Some("radio".to_owned());
    field.attrs.value = match field.attrs.value.take() {
        Some(FieldValue::Scalar(value)) => Some(FieldValue::Scalar(value)),
        _ => Some(FieldValue::empty()),
    };
    field
}

fn parse_any_of(mut field: FieldDescriptor, entries: &[Value]) -> FieldDescriptor {
    let items = name_items(parse_items(entries), field.attrs.name.as_deref(), false);

    // Slots follow item positions; a default list pre-fills matching ones.
    let chosen: Vec<Value> = match field.attrs.value.take() {
        Some(FieldValue::List(values)) => values.into_iter().flatten().collect(),
        _ => Vec::new(),
    };
    let slots = items
        .iter()
        .map(|item| chosen.contains(&item.value).then(|| item.value.clone()))
        .collect();

    field.attrs.input_type = Some("checkbox".to_owned());
    field.attrs.value      = Some(FieldValue::List(slots));
    field.is_array_field   = Some(true);
    field.items            = Some(items);
    field
}

fn list_value(value: Option<FieldValue>) -> FieldValue {
    match value {
        Some(list @ FieldValue::List(_)) => list,
        _ => FieldValue::empty_list(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemaform_schema::Toggle;
    use serde_json::json;

    fn node(value: Value) -> SchemaNode {
        serde_json::from_value(value).unwrap()
    }

    fn attrs_of(field: &FieldDescriptor) -> Value {
        serde_json::to_value(&field.attrs).unwrap()
    }

    #[test]
    fn boolean_defaults_to_unchecked_checkbox() {
        let field = parse_boolean(&node(json!({ "type": "boolean" })), None);
        assert_eq!(
            attrs_of(&field),
            json!({ "type": "checkbox", "checked": false, "required": false, "disabled": false })
        );
    }

    #[test]
    fn boolean_explicit_false_survives_truthy_default() {
        let schema = node(json!({
            "type": "boolean",
            "default": true,
            "attrs": { "type": "radio", "checked": false }
        }));
        let field = parse_boolean(&schema, Some("name"));

        assert_eq!(field.attrs.checked, Toggle::Off);
        assert!(field.attrs.is_type("radio"));
        assert_eq!(field.attrs.name.as_deref(), Some("name"));
    }

    #[test]
    fn boolean_default_sets_checked() {
        let field = parse_boolean(&node(json!({ "type": "boolean", "default": true })), None);
        assert_eq!(field.attrs.checked, Toggle::On);
        assert_eq!(field.attrs.value, None);
    }

    #[test]
    fn string_input_types() {
        let cases = [
            (json!({ "type": "string" }), "text"),
            (json!({ "type": "number" }), "number"),
            (json!({ "type": "integer" }), "number"),
            (json!({ "type": "string", "format": "email" }), "email"),
            (json!({ "type": "string", "format": "uri" }), "url"),
            (json!({ "type": "string", "format": "date" }), "text"),
            (json!({ "type": "string", "format": "email", "attrs": { "type": "text" } }), "text"),
            (json!({ "type": "integer", "attrs": { "type": "range" } }), "range"),
        ];
        for (schema, expected) in cases {
            let field = parse_string(&node(schema.clone()), None);
            assert_eq!(field.attrs.input_type(), Some(expected), "schema: {}", schema);
        }
    }

    #[test]
    fn string_copies_length_constraints() {
        let schema = node(json!({ "type": "string", "minLength": 2, "maxLength": 5, "pattern": "[a-z]+" }));
        let field = parse_string(&schema, None);

        assert_eq!(
            attrs_of(&field),
            json!({
                "type": "text",
                "value": "",
                "minlength": 2,
                "maxlength": 5,
                "pattern": "[a-z]+",
                "required": false,
                "disabled": false
            })
        );
    }

    #[test]
    fn string_enum_becomes_single_select() {
        let schema = node(json!({ "type": "string", "enum": ["a", "b"], "default": "b", "minLength": 1 }));
        let field = parse_string(&schema, Some("letter"));

        assert_eq!(field.items().len(), 2);
        assert_eq!(field.is_array_field, None);
        assert_eq!(field.min_items, Some(1));
        assert_eq!(field.max_items, Some(1000));
        assert_eq!(
            attrs_of(&field),
            json!({
                "name": "letter",
                "type": "select",
                "value": "b",
                "multiple": false,
                "required": false,
                "disabled": false
            })
        );
    }

    #[test]
    fn free_array_with_custom_type_is_not_an_array_field() {
        let field = parse_array(&node(json!({ "type": "array", "attrs": { "type": "file" } })), None);
        assert_eq!(field.is_array_field, None);
        assert_eq!(field.attrs.value, Some(FieldValue::empty()));
    }

    #[test]
    fn free_text_array_drops_list_default() {
        let field = parse_array(&node(json!({ "type": "array", "default": ["a", "b"] })), None);

        assert!(field.is_array_field());
        assert!(field.attrs.is_type("text"));
        assert_eq!(field.attrs.value, Some(FieldValue::empty()));
    }

    #[test]
    fn free_select_array_keeps_list_default() {
        let schema = node(json!({ "type": "array", "default": ["a"], "attrs": { "type": "select" } }));
        let field = parse_array(&schema, None);

        assert_eq!(field.attrs.value, Some(FieldValue::List(vec![Some(json!("a"))])));
    }

    #[test]
    fn free_select_array_is_multiple() {
        let schema = node(json!({ "type": "array", "minItems": 2, "maxItems": 5, "attrs": { "type": "select" } }));
        let field = parse_array(&schema, None);

        assert!(field.is_array_field());
        assert_eq!((field.min_items, field.max_items), (Some(2), Some(5)));
        assert_eq!(field.attrs.multiple, Some(true));
        assert_eq!(field.attrs.value, Some(FieldValue::empty_list()));
    }

    #[test]
    fn enum_array_keeps_default_list() {
        let schema = node(json!({ "type": "array", "enum": ["x", "y"], "default": ["y"] }));
        let field = parse_array(&schema, None);

        assert!(field.is_array_field());
        assert_eq!(field.attrs.value, Some(FieldValue::List(vec![Some(json!("y"))])));
    }

    #[test]
    fn one_of_items_share_the_field_name() {
        let schema = node(json!({ "type": "array", "oneOf": ["Small", "Large"] }));
        let field = parse_array(&schema, Some("size"));

        assert!(field.attrs.is_type("radio"));
        assert_eq!(field.is_array_field, None);
        let names: Vec<_> = field.items().iter().map(|i| i.name.as_deref()).collect();
        assert_eq!(names, [Some("size"), Some("size")]);
        let refs: Vec<_> = field.items().iter().map(|i| i.ref_.as_deref()).collect();
        assert_eq!(refs, [Some("size-0"), Some("size-1")]);
    }

    #[test]
    fn any_of_slots_follow_default() {
        let schema = node(json!({ "type": "array", "anyOf": ["a", "b", "c"], "default": ["c", "a"] }));
        let field = parse_array(&schema, Some("letters"));

        assert!(field.attrs.is_type("checkbox"));
        assert!(field.is_array_field());
        assert_eq!(serde_json::to_value(&field.attrs.value).unwrap(), json!(["a", null, "c"]));
        assert_eq!(field.items()[1].name.as_deref(), Some("letters-b"));
    }
}
