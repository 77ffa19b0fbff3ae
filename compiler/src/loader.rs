use crate::{
    error::FormError,
    options::{CompileOptions, UnknownTypePolicy},
    parser::{parse_array, parse_boolean, parse_string},
    utils::join_path,
};
use schemaform_schema::{FieldDescriptor, SchemaNode, SchemaType};
use tracing::{debug, warn};

/// Walks `schema` and appends one descriptor per visible leaf node to `fields`,
/// in document order. Unknown types are logged and skipped.
pub fn load_fields(
    schema: &SchemaNode,
    fields: &mut Vec<FieldDescriptor>,
    name: Option<&str>,
) -> Result<(), FormError> {
    load_fields_with(schema, fields, name, &CompileOptions::default())
}

/// Like [`load_fields`], with the unknown-type policy taken from `options`.
pub fn load_fields_with(
    schema: &SchemaNode,
    fields: &mut Vec<FieldDescriptor>,
    name: Option<&str>,
    options: &CompileOptions,
) -> Result<(), FormError> {
    let walker = Walker { options };
    walker.walk(schema, fields, name, false, &mut Vec::new())
}

struct Walker<'o> {
    options: &'o CompileOptions,
}

impl Walker<'_> {
    fn walk<'a>(
        &self,
        schema: &'a SchemaNode,
        fields: &mut Vec<FieldDescriptor>,
        name: Option<&'a str>,
        required: bool,
        path: &mut Vec<&'a str>,
    ) -> Result<(), FormError> {
        if !schema.is_visible() {
            debug!(path = %join_path(path), "skipping hidden node");
            return Ok(());
        }

        let mut field = match &schema.schema_type {
            SchemaType::Object => return self.walk_properties(schema, fields, path),
            SchemaType::Boolean => parse_boolean(schema, name),
            SchemaType::String | SchemaType::Number | SchemaType::Integer => parse_string(schema, name),
            SchemaType::Array => parse_array(schema, name),
            SchemaType::Other(type_name) => return self.unknown_type(type_name, path),
        };

        if required {
            field.attrs.required = true;
        }
        debug!(
            path = %join_path(path),
            schema_type = %field.schema_type,
            input_type = field.attrs.input_type().unwrap_or_default(),
            "emitting field"
        );
        fields.push(field);
        Ok(())
    }

    fn walk_properties<'a>(
        &self,
        schema: &'a SchemaNode,
        fields: &mut Vec<FieldDescriptor>,
        path: &mut Vec<&'a str>,
    ) -> Result<(), FormError> {
        for (key, child) in &schema.properties {
            let required = schema.required.as_ref().is_some_and(|r| r.contains(key));
            path.push(key.as_str());
            self.walk(child, fields, Some(key.as_str()), required, path)?;
            path.pop();
        }
        Ok(())
    }

    fn unknown_type(&self, type_name: &str, path: &[&str]) -> Result<(), FormError> {
        match self.options.unknown_types {
            UnknownTypePolicy::Skip => {
                warn!(path = %join_path(path), type_name, "skipping node with unsupported type");
                Ok(())
            }
            UnknownTypePolicy::Reject => Err(FormError::UnsupportedType {
                path:      join_path(path),
                type_name: type_name.to_owned(),
            }),
        }
    }
}
