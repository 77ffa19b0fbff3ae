use crate::{
    error::FormError,
    loader::load_fields_with,
    options::CompileOptions,
    verifier::verify_schema_with,
};
use schemaform_schema::{FieldDescriptor, SchemaNode};
use tracing::debug;

/// Parse schema JSON text into a `SchemaNode`.
pub fn parse_schema(text: &str) -> Result<SchemaNode, FormError> {
    Ok(serde_json::from_str(text)?)
}

/// Compile schema JSON text into `(SchemaNode, Vec<FieldDescriptor>)` with
/// default options. Returns `Err(FormError)` if parsing or verification fails.
pub fn compile_schema(text: &str) -> Result<(SchemaNode, Vec<FieldDescriptor>), FormError> {
    compile_schema_with(text, &CompileOptions::default())
}

pub fn compile_schema_with(
    text: &str,
    options: &CompileOptions,
) -> Result<(SchemaNode, Vec<FieldDescriptor>), FormError> {
    let schema = parse_schema(text)?;
    let fields = compile_node(&schema, options)?;
    Ok((schema, fields))
}

/// Verify (if enabled) and flatten an already parsed schema.
pub fn compile_node(schema: &SchemaNode, options: &CompileOptions) -> Result<Vec<FieldDescriptor>, FormError> {
    if options.verify {
        verify_schema_with(schema, options)?;
    }
    let mut fields = Vec::new();
    load_fields_with(schema, &mut fields, None, options)?;
    debug!(count = fields.len(), "compiled schema");
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verifier::verify_schema;

    #[test]
    fn parse_error_carries_position() {
        let err = parse_schema("{\n  \"type\": }").unwrap_err();
        match err {
            FormError::ParseError { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_type_is_a_parse_error() {
        assert!(matches!(parse_schema(r#"{"title": "x"}"#), Err(FormError::ParseError { .. })));
    }

    #[test]
    fn verifier_findings_do_not_block_compilation() {
        let text = r#"{"type": "string", "minLength": 3, "maxLength": 1}"#;
        let (schema, fields) = compile_schema(text).unwrap();
        assert_eq!(fields[0].attrs.minlength, Some(3));
        assert!(matches!(verify_schema(&schema), Err(FormError::VerifierError(_))));

        let options = CompileOptions { verify: false, ..Default::default() };
        assert_eq!(compile_schema_with(text, &options).unwrap().1.len(), 1);
    }

    #[test]
    fn look_ahead_pattern_is_kept() {
        let (_schema, fields) = compile_schema(r#"{"type": "string", "pattern": "^(?=.*\\d).+$"}"#).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].attrs.pattern.as_deref(), Some("^(?=.*\\d).+$"));
    }

    #[test]
    fn hidden_nodes_are_not_verified() {
        let text = r#"{
            "type": "object",
            "required": ["gone"],
            "properties": {
                "name": { "type": "string" },
                "secret": { "type": "string", "visible": false, "pattern": "[a-" }
            }
        }"#;
        let (_schema, fields) = compile_schema(text).unwrap();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].attrs.name.as_deref(), Some("name"));
    }

    #[test]
    fn strict_options_reject_unknown_types() {
        let text = r#"{"type": "object", "properties": {"when": {"type": "date"}}}"#;
        assert_eq!(compile_schema(text).unwrap().1.len(), 0);
        assert!(matches!(
            compile_schema_with(text, &CompileOptions::strict()),
            Err(FormError::UnsupportedType { .. })
        ));
    }
}
