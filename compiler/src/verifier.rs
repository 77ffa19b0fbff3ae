use crate::{
    error::FormError,
    options::{CompileOptions, UnknownTypePolicy},
    utils::{join_path, quote},
};
use regex::Regex;
use schemaform_schema::{Required, SchemaNode, SchemaType};
use tracing::warn;

/// Returns `Ok(())` if verification passed, or the first problem found.
/// Every finding is an error here, unknown types included, and hidden nodes
/// are checked too.
pub fn verify_schema(schema: &SchemaNode) -> Result<(), FormError> {
    let verifier = Verifier {
        unknown_types: UnknownTypePolicy::Reject,
        strict:        true,
    };
    verifier.verify_node(schema, &mut Vec::new())
}

/// Verification as run by the compile pipeline.
///
/// Findings are logged as warnings and hidden nodes are not visited. The only
/// error is an unknown type under [`UnknownTypePolicy::Reject`].
pub fn verify_schema_with(schema: &SchemaNode, options: &CompileOptions) -> Result<(), FormError> {
    let verifier = Verifier {
        unknown_types: options.unknown_types,
        strict:        false,
    };
    verifier.verify_node(schema, &mut Vec::new())
}

struct Verifier {
    unknown_types: UnknownTypePolicy,
    strict:        bool,
}

impl Verifier {
    fn verify_node<'a>(&self, node: &'a SchemaNode, path: &mut Vec<&'a str>) -> Result<(), FormError> {
        if !self.strict && !node.is_visible() {
            return Ok(());
        }

        // 1) Known type
        if let SchemaType::Other(type_name) = &node.schema_type {
            if self.unknown_types == UnknownTypePolicy::Reject {
                return Err(FormError::UnsupportedType {
                    path:      join_path(path),
                    type_name: type_name.clone(),
                });
            }
        }

        // 2) Bounds
        if let (Some(min), Some(max)) = (node.min_length, node.max_length) {
            if min > max {
                self.report(format!(
                    "minLength {} is larger than maxLength {} at {}",
                    min,
                    max,
                    join_path(path)
                ))?;
            }
        }
        if let (Some(min), Some(max)) = (node.min_items, node.max_items) {
            if min > max {
                self.report(format!(
                    "minItems {} is larger than maxItems {} at {}",
                    min,
                    max,
                    join_path(path)
                ))?;
            }
        }

        // 3) Pattern compiles
        if let Some(pattern) = &node.pattern {
            if let Err(err) = Regex::new(pattern) {
                self.report(format!(
                    "The pattern {} at {} is invalid: {}",
                    quote(pattern),
                    join_path(path),
                    err
                ))?;
            }
        }

        // 4) Required properties exist
        if node.schema_type == SchemaType::Object {
            if let Some(Required::Properties(names)) = &node.required {
                for missing in names.iter().filter(|n| !node.properties.contains_key(n.as_str())) {
                    self.report(format!(
                        "The required property {} is not defined at {}",
                        quote(missing),
                        join_path(path)
                    ))?;
                }
            }
        }

        for (key, child) in &node.properties {
            path.push(key.as_str());
            self.verify_node(child, path)?;
            path.pop();
        }
        Ok(())
    }

    /// Fails in strict mode, logs otherwise.
    fn report(&self, msg: String) -> Result<(), FormError> {
        if self.strict {
            return Err(FormError::VerifierError(msg));
        }
        warn!("{}", msg);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn verify(schema: Value) -> Result<(), FormError> {
        verify_schema(&serde_json::from_value(schema).unwrap())
    }

    fn message(result: Result<(), FormError>) -> String {
        result.unwrap_err().to_string()
    }

    #[test]
    fn accepts_valid_schema() {
        verify(json!({
            "type": "object",
            "required": ["name"],
            "properties": {
                "name": { "type": "string", "minLength": 1, "maxLength": 10, "pattern": "^[a-z]+$" },
                "hidden": { "type": "boolean", "visible": false },
                "tags": { "type": "array", "minItems": 1, "maxItems": 1 }
            }
        }))
        .unwrap();
    }

    #[test]
    fn rejects_unknown_type_with_path() {
        let msg = message(verify(json!({
            "type": "object",
            "properties": { "outer": { "type": "object", "properties": { "x": { "type": "date" } } } }
        })));
        assert_eq!(msg, "Unsupported schema type \"date\" at /outer/x");
    }

    #[test]
    fn unknown_type_allowed_when_skipping() {
        let schema: SchemaNode = serde_json::from_value(json!({ "type": "date" })).unwrap();
        verify_schema_with(&schema, &CompileOptions::default()).unwrap();
    }

    #[test]
    fn rejects_inverted_bounds() {
        let msg = message(verify(json!({ "type": "string", "minLength": 5, "maxLength": 2 })));
        assert_eq!(msg, "Verifier error: minLength 5 is larger than maxLength 2 at /");

        let msg = message(verify(json!({ "type": "array", "minItems": 3, "maxItems": 1 })));
        assert!(msg.contains("minItems 3 is larger than maxItems 1"));
    }

    #[test]
    fn rejects_bad_pattern() {
        let msg = message(verify(json!({
            "type": "object",
            "properties": { "code": { "type": "string", "pattern": "[a-" } }
        })));
        assert!(msg.starts_with("Verifier error: The pattern \"[a-\" at /code is invalid"));
    }

    #[test]
    fn hidden_nodes_are_still_verified() {
        let msg = message(verify(json!({ "type": "string", "visible": false, "pattern": "(" })));
        assert!(msg.contains("is invalid"));
    }

    #[test]
    fn pipeline_mode_only_warns() {
        let schema: SchemaNode = serde_json::from_value(json!({
            "type": "object",
            "required": ["gone"],
            "properties": {
                "pin": { "type": "string", "pattern": "^(?=.*\\d).+$", "minLength": 6, "maxLength": 4 },
                "hidden": { "type": "string", "visible": false, "pattern": "(" }
            }
        }))
        .unwrap();

        verify_schema_with(&schema, &CompileOptions::default()).unwrap();
        verify_schema_with(&schema, &CompileOptions::strict()).unwrap();
        assert!(verify_schema(&schema).is_err());
    }

    #[test]
    fn pipeline_mode_rejects_unknown_type_under_reject() {
        let schema: SchemaNode = serde_json::from_value(json!({ "type": "date" })).unwrap();
        let err = verify_schema_with(&schema, &CompileOptions::strict()).unwrap_err();
        assert!(matches!(err, FormError::UnsupportedType { .. }));
    }

    #[test]
    fn rejects_missing_required_property() {
        let msg = message(verify(json!({
            "type": "object",
            "required": ["ghost"],
            "properties": { "real": { "type": "string" } }
        })));
        assert_eq!(msg, "Verifier error: The required property \"ghost\" is not defined at /");
    }
}
