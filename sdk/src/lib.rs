//! schemaform
//!
//! This crate is the entry point for applications that turn JSON-Schema-like
//! documents into form field descriptors.
//!
//! - Compiler functions and `FormError` (re-exported from the compiler)
//! - Descriptor types (re-exported from the schema crate)
//! - `compile_to_json` and a minimal `<option>` renderer for select fields

pub mod html;

pub use schemaform_compiler::{
    array_ordered_values, array_unordered_values, compile_schema, compile_schema_with,
    load_fields, load_fields_with, single_value, CompileOptions, FormError, UnknownTypePolicy,
};
pub use schemaform_schema::{
    Attrs, ChoiceItem, FieldDescriptor, FieldValue, SchemaNode, SchemaType, Toggle,
};

/// Compile schema JSON text into a pretty-printed JSON array of field descriptors.
pub fn compile_to_json(text: &str, options: &CompileOptions) -> Result<String, FormError> {
    let (_schema, fields) = compile_schema_with(text, options)?;
    serde_json::to_string_pretty(&fields).map_err(|e| FormError::EncodeError(e.to_string()))
}

pub mod parser {
    pub use schemaform_compiler::{
        parse_array, parse_boolean, parse_items, parse_string, set_common_fields, set_item_name,
    };
}

pub mod error {
    pub use schemaform_compiler::error::FormError;
}
