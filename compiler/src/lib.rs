//! schemaform-compiler
//!
//! This crate implements:
//!  1) Field normalization shared by every schema type (`set_common_fields`),
//!  2) Per-type parsers (`parse_boolean`, `parse_string`, `parse_array`),
//!  3) Choice list parsing and item naming (`parse_items`, `set_item_name`),
//!  4) Value recovery from item selection state,
//!  5) The schema walker (`load_fields`) and a verifier,
//!  6) Error types (`FormError`) and `CompileOptions`.

pub mod error;
pub mod options;
pub mod utils;
pub mod common;
pub mod items;
pub mod parser;
pub mod values;
pub mod loader;
pub mod verifier;
pub mod compiler;

pub use common::set_common_fields;
pub use compiler::{compile_node, compile_schema, compile_schema_with, parse_schema};
pub use error::FormError;
pub use items::{parse_items, set_item_name};
pub use loader::{load_fields, load_fields_with};
pub use options::{CompileOptions, UnknownTypePolicy};
pub use parser::{parse_array, parse_boolean, parse_string};
pub use values::{array_ordered_values, array_unordered_values, single_value};
pub use verifier::{verify_schema, verify_schema_with};
