//! Data model for the schemaform compiler: the JSON-Schema-like input nodes
//! and the renderer-agnostic field descriptors produced from them.
//!
//! ```
//! use schemaform_schema::*;
//!
//! let node: SchemaNode = serde_json::from_str(r#"{ "type": "string", "title": "Name" }"#).unwrap();
//! assert_eq!(node.schema_type, SchemaType::String);
//! assert!(node.is_visible());
//!
//! let item = ChoiceItem::from_entry(&serde_json::json!(42));
//! assert_eq!(item.label, "42");
//! ```

pub mod field;
pub mod node;

pub use field::*;
pub use node::*;

/// Default lower bound for array and choice fields without `minItems`.
pub const DEFAULT_MIN_ITEMS: u64 = 1;
/// Default upper bound for array and choice fields without `maxItems`.
pub const DEFAULT_MAX_ITEMS: u64 = 1000;
