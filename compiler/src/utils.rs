use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

pub fn quote(text: &str) -> String {
    Value::String(text.to_owned()).to_string()
}

/// Lowercases `text` and joins its whitespace-separated words with `-`.
pub fn slugify(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), "-").to_lowercase()
}

/// JavaScript-style truthiness of a JSON value.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Joins a JSON-pointer-like path for diagnostics; the root is `/`.
pub fn join_path(path: &[&str]) -> String {
    if path.is_empty() {
        "/".to_owned()
    } else {
        path.iter().map(|segment| format!("/{}", segment)).collect()
    }
}
