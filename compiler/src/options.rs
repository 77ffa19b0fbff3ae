use serde::{Deserialize, Serialize};

/// What the walker does with a node whose `type` it does not know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownTypePolicy {
    /// Emit no descriptor and log a warning.
    #[default]
    Skip,
    /// Fail with `FormError::UnsupportedType`.
    Reject,
}

/// Compiler settings. Deserializable so they can live in a JSON config file;
/// missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CompileOptions {
    pub unknown_types: UnknownTypePolicy,
    /// Run the verifier before walking.
    pub verify: bool,
}

impl CompileOptions {
    pub fn strict() -> Self {
        CompileOptions {
            unknown_types: UnknownTypePolicy::Reject,
            ..Default::default()
        }
    }
}

impl Default for CompileOptions {
    fn default() -> Self {
        CompileOptions {
            unknown_types: UnknownTypePolicy::Skip,
            verify:        true,
        }
    }
}
