use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error at line {line}, column {column}: {msg}")]
    ParseError {
        msg:    String,
        line:   usize,
        column: usize,
    },

    #[error("Unsupported schema type \"{type_name}\" at {path}")]
    UnsupportedType {
        path:      String,
        type_name: String,
    },

    #[error("Serialization error: {0}")]
    EncodeError(String),

    #[error("Verifier error: {0}")]
    VerifierError(String),
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::ParseError {
            msg:    err.to_string(),
            line:   err.line(),
            column: err.column(),
        }
    }
}
