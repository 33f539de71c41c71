//! Error types for rowcast operations

/// Result type alias for rowcast operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for rowcast operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Malformed JSON input
    #[error("Malformed JSON at byte {index}: {message}")]
    Tokenizer {
        /// Byte offset where tokenization failed
        index: usize,
        /// Error description
        message: String,
    },

    /// Document shape the engine cannot process
    #[error("Unsupported input shape: {0}")]
    UnsupportedInput(String),

    /// External schema failed validation
    #[error("Schema validation failed: {0}")]
    SchemaValidation(String),

    /// Input exceeds the configured size limit
    #[error("Input of {size} bytes exceeds the {limit} byte limit")]
    InputTooLarge {
        /// Size of the rejected input
        size: usize,
        /// Configured limit
        limit: usize,
    },

    /// Nesting exceeds the configured recursion limit
    #[error("Nesting exceeds the recursion limit of {limit}")]
    RecursionLimit {
        /// Configured limit
        limit: usize,
    },
}

impl Error {
    /// Create a tokenizer error
    pub fn tokenizer(index: usize, message: impl Into<String>) -> Self {
        Self::Tokenizer {
            index,
            message: message.into(),
        }
    }

    /// Create an unsupported input error
    pub fn unsupported_input(message: impl Into<String>) -> Self {
        Self::UnsupportedInput(message.into())
    }

    /// Create a schema validation error
    pub fn schema_validation(message: impl Into<String>) -> Self {
        Self::SchemaValidation(message.into())
    }
}

impl From<jiter::JiterError> for Error {
    fn from(err: jiter::JiterError) -> Self {
        Error::Tokenizer {
            index: err.index,
            message: err.error_type.to_string(),
        }
    }
}
