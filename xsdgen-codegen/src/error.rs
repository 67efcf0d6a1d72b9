//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema-level configuration error.
    #[error("schema error: {0}")]
    Schema(#[from] xsdgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Schema fetch error.
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Directory walk error.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// Code generation error.
    #[error("generation error: {message}")]
    Generation {
        /// Error message.
        message: String,
    },

    /// A generation hook reported a failure.
    #[error("hook '{method}' failed: {message}")]
    Hook {
        /// Hook method name.
        method: String,
        /// Error message.
        message: String,
    },

    /// The generator was built without a target language.
    #[error("no target language configured")]
    MissingLanguage,
}

impl CodegenError {
    /// Creates a generation error with the given message.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a hook error for the given method.
    pub fn hook(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Hook {
            method: method.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error comes from caller configuration.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Schema(_) | Self::MissingLanguage)
    }
}
