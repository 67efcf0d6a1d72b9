//! Error types for schema lookups.

use thiserror::Error;

/// Error type for schema-level operations.
///
/// Lookup misses (unknown built-in, undeclared type name) are not errors and
/// never surface here. Only caller configuration bugs do.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Requested target language is not one of the supported set.
    #[error("unsupported target language '{name}'")]
    UnsupportedLanguage {
        /// Identifier that was requested.
        name: String,
    },
}

impl SchemaError {
    /// Creates an unsupported language error.
    pub fn unsupported_language(name: impl Into<String>) -> Self {
        Self::UnsupportedLanguage { name: name.into() }
    }
}
