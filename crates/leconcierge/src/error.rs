// Error Handling
//
// *La Gestion des Erreurs* (The Error Management) - Configuration and catalog loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Result type for concierge operations
pub type Result<T> = std::result::Result<T, ConciergeError>;

/// Concierge error types
///
/// Every variant is a startup-time failure. Once a catalog has been accepted,
/// plan generation, inventory ordering and timeline lookup cannot fail.
#[derive(Debug, Error)]
pub enum ConciergeError {
    /// The catalog data breaks an invariant the engine relies on
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong with the data
        message: String,
        /// Optional hint for fixing the data
        suggestion: Option<String>,
    },

    /// A catalog document could not be parsed
    #[error("Catalog parse error: {message}")]
    Parse {
        /// Parser message
        message: String,
        /// Source file, when loaded from disk
        path: Option<PathBuf>,
    },

    /// I/O errors with context
    #[error("I/O error: {context} (path: {path:?})")]
    Io {
        /// Operation being performed
        context: String,
        /// Offending path
        path: Option<PathBuf>,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

impl ConciergeError {
    /// Create a config error
    pub fn config_error(message: impl Into<String>, suggestion: Option<String>) -> Self {
        ConciergeError::Config {
            message: message.into(),
            suggestion,
        }
    }

    /// Create a parse error, optionally tied to a file
    pub fn parse_error(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        ConciergeError::Parse {
            message: message.into(),
            path,
        }
    }

    /// Create an I/O error for a path
    pub fn io_error(context: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConciergeError::Io {
            context: context.into(),
            path: Some(path.into()),
            source,
        }
    }

    /// Get user-friendly suggestion for recovery
    pub fn suggestion(&self) -> Option<String> {
        match self {
            ConciergeError::Config { suggestion, .. } => suggestion.clone(),
            ConciergeError::Parse { .. } => {
                Some("Check the catalog document against the sample catalog layout.".to_string())
            }
            ConciergeError::Io { .. } => None,
        }
    }
}

/// Format error for user display
pub fn format_error(error: &ConciergeError) -> String {
    let mut message = format!("Error: {}", error);

    if let Some(suggestion) = error.suggestion() {
        message.push_str(&format!("\n\nSuggestion: {}", suggestion));
    }

    message
}
