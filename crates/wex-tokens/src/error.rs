//! Error types for token catalogs and override files.
//!
//! Resolution and export never fail; errors only come from loading data:
//! catalog and override files, imported stylesheets, and registry validation.

use std::path::PathBuf;

use thiserror::Error;

/// A registry consistency problem found by [`TokenRegistry::validate`](crate::TokenRegistry::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A token's reference points at a name that is not in the catalog.
    #[error("token '{token}' references unknown token '{target}'")]
    UnknownReference { token: String, target: String },

    /// Two tokens share a name.
    #[error("token '{0}' is defined more than once")]
    DuplicateToken(String),

    /// Semantic references loop back on themselves.
    #[error("cycle detected in token references: {}", .path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}

/// Errors from loading catalogs and override snapshots.
#[derive(Debug, Error)]
pub enum TokenError {
    /// YAML parse error.
    #[error("failed to parse YAML{}: {message}", location(.path))]
    Yaml {
        path: Option<PathBuf>,
        message: String,
    },

    /// JSON parse error.
    #[error("failed to parse JSON{}: {message}", location(.path))]
    Json {
        path: Option<PathBuf>,
        message: String,
    },

    /// CSS could not be tokenized into rules.
    #[error("failed to parse CSS{} at {line}:{column}: {message}", location(.path))]
    Css {
        path: Option<PathBuf>,
        line: u32,
        column: u32,
        message: String,
    },

    /// File could not be read or written.
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A token definition is structurally wrong.
    #[error("invalid token definition '{name}': {message}")]
    InvalidDefinition { name: String, message: String },

    /// The catalog failed validation.
    #[error("invalid token registry: {}", join_errors(.0))]
    Registry(Vec<RegistryError>),
}

impl From<serde_yaml::Error> for TokenError {
    fn from(err: serde_yaml::Error) -> Self {
        TokenError::Yaml {
            path: None,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TokenError {
    fn from(err: serde_json::Error) -> Self {
        TokenError::Json {
            path: None,
            message: err.to_string(),
        }
    }
}

impl TokenError {
    /// Attaches a source path to parse errors.
    pub fn with_path(self, source: impl Into<PathBuf>) -> Self {
        match self {
            TokenError::Yaml { message, .. } => TokenError::Yaml {
                path: Some(source.into()),
                message,
            },
            TokenError::Json { message, .. } => TokenError::Json {
                path: Some(source.into()),
                message,
            },
            TokenError::Css {
                line,
                column,
                message,
                ..
            } => TokenError::Css {
                path: Some(source.into()),
                line,
                column,
                message,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" {}", p.display()))
        .unwrap_or_default()
}

fn join_errors(errors: &[RegistryError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for token loading operations.
pub type Result<T> = std::result::Result<T, TokenError>;
