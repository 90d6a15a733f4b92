use std::path::PathBuf;

use crate::errors::TierflagError;
use crate::resolve::types::Source;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Unknown option '{name}'")]
    UnknownOption { name: String },

    #[error("Invalid value '{value}' for '{name}' (from {origin}): {message}")]
    InvalidValue {
        name: String,
        value: String,
        origin: Source,
        message: String,
    },

    #[error("Failed to read secret file '{}' for '{name}': {error}", path.display())]
    SecretFileUnreadable {
        name: String,
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

impl TierflagError for ResolveError {
    fn error_code(&self) -> &'static str {
        match self {
            ResolveError::UnknownOption { .. } => "RESOLVE_UNKNOWN_OPTION",
            ResolveError::InvalidValue { .. } => "RESOLVE_INVALID_VALUE",
            ResolveError::SecretFileUnreadable { .. } => "RESOLVE_SECRET_FILE_UNREADABLE",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ResolveError::InvalidValue { .. } | ResolveError::SecretFileUnreadable { .. }
        )
    }
}
