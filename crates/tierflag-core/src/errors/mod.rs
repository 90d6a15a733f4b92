use std::error::Error;

use crate::exclusive::{ExclusiveError, SelectError};
use crate::options::OptionError;
use crate::resolve::ResolveError;

/// Base trait for all tierflag errors
pub trait TierflagError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error was caused by how the program was invoked
    /// (arguments, environment) rather than by the program itself
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the library
pub type TierflagResult<T> = Result<T, Box<dyn TierflagError>>;

/// Any failure raised while setting up a command invocation.
///
/// All of these abort the invocation before its action runs; none of them
/// is transient, so callers should not retry.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Option(#[from] OptionError),

    #[error(transparent)]
    Exclusive(#[from] ExclusiveError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Select(#[from] SelectError),
}

impl SetupError {
    /// True for an exclusivity conflict at any tier, including one raised
    /// from inside `Select`.
    pub fn is_exclusive_conflict(&self) -> bool {
        self.as_exclusive().is_some()
    }

    /// The underlying exclusivity conflict, if that is what this is.
    pub fn as_exclusive(&self) -> Option<&ExclusiveError> {
        match self {
            SetupError::Exclusive(e) => Some(e),
            SetupError::Select(SelectError::Exclusive(e)) => Some(e),
            _ => None,
        }
    }
}

impl TierflagError for SetupError {
    fn error_code(&self) -> &'static str {
        match self {
            SetupError::Option(e) => e.error_code(),
            SetupError::Exclusive(e) => e.error_code(),
            SetupError::Resolve(e) => e.error_code(),
            SetupError::Select(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SetupError::Option(e) => e.is_user_error(),
            SetupError::Exclusive(e) => e.is_user_error(),
            SetupError::Resolve(e) => e.is_user_error(),
            SetupError::Select(e) => e.is_user_error(),
        }
    }
}
