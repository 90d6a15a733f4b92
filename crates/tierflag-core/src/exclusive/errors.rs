use std::fmt;

use crate::errors::TierflagError;

/// Precedence level an option value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Command-line arguments (highest).
    Args,
    /// Environment variables and secret files.
    Envs,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Args => f.write_str("args"),
            Tier::Envs => f.write_str("envs"),
        }
    }
}

/// More than one member of an exclusive group is active at the same tier.
///
/// Every variant is an exclusivity conflict; match on the variant or on
/// [`ExclusiveError::tier`] for tier-specific handling.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExclusiveError {
    #[error("more than one flags are set in args ({flags})")]
    InArgs { flags: String },

    #[error("more than one flags are set in envs ({flags})")]
    InEnvs { flags: String },
}

impl ExclusiveError {
    pub(crate) fn new(tier: Tier, flags: String) -> Self {
        match tier {
            Tier::Args => ExclusiveError::InArgs { flags },
            Tier::Envs => ExclusiveError::InEnvs { flags },
        }
    }

    pub fn tier(&self) -> Tier {
        match self {
            ExclusiveError::InArgs { .. } => Tier::Args,
            ExclusiveError::InEnvs { .. } => Tier::Envs,
        }
    }

    /// Conflicting options, dash-prefixed and comma-joined in group order.
    pub fn flags(&self) -> &str {
        match self {
            ExclusiveError::InArgs { flags } | ExclusiveError::InEnvs { flags } => flags,
        }
    }
}

impl TierflagError for ExclusiveError {
    fn error_code(&self) -> &'static str {
        match self {
            ExclusiveError::InArgs { .. } => "EXCLUSIVE_FLAGS_IN_ARGS",
            ExclusiveError::InEnvs { .. } => "EXCLUSIVE_FLAGS_IN_ENVS",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error("Option '{name}' is not a member of the exclusive group")]
    NotInGroup { name: String },

    #[error("Option '{name}' already has a callback")]
    DuplicateArm { name: String },

    #[error(transparent)]
    Exclusive(#[from] ExclusiveError),
}

impl TierflagError for SelectError {
    fn error_code(&self) -> &'static str {
        match self {
            SelectError::NotInGroup { .. } => "SELECT_NOT_IN_GROUP",
            SelectError::DuplicateArm { .. } => "SELECT_DUPLICATE_ARM",
            SelectError::Exclusive(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, SelectError::Exclusive(_))
    }
}
