//! # Exclusive Options
//!
//! At most one member of an [`ExclusiveGroup`] may be active. Resolution
//! looks at two tiers in order:
//!
//! 1. **Arguments**: members supplied on the command line. One match wins
//!    outright; two or more is [`ExclusiveError::InArgs`].
//! 2. **Environment**: only when no member was given as an argument,
//!    members with a value from an environment variable or secret file.
//!    One match wins; two or more is [`ExclusiveError::InEnvs`].
//!
//! No match at either tier selects nothing and is not an error.

pub mod errors;
pub mod handler;
pub mod select;

pub use errors::{ExclusiveError, SelectError, Tier};
pub use handler::ExclusiveGroup;
pub use select::Select;
