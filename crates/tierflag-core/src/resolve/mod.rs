//! Effective option values.
//!
//! Sources are ranked, highest first:
//!
//! 1. command-line argument
//! 2. environment variables, in the option's `env_vars` order (the
//!    canonical variable wins over the alias variable)
//! 3. secret file
//! 4. compiled-in default

pub mod errors;
pub mod operations;
pub mod types;

pub use errors::ResolveError;
pub use operations::resolve_option;
pub use types::{Resolved, Source, Sourced};
