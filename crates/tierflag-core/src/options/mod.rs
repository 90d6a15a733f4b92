//! Option definitions and option sets.
//!
//! An [`OptionSpec`] carries everything needed to register one option with
//! clap and to resolve its value later. Options are grouped into an
//! [`OptionSet`] per command scope.

pub mod errors;
pub mod set;
pub mod types;

pub use errors::OptionError;
pub use set::{OptionItem, OptionSet};
pub use types::{OptionSpec, ValueKind};
