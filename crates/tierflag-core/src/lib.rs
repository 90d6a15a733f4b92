//! tierflag-core: Ranked option sources and exclusive flag resolution
//!
//! This library derives the names an option is known by (flag, alias,
//! environment variables, secret file), records which options were given
//! on the command line, and decides which member of a mutually exclusive
//! group wins. It is used by the `tierflag` CLI and by any application
//! that builds its command line with clap.
//!
//! # Main Entry Points
//!
//! - [`naming`] - Derive flag names, aliases and environment variables
//! - [`probe`] - Locate the first existing secret file
//! - [`local_set`] - Per-invocation record of command-line arguments
//! - [`exclusive`] - Tiered exclusivity resolution and `Select`
//! - [`resolve`] - Effective values from argument, env, file and default
//! - [`invocation`] - Glue binding all of the above to one clap scope

pub mod chain;
pub mod context;
pub mod env;
pub mod errors;
pub mod events;
pub mod exclusive;
pub mod invocation;
pub mod local_set;
pub mod logging;
pub mod naming;
pub mod options;
pub mod probe;
pub mod resolve;

// Re-export commonly used types at crate root for convenience
pub use chain::{Hook, chain};
pub use context::{ClapContext, ParseContext};
pub use env::{Environment, MapEnv, ProcessEnv};
pub use errors::{SetupError, TierflagError};
pub use exclusive::{ExclusiveError, ExclusiveGroup, Select, SelectError, Tier};
pub use invocation::Invocation;
pub use local_set::LocalSet;
pub use naming::{FlagPrefix, NameResolver, OptionName, short_name};
pub use options::{OptionError, OptionItem, OptionSet, OptionSpec, ValueKind};
pub use probe::{ProbeOutcome, first_existing};
pub use resolve::{ResolveError, Resolved, Source, Sourced};

// Re-export logging initialization
pub use logging::init_logging;
