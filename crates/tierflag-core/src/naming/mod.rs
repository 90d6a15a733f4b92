//! # Name Derivation
//!
//! Every option is known by several names, all derived from a namespace
//! prefix, an optional group and a base name:
//!
//! | what              | group `hello`, name `flag`, prefix `EXAMPLE_` |
//! |-------------------|-----------------------------------------------|
//! | flag name         | `hello-flag`                                  |
//! | alias             | `hello-f`                                     |
//! | env vars          | `EXAMPLE_HELLO_FLAG`, `EXAMPLE_HELLO_F`       |
//! | secret file vars  | `EXAMPLE_HELLO_FLAG_FILE`, `EXAMPLE_HELLO_F_FILE` |
//!
//! ```
//! use tierflag_core::{FlagPrefix, MapEnv};
//! use tierflag_core::naming::NameResolver;
//!
//! let env = MapEnv::new();
//! let names = NameResolver::new(FlagPrefix::new("EXAMPLE_"))
//!     .with_env(&env)
//!     .group("hello")
//!     .name("flag");
//! assert_eq!(names.name, "hello-flag");
//! assert_eq!(names.aliases, vec!["hello-f"]);
//! assert_eq!(names.env_vars, vec!["EXAMPLE_HELLO_FLAG", "EXAMPLE_HELLO_F"]);
//! ```

pub mod operations;
pub mod types;

pub use operations::{NameResolver, env_var_name, qualify, short_name};
pub use types::{FlagPrefix, OptionName};
