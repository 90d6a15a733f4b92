//! Option definitions for the root command and its subcommands.

use tierflag_core::naming::NameResolver;
use tierflag_core::{Environment, FlagPrefix, OptionError, OptionSet, OptionSpec};

pub const APP_NAME: &str = "tierflag";
pub const APP_PREFIX: &str = "TIERFLAG_";
pub const SPLIT_PREFIX: &str = "TIERFLAG_SPLIT_";

pub const COUNT: &str = "count";
pub const HORIZONTAL: &str = "horizontal";
pub const VERTICAL: &str = "vertical";

/// Every option set the CLI registers, one per command scope.
#[derive(Debug, Clone)]
pub struct Flags {
    pub app: OptionSet,
    pub split: OptionSet,
}

impl Flags {
    /// Derive every option, locating secret files through `env`.
    pub fn new(env: &dyn Environment) -> Result<Self, OptionError> {
        let app = NameResolver::new(FlagPrefix::new(APP_PREFIX))
            .with_env(env)
            .defaults_dir(APP_NAME);
        let split = NameResolver::new(FlagPrefix::new(SPLIT_PREFIX))
            .with_env(env)
            .defaults_dir(APP_NAME);

        Ok(Self {
            app: OptionSet::build([OptionSpec::from_name(app.name(COUNT))
                .help("Number of panes")
                .value_name("N")])?,
            split: OptionSet::build([
                OptionSpec::from_name(split.name_with_alias(HORIZONTAL, "H"))
                    .help("Split horizontally")
                    .value_name("WIDTH"),
                OptionSpec::from_name(split.name_with_alias(VERTICAL, "V"))
                    .help("Split vertically")
                    .value_name("HEIGHT"),
            ])?,
        })
    }
}
