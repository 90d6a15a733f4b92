//! The seam between the core and the argument parser.
//!
//! The core never parses argv. After the parser has run, it needs two
//! things for the current command scope: which options were supplied on
//! the command line, and which options have a value from a non-default
//! source (environment variable or secret file). [`ParseContext`] is that
//! contract; [`ClapContext`] implements it over clap's `ArgMatches`.

use clap::ArgMatches;
use clap::parser::ValueSource;

use crate::env::Environment;
use crate::options::{OptionSet, OptionSpec, ValueKind};

pub trait ParseContext {
    /// Identifiers of the options supplied on the command line for this
    /// scope only; arguments of a parent command are not included.
    fn local_names(&self) -> Vec<String>;

    /// Values given for `option` on the command line, in order, or `None`
    /// if it was not supplied there.
    fn argument_values(&self, option: &OptionSpec) -> Option<Vec<String>>;

    /// Environment that env-sourced values are read from.
    fn environment(&self) -> &dyn Environment;

    /// True if `option` has a value from an environment variable or a
    /// secret file. Command-line arguments are not considered.
    ///
    /// Variables that are present but empty do not count.
    fn is_set_externally(&self, option: &OptionSpec) -> bool {
        let env = self.environment();
        option
            .env_vars
            .iter()
            .any(|v| env.var(v).is_some_and(|value| !value.is_empty()))
            || option.file_path.is_some()
    }
}

/// [`ParseContext`] over the `ArgMatches` of one command scope.
///
/// `options` must be the set registered on the command that produced
/// `matches` (for a subcommand: the subcommand's own set).
pub struct ClapContext<'a> {
    matches: &'a ArgMatches,
    options: &'a OptionSet,
    env: &'a dyn Environment,
}

impl<'a> ClapContext<'a> {
    pub fn new(matches: &'a ArgMatches, options: &'a OptionSet, env: &'a dyn Environment) -> Self {
        Self {
            matches,
            options,
            env,
        }
    }

    pub fn matches(&self) -> &'a ArgMatches {
        self.matches
    }

    pub fn options(&self) -> &'a OptionSet {
        self.options
    }

    fn value_source(&self, name: &str) -> Option<ValueSource> {
        // value_source asserts on ids clap has never seen
        if self.matches.ids().any(|id| id.as_str() == name) {
            self.matches.value_source(name)
        } else {
            None
        }
    }

    fn on_command_line(&self, name: &str) -> bool {
        self.value_source(name) == Some(ValueSource::CommandLine)
    }
}

impl ParseContext for ClapContext<'_> {
    fn local_names(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| self.on_command_line(&o.name))
            .map(|o| o.name.clone())
            .collect()
    }

    fn argument_values(&self, option: &OptionSpec) -> Option<Vec<String>> {
        if !self.on_command_line(&option.name) {
            return None;
        }
        if option.kind == ValueKind::Switch {
            return Some(vec!["true".to_string()]);
        }
        let raw = self.matches.try_get_raw(&option.name).ok()??;
        Some(raw.map(|v| v.to_string_lossy().into_owned()).collect())
    }

    fn environment(&self) -> &dyn Environment {
        self.env
    }
}
