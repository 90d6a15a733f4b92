//! One command scope, from parsed arguments to resolved values.
//!
//! ```
//! use clap::Command;
//! use tierflag_core::{ExclusiveGroup, Invocation, MapEnv, OptionSet, OptionSpec};
//!
//! let options = OptionSet::build([
//!     OptionSpec::new("a").env_var("APP_A"),
//!     OptionSpec::new("b").env_var("APP_B"),
//! ])
//! .unwrap();
//! let matches = options
//!     .apply(Command::new("prog"))
//!     .try_get_matches_from(["prog"])
//!     .unwrap();
//! let env = MapEnv::new().with("APP_A", "3");
//!
//! let mut invocation = Invocation::new(&matches, &options, &env);
//! invocation.before();
//!
//! let a = invocation.option("a").unwrap();
//! let b = invocation.option("b").unwrap();
//! let winner = invocation.exclusive(&ExclusiveGroup::new([a, b])).unwrap();
//! assert_eq!(winner.map(|o| o.name.as_str()), Some("a"));
//! assert_eq!(invocation.resolve().unwrap().get::<i32>("a").unwrap(), Some(3));
//! ```

use clap::ArgMatches;
use tracing::info;

use crate::context::{ClapContext, ParseContext};
use crate::env::Environment;
use crate::errors::SetupError;
use crate::events;
use crate::exclusive::{ExclusiveError, ExclusiveGroup, Select, SelectError};
use crate::local_set::LocalSet;
use crate::options::{OptionSet, OptionSpec};
use crate::resolve::{ResolveError, Resolved};

pub struct Invocation<'a> {
    ctx: ClapContext<'a>,
    local: LocalSet,
}

impl<'a> Invocation<'a> {
    /// `options` must be the set registered on the command that produced
    /// `matches`.
    pub fn new(matches: &'a ArgMatches, options: &'a OptionSet, env: &'a dyn Environment) -> Self {
        Self {
            ctx: ClapContext::new(matches, options, env),
            local: LocalSet::new(),
        }
    }

    /// Before-action phase: record the options given on the command line.
    pub fn before(&mut self) {
        self.local.init(&self.ctx);
        info!(
            event = "core.invocation.before_completed",
            local_count = self.local.len()
        );
    }

    /// [`Invocation::before`] as a chainable hook.
    pub fn before_hook(&mut self) -> Result<(), SetupError> {
        self.before();
        Ok(())
    }

    pub fn local_set(&self) -> &LocalSet {
        &self.local
    }

    pub fn context(&self) -> &ClapContext<'a> {
        &self.ctx
    }

    pub fn matches(&self) -> &'a ArgMatches {
        self.ctx.matches()
    }

    pub fn options(&self) -> &'a OptionSet {
        self.ctx.options()
    }

    /// The registered option known by `name`.
    pub fn option(&self, name: &str) -> Result<&'a OptionSpec, ResolveError> {
        self.ctx
            .options()
            .get(name)
            .ok_or_else(|| ResolveError::UnknownOption {
                name: name.to_string(),
            })
    }

    pub fn is_set_by_argument(&self, option: &OptionSpec) -> bool {
        self.local.is_set_by_argument(option)
    }

    pub fn is_set(&self, option: &OptionSpec) -> bool {
        self.local.is_set(option, &self.ctx)
    }

    pub fn exclusive<'g>(
        &self,
        group: &ExclusiveGroup<'g>,
    ) -> Result<Option<&'g OptionSpec>, ExclusiveError> {
        group.exclusive(&self.local, &self.ctx)
    }

    /// Run a [`Select`] built on a group of this invocation's options.
    pub fn select<E>(&self, select: Select<'_, E>) -> Result<(), E>
    where
        E: From<SelectError>,
    {
        select.run(&self.local, &self.ctx)
    }

    /// Effective values of every option in this scope.
    pub fn resolve(&self) -> Result<Resolved, ResolveError> {
        let resolved = Resolved::from_context(self.ctx.options(), &self.ctx)?;
        events::log_values_resolved(&resolved);
        Ok(resolved)
    }

    /// True if the parser saw `option` with a value from an environment
    /// variable or secret file.
    pub fn is_set_externally(&self, option: &OptionSpec) -> bool {
        self.ctx.is_set_externally(option)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Hook, chain};
    use crate::env::MapEnv;
    use crate::exclusive::Tier;
    use clap::Command;
    use std::cell::Cell;

    fn options() -> OptionSet {
        OptionSet::build([
            OptionSpec::new("a").env_var("APP_A"),
            OptionSpec::new("b").env_var("APP_B"),
        ])
        .unwrap()
    }

    /// Resolve the {a, b} group the way an action would, returning what it
    /// would print.
    fn run(args: &[&str], env: &MapEnv) -> Result<String, SetupError> {
        let options = options();
        let matches = options
            .apply(Command::new("prog"))
            .try_get_matches_from(args)
            .unwrap();

        let mut invocation = Invocation::new(&matches, &options, env);
        let init: Hook<Invocation, SetupError> = Box::new(Invocation::before_hook);
        let before = chain(vec![init]);
        before(&mut invocation)?;

        let a = invocation.option("a")?;
        let b = invocation.option("b")?;
        let resolved = invocation.resolve()?;
        let out = match invocation.exclusive(&ExclusiveGroup::new([a, b]))? {
            Some(o) if o.name == "a" => format!("{}", resolved.get::<i32>("a")?.unwrap_or_default()),
            Some(_) => format!("  {}", resolved.get::<i32>("b")?.unwrap_or_default()),
            None => "no flag".to_string(),
        };
        Ok(out)
    }

    #[test]
    fn test_without_env() {
        let env = MapEnv::new();
        assert_eq!(run(&["prog"], &env).unwrap(), "no flag");
        assert_eq!(run(&["prog", "-a", "1"], &env).unwrap(), "1");
        assert_eq!(run(&["prog", "-b", "2"], &env).unwrap(), "  2");

        let err = run(&["prog", "-a", "1", "-b", "2"], &env).unwrap_err();
        assert_eq!(err.to_string(), "more than one flags are set in args (-a,-b)");
        assert!(err.is_exclusive_conflict());
    }

    #[test]
    fn test_with_one_env() {
        let env = MapEnv::new().with("APP_A", "3");
        assert_eq!(run(&["prog"], &env).unwrap(), "3");
        assert_eq!(run(&["prog", "-a", "1"], &env).unwrap(), "1");
        assert_eq!(run(&["prog", "-b", "2"], &env).unwrap(), "  2");
        let err = run(&["prog", "-a", "1", "-b", "2"], &env).unwrap_err();
        assert_eq!(err.as_exclusive().map(|e| e.tier()), Some(Tier::Args));
    }

    #[test]
    fn test_with_both_envs() {
        let env = MapEnv::new().with("APP_A", "3").with("APP_B", "4");
        let err = run(&["prog"], &env).unwrap_err();
        assert_eq!(err.to_string(), "more than one flags are set in envs (-a,-b)");
        assert_eq!(err.as_exclusive().map(|e| e.tier()), Some(Tier::Envs));

        assert_eq!(run(&["prog", "-a", "1"], &env).unwrap(), "1");
        assert_eq!(run(&["prog", "-b", "2"], &env).unwrap(), "  2");
        let err = run(&["prog", "-a", "1", "-b", "2"], &env).unwrap_err();
        assert_eq!(err.as_exclusive().map(|e| e.tier()), Some(Tier::Args));
    }

    #[test]
    fn test_is_set_before_and_after_init() {
        let options = options();
        let matches = options
            .apply(Command::new("prog"))
            .try_get_matches_from(["prog", "-a", "1"])
            .unwrap();
        let env = MapEnv::new().with("APP_B", "4");
        let mut invocation = Invocation::new(&matches, &options, &env);

        let a = invocation.option("a").unwrap();
        let b = invocation.option("b").unwrap();
        assert!(!invocation.is_set_by_argument(a));
        assert!(invocation.is_set(b));

        invocation.before();
        assert!(invocation.is_set_by_argument(a));
        assert!(invocation.is_set(a));
        assert!(!invocation.is_set_by_argument(b));
        assert!(invocation.is_set_externally(b));
        assert!(invocation.local_set().is_initialized());
    }

    #[test]
    fn test_select_through_invocation() {
        let options = options();
        let matches = options
            .apply(Command::new("prog"))
            .try_get_matches_from(["prog", "-b", "2"])
            .unwrap();
        let env = MapEnv::new();
        let mut invocation = Invocation::new(&matches, &options, &env);
        invocation.before();

        let a = invocation.option("a").unwrap();
        let b = invocation.option("b").unwrap();
        let group = ExclusiveGroup::new([a, b]);
        let picked = Cell::new(None);
        let result: Result<(), SetupError> = invocation.select(
            group
                .select()
                .on(a, || {
                    picked.set(Some("a"));
                    Ok(())
                })
                .on(b, || {
                    picked.set(Some("b"));
                    Ok(())
                }),
        );
        assert!(result.is_ok());
        assert_eq!(picked.get(), Some("b"));
    }

    #[test]
    fn test_unknown_option() {
        let options = options();
        let matches = options
            .apply(Command::new("prog"))
            .try_get_matches_from(["prog"])
            .unwrap();
        let env = MapEnv::new();
        let invocation = Invocation::new(&matches, &options, &env);
        assert!(matches!(
            invocation.option("zzz"),
            Err(ResolveError::UnknownOption { .. })
        ));
    }
}
