use tracing::debug;

use crate::env::{Environment, ProcessEnv};
use crate::naming::types::{FlagPrefix, OptionName};
use crate::probe;

static PROCESS_ENV: ProcessEnv = ProcessEnv;

/// Short form of a flag name: the first character of every `-` or `_`
/// delimited segment.
///
/// ```
/// use tierflag_core::short_name;
///
/// assert_eq!(short_name("target-id"), "ti");
/// assert_eq!(short_name("LONG_NAME"), "LN");
/// assert_eq!(short_name(""), "");
/// ```
pub fn short_name(name: &str) -> String {
    name.split(['-', '_'])
        .filter_map(|segment| segment.chars().next())
        .collect()
}

/// `group-name` when `group` is non-empty, otherwise `name`.
pub fn qualify(group: &str, name: &str) -> String {
    if group.is_empty() {
        name.to_string()
    } else {
        format!("{}-{}", group, name)
    }
}

/// Upper-case `name` and replace every `-` with `_`.
pub fn env_var_name(name: &str) -> String {
    name.to_uppercase().replace('-', "_")
}

/// Derives [`OptionName`]s for one prefix and group.
///
/// Derivation is pure except for one step: the secret file path is located
/// by reading the `_FILE` variables from the resolver's environment and
/// probing the filesystem.
#[derive(Clone)]
pub struct NameResolver<'e> {
    prefix: FlagPrefix,
    group: String,
    defaults_app: Option<String>,
    env: &'e dyn Environment,
}

impl NameResolver<'static> {
    /// A resolver reading the process environment, with no group.
    pub fn new(prefix: FlagPrefix) -> Self {
        Self {
            prefix,
            group: String::new(),
            defaults_app: None,
            env: &PROCESS_ENV,
        }
    }
}

impl<'e> NameResolver<'e> {
    /// Read `_FILE` variables from `env` instead.
    pub fn with_env<'f>(self, env: &'f dyn Environment) -> NameResolver<'f> {
        NameResolver {
            prefix: self.prefix,
            group: self.group,
            defaults_app: self.defaults_app,
            env,
        }
    }

    /// Qualify every derived name with `group`.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = group.into();
        self
    }

    /// Also consider `<config_dir>/<app>/defaults/<name>` as a secret file,
    /// after the `_FILE` variables.
    pub fn defaults_dir(mut self, app: impl Into<String>) -> Self {
        self.defaults_app = Some(app.into());
        self
    }

    pub fn prefix(&self) -> &FlagPrefix {
        &self.prefix
    }

    /// Names for `name` with the derived short alias.
    pub fn name(&self, name: &str) -> OptionName {
        self.name_with_alias(name, &short_name(name))
    }

    /// Names for `name` with an explicit alias.
    pub fn name_with_alias(&self, name: &str, alias: &str) -> OptionName {
        let name = qualify(&self.group, name);
        let alias = qualify(&self.group, alias);

        let name_var = env_var_name(&name);
        let alias_var = env_var_name(&alias);

        let mut candidates = self
            .prefix
            .file_candidates(self.env, &[name_var.as_str(), alias_var.as_str()]);
        if let Some(app) = &self.defaults_app
            && let Some(path) = probe::defaults_path(app, &name)
        {
            candidates.push(path.to_string_lossy().into_owned());
        }
        let file_path = probe::first_existing(candidates);

        debug!(
            event = "core.naming.derived",
            name = %name,
            alias = %alias,
            file_path = ?file_path
        );

        OptionName {
            env_vars: self
                .prefix
                .env_vars(&[name_var.as_str(), alias_var.as_str()]),
            aliases: vec![alias],
            name,
            file_path,
        }
    }
}

impl std::fmt::Debug for NameResolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameResolver")
            .field("prefix", &self.prefix)
            .field("group", &self.group)
            .field("defaults_app", &self.defaults_app)
            .finish_non_exhaustive()
    }
}
