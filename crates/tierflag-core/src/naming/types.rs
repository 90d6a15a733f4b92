use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::env::Environment;
use crate::probe;

/// Namespace prepended to every derived environment variable name.
///
/// The prefix is used verbatim; it is not re-cased or normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FlagPrefix(String);

impl FlagPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `prefix + name`
    pub fn env_var(&self, name: &str) -> String {
        format!("{}{}", self.0, name)
    }

    /// [`FlagPrefix::env_var`] applied to each name, in order.
    pub fn env_vars(&self, names: &[&str]) -> Vec<String> {
        names.iter().map(|n| self.env_var(n)).collect()
    }

    /// Name of the variable holding the secret file path for `name`:
    /// `prefix + name + "_FILE"`.
    pub fn file_var(&self, name: &str) -> String {
        format!("{}{}_FILE", self.0, name)
    }

    /// Paths held by the `_FILE` variables of `names`, in order. An unset
    /// variable yields an empty candidate.
    pub fn file_candidates(&self, env: &dyn Environment, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .map(|n| env.var(&self.file_var(n)).unwrap_or_default())
            .collect()
    }

    /// First existing file among [`FlagPrefix::file_candidates`].
    pub fn file_path(&self, env: &dyn Environment, names: &[&str]) -> Option<PathBuf> {
        probe::first_existing(self.file_candidates(env, names))
    }
}

impl fmt::Display for FlagPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FlagPrefix {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for FlagPrefix {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// All names an option is known by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionName {
    /// Canonical flag name (kebab-case, group-qualified).
    pub name: String,
    /// Alternative flag names; the derived alias comes first.
    pub aliases: Vec<String>,
    /// Environment variables, canonical first, alias second.
    pub env_vars: Vec<String>,
    /// Secret file located when the name was derived, if any.
    pub file_path: Option<PathBuf>,
}

impl OptionName {
    /// Canonical name followed by every alias.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}
