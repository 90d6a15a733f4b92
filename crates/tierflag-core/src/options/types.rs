use std::path::PathBuf;

use clap::{Arg, ArgAction};

use crate::naming::OptionName;

/// How many values an option takes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValueKind {
    /// One value; a repeated argument replaces the previous one.
    #[default]
    Single,
    /// Any number of values. Arguments accumulate; environment and file
    /// values are split on `,`.
    List,
    /// A boolean switch taking no value on the command line.
    Switch,
}

/// One configurable option.
///
/// Built once at program setup and never mutated afterwards. Options are
/// identified by their canonical [`name`](OptionSpec::name), which must be
/// unique within an [`OptionSet`](crate::options::OptionSet).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: String,
    pub aliases: Vec<String>,
    pub env_vars: Vec<String>,
    pub file_path: Option<PathBuf>,
    pub help: Option<String>,
    pub value_name: Option<String>,
    pub default_value: Option<String>,
    pub kind: ValueKind,
    pub global: bool,
}

impl OptionSpec {
    /// An option with no aliases, environment variables or secret file.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            env_vars: Vec::new(),
            file_path: None,
            help: None,
            value_name: None,
            default_value: None,
            kind: ValueKind::Single,
            global: false,
        }
    }

    /// An option carrying every derived name.
    pub fn from_name(name: OptionName) -> Self {
        Self {
            name: name.name,
            aliases: name.aliases,
            env_vars: name.env_vars,
            file_path: name.file_path,
            ..Self::new(String::new())
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    pub fn env_var(mut self, var: impl Into<String>) -> Self {
        self.env_vars.push(var.into());
        self
    }

    pub fn file_path(mut self, path: Option<PathBuf>) -> Self {
        self.file_path = path;
        self
    }

    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn value_name(mut self, value_name: impl Into<String>) -> Self {
        self.value_name = Some(value_name.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Make the option available to every subcommand of the command it is
    /// registered on.
    pub fn global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    /// Canonical name followed by every alias, without duplicates.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(
            self.aliases
                .iter()
                .map(String::as_str)
                .filter(move |a| *a != self.name),
        )
    }

    /// The name used when reporting this option: its first-listed name.
    pub fn primary_name(&self) -> &str {
        &self.name
    }

    /// True if `name` is the canonical name or one of the aliases.
    pub fn has_name(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    /// Build the clap definition for this option.
    ///
    /// One-character names become short flags (`-a`), longer names long
    /// flags (`--count`). Environment variables and defaults are not handed
    /// to clap; they are resolved by [`crate::resolve`] so that clap only
    /// ever reports command-line values.
    pub fn to_arg(&self) -> Arg {
        let mut arg = Arg::new(self.name.clone());

        let mut shorts = Vec::new();
        let mut longs = Vec::new();
        for name in self.names() {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (None, _) => {}
                (Some(c), None) => {
                    if !shorts.contains(&c) {
                        shorts.push(c);
                    }
                }
                _ => {
                    if !longs.iter().any(|l: &String| l == name) {
                        longs.push(name.to_string());
                    }
                }
            }
        }

        let mut shorts = shorts.into_iter();
        if let Some(c) = shorts.next() {
            arg = arg.short(c);
        }
        for c in shorts {
            arg = arg.visible_short_alias(c);
        }
        let mut longs = longs.into_iter();
        if let Some(l) = longs.next() {
            arg = arg.long(l);
        }
        for l in longs {
            arg = arg.visible_alias(l);
        }

        arg = match self.kind {
            ValueKind::Single => arg.action(ArgAction::Set).num_args(1),
            ValueKind::List => arg.action(ArgAction::Append).num_args(1),
            ValueKind::Switch => arg.action(ArgAction::SetTrue),
        };

        if let Some(value_name) = &self.value_name {
            arg = arg.value_name(value_name.clone());
        }

        let mut help = self.help.clone().unwrap_or_default();
        if !self.env_vars.is_empty() {
            if !help.is_empty() {
                help.push(' ');
            }
            help.push_str(&format!("[env: {}]", self.env_vars.join(", ")));
        }
        if let Some(default) = &self.default_value {
            if !help.is_empty() {
                help.push(' ');
            }
            help.push_str(&format!("[default: {}]", default));
        }
        if !help.is_empty() {
            arg = arg.help(help);
        }

        arg.global(self.global)
    }
}
