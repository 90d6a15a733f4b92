use clap::Command;
use tracing::debug;

use crate::options::errors::OptionError;
use crate::options::types::OptionSpec;

/// One entry in the list handed to [`OptionSet::build`].
#[derive(Debug, Clone)]
pub enum OptionItem {
    Single(OptionSpec),
    Many(Vec<OptionSpec>),
    None,
}

impl From<OptionSpec> for OptionItem {
    fn from(spec: OptionSpec) -> Self {
        OptionItem::Single(spec)
    }
}

impl From<Vec<OptionSpec>> for OptionItem {
    fn from(specs: Vec<OptionSpec>) -> Self {
        OptionItem::Many(specs)
    }
}

impl From<Option<OptionSpec>> for OptionItem {
    fn from(spec: Option<OptionSpec>) -> Self {
        spec.map_or(OptionItem::None, OptionItem::Single)
    }
}

/// The options registered on one command scope, in registration order.
#[derive(Debug, Clone, Default)]
pub struct OptionSet {
    options: Vec<OptionSpec>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten `items` in order into a set.
    ///
    /// # Errors
    ///
    /// Returns [`OptionError::DuplicateName`] if any name or alias is used
    /// by two different options.
    pub fn build<I>(items: I) -> Result<Self, OptionError>
    where
        I: IntoIterator,
        I::Item: Into<OptionItem>,
    {
        let mut set = Self::new();
        for item in items {
            match item.into() {
                OptionItem::Single(spec) => set.push(spec)?,
                OptionItem::Many(specs) => {
                    for spec in specs {
                        set.push(spec)?;
                    }
                }
                OptionItem::None => {}
            }
        }
        Ok(set)
    }

    /// Append one option.
    pub fn push(&mut self, spec: OptionSpec) -> Result<(), OptionError> {
        for name in spec.names() {
            if let Some(existing) = self.get(name) {
                return Err(OptionError::DuplicateName {
                    name: name.to_string(),
                    existing: existing.name.clone(),
                });
            }
        }
        debug!(event = "core.options.registered", name = %spec.name);
        self.options.push(spec);
        Ok(())
    }

    /// The option known by `name`, canonical or alias.
    pub fn get(&self, name: &str) -> Option<&OptionSpec> {
        self.options.iter().find(|o| o.has_name(name))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, OptionSpec> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Register every option on `command`.
    pub fn apply(&self, command: Command) -> Command {
        command.args(self.options.iter().map(OptionSpec::to_arg))
    }
}

impl<'a> IntoIterator for &'a OptionSet {
    type Item = &'a OptionSpec;
    type IntoIter = std::slice::Iter<'a, OptionSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
