//! Per-invocation record of the options supplied on the command line.

use std::collections::HashSet;

use tracing::debug;

use crate::context::ParseContext;
use crate::options::OptionSpec;

/// Option identifiers explicitly supplied as arguments in one command
/// scope.
///
/// Owned by the invocation: create it empty, [`init`](LocalSet::init) it
/// once in the before-action phase, then query it. Querying a set that was
/// never initialized is legal and reports nothing as set by arguments.
#[derive(Debug, Clone, Default)]
pub struct LocalSet {
    names: HashSet<String>,
    initialized: bool,
}

impl LocalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate the set from the identifiers the parser reports for the
    /// current scope. Calling it again with the same context changes
    /// nothing.
    pub fn init(&mut self, ctx: &dyn ParseContext) {
        self.extend(ctx.local_names());
    }

    /// Populate the set from an explicit list of identifiers.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.names.extend(names.into_iter().map(Into::into));
        self.initialized = true;
        debug!(event = "core.local_set.initialized", count = self.names.len());
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// True if the canonical name or any alias of `option` was supplied
    /// on the command line.
    pub fn is_set_by_argument(&self, option: &OptionSpec) -> bool {
        option.names().any(|name| self.names.contains(name))
    }

    /// True if `option` was supplied on the command line, or the parser
    /// reports a value from an environment variable or secret file.
    pub fn is_set(&self, option: &OptionSpec, ctx: &dyn ParseContext) -> bool {
        self.is_set_by_argument(option) || ctx.is_set_externally(option)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
