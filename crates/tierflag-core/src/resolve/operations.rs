use std::fs;

use tracing::debug;

use crate::context::ParseContext;
use crate::options::{OptionSet, OptionSpec, ValueKind};
use crate::resolve::errors::ResolveError;
use crate::resolve::types::{Resolved, Source, Sourced};

/// Effective value of one option, or `None` if no source provides one.
///
/// Environment variables that are present but empty are skipped. Secret
/// file contents lose their trailing line break. For list options,
/// environment, file and default values are split on `,`.
///
/// # Errors
///
/// [`ResolveError::SecretFileUnreadable`] if the secret file located when
/// the option was defined can no longer be read.
pub fn resolve_option(
    option: &OptionSpec,
    ctx: &dyn ParseContext,
) -> Result<Option<Sourced>, ResolveError> {
    if let Some(values) = ctx.argument_values(option) {
        return Ok(Some(Sourced::new(values, Source::Argument)));
    }

    let env = ctx.environment();
    for var in &option.env_vars {
        if let Some(value) = env.var(var)
            && !value.is_empty()
        {
            return Ok(Some(Sourced::new(
                split(option, &value),
                Source::Env { var: var.clone() },
            )));
        }
    }

    if let Some(path) = &option.file_path {
        let content =
            fs::read_to_string(path).map_err(|error| ResolveError::SecretFileUnreadable {
                name: option.name.clone(),
                path: path.clone(),
                error,
            })?;
        let content = content.trim_end_matches(['\r', '\n']);
        return Ok(Some(Sourced::new(
            split(option, content),
            Source::File { path: path.clone() },
        )));
    }

    Ok(option
        .default_value
        .as_deref()
        .map(|value| Sourced::new(split(option, value), Source::Default)))
}

fn split(option: &OptionSpec, value: &str) -> Vec<String> {
    match option.kind {
        ValueKind::List => value
            .split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect(),
        ValueKind::Single | ValueKind::Switch => vec![value.to_string()],
    }
}

impl Resolved {
    /// Resolve every option of `options` against `ctx`.
    pub fn from_context(options: &OptionSet, ctx: &dyn ParseContext) -> Result<Self, ResolveError> {
        let mut resolved = Resolved::default();
        for option in options {
            let value = resolve_option(option, ctx)?;
            debug!(
                event = "core.resolve.option_resolved",
                option = %option.name,
                source = ?value.as_ref().map(|v| v.source.to_string())
            );
            resolved.insert(&option.name, &option.aliases, value);
        }
        Ok(resolved)
    }
}
