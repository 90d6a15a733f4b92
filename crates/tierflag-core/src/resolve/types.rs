use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::resolve::errors::ResolveError;

/// Where an option's effective value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Argument,
    Env { var: String },
    File { path: PathBuf },
    Default,
}

impl Source {
    /// True for every source except the compiled-in default.
    pub fn is_explicit(&self) -> bool {
        !matches!(self, Source::Default)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Argument => f.write_str("argument"),
            Source::Env { var } => write!(f, "env {}", var),
            Source::File { path } => write!(f, "file {}", path.display()),
            Source::Default => f.write_str("default"),
        }
    }
}

/// An option's effective value(s) with their source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sourced {
    pub values: Vec<String>,
    pub source: Source,
}

impl Sourced {
    pub fn new(values: Vec<String>, source: Source) -> Self {
        Self { values, source }
    }

    /// The last value; for single-valued options, the only one.
    pub fn value(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }
}

/// Effective values of every option in one command scope.
#[derive(Debug, Clone, Default)]
pub struct Resolved {
    values: HashMap<String, Option<Sourced>>,
    aliases: HashMap<String, String>,
}

impl Resolved {
    pub(crate) fn insert(&mut self, name: &str, aliases: &[String], value: Option<Sourced>) {
        for alias in aliases {
            self.aliases.insert(alias.clone(), name.to_string());
        }
        self.values.insert(name.to_string(), value);
    }

    fn entry(&self, name: &str) -> Result<(&str, Option<&Sourced>), ResolveError> {
        let canonical = self
            .aliases
            .get(name)
            .map(String::as_str)
            .unwrap_or(name);
        self.values
            .get_key_value(canonical)
            .map(|(k, v)| (k.as_str(), v.as_ref()))
            .ok_or_else(|| ResolveError::UnknownOption {
                name: name.to_string(),
            })
    }

    /// Effective value and source of `name` (canonical or alias), or
    /// `None` if no source provides one.
    pub fn sourced(&self, name: &str) -> Result<Option<&Sourced>, ResolveError> {
        Ok(self.entry(name)?.1)
    }

    /// Where the value of `name` came from, if it has one.
    pub fn source(&self, name: &str) -> Option<&Source> {
        self.sourced(name).ok().flatten().map(|s| &s.source)
    }

    /// True if `name` has a value from an argument, environment variable
    /// or secret file.
    pub fn is_set(&self, name: &str) -> bool {
        self.source(name).is_some_and(Source::is_explicit)
    }

    /// The raw effective value of `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.sourced(name).ok().flatten().and_then(Sourced::value)
    }

    /// The effective value of `name` parsed as `T`.
    ///
    /// # Errors
    ///
    /// [`ResolveError::UnknownOption`] if `name` was never registered,
    /// [`ResolveError::InvalidValue`] if the value does not parse.
    pub fn get<T>(&self, name: &str) -> Result<Option<T>, ResolveError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let (canonical, sourced) = self.entry(name)?;
        let Some(sourced) = sourced else {
            return Ok(None);
        };
        match sourced.value() {
            Some(value) => parse(canonical, value, &sourced.source).map(Some),
            None => Ok(None),
        }
    }

    /// Every effective value of `name` parsed as `T`; empty if unset.
    pub fn get_many<T>(&self, name: &str) -> Result<Vec<T>, ResolveError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let (canonical, sourced) = self.entry(name)?;
        let Some(sourced) = sourced else {
            return Ok(Vec::new());
        };
        sourced
            .values
            .iter()
            .map(|v| parse(canonical, v, &sourced.source))
            .collect()
    }

    /// Canonical names and effective values, sorted by name.
    pub fn entries(&self) -> Vec<(&str, Option<&Sourced>)> {
        let mut entries: Vec<_> = self
            .values
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_ref()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

fn parse<T>(name: &str, value: &str, source: &Source) -> Result<T, ResolveError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    value.parse().map_err(|e: T::Err| ResolveError::InvalidValue {
        name: name.to_string(),
        value: value.to_string(),
        origin: source.clone(),
        message: e.to_string(),
    })
}
