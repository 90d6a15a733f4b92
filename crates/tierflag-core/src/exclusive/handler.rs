use tracing::{debug, warn};

use crate::context::ParseContext;
use crate::exclusive::errors::{ExclusiveError, SelectError, Tier};
use crate::exclusive::select::Select;
use crate::local_set::LocalSet;
use crate::options::OptionSpec;

/// Options of which at most one may be active, in caller order.
///
/// Built ad hoc for each resolution; holds references to options owned
/// elsewhere.
#[derive(Debug, Clone, Default)]
pub struct ExclusiveGroup<'a> {
    members: Vec<&'a OptionSpec>,
}

impl<'a> ExclusiveGroup<'a> {
    pub fn new<I>(members: I) -> Self
    where
        I: IntoIterator<Item = &'a OptionSpec>,
    {
        Self {
            members: members.into_iter().collect(),
        }
    }

    pub fn members(&self) -> &[&'a OptionSpec] {
        &self.members
    }

    /// Position of `option` in the group, matched by canonical name.
    pub fn position(&self, option: &OptionSpec) -> Option<usize> {
        self.members.iter().position(|m| m.name == option.name)
    }

    /// The single active member, if any.
    ///
    /// # Errors
    ///
    /// [`ExclusiveError::InArgs`] if several members were given as
    /// arguments; [`ExclusiveError::InEnvs`] if none was, and several have
    /// environment or secret file values.
    pub fn exclusive(
        &self,
        local: &LocalSet,
        ctx: &dyn ParseContext,
    ) -> Result<Option<&'a OptionSpec>, ExclusiveError> {
        Ok(self.exclusive_index(local, ctx)?.map(|i| self.members[i]))
    }

    pub(crate) fn exclusive_index(
        &self,
        local: &LocalSet,
        ctx: &dyn ParseContext,
    ) -> Result<Option<usize>, ExclusiveError> {
        if let Some(index) = self.pick(Tier::Args, |o| local.is_set_by_argument(o))? {
            return Ok(Some(index));
        }
        self.pick(Tier::Envs, |o| ctx.is_set_externally(o))
    }

    /// Scan the members left to right at one tier.
    ///
    /// `Ok(None)` means nothing matched and the next tier should be tried.
    fn pick(
        &self,
        tier: Tier,
        is_set: impl Fn(&OptionSpec) -> bool,
    ) -> Result<Option<usize>, ExclusiveError> {
        let found: Vec<usize> = self
            .members
            .iter()
            .enumerate()
            .filter_map(|(i, o)| is_set(*o).then_some(i))
            .collect();

        match found.as_slice() {
            [] => Ok(None),
            [index] => {
                debug!(
                    event = "core.exclusive.resolved",
                    tier = %tier,
                    option = %self.members[*index].name
                );
                Ok(Some(*index))
            }
            _ => {
                let flags = join_names(found.iter().map(|&i| self.members[i]));
                warn!(event = "core.exclusive.conflict", tier = %tier, flags = %flags);
                Err(ExclusiveError::new(tier, flags))
            }
        }
    }

    /// Start a [`Select`] over this group.
    pub fn select<'s, E>(&'s self) -> Select<'s, E>
    where
        'a: 's,
        E: From<SelectError>,
    {
        Select::new(self)
    }
}

/// `-name` for every option's primary name, comma-joined.
fn join_names<'o>(options: impl Iterator<Item = &'o OptionSpec>) -> String {
    options
        .map(|o| format!("-{}", o.primary_name()))
        .collect::<Vec<_>>()
        .join(",")
}
