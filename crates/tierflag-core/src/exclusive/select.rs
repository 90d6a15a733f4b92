use tracing::debug;

use crate::context::ParseContext;
use crate::exclusive::errors::SelectError;
use crate::exclusive::handler::ExclusiveGroup;
use crate::local_set::LocalSet;
use crate::options::OptionSpec;

type Callback<'s, E> = Box<dyn FnOnce() -> Result<(), E> + 's>;

/// Runs the callback paired with the active member of an exclusive group.
///
/// Each member is paired with at most one callback through
/// [`on`](Select::on); [`otherwise`](Select::otherwise) runs when no member
/// is active. At most one callback runs per [`run`](Select::run).
///
/// ```
/// use tierflag_core::{ExclusiveGroup, LocalSet, MapEnv, OptionSpec, SelectError};
/// # use tierflag_core::ParseContext;
/// # struct Ctx(MapEnv);
/// # impl ParseContext for Ctx {
/// #     fn local_names(&self) -> Vec<String> { vec![] }
/// #     fn argument_values(&self, _: &OptionSpec) -> Option<Vec<String>> { None }
/// #     fn environment(&self) -> &dyn tierflag_core::Environment { &self.0 }
/// # }
///
/// let horizontal = OptionSpec::new("horizontal");
/// let vertical = OptionSpec::new("vertical");
/// let group = ExclusiveGroup::new([&horizontal, &vertical]);
///
/// let mut local = LocalSet::new();
/// local.extend(["vertical"]);
///
/// let mut picked = "";
/// group
///     .select::<SelectError>()
///     .on(&horizontal, || { picked = "h"; Ok(()) })
///     .run(&local, &Ctx(MapEnv::new()))
///     .unwrap();
/// assert_eq!(picked, "");
/// ```
pub struct Select<'s, E> {
    group: &'s ExclusiveGroup<'s>,
    arms: Vec<Option<Callback<'s, E>>>,
    otherwise: Option<Callback<'s, E>>,
    error: Option<SelectError>,
}

impl<'s, E> Select<'s, E>
where
    E: From<SelectError>,
{
    pub fn new(group: &'s ExclusiveGroup<'s>) -> Self {
        Self {
            group,
            arms: group.members().iter().map(|_| None).collect(),
            otherwise: None,
            error: None,
        }
    }

    /// Pair `option` with `callback`.
    ///
    /// Pairing an option that is not a member, or a member twice, is
    /// reported when the selection runs.
    pub fn on(mut self, option: &OptionSpec, callback: impl FnOnce() -> Result<(), E> + 's) -> Self {
        if self.error.is_some() {
            return self;
        }
        match self.group.position(option) {
            None => {
                self.error = Some(SelectError::NotInGroup {
                    name: option.name.clone(),
                });
            }
            Some(index) if self.arms[index].is_some() => {
                self.error = Some(SelectError::DuplicateArm {
                    name: option.name.clone(),
                });
            }
            Some(index) => self.arms[index] = Some(Box::new(callback)),
        }
        self
    }

    /// Callback to run when no member is active.
    pub fn otherwise(mut self, callback: impl FnOnce() -> Result<(), E> + 's) -> Self {
        self.otherwise = Some(Box::new(callback));
        self
    }

    /// Resolve the group and run the matching callback.
    ///
    /// Returns the callback's result, or the resolution error when the
    /// group is in conflict (no callback runs then). A winner without a
    /// paired callback runs nothing and succeeds.
    pub fn run(mut self, local: &LocalSet, ctx: &dyn ParseContext) -> Result<(), E> {
        if let Some(e) = self.error.take() {
            return Err(e.into());
        }

        let winner = self
            .group
            .exclusive_index(local, ctx)
            .map_err(|e| E::from(SelectError::from(e)))?;

        let callback = match winner {
            Some(index) => {
                debug!(
                    event = "core.select.dispatched",
                    option = %self.group.members()[index].name
                );
                self.arms.swap_remove(index)
            }
            None => {
                debug!(event = "core.select.no_winner");
                self.otherwise.take()
            }
        };

        match callback {
            Some(f) => f(),
            None => Ok(()),
        }
    }
}
