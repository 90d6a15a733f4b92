//! Composition of before-action hooks.

/// A hook run against a command invocation before its action.
pub type Hook<'h, C, E> = Box<dyn Fn(&mut C) -> Result<(), E> + 'h>;

/// Combine `hooks` into one hook that runs each in order and stops at the
/// first error.
pub fn chain<'h, C: 'h, E: 'h>(hooks: Vec<Hook<'h, C, E>>) -> Hook<'h, C, E> {
    Box::new(move |ctx: &mut C| -> Result<(), E> {
        for hook in &hooks {
            hook(ctx)?;
        }
        Ok(())
    })
}
