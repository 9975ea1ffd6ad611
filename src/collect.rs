//! The soft-error collector.

use std::any::type_name;

use crate::context::TestContext;
use crate::double::TestDouble;

/// Asserts that `f` records at least one soft error, returning them in order.
///
/// Runs `f` against a fresh double synchronously; soft errors never abort, so
/// no unwind barrier is needed. Returns the recorded error strings in the
/// exact order `f` issued them. If `f` recorded none, a fatal failure is
/// raised on the real context naming `f`.
///
/// # Panics
///
/// Raises a fatal failure on `ctx` (which unwinds on most real contexts) if
/// `f` recorded no soft errors.
pub fn expect_error<F>(ctx: &dyn TestContext, f: F) -> Vec<String>
where
    F: FnOnce(&dyn TestContext),
{
    ctx.helper();
    let double = TestDouble::new(ctx);
    f(&double);
    let errors = double.into_errors();
    if errors.is_empty() {
        ctx.fatalf(format_args!(
            "{} did not raise an error as was expected",
            type_name::<F>()
        ));
    }
    tracing::debug!(count = errors.len(), "collected soft errors");
    errors
}
