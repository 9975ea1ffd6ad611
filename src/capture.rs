//! The fatal capture engine.
//!
//! Runs a function under test against a fresh [`TestDouble`] inside a scoped
//! unwind barrier. The barrier absorbs exactly one kind of abnormal control
//! transfer, the [`FatalSignal`] raised by the double's fatal-family methods;
//! every other panic is a genuine defect and is resumed unchanged.

use std::any::type_name;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use crate::context::TestContext;
use crate::double::TestDouble;
use crate::error::FatalSignal;

/// Runs `f` against a fresh double and captures a fatal signal, if any.
///
/// Returns `Some(message)` if `f` called any of the double's fatal-family
/// methods (`fail_now`, `fatal`, `fatalf`), `None` if `f` returned normally.
/// A panic with any other payload propagates unchanged past this barrier —
/// expected failures are return values, defects stay defects.
///
/// The barrier does not suppress the process-global panic hook, so an
/// expected fatal signal may still print the default panic banner; silencing
/// it would require process-wide hook state this crate refuses to own.
///
/// # Panics
///
/// Resumes any panic whose payload is not a [`FatalSignal`].
#[must_use]
pub fn capture_fatal<F>(ctx: &dyn TestContext, f: F) -> Option<String>
where
    F: FnOnce(&dyn TestContext),
{
    ctx.helper();
    let double = TestDouble::new(ctx);
    match catch_unwind(AssertUnwindSafe(|| f(&double))) {
        Ok(()) => None,
        Err(payload) => match payload.downcast::<FatalSignal>() {
            Ok(signal) => {
                tracing::debug!(message = %signal.message, "captured fatal signal");
                Some(signal.message)
            }
            // Not ours: re-raise.
            Err(payload) => resume_unwind(payload),
        },
    }
}

/// Asserts that `f` fails fatally, returning the captured message.
///
/// If `f` returns without calling a fatal-family method, a fatal failure is
/// raised on the real context naming `f`. Callers are encouraged to check
/// the returned message to distinguish the expected failure from unrelated
/// ones.
///
/// # Panics
///
/// Raises a fatal failure on `ctx` (which unwinds on most real contexts) if
/// `f` did not fail fatally; resumes any non-fatal panic unchanged.
pub fn expect_fatal<F>(ctx: &dyn TestContext, f: F) -> String
where
    F: FnOnce(&dyn TestContext),
{
    ctx.helper();
    let identity = type_name::<F>();
    match capture_fatal(ctx, f) {
        Some(message) => message,
        None => ctx.fatalf(format_args!("{identity} did not fail fatally as expected")),
    }
}
