//! The parallel fan-out runner.

use std::collections::BTreeMap;
use std::thread;

use parking_lot::Mutex;

use crate::capture::capture_fatal;
use crate::context::TestContext;

/// Runs every function concurrently and aggregates fatal outcomes.
///
/// Launches one thread per function, each exercising its function through
/// [`capture_fatal`] with a private double. Blocks until every thread has
/// completed — no partial results, no early exit on first failure, and no
/// timeout: a function that never returns hangs this call indefinitely.
///
/// After the join, if any function failed fatally, a single fatal failure is
/// raised on the real context stating the count and listing each failing
/// function's identity and message. Identities are diagnostic-only (slice
/// index plus code address); no ordering is guaranteed between the units
/// themselves.
///
/// The real context must tolerate concurrent use: every worker delegates
/// `log`/`logf` traffic to it.
///
/// # Panics
///
/// Raises a fatal failure on `ctx` (which unwinds on most real contexts) if
/// one or more functions failed fatally. A non-fatal panic inside a function
/// under test propagates out of the thread scope.
pub fn parallel_fatal(ctx: &(dyn TestContext + Sync), fns: &[&(dyn Fn(&dyn TestContext) + Sync)]) {
    ctx.helper();
    let failures: Mutex<BTreeMap<String, String>> = Mutex::new(BTreeMap::new());
    thread::scope(|scope| {
        for (index, f) in fns.iter().copied().enumerate() {
            let failures = &failures;
            scope.spawn(move || {
                if let Some(message) = capture_fatal(ctx, |double: &dyn TestContext| f(double)) {
                    failures.lock().insert(identity(index, f), message);
                }
            });
        }
    });
    let failures = failures.into_inner();
    tracing::debug!(total = fns.len(), failed = failures.len(), "fan-out joined");
    if !failures.is_empty() {
        ctx.fatalf(format_args!(
            "parallel_fatal: {} functions failed fatally: {:?}",
            failures.len(),
            failures
        ));
    }
}

/// Diagnostic identity for a function in the fan-out slice.
///
/// The index keeps aggregation keys distinct even when two entries share a
/// code address; neither part is stable across builds.
fn identity(index: usize, f: &(dyn Fn(&dyn TestContext) + Sync)) -> String {
    let addr = std::ptr::from_ref(f) as *const () as usize;
    format!("fn[{index}]@{addr:#x}")
}
