//! The test-context capability set.
//!
//! `TestContext` is the contract between a function under test and whatever
//! harness is driving it. The host framework's real context implements it;
//! so does [`TestDouble`](crate::TestDouble), which is how a function under
//! test ends up talking to a stand-in without being able to tell.

use std::fmt;
use std::fmt::Write as _;

/// The capability set a test context must expose.
///
/// Fatal-family methods return `!`: calling one is an abort-the-test control
/// transfer, never a plain return. Error-family methods record a failure and
/// let execution continue. Log-family methods are pure side effects.
///
/// Variadic-style capabilities (`fatal`, `error`, `log`) take a slice of
/// display values and join them with [`format_line`]; formatted capabilities
/// (`fatalf`, `errorf`, `logf`) take [`fmt::Arguments`], built at the call
/// site with [`format_args!`].
///
/// # Implementation Guidelines
///
/// 1. **fail_now / fatal / fatalf**: must not return. Unwind, abort, or
///    otherwise leave the test — the `!` return type holds you to it.
///
/// 2. **error / errorf**: record and continue. A function under test may
///    raise any number of soft errors before returning.
///
/// 3. **log / logf**: emit diagnostics. Implementations must tolerate
///    concurrent calls from multiple threads
///    ([`parallel_fatal`](crate::parallel_fatal) delegates to the real
///    context from every worker).
///
/// 4. **helper**: advisory frame marker; the provided default is a no-op.
///
/// The extended capabilities (`fail`, `failed`, `skip_now`, `name`) exist on
/// real frameworks' contexts but are outside the surface this crate's double
/// supports; the double aborts loudly when one is called.
pub trait TestContext {
    /// Marks the test as failed and aborts it immediately.
    fn fail_now(&self) -> !;

    /// Reports a fatal failure with line-joined arguments and aborts.
    fn fatal(&self, args: &[&dyn fmt::Display]) -> !;

    /// Reports a fatal failure with a formatted message and aborts.
    fn fatalf(&self, args: fmt::Arguments<'_>) -> !;

    /// Records a soft failure with line-joined arguments; execution continues.
    fn error(&self, args: &[&dyn fmt::Display]);

    /// Records a soft failure with a formatted message; execution continues.
    fn errorf(&self, args: fmt::Arguments<'_>);

    /// Logs line-joined arguments.
    fn log(&self, args: &[&dyn fmt::Display]);

    /// Logs a formatted message.
    fn logf(&self, args: fmt::Arguments<'_>);

    /// Marks the calling function as a test helper frame. Advisory only.
    fn helper(&self) {}

    /// Marks the test as failed without aborting it.
    fn fail(&self);

    /// Reports whether the test has failed.
    fn failed(&self) -> bool;

    /// Skips the test and aborts it immediately.
    fn skip_now(&self) -> !;

    /// Returns the name of the running test.
    fn name(&self) -> String;
}

/// Joins display values with single spaces and appends a newline.
///
/// This is the formatting contract behind the variadic-style capabilities:
/// `ctx.error(&[&"a"])` records `"a\n"`, `ctx.fatal(&[&"x", &1])` carries
/// `"x 1\n"`. Exposed so `TestContext` implementations outside this crate
/// can match the double's semantics exactly.
#[must_use]
pub fn format_line(args: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{arg}");
    }
    out.push('\n');
    out
}
