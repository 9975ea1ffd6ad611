//! The capability-set stand-in handed to functions under test.

use std::cell::RefCell;
use std::fmt;
use std::panic;

use crate::context::{TestContext, format_line};
use crate::error::FatalSignal;

/// A stand-in `TestContext` that intercepts fatal and soft failures.
///
/// Fatal-family calls raise a [`FatalSignal`] instead of ending the test;
/// error-family calls append to an owned list instead of being reported;
/// log-family calls delegate verbatim to the wrapped real context. Any
/// capability outside that surface aborts with a plain panic so that
/// unimplemented surface area is never mistaken for a no-op.
///
/// A double is created fresh for each invocation of a function under test
/// and discarded afterwards. It is deliberately `!Sync` (interior state is a
/// `RefCell`), so one double can never be shared across concurrent units.
pub struct TestDouble<'a> {
    real: &'a dyn TestContext,
    errors: RefCell<Vec<String>>,
}

impl<'a> TestDouble<'a> {
    /// Creates a double that delegates log traffic to `real`.
    #[must_use]
    pub fn new(real: &'a dyn TestContext) -> Self {
        Self {
            real,
            errors: RefCell::new(Vec::new()),
        }
    }

    /// Consumes the double, returning recorded error strings in call order.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors.into_inner()
    }

    fn raise(&self, message: String) -> ! {
        panic::panic_any(FatalSignal::new(message))
    }

    fn unsupported(&self, capability: &str) -> ! {
        panic!("TestDouble does not implement {capability}; the function under test relies on a capability outside the double's surface")
    }
}

impl TestContext for TestDouble<'_> {
    fn fail_now(&self) -> ! {
        self.raise(String::new())
    }

    fn fatal(&self, args: &[&dyn fmt::Display]) -> ! {
        self.raise(format_line(args))
    }

    fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        self.raise(args.to_string())
    }

    fn error(&self, args: &[&dyn fmt::Display]) {
        self.errors.borrow_mut().push(format_line(args));
    }

    fn errorf(&self, args: fmt::Arguments<'_>) {
        self.errors.borrow_mut().push(args.to_string());
    }

    fn log(&self, args: &[&dyn fmt::Display]) {
        self.real.log(args);
    }

    fn logf(&self, args: fmt::Arguments<'_>) {
        self.real.logf(args);
    }

    // Advisory in the host framework; nothing to record here.
    fn helper(&self) {}

    fn fail(&self) {
        self.unsupported("fail")
    }

    fn failed(&self) -> bool {
        self.unsupported("failed")
    }

    fn skip_now(&self) -> ! {
        self.unsupported("skip_now")
    }

    fn name(&self) -> String {
        self.unsupported("name")
    }
}
