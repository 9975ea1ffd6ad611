// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # doublet
//!
//! Test-context double that captures fatal and soft failures from functions
//! under test, without the failure terminating the enclosing test.
//!
//! This crate provides:
//! - [`TestContext`]: the capability set a test context exposes
//! - [`TestDouble`]: a stand-in context that intercepts failure signals
//! - [`capture_fatal`] / [`expect_fatal`]: convert a fatal signal into a
//!   returned message
//! - [`expect_error`]: collect soft errors in call order
//! - [`parallel_fatal`]: exercise several functions concurrently and
//!   aggregate their fatal outcomes
//!
//! Expected fatal signals are absorbed and become return values; any other
//! panic raised by a function under test propagates unchanged, since masking
//! it would hide a genuine defect.
//!
//! ## Example
//!
//! ```rust,ignore
//! use doublet::{TestContext, expect_fatal, expect_error};
//!
//! // `ctx` is the host framework's real context.
//! let message = expect_fatal(ctx, |t| my_assert_positive(t, -3));
//! assert!(message.contains("expected positive"));
//!
//! let errors = expect_error(ctx, |t| my_lint_pass(t, bad_input));
//! assert_eq!(errors.len(), 2);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod capture;
pub mod collect;
pub mod context;
pub mod double;
pub mod error;
pub mod parallel;

pub use capture::{capture_fatal, expect_fatal};
pub use collect::expect_error;
pub use context::{TestContext, format_line};
pub use double::TestDouble;
pub use error::FatalSignal;
pub use parallel::parallel_fatal;
