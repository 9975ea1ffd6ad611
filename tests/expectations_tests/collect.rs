//! Error collection: ordering and escalation.

use std::panic::{AssertUnwindSafe, catch_unwind};

use doublet::{TestContext, expect_error};
use proptest::prelude::*;

use super::StubContext;

#[test]
fn errors_come_back_in_call_order_with_line_joining() {
    let ctx = StubContext::new();
    let errors = expect_error(&ctx, |t| {
        t.error(&[&"a"]);
        t.error(&[&"b"]);
    });
    assert_eq!(errors, vec!["a\n".to_string(), "b\n".to_string()]);
}

#[test]
fn formatted_and_joined_errors_interleave_in_order() {
    let ctx = StubContext::new();
    let errors = expect_error(&ctx, |t| {
        t.errorf(format_args!("parse failure at {}", 12));
        t.error(&[&"unexpected", &"token"]);
        t.errorf(format_args!("gave up"));
    });
    assert_eq!(
        errors,
        vec![
            "parse failure at 12".to_string(),
            "unexpected token\n".to_string(),
            "gave up".to_string(),
        ]
    );
}

#[test]
fn escalates_when_no_error_was_recorded() {
    let ctx = StubContext::new();
    let result = catch_unwind(AssertUnwindSafe(|| expect_error(&ctx, |_| {})));
    assert!(result.is_err());
    let fatals = ctx.fatals();
    assert_eq!(fatals.len(), 1);
    assert!(fatals[0].contains("did not raise an error as was expected"));
}

#[test]
fn logging_alone_does_not_count_as_an_error() {
    let ctx = StubContext::new();
    let result = catch_unwind(AssertUnwindSafe(|| {
        expect_error(&ctx, |t| t.log(&[&"informational"]))
    }));
    assert!(result.is_err());
    assert_eq!(ctx.logs(), vec!["informational\n".to_string()]);
}

proptest! {
    #[test]
    fn prop_collects_formatted_errors_in_order(
        messages in proptest::collection::vec(".*", 1..8)
    ) {
        let ctx = StubContext::new();
        let errors = expect_error(&ctx, |t| {
            for message in &messages {
                t.errorf(format_args!("{message}"));
            }
        });
        prop_assert_eq!(errors, messages.clone());
    }
}
