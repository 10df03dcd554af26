//! Numeric comparison checks.
//!
//! Actual and bound are both converted to `f64` before comparison, so one
//! constructor family covers every integer and float kind. The bound is
//! embedded in the failure prefix as a fixed-point decimal with six
//! fractional digits; no expect/reject field is populated.

use crate::checks::{Check, CheckResult};
use crate::failure::Failure;
use crate::format;
use crate::value::Value;

/// Accepts numeric values strictly below `bound`.
pub fn less_than(bound: impl Into<Value>) -> Check {
    compare("<", bound.into(), |got, bound| got < bound)
}

/// Accepts numeric values at or below `bound`.
pub fn less_than_or_equal(bound: impl Into<Value>) -> Check {
    compare("<=", bound.into(), |got, bound| got <= bound)
}

/// Accepts numeric values strictly above `bound`.
pub fn greater_than(bound: impl Into<Value>) -> Check {
    compare(">", bound.into(), |got, bound| got > bound)
}

/// Accepts numeric values at or above `bound`.
pub fn greater_than_or_equal(bound: impl Into<Value>) -> Check {
    compare(">=", bound.into(), |got, bound| got >= bound)
}

/// Accepts numeric values equal to `expect` after conversion, regardless of
/// kind: `int 42` and `float 42` both satisfy `numeric_equal(42)`.
pub fn numeric_equal(expect: impl Into<Value>) -> Check {
    compare("==", expect.into(), |got, expect| got == expect)
}

/// The negation of [`numeric_equal`].
pub fn numeric_not_equal(reject: impl Into<Value>) -> Check {
    compare("!=", reject.into(), |got, reject| got != reject)
}

fn compare(op: &str, bound: Value, holds: fn(f64, f64) -> bool) -> Check {
    let limit = bound.as_f64();
    // A non-numeric bound has no fixed-point rendering; the check then
    // fails every value with the bound rendered as-is in the prefix.
    let prefix = match limit {
        Some(bound) => format!("not {} {:.6}", op, bound),
        None => format!("not {} {}", op, format::format_type(&bound)),
    };
    Check::new(move |got| -> CheckResult {
        if let (Some(got_n), Some(limit)) = (got.as_f64(), limit) {
            if holds(got_n, limit) {
                return Ok(());
            }
        }
        Err(Failure {
            prefix: prefix.clone(),
            got: format::indented_type(got),
            expect: None,
            reject: None,
        })
    })
}
