//! Check constructors: small, composable predicates over values.
//!
//! Each constructor closes over its expectation and returns a [`Check`],
//! the predicate object with a single evaluate operation. Checks are pure:
//! evaluating one never mutates anything and is idempotent, so the same
//! check can be applied to any number of values.

use std::fmt;

use crate::failure::Failure;
use crate::value::Value;

mod equality;
mod nil;
mod numeric;
mod pattern;

pub use equality::{deep_equal, not_deep_equal};
pub use nil::{not_reflect_nil, reflect_nil};
pub use numeric::{
    greater_than, greater_than_or_equal, less_than, less_than_or_equal, numeric_equal,
    numeric_not_equal,
};
pub use pattern::match_regexp;

/// The outcome of evaluating a check: no failure, or a populated one.
pub type CheckResult = Result<(), Failure>;

/// A predicate over values, stateless aside from captured expectations.
pub struct Check {
    eval: Box<dyn Fn(&Value) -> CheckResult + Send + Sync>,
}

impl Check {
    /// Wraps an evaluation function as a check.
    pub fn new(eval: impl Fn(&Value) -> CheckResult + Send + Sync + 'static) -> Self {
        Self {
            eval: Box::new(eval),
        }
    }

    /// Evaluates the check against an already-converted value.
    pub fn eval(&self, v: &Value) -> CheckResult {
        (self.eval)(v)
    }

    /// Converts and evaluates in one step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use verdict::deep_equal;
    /// assert!(deep_equal(42).apply(42).is_ok());
    /// assert!(deep_equal(42).apply(43).is_err());
    /// ```
    pub fn apply(&self, v: impl Into<Value>) -> CheckResult {
        self.eval(&v.into())
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Check")
    }
}
