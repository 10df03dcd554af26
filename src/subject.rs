//! The chaining wrapper that turns values and check outcomes into named
//! assertion blocks.
//!
//! A [`Subject`] holds either a raw value or the failure a check produced,
//! and hands out runnable blocks for the hierarchical runner. Each named
//! convenience method is strictly equivalent to `.test(constructor(..))`
//! and produces identical failure content; they exist for call-site
//! readability.

use regex::Regex;

use crate::checks::{self, Check, CheckResult};
use crate::failure::Failure;
use crate::runner::Block;
use crate::value::Value;

/// A value (or a check outcome) adapted into a tree of named assertions.
#[derive(Debug, Clone)]
pub struct Subject {
    held: Result<Value, Failure>,
}

impl Subject {
    /// Wraps a raw value.
    pub fn of(v: impl Into<Value>) -> Self {
        Self { held: Ok(v.into()) }
    }

    /// Wraps the outcome of applying a check: a passed check behaves as
    /// "assertion holds" (the held value is nil), a failed one as
    /// "assertion failed with this failure".
    pub fn from_check(outcome: CheckResult) -> Self {
        Self {
            held: outcome.map(|_| Value::Nil),
        }
    }

    fn held_value(&self) -> Value {
        match &self.held {
            Ok(v) => v.clone(),
            // A held failure enters further checks as an error value.
            Err(failure) => Value::error(failure),
        }
    }

    /// Adapts a check into a runnable block over the held value. The block
    /// reports the rendered failure, if any, and nothing on a pass.
    pub fn test(&self, check: Check) -> Block {
        let v = self.held_value();
        Box::new(move |t| {
            if let Err(failure) = check.eval(&v) {
                t.fail(&failure);
            }
        })
    }

    pub fn deep_equal(&self, expect: impl Into<Value>) -> Block {
        self.test(checks::deep_equal(expect))
    }

    pub fn not_deep_equal(&self, reject: impl Into<Value>) -> Block {
        self.test(checks::not_deep_equal(reject))
    }

    pub fn reflect_nil(&self) -> Block {
        self.test(checks::reflect_nil())
    }

    pub fn not_reflect_nil(&self) -> Block {
        self.test(checks::not_reflect_nil())
    }

    pub fn less_than(&self, bound: impl Into<Value>) -> Block {
        self.test(checks::less_than(bound))
    }

    pub fn less_than_or_equal(&self, bound: impl Into<Value>) -> Block {
        self.test(checks::less_than_or_equal(bound))
    }

    pub fn greater_than(&self, bound: impl Into<Value>) -> Block {
        self.test(checks::greater_than(bound))
    }

    pub fn greater_than_or_equal(&self, bound: impl Into<Value>) -> Block {
        self.test(checks::greater_than_or_equal(bound))
    }

    pub fn numeric_equal(&self, expect: impl Into<Value>) -> Block {
        self.test(checks::numeric_equal(expect))
    }

    pub fn numeric_not_equal(&self, reject: impl Into<Value>) -> Block {
        self.test(checks::numeric_not_equal(reject))
    }

    pub fn match_regexp(&self, pattern: Regex) -> Block {
        self.test(checks::match_regexp(pattern))
    }

    /// A block failing iff the subject holds a failure or an error value;
    /// the reported message is exactly that value's own rendering.
    pub fn no_error(&self) -> Block {
        let held = self.held.clone();
        Box::new(move |t| match &held {
            Err(failure) => t.fail(failure),
            Ok(Value::Error(msg)) => t.fail(msg),
            Ok(_) => {}
        })
    }

    /// The negation of [`no_error`](Self::no_error): fails iff the subject
    /// holds no error.
    pub fn error(&self) -> Block {
        let held = self.held.clone();
        Box::new(move |t| match &held {
            Err(_) | Ok(Value::Error(_)) => {}
            Ok(v) => t.fail(&Failure::new("expected an error, got none", v)),
        })
    }

    /// Fails unless the held failure equals `expect` field-wise. The
    /// mismatch report renders both sides so each is inspectable.
    pub fn error_is(&self, expect: Failure) -> Block {
        let held = self.held.clone();
        Box::new(move |t| match &held {
            Err(failure) if *failure == expect => {}
            Err(failure) => t.fail(&failure_mismatch(&Value::error(failure), &expect)),
            Ok(v) => t.fail(&failure_mismatch(v, &expect)),
        })
    }
}

fn failure_mismatch(got: &Value, expect: &Failure) -> Failure {
    Failure::new("failure does not match expected failure", got).expecting(&Value::error(expect))
}
