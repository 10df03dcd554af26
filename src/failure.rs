//! The structured failure value checks produce.

use thiserror::Error;

use crate::format;
use crate::value::Value;

/// Why a check rejected a value.
///
/// A failure is an ordinary error value: checks return it instead of
/// aborting, and the wrapper relays it to the runner's reporting handle.
/// All value fields are rendered to strings when the failure is built, so
/// two failures are equal exactly when they render identically.
///
/// At most one of `expect` and `reject` is populated: a check either names
/// the single accepted expectation or the single forbidden one, never both.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("{}", render(.prefix, .got, .expect, .reject))]
pub struct Failure {
    /// The human-readable reason, e.g. `values are not deep equal`.
    pub prefix: String,
    /// Rendering of the actual value, headed by its type name.
    pub got: String,
    /// Rendering of the accepted expectation, when the check had one.
    pub expect: Option<String>,
    /// Rendering of the forbidden value, for negated checks.
    pub reject: Option<String>,
}

impl Failure {
    /// Builds a failure with the actual value rendered into `got`.
    pub fn new(prefix: impl Into<String>, got: &Value) -> Self {
        Failure {
            prefix: prefix.into(),
            got: format::indented_type(got),
            expect: None,
            reject: None,
        }
    }

    /// Records the single accepted expectation.
    pub fn expecting(mut self, v: &Value) -> Self {
        self.expect = Some(format::indented_type(v));
        self.reject = None;
        self
    }

    /// Records the single forbidden value.
    pub fn rejecting(mut self, v: &Value) -> Self {
        self.reject = Some(format::indented_type(v));
        self.expect = None;
        self
    }
}

fn render(prefix: &str, got: &str, expect: &Option<String>, reject: &Option<String>) -> String {
    let mut out = String::from(prefix);
    if !got.is_empty() {
        out.push_str("\nGot: ");
        out.push_str(got);
    }
    if let Some(expect) = expect {
        out.push_str("\nExpect: ");
        out.push_str(expect);
    }
    if let Some(reject) = reject {
        out.push_str("\nReject: ");
        out.push_str(reject);
    }
    out
}
