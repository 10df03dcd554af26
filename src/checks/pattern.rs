//! Pattern-matching checks.

use std::borrow::Cow;

use regex::Regex;

use crate::checks::Check;
use crate::failure::Failure;
use crate::value::Value;

/// Accepts string and byte-sequence values whose content matches `pattern`.
///
/// The pattern is precompiled and owned by the caller; the check performs
/// no compilation. Bytes are compared by their content, so a byte sequence
/// and a string of identical content agree on the outcome. Any other kind
/// of value fails the check.
pub fn match_regexp(pattern: Regex) -> Check {
    Check::new(move |got| {
        let content: Cow<'_, str> = match got {
            Value::Str(s) => Cow::from(s.as_str()),
            Value::Bytes(b) => String::from_utf8_lossy(b),
            _ => {
                return Err(Failure::new(
                    format!("value is not matchable against pattern {}", pattern.as_str()),
                    got,
                ))
            }
        };
        if pattern.is_match(&content) {
            return Ok(());
        }
        Err(Failure::new(
            format!("value does not match pattern {}", pattern.as_str()),
            got,
        ))
    })
}
