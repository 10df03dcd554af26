//! Nil-identity checks.

use crate::checks::Check;
use crate::failure::Failure;

/// Accepts only the untyped nil and nil references.
///
/// A non-nil reference to a zero-valued structure is not nil.
pub fn reflect_nil() -> Check {
    Check::new(|got| {
        if got.is_nil() {
            return Ok(());
        }
        Err(Failure::new("value is neither typed nor untyped nil", got))
    })
}

/// The exact negation of [`reflect_nil`]: accepts everything except the
/// untyped nil and nil references.
pub fn not_reflect_nil() -> Check {
    Check::new(|got| {
        if !got.is_nil() {
            return Ok(());
        }
        Err(Failure::new("value is typed or untyped nil", got))
    })
}
