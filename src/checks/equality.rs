//! Deep structural equality checks.

use crate::checks::Check;
use crate::failure::Failure;
use crate::value::Value;

/// Accepts values deeply equal to `expect`.
///
/// Deep equality requires matching kind as well as matching content: an
/// `int` never equals a `uint` of the same magnitude, and a reference never
/// equals its referent.
pub fn deep_equal(expect: impl Into<Value>) -> Check {
    let expect = expect.into();
    Check::new(move |got| {
        if *got == expect {
            return Ok(());
        }
        Err(Failure::new("values are not deep equal", got).expecting(&expect))
    })
}

/// Rejects values deeply equal to `reject`; the exact negation of
/// [`deep_equal`]. Values of a different kind pass even when their content
/// coincides.
pub fn not_deep_equal(reject: impl Into<Value>) -> Check {
    let reject = reject.into();
    Check::new(move |got| {
        if *got != reject {
            return Ok(());
        }
        Err(Failure::new("values are deep equal", got).rejecting(got))
    })
}
