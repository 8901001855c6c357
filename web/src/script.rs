//! What scripts get back, independent of the bindings so it can be checked on any target.

use common::{PropertyError, RandomSource};

/// `NaN` for every failure, the integer as a number otherwise.
pub fn number_or_nan(res: Result<i64, PropertyError>) -> f64 { res.map_or(f64::NAN, |n| n as f64) }

/// `Date.now()` to whole milliseconds, truncating toward zero.
pub fn whole_millis(now: f64) -> i64 { now as i64 }

/// Array slot to read, or [None] where a script would get `undefined`.
pub fn array_slot(src: &mut impl RandomSource, len: u32) -> Option<u32> {
  let idx = common::random_index(src, len as usize)?;
  u32::try_from(idx).ok()
}
