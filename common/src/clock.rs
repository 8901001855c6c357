use std::time::{SystemTime, UNIX_EPOCH};

/// Source of wall-clock time.
pub trait Clock {
  /// Milliseconds since the Unix epoch.
  fn now_millis(&self) -> i64;
}

impl<C: Clock + ?Sized> Clock for &C {
  fn now_millis(&self) -> i64 { (**self).now_millis() }
}

/// The operating system clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemClock;
impl Clock for SystemClock {
  fn now_millis(&self) -> i64 { epoch_millis(SystemTime::now()) }
}

/// A clock that is stuck at the given millisecond, for tests that need to know what time it is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FixedClock(pub i64);
impl Clock for FixedClock {
  fn now_millis(&self) -> i64 { self.0 }
}

/// Signed so that clocks set before 1970 don't have to fail.
pub fn epoch_millis(st: SystemTime) -> i64 {
  match st.duration_since(UNIX_EPOCH) {
    Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
    Err(e) => i64::try_from(e.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
  }
}

pub fn time_stamp(clock: &impl Clock) -> i64 { clock.now_millis() }

/// Current time in epoch milliseconds according to the operating system.
pub fn get_time_stamp() -> i64 { time_stamp(&SystemClock) }
