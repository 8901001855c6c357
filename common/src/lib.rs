//! Small helpers shared by the browser bindings and native callers: reading an integer out of a
//! computed style, stamping the current time and picking a random element.
//!
//! Every host facility is a trait so that tests can substitute fixed clocks, seeded generators
//! and in-memory stylesheets.

pub mod clock;
pub mod pick;
pub mod style;

pub use clock::{
  epoch_millis, get_time_stamp, time_stamp, Clock, FixedClock, SystemClock,
};
pub use pick::{random, random_index, EmptyInput, RandomSource, RngSource};
pub use style::{get_property, parse_int, ComputedStyle, PropertyError};

#[macro_export]
macro_rules! clone {
  ($($n:ident),+; $body:expr) => (
    {
      $( let $n = $n.clone(); )+
      $body
    }
  );
}
