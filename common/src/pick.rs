use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::trace;

/// Produces fractions uniformly distributed over `[0, 1)`.
pub trait RandomSource {
  fn fraction(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
  fn fraction(&mut self) -> f64 { (**self).fraction() }
}

/// Adapts any [rand] generator.
#[derive(Clone, Debug)]
pub struct RngSource<R>(pub R);
impl RngSource<ThreadRng> {
  pub fn thread() -> Self { Self(rand::thread_rng()) }
}
impl RngSource<StdRng> {
  /// Reproducible sequence, mostly useful for tests.
  pub fn seeded(seed: u64) -> Self { Self(StdRng::seed_from_u64(seed)) }
}
impl<R: Rng> RandomSource for RngSource<R> {
  fn fraction(&mut self) -> f64 { self.0.gen::<f64>() }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
#[error("cannot pick from an empty sequence")]
pub struct EmptyInput;

/// `floor(fraction * len)`, or [None] if there is nothing to index.
pub fn random_index(src: &mut impl RandomSource, len: usize) -> Option<usize> {
  if len == 0 {
    return None;
  }
  let idx = (src.fraction() * len as f64).floor();
  // a source that hands out 1.0 or a negative would otherwise land outside the slice
  Some((idx.max(0.0) as usize).min(len - 1))
}

/// Pick one element of `items`, each with probability `1 / items.len()`.
pub fn random<'a, T>(src: &mut impl RandomSource, items: &'a [T]) -> Result<&'a T, EmptyInput> {
  match random_index(src, items.len()) {
    Some(i) => Ok(&items[i]),
    None => {
      trace!("random pick from an empty sequence");
      Err(EmptyInput)
    },
  }
}
