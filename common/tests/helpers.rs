use std::collections::HashMap;

use common::{
  get_property, random, time_stamp, Clock, ComputedStyle, EmptyInput, FixedClock, PropertyError,
  RandomSource, RngSource,
};

/// A widget that wants the three host facilities injected, the way an application would.
struct Widget<S, C, R> {
  styles: S,
  clock: C,
  rng: R,
}
impl<S: ComputedStyle<Element = u32>, C: Clock, R: RandomSource> Widget<S, C, R> {
  fn stamp_width(&self, el: Option<&u32>) -> Option<(i64, i64)> {
    let width = get_property(&self.styles, el, "width").ok()?;
    Some((time_stamp(&self.clock), width))
  }
  fn greeting(&mut self) -> Result<&'static str, EmptyInput> {
    random(&mut self.rng, &["hi", "hello", "hey"]).copied()
  }
}

struct Dom(HashMap<u32, HashMap<String, String>>);
impl ComputedStyle for Dom {
  type Element = u32;
  fn computed_value(&self, el: &u32, property: &str) -> Option<String> {
    self.0.get(el).map(|props| props.get(property).cloned().unwrap_or_default())
  }
}

fn dom() -> Dom {
  let node = |w: &str| HashMap::from([("width".to_string(), w.to_string())]);
  Dom(HashMap::from([(1, node("320px")), (2, node("auto"))]))
}

#[test]
fn injected_collaborators() {
  let mut w = Widget { styles: dom(), clock: FixedClock(1_000), rng: RngSource::seeded(3) };
  assert_eq!(w.stamp_width(Some(&1)), Some((1_000, 320)));
  assert_eq!(w.stamp_width(Some(&2)), None);
  assert_eq!(w.stamp_width(Some(&3)), None);
  assert_eq!(w.stamp_width(None), None);
  assert!(["hi", "hello", "hey"].contains(&w.greeting().unwrap()));
}

#[test]
fn errors_are_distinguishable() {
  let styles = dom();
  assert_eq!(get_property(&styles, None, "width"), Err(PropertyError::NoElement));
  assert_eq!(get_property(&styles, Some(&9), "width"), Err(PropertyError::StyleUnavailable));
  let res = get_property(&styles, Some(&2), "width");
  assert_eq!(res.clone().ok(), None);
  let err = res.unwrap_err();
  assert_eq!(err.to_string(), "\"auto\" does not start with a decimal integer");
}

#[test]
fn same_seed_same_picks() {
  let items: Vec<u32> = (0..100).collect();
  let (mut a, mut b) = (RngSource::seeded(42), RngSource::seeded(42));
  for _ in 0..50 {
    assert_eq!(random(&mut a, &items), random(&mut b, &items));
  }
}

#[test]
fn empty_error_message() {
  assert_eq!(EmptyInput.to_string(), "cannot pick from an empty sequence");
}
