use common::{Clock, ComputedStyle, RandomSource};
use gloo_console::log;
use web_sys::js_sys::{Date, Math};
use web_sys::{Element, Window};

use crate::script::whole_millis;

/// Styles as resolved by the page's own `window`.
#[derive(Clone, Debug)]
pub struct BrowserStyles {
  window: Option<Window>,
}
impl BrowserStyles {
  /// Outside a document context (e.g. in a worker) there is no window and every lookup fails.
  pub fn new() -> Self { Self { window: web_sys::window() } }
  pub fn with_window(window: Window) -> Self { Self { window: Some(window) } }
}
impl Default for BrowserStyles {
  fn default() -> Self { Self::new() }
}
impl ComputedStyle for BrowserStyles {
  type Element = Element;
  fn computed_value(&self, el: &Element, property: &str) -> Option<String> {
    let Some(window) = &self.window else {
      log!("No window to compute styles in");
      return None;
    };
    match window.get_computed_style(el) {
      Ok(decl) => decl?.get_property_value(property).ok(),
      Err(e) => {
        log!("getComputedStyle failed: ", e);
        None
      },
    }
  }
}

/// `Date.now()`
#[derive(Clone, Copy, Debug, Default)]
pub struct JsClock;
impl Clock for JsClock {
  fn now_millis(&self) -> i64 { whole_millis(Date::now()) }
}

/// `Math.random()`
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;
impl RandomSource for JsRandom {
  fn fraction(&mut self) -> f64 { Math::random() }
}
