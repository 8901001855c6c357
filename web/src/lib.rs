//! The helpers exported to scripts. Failures come back the way a script expects them: `NaN` for
//! an unreadable property and `undefined` for a pick from an empty array.

pub mod script;

#[cfg(target_arch = "wasm32")]
pub mod host;
#[cfg(target_arch = "wasm32")]
pub use exports::*;

#[cfg(target_arch = "wasm32")]
mod exports {
  use wasm_bindgen::prelude::*;
  use web_sys::js_sys::Array;
  use web_sys::Element;

  use crate::host::{BrowserStyles, JsClock, JsRandom};
  use crate::script::{array_slot, number_or_nan};

  #[wasm_bindgen(js_name = getProperty)]
  pub fn get_property(el: Option<Element>, property: &str) -> f64 {
    number_or_nan(common::get_property(&BrowserStyles::new(), el.as_ref(), property))
  }

  #[wasm_bindgen(js_name = getTimeStamp)]
  pub fn get_time_stamp() -> f64 { common::time_stamp(&JsClock) as f64 }

  #[wasm_bindgen]
  pub fn random(array: &Array) -> JsValue {
    match array_slot(&mut JsRandom, array.length()) {
      Some(i) => array.get(i),
      None => JsValue::UNDEFINED,
    }
  }
}
