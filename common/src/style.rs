use thiserror::Error;
use tracing::trace;

/// Host facility that resolves the computed style of an element.
pub trait ComputedStyle {
  type Element: ?Sized;

  /// The resolved value of `property` for `el`, or [None] if the host can't compute styles for
  /// this element at all. An unknown property is not an error; hosts report it as an empty
  /// string.
  fn computed_value(&self, el: &Self::Element, property: &str) -> Option<String>;
}

impl<S: ComputedStyle + ?Sized> ComputedStyle for &S {
  type Element = S::Element;
  fn computed_value(&self, el: &Self::Element, property: &str) -> Option<String> {
    (**self).computed_value(el, property)
  }
}

/// Every way [get_property] can come up without a number. All of them stand in for the NaN a
/// script would see.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PropertyError {
  #[error("no element to read the style of")]
  NoElement,
  #[error("computed style is unavailable for this element")]
  StyleUnavailable,
  #[error("{0:?} does not start with a decimal integer")]
  NotNumeric(String),
  #[error("{0:?} does not fit a 64-bit integer")]
  OutOfRange(String),
}

/// Read `property` off the computed style of `el` and parse its leading decimal integer, so
/// `"42px"` yields `42`.
pub fn get_property<S: ComputedStyle>(
  styles: &S,
  el: Option<&S::Element>,
  property: &str,
) -> Result<i64, PropertyError> {
  let el = el.ok_or(PropertyError::NoElement)?;
  let Some(value) = styles.computed_value(el, property) else {
    trace!(property, "computed style unavailable");
    return Err(PropertyError::StyleUnavailable);
  };
  let parsed = parse_int(&value);
  if let Err(e) = &parsed {
    trace!(property, %e, "style value is not an integer");
  }
  parsed
}

/// The characters a script's `parseInt` skips before the number: ECMAScript `WhiteSpace` (which
/// includes the byte order mark and every `Zs` space) and `LineTerminator`.
fn is_script_space(c: char) -> bool {
  matches!(
    c,
    '\t' | '\n' | '\u{B}' | '\u{C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}' | '\u{2000}'..='\u{200A}'
      | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
  )
}

/// Base 10 integer prefix of `s` with the leniency of a script `parseInt`: leading whitespace and
/// one sign are accepted, and everything from the first non-digit on is ignored.
pub fn parse_int(s: &str) -> Result<i64, PropertyError> {
  let body = s.trim_start_matches(is_script_space);
  let (negative, digits) = match body.as_bytes().first() {
    Some(b'-') => (true, &body[1..]),
    Some(b'+') => (false, &body[1..]),
    _ => (false, body),
  };
  let end = digits.bytes().position(|b| !b.is_ascii_digit()).unwrap_or(digits.len());
  if end == 0 {
    return Err(PropertyError::NotNumeric(s.to_string()));
  }
  // accumulate on the negative side so i64::MIN parses
  let mut acc: i64 = 0;
  for b in digits[..end].bytes() {
    acc = acc
      .checked_mul(10)
      .and_then(|a| a.checked_sub(i64::from(b - b'0')))
      .ok_or_else(|| PropertyError::OutOfRange(s.to_string()))?;
  }
  if negative {
    Ok(acc)
  } else {
    acc.checked_neg().ok_or_else(|| PropertyError::OutOfRange(s.to_string()))
  }
}
