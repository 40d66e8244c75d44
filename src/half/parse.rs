use super::*;

use core::num::ParseFloatError;
use core::str::FromStr;

/// Error returned when parsing a [`Half`] from a string fails.
///
/// Wraps the [`ParseFloatError`] of the underlying `f32` parse; it is available through
/// [`ParseHalfError::float_error`] and, with the `std` feature, through
/// [`source`](std::error::Error::source).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseHalfError(ParseFloatError);

impl ParseHalfError {
  /// The error from parsing the text as an `f32`.
  pub fn float_error(&self) -> &ParseFloatError {
    &self.0
  }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseHalfError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(&self.0)
  }
}

impl core::fmt::Display for ParseHalfError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "ParseHalfError: {}", self.0)
  }
}

impl From<ParseFloatError> for ParseHalfError {
  fn from(value: ParseFloatError) -> Self {
    Self(value)
  }
}

/// Parses a decimal (or `inf`, `NaN`, ...) literal with the same grammar as [`f32`], then rounds
/// to the nearest half.
///
/// The text is parsed to the nearest `f32` first, so there are two roundings. Literals written
/// with at most a handful of significant digits, which is what halves are printed with, are not
/// affected.
///
/// ```
/// # use soft_half::Half;
/// assert_eq!("1.5".parse::<Half>(), Ok(Half::from_f32(1.5)));
/// assert_eq!("-inf".parse::<Half>(), Ok(Half::NEG_INFINITY));
/// assert_eq!("1e6".parse::<Half>(), Ok(Half::INFINITY));
/// assert!("one".parse::<Half>().is_err());
/// ```
impl FromStr for Half {
  type Err = ParseHalfError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let value = s.parse::<f32>()?;
    Ok(Half::from_f32(value))
  }
}
