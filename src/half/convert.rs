use super::*;

/// Used to do value-to-value conversions that may *round* the input, under the IEEE 754 default
/// rounding rule (see below). It is the reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`]; but unlike what is the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from), these
/// conversions are _not necessarily lossless_. Conversions that are always exact (such as
/// [`Half`] → [`f32`]) are implemented with [`From`] instead.
///
/// Prefer implementing [`RoundFrom`] over [`RoundInto`], since the former gives you the latter
/// for free, and prefer using [`RoundInto`] over [`RoundFrom`] when specifying trait bounds on a
/// generic function. There's also a blanket implementation of `RoundFrom<T> for T`.
///
/// # Rounding
///
/// "Rounding" in this crate always means IEEE 754 *roundTiesToEven*:
///
///   - Round to the nearest representable value, or in case of a tie, to the one whose last
///     fraction bit is 0.
///   - A value that would round to something larger than [`Half::MAX`] in magnitude becomes an
///     infinity of the same sign (i.e. overflow saturates to infinity).
///   - A value that is at most half of [`Half::MIN_POSITIVE_SUBNORMAL`] in magnitude becomes a
///     zero of the same sign.
///   - Infinities stay infinities, NaNs stay NaNs.
///
/// # Examples
///
/// ```
/// # use soft_half::*;
/// assert_eq!(Half::round_from(1.0_f32), Half::ONE);
/// assert_eq!(Half::round_from(1e6_f32), Half::INFINITY);
/// assert!(Half::round_from(f32::NAN).is_nan());
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input, under the IEEE 754 default
/// rounding rule. It is the reciprocal of [`RoundFrom`]; see there for details.
///
/// # Examples
///
/// ```
/// # use soft_half::*;
/// let h: Half = 3.14159_f32.round_into();
/// assert_eq!(h, Half::PI);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if necessary (see
  /// [Rounding](RoundFrom#rounding)).
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

impl RoundFrom<f32> for Half {
  /// Convert an `f32` into a `Half`, rounding to nearest, ties to even. Same as
  /// [`Half::from_f32`].
  #[inline]
  fn round_from(value: f32) -> Self {
    Self::from_f32(value)
  }
}

impl From<Half> for f32 {
  /// Exact.
  #[inline]
  fn from(value: Half) -> Self {
    value.to_f32()
  }
}

impl From<Half> for f64 {
  /// Exact.
  #[inline]
  fn from(value: Half) -> Self {
    value.to_f64()
  }
}
