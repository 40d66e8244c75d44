use super::*;
use crate::layout::BINARY16;
use core::num::FpCategory;

impl Half {
  /// The bit pattern, zero-extended, as the [`Layout`](crate::layout::Layout) predicates take it.
  #[inline]
  const fn bits32(self) -> u32 {
    self.0 as u32
  }

  /// Returns `true` if `self` is NaN (any payload, either sign, quiet or signalling).
  #[inline]
  pub const fn is_nan(self) -> bool {
    BINARY16.is_nan(self.bits32())
  }

  /// Returns `true` if `self` is a *signalling* NaN, i.e. a NaN with the quiet bit (bit 9) clear.
  ///
  /// Signalling NaNs are never produced by this crate, but may come in through
  /// [`from_bits`](Self::from_bits). Converting one to `f32` quietens it.
  #[inline]
  pub const fn is_signaling_nan(self) -> bool {
    BINARY16.is_signaling_nan(self.bits32())
  }

  /// Returns `true` if `self` is positive or negative infinity.
  #[inline]
  pub const fn is_infinite(self) -> bool {
    BINARY16.is_infinite(self.bits32())
  }

  /// Returns `true` if `self` is neither infinite nor NaN.
  #[inline]
  pub const fn is_finite(self) -> bool {
    BINARY16.is_finite(self.bits32())
  }

  /// Returns `true` if `self` is neither zero, infinite, subnormal, nor NaN.
  ///
  /// Note that a subnormal half widens to a *normal* `f32`, so this is not the same as
  /// `self.to_f32().is_normal()`.
  #[inline]
  pub const fn is_normal(self) -> bool {
    BINARY16.is_normal(self.bits32())
  }

  /// Returns `true` if `self` is subnormal, i.e. nonzero and smaller in magnitude than
  /// [`Self::MIN_POSITIVE`].
  #[inline]
  pub const fn is_subnormal(self) -> bool {
    BINARY16.is_subnormal(self.bits32())
  }

  /// Returns `true` if `self` is `+0` or `-0`.
  #[inline]
  pub const fn is_zero(self) -> bool {
    BINARY16.is_zero(self.bits32())
  }

  /// Returns `true` if the sign bit of `self` is clear, including for `+0`, `+∞`, and NaNs with a
  /// positive sign bit.
  #[inline]
  pub const fn is_sign_positive(self) -> bool {
    BINARY16.is_sign_positive(self.bits32())
  }

  /// Returns `true` if the sign bit of `self` is set, including for `-0`, `-∞`, and NaNs with a
  /// negative sign bit.
  #[inline]
  pub const fn is_sign_negative(self) -> bool {
    BINARY16.is_sign_negative(self.bits32())
  }

  /// Returns the floating point category of `self`.
  ///
  /// ```
  /// # use soft_half::Half;
  /// use core::num::FpCategory;
  /// assert_eq!(Half::from_bits(0x0001).classify(), FpCategory::Subnormal);
  /// assert_eq!(Half::INFINITY.classify(), FpCategory::Infinite);
  /// ```
  #[inline]
  pub const fn classify(self) -> FpCategory {
    BINARY16.classify(self.bits32())
  }
}
