use super::*;

// These act on the bit pattern alone and never round, so unlike the rest of the arithmetic they
// do not go through `f32`: negating or taking the absolute value of a NaN keeps its payload, and
// signalling NaNs stay signalling.

const SIGN: u16 = crate::layout::BINARY16.sign_mask() as u16;

impl core::ops::Neg for Half {
  type Output = Half;

  /// Flip the sign bit. This is exact for every input, NaNs and zeros included.
  #[inline]
  fn neg(self) -> Self::Output {
    Half(self.0 ^ SIGN)
  }
}

impl core::ops::Neg for &Half {
  type Output = Half;

  /// Flip the sign bit. This is exact for every input, NaNs and zeros included.
  #[inline]
  fn neg(self) -> Self::Output {
    Half(self.0 ^ SIGN)
  }
}

impl Half {
  /// Return the absolute value of `self`, by clearing the sign bit.
  #[inline]
  pub const fn abs(self) -> Self {
    Self(self.0 & !SIGN)
  }

  /// Return a half with the magnitude of `self` and the sign of `sign`.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::ONE.copysign(Half::NEG_ZERO), Half::NEG_ONE);
  /// assert_eq!(Half::NEG_ONE.copysign(Half::ZERO), Half::ONE);
  /// ```
  #[inline]
  pub const fn copysign(self, sign: Self) -> Self {
    Self(self.0 & !SIGN | sign.0 & SIGN)
  }

  /// Returns a half that represents the sign of `self`:
  ///
  ///   - `1.0` if `self` is positive, `+0`, or `+∞`
  ///   - `-1.0` if `self` is negative, `-0`, or `-∞`
  ///   - NaN if `self` is NaN
  #[inline]
  pub const fn signum(self) -> Self {
    if self.is_nan() {
      self
    } else {
      Self::ONE.copysign(self)
    }
  }

  /// Returns the least half greater than `self`, like [`f32::next_up`].
  ///
  /// NaN and `+∞` are returned unchanged, `-MIN_POSITIVE_SUBNORMAL` goes to `-0`, both zeros go to
  /// `MIN_POSITIVE_SUBNORMAL`, and `-∞` goes to `MIN`.
  #[inline]
  pub const fn next_up(self) -> Self {
    let bits = self.0;
    let abs = bits & !SIGN;
    if self.is_nan() || bits == Self::INFINITY.0 {
      self
    } else if abs == 0 {
      Self::MIN_POSITIVE_SUBNORMAL
    } else if bits == abs {
      Self(bits + 1)
    } else {
      Self(bits - 1)
    }
  }

  /// Returns the greatest half less than `self`, like [`f32::next_down`].
  ///
  /// NaN and `-∞` are returned unchanged, `MIN_POSITIVE_SUBNORMAL` goes to `+0`, both zeros go to
  /// `-MIN_POSITIVE_SUBNORMAL`, and `+∞` goes to `MAX`.
  #[inline]
  pub const fn next_down(self) -> Self {
    let bits = self.0;
    let abs = bits & !SIGN;
    if self.is_nan() || bits == Self::NEG_INFINITY.0 {
      self
    } else if abs == 0 {
      Self(Self::MIN_POSITIVE_SUBNORMAL.0 | SIGN)
    } else if bits == abs {
      Self(bits - 1)
    } else {
      Self(bits + 1)
    }
  }

  /// Returns the next half after `self` in the direction of `toward`, like C's `nextafter`.
  ///
  /// If either argument is NaN the result is NaN. If they compare equal the result is `toward`,
  /// so stepping from `-0` toward `+0` gives `+0`.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::ONE.next_after(Half::INFINITY).to_bits(), 0x3c01);
  /// assert_eq!(Half::ZERO.next_after(Half::NEG_ONE).to_bits(), 0x8001);
  /// assert_eq!(Half::NEG_ZERO.next_after(Half::ZERO).to_bits(), 0x0000);
  /// ```
  #[inline]
  pub fn next_after(self, toward: Self) -> Self {
    if self.is_nan() {
      self
    } else if toward.is_nan() {
      toward
    } else if self == toward {
      toward
    } else if self < toward {
      self.next_up()
    } else {
      self.next_down()
    }
  }

  /// Returns the unbiased exponent of `self`, as a half: the integer `e` such that
  /// `2^e <= |self| < 2^(e + 1)`. Subnormals are normalised first, so this is never below `-24`.
  ///
  /// NaN is returned unchanged, `±∞` give `+∞`, and `±0` give `-∞`.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::from_f32(-10.0).logb(), Half::from_f32(3.0));
  /// assert_eq!(Half::MIN_POSITIVE_SUBNORMAL.logb(), Half::from_f32(-24.0));
  /// ```
  pub fn logb(self) -> Self {
    use crate::layout::BINARY16 as L;
    let abs = self.0 & !SIGN;
    let frac = abs & L.frac_mask() as u16;
    let exp = (abs >> L.frac_width()) as i32;
    if self.is_nan() {
      self
    } else if self.is_infinite() {
      Self::INFINITY
    } else if abs == 0 {
      Self::NEG_INFINITY
    } else if exp == 0 {
      // Subnormal: the value is `frac * 2^(1 - bias - frac_width)`
      let msb = (u16::BITS - 1 - frac.leading_zeros()) as i32;
      Self::from_f32((msb + 1 - L.bias() - L.frac_width() as i32) as f32)
    } else {
      Self::from_f32((exp - L.bias()) as f32)
    }
  }
}
