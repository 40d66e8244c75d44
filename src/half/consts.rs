use super::*;

impl Half {
  /// Zero (`0`), the additive identity element.
  pub const ZERO: Self = Self(0x0000);

  /// Negative zero (`-0`). Compares equal to [`Self::ZERO`], but has the sign bit set.
  pub const NEG_ZERO: Self = Self(0x8000);

  /// One (`1`), the multiplicative identity element.
  pub const ONE: Self = Self(0x3c00);

  /// Negative one (`-1`).
  pub const NEG_ONE: Self = Self(0xbc00);

  /// Positive infinity (`+∞`).
  pub const INFINITY: Self = Self(0x7c00);

  /// Negative infinity (`-∞`).
  pub const NEG_INFINITY: Self = Self(0xfc00);

  /// Not a number (a quiet NaN with empty payload).
  pub const NAN: Self = Self(0x7e00);

  /// Largest finite value, `65504`.
  pub const MAX: Self = Self(0x7bff);

  /// Smallest finite value, `-65504`, equal to `-MAX`.
  ///
  /// Not to be confused with the smallest absolute value, i.e. [`Self::MIN_POSITIVE_SUBNORMAL`]!
  pub const MIN: Self = Self(0xfbff);

  /// Smallest positive *normal* value, `2^-14 ≈ 6.1035156e-5`.
  pub const MIN_POSITIVE: Self = Self(0x0400);

  /// Smallest positive value, which is subnormal: `2^-24 ≈ 5.9604645e-8`.
  pub const MIN_POSITIVE_SUBNORMAL: Self = Self(0x0001);

  /// Largest subnormal value, `1023 × 2^-24 ≈ 6.0975552e-5`.
  pub const MAX_SUBNORMAL: Self = Self(0x03ff);

  /// Machine epsilon, the difference between 1 and the next larger value: `2^-10`.
  pub const EPSILON: Self = Self(0x1400);

  /// Euler's number (`e`), rounded: `2.71875`.
  pub const E: Self = Self(0x4170);

  /// Archimedes' constant (`π`), rounded: `3.140625`.
  pub const PI: Self = Self(0x4248);
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Every constant, with its exact value.
  fn all() -> [(Half, f32); 15] {
    [
      (Half::ZERO, 0.0),
      (Half::NEG_ZERO, -0.0),
      (Half::ONE, 1.0),
      (Half::NEG_ONE, -1.0),
      (Half::INFINITY, f32::INFINITY),
      (Half::NEG_INFINITY, f32::NEG_INFINITY),
      (Half::NAN, f32::NAN),
      (Half::MAX, 65504.0),
      (Half::MIN, -65504.0),
      (Half::MIN_POSITIVE, 2f32.powi(-14)),
      (Half::MIN_POSITIVE_SUBNORMAL, 2f32.powi(-24)),
      (Half::MAX_SUBNORMAL, 1023. * 2f32.powi(-24)),
      (Half::EPSILON, 2f32.powi(-10)),
      (Half::E, 2.71875),
      (Half::PI, 3.140625),
    ]
  }

  #[test]
  fn values() {
    for (half, float) in all() {
      if float.is_nan() {
        assert!(half.to_f32().is_nan())
      } else {
        assert_eq!(half.to_f32().to_bits(), float.to_bits(), "{half:?}")
      }
    }
  }

  #[test]
  fn narrow_to_themselves() {
    for (half, float) in all() {
      assert_eq!(Half::from_f32(float).to_bits(), half.to_bits(), "{half:?}")
    }
  }

  #[test]
  fn rounded_math_consts() {
    assert_eq!(Half::from_f32(core::f32::consts::E).to_bits(), Half::E.to_bits());
    assert_eq!(Half::from_f32(core::f32::consts::PI).to_bits(), Half::PI.to_bits());
  }

  #[test]
  fn subnormal_decimal_values() {
    assert_eq!(Half::MIN_POSITIVE_SUBNORMAL.to_f32(), 5.9604645e-8);
    assert_eq!(Half::MAX_SUBNORMAL.to_f32(), 6.097555e-5);
    assert_eq!(Half::MIN_POSITIVE.to_f32(), 6.1035156e-5);
  }

  #[test]
  fn epsilon() {
    assert_eq!((Half::ONE + Half::EPSILON).to_bits(), Half::ONE.to_bits() + 1);
  }
}
