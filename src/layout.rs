//! This module describes the packed bit layouts of the IEEE 754 binary interchange formats that
//! this crate converts between: [`BINARY16`] (the half precision layout of [`Half`](crate::Half))
//! and [`BINARY32`] (the layout of the native [`f32`]).
//!
//! Both layouts are the same shape, only the field widths differ:
//!
//! ```text
//!   binary16:  s eeeee ffffffffff
//!   binary32:  s eeeeeeee fffffffffffffffffffffff
//! ```
//!
//! The fields are always accessed through explicit shifts and masks on an unsigned integer of the
//! right width (never through any kind of bitfield packing), so everything here is independent of
//! the target's endianness or struct layout rules. All bit patterns are passed around as `u32`,
//! which is wide enough for both formats; for [`BINARY16`], the upper 16 bits must be 0.

use core::num::FpCategory;

/// The packed layout of an IEEE 754 binary floating point format: 1 sign bit (the msb), then
/// [`exp_width`](Self::exp_width) biased exponent bits, then [`frac_width`](Self::frac_width)
/// fraction bits (the lsbs).
#[derive(Clone, Copy, Debug)]
#[derive(PartialEq, Eq)]
pub struct Layout {
  exp_width: u32,
  frac_width: u32,
}

/// The IEEE 754 `binary16` (half precision) layout: 1 sign bit, 5 exponent bits with bias 15, 10
/// fraction bits.
pub const BINARY16: Layout = Layout::new(5, 10);

/// The IEEE 754 `binary32` (single precision) layout: 1 sign bit, 8 exponent bits with bias 127,
/// 23 fraction bits.
pub const BINARY32: Layout = Layout::new(8, 23);

impl Layout {
  /// A layout with `exp_width` exponent bits and `frac_width` fraction bits, plus the sign bit.
  const fn new(exp_width: u32, frac_width: u32) -> Self {
    assert!(exp_width >= 2, "An IEEE float needs at least 2 exponent bits");
    assert!(frac_width >= 1, "An IEEE float needs at least 1 fraction bit");
    assert!(1 + exp_width + frac_width <= u32::BITS, "Layout does not fit in a u32");
    Self { exp_width, frac_width }
  }

  /// Total width in bits.
  #[inline]
  pub const fn width(self) -> u32 {
    1 + self.exp_width + self.frac_width
  }

  /// Width of the exponent field in bits.
  #[inline]
  pub const fn exp_width(self) -> u32 {
    self.exp_width
  }

  /// Width of the fraction field in bits (not counting the implicit leading bit).
  #[inline]
  pub const fn frac_width(self) -> u32 {
    self.frac_width
  }

  /// The exponent bias: a biased exponent field `e` of a normal number stands for `2^(e - bias)`.
  #[inline]
  pub const fn bias(self) -> i32 {
    (1 << (self.exp_width - 1)) - 1
  }

  /// The value of an all-ones exponent field, reserved for infinities and NaNs.
  #[inline]
  pub const fn exp_max(self) -> u32 {
    (1 << self.exp_width) - 1
  }

  #[inline]
  pub const fn sign_mask(self) -> u32 {
    1 << (self.exp_width + self.frac_width)
  }

  #[inline]
  pub const fn exp_mask(self) -> u32 {
    self.exp_max() << self.frac_width
  }

  #[inline]
  pub const fn frac_mask(self) -> u32 {
    (1 << self.frac_width) - 1
  }

  /// The msb of the fraction field: set for quiet NaNs, clear for signalling NaNs.
  #[inline]
  pub const fn quiet_bit(self) -> u32 {
    1 << (self.frac_width - 1)
  }

  /// The implicit leading bit of a normal number's significand, in the position just above the
  /// fraction field.
  #[inline]
  pub const fn hidden_bit(self) -> u32 {
    1 << self.frac_width
  }

  /// The biased exponent field of `bits`, shifted down to bit 0.
  #[inline]
  pub const fn exponent(self, bits: u32) -> u32 {
    (bits & self.exp_mask()) >> self.frac_width
  }

  /// The fraction field of `bits`.
  #[inline]
  pub const fn fraction(self, bits: u32) -> u32 {
    bits & self.frac_mask()
  }

  /// `bits` with the sign bit cleared.
  #[inline]
  pub const fn magnitude(self, bits: u32) -> u32 {
    bits & (self.exp_mask() | self.frac_mask())
  }

  /// Assemble a bit pattern from its fields. Each field is masked to its width.
  #[inline]
  pub const fn compose(self, negative: bool, exponent: u32, fraction: u32) -> u32 {
    let sign = if negative {self.sign_mask()} else {0};
    sign | ((exponent << self.frac_width) & self.exp_mask()) | (fraction & self.frac_mask())
  }

  #[inline]
  pub const fn is_sign_negative(self, bits: u32) -> bool {
    bits & self.sign_mask() != 0
  }

  #[inline]
  pub const fn is_sign_positive(self, bits: u32) -> bool {
    !self.is_sign_negative(bits)
  }

  /// Exponent field saturated and nonzero fraction.
  #[inline]
  pub const fn is_nan(self, bits: u32) -> bool {
    self.magnitude(bits) > self.exp_mask()
  }

  /// A NaN with the [quiet bit](Self::quiet_bit) clear.
  #[inline]
  pub const fn is_signaling_nan(self, bits: u32) -> bool {
    self.is_nan(bits) && bits & self.quiet_bit() == 0
  }

  /// Exponent field saturated and zero fraction.
  #[inline]
  pub const fn is_infinite(self, bits: u32) -> bool {
    self.magnitude(bits) == self.exp_mask()
  }

  /// Exponent field not saturated.
  #[inline]
  pub const fn is_finite(self, bits: u32) -> bool {
    bits & self.exp_mask() != self.exp_mask()
  }

  /// Exponent field neither saturated nor zero.
  #[inline]
  pub const fn is_normal(self, bits: u32) -> bool {
    let exp = bits & self.exp_mask();
    exp != self.exp_mask() && exp != 0
  }

  /// Exponent field zero and nonzero fraction.
  #[inline]
  pub const fn is_subnormal(self, bits: u32) -> bool {
    bits & self.exp_mask() == 0 && bits & self.frac_mask() != 0
  }

  /// Either signed zero.
  #[inline]
  pub const fn is_zero(self, bits: u32) -> bool {
    self.magnitude(bits) == 0
  }

  /// The [`FpCategory`] of `bits`, read straight off the exponent and fraction fields.
  pub const fn classify(self, bits: u32) -> FpCategory {
    match (self.exponent(bits), self.fraction(bits)) {
      (0, 0) => FpCategory::Zero,
      (0, _) => FpCategory::Subnormal,
      (e, 0) if e == self.exp_max() => FpCategory::Infinite,
      (e, _) if e == self.exp_max() => FpCategory::Nan,
      _ => FpCategory::Normal,
    }
  }
}
