use super::*;

impl Half {
  /// The size of this type in bits.
  pub const BITS: u32 = crate::layout::BINARY16.width();

  /// Number of significant digits in base 2, counting the implicit leading bit.
  pub const MANTISSA_DIGITS: u32 = crate::layout::BINARY16.frac_width() + 1;

  /// One greater than the minimum possible normal power of 2 exponent.
  pub const MIN_EXP: i32 = 2 - crate::layout::BINARY16.bias();

  /// Maximum possible power of 2 exponent.
  pub const MAX_EXP: i32 = crate::layout::BINARY16.bias() + 1;

  /// Construct a half from its raw bit representation. Every bit pattern is valid.
  #[inline]
  pub const fn from_bits(bits: u16) -> Self {
    Self(bits)
  }

  /// Return the raw bit representation of `self`.
  #[inline]
  pub const fn to_bits(self) -> u16 {
    self.0
  }

  /// Convert an `f32` into the nearest half, rounding ties to even.
  ///
  /// - Values too large in magnitude become an infinity of the same sign.
  /// - Values too small in magnitude become a zero of the same sign.
  /// - NaNs stay NaNs (quietened, with the payload truncated to the upper fraction bits).
  ///
  /// See also [`RoundFrom`](crate::RoundFrom).
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::from_f32(1.0).to_bits(), 0x3c00);
  /// assert_eq!(Half::from_f32(70000.0), Half::INFINITY);
  /// assert_eq!(Half::from_f32(-1e-10).to_bits(), 0x8000);
  /// ```
  #[inline]
  pub const fn from_f32(value: f32) -> Self {
    Self(narrow(value.to_bits()))
  }

  /// Convert `self` into an `f32`. This is always exact.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::from_bits(0x3555).to_f32(), 0.33325195);
  /// assert_eq!(Half::MIN_POSITIVE_SUBNORMAL.to_f32(), 5.9604645e-8);
  /// ```
  #[inline]
  pub const fn to_f32(self) -> f32 {
    f32::from_bits(widen(self.0))
  }

  /// Convert `self` into an `f64`. This is always exact.
  #[inline]
  pub fn to_f64(self) -> f64 {
    f64::from(self.to_f32())
  }

  /// The bit pattern of `self` as bytes in little-endian order. This is the recommended byte
  /// order for storing halves in files or sending them over the wire.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::from_f32(12.5).to_le_bytes(), [0x40, 0x4a]);
  /// ```
  #[inline]
  pub const fn to_le_bytes(self) -> [u8; 2] {
    self.0.to_le_bytes()
  }

  /// The bit pattern of `self` as bytes in big-endian (network) order.
  #[inline]
  pub const fn to_be_bytes(self) -> [u8; 2] {
    self.0.to_be_bytes()
  }

  /// The bit pattern of `self` as bytes in the target's native order, i.e. the in-memory
  /// representation of a `Half`.
  #[inline]
  pub const fn to_ne_bytes(self) -> [u8; 2] {
    self.0.to_ne_bytes()
  }

  /// Inverse of [`Self::to_le_bytes`].
  #[inline]
  pub const fn from_le_bytes(bytes: [u8; 2]) -> Self {
    Self(u16::from_le_bytes(bytes))
  }

  /// Inverse of [`Self::to_be_bytes`].
  #[inline]
  pub const fn from_be_bytes(bytes: [u8; 2]) -> Self {
    Self(u16::from_be_bytes(bytes))
  }

  /// Inverse of [`Self::to_ne_bytes`].
  #[inline]
  pub const fn from_ne_bytes(bytes: [u8; 2]) -> Self {
    Self(u16::from_ne_bytes(bytes))
  }
}
