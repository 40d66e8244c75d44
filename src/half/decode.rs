use crate::layout::{BINARY16, BINARY32};

/// Number of fraction bits gained when going from `Half` to `f32`.
const FRAC_SHIFT: u32 = BINARY32.frac_width() - BINARY16.frac_width();

/// Difference of the exponent biases, i.e. what to add to a biased `Half` exponent to get the
/// biased `f32` exponent of the same power of two.
const REBIAS: u32 = (BINARY32.bias() - BINARY16.bias()) as u32;

/// Widen the bit pattern of a `Half` into the bit pattern of the `f32` with the same value. This
/// is always exact: every half is representable as an `f32`, including the subnormals (which
/// become normal `f32`s).
///
/// NaNs are widened to quiet NaNs of the same sign, with the payload in the top fraction bits.
pub(crate) const fn widen(bits: u16) -> u32 {
  let bits = bits as u32;
  let sign = (bits & BINARY16.sign_mask()) << (BINARY32.width() - BINARY16.width());
  let exponent = BINARY16.exponent(bits);
  let frac = BINARY16.fraction(bits) << FRAC_SHIFT;

  // Infinity or NaN.
  if exponent == BINARY16.exp_max() {
    return if frac == 0 {
      sign | BINARY32.exp_mask()
    } else {
      sign | BINARY32.exp_mask() | BINARY32.quiet_bit() | frac
    }
  }

  if exponent == 0 {
    // Signed zero.
    if frac == 0 {
      return sign
    }

    // Subnormal: `frac × 2^-24` as a half, but as an `f32` it has to be normalised. Shift `frac`
    // left until its leading 1 lands on the hidden bit position, decrement the exponent by as
    // many places, then drop the (now implicit) leading 1.
    //
    // Example:
    //
    //   half frac:  00_0001_0110  (22 × 2^-24, leading 1 at bit 4)
    //   f32 frac:   leading 1 at bit 4 + 13 = 17
    //   shifted:    by 6 places, leading 1 at bit 23, exponent 1 - 6
    //
    // The shift is at most 10 (for the smallest subnormal), so the rebiased exponent is at least
    // `REBIAS + 1 - 10`, well inside the range of normal `f32`s.
    let shift = frac.leading_zeros() - (u32::BITS - 1 - BINARY32.frac_width());
    let frac = (frac << shift) & BINARY32.frac_mask();
    let exponent = REBIAS + 1 - shift;
    return sign | (exponent << BINARY32.frac_width()) | frac
  }

  // Normal: re-bias the exponent.
  sign | ((exponent + REBIAS) << BINARY32.frac_width()) | frac
}
