use crate::layout::{BINARY16, BINARY32};

/// Number of fraction bits dropped when going from `f32` to `Half`.
const FRAC_SHIFT: u32 = BINARY32.frac_width() - BINARY16.frac_width();

/// Narrow the bit pattern of an `f32` into the bit pattern of the nearest `Half`, rounding ties to
/// even. Total: every input has a well defined output.
///
///   - Infinities map to infinities.
///   - NaNs map to quiet NaNs of the same sign, keeping the top 10 bits of the payload.
///   - Magnitudes that round to more than [`Half::MAX`](super::Half::MAX) saturate to infinity.
///   - Magnitudes at or below half of the smallest subnormal flush to a zero of the same sign.
///
/// Rounding is performed as a plain integer increment of the packed exponent+fraction, so a
/// fraction that rounds up past all ones carries into the exponent. This is intended: it promotes
/// the largest subnormal to the smallest normal, bumps a normal to the next binade, and takes
/// [`Half::MAX`](super::Half::MAX) to infinity, all with the correct result.
pub(crate) const fn narrow(bits: u32) -> u16 {
  // Extract sign, exponent, and fraction. The sign is moved straight to its position in the
  // narrow layout.
  let sign = (bits & BINARY32.sign_mask()) >> (BINARY32.width() - BINARY16.width());
  let exponent = BINARY32.exponent(bits);
  let frac = BINARY32.fraction(bits);

  // Infinity or NaN. Infinity has a zero fraction and stays that way. A NaN keeps the top bits of
  // its payload, but those might all be 0, so the quiet bit is forced on to make sure it doesn't
  // turn into an infinity.
  if exponent == BINARY32.exp_max() {
    let quiet = if frac != 0 {BINARY16.quiet_bit()} else {0};
    return (sign | BINARY16.exp_mask() | quiet | (frac >> FRAC_SHIFT)) as u16
  }

  // Re-bias the exponent for the narrow layout. From here on the number is finite.
  let half_exp = exponent as i32 - BINARY32.bias() + BINARY16.bias();

  // Too big: saturate to infinity. Note that this only catches the exponents that are out of
  // range; a value just below 2^16 may still round up to infinity on the normal path below.
  if half_exp >= BINARY16.exp_max() as i32 {
    return (sign | BINARY16.exp_mask()) as u16
  }

  if half_exp <= 0 {
    // Too small to be a normal half, so the result is subnormal or zero. A subnormal half is
    // `frac × 2^-24`, and the smallest one, 2^-24, is at `half_exp == -9`. Anything with
    // `half_exp < -10` is below 2^-25, i.e. below half of the smallest subnormal, so it rounds
    // to zero. (This also covers `f32` zeros and subnormals, which have `half_exp == -112`.)
    if half_exp < -(BINARY16.frac_width() as i32) {
      return sign as u16
    }

    // Reinstate the hidden bit and shift the significand down to the subnormal position.
    let significand = frac | BINARY32.hidden_bit();
    let shift = (FRAC_SHIFT as i32 + 1 - half_exp) as u32;
    let half_frac = significand >> shift;

    // Round to nearest, ties to even. Round up iff the guard bit (the msb of the bits shifted
    // out) is set, and either any bit below it (sticky) or the lsb of the result (odd) is set.
    // The mask `3 * guard - 1` is exactly those bits: `guard << 1 | (guard - 1)`.
    let guard = 1 << (shift - 1);
    let round_up = significand & guard != 0 && significand & (3 * guard - 1) != 0;

    // May carry into the exponent field; see the doc comment.
    return (sign | half_frac) as u16 + round_up as u16
  }

  // Normal: keep the exponent, truncate the fraction to its top bits, round as above with the
  // guard bit being the msb of the truncated bits.
  let packed = sign | ((half_exp as u32) << BINARY16.frac_width()) | (frac >> FRAC_SHIFT);
  let guard = 1 << (FRAC_SHIFT - 1);
  let round_up = frac & guard != 0 && frac & (3 * guard - 1) != 0;

  // May carry into the exponent field; see the doc comment.
  (packed + round_up as u32) as u16
}
