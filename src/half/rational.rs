use super::*;

use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::PowerOf2;

/// The exact value of a **finite** `Half`, as a [`Rational`]. Panics on infinities and NaNs.
///
/// This is a **super-explicit** and **super-obvious** rendition of the decoding of a half, since
/// this is what we check the optimised conversions against! It does not go through `f32` at all.
pub fn exact(half: Half) -> Rational {
  let bits = half.to_bits();
  let sign = bits >> 15;
  let exponent = (bits >> 10) & 0b11111;
  let fraction = bits & 0b11_1111_1111;
  assert!(exponent != 0b11111, "Should not pass {bits:#06x} to `exact`");

  // A subnormal is `0.fraction × 2^(1 - 15)`, a normal is `1.fraction × 2^(exponent - 15)`. Either
  // way, that's an integer significand over 2^10.
  let magnitude = if exponent == 0 {
    Rational::from(fraction) * Rational::power_of_2(1 - 15 - 10_i64)
  } else {
    Rational::from(1024 + fraction) * Rational::power_of_2(i64::from(exponent) - 15 - 10)
  };
  if sign == 1 {-magnitude} else {magnitude}
}

/// Check whether the rational number `exact` (with sign `negative`, which matters only when
/// `exact` is 0) should be rounded to `half` under roundTiesToEven, with overflow to infinity.
///
///   - The sign of `half` is the sign of `exact`.
///   - Magnitudes ≥ `MAX + ulp/2` = 65520 round to infinity (65520 is a tie between `MAX`, which
///     is odd, and 2^16, which would be even).
///   - Otherwise, round to nearest, ties to the even bit pattern.
pub fn is_correct_rounded(exact: Rational, negative: bool, half: Half) -> bool {
  use malachite::base::num::arithmetic::traits::Abs;

  let zero = Rational::from(0);
  let negative = if exact == zero {negative} else {exact < zero};
  if half.is_sign_negative() != negative || half.is_nan() { return false }

  let exact = exact.abs();
  let magnitude = half.to_bits() & 0x7fff;

  if half.is_infinite() {
    return exact >= Rational::from(65520)
  }

  // `half` represents exactly the number `curr`, while the immediately previous and next
  // magnitudes represent exactly the numbers `prev` and `next`, respectively. The one above `MAX`
  // is treated as if the exponent range went on, i.e. 2^16.
  let prev = (magnitude > 0).then(|| self::exact(Half::from_bits(magnitude - 1)));
  let curr = self::exact(Half::from_bits(magnitude));
  let next = if magnitude == 0x7bff {
    Rational::from(65536)
  } else {
    self::exact(Half::from_bits(magnitude + 1))
  };
  let half_is_even = magnitude & 1 == 0;

  if exact == curr {
    // `exact` is exactly represented by `half`
    true
  } else if let Some(prev) = prev && prev < exact && exact < curr {
    // `exact` lies in interval `]prev, curr[`: needs to be closer to `curr` than to `prev`, or
    // same distance if `half` is even.
    let distance_curr = &curr - &exact;
    let distance_prev = &exact - &prev;
    distance_curr < distance_prev || distance_curr == distance_prev && half_is_even
  } else if curr < exact && exact < next {
    // `exact` lies in interval `]curr, next[`: needs to be closer to `curr` than to `next`, or
    // same distance if `half` is even.
    let distance_curr = &exact - &curr;
    let distance_next = &next - &exact;
    distance_curr < distance_next || distance_curr == distance_next && half_is_even
  } else {
    // Not in interval
    false
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn examples() {
    assert_eq!(exact(Half::from_bits(0x0000)), Rational::from(0));
    assert_eq!(exact(Half::from_bits(0x8000)), Rational::from(0));
    assert_eq!(exact(Half::from_bits(0x3c00)), Rational::from(1));
    assert_eq!(exact(Half::from_bits(0xbc00)), Rational::from(-1));
    assert_eq!(exact(Half::from_bits(0x4200)), Rational::from(3));
    assert_eq!(exact(Half::from_bits(0x7bff)), Rational::from(65504));
    assert_eq!(exact(Half::from_bits(0x3555)), Rational::from_signeds(1365, 4096));
    assert_eq!(exact(Half::from_bits(0x0001)), Rational::from_signeds(1, 1 << 24));
    assert_eq!(exact(Half::from_bits(0x03ff)), Rational::from_signeds(1023, 1 << 24));
    assert_eq!(exact(Half::from_bits(0x0400)), Rational::from_signeds(1, 1 << 14));
    assert_eq!(exact(Half::from_bits(0x4248)), Rational::from_signeds(201, 64));
  }

  #[test]
  fn correct_rounded() {
    let h = Half::from_bits;
    assert!(is_correct_rounded(Rational::from(1), false, h(0x3c00)));
    assert!(!is_correct_rounded(Rational::from(1), false, h(0x3c01)));
    assert!(!is_correct_rounded(Rational::from(1), false, h(0xbc00)));
    // Tie: 1 + 2^-11 goes to 1 (even), 1 + 3 × 2^-11 goes to 1 + 2^-9 (even)
    assert!(is_correct_rounded(Rational::from_signeds(2049, 2048), false, h(0x3c00)));
    assert!(!is_correct_rounded(Rational::from_signeds(2049, 2048), false, h(0x3c01)));
    assert!(is_correct_rounded(Rational::from_signeds(2051, 2048), false, h(0x3c02)));
    // Overflow
    assert!(is_correct_rounded(Rational::from(65520), false, h(0x7c00)));
    assert!(is_correct_rounded(Rational::from(-65520), true, h(0xfc00)));
    assert!(is_correct_rounded(Rational::from(65519), false, h(0x7bff)));
    assert!(!is_correct_rounded(Rational::from(65519), false, h(0x7c00)));
    // Underflow, signed zeros
    assert!(is_correct_rounded(Rational::from_signeds(1, 1 << 25), false, h(0x0000)));
    assert!(is_correct_rounded(Rational::from_signeds(-1, 1 << 25), false, h(0x8000)));
    assert!(!is_correct_rounded(Rational::from_signeds(-1, 1 << 25), false, h(0x0000)));
    assert!(is_correct_rounded(Rational::from(0), true, h(0x8000)));
    assert!(!is_correct_rounded(Rational::from(0), true, h(0x0000)));
    // NaN is never correct
    assert!(!is_correct_rounded(Rational::from(0), false, h(0x7e00)));
  }
}
