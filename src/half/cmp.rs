use super::*;

use core::cmp::Ordering;

// Equality and ordering follow IEEE 754 (which is also what `f32` does), and are defined by
// widening both operands to `f32` and comparing those: NaN is unordered and unequal to everything
// including itself, and `-0 == +0`. Hence `Half` is `PartialEq` and `PartialOrd` but not `Eq`,
// `Ord`, or `Hash`. For a total order on the bit patterns, see [`Half::total_cmp`].

impl PartialEq for Half {
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.to_f32() == other.to_f32()
  }
}

impl PartialOrd for Half {
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    self.to_f32().partial_cmp(&other.to_f32())
  }

  #[inline]
  fn lt(&self, other: &Self) -> bool {
    self.to_f32() < other.to_f32()
  }

  #[inline]
  fn le(&self, other: &Self) -> bool {
    self.to_f32() <= other.to_f32()
  }

  #[inline]
  fn gt(&self, other: &Self) -> bool {
    self.to_f32() > other.to_f32()
  }

  #[inline]
  fn ge(&self, other: &Self) -> bool {
    self.to_f32() >= other.to_f32()
  }
}

impl Half {
  /// The IEEE 754 *totalOrder* predicate: a total order on all bit patterns, namely
  ///
  /// `-NaN < -∞ < -MAX < … < -0 < +0 < … < MAX < +∞ < +NaN`
  ///
  /// with NaNs of the same sign ordered by payload. Computed directly on the bits, the same way
  /// as [`f32::total_cmp`].
  ///
  /// ```
  /// # use soft_half::Half;
  /// use core::cmp::Ordering;
  /// assert_eq!(Half::NEG_ZERO.total_cmp(&Half::ZERO), Ordering::Less);
  /// assert_eq!(Half::NAN.total_cmp(&Half::INFINITY), Ordering::Greater);
  /// ```
  #[inline]
  pub fn total_cmp(&self, other: &Self) -> Ordering {
    // Flip all the bits except the sign of negative numbers, so that as signed ints they sort
    // the right way around.
    let key = |h: &Self| {
      let bits = h.0 as i16;
      bits ^ ((((bits >> 15) as u16) >> 1) as i16)
    };
    key(self).cmp(&key(other))
  }

  /// Returns the minimum of two halves. If one of them is NaN, the other is returned (IEEE 754
  /// *minNum*, same as [`f32::min`]).
  #[inline]
  pub fn min(self, other: Self) -> Self {
    Self::from_f32(self.to_f32().min(other.to_f32()))
  }

  /// Returns the maximum of two halves. If one of them is NaN, the other is returned (IEEE 754
  /// *maxNum*, same as [`f32::max`]).
  #[inline]
  pub fn max(self, other: Self) -> Self {
    Self::from_f32(self.to_f32().max(other.to_f32()))
  }

  /// Restrict `self` to the interval `[min, max]`. NaN stays NaN.
  ///
  /// # Panics
  ///
  /// Panics if `min > max`, `min` is NaN, or `max` is NaN (same as [`f32::clamp`]).
  #[inline]
  pub fn clamp(self, min: Self, max: Self) -> Self {
    Self::from_f32(self.to_f32().clamp(min.to_f32(), max.to_f32()))
  }
}
