use super::*;

impl Half {
  /// An iterator through all the 2^16 bit patterns, in increasing order.
  pub(crate) fn cases_exhaustive() -> impl Iterator<Item = Self> {
    (0 ..= u16::MAX).map(Self::from_bits)
  }

  /// An iterator through all the finite, non-NaN halves, in increasing order of value (from `-MAX`
  /// to `+MAX`, with `-0` right before `+0`).
  pub(crate) fn cases_exhaustive_finite() -> impl Iterator<Item = Self> {
    let neg = (0x8000 ..= 0xfbff).rev().map(Self::from_bits);
    let pos = (0x0000 ..= 0x7bff).map(Self::from_bits);
    neg.chain(pos)
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields any half, NaNs and infinities
  /// included.
  pub(crate) fn cases_proptest() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    any::<u16>().prop_map(Self::from_bits)
  }

  /// A [proptest Strategy](proptest::strategy::Strategy) that yields finite halves.
  pub(crate) fn cases_proptest_finite() -> impl proptest::strategy::Strategy<Value = Self> {
    use proptest::prelude::*;
    (any::<bool>(), 0 ..= 0x7bffu16).prop_map(|(sign, abs)| {
      Self::from_bits(if sign {abs | 0x8000} else {abs})
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn cases_exhaustive() {
    assert_eq!(Half::cases_exhaustive().count(), 1 << 16);
    assert_eq!(Half::cases_exhaustive().filter(|h| h.is_nan()).count(), 2 * 1023);
  }

  #[test]
  fn cases_exhaustive_finite() {
    let all = Half::cases_exhaustive_finite().collect::<Vec<_>>();
    assert_eq!(all.len(), 2 * 0x7c00);
    assert!(all.iter().all(|h| h.is_finite()));
    assert_eq!(all.first().map(|h| h.to_bits()), Some(0xfbff));
    assert_eq!(all.last().map(|h| h.to_bits()), Some(0x7bff));
    assert!(all.windows(2).all(|w| w[0].to_f32() <= w[1].to_f32()));
  }
}
