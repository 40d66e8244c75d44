use super::*;
use super::lift::lift;

use core::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Div, DivAssign, Rem, RemAssign};

// Every operation widens both operands to `f32`, operates natively, and narrows the result. For
// `+`, `-`, `*`, and `/`, an `f32` has enough precision (24 ≥ 2 × 11 + 2 bits) that the double
// rounding is harmless, and the result is the correctly rounded half of the exact result. `%` is
// exact in any precision.

impl Half {
  #[inline]
  pub(crate) fn add(self, other: Self) -> Self {
    lift(|a: f32, b: f32| a + b, (self, other))
  }

  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    lift(|a: f32, b: f32| a - b, (self, other))
  }

  #[inline]
  pub(crate) fn mul(self, other: Self) -> Self {
    lift(|a: f32, b: f32| a * b, (self, other))
  }

  #[inline]
  pub(crate) fn div(self, other: Self) -> Self {
    lift(|a: f32, b: f32| a / b, (self, other))
  }

  /// The remainder of truncated division, with the sign of `self` (C `fmod`).
  #[inline]
  pub(crate) fn rem(self, other: Self) -> Self {
    lift(|a: f32, b: f32| a % b, (self, other))
  }
}

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl $trait<Half> for Half {
      type Output = Half;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { Half::$name(self, rhs) }
    }

    impl $trait<&Half> for Half {
      type Output = Half;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { Half::$name(self, *rhs) }
    }

    impl $trait<Half> for &Half {
      type Output = Half;

      #[inline]
      fn $name(self, rhs: Half) -> Self::Output { Half::$name(*self, rhs) }
    }

    impl $trait<&Half> for &Half {
      type Output = Half;

      #[inline]
      fn $name(self, rhs: &Half) -> Self::Output { Half::$name(*self, *rhs) }
    }

    impl $trait_assign<Half> for Half {
      #[inline]
      fn $name_assign(&mut self, rhs: Half) { *self = Half::$name(*self, rhs) }
    }

    impl $trait_assign<&Half> for Half {
      #[inline]
      fn $name_assign(&mut self, rhs: &Half) { *self = Half::$name(*self, *rhs) }
    }

    /// The `f32` operand is used as is, not rounded to half first: only the result is rounded.
    impl $trait_assign<f32> for Half {
      #[inline]
      fn $name_assign(&mut self, rhs: f32) { *self = lift(|a: f32| $trait::$name(a, rhs), (*self,)) }
    }
  }
}

mk_ops!{Add, AddAssign, add, add_assign}
mk_ops!{Sub, SubAssign, sub, sub_assign}
mk_ops!{Mul, MulAssign, mul, mul_assign}
mk_ops!{Div, DivAssign, div, div_assign}
mk_ops!{Rem, RemAssign, rem, rem_assign}

impl core::iter::Sum for Half {
  /// Sums the halves left to right, rounding after every addition.
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Half::NEG_ZERO, Half::add)
  }
}

impl<'a> core::iter::Sum<&'a Half> for Half {
  fn sum<I: Iterator<Item = &'a Half>>(iter: I) -> Self {
    iter.copied().sum()
  }
}

impl core::iter::Product for Half {
  /// Multiplies the halves left to right, rounding after every multiplication.
  fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Half::ONE, Half::mul)
  }
}

impl<'a> core::iter::Product<&'a Half> for Half {
  fn product<I: Iterator<Item = &'a Half>>(iter: I) -> Self {
    iter.copied().product()
  }
}
