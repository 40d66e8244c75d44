use super::*;

/// A function on `f32`s that can be *lifted* to a function on [`Half`]s: widen the arguments,
/// apply the function natively, narrow the result.
///
/// Implemented for every `FnOnce` of arity 1, 2, and 3 from `f32`s to `f32`, with `Args` being
/// the corresponding tuple of `Half`s. Use it through [`lift`].
pub trait Lift<Args> {
  /// Call `self` on the widened `args`, and narrow the result.
  fn call_lifted(self, args: Args) -> Half;
}

impl<F: FnOnce(f32) -> f32> Lift<(Half,)> for F {
  #[inline]
  fn call_lifted(self, (x,): (Half,)) -> Half {
    Half::from_f32(self(x.to_f32()))
  }
}

impl<F: FnOnce(f32, f32) -> f32> Lift<(Half, Half)> for F {
  #[inline]
  fn call_lifted(self, (x, y): (Half, Half)) -> Half {
    Half::from_f32(self(x.to_f32(), y.to_f32()))
  }
}

impl<F: FnOnce(f32, f32, f32) -> f32> Lift<(Half, Half, Half)> for F {
  #[inline]
  fn call_lifted(self, (x, y, z): (Half, Half, Half)) -> Half {
    Half::from_f32(self(x.to_f32(), y.to_f32(), z.to_f32()))
  }
}

/// Evaluate an `f32` function `f` on half arguments: `narrow(f(widen(x), widen(y), ...))`.
///
/// The result is the correctly rounded half of whatever `f` returns. Note that this is not always
/// the correctly rounded half of the *exact* result, if `f` itself rounds (double rounding); for
/// `+`, `-`, `*`, `/`, and `sqrt` it is, since `f32` has more than twice the precision of `Half`.
///
/// ```
/// # use soft_half::{Half, lift};
/// let x = Half::from_f32(2.0);
/// assert_eq!(lift(|x: f32| x * x, (x,)), Half::from_f32(4.0));
/// assert_eq!(lift(f32::max, (x, Half::ONE)), x);
/// assert_eq!(lift(f32::mul_add, (x, x, Half::ONE)), Half::from_f32(5.0));
/// ```
#[inline]
pub fn lift<Args, F: Lift<Args>>(f: F, args: Args) -> Half {
  f.call_lifted(args)
}
