use super::*;
use super::lift::lift;

// All of these are an `f32` function, lifted: widen, call, narrow. With the `std` feature the
// `f32` function is the platform's (through `std`), otherwise it comes from `libm`. Functions that
// `std` doesn't have for `f32` (`erf`, `gamma`, `remainder`, ...) always come from `libm`.
//
// `sqrt` is correctly rounded (same argument as for `+`, `-`, `*`, `/`); the rest are as accurate
// as the underlying `f32` implementation, plus one rounding.

/// Helper macro for lifting unary `f32` functions: the `std` method `$name`, or `libm::$libm`.
macro_rules! mk_unary {
  ($($name:ident / $libm:ident: $doc:literal,)*) => {
    impl Half {
      $(
        #[doc = $doc]
        #[inline]
        pub fn $name(self) -> Self {
          #[cfg(feature = "std")]
          { lift(f32::$name, (self,)) }
          #[cfg(not(feature = "std"))]
          { lift(libm::$libm, (self,)) }
        }
      )*
    }
  }
}

/// Helper macro for lifting binary `f32` functions: the `std` method `$name`, or `libm::$libm`.
macro_rules! mk_binary {
  ($($name:ident / $libm:ident: $doc:literal,)*) => {
    impl Half {
      $(
        #[doc = $doc]
        #[inline]
        pub fn $name(self, other: Self) -> Self {
          #[cfg(feature = "std")]
          { lift(f32::$name, (self, other)) }
          #[cfg(not(feature = "std"))]
          { lift(libm::$libm, (self, other)) }
        }
      )*
    }
  }
}

mk_unary!{
  sqrt / sqrtf: "Square root. Negative inputs (other than `-0`) give NaN.",
  cbrt / cbrtf: "Cube root.",
  exp / expf: "`e^self`.",
  exp2 / exp2f: "`2^self`.",
  exp_m1 / expm1f: "`e^self - 1`, accurate even when `self` is close to zero.",
  ln / logf: "Natural logarithm. Negative inputs give NaN, zeros give `-∞`.",
  log2 / log2f: "Base 2 logarithm.",
  log10 / log10f: "Base 10 logarithm.",
  ln_1p / log1pf: "`ln(1 + self)`, accurate even when `self` is close to zero.",
  sin / sinf: "Sine, in radians.",
  cos / cosf: "Cosine, in radians.",
  tan / tanf: "Tangent, in radians.",
  asin / asinf: "Arcsine, in radians, in the range [-π/2, π/2].",
  acos / acosf: "Arccosine, in radians, in the range [0, π].",
  atan / atanf: "Arctangent, in radians, in the range [-π/2, π/2].",
  sinh / sinhf: "Hyperbolic sine.",
  cosh / coshf: "Hyperbolic cosine.",
  tanh / tanhf: "Hyperbolic tangent.",
  asinh / asinhf: "Inverse hyperbolic sine.",
  acosh / acoshf: "Inverse hyperbolic cosine.",
  atanh / atanhf: "Inverse hyperbolic tangent.",
  floor / floorf: "Largest integer less than or equal to `self`.",
  ceil / ceilf: "Smallest integer greater than or equal to `self`.",
  trunc / truncf: "Integer part of `self`, rounding towards zero.",
  round / roundf: "Nearest integer to `self`, rounding ties away from zero.",
  round_ties_even / rintf: "Nearest integer to `self`, rounding ties to even (C `rint`/`nearbyint`).",
}

mk_binary!{
  powf / powf: "`self^other`.",
  hypot / hypotf: "`√(self² + other²)`, without intermediate overflow.",
  atan2 / atan2f: "Four quadrant arctangent of `self` (y) and `other` (x), in radians.",
}

impl Half {
  /// Fractional part of `self`, i.e. `self - self.trunc()`.
  #[inline]
  pub fn fract(self) -> Self {
    #[cfg(feature = "std")]
    { lift(f32::fract, (self,)) }
    #[cfg(not(feature = "std"))]
    { lift(|x: f32| x - libm::truncf(x), (self,)) }
  }

  /// `self^n`, for an integer `n`.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::from_f32(2.0).powi(10), Half::from_f32(1024.0));
  /// assert_eq!(Half::from_f32(2.0).powi(16), Half::INFINITY);
  /// ```
  #[inline]
  pub fn powi(self, n: i32) -> Self {
    #[cfg(feature = "std")]
    { lift(|x: f32| x.powi(n), (self,)) }
    #[cfg(not(feature = "std"))]
    { lift(|x: f32| libm::powf(x, n as f32), (self,)) }
  }

  /// Fused multiply-add: `self * a + b` with a single rounding in `f32`, and a final rounding to
  /// half (C `fma`).
  #[inline]
  pub fn mul_add(self, a: Self, b: Self) -> Self {
    #[cfg(feature = "std")]
    { lift(f32::mul_add, (self, a, b)) }
    #[cfg(not(feature = "std"))]
    { lift(libm::fmaf, (self, a, b)) }
  }

  /// Positive difference: `self - other` if that is positive, `+0` otherwise, NaN if either is
  /// NaN (C `fdim`).
  #[inline]
  pub fn fdim(self, other: Self) -> Self {
    lift(|x: f32, y: f32| {
      if x.is_nan() || y.is_nan() { f32::NAN }
      else if x > y { x - y }
      else { 0. }
    }, (self, other))
  }

  /// Linear interpolation between `self` (at `t = 0`) and `other` (at `t = 1`), with the same
  /// guarantees as C++ `std::lerp` for finite inputs:
  ///
  ///   - The endpoints are exact: `t = 0` gives `self`, `t = 1` gives `other`.
  ///   - For `t` in `[0, 1]` the result stays between `self` and `other`.
  ///   - The result is monotonic in `t`, and `a.lerp(a, t) == a`.
  ///
  /// ```
  /// # use soft_half::Half;
  /// let (a, b) = (Half::from_f32(2.0), Half::from_f32(4.0));
  /// assert_eq!(a.lerp(b, Half::from_f32(0.5)), Half::from_f32(3.0));
  /// assert_eq!(a.lerp(b, Half::ONE), b);
  /// assert_eq!(Half::MAX.lerp(Half::MIN_POSITIVE_SUBNORMAL, Half::ONE), Half::MIN_POSITIVE_SUBNORMAL);
  /// ```
  #[inline]
  pub fn lerp(self, other: Self, t: Self) -> Self {
    lift(|a: f32, b: f32, t: f32| {
      if a <= 0. && b >= 0. || a >= 0. && b <= 0. {
        // Opposite signs (or a zero): this form is exact at both ends
        t * b + (1. - t) * a
      } else if t == 1. {
        b
      } else {
        // `a + t * (b - a)` may overshoot `b` by rounding; clamp to it on the side of `b`
        let x = a + t * (b - a);
        if (t > 1.) == (b > a) { b.max(x) } else { b.min(x) }
      }
    }, (self, other, t))
  }

  /// The error function, `erf(self) = 2/√π ∫₀^self e^(-t²) dt`.
  #[inline]
  pub fn erf(self) -> Self {
    lift(libm::erff, (self,))
  }

  /// The complementary error function, `1 - erf(self)`, accurate for large `self`.
  #[inline]
  pub fn erfc(self) -> Self {
    lift(libm::erfcf, (self,))
  }

  /// The gamma function, `Γ(self)` (C `tgamma`). Overflows to infinity above about 9.2.
  ///
  /// ```
  /// # use soft_half::Half;
  /// assert_eq!(Half::from_f32(5.0).gamma(), Half::from_f32(24.0));
  /// ```
  #[inline]
  pub fn gamma(self) -> Self {
    lift(libm::tgammaf, (self,))
  }

  /// Natural logarithm of the absolute value of the gamma function, `ln |Γ(self)|` (C `lgamma`).
  #[inline]
  pub fn ln_gamma(self) -> Self {
    lift(libm::lgammaf, (self,))
  }

  /// IEEE 754 remainder: `self - n * other`, where `n` is `self / other` rounded to the nearest
  /// integer, ties to even (C `remainder`). Unlike `%`, the result may be negative for positive
  /// operands. Always exact.
  ///
  /// ```
  /// # use soft_half::Half;
  /// let h = Half::from_f32;
  /// assert_eq!(h(7.0).remainder(h(2.0)), h(-1.0));
  /// assert_eq!(h(7.0) % h(2.0), h(1.0));
  /// ```
  #[inline]
  pub fn remainder(self, other: Self) -> Self {
    lift(libm::remainderf, (self, other))
  }
}
