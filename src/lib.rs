#![cfg_attr(not(any(test, feature = "std")), no_std)]
//! This crate provides a small and exact software implementation of the
//! [IEEE 754](https://en.wikipedia.org/wiki/Half-precision_floating-point_format) half precision
//! floating point format (`binary16`), for platforms and toolchains without a native `f16`.
//!
//! # Introduction
//!
//! A half is 16 bits: 1 sign bit, 5 exponent bits (bias 15), and 10 fraction bits. It can
//! represent magnitudes from about 6 × 10⁻⁸ (smallest subnormal) to 65504, with a little over 3
//! significant decimal digits. It is mostly used for *storage*: machine learning weights,
//! textures, sensor samples, and so on, where halving the memory footprint of an `f32` matters
//! more than precision.
//!
//! The core of this crate is a pair of bit-level conversions between halves and `f32`s:
//!
//!   - [`Half::from_f32`] rounds to nearest (ties to even), overflows to infinity, underflows to
//!     zero keeping the sign, and keeps NaNs NaN.
//!   - [`Half::to_f32`] is always exact.
//!
//! Everything else is derived from those two: arithmetic and math functions compute in `f32` and
//! round the result back to half (see [`lift`]), and comparisons are done on the widened values.
//!
//! # Usage
//!
//! ```
//! use soft_half::Half;
//!
//! // Create halves from floats, strings, constants, or a raw bit representation.
//! # use soft_half::RoundFrom;
//! let a = Half::from_f32(2.71);
//! let b = Half::round_from(0.1_f32);
//! let c: Half = "3.14".parse().unwrap();
//! let d = Half::from_bits(0x3c00);
//! let e = Half::MAX;
//!
//! // Perform basic arithmetic and comparisons with the usual operators.
//! assert!(Half::ONE + Half::ONE == Half::from_f32(2.0));
//! assert!(Half::MIN_POSITIVE_SUBNORMAL > Half::ZERO);
//! assert!(e + d == e);
//! assert!((e * c).is_infinite());
//!
//! // Convert halves back to floats, strings, or a raw bit representation.
//! assert_eq!(d.to_f32(), 1.0);
//! assert_eq!(f32::from(a), 2.7109375);
//! assert_eq!(b.to_bits(), 0x2e66);
//! assert_eq!(format!("{c}"), "3.140625");
//! ```
//!
//! # Features
//!
//!   - `std` (default): math functions (`sqrt`, `exp`, `sin`, ...) forward to the `f32`
//!     implementations in `std`, and [`ParseHalfError`] implements `std::error::Error`. Without it,
//!     the crate is `no_std`, does not allocate, and the math functions use [`libm`] instead.
//!   - `bench`: benchmarks; run them with `cargo bench -F bench`.

mod half;
pub mod layout;

pub use half::Half;
pub use half::convert::{RoundFrom, RoundInto};
pub use half::lift::{lift, Lift};
pub use half::parse::ParseHalfError;

/// Number of cases to run in each proptest.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1_0000} else {0x10_0000};

/// Re-export some internals for benchmarking purposes, only on `feature = "bench"`.
#[cfg(feature = "bench")]
mod bench;

#[cfg(feature = "bench")]
pub use bench::{bench_narrow, bench_widen};
