//! This module and its submodules contain a software implementation of the IEEE 754 half
//! precision floating point type (`binary16`), built on top of conversions to and from the
//! native `f32`.
//!
//! The heart of it is the pair of bit-level conversions in [`encode`] (`f32` → `Half`, which has
//! to round) and [`decode`] (`Half` → `f32`, which is always exact). Arithmetic, comparisons, and
//! math functions are all defined in terms of those two: widen the operands to `f32`, compute
//! natively, narrow the result.
//!
//! Some notation used in the comments:
//!
//!   - **Leftmost bits/msb**: most-significant bits.
//!   - **Rightmost bits/lsb**: least-significant bits.
//!   - **Bit 0, bit 1, .. bit N-1**: numbered least significant to most significant, starts at 0.
//!   - **Narrow**: convert `f32` → `Half`.
//!   - **Widen**: convert `Half` → `f32`.

/// An IEEE 754 half precision (`binary16`) floating point number: 1 sign bit, 5 exponent bits,
/// 10 fraction bits.
///
/// Examples:
///
/// ```
/// # use soft_half::Half;
/// let a = Half::from_f32(1.5);
/// let b = Half::from_bits(0x3c00);  // 1.0
/// assert_eq!((a + b).to_f32(), 2.5);
/// assert_eq!(a.to_bits(), 0x3e00);
/// ```
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
pub struct Half(u16);

/// Basics
mod basics;

/// Constants (zero, one, infinities, etc)
mod consts;

/// Narrowing an `f32` bit pattern into a `Half` bit pattern.
mod encode;

/// Widening a `Half` bit pattern into an `f32` bit pattern.
mod decode;

/// Classification predicates on the raw bit pattern.
mod classify;

/// Conversions to and from other types.
pub(crate) mod convert;

/// Lifting `f32` functions to `Half` functions.
pub(crate) mod lift;

/// Equality and ordering.
mod cmp;

/// Arithmetic operators.
mod ops;

/// Unary operations on the bit pattern: negation, absolute value, etc.
mod unary;

/// Math functions, forwarded to the `f32` implementations in `std` (or `libm` without it).
mod math;

/// Formatting.
mod fmt;

/// Parsing.
pub(crate) mod parse;

/// Test cases and strategies.
#[cfg(test)]
mod test;

/// Exact rational values of halves and floats, used as an oracle in tests.
#[cfg(test)]
mod rational;

pub(crate) use encode::narrow;
pub(crate) use decode::widen;
