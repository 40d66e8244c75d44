//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::Half;

/// The raw `f32` → half bit conversion.
#[inline]
pub fn bench_narrow(bits: u32) -> u16 {
  crate::half::narrow(bits)
}

/// The raw half → `f32` bit conversion.
#[inline]
pub fn bench_widen(bits: u16) -> u32 {
  crate::half::widen(bits)
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn half_narrow(bits: u32) -> u16 {
  crate::half::narrow(bits)
}

#[unsafe(no_mangle)]
pub fn half_widen(bits: u16) -> u32 {
  crate::half::widen(bits)
}

//

#[unsafe(no_mangle)]
pub fn half_from_f32(x: f32) -> Half {
  Half::from_f32(x)
}

#[unsafe(no_mangle)]
pub fn half_to_f32(x: Half) -> f32 {
  x.to_f32()
}

//

#[unsafe(no_mangle)]
pub fn half_add(x: Half, y: Half) -> Half {
  x + y
}

#[unsafe(no_mangle)]
pub fn half_mul(x: Half, y: Half) -> Half {
  x * y
}

#[unsafe(no_mangle)]
pub fn half_div(x: Half, y: Half) -> Half {
  x / y
}

#[unsafe(no_mangle)]
pub fn half_lt(x: Half, y: Half) -> bool {
  x < y
}
