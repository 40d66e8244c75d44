use super::*;

use core::fmt::{Binary, Debug, Display, Formatter, LowerExp, LowerHex, Result, UpperExp, UpperHex};

/// Shows the value and the bit pattern, split into sign, exponent, and fraction, e.g.
/// `Half(1.0, 0b0_01111_0000000000)`.
impl Debug for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    let bits = self.0;
    let sign = bits >> 15;
    let exponent = (bits >> 10) & 0b11111;
    let fraction = bits & 0b11_1111_1111;
    f.debug_tuple("Half")
      .field(&self.to_f32())
      .field(&format_args!("0b{sign:b}_{exponent:05b}_{fraction:010b}"))
      .finish()
  }
}

// The value is printed as the widened `f32`, which is exact, so every formatting flag (precision,
// width, sign) behaves as it does for `f32`. Since `f32` prints the shortest representation that
// round trips *as an `f32`*, there may be more digits than needed to identify the half.

impl Display for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Display::fmt(&self.to_f32(), f)
  }
}

impl LowerExp for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    LowerExp::fmt(&self.to_f32(), f)
  }
}

impl UpperExp for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    UpperExp::fmt(&self.to_f32(), f)
  }
}

// The radix formats print the raw bits.

impl Binary for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    Binary::fmt(&self.0, f)
  }
}

impl LowerHex for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    LowerHex::fmt(&self.0, f)
  }
}

impl UpperHex for Half {
  fn fmt(&self, f: &mut Formatter<'_>) -> Result {
    UpperHex::fmt(&self.0, f)
  }
}
