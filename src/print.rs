use std::fmt::{self, Binary, Display, Formatter};

use crate::types::Bin;

/// Value display: the denoted number in decimal. The digit structure is not
/// recoverable from the output; trees denoting the same number print alike,
/// whether canonical or not.
impl Display for Bin {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(&self.to_nat(), f)
  }
}

/// Value display in base 2, most significant digit first (`{:b}`, with a
/// `0b` prefix under the `#` flag).
impl Binary for Bin {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Binary::fmt(&self.to_nat(), f)
  }
}
