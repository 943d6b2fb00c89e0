use std::str::FromStr;

use num::bigint::ParseBigIntError;
use num::BigUint;
use thiserror::Error;

use crate::types::Bin;

/// Failure to read a numeral from text, the one fallible surface of the
/// crate.
#[derive(Clone, Debug, PartialEq, Error)]
#[error(transparent)]
pub struct ParseBinError(#[from] ParseBigIntError);

/// Reads a decimal numeral. The result is always canonical, so parsing the
/// output of `Display` canonicalizes: `b.to_string().parse()` agrees with
/// `b.normalize()`, not with `b`.
impl FromStr for Bin {
  type Err = ParseBinError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Bin::from_nat(&s.parse::<BigUint>()?))
  }
}
