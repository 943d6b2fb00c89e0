use bitvec::prelude::{BitBox, BitSlice, BitVec};
use num::{BigUint, Zero};

use crate::types::Bin;

impl Bin {
  /// The counter transition: flips the low run of set digits and carries
  /// into the first clear one. Successor on values:
  /// `b.suc().to_nat() == b.to_nat() + 1`.
  pub fn suc(self) -> Bin {
    match self {
      Bin::Zero => Bin::Zero.bit1(),
      Bin::Bit0(n) => Bin::Bit1(n),
      Bin::Bit1(n) => n.suc().bit0(),
    }
  }

  /// Double the denoted value. `Zero` maps to `Zero` itself rather than to
  /// `Bit0(Zero)`, so doubling a canonical tree yields a canonical tree.
  pub fn double(self) -> Bin {
    match self {
      Bin::Zero => Bin::Zero,
      b => b.bit0(),
    }
  }

  /// Canonicalize in one bottom-up pass: rebuild each digit over the
  /// normalized tail, routing 0 digits through [`double`](Bin::double) so a
  /// tail that collapsed to `Zero` absorbs the digit instead of becoming
  /// `Bit0(Zero)`. Each digit is visited exactly once and the pass never
  /// inspects the digits above it.
  ///
  /// Value-preserving and idempotent. `from_nat` inverts `to_nat` only up to
  /// this map: `Bin::from_nat(&b.to_nat()) == b.normalize()`, with equality
  /// on the nose exactly when `b` was already canonical.
  pub fn normalize(self) -> Bin {
    match self {
      Bin::Zero => Bin::Zero,
      Bin::Bit0(n) => n.normalize().double(),
      Bin::Bit1(n) => n.normalize().bit1(),
    }
  }

  /// Interpret the digit string, least significant digit first.
  pub fn to_nat(&self) -> BigUint {
    let mut out = BigUint::zero();
    let mut t = self;
    for bit in 0.. {
      match t {
        Bin::Zero => return out,
        Bin::Bit0(e) => t = e,
        Bin::Bit1(e) => { out.set_bit(bit, true); t = e }
      }
    }
    unreachable!()
  }

  /// The canonical tree denoting `n`, by direct radix-2 conversion: fold the
  /// digits most significant first, so the top digit (always a 1 for nonzero
  /// `n`) lands next to `Zero` and no `Bit0(Zero)` is ever formed. Hence
  /// `Bin::from_nat(&n).to_nat() == n` with no normalization step.
  ///
  /// The counting characterization `from_nat(n + 1) == from_nat(n).suc()`
  /// holds as a law but is not the implementation, which would cost `n`
  /// increments instead of one pass over the bits.
  pub fn from_nat(n: &BigUint) -> Bin {
    let mut tm = Bin::Zero;
    if !n.is_zero() {
      for &i in n.to_radix_le(2).iter().rev() {
        tm = if i == 0 { tm.bit0() } else { tm.bit1() };
      }
    }
    tm
  }

  /// The digit string itself, least significant first, spurious high zeros
  /// included. Unlike [`to_nat`](Bin::to_nat) this view is lossless:
  /// `Bin::from_bits(&b.bits()) == b` for every tree, canonical or not.
  pub fn bits(&self) -> BitBox {
    let mut out = BitVec::with_capacity(self.len());
    let mut t = self;
    loop {
      match t {
        Bin::Zero => return out.into_boxed_bitslice(),
        Bin::Bit0(e) => { out.push(false); t = e }
        Bin::Bit1(e) => { out.push(true); t = e }
      }
    }
  }

  /// Rebuild a tree from a least-significant-first digit string, preserving
  /// it digit for digit.
  pub fn from_bits(bits: &BitSlice) -> Bin {
    let mut tm = Bin::Zero;
    for i in (0..bits.len()).rev() {
      tm = if bits[i] { tm.bit1() } else { tm.bit0() };
    }
    tm
  }
}

impl From<&Bin> for BigUint {
  fn from(b: &Bin) -> BigUint { b.to_nat() }
}

impl From<BigUint> for Bin {
  fn from(n: BigUint) -> Bin { Bin::from_nat(&n) }
}

impl From<u64> for Bin {
  fn from(n: u64) -> Bin { Bin::from_nat(&BigUint::from(n)) }
}

#[cfg(test)]
mod tests {
  use num::BigUint;

  use super::Bin;

  fn nat(n: u64) -> BigUint { BigUint::from(n) }

  #[test]
  fn zero_converts_both_ways() {
    assert_eq!(Bin::from_nat(&nat(0)), Bin::Zero);
    assert_eq!(Bin::Zero.to_nat(), nat(0));
  }

  #[test]
  fn five_is_bit1_bit0_bit1() {
    let five = Bin::Zero.bit1().bit0().bit1();
    assert_eq!(Bin::from_nat(&nat(5)), five);
    assert_eq!(five.to_nat(), nat(5));
  }

  #[test]
  fn suc_counts_up_from_zero() {
    let mut b = Bin::Zero;
    for n in 1..=200u64 {
      b = b.suc();
      assert_eq!(b.to_nat(), nat(n));
    }
    assert_eq!(b, Bin::from_nat(&nat(200)));
  }

  #[test]
  fn suc_carries_through_a_run_of_ones() {
    // 7 = Bit1(Bit1(Bit1(Zero))); adding one carries to 8 = Bit0(Bit0(Bit0(Bit1(Zero))))
    let seven = Bin::Zero.bit1().bit1().bit1();
    let eight = Bin::Zero.bit1().bit0().bit0().bit0();
    assert_eq!(seven.suc(), eight);
  }

  #[test]
  fn double_keeps_zero_bare() {
    assert_eq!(Bin::Zero.double(), Bin::Zero);
    let three = Bin::Zero.bit1().bit1();
    assert_eq!(three.clone().double(), three.bit0());
  }

  #[test]
  fn normalize_strips_spurious_zeros() {
    assert_eq!(Bin::Zero.bit0().normalize(), Bin::Zero);
    assert_eq!(Bin::Zero.bit0().bit1().normalize(), Bin::Zero.bit1());
    let padded = Bin::Zero.bit0().bit0().bit1().bit0().bit1();
    assert_eq!(padded.clone().normalize(), Bin::Zero.bit1().bit0().bit1());
    assert_eq!(padded.to_nat(), nat(5));
  }

  #[test]
  fn normalize_fixes_canonical_trees() {
    for n in 0..64u64 {
      let b = Bin::from_nat(&nat(n));
      assert_eq!(b.clone().normalize(), b);
    }
  }

  #[test]
  fn bits_round_trips_noncanonical_trees() {
    let padded = Bin::Zero.bit0().bit0().bit1();
    let bits = padded.bits();
    assert_eq!(bits.len(), 3);
    assert_eq!(Bin::from_bits(&bits), padded);
  }

  #[test]
  fn from_u64_matches_from_nat() {
    assert_eq!(Bin::from(37u64), Bin::from_nat(&nat(37)));
    assert_eq!(BigUint::from(&Bin::from(37u64)), nat(37));
  }
}
