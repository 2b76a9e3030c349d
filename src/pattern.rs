//! ═══════════════════════════════════════════════════════════════════════════════
//! PATTERN — Fixed-Width Bit-Vector Contract
//! ═══════════════════════════════════════════════════════════════════════════════
//!
//! A pattern is the atomic input/output unit: N bits, value semantics.
//!
//! Algebraic preconditions (assumed, never checked at runtime):
//!   p == p          ~~p == p          p & p == p
//!   p | zero == p   p & zero == zero  Default::default() == zero
//!
//! Violating them gives undefined harness verdicts, not a panic.
//! ═══════════════════════════════════════════════════════════════════════════════

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use rand::Rng;

// ═══════════════════════════════════════════════════════════════════════════════
// CONTRACT
// ═══════════════════════════════════════════════════════════════════════════════

/// Capability contract for fixed-width bit patterns
///
/// Only `size`, `bit` and `set_bit` are required; the logical operations
/// default to bitwise loops and may be overridden with faster versions.
pub trait PatternLike: Clone + PartialEq + Default + fmt::Debug {
    /// Number of bits; identical for every value of the type
    fn size(&self) -> usize;

    fn bit(&self, index: usize) -> bool;

    fn set_bit(&mut self, index: usize, value: bool);

    fn complement(&self) -> Self {
        let mut out = Self::default();
        for i in 0..self.size() {
            out.set_bit(i, !self.bit(i));
        }
        out
    }

    fn and(&self, other: &Self) -> Self {
        let mut out = Self::default();
        for i in 0..self.size() {
            out.set_bit(i, self.bit(i) && other.bit(i));
        }
        out
    }

    fn or(&self, other: &Self) -> Self {
        let mut out = Self::default();
        for i in 0..self.size() {
            out.set_bit(i, self.bit(i) || other.bit(i));
        }
        out
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// HELPERS
// ═══════════════════════════════════════════════════════════════════════════════

/// Number of positions at which two patterns agree
pub fn count_matches<P: PatternLike>(a: &P, b: &P) -> usize {
    (0..a.size()).filter(|&i| a.bit(i) == b.bit(i)).count()
}

pub fn count_ones<P: PatternLike>(pattern: &P) -> usize {
    (0..pattern.size()).filter(|&i| pattern.bit(i)).count()
}

/// Copy of `pattern` with exactly one uniformly chosen bit inverted
pub fn flip_random_bit<P: PatternLike, R: Rng + ?Sized>(pattern: &P, rng: &mut R) -> P {
    let mut out = pattern.clone();
    let size = out.size();
    if size == 0 {
        return out;
    }
    let index = rng.random_range(0..size);
    out.set_bit(index, !pattern.bit(index));
    out
}

// ═══════════════════════════════════════════════════════════════════════════════
// BITS<N>
// ═══════════════════════════════════════════════════════════════════════════════

/// Concrete N-bit pattern
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bits<const N: usize> {
    bits: [bool; N],
}

impl<const N: usize> Bits<N> {
    pub fn zero() -> Self {
        Self { bits: [false; N] }
    }

    /// Pattern with exactly the listed bits set
    ///
    /// # Panics
    ///
    /// Panics if any index is `>= N`.
    pub fn from_indices(indices: &[usize]) -> Self {
        let mut out = Self::zero();
        for &i in indices {
            out.bits[i] = true;
        }
        out
    }

    pub fn is_zero(&self) -> bool {
        self.bits.iter().all(|b| !b)
    }
}

impl<const N: usize> Default for Bits<N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize> PatternLike for Bits<N> {
    fn size(&self) -> usize {
        N
    }

    fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    fn set_bit(&mut self, index: usize, value: bool) {
        self.bits[index] = value;
    }

    fn complement(&self) -> Self {
        !*self
    }

    fn and(&self, other: &Self) -> Self {
        *self & *other
    }

    fn or(&self, other: &Self) -> Self {
        *self | *other
    }
}

impl<const N: usize> Not for Bits<N> {
    type Output = Self;

    fn not(self) -> Self {
        Self {
            bits: self.bits.map(|b| !b),
        }
    }
}

impl<const N: usize> BitAnd for Bits<N> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        let mut out = self;
        for (a, b) in out.bits.iter_mut().zip(rhs.bits) {
            *a &= b;
        }
        out
    }
}

impl<const N: usize> BitOr for Bits<N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        let mut out = self;
        for (a, b) in out.bits.iter_mut().zip(rhs.bits) {
            *a |= b;
        }
        out
    }
}

impl<const N: usize> fmt::Display for Bits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Bits<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bits<{}>({})", N, self)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
