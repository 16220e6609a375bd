//! Common-denominator reduction of a pair of rationals
//!
//! Addition, subtraction and ordering all bring both operands over the least
//! common denominator first, so that only numerators need to be combined.

use crate::rational::Rational;

/// Greatest common divisor of two unsigned numbers.
pub const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Least common denominator of two rationals and their numerators over it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonDenom {
    /// GCD of the input denominators
    pub g: i64,
    /// First denominator divided by `g`
    pub d1g: i64,
    /// Second denominator divided by `g`
    pub d2g: i64,
    /// Least common denominator
    pub lcd: i64,
    /// First numerator scaled to `lcd`
    pub n1: i64,
    /// Second numerator scaled to `lcd`
    pub n2: i64,
}

impl CommonDenom {
    /// Reduce `r1` and `r2` to their least common denominator.
    pub const fn new(r1: Rational, r2: Rational) -> Self {
        let d1 = r1.denom() as i64;
        let d2 = r2.denom() as i64;
        let g = gcd(d1 as u64, d2 as u64) as i64;
        let d1g = d1 / g;
        let d2g = d2 / g;
        Self { g, d1g, d2g, lcd: d1g * d2, n1: r1.numer() as i64 * d2g, n2: r2.numer() as i64 * d1g }
    }
}
