//! Dimension vectors packed into a single codeword
//!
//! A [`Dim`] holds one rational exponent per [`Base`] quantity. Multiplying
//! two quantities adds their dimensions, dividing subtracts them, and raising
//! a quantity to a rational power scales every exponent.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use log::trace;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::base::Base;
use crate::bits::{DIM_FIELD_MASK, DIM_WORD_MASK, NUM_BASES};
use crate::rational::{Rational, RationalError, RationalResult};

/// Errors that can occur during dimension operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DimError {
    /// A word with an out-of-range field or nonzero upper bits
    #[error("Dimension codeword {0:#018x} is malformed")]
    InvalidCodeword(u64),
    /// Exponent arithmetic overflowed
    #[error("Exponent arithmetic failed: {0}")]
    Rational(#[from] RationalError),
}

/// Result type for dimension operations
pub type DimResult<T> = Result<T, DimError>;

/// A vector of rational exponents over the base quantities
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dim {
    code: u64,
}

impl Dim {
    /// The dimensionless dimension.
    pub const NUL: Dim = Dim { code: 0 };
    /// Time.
    pub const TIME: Dim = Dim::NUL.with_exp(Base::Time, Rational::ONE);
    /// Length.
    pub const LENGTH: Dim = Dim::NUL.with_exp(Base::Length, Rational::ONE);
    /// Mass.
    pub const MASS: Dim = Dim::NUL.with_exp(Base::Mass, Rational::ONE);
    /// Charge.
    pub const CHARGE: Dim = Dim::NUL.with_exp(Base::Charge, Rational::ONE);
    /// Temperature.
    pub const TEMPERATURE: Dim = Dim::NUL.with_exp(Base::Temperature, Rational::ONE);

    /// Create a dimension from exponents in codeword order
    pub const fn new(exps: [Rational; NUM_BASES]) -> Self {
        let mut dim = Dim::NUL;
        let mut i = 0;
        while i < NUM_BASES {
            dim = dim.with_exp(Base::ALL[i], exps[i]);
            i += 1;
        }
        dim
    }

    /// Create a dimension from integer exponents in codeword order
    pub const fn from_integers(exps: [i64; NUM_BASES]) -> DimResult<Self> {
        let mut dim = Dim::NUL;
        let mut i = 0;
        while i < NUM_BASES {
            match Rational::from_integer(exps[i]) {
                Ok(r) => dim = dim.with_exp(Base::ALL[i], r),
                Err(e) => return Err(DimError::Rational(e)),
            }
            i += 1;
        }
        Ok(dim)
    }

    /// Codeword of this dimension
    pub const fn encode(self) -> u64 {
        self.code
    }

    /// Dimension from a codeword
    ///
    /// Bits above the last base and fields that are not normalized rationals
    /// are rejected.
    pub const fn decode(code: u64) -> DimResult<Self> {
        if code & !DIM_WORD_MASK != 0 {
            return Err(DimError::InvalidCodeword(code));
        }
        let mut i = 0;
        while i < NUM_BASES {
            let field = ((code >> Base::ALL[i].offset()) & DIM_FIELD_MASK) as u8;
            if Rational::decode(field).is_err() {
                return Err(DimError::InvalidCodeword(code));
            }
            i += 1;
        }
        Ok(Dim { code })
    }

    /// Exponent of a base quantity
    pub const fn exp(self, base: Base) -> Rational {
        Rational::from_code(((self.code >> base.offset()) & DIM_FIELD_MASK) as u8)
    }

    /// Copy of this dimension with one exponent replaced
    pub const fn with_exp(self, base: Base, exp: Rational) -> Self {
        let cleared = self.code & !(DIM_FIELD_MASK << base.offset());
        Dim { code: cleared | ((exp.encode() as u64) << base.offset()) }
    }

    /// All exponents in codeword order
    pub const fn exps(self) -> [Rational; NUM_BASES] {
        let mut exps = [Rational::ZERO; NUM_BASES];
        let mut i = 0;
        while i < NUM_BASES {
            exps[i] = self.exp(Base::ALL[i]);
            i += 1;
        }
        exps
    }

    /// Check if every exponent is zero
    pub const fn is_dimensionless(self) -> bool {
        self.code == 0
    }

    /// Apply a binary exponent function base by base
    pub fn combine<F>(self, other: Dim, f: F) -> DimResult<Dim>
    where
        F: Fn(Rational, Rational) -> RationalResult<Rational>,
    {
        Base::ALL.iter().try_fold(Dim::NUL, |dim, &base| {
            let exp = f(self.exp(base), other.exp(base))?;
            Ok(dim.with_exp(base, exp))
        })
    }

    /// Apply a unary exponent function base by base
    pub fn transform<F>(self, f: F) -> DimResult<Dim>
    where
        F: Fn(Rational) -> RationalResult<Rational>,
    {
        Base::ALL.iter().try_fold(Dim::NUL, |dim, &base| {
            let exp = f(self.exp(base))?;
            Ok(dim.with_exp(base, exp))
        })
    }

    /// Dimension of a quantity raised to the power `p`
    pub fn scale(self, p: Rational) -> DimResult<Dim> {
        self.transform(|e| e.checked_mul(p))
    }

    /// Dimension of the `p`-th root of a quantity
    pub fn unscale(self, p: Rational) -> DimResult<Dim> {
        self.transform(|e| e.checked_div(p))
    }

    /// Dimension of the reciprocal of a quantity
    pub fn recip(self) -> DimResult<Dim> {
        self.transform(Rational::checked_neg)
    }
}

impl fmt::Display for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for base in Base::PRINT_ORDER {
            let e = self.exp(base);
            if e.is_zero() {
                continue;
            }
            write!(f, " {}", base.symbol())?;
            if e != Rational::ONE {
                write!(f, "^{e}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Dim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Dim");
        for base in Base::ALL {
            s.field(base.name(), &format_args!("{}", self.exp(base)));
        }
        s.finish()
    }
}

impl TryFrom<u64> for Dim {
    type Error = DimError;

    fn try_from(code: u64) -> DimResult<Self> {
        Self::decode(code).inspect_err(|e| trace!("rejected dimension word: {e}"))
    }
}

impl From<Dim> for u64 {
    fn from(dim: Dim) -> Self {
        dim.encode()
    }
}

impl Serialize for Dim {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(self.code)
    }
}

impl<'de> Deserialize<'de> for Dim {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u64::deserialize(deserializer)?;
        Dim::try_from(code).map_err(serde::de::Error::custom)
    }
}

// Dimension algebra operators
impl Add for Dim {
    type Output = DimResult<Dim>;

    fn add(self, other: Dim) -> Self::Output {
        self.combine(other, Rational::checked_add)
    }
}

impl Sub for Dim {
    type Output = DimResult<Dim>;

    fn sub(self, other: Dim) -> Self::Output {
        self.combine(other, Rational::checked_sub)
    }
}

impl Mul<Rational> for Dim {
    type Output = DimResult<Dim>;

    fn mul(self, p: Rational) -> Self::Output {
        self.scale(p)
    }
}

impl Div<Rational> for Dim {
    type Output = DimResult<Dim>;

    fn div(self, p: Rational) -> Self::Output {
        self.unscale(p)
    }
}

impl Neg for Dim {
    type Output = DimResult<Dim>;

    fn neg(self) -> Self::Output {
        self.recip()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rat(n: i64, d: i64) -> Rational {
        Rational::new(n, d).unwrap()
    }

    fn speed() -> Dim {
        Dim::from_integers([-1, 1, 0, 0, 0]).unwrap()
    }

    #[test]
    fn test_base_constants() {
        assert_eq!(Dim::TIME.encode(), 0x08);
        assert_eq!(Dim::LENGTH.encode(), 0x08 << 8);
        assert_eq!(Dim::TEMPERATURE.encode(), 0x08 << 32);
        assert!(Dim::NUL.is_dimensionless());
        assert!(!Dim::MASS.is_dimensionless());
        assert_eq!(Dim::default(), Dim::NUL);
    }

    #[test]
    fn test_encoding_layout() {
        let dim = Dim::from_integers([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(dim.encode(), 0x0000_0028_2018_1008);
        assert_eq!(Dim::decode(dim.encode()), Ok(dim));
    }

    #[test]
    fn test_exponent_access() {
        let dim = Dim::new([rat(-1, 2), Rational::ONE, Rational::ZERO, rat(3, 1), Rational::ZERO]);
        assert_eq!(dim.exp(Base::Time), rat(-1, 2));
        assert_eq!(dim.exp(Base::Length), Rational::ONE);
        assert_eq!(dim.exp(Base::Charge), rat(3, 1));
        assert_eq!(dim.exps()[3], rat(3, 1));

        let dim = dim.with_exp(Base::Charge, Rational::ZERO);
        assert_eq!(dim.exp(Base::Charge), Rational::ZERO);
        assert_eq!(dim.exp(Base::Time), rat(-1, 2));
    }

    #[test]
    fn test_decode_rejects_malformed_words() {
        let high = 1u64 << 40;
        assert_eq!(Dim::decode(high), Err(DimError::InvalidCodeword(high)));
        // mass field holding 2/2
        let bad = 0x11u64 << 16;
        assert_eq!(Dim::decode(bad), Err(DimError::InvalidCodeword(bad)));
        assert!(Dim::try_from(bad).is_err());
    }

    #[test]
    fn test_combine_and_undo() {
        let a = speed();
        let b = Dim::new([rat(1, 2), Rational::ZERO, rat(-1, 1), Rational::ZERO, Rational::ONE]);
        let sum = (a + b).unwrap();
        assert_eq!(sum.exp(Base::Time), rat(-1, 2));
        assert_eq!((sum - b).unwrap(), a);
    }

    #[test]
    fn test_scale_and_unscale() {
        let accel = Dim::from_integers([-2, 1, 0, 0, 0]).unwrap();
        let squared = (accel * rat(2, 1)).unwrap();
        assert_eq!(squared, Dim::from_integers([-4, 2, 0, 0, 0]).unwrap());
        assert_eq!((squared / rat(2, 1)).unwrap(), accel);
        assert_eq!(accel.scale(rat(2, 3)).unwrap().scale(rat(3, 2)).unwrap(), accel);

        let root = Dim::TIME.unscale(rat(2, 1)).unwrap();
        assert_eq!(root.exp(Base::Time), Rational::HALF);
    }

    #[test]
    fn test_exponent_overflow_propagates() {
        let big = Dim::from_integers([0, 8, 0, 0, 0]).unwrap();
        assert_eq!(big + big, Err(DimError::Rational(RationalError::NumeratorOverflow)));
        let fine = Dim::new([rat(1, 8), Rational::ZERO, Rational::ZERO, Rational::ZERO, Rational::ZERO]);
        assert_eq!(fine.unscale(rat(2, 1)), Err(DimError::Rational(RationalError::DenominatorOverflow)));
        assert_eq!(Dim::TIME.unscale(Rational::ZERO), Err(DimError::Rational(RationalError::ReciprocalOfZero)));
    }

    #[test]
    fn test_recip() {
        assert_eq!((-speed()).unwrap(), Dim::from_integers([1, -1, 0, 0, 0]).unwrap());
        assert_eq!((-Dim::NUL).unwrap(), Dim::NUL);
        let min = Dim::from_integers([-16, 0, 0, 0, 0]).unwrap();
        assert!(min.recip().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(speed().to_string(), " m s^-1");
        assert_eq!(Dim::NUL.to_string(), "");
        assert_eq!(Dim::MASS.to_string(), " kg");

        let mixed = Dim::new([rat(-1, 2), Rational::ONE, rat(2, 1), Rational::ZERO, rat(1, 3)]);
        assert_eq!(mixed.to_string(), " m kg^2 s^[-1/2] K^[1/3]");
    }

    #[test]
    fn test_debug() {
        let dbg = format!("{:?}", speed());
        assert_eq!(dbg, "Dim { time: -1, length: 1, mass: 0, charge: 0, temperature: 0 }");
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&speed()).unwrap();
        assert_eq!(json, speed().encode().to_string());
        let back: Dim = serde_json::from_str(&json).unwrap();
        assert_eq!(back, speed());

        assert!(serde_json::from_str::<Dim>(&(1u64 << 63).to_string()).is_err());
    }
}
