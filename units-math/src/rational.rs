//! Rational module providing a fixed-precision, overflow-checked rational number
//!
//! A [`Rational`] is stored as a single 8-bit codeword (see [`crate::bits`]).
//! Every constructor and arithmetic operation normalizes its result to lowest
//! terms with a positive denominator and fails rather than wrap when the result
//! does not fit the numerator or denominator field.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use log::trace;
use num_rational::Rational64;
use num_traits::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::bits::{DNM_BITS, DNM_MASK, DNM_MAX, NMR_MASK, NMR_MAX, NMR_MIN};
use crate::common_denom::{gcd, CommonDenom};

/// Errors that can occur during rational operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RationalError {
    /// A denominator of zero
    #[error("Division by zero")]
    DivisionByZero,
    /// The reduced numerator does not fit its bits
    #[error("Numerator too large for its bit range")]
    NumeratorOverflow,
    /// The reduced denominator does not fit its bits
    #[error("Denominator too large for its bit range")]
    DenominatorOverflow,
    /// Zero has no reciprocal
    #[error("Attempt to take reciprocal of zero")]
    ReciprocalOfZero,
    /// A true fraction was converted to an integer
    #[error("Attempted conversion to integer from fraction")]
    NotAnInteger,
    /// A byte that is not a canonical codeword
    #[error("Codeword {0:#04x} is not a normalized rational")]
    InvalidCodeword(u8),
    /// Text that is not `n`, `n/d` or `[n/d]`
    #[error("Cannot parse rational: expected `n`, `n/d` or `[n/d]`")]
    ParseError,
}

/// Result type for rational operations
pub type RationalResult<T> = Result<T, RationalError>;

/// Normalize a numerator and denominator.
///
/// The denominator becomes positive, numerator and denominator become
/// relatively prime, and each is checked against its bit range.
pub const fn normalize(n: i64, d: i64) -> RationalResult<(i8, u8)> {
    if d == 0 {
        return Err(RationalError::DivisionByZero);
    }
    // i128 keeps the sign flip of i64::MIN exact.
    let (n, d) = if d < 0 { (-(n as i128), -(d as i128)) } else { (n as i128, d as i128) };
    let g = gcd_wide(n.unsigned_abs(), d as u128) as i128;
    let n = n / g;
    let d = d / g;
    if n < NMR_MIN as i128 || n > NMR_MAX as i128 {
        return Err(RationalError::NumeratorOverflow);
    }
    if d > DNM_MAX as i128 {
        return Err(RationalError::DenominatorOverflow);
    }
    Ok((n as i8, d as u8))
}

const fn gcd_wide(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Product `(n1/d1) * (n2/d2)`, cross-reducing before multiplying.
const fn mul_pairs(n1: i64, d1: i64, n2: i64, d2: i64) -> RationalResult<Rational> {
    let ga = gcd(n1.unsigned_abs(), d2.unsigned_abs()) as i64;
    let gb = gcd(n2.unsigned_abs(), d1.unsigned_abs()) as i64;
    Rational::new((n1 / ga) * (n2 / gb), (d1 / gb) * (d2 / ga))
}

/// Build a rational inside a constant item; invalid input fails compilation.
pub(crate) const fn literal(n: i64, d: i64) -> Rational {
    match Rational::new(n, d) {
        Ok(r) => r,
        Err(_) => panic!("rational literal out of range"),
    }
}

/// A fixed-precision rational number encoded in one byte
///
/// Equality and hashing operate on the codeword, which is canonical because
/// every instance is normalized.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rational {
    code: u8,
}

impl Rational {
    /// Zero.
    pub const ZERO: Rational = literal(0, 1);
    /// One.
    pub const ONE: Rational = literal(1, 1);
    /// One half, the exponent of a square root.
    pub const HALF: Rational = literal(1, 2);
    /// Two, the index of a square root.
    pub const TWO: Rational = literal(2, 1);
    /// Most negative representable value.
    pub const MIN: Rational = literal(NMR_MIN, 1);
    /// Most positive representable value.
    pub const MAX: Rational = literal(NMR_MAX, 1);

    /// Create a normalized rational from numerator and denominator
    pub const fn new(n: i64, d: i64) -> RationalResult<Self> {
        match normalize(n, d) {
            Ok((n, d)) => Ok(Self::from_pair(n, d)),
            Err(e) => Err(e),
        }
    }

    /// Create a rational from an integer
    pub const fn from_integer(n: i64) -> RationalResult<Self> {
        Self::new(n, 1)
    }

    /// Pack an already normalized pair.
    const fn from_pair(n: i8, d: u8) -> Self {
        let high = ((n as u8) << DNM_BITS) & NMR_MASK;
        let low = (d - 1) & DNM_MASK;
        Self { code: high | low }
    }

    /// Wrap a codeword known to be canonical.
    pub(crate) const fn from_code(code: u8) -> Self {
        Self { code }
    }

    /// Codeword of this rational
    pub const fn encode(self) -> u8 {
        self.code
    }

    /// Rational from a codeword
    ///
    /// Words that do not hold a normalized fraction (such as `2/2`) are
    /// rejected.
    pub const fn decode(code: u8) -> RationalResult<Self> {
        let r = Self::from_code(code);
        match normalize(r.numer() as i64, r.denom() as i64) {
            Ok((n, d)) if n == r.numer() && d == r.denom() => Ok(r),
            _ => Err(RationalError::InvalidCodeword(code)),
        }
    }

    /// Normalized numerator
    pub const fn numer(self) -> i8 {
        (self.code as i8) >> DNM_BITS
    }

    /// Normalized denominator
    pub const fn denom(self) -> u8 {
        (self.code & DNM_MASK) + 1
    }

    /// Check if this rational is exactly zero
    pub const fn is_zero(self) -> bool {
        self.numer() == 0
    }

    /// Check if the denominator is one
    pub const fn is_integer(self) -> bool {
        self.denom() == 1
    }

    /// Sign of this rational: -1, 0 or 1
    pub const fn signum(self) -> i8 {
        self.numer().signum()
    }

    /// Convert to an integer, failing for a true fraction
    pub const fn to_integer(self) -> RationalResult<i64> {
        if !self.is_integer() {
            return Err(RationalError::NotAnInteger);
        }
        Ok(self.numer() as i64)
    }

    /// Convert to f64
    pub fn to_f64(self) -> f64 {
        f64::from(self.numer()) / f64::from(self.denom())
    }

    /// Convert to f32
    pub fn to_f32(self) -> f32 {
        f32::from(self.numer()) / f32::from(self.denom())
    }

    /// Negated value
    ///
    /// Fails for [`Rational::MIN`], whose magnitude has no positive counterpart.
    pub const fn checked_neg(self) -> RationalResult<Self> {
        Self::new(-(self.numer() as i64), self.denom() as i64)
    }

    /// Absolute value
    pub const fn abs(self) -> RationalResult<Self> {
        if self.numer() < 0 {
            self.checked_neg()
        } else {
            Ok(self)
        }
    }

    /// Reciprocal, keeping the sign in the numerator
    pub const fn reciprocal(self) -> RationalResult<Self> {
        let n = self.numer() as i64;
        let d = self.denom() as i64;
        if n == 0 {
            return Err(RationalError::ReciprocalOfZero);
        }
        if n < 0 {
            Self::new(-d, -n)
        } else {
            Self::new(d, n)
        }
    }

    /// Sum of two rationals
    pub const fn checked_add(self, other: Self) -> RationalResult<Self> {
        let c = CommonDenom::new(self, other);
        Self::new(c.n1 + c.n2, c.lcd)
    }

    /// Difference of two rationals
    pub const fn checked_sub(self, other: Self) -> RationalResult<Self> {
        let c = CommonDenom::new(self, other);
        Self::new(c.n1 - c.n2, c.lcd)
    }

    /// Product of two rationals
    pub const fn checked_mul(self, other: Self) -> RationalResult<Self> {
        mul_pairs(self.numer() as i64, self.denom() as i64, other.numer() as i64, other.denom() as i64)
    }

    /// Quotient of two rationals
    ///
    /// The divisor is inverted without being re-encoded, so a quotient that
    /// fits is never rejected because the divisor's reciprocal does not.
    pub const fn checked_div(self, other: Self) -> RationalResult<Self> {
        let n2 = other.numer() as i64;
        let d2 = other.denom() as i64;
        if n2 == 0 {
            return Err(RationalError::ReciprocalOfZero);
        }
        let (rn, rd) = if n2 < 0 { (-d2, -n2) } else { (d2, n2) };
        mul_pairs(self.numer() as i64, self.denom() as i64, rn, rd)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let c = CommonDenom::new(*self, *other);
        c.n1.cmp(&c.n2)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer())
        } else {
            write!(f, "[{}/{}]", self.numer(), self.denom())
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RATIONAL({}/{})", self.numer(), self.denom())?;
        if f.alternate() {
            write!(f, " [code:{:#04x}]", self.code)?;
        }
        Ok(())
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix('[') {
            Some(rest) => rest.strip_suffix(']').ok_or(RationalError::ParseError)?,
            None => trimmed,
        };

        let parse = |text: &str| text.trim().parse::<i64>().map_err(|_| RationalError::ParseError);
        let result = match inner.split_once('/') {
            Some((n, d)) => Self::new(parse(n)?, parse(d)?),
            None => Self::from_integer(parse(inner)?),
        };
        result.inspect_err(|e| trace!("rejected rational literal {s:?}: {e}"))
    }
}

impl TryFrom<i64> for Rational {
    type Error = RationalError;

    fn try_from(value: i64) -> RationalResult<Self> {
        Self::from_integer(value)
    }
}

impl TryFrom<&str> for Rational {
    type Error = RationalError;

    fn try_from(value: &str) -> RationalResult<Self> {
        value.parse()
    }
}

impl TryFrom<Rational64> for Rational {
    type Error = RationalError;

    fn try_from(value: Rational64) -> RationalResult<Self> {
        Self::new(*value.numer(), *value.denom())
    }
}

impl From<Rational> for Rational64 {
    fn from(value: Rational) -> Self {
        // Already in lowest terms with a positive denominator.
        Rational64::new_raw(i64::from(value.numer()), i64::from(value.denom()))
    }
}

impl ToPrimitive for Rational {
    fn to_i64(&self) -> Option<i64> {
        self.to_integer().ok()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer().ok().and_then(|n| u64::try_from(n).ok())
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Rational::to_f64(*self))
    }
}

// Serialized as its printed form so that documents stay readable
impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// Arithmetic operator implementations. Every operator is fallible because the
// result may not fit the codeword.
impl Add for Rational {
    type Output = RationalResult<Rational>;

    fn add(self, other: Rational) -> Self::Output {
        self.checked_add(other).inspect_err(|e| trace!("{self} + {other}: {e}"))
    }
}

impl Sub for Rational {
    type Output = RationalResult<Rational>;

    fn sub(self, other: Rational) -> Self::Output {
        self.checked_sub(other).inspect_err(|e| trace!("{self} - {other}: {e}"))
    }
}

impl Mul for Rational {
    type Output = RationalResult<Rational>;

    fn mul(self, other: Rational) -> Self::Output {
        self.checked_mul(other).inspect_err(|e| trace!("{self} * {other}: {e}"))
    }
}

impl Div for Rational {
    type Output = RationalResult<Rational>;

    fn div(self, other: Rational) -> Self::Output {
        self.checked_div(other).inspect_err(|e| trace!("{self} / {other}: {e}"))
    }
}

impl Neg for Rational {
    type Output = RationalResult<Rational>;

    fn neg(self) -> Self::Output {
        self.checked_neg()
    }
}
