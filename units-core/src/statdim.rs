//! Values whose dimension is fixed by their type

use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use log::debug;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use units_math::{Dim, Rational};

use crate::dimval::{DimValError, DimValResult, Dimensioned, DynDim, Scalar};

/// A magnitude whose dimension is the codeword `D`
///
/// `D` is validated when the kind is first used; a malformed codeword stops
/// compilation. Values of one kind add, subtract and compare without checks.
#[derive(Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct StatDim<const D: u64, T = f64> {
    value: T,
}

/// A dimensionless quantity
pub type Number<T = f64> = StatDim<0, T>;

impl<const D: u64, T> StatDim<D, T> {
    /// Dimension of every value of this kind.
    pub const DIM: Dim = match Dim::decode(D) {
        Ok(dim) => dim,
        Err(_) => panic!("malformed dimension codeword"),
    };

    /// Bind a magnitude to this kind
    pub const fn from_value(value: T) -> Self {
        let _ = Self::DIM;
        Self { value }
    }

    /// Bind a magnitude to this kind, checking a runtime dimension
    pub fn new(value: T, dim: Dim) -> DimValResult<Self> {
        if dim != Self::DIM {
            debug!("dimension{dim} does not match{}", Self::DIM);
            return Err(DimValError::IncompatibleDimension { expected: Self::DIM, found: dim });
        }
        Ok(Self { value })
    }

    /// The magnitude, consuming the value
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<const D: u64, T: Scalar> StatDim<D, T> {
    /// Reciprocal of the value
    pub fn inverse(self) -> DimValResult<DynDim<T>> {
        DynDim::from(self).inverse()
    }

    /// Raise to a rational power
    pub fn pow(self, p: Rational) -> DimValResult<DynDim<T>> {
        DynDim::from(self).pow(p)
    }

    /// Raise to the power `n / d`
    pub fn powi_ratio(self, n: i64, d: i64) -> DimValResult<DynDim<T>> {
        DynDim::from(self).powi_ratio(n, d)
    }

    /// Square root
    pub fn sqrt(self) -> DimValResult<DynDim<T>> {
        DynDim::from(self).sqrt()
    }
}

impl<T: Scalar> StatDim<0, T> {
    /// The magnitude of a dimensionless value
    pub fn number(self) -> T {
        self.value
    }
}

impl<const D: u64, T: Scalar> Dimensioned<T> for StatDim<D, T> {
    fn value(&self) -> T {
        self.value
    }

    fn dim(&self) -> Dim {
        Self::DIM
    }
}

impl<const D: u64, T> From<StatDim<D, T>> for DynDim<T> {
    fn from(v: StatDim<D, T>) -> Self {
        DynDim::new(v.value, StatDim::<D, T>::DIM)
    }
}

impl<const D: u64, T: Scalar> TryFrom<DynDim<T>> for StatDim<D, T> {
    type Error = DimValError;

    fn try_from(v: DynDim<T>) -> DimValResult<Self> {
        Self::new(v.value(), v.dim())
    }
}

impl<const D: u64, T: Scalar> fmt::Display for StatDim<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&DynDim::from(*self), f)
    }
}

impl<const D: u64, T: Scalar> fmt::Debug for StatDim<D, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&DynDim::from(*self), f)
    }
}

impl<const D: u64, T: Scalar + Serialize> Serialize for StatDim<D, T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        DynDim::from(*self).serialize(serializer)
    }
}

impl<'de, const D: u64, T: Scalar + Deserialize<'de>> Deserialize<'de> for StatDim<D, T> {
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let v = DynDim::<T>::deserialize(deserializer)?;
        Self::try_from(v).map_err(serde::de::Error::custom)
    }
}

// Same-kind arithmetic needs no check
impl<const D: u64, T: Scalar> Add for StatDim<D, T> {
    type Output = StatDim<D, T>;

    fn add(self, other: Self) -> Self::Output {
        Self { value: self.value + other.value }
    }
}

impl<const D: u64, T: Scalar> Sub for StatDim<D, T> {
    type Output = StatDim<D, T>;

    fn sub(self, other: Self) -> Self::Output {
        Self { value: self.value - other.value }
    }
}

impl<const D: u64, T: Scalar> AddAssign for StatDim<D, T> {
    fn add_assign(&mut self, other: Self) {
        self.value = self.value + other.value;
    }
}

impl<const D: u64, T: Scalar> SubAssign for StatDim<D, T> {
    fn sub_assign(&mut self, other: Self) {
        self.value = self.value - other.value;
    }
}

impl<const D: u64, T: Scalar> Neg for StatDim<D, T> {
    type Output = StatDim<D, T>;

    fn neg(self) -> Self::Output {
        Self { value: -self.value }
    }
}

// Mixing with a dynamic value checks at runtime
impl<const D: u64, T: Scalar> Add<DynDim<T>> for StatDim<D, T> {
    type Output = DimValResult<DynDim<T>>;

    fn add(self, other: DynDim<T>) -> Self::Output {
        DynDim::from(self).checked_add(&other)
    }
}

impl<const D: u64, T: Scalar> Add<StatDim<D, T>> for DynDim<T> {
    type Output = DimValResult<DynDim<T>>;

    fn add(self, other: StatDim<D, T>) -> Self::Output {
        self.checked_add(&other)
    }
}

impl<const D: u64, T: Scalar> Sub<DynDim<T>> for StatDim<D, T> {
    type Output = DimValResult<DynDim<T>>;

    fn sub(self, other: DynDim<T>) -> Self::Output {
        DynDim::from(self).checked_sub(&other)
    }
}

impl<const D: u64, T: Scalar> Sub<StatDim<D, T>> for DynDim<T> {
    type Output = DimValResult<DynDim<T>>;

    fn sub(self, other: StatDim<D, T>) -> Self::Output {
        self.checked_sub(&other)
    }
}

// Products and quotients change the dimension
impl<const D1: u64, const D2: u64, T: Scalar> Mul<StatDim<D2, T>> for StatDim<D1, T> {
    type Output = DimValResult<DynDim<T>>;

    fn mul(self, other: StatDim<D2, T>) -> Self::Output {
        DynDim::from(self).checked_mul(&other)
    }
}

impl<const D1: u64, const D2: u64, T: Scalar> Div<StatDim<D2, T>> for StatDim<D1, T> {
    type Output = DimValResult<DynDim<T>>;

    fn div(self, other: StatDim<D2, T>) -> Self::Output {
        DynDim::from(self).checked_div(&other)
    }
}

impl<const D: u64, T: Scalar> Mul<DynDim<T>> for StatDim<D, T> {
    type Output = DimValResult<DynDim<T>>;

    fn mul(self, other: DynDim<T>) -> Self::Output {
        DynDim::from(self).checked_mul(&other)
    }
}

impl<const D: u64, T: Scalar> Mul<StatDim<D, T>> for DynDim<T> {
    type Output = DimValResult<DynDim<T>>;

    fn mul(self, other: StatDim<D, T>) -> Self::Output {
        self.checked_mul(&other)
    }
}

impl<const D: u64, T: Scalar> Div<DynDim<T>> for StatDim<D, T> {
    type Output = DimValResult<DynDim<T>>;

    fn div(self, other: DynDim<T>) -> Self::Output {
        DynDim::from(self).checked_div(&other)
    }
}

impl<const D: u64, T: Scalar> Div<StatDim<D, T>> for DynDim<T> {
    type Output = DimValResult<DynDim<T>>;

    fn div(self, other: StatDim<D, T>) -> Self::Output {
        self.checked_div(&other)
    }
}

// Scaling by a dimensionless scalar
impl<const D: u64, T: Scalar> Mul<T> for StatDim<D, T> {
    type Output = StatDim<D, T>;

    fn mul(self, x: T) -> Self::Output {
        Self { value: self.value * x }
    }
}

impl<const D: u64, T: Scalar> Div<T> for StatDim<D, T> {
    type Output = StatDim<D, T>;

    fn div(self, x: T) -> Self::Output {
        Self { value: self.value / x }
    }
}

impl<const D: u64, T: Scalar> MulAssign<T> for StatDim<D, T> {
    fn mul_assign(&mut self, x: T) {
        self.value = self.value * x;
    }
}

impl<const D: u64, T: Scalar> DivAssign<T> for StatDim<D, T> {
    fn div_assign(&mut self, x: T) {
        self.value = self.value / x;
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl<const D: u64> Mul<StatDim<D, $t>> for $t {
            type Output = StatDim<D, $t>;

            fn mul(self, v: StatDim<D, $t>) -> Self::Output {
                v * self
            }
        }

        impl<const D: u64> Div<StatDim<D, $t>> for $t {
            type Output = DimValResult<DynDim<$t>>;

            fn div(self, v: StatDim<D, $t>) -> Self::Output {
                self / DynDim::from(v)
            }
        }

        impl From<StatDim<0, $t>> for $t {
            fn from(v: StatDim<0, $t>) -> $t {
                v.value
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);
