//! Values whose dimension is checked at runtime

use std::fmt;
use std::ops::{Add, Div, DivAssign, Mul, MulAssign, Neg, Sub};

use serde::{Deserialize, Serialize};
use units_math::{Dim, Rational};

use crate::dimval::{check_same, exponent, DimValResult, Dimensioned, Scalar};
use crate::formatting::{format_dimval, FormatConfig};

/// A magnitude with a dimension carried alongside it
///
/// There is no `PartialOrd`: values are ordered with [`Dimensioned::try_cmp`]
/// and friends, which fail with `DimensionMismatch` when dimensions differ.
#[derive(Clone, Copy, Default, Serialize, Deserialize)]
pub struct DynDim<T = f64> {
    value: T,
    dim: Dim,
}

impl<T> DynDim<T> {
    /// Create a value with any dimension
    pub const fn new(value: T, dim: Dim) -> Self {
        Self { value, dim }
    }

    /// Create a value with no dimension
    pub const fn dimensionless(value: T) -> Self {
        Self { value, dim: Dim::NUL }
    }
}

impl<T: Scalar> DynDim<T> {
    /// Reciprocal of the value
    pub fn inverse(self) -> DimValResult<Self> {
        Ok(Self::new(T::one() / self.value, self.dim.recip()?))
    }

    /// Raise to a rational power
    ///
    /// Negative magnitudes raised to fractional powers give NaN.
    pub fn pow(self, p: Rational) -> DimValResult<Self> {
        Ok(Self::new(self.value.powf(exponent(p)), self.dim.scale(p)?))
    }

    /// Raise to the power `n / d`
    pub fn powi_ratio(self, n: i64, d: i64) -> DimValResult<Self> {
        let p = Rational::new(n, d).map_err(units_math::DimError::from)?;
        self.pow(p)
    }

    /// Square root
    pub fn sqrt(self) -> DimValResult<Self> {
        Ok(Self::new(self.value.sqrt(), self.dim.unscale(Rational::TWO)?))
    }

    /// Add another value of the same dimension in place
    pub fn add_dimval<O: Dimensioned<T> + ?Sized>(&mut self, other: &O) -> DimValResult<()> {
        check_same("add", self.dim, other.dim())?;
        self.value = self.value + other.value();
        Ok(())
    }

    /// Subtract another value of the same dimension in place
    pub fn sub_dimval<O: Dimensioned<T> + ?Sized>(&mut self, other: &O) -> DimValResult<()> {
        check_same("subtract", self.dim, other.dim())?;
        self.value = self.value - other.value();
        Ok(())
    }

    /// Sum with a value of the same dimension
    pub fn checked_add<O: Dimensioned<T> + ?Sized>(mut self, other: &O) -> DimValResult<Self> {
        self.add_dimval(other)?;
        Ok(self)
    }

    /// Difference with a value of the same dimension
    pub fn checked_sub<O: Dimensioned<T> + ?Sized>(mut self, other: &O) -> DimValResult<Self> {
        self.sub_dimval(other)?;
        Ok(self)
    }

    /// Product with any value
    pub fn checked_mul<O: Dimensioned<T> + ?Sized>(self, other: &O) -> DimValResult<Self> {
        Ok(Self::new(self.value * other.value(), (self.dim + other.dim())?))
    }

    /// Quotient by any value
    pub fn checked_div<O: Dimensioned<T> + ?Sized>(self, other: &O) -> DimValResult<Self> {
        Ok(Self::new(self.value / other.value(), (self.dim - other.dim())?))
    }
}

impl<T: Scalar> Dimensioned<T> for DynDim<T> {
    fn value(&self) -> T {
        self.value
    }

    fn dim(&self) -> Dim {
        self.dim
    }
}

/// Structural identity of value and dimension; values of different
/// dimensions are simply unequal. Use [`Dimensioned::try_eq`] to compare
/// magnitudes with a dimension check.
impl<T: Scalar> PartialEq for DynDim<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dim == other.dim && self.value == other.value
    }
}

impl<T: Scalar> fmt::Display for DynDim<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let config = FormatConfig::from_formatter(f);
        f.write_str(&format_dimval(self.value, self.dim, &config))
    }
}

impl<T: Scalar> fmt::Debug for DynDim<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DIMVAL({}{})", self.value, self.dim)?;
        if f.alternate() {
            write!(f, " [dim:{:#012x}]", self.dim.encode())?;
        }
        Ok(())
    }
}

// Arithmetic between dynamic values
impl<T: Scalar> Add for DynDim<T> {
    type Output = DimValResult<DynDim<T>>;

    fn add(self, other: DynDim<T>) -> Self::Output {
        self.checked_add(&other)
    }
}

impl<T: Scalar> Sub for DynDim<T> {
    type Output = DimValResult<DynDim<T>>;

    fn sub(self, other: DynDim<T>) -> Self::Output {
        self.checked_sub(&other)
    }
}

impl<T: Scalar> Mul for DynDim<T> {
    type Output = DimValResult<DynDim<T>>;

    fn mul(self, other: DynDim<T>) -> Self::Output {
        self.checked_mul(&other)
    }
}

impl<T: Scalar> Div for DynDim<T> {
    type Output = DimValResult<DynDim<T>>;

    fn div(self, other: DynDim<T>) -> Self::Output {
        self.checked_div(&other)
    }
}

// Scaling by a dimensionless scalar never changes the dimension
impl<T: Scalar> Mul<T> for DynDim<T> {
    type Output = DynDim<T>;

    fn mul(self, x: T) -> Self::Output {
        Self::new(self.value * x, self.dim)
    }
}

impl<T: Scalar> Div<T> for DynDim<T> {
    type Output = DynDim<T>;

    fn div(self, x: T) -> Self::Output {
        Self::new(self.value / x, self.dim)
    }
}

impl<T: Scalar> MulAssign<T> for DynDim<T> {
    fn mul_assign(&mut self, x: T) {
        self.value = self.value * x;
    }
}

impl<T: Scalar> DivAssign<T> for DynDim<T> {
    fn div_assign(&mut self, x: T) {
        self.value = self.value / x;
    }
}

impl<T: Scalar> Neg for DynDim<T> {
    type Output = DynDim<T>;

    fn neg(self) -> Self::Output {
        Self::new(-self.value, self.dim)
    }
}

macro_rules! impl_scalar_lhs {
    ($($t:ty),*) => {$(
        impl Mul<DynDim<$t>> for $t {
            type Output = DynDim<$t>;

            fn mul(self, v: DynDim<$t>) -> Self::Output {
                v * self
            }
        }

        impl Div<DynDim<$t>> for $t {
            type Output = DimValResult<DynDim<$t>>;

            fn div(self, v: DynDim<$t>) -> Self::Output {
                Ok(v.inverse()? * self)
            }
        }

        impl TryFrom<DynDim<$t>> for $t {
            type Error = crate::dimval::DimValError;

            fn try_from(v: DynDim<$t>) -> DimValResult<$t> {
                v.to_number()
            }
        }
    )*};
}

impl_scalar_lhs!(f32, f64);
