//! Dimensioned values
//!
//! A dimensioned value pairs a floating-point magnitude with a [`Dim`]. Two
//! flavors share the [`Dimensioned`] trait:
//!
//! - [`StatDim`] carries its dimension as a const generic codeword. Values of
//!   the same kind add and subtract without any runtime check.
//! - [`DynDim`] carries its dimension at runtime and checks it on every
//!   operation that requires agreement.
//!
//! Products and quotients change the dimension, so they always produce a
//! [`DynDim`]; bind the result back to a kind with `TryFrom`.

use std::cmp::Ordering;
use std::fmt;

use log::debug;
use num_traits::Float;
use thiserror::Error;
use units_math::{Base, Dim, DimError, Rational};

use crate::formatting::format_dim;

pub use crate::dyndim::DynDim;
pub use crate::statdim::{Number, StatDim};

/// Errors that can occur during dimensioned-value operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimValError {
    /// A value was bound to a kind of another dimension
    #[error("Incompatible dimension: expected {}, found {}", format_dim(.expected), format_dim(.found))]
    IncompatibleDimension {
        /// Dimension of the kind
        expected: Dim,
        /// Dimension of the value
        found: Dim,
    },
    /// Operands of an addition, subtraction or comparison differ in dimension
    #[error("Cannot {op} values with dimensions {} and {}", format_dim(.left), format_dim(.right))]
    DimensionMismatch {
        /// Operation that was attempted
        op: &'static str,
        /// Dimension of the left operand
        left: Dim,
        /// Dimension of the right operand
        right: Dim,
    },
    /// A dimensioned value was used where a bare number is required
    #[error("Value with dimension {} is not a number", format_dim(.0))]
    NotANumber(Dim),
    /// Exponent arithmetic overflowed
    #[error(transparent)]
    Dim(#[from] DimError),
}

/// Result type for dimensioned-value operations
pub type DimValResult<T> = Result<T, DimValError>;

/// Magnitude type of a dimensioned value
///
/// Rational exponents must convert to the scalar exactly, hence the `From`
/// bounds on both halves of a rational codeword.
pub trait Scalar: Float + From<i8> + From<u8> + fmt::Display + fmt::Debug {}

impl<T> Scalar for T where T: Float + From<i8> + From<u8> + fmt::Display + fmt::Debug {}

/// A rational exponent as a scalar.
pub fn exponent<T: Scalar>(r: Rational) -> T {
    <T as From<i8>>::from(r.numer()) / <T as From<u8>>::from(r.denom())
}

/// Fail with `DimensionMismatch` unless both dimensions agree.
pub(crate) fn check_same(op: &'static str, left: Dim, right: Dim) -> DimValResult<()> {
    if left == right {
        Ok(())
    } else {
        debug!("cannot {op}:{left} vs{right}");
        Err(DimValError::DimensionMismatch { op, left, right })
    }
}

/// Common interface of statically and dynamically dimensioned values
pub trait Dimensioned<T: Scalar> {
    /// Magnitude in base units
    fn value(&self) -> T;

    /// Dimension of the value
    fn dim(&self) -> Dim;

    /// Exponent of one base quantity
    fn exp(&self, base: Base) -> Rational {
        self.dim().exp(base)
    }

    /// Magnitude of a dimensionless value
    fn to_number(&self) -> DimValResult<T> {
        let dim = self.dim();
        if dim.is_dimensionless() {
            Ok(self.value())
        } else {
            debug!("value with dimension{dim} used as a number");
            Err(DimValError::NotANumber(dim))
        }
    }

    /// Compare magnitudes of two values of the same dimension
    ///
    /// `Ok(None)` means the magnitudes are unordered (NaN).
    fn try_cmp<O>(&self, other: &O) -> DimValResult<Option<Ordering>>
    where
        O: Dimensioned<T> + ?Sized,
    {
        check_same("compare", self.dim(), other.dim())?;
        Ok(self.value().partial_cmp(&other.value()))
    }

    /// Equal magnitudes of the same dimension
    fn try_eq<O>(&self, other: &O) -> DimValResult<bool>
    where
        O: Dimensioned<T> + ?Sized,
    {
        Ok(self.try_cmp(other)? == Some(Ordering::Equal))
    }

    /// Unequal magnitudes of the same dimension
    fn try_ne<O>(&self, other: &O) -> DimValResult<bool>
    where
        O: Dimensioned<T> + ?Sized,
    {
        Ok(!self.try_eq(other)?)
    }

    /// Smaller magnitude of the same dimension
    fn try_lt<O>(&self, other: &O) -> DimValResult<bool>
    where
        O: Dimensioned<T> + ?Sized,
    {
        Ok(self.try_cmp(other)? == Some(Ordering::Less))
    }

    /// Smaller or equal magnitude of the same dimension
    fn try_le<O>(&self, other: &O) -> DimValResult<bool>
    where
        O: Dimensioned<T> + ?Sized,
    {
        Ok(matches!(self.try_cmp(other)?, Some(Ordering::Less | Ordering::Equal)))
    }

    /// Larger magnitude of the same dimension
    fn try_gt<O>(&self, other: &O) -> DimValResult<bool>
    where
        O: Dimensioned<T> + ?Sized,
    {
        Ok(self.try_cmp(other)? == Some(Ordering::Greater))
    }

    /// Larger or equal magnitude of the same dimension
    fn try_ge<O>(&self, other: &O) -> DimValResult<bool>
    where
        O: Dimensioned<T> + ?Sized,
    {
        Ok(matches!(self.try_cmp(other)?, Some(Ordering::Greater | Ordering::Equal)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed() -> Dim {
        Dim::from_integers([-1, 1, 0, 0, 0]).unwrap()
    }

    #[test]
    fn test_exponent_conversion() {
        assert_eq!(exponent::<f64>(Rational::HALF), 0.5);
        assert_eq!(exponent::<f32>(Rational::new(-3, 4).unwrap()), -0.75);
        assert_eq!(exponent::<f64>(Rational::MIN), -16.0);
    }

    #[test]
    fn test_check_same() {
        assert!(check_same("add", speed(), speed()).is_ok());
        let err = check_same("add", Dim::LENGTH, Dim::TIME).unwrap_err();
        assert_eq!(err, DimValError::DimensionMismatch { op: "add", left: Dim::LENGTH, right: Dim::TIME });
    }

    #[test]
    fn test_error_messages() {
        let err = DimValError::DimensionMismatch { op: "add", left: Dim::LENGTH, right: Dim::TIME };
        assert_eq!(err.to_string(), "Cannot add values with dimensions m and s");

        let err = DimValError::IncompatibleDimension { expected: speed(), found: Dim::NUL };
        assert_eq!(err.to_string(), "Incompatible dimension: expected m s^-1, found dimensionless");

        let err = DimValError::NotANumber(Dim::MASS);
        assert_eq!(err.to_string(), "Value with dimension kg is not a number");
    }

    #[test]
    fn test_trait_comparisons() {
        let a = DynDim::new(2.0, speed());
        let b = DynDim::new(3.0, speed());
        assert!(a.try_lt(&b).unwrap());
        assert!(a.try_le(&a).unwrap());
        assert!(b.try_gt(&a).unwrap());
        assert!(b.try_ge(&b).unwrap());
        assert!(a.try_ne(&b).unwrap());
        assert!(!a.try_eq(&b).unwrap());

        let c = DynDim::new(2.0, Dim::LENGTH);
        assert!(matches!(a.try_lt(&c), Err(DimValError::DimensionMismatch { op: "compare", .. })));
    }

    #[test]
    fn test_nan_is_unordered() {
        let a = DynDim::new(f64::NAN, Dim::MASS);
        let b = DynDim::new(1.0, Dim::MASS);
        assert_eq!(a.try_cmp(&b).unwrap(), None);
        assert!(!a.try_lt(&b).unwrap());
        assert!(!a.try_ge(&b).unwrap());
        assert!(a.try_ne(&b).unwrap());
    }

    #[test]
    fn test_to_number() {
        assert_eq!(DynDim::dimensionless(4.5).to_number(), Ok(4.5));
        assert_eq!(DynDim::new(1.0, Dim::TIME).to_number(), Err(DimValError::NotANumber(Dim::TIME)));
        assert_eq!(DynDim::new(1.0, speed()).exp(Base::Time), Rational::new(-1, 1).unwrap());
    }
}
