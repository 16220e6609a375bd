//! Unit-safe arithmetic over physical quantities
//!
//! This crate pairs floating-point magnitudes with dimension vectors from
//! `units-math`. Adding a length to a mass is rejected, while fractional
//! exponents such as the square root of a frequency stay exact.
//!
//! ```
//! use units_core::units::{KM, MS};
//!
//! let speed = ((3.0 * KM) / (4.0 * MS)).unwrap();
//! assert_eq!(speed.to_string(), "750000 m s^-1");
//! ```

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod dimval;
pub mod dyndim;
pub mod formatting;
pub mod kinds;
pub mod statdim;
pub mod units;

// Re-export main types
pub use dimval::{exponent, DimValError, DimValResult, Dimensioned, Scalar};
pub use dyndim::DynDim;
pub use formatting::{apply_width_formatting, format_dim, format_dimval, FormatConfig, FormatFlags};
pub use statdim::{Number, StatDim};

// Re-export for convenience
pub use units_math::{Base, Dim, DimError, Rational, RationalError};
