//! Fixed-precision rational exponents and dimension vectors
//!
//! This crate provides the numeric layer of unit-safe arithmetic: a compact,
//! overflow-checked rational number stored in one byte, and a dimension
//! vector holding one rational exponent per base quantity in a single `u64`.

#![warn(clippy::all)]
#![warn(missing_docs)]

pub mod base;
pub mod bits;
pub mod common_denom;
pub mod dim;
pub mod rational;

// Re-export main types
pub use base::Base;
pub use common_denom::{gcd, CommonDenom};
pub use dim::{Dim, DimError, DimResult};
pub use rational::{normalize, Rational, RationalError, RationalResult};

// Re-export for convenience
pub use num_rational::Rational64;
