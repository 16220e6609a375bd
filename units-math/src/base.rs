//! The fixed set of base quantities a dimension is built from

use std::fmt;

use crate::bits::{NUM_BASES, WORD_BITS};

/// A base physical quantity
///
/// The discriminant is the position of the quantity's exponent inside a
/// dimension codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    /// Time, measured in seconds
    Time = 0,
    /// Length, measured in meters
    Length = 1,
    /// Mass, measured in kilograms
    Mass = 2,
    /// Electric charge, measured in coulombs
    Charge = 3,
    /// Thermodynamic temperature, measured in kelvins
    Temperature = 4,
}

impl Base {
    /// Every base in codeword order.
    pub const ALL: [Base; NUM_BASES] = [Base::Time, Base::Length, Base::Mass, Base::Charge, Base::Temperature];

    /// Order in which bases appear when a dimension is printed.
    pub const PRINT_ORDER: [Base; NUM_BASES] =
        [Base::Length, Base::Mass, Base::Time, Base::Charge, Base::Temperature];

    /// Position of this base in a dimension.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Bit offset of this base's field in a dimension codeword.
    pub const fn offset(self) -> u32 {
        self as u32 * WORD_BITS
    }

    /// Symbol of the SI unit for this base.
    pub const fn symbol(self) -> &'static str {
        match self {
            Base::Time => "s",
            Base::Length => "m",
            Base::Mass => "kg",
            Base::Charge => "C",
            Base::Temperature => "K",
        }
    }

    /// Lowercase name of the quantity.
    pub const fn name(self) -> &'static str {
        match self {
            Base::Time => "time",
            Base::Length => "length",
            Base::Mass => "mass",
            Base::Charge => "charge",
            Base::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeword_order() {
        for (i, base) in Base::ALL.iter().enumerate() {
            assert_eq!(base.index(), i);
            assert_eq!(base.offset(), 8 * i as u32);
        }
        assert_eq!(Base::Temperature.offset(), 32);
    }

    #[test]
    fn test_print_order_is_a_permutation() {
        let mut sorted = Base::PRINT_ORDER;
        sorted.sort();
        assert_eq!(sorted, Base::ALL);
        assert_eq!(Base::PRINT_ORDER[0], Base::Length);
    }

    #[test]
    fn test_symbols() {
        let symbols: Vec<_> = Base::PRINT_ORDER.iter().map(|b| b.symbol()).collect();
        assert_eq!(symbols, ["m", "kg", "s", "C", "K"]);
        assert_eq!(Base::Charge.to_string(), "charge");
    }
}
