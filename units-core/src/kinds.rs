//! Named quantity kinds
//!
//! Each kind is a [`StatDim`] bound to the dimension codeword of the same name.
//! Exponents are listed in codeword order: time, length, mass, charge,
//! temperature.

use units_math::Dim;

use crate::dimval::StatDim;

const fn word(exps: [i64; 5]) -> u64 {
    match Dim::from_integers(exps) {
        Ok(dim) => dim.encode(),
        Err(_) => panic!("kind exponent out of range"),
    }
}

/// Codeword of a dimensionless number.
pub const NUMBER: u64 = Dim::NUL.encode();
/// Codeword of `s`.
pub const TIME: u64 = Dim::TIME.encode();
/// Codeword of `m`.
pub const LENGTH: u64 = Dim::LENGTH.encode();
/// Codeword of `kg`.
pub const MASS: u64 = Dim::MASS.encode();
/// Codeword of `C`.
pub const CHARGE: u64 = Dim::CHARGE.encode();
/// Codeword of `K`.
pub const TEMPERATURE: u64 = Dim::TEMPERATURE.encode();

/// Codeword of `s^-1`.
pub const FREQUENCY: u64 = word([-1, 0, 0, 0, 0]);
/// Codeword of `m s^-1`.
pub const SPEED: u64 = word([-1, 1, 0, 0, 0]);
/// Codeword of `m s^-2`.
pub const ACCELERATION: u64 = word([-2, 1, 0, 0, 0]);
/// Codeword of `m kg s^-2`.
pub const FORCE: u64 = word([-2, 1, 1, 0, 0]);
/// Codeword of `m^2 kg s^-2`.
pub const ENERGY: u64 = word([-2, 2, 1, 0, 0]);
/// Codeword of `m^2 kg s^-3`.
pub const POWER: u64 = word([-3, 2, 1, 0, 0]);
/// Codeword of `s^-1 C`.
pub const CURRENT: u64 = word([-1, 0, 0, 1, 0]);
/// Codeword of `m kg s^-1`.
pub const MOMENTUM: u64 = word([-1, 1, 1, 0, 0]);
/// Codeword of `m^2`.
pub const AREA: u64 = word([0, 2, 0, 0, 0]);
/// Codeword of `m^3`.
pub const VOLUME: u64 = word([0, 3, 0, 0, 0]);
/// Codeword of `m^-1 kg s^-2`.
pub const PRESSURE: u64 = word([-2, -1, 1, 0, 0]);
/// Codeword of `m^2 kg s^-2 C^-1`.
pub const VOLTAGE: u64 = word([-2, 2, 1, -1, 0]);

pub use crate::statdim::Number;

/// A time value.
pub type Time<T = f64> = StatDim<TIME, T>;
/// A length value.
pub type Length<T = f64> = StatDim<LENGTH, T>;
/// A mass value.
pub type Mass<T = f64> = StatDim<MASS, T>;
/// A charge value.
pub type Charge<T = f64> = StatDim<CHARGE, T>;
/// A temperature value.
pub type Temperature<T = f64> = StatDim<TEMPERATURE, T>;
/// A frequency value.
pub type Frequency<T = f64> = StatDim<FREQUENCY, T>;
/// A speed value.
pub type Speed<T = f64> = StatDim<SPEED, T>;
/// A acceleration value.
pub type Acceleration<T = f64> = StatDim<ACCELERATION, T>;
/// A force value.
pub type Force<T = f64> = StatDim<FORCE, T>;
/// A energy value.
pub type Energy<T = f64> = StatDim<ENERGY, T>;
/// A power value.
pub type Power<T = f64> = StatDim<POWER, T>;
/// A current value.
pub type Current<T = f64> = StatDim<CURRENT, T>;
/// A momentum value.
pub type Momentum<T = f64> = StatDim<MOMENTUM, T>;
/// A area value.
pub type Area<T = f64> = StatDim<AREA, T>;
/// A volume value.
pub type Volume<T = f64> = StatDim<VOLUME, T>;
/// A pressure value.
pub type Pressure<T = f64> = StatDim<PRESSURE, T>;
/// A voltage value.
pub type Voltage<T = f64> = StatDim<VOLTAGE, T>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimval::Dimensioned;

    #[test]
    fn test_kind_dimensions_print() {
        assert_eq!(Speed::<f64>::DIM.to_string(), " m s^-1");
        assert_eq!(Force::<f64>::DIM.to_string(), " m kg s^-2");
        assert_eq!(Pressure::<f64>::DIM.to_string(), " m^-1 kg s^-2");
        assert_eq!(Voltage::<f64>::DIM.to_string(), " m^2 kg s^-2 C^-1");
        assert_eq!(Current::<f64>::DIM.to_string(), " s^-1 C");
        assert_eq!(Frequency::<f64>::DIM.to_string(), " s^-1");
        assert!(Number::<f64>::DIM.is_dimensionless());
    }

    #[test]
    fn test_derived_kinds_agree_with_products() {
        let m = Mass::from_value(2.0);
        let a = Acceleration::from_value(3.0);
        let f: Force = (m * a).unwrap().try_into().unwrap();
        assert_eq!(f.value(), 6.0);

        let d = Length::from_value(2.0);
        let e: Energy = (f * d).unwrap().try_into().unwrap();
        assert_eq!(e.value(), 12.0);

        let t = Time::from_value(4.0);
        let p: Power = (e / t).unwrap().try_into().unwrap();
        assert_eq!(p.value(), 3.0);

        let q = Charge::from_value(3.0);
        let v: Voltage = (e / q).unwrap().try_into().unwrap();
        assert_eq!(v.value(), 4.0);
    }

    #[test]
    fn test_area_and_volume() {
        let side = Length::from_value(3.0);
        let area: Area = (side * side).unwrap().try_into().unwrap();
        let volume: Volume = (area * side).unwrap().try_into().unwrap();
        assert_eq!(volume.value(), 27.0);
        let back: Length = volume.powi_ratio(1, 3).unwrap().try_into().unwrap();
        assert!((back.value() - 3.0).abs() < 1e-12);
    }
}
