//! Unit constants in double precision
//!
//! Every unit is a value of its kind expressed in SI base units, so a
//! quantity is written as a magnitude times a unit: `3.0 * KM`.

use std::collections::HashMap;

use log::trace;
use once_cell::sync::Lazy;

use crate::dimval::DynDim;
use crate::kinds::{Charge, Current, Energy, Force, Frequency, Length, Mass, Temperature, Time, Volume};

// Base units
/// One meter.
pub const M: Length = Length::from_value(1.0);
/// One kilogram.
pub const KG: Mass = Mass::from_value(1.0);
/// One second.
pub const S: Time = Time::from_value(1.0);
/// One coulomb.
pub const COULOMB: Charge = Charge::from_value(1.0);
/// One kelvin.
pub const KELVIN: Temperature = Temperature::from_value(1.0);

// Length
/// One kilometer.
pub const KM: Length = Length::from_value(1.0e3);
/// One centimeter.
pub const CM: Length = Length::from_value(1.0e-2);
/// One millimeter.
pub const MM: Length = Length::from_value(1.0e-3);
/// One micrometer.
pub const MICRON: Length = Length::from_value(1.0e-6);
/// One nanometer.
pub const NM: Length = Length::from_value(1.0e-9);
/// One picometer.
pub const PM: Length = Length::from_value(1.0e-12);
/// One femtometer.
pub const FM: Length = Length::from_value(1.0e-15);
/// One international foot.
pub const FT: Length = Length::from_value(0.3048);
/// One international yard.
pub const YD: Length = Length::from_value(0.9144);
/// One statute mile.
pub const MI: Length = Length::from_value(1609.344);

// Mass
/// One gram.
pub const G: Mass = Mass::from_value(1.0e-3);
/// One milligram.
pub const MG: Mass = Mass::from_value(1.0e-6);
/// One microgram.
pub const MICROGRAM: Mass = Mass::from_value(1.0e-9);
/// One nanogram.
pub const NG: Mass = Mass::from_value(1.0e-12);
/// One picogram.
pub const PG: Mass = Mass::from_value(1.0e-15);

// Time
/// One millisecond.
pub const MS: Time = Time::from_value(1.0e-3);
/// One microsecond.
pub const MICROSECOND: Time = Time::from_value(1.0e-6);
/// One nanosecond.
pub const NS: Time = Time::from_value(1.0e-9);
/// One picosecond.
pub const PS: Time = Time::from_value(1.0e-12);
/// One femtosecond.
pub const FS: Time = Time::from_value(1.0e-15);
/// One minute.
pub const MINUTE: Time = Time::from_value(60.0);
/// One hour.
pub const HOUR: Time = Time::from_value(3600.0);

// Volume and frequency
/// One liter.
pub const LITER: Volume = Volume::from_value(1.0e-3);
/// One hertz.
pub const HERTZ: Frequency = Frequency::from_value(1.0);

// Temperature
/// One millikelvin.
pub const MILLIKELVIN: Temperature = Temperature::from_value(1.0e-3);

// Force: kg m s^-2
/// One newton.
pub const NEWTON: Force = Force::from_value(1.0);
/// One dyne.
pub const DYNE: Force = Force::from_value(1.0e-5);

// Energy: kg m^2 s^-2
/// One joule.
pub const JOULE: Energy = Energy::from_value(1.0);
/// One millijoule.
pub const MILLIJOULE: Energy = Energy::from_value(1.0e-3);
/// One kilojoule.
pub const KILOJOULE: Energy = Energy::from_value(1.0e3);
/// One megajoule.
pub const MEGAJOULE: Energy = Energy::from_value(1.0e6);
/// One erg.
pub const ERG: Energy = Energy::from_value(1.0e-7);

// Current: C s^-1
/// One ampere.
pub const AMPERE: Current = Current::from_value(1.0);
/// One milliampere.
pub const MILLIAMPERE: Current = Current::from_value(1.0e-3);

/// A length in meters.
pub const fn meters(v: f64) -> Length {
    Length::from_value(v)
}

/// A mass in kilograms.
pub const fn kilograms(v: f64) -> Mass {
    Mass::from_value(v)
}

/// A time in seconds.
pub const fn seconds(v: f64) -> Time {
    Time::from_value(v)
}

/// A charge in coulombs.
pub const fn coulombs(v: f64) -> Charge {
    Charge::from_value(v)
}

/// A temperature in kelvins.
pub const fn kelvins(v: f64) -> Temperature {
    Temperature::from_value(v)
}

static SYMBOLS: Lazy<HashMap<&'static str, DynDim>> = Lazy::new(|| {
    let entries: [(&str, DynDim); 42] = [
        ("m", M.into()),
        ("km", KM.into()),
        ("cm", CM.into()),
        ("mm", MM.into()),
        ("um", MICRON.into()),
        ("μm", MICRON.into()),
        ("nm", NM.into()),
        ("pm", PM.into()),
        ("fm", FM.into()),
        ("ft", FT.into()),
        ("yd", YD.into()),
        ("mi", MI.into()),
        ("kg", KG.into()),
        ("g", G.into()),
        ("mg", MG.into()),
        ("ug", MICROGRAM.into()),
        ("μg", MICROGRAM.into()),
        ("ng", NG.into()),
        ("pg", PG.into()),
        ("s", S.into()),
        ("ms", MS.into()),
        ("us", MICROSECOND.into()),
        ("μs", MICROSECOND.into()),
        ("ns", NS.into()),
        ("ps", PS.into()),
        ("fs", FS.into()),
        ("C", COULOMB.into()),
        ("K", KELVIN.into()),
        ("mK", MILLIKELVIN.into()),
        ("N", NEWTON.into()),
        ("dyn", DYNE.into()),
        ("J", JOULE.into()),
        ("mJ", MILLIJOULE.into()),
        ("kJ", KILOJOULE.into()),
        ("MJ", MEGAJOULE.into()),
        ("erg", ERG.into()),
        ("A", AMPERE.into()),
        ("mA", MILLIAMPERE.into()),
        ("min", MINUTE.into()),
        ("h", HOUR.into()),
        ("L", LITER.into()),
        ("Hz", HERTZ.into()),
    ];
    entries.into_iter().collect()
});

/// Look up a single unit symbol such as `km` or `mJ`
///
/// Only bare symbols are recognized; expressions like `m/s` return `None`.
pub fn lookup(symbol: &str) -> Option<DynDim> {
    let unit = SYMBOLS.get(symbol).copied();
    if unit.is_none() {
        trace!("unknown unit symbol {symbol:?}");
    }
    unit
}

/// Every symbol [`lookup`] recognizes, in no particular order.
pub fn symbols() -> impl Iterator<Item = &'static str> {
    SYMBOLS.keys().copied()
}
