//! Basic usage example for units-core
//!
//! Run with `RUST_LOG=debug` to see rejected dimension checks.

use log::info;
use units_core::kinds::{Length, Speed};
use units_core::units::{self, COULOMB, JOULE, KM, M, MS, S};
use units_core::{DimValResult, Dimensioned, DynDim};

fn main() -> DimValResult<()> {
    env_logger::init();

    // Distance over time gives a speed
    let distance: Length = 3.0 * KM;
    let elapsed = 4.0 * MS;
    let speed: Speed = (distance / elapsed)?.try_into()?;
    println!("speed: {speed}");

    // Fractional exponents stay exact
    let odd = (S.inverse()?.sqrt()? * M)?;
    println!("sqrt(1/s) * m = {odd}");

    // A voltage is not a bare number
    let voltage = ((3.0 * JOULE) / (2.0 * COULOMB))?;
    match voltage.to_number() {
        Ok(n) => println!("number: {n}"),
        Err(e) => println!("{voltage:.2} -> {e}"),
    }

    // Adding a length to a time fails
    if let Err(e) = distance + DynDim::from(elapsed) {
        println!("rejected: {e}");
    }

    if let Some(mile) = units::lookup("mi") {
        info!("looked up mile: {mile}");
        println!("one mile is {:.1}", mile);
    }

    Ok(())
}
