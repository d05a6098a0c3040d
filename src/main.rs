#![warn(clippy::all, clippy::pedantic, clippy::cargo, clippy::nursery)]

mod demo;
mod log;
mod outcome;
mod vehicle;

use color_eyre::Result;

use crate::demo::Demo;
use crate::vehicle::Vehicle;

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut demo = Demo::new();
    demo.register(Vehicle::car("Toyota", "Camry", 2023, "Blue", "Hybrid")?);
    demo.register(Vehicle::sports("Ferrari", "488", 2024, "Red", 660, true)?);

    demo.run();
    demo.export_log()?;

    Ok(())
}
