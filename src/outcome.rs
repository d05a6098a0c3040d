use std::fmt;

use serde::{Deserialize, Serialize};

// Every operation on a vehicle reports back through one of these variants.
// Guard failures (engine off, short tank, bad amounts) are ordinary variants
// and never touch state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    EngineStarted { make: String, model: String },
    EngineAlreadyRunning { make: String, model: String },
    EngineStopped { make: String, model: String },
    EngineAlreadyOff { make: String, model: String },
    EngineOff,
    InvalidDistance { distance: f64 },
    Drove { distance: f64, mileage: f64 },
    DroveWithFuel {
        distance: f64,
        mileage: f64,
        fuel_used: f64,
        fuel_level: f64,
    },
    FuelConsumed { fuel_used: f64, fuel_level: f64 },
    NotEnoughFuel { needed: f64, available: f64 },
    Refueled { fuel_level: f64 },
    InvalidFuelAmount { amount: f64 },
    NoFuelTank,
    TurboActivated { max_speed: u32 },
    NoTurbo,
    RaceModeEngaged { horsepower: u32 },
    RaceModeEngineOff,
    NotASportsCar,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EngineStarted { make, model } => {
                write!(f, "{make} {model} engine started!")
            }
            Self::EngineAlreadyRunning { make, model } => {
                write!(f, "{make} {model} engine is already running!")
            }
            Self::EngineStopped { make, model } => {
                write!(f, "{make} {model} engine stopped!")
            }
            Self::EngineAlreadyOff { make, model } => {
                write!(f, "{make} {model} engine is already off!")
            }
            Self::EngineOff => write!(f, "Start the engine first!"),
            Self::InvalidDistance { distance } => {
                write!(f, "Cannot drive {distance} miles!")
            }
            Self::Drove { distance, mileage } => {
                write!(f, "Driving {distance} miles. Total mileage: {mileage} miles")
            }
            Self::DroveWithFuel {
                distance,
                mileage,
                fuel_used,
                fuel_level,
            } => {
                writeln!(f, "Driving {distance} miles. Total mileage: {mileage} miles")?;
                write!(f, "Fuel consumed: {fuel_used:.1}%. Remaining: {fuel_level:.1}%")
            }
            Self::FuelConsumed {
                fuel_used,
                fuel_level,
            } => {
                write!(f, "Fuel consumed: {fuel_used:.1}%. Remaining: {fuel_level:.1}%")
            }
            Self::NotEnoughFuel { needed, available } => {
                write!(
                    f,
                    "Not enough fuel! Need {needed:.1}% but only have {available:.1}%"
                )
            }
            Self::Refueled { fuel_level } => {
                write!(f, "Refueled! Fuel level: {fuel_level}%")
            }
            Self::InvalidFuelAmount { .. } => write!(f, "Invalid fuel amount!"),
            Self::NoFuelTank => write!(f, "No fuel tank on this vehicle!"),
            Self::TurboActivated { max_speed } => {
                write!(f, "Turbo activated! Max speed increased to {max_speed} mph!")
            }
            Self::NoTurbo => write!(f, "No turbo available on this model"),
            Self::RaceModeEngaged { horsepower } => {
                write!(f, "Race mode engaged! {horsepower}HP ready to dominate!")
            }
            Self::RaceModeEngineOff => write!(f, "Start the engine to activate race mode!"),
            Self::NotASportsCar => write!(f, "Race mode is for sports cars only!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drive_confirmation_carries_the_new_total() {
        let outcome = Outcome::Drove {
            distance: 50.0,
            mileage: 50.0,
        };
        assert_eq!(
            outcome.to_string(),
            "Driving 50 miles. Total mileage: 50 miles"
        );
    }

    #[test]
    fn fuel_figures_print_with_one_decimal() {
        let outcome = Outcome::FuelConsumed {
            fuel_used: 2.5,
            fuel_level: 97.5,
        };
        assert_eq!(outcome.to_string(), "Fuel consumed: 2.5%. Remaining: 97.5%");

        let outcome = Outcome::NotEnoughFuel {
            needed: 5.0,
            available: 0.5,
        };
        assert_eq!(
            outcome.to_string(),
            "Not enough fuel! Need 5.0% but only have 0.5%"
        );
    }

    #[test]
    fn fuel_checked_drive_renders_both_lines() {
        let outcome = Outcome::DroveWithFuel {
            distance: 100.0,
            mileage: 100.0,
            fuel_used: 5.0,
            fuel_level: 95.0,
        };
        assert_eq!(
            outcome.to_string(),
            "Driving 100 miles. Total mileage: 100 miles\n\
             Fuel consumed: 5.0%. Remaining: 95.0%"
        );
    }

    #[test]
    fn refuel_level_prints_unformatted() {
        let outcome = Outcome::Refueled { fuel_level: 100.0 };
        assert_eq!(outcome.to_string(), "Refueled! Fuel level: 100%");
    }

    #[test]
    fn engine_messages_name_the_vehicle() {
        let outcome = Outcome::EngineStarted {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
        };
        assert_eq!(outcome.to_string(), "Toyota Camry engine started!");
    }
}
