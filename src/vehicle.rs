use serde::{Deserialize, Serialize};
use std::fmt::Write;
use thiserror::Error;

use crate::outcome::Outcome;

pub const FUEL_CAPACITY: f64 = 100.0; // percentage
pub const FUEL_PER_MILE: f64 = 0.05; // percentage points per mile

const BASE_MAX_SPEED: u32 = 120; // mph
const SPORTS_MAX_SPEED: u32 = 200;
const TURBO_MAX_SPEED: u32 = 250;

const DEFAULT_DOORS: u8 = 4;
const SPORTS_DOORS: u8 = 2;
const SPORTS_FUEL_TYPE: &str = "Premium";

const FIRST_MODEL_YEAR: u16 = 1886;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    #[error("model year {0} is before 1886")]
    YearOutOfRange(u16),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    make: String,
    model: String,
    year: u16,
    color: String,
    mileage: f64,
    running: bool,
    max_speed: u32, // mph
    kind: Kind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Kind {
    Base,
    Car(Trim),
    Sports {
        trim: Trim,
        horsepower: u32,
        turbo: bool,
    },
}

// Car-grade attributes shared by Car and Sports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trim {
    pub(crate) fuel_type: String,
    pub(crate) doors: u8,
    pub(crate) fuel_level: f64, // percentage
}

impl Vehicle {
    pub fn new(make: &str, model: &str, year: u16, color: &str) -> Result<Self, BuildError> {
        Self::build(make, model, year, color, BASE_MAX_SPEED, Kind::Base)
    }

    pub fn car(
        make: &str,
        model: &str,
        year: u16,
        color: &str,
        fuel_type: &str,
    ) -> Result<Self, BuildError> {
        Self::car_with_doors(make, model, year, color, fuel_type, DEFAULT_DOORS)
    }

    pub fn car_with_doors(
        make: &str,
        model: &str,
        year: u16,
        color: &str,
        fuel_type: &str,
        doors: u8,
    ) -> Result<Self, BuildError> {
        if fuel_type.trim().is_empty() {
            return Err(BuildError::EmptyField("fuel type"));
        }
        let trim = Trim {
            fuel_type: fuel_type.to_string(),
            doors,
            fuel_level: FUEL_CAPACITY,
        };
        Self::build(make, model, year, color, BASE_MAX_SPEED, Kind::Car(trim))
    }

    // Doors and fuel type are fixed for sports cars and cannot be passed in.
    pub fn sports(
        make: &str,
        model: &str,
        year: u16,
        color: &str,
        horsepower: u32,
        turbo: bool,
    ) -> Result<Self, BuildError> {
        let trim = Trim {
            fuel_type: SPORTS_FUEL_TYPE.to_string(),
            doors: SPORTS_DOORS,
            fuel_level: FUEL_CAPACITY,
        };
        let kind = Kind::Sports {
            trim,
            horsepower,
            turbo,
        };
        Self::build(make, model, year, color, SPORTS_MAX_SPEED, kind)
    }

    fn build(
        make: &str,
        model: &str,
        year: u16,
        color: &str,
        max_speed: u32,
        kind: Kind,
    ) -> Result<Self, BuildError> {
        for (field, value) in [("make", make), ("model", model), ("color", color)] {
            if value.trim().is_empty() {
                return Err(BuildError::EmptyField(field));
            }
        }
        if year < FIRST_MODEL_YEAR {
            return Err(BuildError::YearOutOfRange(year));
        }

        Ok(Self {
            make: make.to_string(),
            model: model.to_string(),
            year,
            color: color.to_string(),
            mileage: 0.0,
            running: false,
            max_speed,
            kind,
        })
    }

    pub fn start_engine(&mut self) -> Outcome {
        if self.running {
            Outcome::EngineAlreadyRunning {
                make: self.make.clone(),
                model: self.model.clone(),
            }
        } else {
            self.running = true;
            Outcome::EngineStarted {
                make: self.make.clone(),
                model: self.model.clone(),
            }
        }
    }

    pub fn stop_engine(&mut self) -> Outcome {
        if self.running {
            self.running = false;
            Outcome::EngineStopped {
                make: self.make.clone(),
                model: self.model.clone(),
            }
        } else {
            Outcome::EngineAlreadyOff {
                make: self.make.clone(),
                model: self.model.clone(),
            }
        }
    }

    pub fn drive(&mut self, distance: f64) -> Outcome {
        if distance <= 0.0 {
            return Outcome::InvalidDistance { distance };
        }
        if !self.running {
            return Outcome::EngineOff;
        }

        match &mut self.kind {
            Kind::Base => {
                self.mileage += distance;
                Outcome::Drove {
                    distance,
                    mileage: self.mileage,
                }
            }
            Kind::Car(trim) | Kind::Sports { trim, .. } => {
                let fuel_needed = distance * FUEL_PER_MILE;
                if fuel_needed > trim.fuel_level {
                    return Outcome::NotEnoughFuel {
                        needed: fuel_needed,
                        available: trim.fuel_level,
                    };
                }

                // Fuel comes off exactly once per drive.
                self.mileage += distance;
                trim.fuel_level -= fuel_needed;
                Outcome::DroveWithFuel {
                    distance,
                    mileage: self.mileage,
                    fuel_used: fuel_needed,
                    fuel_level: trim.fuel_level,
                }
            }
        }
    }

    pub fn refuel(&mut self, amount: f64) -> Outcome {
        let Some(trim) = self.trim_mut() else {
            return Outcome::NoFuelTank;
        };
        if amount <= 0.0 {
            return Outcome::InvalidFuelAmount { amount };
        }
        trim.fuel_level = (trim.fuel_level + amount).min(FUEL_CAPACITY);
        Outcome::Refueled {
            fuel_level: trim.fuel_level,
        }
    }

    pub fn refuel_full(&mut self) -> Outcome {
        self.refuel(FUEL_CAPACITY)
    }

    pub fn consume_fuel(&mut self, distance: f64) -> Outcome {
        if distance <= 0.0 {
            return Outcome::InvalidDistance { distance };
        }
        let Some(trim) = self.trim_mut() else {
            return Outcome::NoFuelTank;
        };
        let fuel_used = distance * FUEL_PER_MILE;
        if fuel_used > trim.fuel_level {
            return Outcome::NotEnoughFuel {
                needed: fuel_used,
                available: trim.fuel_level,
            };
        }
        trim.fuel_level -= fuel_used;
        Outcome::FuelConsumed {
            fuel_used,
            fuel_level: trim.fuel_level,
        }
    }

    pub fn activate_turbo(&mut self) -> Outcome {
        if matches!(self.kind, Kind::Sports { turbo: true, .. }) {
            self.max_speed = TURBO_MAX_SPEED;
            Outcome::TurboActivated {
                max_speed: self.max_speed,
            }
        } else {
            Outcome::NoTurbo
        }
    }

    pub fn race_mode(&self) -> Outcome {
        match self.kind {
            Kind::Sports { horsepower, .. } => {
                if self.running {
                    Outcome::RaceModeEngaged { horsepower }
                } else {
                    Outcome::RaceModeEngineOff
                }
            }
            _ => Outcome::NotASportsCar,
        }
    }

    pub fn honk(&self) -> &'static str {
        match self.kind {
            Kind::Sports { .. } => "Sports car horn: VROOM VROOM!",
            _ => "Beep beep!",
        }
    }

    pub fn summary(&self) -> String {
        let mut info = format!(
            "{} {} {} - Color: {} - Mileage: {} miles",
            self.year, self.make, self.model, self.color, self.mileage
        );
        if let Some(trim) = self.trim() {
            let _ = write!(
                info,
                "\nFuel Type: {} - Doors: {} - Fuel Level: {}%",
                trim.fuel_type, trim.doors, trim.fuel_level
            );
        }
        info
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn max_speed(&self) -> u32 {
        self.max_speed
    }

    pub fn kind(&self) -> &Kind {
        &self.kind
    }

    pub fn fuel_type(&self) -> Option<&str> {
        self.trim().map(|trim| trim.fuel_type.as_str())
    }

    pub fn doors(&self) -> Option<u8> {
        self.trim().map(|trim| trim.doors)
    }

    pub fn fuel_level(&self) -> Option<f64> {
        self.trim().map(|trim| trim.fuel_level)
    }

    pub fn horsepower(&self) -> Option<u32> {
        match self.kind {
            Kind::Sports { horsepower, .. } => Some(horsepower),
            _ => None,
        }
    }

    pub fn has_turbo(&self) -> bool {
        matches!(self.kind, Kind::Sports { turbo: true, .. })
    }

    fn trim(&self) -> Option<&Trim> {
        match &self.kind {
            Kind::Base => None,
            Kind::Car(trim) | Kind::Sports { trim, .. } => Some(trim),
        }
    }

    fn trim_mut(&mut self) -> Option<&mut Trim> {
        match &mut self.kind {
            Kind::Base => None,
            Kind::Car(trim) | Kind::Sports { trim, .. } => Some(trim),
        }
    }
}


#[cfg(test)]
mod props {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug, Clone)]
    enum Op {
        Start,
        Stop,
        Drive(f64),
        Refuel(f64),
        Consume(f64),
    }

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Start),
            Just(Op::Stop),
            (0.1f64..400.0).prop_map(Op::Drive),
            (-10.0f64..150.0).prop_map(Op::Refuel),
            (0.1f64..400.0).prop_map(Op::Consume),
        ]
    }

    proptest! {
        #[test]
        fn mileage_tracks_successful_drives(ops in proptest::collection::vec(arb_op(), 0..64)) {
            let mut car = Vehicle::car("Toyota", "Camry", 2023, "Blue", "Hybrid").unwrap();
            let mut driven = 0.0f64;

            for op in ops {
                match op {
                    Op::Start => {
                        car.start_engine();
                    }
                    Op::Stop => {
                        car.stop_engine();
                    }
                    Op::Drive(distance) => {
                        if let Outcome::DroveWithFuel { .. } = car.drive(distance) {
                            driven += distance;
                        }
                    }
                    Op::Refuel(amount) => {
                        car.refuel(amount);
                    }
                    Op::Consume(distance) => {
                        car.consume_fuel(distance);
                    }
                }

                let level = car.fuel_level().unwrap();
                prop_assert!((0.0..=100.0).contains(&level));
            }

            prop_assert!((car.mileage() - driven).abs() < 1e-6);
        }
    }
}
