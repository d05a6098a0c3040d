use std::fs::{self, File};
use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use color_eyre::Result;

use crate::log::Entry;
use crate::vehicle::{Kind, Vehicle};

const BANNER_WIDTH: usize = 40;
const DEMO_DISTANCE: f64 = 50.0; // miles
const DEMO_REFUEL_AMOUNT: f64 = 30.0; // percentage points

pub struct Demo {
    vehicles: Vec<Vehicle>,
    entries: Vec<Entry>,
}

impl Demo {
    pub fn new() -> Self {
        Self {
            vehicles: Vec::new(),
            entries: Vec::new(),
        }
    }

    pub fn register(&mut self, vehicle: Vehicle) {
        self.vehicles.push(vehicle);
    }

    pub fn run(&mut self) {
        println!("VEHICLE MANAGEMENT SYSTEM");
        println!("{}", "=".repeat(BANNER_WIDTH));

        for index in 0..self.vehicles.len() {
            self.exercise(index);
        }

        println!("\n{}", "=".repeat(BANNER_WIDTH));
        println!("POLYMORPHISM DEMONSTRATION:");
        println!("{}", "=".repeat(BANNER_WIDTH));

        for index in 0..self.vehicles.len() {
            self.showcase(index);
        }
    }

    // The fixed per-vehicle sequence: info, start, drive, honk, the
    // variant-specific extras, stop.
    fn exercise(&mut self, index: usize) {
        println!("\n--- Vehicle {} ---", index + 1);

        let message = self.vehicles[index].summary();
        self.step(index, "summary", message);

        println!(
            "\nTesting {} {}:",
            self.vehicles[index].make(),
            self.vehicles[index].model()
        );

        let message = self.vehicles[index].start_engine().to_string();
        self.step(index, "start_engine", message);

        let message = self.vehicles[index].drive(DEMO_DISTANCE).to_string();
        self.step(index, "drive", message);

        let message = self.vehicles[index].honk().to_string();
        self.step(index, "honk", message);

        if matches!(
            self.vehicles[index].kind(),
            Kind::Car(_) | Kind::Sports { .. }
        ) {
            let message = self.vehicles[index].refuel(DEMO_REFUEL_AMOUNT).to_string();
            self.step(index, "refuel", message);
        }

        if matches!(self.vehicles[index].kind(), Kind::Sports { .. }) {
            let message = self.vehicles[index].activate_turbo().to_string();
            self.step(index, "activate_turbo", message);

            let message = self.vehicles[index].race_mode().to_string();
            self.step(index, "race_mode", message);
        }

        let message = self.vehicles[index].stop_engine().to_string();
        self.step(index, "stop_engine", message);
    }

    // Second pass over every vehicle: honk and summary dispatch on the
    // variant, nothing mutates.
    fn showcase(&mut self, index: usize) {
        let honk = self.vehicles[index].honk().to_string();
        println!("\n{} honk: {}", self.vehicles[index].make(), honk);
        self.entries
            .push(Entry::record(index, "honk", honk, &self.vehicles[index]));

        let summary = self.vehicles[index].summary();
        println!("Display info:\n{summary}");
        self.entries
            .push(Entry::record(index, "summary", summary, &self.vehicles[index]));
    }

    fn step(&mut self, index: usize, op: &'static str, message: String) {
        println!("{message}");
        self.entries
            .push(Entry::record(index, op, message, &self.vehicles[index]));
    }

    pub fn export_log(&self) -> Result<()> {
        let json = serde_json::json!({ "entries": self.entries, "fleet": self.vehicles });

        let time_now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let filename = format!("logs/demo_{time_now}.json");

        fs::create_dir_all("logs")?;
        File::create(&filename)?.write_all(json.to_string().as_bytes())?;

        println!("\nDemo log written to {filename}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fleet() -> Demo {
        let mut demo = Demo::new();
        demo.register(Vehicle::car("Toyota", "Camry", 2023, "Blue", "Hybrid").unwrap());
        demo.register(Vehicle::sports("Ferrari", "488", 2024, "Red", 660, true).unwrap());
        demo
    }

    #[test]
    fn run_exercises_every_vehicle_and_logs_each_step() {
        let mut demo = fleet();
        demo.run();

        // Car: summary, start, drive, honk, refuel, stop. Sports adds turbo
        // and race mode. The showcase pass adds honk + summary per vehicle.
        assert_eq!(demo.entries.len(), 6 + 8 + 4);

        for vehicle in &demo.vehicles {
            assert!(!vehicle.is_running());
            assert_eq!(vehicle.mileage(), 50.0);
        }
    }

    #[test]
    fn run_leaves_the_sports_car_in_turbo_trim() {
        let mut demo = fleet();
        demo.run();

        let sports = &demo.vehicles[1];
        assert_eq!(sports.max_speed(), 250);
        assert_eq!(sports.doors(), Some(2));
        assert_eq!(sports.fuel_type(), Some("Premium"));
    }

    #[test]
    fn refuel_step_tops_the_tank_back_up() {
        let mut demo = fleet();
        demo.run();

        // drive(50) burns 2.5%, refuel(30) clamps back to 100.
        for vehicle in &demo.vehicles {
            assert_eq!(vehicle.fuel_level(), Some(100.0));
        }
    }

    #[test]
    fn log_entries_snapshot_state_after_each_step() {
        let mut demo = fleet();
        demo.run();

        let drive = demo
            .entries
            .iter()
            .find(|entry| entry.op == "drive")
            .unwrap();
        assert_eq!(drive.state.mileage(), 50.0);
        assert!(drive.state.is_running());
    }
}
