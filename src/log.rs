use serde::{Deserialize, Serialize};

use crate::vehicle::Vehicle;

// One demo step: the operation that ran, the line it printed, and the
// vehicle state right after it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub vehicle: usize,
    pub op: String,
    pub message: String,
    pub state: Vehicle,
}

impl Entry {
    pub fn record(vehicle: usize, op: &str, message: String, state: &Vehicle) -> Self {
        Self {
            vehicle,
            op: op.to_string(),
            message,
            state: state.clone(),
        }
    }
}
