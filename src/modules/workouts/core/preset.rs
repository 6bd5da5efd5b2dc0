use serde::{Deserialize, Serialize};

use crate::modules::workouts::core::workout::WorkoutEntry;

/// Last used sets, reps and weight for an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub sets: i64,
    pub reps: i64,
    pub weight: f64,
}

impl Default for Preset {
    fn default() -> Self {
        Self {
            sets: 1,
            reps: 1,
            weight: 0.1,
        }
    }
}

impl From<&WorkoutEntry> for Preset {
    fn from(entry: &WorkoutEntry) -> Self {
        Self {
            sets: entry.sets,
            reps: entry.reps,
            weight: entry.weight,
        }
    }
}
