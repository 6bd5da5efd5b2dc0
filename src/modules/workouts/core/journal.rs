use chrono::NaiveDate;
use std::collections::HashMap;

use crate::modules::workouts::core::exercise_name::normalize_exercise_name;
use crate::modules::workouts::core::preset::Preset;
use crate::modules::workouts::core::workout::{NewWorkout, WorkoutEntry};

pub const DEFAULT_EXERCISES: [&str; 5] = ["Squat", "Deadlift", "Bench Press", "Pull-up", "Push-up"];

/// The exercise catalog, the workout log and the presets derived from it.
///
/// Ids are handed out from a counter that only moves forward, so an id is
/// never reused after its workout has been removed.
#[derive(Debug, Clone)]
pub struct WorkoutJournal {
    exercises: Vec<String>,
    workouts: Vec<WorkoutEntry>,
    presets: HashMap<String, Preset>,
    last_id: i64,
}

impl Default for WorkoutJournal {
    fn default() -> Self {
        Self::with_exercises(DEFAULT_EXERCISES)
    }
}

impl WorkoutJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exercises<I, S>(exercises: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exercises: exercises.into_iter().map(Into::into).collect(),
            workouts: Vec::new(),
            presets: HashMap::new(),
            last_id: 0,
        }
    }

    /// Replays stored entries, in id order, on top of this journal.
    ///
    /// `last_id` is the highest id ever handed out, which may belong to a
    /// deleted entry; numbering continues after it.
    pub fn restore(mut self, mut entries: Vec<WorkoutEntry>, last_id: i64) -> Self {
        entries.sort_by_key(|entry| entry.id);
        for entry in entries {
            self.record(entry);
        }
        self.last_id = self.last_id.max(last_id);
        self
    }

    pub fn next_id(&self) -> i64 {
        self.last_id + 1
    }

    /// Normalizes the exercise name and assigns the next id, without recording anything.
    pub fn prepare(&self, workout: NewWorkout) -> WorkoutEntry {
        let exercise = normalize_exercise_name(&workout.exercise);
        WorkoutEntry::new(self.next_id(), NewWorkout { exercise, ..workout })
    }

    /// Appends the entry and overwrites its exercise preset. Returns true when
    /// the exercise was new to the catalog.
    pub fn record(&mut self, entry: WorkoutEntry) -> bool {
        let is_new_exercise = !self.exercises.contains(&entry.exercise);
        if is_new_exercise {
            self.exercises.push(entry.exercise.clone());
        }
        self.last_id = self.last_id.max(entry.id);
        self.presets
            .insert(entry.exercise.clone(), Preset::from(&entry));
        self.workouts.push(entry);
        is_new_exercise
    }

    /// Appends to the catalog as is, duplicates included.
    pub fn add_exercise(&mut self, name: impl Into<String>) {
        self.exercises.push(name.into());
    }

    pub fn exercises(&self) -> &[String] {
        &self.exercises
    }

    pub fn workouts(&self) -> &[WorkoutEntry] {
        &self.workouts
    }

    /// Exact, case-sensitive lookup.
    pub fn preset(&self, exercise: &str) -> Preset {
        self.presets.get(exercise).copied().unwrap_or_default()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.workouts.iter().any(|entry| entry.id == id)
    }

    pub fn remove(&mut self, id: i64) -> Option<WorkoutEntry> {
        let position = self.workouts.iter().position(|entry| entry.id == id)?;
        Some(self.workouts.remove(position))
    }

    pub fn ids_on(&self, day: NaiveDate) -> Vec<i64> {
        self.workouts
            .iter()
            .filter(|entry| entry.day() == day)
            .map(|entry| entry.id)
            .collect()
    }

    pub fn remove_on(&mut self, day: NaiveDate) -> Vec<WorkoutEntry> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.workouts)
            .into_iter()
            .partition(|entry| entry.day() == day);
        self.workouts = kept;
        removed
    }
}
