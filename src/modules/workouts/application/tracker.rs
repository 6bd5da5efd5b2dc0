use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::modules::workouts::application::errors::ApplicationError;
use crate::modules::workouts::core::journal::WorkoutJournal;
use crate::modules::workouts::core::preset::Preset;
use crate::modules::workouts::core::workout::{NewWorkout, WorkoutEntry};
use crate::shared::infrastructure::workout_store::WorkoutStore;

/// Serves every workout operation against one journal.
///
/// The journal sits behind a single lock that is held across the store call,
/// so the store is written before memory and a failed write changes nothing.
pub struct WorkoutTracker {
    journal: Mutex<WorkoutJournal>,
    store: Arc<dyn WorkoutStore>,
}

impl WorkoutTracker {
    pub fn new(journal: WorkoutJournal, store: Arc<dyn WorkoutStore>) -> Self {
        Self {
            journal: Mutex::new(journal),
            store,
        }
    }

    /// Rebuilds the journal from what the store already holds.
    pub async fn open(store: Arc<dyn WorkoutStore>) -> Result<Self, ApplicationError> {
        let stored = store.load_all().await?;
        let last_id = store.last_id().await?;
        info!(workouts = stored.len(), last_id, "restored workout log");
        Ok(Self::new(WorkoutJournal::new().restore(stored, last_id), store))
    }

    pub async fn log_workout(&self, workout: NewWorkout) -> Result<WorkoutEntry, ApplicationError> {
        let mut journal = self.journal.lock().await;
        let entry = journal.prepare(workout);
        self.store.insert(&entry).await.inspect_err(|e| {
            warn!(id = entry.id, error = %e, "failed to store workout");
        })?;
        if journal.record(entry.clone()) {
            info!(exercise = %entry.exercise, "added new exercise");
        }
        debug!(id = entry.id, exercise = %entry.exercise, "workout logged");
        Ok(entry)
    }

    pub async fn add_exercise(&self, name: String) {
        debug!(exercise = %name, "exercise added to catalog");
        self.journal.lock().await.add_exercise(name);
    }

    pub async fn workouts(&self) -> Vec<WorkoutEntry> {
        self.journal.lock().await.workouts().to_vec()
    }

    pub async fn exercises(&self) -> Vec<String> {
        self.journal.lock().await.exercises().to_vec()
    }

    pub async fn preset(&self, exercise: &str) -> Preset {
        self.journal.lock().await.preset(exercise)
    }

    pub async fn delete_workout(&self, id: i64) -> Result<(), ApplicationError> {
        let mut journal = self.journal.lock().await;
        if !journal.contains(id) {
            return Err(ApplicationError::NotFound(id));
        }
        self.store.delete(&[id]).await?;
        journal.remove(id);
        info!(id, "workout deleted");
        Ok(())
    }

    /// Deletes every workout done on `date` (`YYYY-MM-DD`) and returns how many went.
    pub async fn delete_workouts_by_date(&self, date: &str) -> Result<usize, ApplicationError> {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| ApplicationError::InvalidDate(date.to_string()))?;

        let mut journal = self.journal.lock().await;
        let ids = journal.ids_on(day);
        if ids.is_empty() {
            return Ok(0);
        }
        self.store.delete(&ids).await?;
        let removed = journal.remove_on(day).len();
        info!(%day, removed, "workouts deleted");
        Ok(removed)
    }
}
