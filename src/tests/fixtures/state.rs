use std::sync::Arc;

use crate::modules::workouts::application::tracker::WorkoutTracker;
use crate::modules::workouts::core::journal::WorkoutJournal;
use crate::shared::infrastructure::workout_store::in_memory::InMemoryWorkoutStore;
use crate::shell::state::AppState;

pub fn make_test_state() -> AppState {
    let store = Arc::new(InMemoryWorkoutStore::new());
    AppState {
        tracker: Arc::new(WorkoutTracker::new(WorkoutJournal::new(), store)),
    }
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryWorkoutStore::new();
    store.toggle_offline();
    AppState {
        tracker: Arc::new(WorkoutTracker::new(WorkoutJournal::new(), Arc::new(store))),
    }
}
