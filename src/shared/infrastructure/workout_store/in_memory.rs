// In memory implementation of the WorkoutStore port.
//
// Purpose
// - Stand in for the database when no DATABASE_URL is configured, and in tests.

use crate::modules::workouts::core::workout::WorkoutEntry;
use crate::shared::infrastructure::workout_store::{StoreError, WorkoutStore};
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryWorkoutStore {
    rows: RwLock<BTreeMap<i64, WorkoutEntry>>,
    last_id: RwLock<i64>,
    is_offline: bool,
}

impl InMemoryWorkoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Workout store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl WorkoutStore for InMemoryWorkoutStore {
    async fn insert(&self, entry: &WorkoutEntry) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        if rows.contains_key(&entry.id) {
            return Err(StoreError::Backend(format!(
                "workout {} already stored",
                entry.id
            )));
        }
        rows.insert(entry.id, entry.clone());
        let mut last_id = self.last_id.write().await;
        *last_id = (*last_id).max(entry.id);
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<WorkoutEntry>, StoreError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn delete(&self, ids: &[i64]) -> Result<(), StoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.write().await;
        for id in ids {
            rows.remove(id);
        }
        Ok(())
    }

    async fn last_id(&self) -> Result<i64, StoreError> {
        self.ensure_online()?;
        Ok(*self.last_id.read().await)
    }
}
