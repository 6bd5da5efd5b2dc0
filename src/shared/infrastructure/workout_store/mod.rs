// Port for the table that mirrors the workout log.
//
// Responsibilities
// - Create, read back and delete workout rows.
// - Remember the highest id ever stored, deleted rows included.
//
// Boundaries
// - Catalog and presets are not stored; they are derived again from the rows on startup.

pub mod in_memory;
pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::workouts::core::workout::WorkoutEntry;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait WorkoutStore: Send + Sync {
    async fn insert(&self, entry: &WorkoutEntry) -> Result<(), StoreError>;
    async fn load_all(&self) -> Result<Vec<WorkoutEntry>, StoreError>;
    async fn delete(&self, ids: &[i64]) -> Result<(), StoreError>;
    /// Highest id ever inserted, 0 when nothing was.
    async fn last_id(&self) -> Result<i64, StoreError>;
}
