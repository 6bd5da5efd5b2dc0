// SQLite implementation of the WorkoutStore port.
//
// Responsibilities
// - Create the `workouts` table when it does not exist yet.
// - Keep the id high-water mark in `sqlite_sequence` (AUTOINCREMENT), so deleted ids stay used.
// - Commit every insert on its own; run multi-row deletes in one transaction.

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::time::Duration;

use crate::modules::workouts::core::workout::WorkoutEntry;
use crate::shared::infrastructure::workout_store::{StoreError, WorkoutStore};

pub struct SqliteWorkoutStore {
    pool: SqlitePool,
}

impl SqliteWorkoutStore {
    /// Connects to `database_url`, creating the database file if needed.
    ///
    /// An in-memory database lives only as long as its connection, so it gets a pool of one.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let in_memory = database_url.contains(":memory:");
        let connection_options =
            if database_url.starts_with("sqlite:") && !database_url.contains('?') && !in_memory {
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_string()
            };

        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>)
        } else {
            SqlitePoolOptions::new()
        };
        let pool = pool_options
            .connect(&connection_options)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to connect: {e}")))?;
        Self::with_pool(pool).await
    }

    pub async fn with_pool(pool: SqlitePool) -> Result<Self, StoreError> {
        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                exercise TEXT NOT NULL,
                sets INTEGER NOT NULL,
                reps INTEGER NOT NULL,
                weight REAL NOT NULL,
                date TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to create workouts table: {e}")))?;
        Ok(())
    }

    fn row_to_entry(row: &SqliteRow) -> Result<WorkoutEntry, sqlx::Error> {
        Ok(WorkoutEntry {
            id: row.try_get("id")?,
            exercise: row.try_get("exercise")?,
            sets: row.try_get("sets")?,
            reps: row.try_get("reps")?,
            weight: row.try_get("weight")?,
            date: row.try_get("date")?,
        })
    }
}

#[async_trait::async_trait]
impl WorkoutStore for SqliteWorkoutStore {
    async fn insert(&self, entry: &WorkoutEntry) -> Result<(), StoreError> {
        sqlx::query(
            r"
            INSERT INTO workouts (id, exercise, sets, reps, weight, date)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(entry.id)
        .bind(&entry.exercise)
        .bind(entry.sets)
        .bind(entry.reps)
        .bind(entry.weight)
        .bind(entry.date)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to insert workout: {e}")))?;
        Ok(())
    }

    async fn load_all(&self) -> Result<Vec<WorkoutEntry>, StoreError> {
        let rows = sqlx::query(
            r"
            SELECT id, exercise, sets, reps, weight, date
            FROM workouts
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::Backend(format!("Failed to load workouts: {e}")))?;

        rows.iter()
            .map(Self::row_to_entry)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::Backend(format!("Failed to decode workout row: {e}")))
    }

    async fn delete(&self, ids: &[i64]) -> Result<(), StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to begin transaction: {e}")))?;

        for id in ids {
            sqlx::query("DELETE FROM workouts WHERE id = $1")
                .bind(*id)
                .execute(&mut *tx)
                .await
                .map_err(|e| StoreError::Backend(format!("Failed to delete workout {id}: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to commit deletes: {e}")))?;
        Ok(())
    }

    async fn last_id(&self) -> Result<i64, StoreError> {
        let row = sqlx::query("SELECT seq FROM sqlite_sequence WHERE name = 'workouts'")
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(format!("Failed to read last workout id: {e}")))?;

        match row {
            Some(row) => row
                .try_get("seq")
                .map_err(|e| StoreError::Backend(format!("Failed to decode last workout id: {e}"))),
            None => Ok(0),
        }
    }
}
