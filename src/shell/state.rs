use std::sync::Arc;
use tracing::info;

use crate::modules::workouts::application::errors::ApplicationError;
use crate::modules::workouts::application::tracker::WorkoutTracker;
use crate::shared::infrastructure::workout_store::WorkoutStore;
use crate::shared::infrastructure::workout_store::in_memory::InMemoryWorkoutStore;
use crate::shared::infrastructure::workout_store::sqlite::SqliteWorkoutStore;
use crate::shell::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<WorkoutTracker>,
}

impl AppState {
    /// Uses SQLite when a database URL is configured, memory otherwise.
    pub async fn from_config(config: &Config) -> Result<Self, ApplicationError> {
        let store: Arc<dyn WorkoutStore> = match &config.database_url {
            Some(url) => {
                info!(database_url = %url, "mirroring workouts to sqlite");
                Arc::new(SqliteWorkoutStore::connect(url).await?)
            }
            None => {
                info!("no DATABASE_URL set, workouts are kept in memory only");
                Arc::new(InMemoryWorkoutStore::new())
            }
        };
        Ok(Self {
            tracker: Arc::new(WorkoutTracker::open(store).await?),
        })
    }
}
