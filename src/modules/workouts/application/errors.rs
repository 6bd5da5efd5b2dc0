use thiserror::Error;

use crate::shared::infrastructure::workout_store::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("workout {0} not found")]
    NotFound(i64),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}
