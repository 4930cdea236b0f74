//! Error Types
//!
//! Recoverable failures of the store, the controller and local storage.

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Local storage failures
#[derive(Debug, Error)]
pub enum StorageError {
    /// No window, or local storage is disabled
    #[error("local storage unavailable: {0}")]
    Unavailable(String),
    /// Quota exceeded or the browser refused the write
    #[error("local storage write failed: {0}")]
    Write(String),
    #[error("stored items are corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Failures of a tracker action
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("name and calories are both required")]
    EmptyInput,
    #[error("calories must be a whole number, got {0:?}")]
    InvalidCalories(String),
    #[error("item {0} not found")]
    NotFound(u32),
    #[error("no item is being edited")]
    NoCurrentItem,
    #[error("no item IDs left to assign")]
    IdsExhausted,
}

impl TrackerError {
    /// Bad form input, ignored silently by the UI
    pub fn is_validation(&self) -> bool {
        matches!(self, TrackerError::EmptyInput | TrackerError::InvalidCalories(_))
    }
}
