use thiserror::Error;

use crate::core::store::StoreError;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// Rejected input. Nothing was read or written.
    #[error("{0}")]
    Invalid(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<&'static str> for TrackerError {
    fn from(message: &'static str) -> Self {
        TrackerError::Invalid(message)
    }
}
