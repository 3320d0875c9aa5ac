//! Type conversions for SyncError

use super::types::SyncError;
use tokio::task::JoinError;

impl From<JoinError> for SyncError {
    fn from(err: JoinError) -> Self {
        if err.is_cancelled() {
            SyncError::Cancelled
        } else {
            SyncError::TaskPanicked(err.to_string())
        }
    }
}

impl From<String> for SyncError {
    fn from(message: String) -> Self {
        SyncError::Validation(message)
    }
}
