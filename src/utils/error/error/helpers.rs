//! Helper functions for creating and classifying errors

use super::types::SyncError;

impl SyncError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }

    pub fn transport<E: Into<String>, S: Into<String>>(endpoint: E, message: S) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Whether this error came from cancellation, directly or wrapped in a batch failure
    pub fn is_cancelled(&self) -> bool {
        match self {
            Self::Cancelled => true,
            Self::ActionFailed { source, .. } => source.is_cancelled(),
            _ => false,
        }
    }

    /// Whether this error aborts a running batch operation
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::ActionFailed { .. } | Self::Cancelled | Self::TaskPanicked(_)
        )
    }
}
