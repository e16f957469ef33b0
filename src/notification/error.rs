// ABOUTME: Error types for the notification center
// Covers rejected notifications and handles used outside the center's lifetime

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotifyError {
    #[error("Notification message must not be empty")]
    EmptyMessage,

    #[error("Unknown notification kind: {0}")]
    UnknownKind(String),

    #[error("Notification center is no longer running")]
    CenterClosed,

    #[error("Notification center requires a tokio runtime")]
    NoRuntime,
}
