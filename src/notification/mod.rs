// ABOUTME: Notification center for short-lived user-facing messages
// Producers enqueue through a Notifier, the toast surface renders snapshots

pub mod center;
pub mod error;
pub mod model;

pub use center::{NotificationCenter, Notifier};
pub use error::NotifyError;
pub use model::{Notification, NotificationId, NotificationKind};
