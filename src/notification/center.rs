// ABOUTME: Notification center owning the active toast set and its expiry timers
// Timers reference notifications by id only, so expiry after dismissal is a no-op

use indexmap::IndexMap;
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::AbortHandle;
use tokio::time::Instant;
use tracing::{debug, info, warn};

use super::{Notification, NotificationId, NotificationKind, NotifyError};
use crate::config::NotificationConfig;

struct Entry {
    notification: Notification,
    expiry: Option<AbortHandle>,
}

#[derive(Default)]
struct ActiveSet {
    entries: IndexMap<NotificationId, Entry>,
    last_id: u64,
}

impl ActiveSet {
    fn fresh_id(&mut self) -> NotificationId {
        loop {
            self.last_id = self.last_id.wrapping_add(1);
            let id = NotificationId::new(self.last_id);
            if !self.entries.contains_key(&id) {
                return id;
            }
        }
    }
}

struct Shared {
    active: Mutex<ActiveSet>,
    redraw: watch::Sender<u64>,
    default_duration: Duration,
    runtime: Handle,
}

impl Shared {
    fn enqueue(
        self: &Arc<Self>,
        message: String,
        kind: NotificationKind,
        duration: Duration,
    ) -> Result<NotificationId, NotifyError> {
        if message.trim().is_empty() {
            warn!("Rejected {} notification with empty message", kind);
            return Err(NotifyError::EmptyMessage);
        }

        let id = {
            let mut active = self.active.lock();
            let id = active.fresh_id();
            let notification = Notification::new(id, message, kind, duration);
            let expiry = notification
                .expires_at()
                .map(|deadline| self.schedule_expiry(id, deadline));
            active.entries.insert(id, Entry { notification, expiry });
            id
        };

        debug!("Enqueued {} notification {} for {:?}", kind, id, duration);
        self.request_redraw();
        Ok(id)
    }

    fn schedule_expiry(self: &Arc<Self>, id: NotificationId, deadline: Instant) -> AbortHandle {
        let shared = Arc::downgrade(self);
        self.runtime
            .spawn(async move {
                tokio::time::sleep_until(deadline).await;
                if let Some(shared) = shared.upgrade() {
                    shared.expire(id);
                }
            })
            .abort_handle()
    }

    fn expire(&self, id: NotificationId) {
        let removed = self.active.lock().entries.shift_remove(&id).is_some();
        if removed {
            debug!("Notification {} expired", id);
            self.request_redraw();
        }
    }

    fn dismiss(&self, id: NotificationId) {
        let removed = self.active.lock().entries.shift_remove(&id);
        match removed {
            Some(entry) => {
                if let Some(expiry) = entry.expiry {
                    expiry.abort();
                }
                debug!("Dismissed notification {}", id);
                self.request_redraw();
            }
            None => debug!("Dismiss of {} ignored, not active", id),
        }
    }

    fn clear(&self) {
        let drained: Vec<Entry> = {
            let mut active = self.active.lock();
            active.entries.drain(..).map(|(_, entry)| entry).collect()
        };
        if drained.is_empty() {
            return;
        }
        for expiry in drained.into_iter().filter_map(|entry| entry.expiry) {
            expiry.abort();
        }
        self.request_redraw();
    }

    fn snapshot(&self) -> Vec<Notification> {
        self.active
            .lock()
            .entries
            .values()
            .map(|entry| entry.notification.clone())
            .collect()
    }

    fn request_redraw(&self) {
        self.redraw.send_modify(|revision| *revision = revision.wrapping_add(1));
    }
}

/// Owns the active notification set. Dropping or shutting down the center
/// cancels every pending expiry and invalidates all `Notifier` handles.
pub struct NotificationCenter {
    shared: Arc<Shared>,
}

impl NotificationCenter {
    /// Must be called from inside a tokio runtime; expiry timers are spawned on it.
    pub fn new(config: &NotificationConfig) -> Result<Self, NotifyError> {
        let runtime = Handle::try_current().map_err(|_| NotifyError::NoRuntime)?;
        let (redraw, _) = watch::channel(0);

        info!(
            "Notification center started with default duration {}ms",
            config.default_duration_ms
        );

        Ok(Self {
            shared: Arc::new(Shared {
                active: Mutex::new(ActiveSet::default()),
                redraw,
                default_duration: config.default_duration(),
                runtime,
            }),
        })
    }

    pub fn notifier(&self) -> Notifier {
        Notifier {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Revision counter bumped whenever the active set changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.redraw.subscribe()
    }

    #[must_use = "the id is needed to dismiss early and errors report rejected messages"]
    pub fn enqueue(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Duration,
    ) -> Result<NotificationId, NotifyError> {
        self.shared.enqueue(message.into(), kind, duration)
    }

    pub fn dismiss(&self, id: NotificationId) {
        self.shared.dismiss(id);
    }

    #[must_use = "errors report rejected messages"]
    pub fn notify_success(&self, message: impl Into<String>) -> Result<NotificationId, NotifyError> {
        self.enqueue(message, NotificationKind::Success, self.shared.default_duration)
    }

    #[must_use = "errors report rejected messages"]
    pub fn notify_error(&self, message: impl Into<String>) -> Result<NotificationId, NotifyError> {
        self.enqueue(message, NotificationKind::Error, self.shared.default_duration)
    }

    #[must_use = "errors report rejected messages"]
    pub fn notify_info(&self, message: impl Into<String>) -> Result<NotificationId, NotifyError> {
        self.enqueue(message, NotificationKind::Info, self.shared.default_duration)
    }

    pub fn clear(&self) {
        self.shared.clear();
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.shared.snapshot()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.shared.active.lock().entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.shared.active.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn default_duration(&self) -> Duration {
        self.shared.default_duration
    }

    pub fn shutdown(self) {
        info!("Notification center shutting down with {} active", self.len());
    }
}

impl Drop for NotificationCenter {
    fn drop(&mut self) {
        self.shared.clear();
    }
}

impl fmt::Debug for NotificationCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotificationCenter")
            .field("active", &self.len())
            .field("default_duration", &self.shared.default_duration)
            .finish()
    }
}

/// Producer handle passed to any code that shows notifications.
///
/// Holds the center weakly: once the center is gone, `enqueue` and the
/// shortcuts fail with `NotifyError::CenterClosed` instead of dropping the
/// message on the floor. `dismiss` and `clear` stay no-ops.
#[derive(Clone)]
pub struct Notifier {
    shared: Weak<Shared>,
}

impl Notifier {
    fn center(&self) -> Result<Arc<Shared>, NotifyError> {
        self.shared.upgrade().ok_or(NotifyError::CenterClosed)
    }

    #[must_use = "the id is needed to dismiss early and errors report a closed center"]
    pub fn enqueue(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
        duration: Duration,
    ) -> Result<NotificationId, NotifyError> {
        self.center()?.enqueue(message.into(), kind, duration)
    }

    pub fn dismiss(&self, id: NotificationId) {
        if let Some(shared) = self.shared.upgrade() {
            shared.dismiss(id);
        }
    }

    #[must_use = "errors report a closed center"]
    pub fn notify_success(&self, message: impl Into<String>) -> Result<NotificationId, NotifyError> {
        self.notify(message, NotificationKind::Success)
    }

    #[must_use = "errors report a closed center"]
    pub fn notify_error(&self, message: impl Into<String>) -> Result<NotificationId, NotifyError> {
        self.notify(message, NotificationKind::Error)
    }

    #[must_use = "errors report a closed center"]
    pub fn notify_info(&self, message: impl Into<String>) -> Result<NotificationId, NotifyError> {
        self.notify(message, NotificationKind::Info)
    }

    fn notify(
        &self,
        message: impl Into<String>,
        kind: NotificationKind,
    ) -> Result<NotificationId, NotifyError> {
        let shared = self.center()?;
        let duration = shared.default_duration;
        shared.enqueue(message.into(), kind, duration)
    }

    pub fn clear(&self) {
        if let Some(shared) = self.shared.upgrade() {
            shared.clear();
        }
    }

    pub fn snapshot(&self) -> Vec<Notification> {
        self.shared
            .upgrade()
            .map(|shared| shared.snapshot())
            .unwrap_or_default()
    }

    pub fn is_closed(&self) -> bool {
        self.shared.strong_count() == 0
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("closed", &self.is_closed())
            .finish()
    }
}
