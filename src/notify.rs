//! Transient toast notifications.
//!
//! A latent utility, matching the page's notification helper: not wired into
//! any flow, exposed for embedders. Each pushed toast lives for a fixed TTL
//! and removes itself; there is no queue, no deduplication, and no stacking
//! order guarantee when toasts overlap.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use uuid::Uuid;

/// Default toast lifetime.
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(3);

/// Visual tone of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Error,
    Info,
}

/// One visible toast.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub tone: ToastTone,
}

/// Holds the currently-visible toasts and expires them on a timer.
///
/// `push` must be called from within a tokio runtime — expiry is a spawned
/// task sleeping for the TTL.
#[derive(Debug, Clone)]
pub struct ToastRack {
    toasts: Arc<Mutex<Vec<Toast>>>,
    ttl: Duration,
}

impl Default for ToastRack {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastRack {
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TOAST_TTL)
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self { toasts: Arc::new(Mutex::new(Vec::new())), ttl }
    }

    /// Insert a toast and schedule its removal after the TTL.
    pub fn push(&self, message: impl Into<String>, tone: ToastTone) -> Uuid {
        let toast = Toast { id: Uuid::new_v4(), message: message.into(), tone };
        let id = toast.id;

        if let Ok(mut toasts) = self.toasts.lock() {
            toasts.push(toast);
        }

        let store = Arc::clone(&self.toasts);
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            if let Ok(mut toasts) = store.lock() {
                toasts.retain(|t| t.id != id);
            }
        });

        id
    }

    /// Snapshot of the currently-visible toasts.
    pub fn visible(&self) -> Vec<Toast> {
        self.toasts.lock().map(|t| t.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.toasts.lock().map(|t| t.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
