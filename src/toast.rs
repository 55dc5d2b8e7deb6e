//! Transient notification slot with a cancellable expiry timer

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use smol::{Task, Timer};
use uuid::Uuid;

use crate::models::{Toast, ToastKind};

pub struct Notifier {
    slot: Arc<Mutex<Option<Toast>>>,
    expiry: Option<Task<()>>,
    ttl: Duration,
}

fn lock(slot: &Mutex<Option<Toast>>) -> MutexGuard<'_, Option<Toast>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            expiry: None,
            ttl,
        }
    }

    /// Replace the current toast; the previous expiry timer is dropped and never fires.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> Uuid {
        let toast = Toast::new(message, kind);
        let token = toast.id;
        tracing::debug!(text = %toast.message, ?kind, "toast shown");
        *lock(&self.slot) = Some(toast);

        let slot = Arc::clone(&self.slot);
        let ttl = self.ttl;
        self.expiry = Some(smol::spawn(async move {
            Timer::after(ttl).await;
            let mut current = lock(&slot);
            if current.as_ref().map(|t| t.id) == Some(token) {
                *current = None;
            }
        }));
        token
    }

    pub fn current(&self) -> Option<Toast> {
        lock(&self.slot).clone()
    }

    pub fn dismiss(&mut self) {
        self.expiry = None;
        *lock(&self.slot) = None;
    }
}
