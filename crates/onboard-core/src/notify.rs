//! Transient notifications (toasts).
//!
//! The sign-up flow reports through the [`Notifier`] trait; [`Toasts`] is the
//! queue the desktop shell renders and sweeps.

use std::time::{Duration, Instant};

/// How long a toast stays on screen before it is swept.
pub const DEFAULT_TOAST_TTL: Duration = Duration::from_secs(5);

/// Sink for success and error notifications.
pub trait Notifier {
    fn notify_success(&mut self, text: &str);
    fn notify_error(&mut self, text: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
    pub created_at: Instant,
}

/// Ordered toast queue, oldest first.
#[derive(Debug, Clone)]
pub struct Toasts {
    items: Vec<Toast>,
    next_id: u64,
    ttl: Duration,
}

impl Default for Toasts {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_TTL)
    }
}

impl Toasts {
    pub fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            ttl,
        }
    }

    /// Queue a toast stamped with the current time. Returns its id.
    pub fn push(&mut self, kind: ToastKind, text: impl Into<String>) -> u64 {
        self.push_at(kind, text, Instant::now())
    }

    pub fn push_at(&mut self, kind: ToastKind, text: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast {
            id,
            kind,
            text: text.into(),
            created_at: now,
        });
        id
    }

    /// Remove a toast by id. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Drop every toast older than the TTL. Returns how many were removed.
    pub fn expire(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.items.len();
        self.items
            .retain(|t| now.saturating_duration_since(t.created_at) < ttl);
        before - self.items.len()
    }

    /// Whether a sweep at `now` would remove anything.
    pub fn any_expired(&self, now: Instant) -> bool {
        self.items
            .iter()
            .any(|t| now.saturating_duration_since(t.created_at) >= self.ttl)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Notifier for Toasts {
    fn notify_success(&mut self, text: &str) {
        tracing::debug!("toast(success): {}", text);
        self.push(ToastKind::Success, text);
    }

    fn notify_error(&mut self, text: &str) {
        tracing::debug!("toast(error): {}", text);
        self.push(ToastKind::Error, text);
    }
}
