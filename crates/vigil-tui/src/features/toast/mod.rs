//! Toast notifications.
//!
//! Transient messages shown after an async action completes. Each toast
//! expires `TOAST_TTL` after it is pushed; expiry runs on `Tick`.

mod render;

use std::collections::VecDeque;
use std::time::{Duration, Instant};

pub use render::render_toasts;

pub const TOAST_TTL: Duration = Duration::from_secs(3);

/// Oldest toasts are dropped beyond this.
const MAX_TOASTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastKind::Info, message)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= TOAST_TTL
    }
}

#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
}

impl Toasts {
    pub fn push(&mut self, toast: Toast) {
        tracing::debug!(kind = ?toast.kind, message = %toast.message, "toast");
        self.items.push_back(toast);
        while self.items.len() > MAX_TOASTS {
            self.items.pop_front();
        }
    }

    /// Drops expired toasts. Returns true if any were removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|toast| !toast.is_expired(now));
        self.items.len() != before
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn count(&self, kind: ToastKind) -> usize {
        self.items.iter().filter(|toast| toast.kind == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_drops_expired() {
        let mut toasts = Toasts::default();
        toasts.push(Toast::success("saved"));
        let pushed_at = toasts.iter().next().unwrap().created_at;

        assert!(!toasts.prune(pushed_at + Duration::from_secs(1)));
        assert_eq!(toasts.len(), 1);

        assert!(toasts.prune(pushed_at + TOAST_TTL));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_push_caps_queue() {
        let mut toasts = Toasts::default();
        for i in 0..6 {
            toasts.push(Toast::info(format!("t{i}")));
        }
        assert_eq!(toasts.len(), MAX_TOASTS);
        assert_eq!(toasts.iter().next().unwrap().message, "t2");
    }

    #[test]
    fn test_count_by_kind() {
        let mut toasts = Toasts::default();
        toasts.push(Toast::error("a"));
        toasts.push(Toast::success("b"));
        assert_eq!(toasts.count(ToastKind::Error), 1);
        assert_eq!(toasts.count(ToastKind::Success), 1);
    }
}
