//! Transient notification store rendered by `components::toast_host`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use uuid::Uuid;

/// Auto-dismiss delay for success toasts.
pub const SUCCESS_TIMEOUT_MS: u32 = 3_000;
/// Auto-dismiss delay for error toasts.
pub const ERROR_TIMEOUT_MS: u32 = 4_000;

/// Notification severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    /// Auto-dismiss delay for this toast's severity.
    pub fn timeout_ms(&self) -> u32 {
        match self.kind {
            ToastKind::Success => SUCCESS_TIMEOUT_MS,
            ToastKind::Error => ERROR_TIMEOUT_MS,
        }
    }
}

/// Queue of visible notifications, newest last.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        self.toasts.push(Toast {
            id: Uuid::new_v4(),
            kind,
            message,
        });
    }
}
