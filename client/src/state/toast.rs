//! Toast notifications.
//!
//! ARCHITECTURE
//! ============
//! `ToastQueue` is the plain list the host renders. `Notifier` is the handle
//! other components pull from context to raise a toast; it only delivers
//! while a `ToastHost` is mounted and attached to it. Each toast removes
//! itself after `AUTO_DISMISS_MS`, or earlier when the visitor closes it.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Lifetime of a toast before it dismisses itself.
pub const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
            Self::Info => "toast toast--info",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Info => "i",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub detail: Option<String>,
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, kind: ToastKind, title: impl Into<String>, detail: Option<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, title: title.into(), detail });
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Handle for raising toasts, provided through context.
#[derive(Clone, Copy, Debug)]
pub struct Notifier {
    queue: RwSignal<ToastQueue>,
    attached: RwSignal<bool>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self { queue: RwSignal::new(ToastQueue::default()), attached: RwSignal::new(false) }
    }

    pub fn queue(&self) -> RwSignal<ToastQueue> {
        self.queue
    }

    /// Called by `ToastHost` when it mounts and unmounts.
    pub fn set_attached(&self, attached: bool) {
        self.attached.set(attached);
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get_untracked()
    }

    pub fn success(&self, title: &str, detail: &str) -> Option<u64> {
        self.notify(ToastKind::Success, title, detail)
    }

    pub fn error(&self, title: &str, detail: &str) -> Option<u64> {
        self.notify(ToastKind::Error, title, detail)
    }

    pub fn info(&self, title: &str, detail: &str) -> Option<u64> {
        self.notify(ToastKind::Info, title, detail)
    }

    /// Queue a toast and schedule its removal. Returns `None` without a host.
    pub fn notify(&self, kind: ToastKind, title: &str, detail: &str) -> Option<u64> {
        if !self.is_attached() {
            log::warn!("toast host not mounted; dropping {kind:?} toast {title:?}");
            return None;
        }
        let detail = (!detail.is_empty()).then(|| detail.to_owned());
        let id = self.queue.try_update(|q| q.push(kind, title, detail))?;
        self.schedule_dismiss(id);
        Some(id)
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }

    #[cfg(feature = "csr")]
    fn schedule_dismiss(&self, id: u64) {
        let queue = self.queue;
        gloo_timers::callback::Timeout::new(AUTO_DISMISS_MS, move || {
            queue.try_update(|q| q.dismiss(id));
        })
        .forget();
    }

    #[cfg(not(feature = "csr"))]
    fn schedule_dismiss(&self, id: u64) {
        log::trace!("toast {id} would dismiss after {AUTO_DISMISS_MS} ms");
    }
}
