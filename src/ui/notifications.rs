//! Toast notifications for the admin console
//!
//! Simulated backend actions report their outcome here. Errors stay until
//! dismissed, everything else fades after a few seconds.

use leptos::prelude::*;
use std::collections::VecDeque;

use crate::ui::icon::{Icon, icons};

/// Older toasts are dropped beyond this many
const MAX_VISIBLE: usize = 5;

const DEFAULT_DISMISS_MS: u32 = 4_000;

/// Matches the `.toast` fade-out transition
#[cfg_attr(feature = "ssr", allow(dead_code))]
const EXIT_ANIMATION_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Warning => "toast toast-warning",
            ToastKind::Info => "toast toast-info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => icons::CHECK,
            ToastKind::Error | ToastKind::Warning => icons::ALERT_CIRCLE,
            ToastKind::Info => icons::ACTIVITY,
        }
    }

    /// Errors interrupt screen readers, the rest wait their turn
    fn role(self) -> &'static str {
        match self {
            ToastKind::Error => "alert",
            _ => "status",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub message: String,
    /// `None` keeps the toast until closed
    pub auto_dismiss_ms: Option<u32>,
}

impl Toast {
    pub fn new(kind: ToastKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            auto_dismiss_ms: Some(DEFAULT_DISMISS_MS),
        }
    }

    pub fn sticky(mut self) -> Self {
        self.auto_dismiss_ms = None;
        self
    }
}

/// Bounded, id-keyed stack of visible toasts
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    items: VecDeque<(u64, Toast)>,
    next_id: u64,
}

impl ToastQueue {
    /// Adds a toast, evicting the oldest past the cap, and returns its id
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back((id, toast));
        while self.items.len() > MAX_VISIBLE {
            self.items.pop_front();
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, Toast)> {
        self.items.iter()
    }
}

/// Handle for pushing toasts
#[derive(Clone, Copy)]
pub struct NotificationManager {
    queue: RwSignal<ToastQueue>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn notify(&self, toast: Toast) {
        tracing::debug!(kind = ?toast.kind, title = %toast.title, "toast");
        self.queue.update(|q| {
            q.push(toast);
        });
    }

    pub fn dismiss(&self, id: u64) {
        // The toast may outlive the console when its timer fires late
        self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn success(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Toast::new(ToastKind::Success, title, message));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Toast::new(ToastKind::Error, title, message).sticky());
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Toast::new(ToastKind::Warning, title, message));
    }

    pub fn info(&self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(Toast::new(ToastKind::Info, title, message));
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_notifications() -> NotificationManager {
    let manager = NotificationManager::new();
    provide_context(manager);
    manager
}

pub fn use_notifications() -> NotificationManager {
    use_context::<NotificationManager>().expect("NotificationManager should be provided")
}

/// Top-right toast stack; mount once per layout
#[component]
pub fn NotificationsContainer() -> impl IntoView {
    let manager = use_notifications();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || manager.queue.with(|q| q.iter().cloned().collect::<Vec<_>>())
                key=|(id, _)| *id
                children=move |(id, toast)| view! { <ToastCard id=id toast=toast manager=manager/> }
            />
        </div>
    }
}

#[component]
fn ToastCard(id: u64, toast: Toast, manager: NotificationManager) -> impl IntoView {
    let leaving = RwSignal::new(false);

    #[cfg(not(feature = "ssr"))]
    {
        if let Some(ms) = toast.auto_dismiss_ms {
            use gloo_timers::future::TimeoutFuture;

            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(ms).await;
                // Closed by hand in the meantime
                if leaving.try_set(true).is_some() {
                    return;
                }
                TimeoutFuture::new(EXIT_ANIMATION_MS).await;
                manager.dismiss(id);
            });
        }
    }

    let Toast { kind, title, message, .. } = toast;

    view! {
        <div class=kind.class() class:toast-leaving=move || leaving.get() role=kind.role()>
            <Icon name=kind.icon() class="toast-icon"/>
            <div class="toast-body">
                <h4>{title}</h4>
                <p>{message}</p>
            </div>
            <button class="btn-icon" aria-label="Dismiss notification" on:click=move |_| manager.dismiss(id)>
                <Icon name=icons::X class="icon-text"/>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(title: &str) -> Toast {
        Toast::new(ToastKind::Info, title, "")
    }

    #[test]
    fn test_queue_caps_and_drops_oldest() {
        let mut queue = ToastQueue::default();
        let first = queue.push(info("first"));
        for n in 0..MAX_VISIBLE {
            queue.push(info(&format!("toast {n}")));
        }

        assert_eq!(queue.len(), MAX_VISIBLE);
        assert!(queue.iter().all(|(id, _)| *id != first));
    }

    #[test]
    fn test_ids_are_not_reused_after_dismiss() {
        let mut queue = ToastQueue::default();
        let a = queue.push(info("a"));
        queue.dismiss(a);
        let b = queue.push(info("b"));

        assert_ne!(a, b);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_dismiss_unknown_id_is_harmless() {
        let mut queue = ToastQueue::default();
        queue.push(info("a"));
        queue.dismiss(42);
        assert_eq!(queue.len(), 1);
        assert!(!queue.is_empty());
    }

    #[test]
    fn test_errors_are_sticky() {
        let toast = Toast::new(ToastKind::Error, "x", "y").sticky();
        assert_eq!(toast.auto_dismiss_ms, None);
        assert_eq!(ToastKind::Error.role(), "alert");
        assert_eq!(info("z").auto_dismiss_ms, Some(DEFAULT_DISMISS_MS));
    }
}
