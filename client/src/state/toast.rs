//! Transient user-facing notifications.
//!
//! DESIGN
//! ======
//! Resource hooks push here on every mutation outcome; `ToastStack` renders
//! and auto-dismisses. Capped so a burst of failures cannot flood the screen.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Most toasts kept at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 5;

/// How long the browser keeps a toast on screen.
pub const TOAST_TTL_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    next_id: u64,
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, kind, message: message.into() });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }
}

/// Push a toast onto `toasts` and schedule its dismissal in the browser.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let mut id = 0;
    let message = message.into();
    toasts.update(|t| id = t.push(kind, message));
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
            toasts.update(|t| t.dismiss(id));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}
