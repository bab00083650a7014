//! Toast Notifications
//!
//! Transient feedback messages provided via Leptos context. Each toast
//! dismisses itself after a few seconds on a spawned timer task.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays visible
const TOAST_DISMISS_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "toast success",
            Self::Error => "toast error",
            Self::Info => "toast info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast queue provided via context
#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    pub fn new() -> Self {
        let (toasts, set_toasts) = signal(Vec::new());
        Self {
            toasts,
            set_toasts,
            next_id: StoredValue::new(0),
        }
    }

    /// Currently visible toasts, newest last
    pub fn entries(&self) -> ReadSignal<Vec<Toast>> {
        self.toasts
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_value() + 1;
        self.next_id.set_value(id);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });

        // Auto-dismiss after the display window
        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }
}

/// Get the toast queue from context
pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}
