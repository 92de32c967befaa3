//! Transient notifications.
//!
//! Adapter failures, validation messages and save confirmations all
//! surface here as auto-dismissing toasts; nothing in the portal raises a
//! blocking dialog except the fatal connectivity screen.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

const TOAST_LIFETIME_MS: u32 = 4500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn css_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Info => "toast toast--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub text: String,
}

/// Notification service provided through context at the application root.
#[derive(Clone, Copy)]
pub struct ToastService {
    items: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.push(ToastKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        let text = text.into();
        log::error!("{}", text);
        self.push(ToastKind::Error, text);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.push(ToastKind::Info, text.into());
    }

    fn push(&self, kind: ToastKind, text: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| items.push(Toast { id, kind, text }));

        let items = self.items;
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_LIFETIME_MS).await;
            items.update(|list| list.retain(|t| t.id != id));
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|list| list.retain(|t| t.id != id));
    }
}

pub fn use_toasts() -> ToastService {
    use_context::<ToastService>().expect("ToastService not provided in context")
}

/// Renders the toast stack; mounted once inside the shell.
#[component]
pub fn ToastHost() -> impl IntoView {
    let service = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || service.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=toast.kind.css_class()
                            on:click=move |_| service.dismiss(id)
                        >
                            {toast.text.clone()}
                        </div>
                    }
                }
            />
        </div>
    }
}
