//! Renders the toast queue and auto-dismisses each entry.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// Fixed overlay listing the queued notifications.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-host">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast/> }
            />
        </div>
    }
}

/// A single notification; schedules its own dismissal on mount.
#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let id = toast.id;

    #[cfg(feature = "hydrate")]
    {
        let timeout = toast.timeout_ms();
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(timeout).await;
            toasts.update(|t| t.dismiss(id));
        });
    }

    let kind_class = match toast.kind {
        ToastKind::Success => "toast toast--success",
        ToastKind::Error => "toast toast--error",
    };

    view! {
        <div class=kind_class role="status">
            <span class="toast__message">{toast.message.clone()}</span>
            <button class="toast__close" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
