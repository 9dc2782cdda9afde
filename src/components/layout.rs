//! Authenticated shell: sidebar navigation, user chip, logout, outlet.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;

/// Layout for the protected routes.
///
/// Redirects to `/login` once the session settles with no user at all.
/// A stale cached user (startup check still in flight, or failed with a
/// transient error) keeps rendering optimistically; only an explicit
/// 401 discards it and triggers the redirect.
#[component]
pub fn Layout() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new({
        let navigate = navigate.clone();
        move || {
            let state = session_state.get();
            if !state.loading && !state.authenticated && state.user.is_none() {
                navigate("/login", NavigateOptions::default());
            }
        }
    });

    let user_name = move || {
        session_state
            .get()
            .user
            .and_then(|u| u.nome)
            .unwrap_or_else(|| "Motorista".to_owned())
    };

    let on_logout = move |_| {
        session::logout(session_state, toasts);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="layout">
            <aside class="layout__sidebar">
                <div class="layout__brand">"FluxVision"</div>
                <nav class="layout__nav">
                    <A href="/">"Dashboard"</A>
                    <A href="/transacoes">"Transações"</A>
                    <A href="/configuracoes">"Configurações"</A>
                    <A href="/perfil">"Perfil"</A>
                </nav>
                <div class="layout__user">
                    <span class="layout__user-name">{user_name}</span>
                    <button class="btn btn--ghost" on:click=on_logout>
                        "Sair"
                    </button>
                </div>
            </aside>
            <main class="layout__content">
                <Outlet/>
            </main>
        </div>
    }
}
