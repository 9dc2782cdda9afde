//! Login page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;
use crate::util::validate;

/// Email/password form. Navigates to the dashboard only on success;
/// on failure the form stays editable and the notification channel has
/// already shown the server's message.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let erro_email = RwSignal::new(Option::<&'static str>::None);
    let erro_senha = RwSignal::new(Option::<&'static str>::None);

    let loading = move || session_state.get().loading;

    let submit = Callback::new(move |()| {
        let email_val = email.get();
        let senha_val = senha.get();

        erro_email.set(match () {
            () if !validate::required(&email_val) => Some("Informe o email"),
            () if !validate::email_shape(&email_val) => Some("Email inválido"),
            () => None,
        });
        erro_senha.set((!validate::required(&senha_val)).then_some("Informe a senha"));
        if erro_email.get().is_some() || erro_senha.get().is_some() {
            return;
        }

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result =
                session::login(session_state, toasts, email_val.trim(), &senha_val).await;
            if result.success {
                navigate("/", NavigateOptions::default());
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"FluxVision"</h1>
                <p class="auth-card__subtitle">"Controle financeiro para motoristas"</p>

                <label class="auth-card__label">
                    "Email"
                    <input
                        class="auth-card__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <Show when=move || erro_email.get().is_some()>
                        <span class="field-error">{move || erro_email.get().unwrap_or_default()}</span>
                    </Show>
                </label>

                <label class="auth-card__label">
                    "Senha"
                    <input
                        class="auth-card__input"
                        type="password"
                        prop:value=move || senha.get()
                        on:input=move |ev| senha.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                    <Show when=move || erro_senha.get().is_some()>
                        <span class="field-error">{move || erro_senha.get().unwrap_or_default()}</span>
                    </Show>
                </label>

                <button
                    class="btn btn--primary btn--block"
                    disabled=loading
                    on:click=move |_| submit.run(())
                >
                    {move || if loading() { "Entrando..." } else { "Entrar" }}
                </button>

                <div class="auth-card__links">
                    <A href="/esqueci-senha">"Esqueci minha senha"</A>
                    <A href="/cadastro">"Criar conta"</A>
                </div>
            </div>
        </div>
    }
}
