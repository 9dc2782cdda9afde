//! Password recovery pages: request the email and redeem the token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;
use crate::util::validate;

/// Request a recovery email.
#[component]
pub fn EsqueciSenhaPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();

    let email = RwSignal::new(String::new());
    let erro = RwSignal::new(Option::<&'static str>::None);
    let enviado = RwSignal::new(false);

    let loading = move || session_state.get().loading;

    let submit = Callback::new(move |()| {
        if !validate::email_shape(&email.get()) {
            erro.set(Some("Email inválido"));
            return;
        }
        erro.set(None);

        leptos::task::spawn_local(async move {
            let result =
                session::forgot_password(session_state, toasts, email.get().trim()).await;
            if result.success {
                enviado.set(true);
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Recuperar senha"</h1>

                <Show
                    when=move || !enviado.get()
                    fallback=|| {
                        view! {
                            <p>"Verifique sua caixa de entrada e siga as instruções."</p>
                        }
                    }
                >
                    <label class="auth-card__label">
                        "Email"
                        <input
                            class="auth-card__input"
                            type="email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || erro.get().is_some()>
                            <span class="field-error">{move || erro.get().unwrap_or_default()}</span>
                        </Show>
                    </label>

                    <button
                        class="btn btn--primary btn--block"
                        disabled=loading
                        on:click=move |_| submit.run(())
                    >
                        {move || if loading() { "Enviando..." } else { "Enviar instruções" }}
                    </button>
                </Show>

                <div class="auth-card__links">
                    <A href="/login">"Voltar para o login"</A>
                </div>
            </div>
        </div>
    }
}

/// Redeem a reset token (`?token=`) for a new password.
#[component]
pub fn RedefinirSenhaPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let nova_senha = RwSignal::new(String::new());
    let confirmacao = RwSignal::new(String::new());
    let erro = RwSignal::new(Option::<&'static str>::None);

    let loading = move || session_state.get().loading;
    let token = move || query.read().get("token").unwrap_or_default();

    let submit = Callback::new(move |()| {
        let token_val = token();
        if token_val.is_empty() {
            erro.set(Some("Link de recuperação inválido"));
            return;
        }
        if !validate::min_length(&nova_senha.get(), validate::MIN_SENHA) {
            erro.set(Some("A senha deve ter ao menos 6 caracteres"));
            return;
        }
        if !validate::fields_match(&nova_senha.get(), &confirmacao.get()) {
            erro.set(Some("As senhas não conferem"));
            return;
        }
        erro.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result =
                session::reset_password(session_state, toasts, &token_val, &nova_senha.get())
                    .await;
            if result.success {
                navigate("/login", NavigateOptions::default());
            }
        });
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Redefinir senha"</h1>

                <label class="auth-card__label">
                    "Nova senha"
                    <input
                        class="auth-card__input"
                        type="password"
                        prop:value=move || nova_senha.get()
                        on:input=move |ev| nova_senha.set(event_target_value(&ev))
                    />
                </label>

                <label class="auth-card__label">
                    "Confirmar nova senha"
                    <input
                        class="auth-card__input"
                        type="password"
                        prop:value=move || confirmacao.get()
                        on:input=move |ev| confirmacao.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || erro.get().is_some()>
                    <span class="field-error">{move || erro.get().unwrap_or_default()}</span>
                </Show>

                <button
                    class="btn btn--primary btn--block"
                    disabled=loading
                    on:click=move |_| submit.run(())
                >
                    {move || if loading() { "Salvando..." } else { "Redefinir" }}
                </button>

                <div class="auth-card__links">
                    <A href="/login">"Voltar para o login"</A>
                </div>
            </div>
        </div>
    }
}
