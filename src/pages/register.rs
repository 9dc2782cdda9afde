//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::{NovoUsuario, Pais};
use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;
use crate::util::validate;

async fn load_paises() -> Vec<Pais> {
    crate::net::settings::listar_paises().await.unwrap_or_default()
}

/// Registration form. Creating an account does not log in; on success
/// the user is sent to the login page.
#[component]
pub fn CadastroPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let nome = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let telefone = RwSignal::new(String::new());
    let senha = RwSignal::new(String::new());
    let confirmacao = RwSignal::new(String::new());
    let pais_id = RwSignal::new(String::new());

    let erros = RwSignal::new(Vec::<(&'static str, &'static str)>::new());
    let erro_de = move |campo: &'static str| {
        move || {
            erros
                .get()
                .iter()
                .find(|(c, _)| *c == campo)
                .map(|(_, msg)| *msg)
        }
    };

    let paises = LocalResource::new(load_paises);
    let loading = move || session_state.get().loading;

    let submit = Callback::new(move |()| {
        let mut novos_erros = Vec::new();
        if !validate::required(&nome.get()) {
            novos_erros.push(("nome", "Informe seu nome"));
        }
        if !validate::email_shape(&email.get()) {
            novos_erros.push(("email", "Email inválido"));
        }
        if !validate::required(&telefone.get()) {
            novos_erros.push(("telefone", "Informe seu telefone"));
        }
        if !validate::min_length(&senha.get(), validate::MIN_SENHA) {
            novos_erros.push(("senha", "A senha deve ter ao menos 6 caracteres"));
        }
        if !validate::fields_match(&senha.get(), &confirmacao.get()) {
            novos_erros.push(("confirmacao", "As senhas não conferem"));
        }
        let valido = novos_erros.is_empty();
        erros.set(novos_erros);
        if !valido {
            return;
        }

        let dados = NovoUsuario {
            nome: nome.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            senha: senha.get(),
            telefone: telefone.get().trim().to_owned(),
            pais_id: pais_id.get().parse().ok(),
        };

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = session::register(session_state, toasts, &dados).await;
            if result.success {
                navigate("/login", NavigateOptions::default());
            }
        });
    });

    let field = move |campo: &'static str,
                      label: &'static str,
                      tipo: &'static str,
                      signal: RwSignal<String>| {
        let erro = erro_de(campo);
        view! {
            <label class="auth-card__label">
                {label}
                <input
                    class="auth-card__input"
                    type=tipo
                    prop:value=move || signal.get()
                    on:input=move |ev| signal.set(event_target_value(&ev))
                />
                <Show when=move || erro().is_some()>
                    <span class="field-error">{move || erro().unwrap_or_default()}</span>
                </Show>
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Criar conta"</h1>

                {field("nome", "Nome", "text", nome)}
                {field("email", "Email", "email", email)}
                {field("telefone", "Telefone", "tel", telefone)}

                <label class="auth-card__label">
                    "País"
                    <Suspense fallback=move || view! { <p>"Carregando países..."</p> }>
                        {move || {
                            paises
                                .get()
                                .map(|lista| {
                                    view! {
                                        <select
                                            class="auth-card__input"
                                            prop:value=move || pais_id.get()
                                            on:change=move |ev| pais_id.set(event_target_value(&ev))
                                        >
                                            <option value="">"Selecione"</option>
                                            {lista
                                                .iter()
                                                .map(|p| {
                                                    view! {
                                                        <option value=p.id.to_string()>{p.nome.clone()}</option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    }
                                })
                        }}
                    </Suspense>
                </label>

                {field("senha", "Senha", "password", senha)}
                {field("confirmacao", "Confirmar senha", "password", confirmacao)}

                <button
                    class="btn btn--primary btn--block"
                    disabled=loading
                    on:click=move |_| submit.run(())
                >
                    {move || if loading() { "Enviando..." } else { "Cadastrar" }}
                </button>

                <div class="auth-card__links">
                    <A href="/login">"Já tenho conta"</A>
                </div>
            </div>
        </div>
    }
}
