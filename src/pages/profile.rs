//! Profile page: personal data, password change, account deletion.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::PerfilUpdate;
use crate::state::session::{self, SessionState};
use crate::state::toast::ToastState;
use crate::util::validate;

fn non_empty(value: String) -> Option<String> {
    Some(value.trim().to_owned()).filter(|v| !v.is_empty())
}

/// Profile page.
///
/// After a successful `PUT /auth/perfil` the returned user overwrites
/// the session cache via `update_user` — no re-fetch of `/auth/me`.
#[component]
pub fn PerfilPage() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let atual = session_state.get_untracked().user.unwrap_or_default();
    let nome = RwSignal::new(atual.nome.unwrap_or_default());
    let telefone = RwSignal::new(atual.telefone.unwrap_or_default());
    let cidade = RwSignal::new(atual.cidade.unwrap_or_default());
    let bio = RwSignal::new(atual.bio.unwrap_or_default());
    let saving = RwSignal::new(false);

    let senha_atual = RwSignal::new(String::new());
    let nova_senha = RwSignal::new(String::new());
    let confirmacao = RwSignal::new(String::new());
    let erro_senha = RwSignal::new(Option::<&'static str>::None);

    let confirm_delete = RwSignal::new(false);

    let on_save_profile = Callback::new(move |()| {
        let dados = PerfilUpdate {
            nome: non_empty(nome.get()),
            telefone: non_empty(telefone.get()),
            cidade: non_empty(cidade.get()),
            bio: non_empty(bio.get()),
            ..PerfilUpdate::default()
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::net::auth::atualizar_perfil(&dados).await;
            saving.set(false);
            if let Ok(usuario) = result {
                session::update_user(session_state, usuario);
                toasts.update(|t| t.success("Perfil atualizado com sucesso!"));
            }
        });
    });

    let on_change_password = Callback::new(move |()| {
        if !validate::required(&senha_atual.get()) {
            erro_senha.set(Some("Informe a senha atual"));
            return;
        }
        if !validate::min_length(&nova_senha.get(), validate::MIN_SENHA) {
            erro_senha.set(Some("A nova senha deve ter ao menos 6 caracteres"));
            return;
        }
        if !validate::fields_match(&nova_senha.get(), &confirmacao.get()) {
            erro_senha.set(Some("As senhas não conferem"));
            return;
        }
        erro_senha.set(None);

        leptos::task::spawn_local(async move {
            let result =
                crate::net::auth::alterar_senha(&senha_atual.get(), &nova_senha.get()).await;
            if result.is_ok() {
                senha_atual.set(String::new());
                nova_senha.set(String::new());
                confirmacao.set(String::new());
                toasts.update(|t| t.success("Senha alterada com sucesso!"));
            }
        });
    });

    let on_confirm_delete = Callback::new(move |()| {
        confirm_delete.set(false);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            if crate::net::auth::excluir_conta().await.is_ok() {
                session_state.update(SessionState::clear);
                toasts.update(|t| t.success("Conta excluída."));
                navigate("/login", NavigateOptions::default());
            }
        });
    });

    view! {
        <div class="profile-page">
            <h1>"Perfil"</h1>

            <section class="profile-page__section">
                <h2>"Dados pessoais"</h2>

                <label class="profile-page__field">
                    "Nome"
                    <input
                        type="text"
                        prop:value=move || nome.get()
                        on:input=move |ev| nome.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-page__field">
                    "Telefone"
                    <input
                        type="tel"
                        prop:value=move || telefone.get()
                        on:input=move |ev| telefone.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-page__field">
                    "Cidade"
                    <input
                        type="text"
                        prop:value=move || cidade.get()
                        on:input=move |ev| cidade.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-page__field">
                    "Bio"
                    <input
                        type="text"
                        prop:value=move || bio.get()
                        on:input=move |ev| bio.set(event_target_value(&ev))
                    />
                </label>

                <button
                    class="btn btn--primary"
                    disabled=move || saving.get()
                    on:click=move |_| on_save_profile.run(())
                >
                    {move || if saving.get() { "Salvando..." } else { "Salvar perfil" }}
                </button>
            </section>

            <section class="profile-page__section">
                <h2>"Alterar senha"</h2>

                <label class="profile-page__field">
                    "Senha atual"
                    <input
                        type="password"
                        prop:value=move || senha_atual.get()
                        on:input=move |ev| senha_atual.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-page__field">
                    "Nova senha"
                    <input
                        type="password"
                        prop:value=move || nova_senha.get()
                        on:input=move |ev| nova_senha.set(event_target_value(&ev))
                    />
                </label>
                <label class="profile-page__field">
                    "Confirmar nova senha"
                    <input
                        type="password"
                        prop:value=move || confirmacao.get()
                        on:input=move |ev| confirmacao.set(event_target_value(&ev))
                    />
                </label>

                <Show when=move || erro_senha.get().is_some()>
                    <span class="field-error">{move || erro_senha.get().unwrap_or_default()}</span>
                </Show>

                <button class="btn" on:click=move |_| on_change_password.run(())>
                    "Alterar senha"
                </button>
            </section>

            <section class="profile-page__section profile-page__section--danger">
                <h2>"Excluir conta"</h2>
                <p>"Remove sua conta e todos os dados. Esta ação é permanente."</p>
                <button class="btn btn--danger" on:click=move |_| confirm_delete.set(true)>
                    "Excluir minha conta"
                </button>
            </section>

            <Show when=move || confirm_delete.get()>
                <ConfirmDialog
                    title="Excluir conta"
                    message="Todos os seus dados serão removidos permanentemente. Continuar?"
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| confirm_delete.set(false))
                />
            </Show>
        </div>
    }
}
