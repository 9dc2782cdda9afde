//! Settings page: categories, platforms, payment means, preferences.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::{
    Categoria, ConfiguracaoUsuario, MeioPagamento, NovaCategoria, NovaPlataforma,
    NovoMeioPagamento, Plataforma, TipoTransacao,
};
use crate::state::toast::ToastState;
use crate::util::validate;

/// Tabs available on the settings page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum SettingsTab {
    #[default]
    Categorias,
    Plataformas,
    MeiosPagamento,
    Preferencias,
}

/// Settings page with tab switching.
#[component]
pub fn ConfiguracoesPage() -> impl IntoView {
    let tab = RwSignal::new(SettingsTab::default());

    let tab_button = move |alvo: SettingsTab, label: &'static str| {
        view! {
            <button
                class="settings-page__tab"
                class:settings-page__tab--active=move || tab.get() == alvo
                on:click=move |_| tab.set(alvo)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="settings-page">
            <h1>"Configurações"</h1>

            <div class="settings-page__tabs">
                {tab_button(SettingsTab::Categorias, "Categorias")}
                {tab_button(SettingsTab::Plataformas, "Plataformas")}
                {tab_button(SettingsTab::MeiosPagamento, "Meios de pagamento")}
                {tab_button(SettingsTab::Preferencias, "Preferências")}
            </div>

            {move || match tab.get() {
                SettingsTab::Categorias => view! { <CategoriasTab/> }.into_any(),
                SettingsTab::Plataformas => view! { <PlataformasTab/> }.into_any(),
                SettingsTab::MeiosPagamento => view! { <MeiosPagamentoTab/> }.into_any(),
                SettingsTab::Preferencias => view! { <PreferenciasTab/> }.into_any(),
            }}
        </div>
    }
}

// =============================================================
// Categorias
// =============================================================

async fn load_categorias() -> Vec<Categoria> {
    crate::net::settings::listar_categorias().await.unwrap_or_default()
}

#[component]
fn CategoriasTab() -> impl IntoView {
    let categorias = LocalResource::new(|| load_categorias());

    let nome = RwSignal::new(String::new());
    let tipo = RwSignal::new("receita".to_owned());
    let erro = RwSignal::new(Option::<&'static str>::None);
    let deleting = RwSignal::new(Option::<Categoria>::None);

    let on_create = Callback::new(move |()| {
        if !validate::required(&nome.get()) {
            erro.set(Some("Informe o nome da categoria"));
            return;
        }
        erro.set(None);

        let nova = NovaCategoria {
            nome: nome.get().trim().to_owned(),
            tipo: if tipo.get() == "despesa" {
                TipoTransacao::Despesa
            } else {
                TipoTransacao::Receita
            },
            cor: None,
            icone: None,
        };
        leptos::task::spawn_local(async move {
            if crate::net::settings::criar_categoria(&nova).await.is_ok() {
                nome.set(String::new());
                categorias.refetch();
            }
        });
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(alvo) = deleting.get() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            if crate::net::settings::deletar_categoria(alvo.id).await.is_ok() {
                categorias.refetch();
            }
        });
    });

    view! {
        <section class="settings-page__section">
            <div class="settings-page__create">
                <input
                    type="text"
                    placeholder="Nova categoria"
                    prop:value=move || nome.get()
                    on:input=move |ev| nome.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || tipo.get()
                    on:change=move |ev| tipo.set(event_target_value(&ev))
                >
                    <option value="receita">"Receita"</option>
                    <option value="despesa">"Despesa"</option>
                </select>
                <button class="btn btn--primary" on:click=move |_| on_create.run(())>
                    "Adicionar"
                </button>
            </div>
            <Show when=move || erro.get().is_some()>
                <span class="field-error">{move || erro.get().unwrap_or_default()}</span>
            </Show>

            <Suspense fallback=move || view! { <p>"Carregando categorias..."</p> }>
                {move || {
                    categorias
                        .get()
                        .map(|lista| {
                            view! {
                                <ul class="settings-list">
                                    {lista
                                        .into_iter()
                                        .map(|c| {
                                            let para_excluir = c.clone();
                                            view! {
                                                <li class="settings-list__item">
                                                    <span>{c.nome.clone()}</span>
                                                    <span class="settings-list__meta">{c.tipo.label()}</span>
                                                    <button
                                                        class="btn btn--ghost"
                                                        on:click=move |_| deleting.set(Some(para_excluir.clone()))
                                                    >
                                                        "Excluir"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Suspense>

            <Show when=move || deleting.get().is_some()>
                <ConfirmDialog
                    title="Excluir categoria"
                    message="As transações existentes não serão alteradas. Excluir?"
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| deleting.set(None))
                />
            </Show>
        </section>
    }
}

// =============================================================
// Plataformas
// =============================================================

async fn load_plataformas() -> Vec<Plataforma> {
    crate::net::settings::listar_plataformas().await.unwrap_or_default()
}

#[component]
fn PlataformasTab() -> impl IntoView {
    let plataformas = LocalResource::new(|| load_plataformas());

    let nome = RwSignal::new(String::new());
    let tipo = RwSignal::new("driver".to_owned());
    let erro = RwSignal::new(Option::<&'static str>::None);
    let deleting = RwSignal::new(Option::<Plataforma>::None);

    let on_create = Callback::new(move |()| {
        if !validate::required(&nome.get()) {
            erro.set(Some("Informe o nome da plataforma"));
            return;
        }
        erro.set(None);

        let nova = NovaPlataforma {
            nome: nome.get().trim().to_owned(),
            tipo: tipo.get(),
            cor: None,
            comissao_percentual: None,
        };
        leptos::task::spawn_local(async move {
            if crate::net::settings::criar_plataforma(&nova).await.is_ok() {
                nome.set(String::new());
                plataformas.refetch();
            }
        });
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(alvo) = deleting.get() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            if crate::net::settings::deletar_plataforma(alvo.id).await.is_ok() {
                plataformas.refetch();
            }
        });
    });

    view! {
        <section class="settings-page__section">
            <div class="settings-page__create">
                <input
                    type="text"
                    placeholder="Nova plataforma"
                    prop:value=move || nome.get()
                    on:input=move |ev| nome.set(event_target_value(&ev))
                />
                <select
                    prop:value=move || tipo.get()
                    on:change=move |ev| tipo.set(event_target_value(&ev))
                >
                    <option value="driver">"Corridas"</option>
                    <option value="delivery">"Entregas"</option>
                    <option value="outro">"Outro"</option>
                </select>
                <button class="btn btn--primary" on:click=move |_| on_create.run(())>
                    "Adicionar"
                </button>
            </div>
            <Show when=move || erro.get().is_some()>
                <span class="field-error">{move || erro.get().unwrap_or_default()}</span>
            </Show>

            <Suspense fallback=move || view! { <p>"Carregando plataformas..."</p> }>
                {move || {
                    plataformas
                        .get()
                        .map(|lista| {
                            view! {
                                <ul class="settings-list">
                                    {lista
                                        .into_iter()
                                        .map(|p| {
                                            let para_excluir = p.clone();
                                            view! {
                                                <li class="settings-list__item">
                                                    <span>{p.nome.clone()}</span>
                                                    <span class="settings-list__meta">{p.tipo.clone()}</span>
                                                    <button
                                                        class="btn btn--ghost"
                                                        on:click=move |_| deleting.set(Some(para_excluir.clone()))
                                                    >
                                                        "Excluir"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Suspense>

            <Show when=move || deleting.get().is_some()>
                <ConfirmDialog
                    title="Excluir plataforma"
                    message="As transações existentes não serão alteradas. Excluir?"
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| deleting.set(None))
                />
            </Show>
        </section>
    }
}

// =============================================================
// Meios de pagamento
// =============================================================

async fn load_meios() -> Vec<MeioPagamento> {
    crate::net::settings::listar_meios_pagamento().await.unwrap_or_default()
}

#[component]
fn MeiosPagamentoTab() -> impl IntoView {
    let meios = LocalResource::new(|| load_meios());

    let nome = RwSignal::new(String::new());
    let erro = RwSignal::new(Option::<&'static str>::None);
    let deleting = RwSignal::new(Option::<Uuid>::None);

    let on_create = Callback::new(move |()| {
        if !validate::required(&nome.get()) {
            erro.set(Some("Informe o nome do meio de pagamento"));
            return;
        }
        erro.set(None);

        let novo = NovoMeioPagamento {
            nome: nome.get().trim().to_owned(),
            tipo: None,
        };
        leptos::task::spawn_local(async move {
            if crate::net::settings::criar_meio_pagamento(&novo).await.is_ok() {
                nome.set(String::new());
                meios.refetch();
            }
        });
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = deleting.get() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            if crate::net::settings::deletar_meio_pagamento(id).await.is_ok() {
                meios.refetch();
            }
        });
    });

    view! {
        <section class="settings-page__section">
            <div class="settings-page__create">
                <input
                    type="text"
                    placeholder="Novo meio de pagamento"
                    prop:value=move || nome.get()
                    on:input=move |ev| nome.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" on:click=move |_| on_create.run(())>
                    "Adicionar"
                </button>
            </div>
            <Show when=move || erro.get().is_some()>
                <span class="field-error">{move || erro.get().unwrap_or_default()}</span>
            </Show>

            <Suspense fallback=move || view! { <p>"Carregando..."</p> }>
                {move || {
                    meios
                        .get()
                        .map(|lista| {
                            view! {
                                <ul class="settings-list">
                                    {lista
                                        .into_iter()
                                        .map(|m| {
                                            let id = m.id;
                                            view! {
                                                <li class="settings-list__item">
                                                    <span>{m.nome.clone()}</span>
                                                    <button
                                                        class="btn btn--ghost"
                                                        on:click=move |_| deleting.set(Some(id))
                                                    >
                                                        "Excluir"
                                                    </button>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                        })
                }}
            </Suspense>

            <Show when=move || deleting.get().is_some()>
                <ConfirmDialog
                    title="Excluir meio de pagamento"
                    message="Excluir este meio de pagamento?"
                    on_confirm=on_confirm_delete
                    on_cancel=Callback::new(move |()| deleting.set(None))
                />
            </Show>
        </section>
    }
}

// =============================================================
// Preferências
// =============================================================

async fn load_config() -> ConfiguracaoUsuario {
    crate::net::settings::obter_configuracoes().await.unwrap_or_default()
}

#[component]
fn PreferenciasTab() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = LocalResource::new(|| load_config());

    view! {
        <Suspense fallback=move || view! { <p>"Carregando preferências..."</p> }>
            {move || {
                config.get().map(|atual| view! { <PreferenciasForm atual=atual toasts=toasts/> })
            }}
        </Suspense>
    }
}

#[component]
fn PreferenciasForm(atual: ConfiguracaoUsuario, toasts: RwSignal<ToastState>) -> impl IntoView {
    let meta_receita = RwSignal::new(
        atual
            .meta_mensal_receita
            .map(|v| format!("{v}"))
            .unwrap_or_default(),
    );
    let preco_combustivel = RwSignal::new(
        atual
            .preco_combustivel
            .map(|v| format!("{v}"))
            .unwrap_or_default(),
    );
    let notif_email = RwSignal::new(atual.notif_email.unwrap_or_default());
    let saving = RwSignal::new(false);

    let on_save = Callback::new(move |()| {
        let config = ConfiguracaoUsuario {
            meta_mensal_receita: meta_receita.get().trim().replace(',', ".").parse().ok(),
            preco_combustivel: preco_combustivel.get().trim().replace(',', ".").parse().ok(),
            notif_email: Some(notif_email.get()),
            ..ConfiguracaoUsuario::default()
        };
        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = crate::net::settings::atualizar_configuracoes(&config).await;
            saving.set(false);
            if result.is_ok() {
                toasts.update(|t| t.success("Preferências salvas!"));
            }
        });
    });

    view! {
        <section class="settings-page__section">
            <label class="settings-page__field">
                "Meta mensal de receita (R$)"
                <input
                    type="text"
                    inputmode="decimal"
                    prop:value=move || meta_receita.get()
                    on:input=move |ev| meta_receita.set(event_target_value(&ev))
                />
            </label>

            <label class="settings-page__field">
                "Preço do combustível (R$/L)"
                <input
                    type="text"
                    inputmode="decimal"
                    prop:value=move || preco_combustivel.get()
                    on:input=move |ev| preco_combustivel.set(event_target_value(&ev))
                />
            </label>

            <label class="settings-page__field settings-page__field--inline">
                <input
                    type="checkbox"
                    prop:checked=move || notif_email.get()
                    on:change=move |ev| notif_email.set(event_target_checked(&ev))
                />
                "Receber resumos por email"
            </label>

            <button
                class="btn btn--primary"
                disabled=move || saving.get()
                on:click=move |_| on_save.run(())
            >
                {move || if saving.get() { "Salvando..." } else { "Salvar preferências" }}
            </button>
        </section>
    }
}
