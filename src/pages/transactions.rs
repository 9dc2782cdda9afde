//! Transactions page: list, client-side filtering, text search, CRUD.

use leptos::prelude::*;
use uuid::Uuid;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::transaction_form::TransactionForm;
use crate::net::dashboard::PeriodoQuery;
use crate::net::types::{Categoria, Plataforma, TipoTransacao, Transacao};
use crate::state::filters::FiltroTransacoes;
use crate::util::format;

async fn load_transacoes(busca: String) -> Vec<Transacao> {
    let result = if busca.trim().is_empty() {
        crate::net::transactions::listar(&PeriodoQuery::default()).await
    } else {
        crate::net::transactions::buscar(busca.trim()).await
    };
    result.unwrap_or_default()
}

async fn load_filter_lookups() -> (Vec<Categoria>, Vec<Plataforma>) {
    #[cfg(feature = "hydrate")]
    {
        let (categorias, plataformas) = futures::join!(
            crate::net::settings::listar_categorias(),
            crate::net::settings::listar_plataformas(),
        );
        (
            categorias.unwrap_or_default(),
            plataformas.unwrap_or_default(),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        (Vec::new(), Vec::new())
    }
}

/// Transactions page.
///
/// The list is fetched once (or per text search) and filtered locally;
/// the filter predicates live in [`FiltroTransacoes`].
#[component]
pub fn TransacoesPage() -> impl IntoView {
    let busca = RwSignal::new(String::new());
    let busca_ativa = RwSignal::new(String::new());
    let filtro = RwSignal::new(FiltroTransacoes::default());

    let transacoes = LocalResource::new(move || load_transacoes(busca_ativa.get()));
    let lookups = LocalResource::new(load_filter_lookups);

    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(Option::<Transacao>::None);
    let deleting = RwSignal::new(Option::<Transacao>::None);

    let on_new = move |_| {
        editing.set(None);
        show_form.set(true);
    };

    let on_saved = Callback::new(move |()| {
        show_form.set(false);
        editing.set(None);
        transacoes.refetch();
    });

    let on_cancel_form = Callback::new(move |()| {
        show_form.set(false);
        editing.set(None);
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(alvo) = deleting.get() else {
            return;
        };
        deleting.set(None);
        leptos::task::spawn_local(async move {
            if crate::net::transactions::deletar(alvo.id).await.is_ok() {
                transacoes.refetch();
            }
        });
    });

    let on_cancel_delete = Callback::new(move |()| deleting.set(None));

    let set_uuid_filter = move |raw: String, apply: fn(&mut FiltroTransacoes, Option<Uuid>)| {
        filtro.update(|f| apply(f, Uuid::parse_str(&raw).ok()));
    };

    view! {
        <div class="transactions-page">
            <header class="transactions-page__header">
                <h1>"Transações"</h1>
                <button class="btn btn--primary" on:click=on_new>
                    "+ Nova Transação"
                </button>
            </header>

            <div class="transactions-page__search">
                <input
                    type="search"
                    placeholder="Buscar por texto..."
                    prop:value=move || busca.get()
                    on:input=move |ev| busca.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            busca_ativa.set(busca.get());
                        }
                    }
                />
                <button class="btn" on:click=move |_| busca_ativa.set(busca.get())>
                    "Buscar"
                </button>
            </div>

            <div class="transactions-page__filters">
                <label>
                    "Tipo"
                    <select on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        filtro
                            .update(|f| {
                                f.tipo = match raw.as_str() {
                                    "receita" => Some(TipoTransacao::Receita),
                                    "despesa" => Some(TipoTransacao::Despesa),
                                    _ => None,
                                };
                            });
                    }>
                        <option value="">"Todos"</option>
                        <option value="receita">"Receitas"</option>
                        <option value="despesa">"Despesas"</option>
                    </select>
                </label>

                <Suspense fallback=|| ()>
                    {move || {
                        lookups
                            .get()
                            .map(|(categorias, plataformas)| {
                                view! {
                                    <label>
                                        "Categoria"
                                        <select on:change=move |ev| {
                                            set_uuid_filter(
                                                event_target_value(&ev),
                                                |f, id| f.categoria_id = id,
                                            );
                                        }>
                                            <option value="">"Todas"</option>
                                            {categorias
                                                .iter()
                                                .map(|c| {
                                                    view! {
                                                        <option value=c.id.to_string()>{c.nome.clone()}</option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>
                                    <label>
                                        "Plataforma"
                                        <select on:change=move |ev| {
                                            set_uuid_filter(
                                                event_target_value(&ev),
                                                |f, id| f.plataforma_id = id,
                                            );
                                        }>
                                            <option value="">"Todas"</option>
                                            {plataformas
                                                .iter()
                                                .map(|p| {
                                                    view! {
                                                        <option value=p.id.to_string()>{p.nome.clone()}</option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>
                                }
                            })
                    }}
                </Suspense>

                <label>
                    "De"
                    <input
                        type="date"
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            filtro
                                .update(|f| {
                                    f.data_inicio = Some(raw).filter(|d| !d.is_empty());
                                });
                        }
                    />
                </label>
                <label>
                    "Até"
                    <input
                        type="date"
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            filtro.update(|f| f.data_fim = Some(raw).filter(|d| !d.is_empty()));
                        }
                    />
                </label>
            </div>

            <Suspense fallback=move || view! { <p>"Carregando transações..."</p> }>
                {move || {
                    transacoes
                        .get()
                        .map(|lista| {
                            let visiveis = filtro.get().aplicar(&lista);
                            if visiveis.is_empty() {
                                view! { <p>"Nenhuma transação encontrada."</p> }.into_any()
                            } else {
                                view! {
                                    <table class="transactions-table">
                                        <thead>
                                            <tr>
                                                <th>"Data"</th>
                                                <th>"Descrição"</th>
                                                <th>"Categoria"</th>
                                                <th>"Plataforma"</th>
                                                <th>"Valor"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {visiveis
                                                .into_iter()
                                                .map(|t| {
                                                    let para_editar = t.clone();
                                                    let para_excluir = t.clone();
                                                    let valor_class = match t.tipo {
                                                        TipoTransacao::Receita => {
                                                            "transactions-table__valor--receita"
                                                        }
                                                        TipoTransacao::Despesa => {
                                                            "transactions-table__valor--despesa"
                                                        }
                                                    };
                                                    view! {
                                                        <tr>
                                                            <td>
                                                                {t
                                                                    .data_transacao
                                                                    .as_deref()
                                                                    .map(format::date_br)
                                                                    .unwrap_or_default()}
                                                            </td>
                                                            <td>{t.descricao.clone().unwrap_or_default()}</td>
                                                            <td>
                                                                {t
                                                                    .categoria
                                                                    .as_ref()
                                                                    .map(|c| c.nome.clone())
                                                                    .unwrap_or_default()}
                                                            </td>
                                                            <td>
                                                                {t
                                                                    .plataforma
                                                                    .as_ref()
                                                                    .map(|p| p.nome.clone())
                                                                    .unwrap_or_default()}
                                                            </td>
                                                            <td class=valor_class>{format::currency(t.valor)}</td>
                                                            <td class="transactions-table__actions">
                                                                <button
                                                                    class="btn btn--ghost"
                                                                    on:click=move |_| {
                                                                        editing.set(Some(para_editar.clone()));
                                                                        show_form.set(true);
                                                                    }
                                                                >
                                                                    "Editar"
                                                                </button>
                                                                <button
                                                                    class="btn btn--ghost"
                                                                    on:click=move |_| deleting.set(Some(para_excluir.clone()))
                                                                >
                                                                    "Excluir"
                                                                </button>
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>

            <Show when=move || show_form.get()>
                <TransactionForm
                    editing=editing.get()
                    on_saved=on_saved
                    on_cancel=on_cancel_form
                />
            </Show>

            <Show when=move || deleting.get().is_some()>
                <ConfirmDialog
                    title="Excluir transação"
                    message="Esta ação não pode ser desfeita. Excluir mesmo assim?"
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </div>
    }
}
