//! Create/edit transaction modal.

use leptos::prelude::*;
use uuid::Uuid;

use crate::net::types::{
    Categoria, MeioPagamento, NovaTransacao, Plataforma, TipoTransacao, Transacao,
};
use crate::util::validate;

/// The three option lists the form's selects need, fetched together.
#[derive(Clone, Debug, Default)]
struct FormLookups {
    categorias: Vec<Categoria>,
    plataformas: Vec<Plataforma>,
    meios: Vec<MeioPagamento>,
}

async fn load_lookups() -> FormLookups {
    #[cfg(feature = "hydrate")]
    {
        let (categorias, plataformas, meios) = futures::join!(
            crate::net::settings::listar_categorias_ativas(),
            crate::net::settings::listar_plataformas_ativas(),
            crate::net::settings::listar_meios_pagamento_ativos(),
        );
        FormLookups {
            categorias: categorias.unwrap_or_default(),
            plataformas: plataformas.unwrap_or_default(),
            meios: meios.unwrap_or_default(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FormLookups::default()
    }
}

/// Today's date in ISO form, for the date field default.
fn today_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new_0();
        format!(
            "{:04}-{:02}-{:02}",
            date.get_full_year(),
            date.get_month() + 1,
            date.get_date()
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Parse a pt-BR decimal input (`52,50` or `52.50`).
fn parse_valor(raw: &str) -> Option<f64> {
    raw.trim().replace(',', ".").parse::<f64>().ok()
}

fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Modal form for creating or editing a transaction.
///
/// `on_saved` runs only after the server accepted the payload; on
/// failure the form stays open and editable (the interceptor already
/// surfaced the error).
#[component]
pub fn TransactionForm(
    editing: Option<Transacao>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let editing_id = editing.as_ref().map(|t| t.id);
    let titulo = if editing.is_some() {
        "Editar Transação"
    } else {
        "Nova Transação"
    };

    let tipo = RwSignal::new(
        editing
            .as_ref()
            .map_or(TipoTransacao::Receita, |t| t.tipo)
            .as_str()
            .to_owned(),
    );
    let valor = RwSignal::new(
        editing
            .as_ref()
            .map(|t| format!("{:.2}", t.valor).replace('.', ","))
            .unwrap_or_default(),
    );
    let descricao = RwSignal::new(
        editing
            .as_ref()
            .and_then(|t| t.descricao.clone())
            .unwrap_or_default(),
    );
    let categoria_id = RwSignal::new(
        editing
            .as_ref()
            .and_then(|t| t.categoria.as_ref())
            .map(|c| c.id.to_string())
            .unwrap_or_default(),
    );
    let plataforma_id = RwSignal::new(
        editing
            .as_ref()
            .and_then(|t| t.plataforma.as_ref())
            .map(|p| p.id.to_string())
            .unwrap_or_default(),
    );
    let meio_pagamento_id = RwSignal::new(
        editing
            .as_ref()
            .and_then(|t| t.meio_pagamento.as_ref())
            .map(|m| m.id.to_string())
            .unwrap_or_default(),
    );
    let km = RwSignal::new(
        editing
            .as_ref()
            .and_then(|t| t.km_percorridos)
            .map(|v| format!("{v}"))
            .unwrap_or_default(),
    );
    let data = RwSignal::new(
        editing
            .as_ref()
            .and_then(|t| t.data_transacao.clone())
            .unwrap_or_else(today_iso),
    );
    let observacoes = RwSignal::new(
        editing
            .as_ref()
            .and_then(|t| t.observacoes.clone())
            .unwrap_or_default(),
    );

    let erro_valor = RwSignal::new(Option::<&'static str>::None);
    let saving = RwSignal::new(false);

    let lookups = LocalResource::new(load_lookups);

    let submit = Callback::new(move |()| {
        let parsed = parse_valor(&valor.get());
        match parsed {
            Some(v) if v > 0.0 => erro_valor.set(None),
            _ => {
                erro_valor.set(Some("Informe um valor maior que zero"));
                return;
            }
        }

        let payload = NovaTransacao {
            tipo: if tipo.get() == "despesa" {
                TipoTransacao::Despesa
            } else {
                TipoTransacao::Receita
            },
            valor: parsed.unwrap_or_default(),
            descricao: Some(descricao.get())
                .filter(|d| validate::required(d))
                .map(|d| d.trim().to_owned()),
            categoria_id: parse_id(&categoria_id.get()),
            plataforma_id: parse_id(&plataforma_id.get()),
            meio_pagamento_id: parse_id(&meio_pagamento_id.get()),
            km_percorridos: parse_valor(&km.get()),
            data_transacao: Some(data.get()).filter(|d| !d.is_empty()),
            observacoes: Some(observacoes.get())
                .filter(|o| validate::required(o))
                .map(|o| o.trim().to_owned()),
            ..NovaTransacao::default()
        };

        saving.set(true);
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => crate::net::transactions::atualizar(id, &payload).await.map(|_| ()),
                None => crate::net::transactions::criar(&payload).await.map(|_| ()),
            };
            saving.set(false);
            // Close only on success; a failed save keeps the form open.
            if result.is_ok() {
                on_saved.run(());
            }
        });
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{titulo}</h2>

                <label class="dialog__label">
                    "Tipo"
                    <select
                        class="dialog__input"
                        prop:value=move || tipo.get()
                        on:change=move |ev| tipo.set(event_target_value(&ev))
                    >
                        <option value="receita">"Receita"</option>
                        <option value="despesa">"Despesa"</option>
                    </select>
                </label>

                <label class="dialog__label">
                    "Valor (R$)"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || valor.get()
                        on:input=move |ev| valor.set(event_target_value(&ev))
                    />
                    <Show when=move || erro_valor.get().is_some()>
                        <span class="field-error">{move || erro_valor.get().unwrap_or_default()}</span>
                    </Show>
                </label>

                <label class="dialog__label">
                    "Descrição"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || descricao.get()
                        on:input=move |ev| descricao.set(event_target_value(&ev))
                    />
                </label>

                <Suspense fallback=move || view! { <p>"Carregando opções..."</p> }>
                    {move || {
                        lookups
                            .get()
                            .map(|l| {
                                view! {
                                    <label class="dialog__label">
                                        "Categoria"
                                        <select
                                            class="dialog__input"
                                            prop:value=move || categoria_id.get()
                                            on:change=move |ev| categoria_id.set(event_target_value(&ev))
                                        >
                                            <option value="">"Sem categoria"</option>
                                            {l.categorias
                                                .iter()
                                                .map(|c| {
                                                    view! {
                                                        <option value=c.id.to_string()>{c.nome.clone()}</option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>
                                    <label class="dialog__label">
                                        "Plataforma"
                                        <select
                                            class="dialog__input"
                                            prop:value=move || plataforma_id.get()
                                            on:change=move |ev| plataforma_id.set(event_target_value(&ev))
                                        >
                                            <option value="">"Sem plataforma"</option>
                                            {l.plataformas
                                                .iter()
                                                .map(|p| {
                                                    view! {
                                                        <option value=p.id.to_string()>{p.nome.clone()}</option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>
                                    <label class="dialog__label">
                                        "Meio de pagamento"
                                        <select
                                            class="dialog__input"
                                            prop:value=move || meio_pagamento_id.get()
                                            on:change=move |ev| meio_pagamento_id.set(event_target_value(&ev))
                                        >
                                            <option value="">"Não informado"</option>
                                            {l.meios
                                                .iter()
                                                .map(|m| {
                                                    view! {
                                                        <option value=m.id.to_string()>{m.nome.clone()}</option>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </select>
                                    </label>
                                }
                            })
                    }}
                </Suspense>

                <label class="dialog__label">
                    "KM percorridos"
                    <input
                        class="dialog__input"
                        type="text"
                        inputmode="decimal"
                        prop:value=move || km.get()
                        on:input=move |ev| km.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Data"
                    <input
                        class="dialog__input"
                        type="date"
                        prop:value=move || data.get()
                        on:input=move |ev| data.set(event_target_value(&ev))
                    />
                </label>

                <label class="dialog__label">
                    "Observações"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || observacoes.get()
                        on:input=move |ev| observacoes.set(event_target_value(&ev))
                    />
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || saving.get()
                        on:click=move |_| submit.run(())
                    >
                        {move || if saving.get() { "Salvando..." } else { "Salvar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
