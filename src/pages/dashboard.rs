//! Dashboard page: stat cards, monthly trend, category and platform
//! summaries, recent transactions.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::dashboard::PeriodoQuery;
use crate::net::types::{DashboardStats, GraficoMensalRow, ResumoCategoria, ResumoPlataforma};
use crate::util::format;

/// The four dashboard aggregates, fetched concurrently.
#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    stats: DashboardStats,
    grafico: Vec<GraficoMensalRow>,
    categorias: Vec<ResumoCategoria>,
    plataformas: Vec<ResumoPlataforma>,
}

/// Fire all four fetches, await them together. If any fails the whole
/// load is treated as failed and the empty fallback is shown.
async fn load_dashboard(periodo: PeriodoQuery) -> Option<DashboardData> {
    #[cfg(feature = "hydrate")]
    {
        let (stats, grafico, categorias, plataformas) = futures::join!(
            crate::net::dashboard::stats(&periodo),
            crate::net::dashboard::grafico_mensal(&periodo),
            crate::net::dashboard::resumo_categorias(&periodo),
            crate::net::dashboard::resumo_plataformas(&periodo),
        );
        Some(DashboardData {
            stats: stats.ok()?,
            grafico: grafico.ok()?,
            categorias: categorias.ok()?,
            plataformas: plataformas.ok()?,
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = periodo;
        None
    }
}

/// Dashboard page with an optional date-range filter.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let data_inicio = RwSignal::new(String::new());
    let data_fim = RwSignal::new(String::new());

    let dados = LocalResource::new(move || {
        let periodo = PeriodoQuery {
            data_inicio: Some(data_inicio.get()).filter(|d| !d.is_empty()),
            data_fim: Some(data_fim.get()).filter(|d| !d.is_empty()),
        };
        load_dashboard(periodo)
    });

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <div class="dashboard-page__filters">
                    <label>
                        "De"
                        <input
                            type="date"
                            prop:value=move || data_inicio.get()
                            on:input=move |ev| data_inicio.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Até"
                        <input
                            type="date"
                            prop:value=move || data_fim.get()
                            on:input=move |ev| data_fim.set(event_target_value(&ev))
                        />
                    </label>
                </div>
            </header>

            <Suspense fallback=move || view! { <p>"Carregando dashboard..."</p> }>
                {move || {
                    dados
                        .get()
                        .map(|carga| match carga {
                            Some(d) => view! { <DashboardBody dados=d/> }.into_any(),
                            None => {
                                view! {
                                    <p class="dashboard-page__empty">
                                        "Não foi possível carregar os dados."
                                    </p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn DashboardBody(dados: DashboardData) -> impl IntoView {
    let stats = dados.stats.clone();
    let max_mensal = dados
        .grafico
        .iter()
        .fold(0.0_f64, |acc, mes| acc.max(mes.receitas).max(mes.despesas))
        .max(1.0);

    let barras = dados
        .grafico
        .iter()
        .map(|mes| {
            view! {
                <div class="chart__group">
                    <div
                        class="chart__bar chart__bar--receita"
                        style=format!("height: {:.0}%", mes.receitas / max_mensal * 100.0)
                        title=format::currency(mes.receitas)
                    ></div>
                    <div
                        class="chart__bar chart__bar--despesa"
                        style=format!("height: {:.0}%", mes.despesas / max_mensal * 100.0)
                        title=format::currency(mes.despesas)
                    ></div>
                    <span class="chart__label">{mes.mes.clone()}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-page__cards">
            <StatCard label="Saldo" value=format::currency(stats.saldo) accent="saldo"/>
            <StatCard
                label="Receitas"
                value=format::currency(stats.total_receitas)
                accent="receita"
            />
            <StatCard
                label="Despesas"
                value=format::currency(stats.total_despesas)
                accent="despesa"
            />
            <StatCard label="KM rodados" value=format::km(stats.total_km)/>
            <StatCard label="R$ por km" value=format::currency(stats.valor_por_km)/>
        </div>

        <section class="dashboard-page__section">
            <h2>"Evolução mensal"</h2>
            <div class="chart">{barras}</div>
        </section>

        <div class="dashboard-page__columns">
            <section class="dashboard-page__section">
                <h2>"Por categoria"</h2>
                <ul class="summary-list">
                    {dados
                        .categorias
                        .iter()
                        .map(|c: &ResumoCategoria| {
                            view! {
                                <li class="summary-list__item">
                                    <span
                                        class="summary-list__dot"
                                        style=format!(
                                            "background: {}",
                                            c.cor.clone().unwrap_or_else(|| "#007bff".to_owned()),
                                        )
                                    ></span>
                                    <span class="summary-list__name">{c.name.clone()}</span>
                                    <span class="summary-list__value">
                                        {format::currency(c.valor)}
                                    </span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </section>

            <section class="dashboard-page__section">
                <h2>"Por plataforma"</h2>
                <table class="platform-table">
                    <thead>
                        <tr>
                            <th>"Plataforma"</th>
                            <th>"Receita"</th>
                            <th>"KM"</th>
                            <th>"R$/km"</th>
                            <th>"Participação"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {dados
                            .plataformas
                            .iter()
                            .map(|p: &ResumoPlataforma| {
                                view! {
                                    <tr>
                                        <td>{p.nome.clone()}</td>
                                        <td>{format::currency(p.receita)}</td>
                                        <td>{format::km(p.km)}</td>
                                        <td>{format::currency(p.valor_por_km)}</td>
                                        <td>{format!("{:.1}%", p.participacao)}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </section>
        </div>

        <section class="dashboard-page__section">
            <h2>"Transações recentes"</h2>
            <ul class="summary-list">
                {stats
                    .transacoes_recentes
                    .iter()
                    .map(|t| {
                        let data = t
                            .data_transacao
                            .as_deref()
                            .map(format::date_br)
                            .unwrap_or_default();
                        view! {
                            <li class="summary-list__item">
                                <span class="summary-list__name">
                                    {t.descricao.clone().unwrap_or_else(|| t.tipo.label().to_owned())}
                                </span>
                                <span class="summary-list__date">{data}</span>
                                <span class="summary-list__value">{format::currency(t.valor)}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
