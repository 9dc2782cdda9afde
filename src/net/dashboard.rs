//! Dashboard aggregate endpoints. All four accept an optional date range.

use super::api::{self, ApiError};
use super::types::{DashboardStats, GraficoMensalRow, ResumoCategoria, ResumoPlataforma};

/// Optional `data_inicio`/`data_fim` query pair (ISO `AAAA-MM-DD`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodoQuery {
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}

impl PeriodoQuery {
    /// Query parameters for the set bounds only.
    pub fn as_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(inicio) = &self.data_inicio {
            query.push(("data_inicio", inicio.clone()));
        }
        if let Some(fim) = &self.data_fim {
            query.push(("data_fim", fim.clone()));
        }
        query
    }
}

/// `GET /dashboard/stats`.
pub async fn stats(periodo: &PeriodoQuery) -> Result<DashboardStats, ApiError> {
    api::get_json("/dashboard/stats", &periodo.as_query()).await
}

/// `GET /dashboard/grafico-mensal` — one row per month, oldest first.
pub async fn grafico_mensal(periodo: &PeriodoQuery) -> Result<Vec<GraficoMensalRow>, ApiError> {
    api::get_json("/dashboard/grafico-mensal", &periodo.as_query()).await
}

/// `GET /dashboard/resumo-categorias`.
pub async fn resumo_categorias(periodo: &PeriodoQuery) -> Result<Vec<ResumoCategoria>, ApiError> {
    api::get_json("/dashboard/resumo-categorias", &periodo.as_query()).await
}

/// `GET /dashboard/resumo-plataformas`.
pub async fn resumo_plataformas(
    periodo: &PeriodoQuery,
) -> Result<Vec<ResumoPlataforma>, ApiError> {
    api::get_json("/dashboard/resumo-plataformas", &periodo.as_query()).await
}
