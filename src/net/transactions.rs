//! Transaction endpoints: list, CRUD, and text search.

use serde_json::Value;
use uuid::Uuid;

use super::api::{self, ApiError};
use super::dashboard::PeriodoQuery;
use super::types::{NovaTransacao, Transacao};

/// `GET /transacoes`, optionally bounded by a date range.
pub async fn listar(periodo: &PeriodoQuery) -> Result<Vec<Transacao>, ApiError> {
    api::get_json("/transacoes", &periodo.as_query()).await
}

/// `POST /transacoes`.
pub async fn criar(nova: &NovaTransacao) -> Result<Transacao, ApiError> {
    api::post_json("/transacoes", nova).await
}

/// `GET /transacoes/{id}`.
pub async fn obter(id: Uuid) -> Result<Transacao, ApiError> {
    api::get_json(&format!("/transacoes/{id}"), &[]).await
}

/// `PUT /transacoes/{id}`.
pub async fn atualizar(id: Uuid, dados: &NovaTransacao) -> Result<Transacao, ApiError> {
    api::put_json(&format!("/transacoes/{id}"), dados).await
}

/// `DELETE /transacoes/{id}`.
pub async fn deletar(id: Uuid) -> Result<Value, ApiError> {
    api::delete_json(&format!("/transacoes/{id}")).await
}

/// `GET /transacoes/buscar/texto?q=` — server-side free-text search.
pub async fn buscar(q: &str) -> Result<Vec<Transacao>, ApiError> {
    api::get_json("/transacoes/buscar/texto", &[("q", q.to_owned())]).await
}
