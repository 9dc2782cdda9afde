//! Configuration endpoints: categories, platforms, payment means, user
//! preferences, and the country list.

use serde_json::Value;
use uuid::Uuid;

use super::api::{self, ApiError};
use super::types::{
    Categoria, ConfiguracaoUsuario, MeioPagamento, NovaCategoria, NovaPlataforma,
    NovoMeioPagamento, Pais, Plataforma,
};

// ---- Categorias ----

/// `GET /configuracoes/categorias`.
pub async fn listar_categorias() -> Result<Vec<Categoria>, ApiError> {
    api::get_json("/configuracoes/categorias", &[]).await
}

/// `GET /configuracoes/categorias/ativas` — active-only list for selects.
pub async fn listar_categorias_ativas() -> Result<Vec<Categoria>, ApiError> {
    api::get_json("/configuracoes/categorias/ativas", &[]).await
}

/// `POST /configuracoes/categorias`.
pub async fn criar_categoria(nova: &NovaCategoria) -> Result<Categoria, ApiError> {
    api::post_json("/configuracoes/categorias", nova).await
}

/// `PUT /configuracoes/categorias/{id}`.
pub async fn atualizar_categoria(id: Uuid, dados: &NovaCategoria) -> Result<Categoria, ApiError> {
    api::put_json(&format!("/configuracoes/categorias/{id}"), dados).await
}

/// `DELETE /configuracoes/categorias/{id}`.
pub async fn deletar_categoria(id: Uuid) -> Result<Value, ApiError> {
    api::delete_json(&format!("/configuracoes/categorias/{id}")).await
}

// ---- Plataformas ----

/// `GET /configuracoes/plataformas`.
pub async fn listar_plataformas() -> Result<Vec<Plataforma>, ApiError> {
    api::get_json("/configuracoes/plataformas", &[]).await
}

/// `GET /configuracoes/plataformas/ativas`.
pub async fn listar_plataformas_ativas() -> Result<Vec<Plataforma>, ApiError> {
    api::get_json("/configuracoes/plataformas/ativas", &[]).await
}

/// `POST /configuracoes/plataformas`.
pub async fn criar_plataforma(nova: &NovaPlataforma) -> Result<Plataforma, ApiError> {
    api::post_json("/configuracoes/plataformas", nova).await
}

/// `PUT /configuracoes/plataformas/{id}`.
pub async fn atualizar_plataforma(
    id: Uuid,
    dados: &NovaPlataforma,
) -> Result<Plataforma, ApiError> {
    api::put_json(&format!("/configuracoes/plataformas/{id}"), dados).await
}

/// `DELETE /configuracoes/plataformas/{id}`.
pub async fn deletar_plataforma(id: Uuid) -> Result<Value, ApiError> {
    api::delete_json(&format!("/configuracoes/plataformas/{id}")).await
}

// ---- Meios de pagamento ----

/// `GET /configuracoes/meios-pagamento`.
pub async fn listar_meios_pagamento() -> Result<Vec<MeioPagamento>, ApiError> {
    api::get_json("/configuracoes/meios-pagamento", &[]).await
}

/// `GET /configuracoes/meios-pagamento/ativos`.
pub async fn listar_meios_pagamento_ativos() -> Result<Vec<MeioPagamento>, ApiError> {
    api::get_json("/configuracoes/meios-pagamento/ativos", &[]).await
}

/// `POST /configuracoes/meios-pagamento`.
pub async fn criar_meio_pagamento(novo: &NovoMeioPagamento) -> Result<MeioPagamento, ApiError> {
    api::post_json("/configuracoes/meios-pagamento", novo).await
}

/// `PUT /configuracoes/meios-pagamento/{id}`.
pub async fn atualizar_meio_pagamento(
    id: Uuid,
    dados: &NovoMeioPagamento,
) -> Result<MeioPagamento, ApiError> {
    api::put_json(&format!("/configuracoes/meios-pagamento/{id}"), dados).await
}

/// `DELETE /configuracoes/meios-pagamento/{id}`.
pub async fn deletar_meio_pagamento(id: Uuid) -> Result<Value, ApiError> {
    api::delete_json(&format!("/configuracoes/meios-pagamento/{id}")).await
}

// ---- Preferências e países ----

/// `GET /configuracoes/usuario`.
pub async fn obter_configuracoes() -> Result<ConfiguracaoUsuario, ApiError> {
    api::get_json("/configuracoes/usuario", &[]).await
}

/// `PUT /configuracoes/usuario`.
pub async fn atualizar_configuracoes(
    config: &ConfiguracaoUsuario,
) -> Result<ConfiguracaoUsuario, ApiError> {
    api::put_json("/configuracoes/usuario", config).await
}

/// `GET /configuracoes/paises`.
pub async fn listar_paises() -> Result<Vec<Pais>, ApiError> {
    api::get_json("/configuracoes/paises", &[]).await
}
