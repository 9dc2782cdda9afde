//! Wire types for the FluxVision REST API.
//!
//! Field names mirror the backend's (Portuguese) JSON schema directly so
//! no rename attributes are needed. Server-owned records are treated as
//! opaque: optional fields default instead of failing deserialization.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authenticated user record as returned by `/auth/me` and login.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Usuario {
    pub id: Uuid,
    pub nome: Option<String>,
    pub email: Option<String>,
    pub telefone: Option<String>,
    pub pais_id: Option<i32>,
    pub bio: Option<String>,
    pub cidade: Option<String>,
    pub idioma: Option<String>,
    pub timezone: Option<String>,
    pub verificado: bool,
    pub ativo: bool,
    pub moeda_padrao: Option<String>,
    pub simbolo_moeda: Option<String>,
    pub ultimo_login: Option<String>,
    pub created_at: Option<String>,
}

/// `POST /auth/login` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub user: Usuario,
}

/// `POST /auth/register` payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NovoUsuario {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub telefone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pais_id: Option<i32>,
}

/// `PUT /auth/perfil` payload; only set fields are sent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PerfilUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idioma: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pais_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moeda_padrao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simbolo_moeda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

/// Transaction kind. The wire values are lowercase Portuguese.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoTransacao {
    #[default]
    Receita,
    Despesa,
}

impl TipoTransacao {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Receita => "Receita",
            Self::Despesa => "Despesa",
        }
    }

    /// Wire value, also used for `<select>` options.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Receita => "receita",
            Self::Despesa => "despesa",
        }
    }
}

/// Income/expense category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: Uuid,
    pub nome: String,
    pub tipo: TipoTransacao,
    #[serde(default)]
    pub cor: Option<String>,
    #[serde(default)]
    pub icone: Option<String>,
    #[serde(default)]
    pub padrao: bool,
    #[serde(default)]
    pub ativo: bool,
}

/// `POST /configuracoes/categorias` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NovaCategoria {
    pub nome: String,
    pub tipo: TipoTransacao,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icone: Option<String>,
}

/// Work platform (ride-hailing/delivery app the driver earns through).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plataforma {
    pub id: Uuid,
    pub nome: String,
    /// `delivery`, `driver`, or `outro`; opaque to the client.
    pub tipo: String,
    #[serde(default)]
    pub cor: Option<String>,
    #[serde(default)]
    pub comissao_percentual: Option<f64>,
    #[serde(default)]
    pub ativo: bool,
}

/// `POST /configuracoes/plataformas` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NovaPlataforma {
    pub nome: String,
    pub tipo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comissao_percentual: Option<f64>,
}

/// Payment means (cash, app wallet, card...).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeioPagamento {
    pub id: Uuid,
    pub nome: String,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default)]
    pub ativo: bool,
}

/// `POST /configuracoes/meios-pagamento` payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NovoMeioPagamento {
    pub nome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
}

/// A recorded transaction, with its lookups embedded by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transacao {
    pub id: Uuid,
    pub tipo: TipoTransacao,
    pub valor: f64,
    pub descricao: Option<String>,
    pub categoria: Option<Categoria>,
    pub plataforma: Option<Plataforma>,
    pub meio_pagamento: Option<MeioPagamento>,
    pub km_percorridos: Option<f64>,
    pub litros_combustivel: Option<f64>,
    pub preco_combustivel: Option<f64>,
    /// ISO `AAAA-MM-DD`; kept as a string, compared lexicographically.
    pub data_transacao: Option<String>,
    pub hora_transacao: Option<String>,
    pub localizacao: Option<String>,
    pub observacoes: Option<String>,
    pub created_at: Option<String>,
}

/// Create/update payload for a transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NovaTransacao {
    pub tipo: TipoTransacao,
    pub valor: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descricao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categoria_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plataforma_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meio_pagamento_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km_percorridos: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub litros_combustivel: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preco_combustivel: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_transacao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hora_transacao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizacao: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observacoes: Option<String>,
}

/// Country row for the registration/profile selects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pais {
    pub id: i32,
    pub nome: String,
    #[serde(default)]
    pub codigo: Option<String>,
    #[serde(default)]
    pub codigo_telefone: Option<String>,
    #[serde(default)]
    pub regiao: Option<String>,
}

/// `GET /dashboard/stats` aggregate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardStats {
    pub total_receitas: f64,
    pub total_despesas: f64,
    pub saldo: f64,
    pub total_km: f64,
    pub valor_por_km: f64,
    pub receitas_mes_atual: f64,
    pub despesas_mes_atual: f64,
    pub transacoes_recentes: Vec<Transacao>,
}

/// One row of `GET /dashboard/grafico-mensal`; the endpoint answers with
/// an array of these, oldest month first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraficoMensalRow {
    /// Month label, e.g. `Jan/25`.
    pub mes: String,
    pub receitas: f64,
    pub despesas: f64,
    pub saldo: f64,
    pub km_total: f64,
}

/// One row of `GET /dashboard/resumo-categorias`.
///
/// The backend labels the category name `name` on this endpoint only.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumoCategoria {
    pub name: String,
    pub valor: f64,
    pub cor: Option<String>,
}

/// One row of `GET /dashboard/resumo-plataformas`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumoPlataforma {
    pub nome: String,
    pub cor: Option<String>,
    pub receita: f64,
    pub km: f64,
    pub corridas: i64,
    pub valor_por_km: f64,
    /// Share of total earnings, in percent.
    pub participacao: f64,
}

/// User preferences blob (`/configuracoes/usuario`). All fields optional;
/// only set fields are sent on update.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfiguracaoUsuario {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nome_empresa: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuso_horario: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moeda: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_mensal_receita: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_mensal_despesa: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alerta_limite_gasto: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limite_gasto_diario: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preco_combustivel: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notif_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notif_sms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alertas_meta: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relatorios_semanais: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formato_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primeiro_dia_semana: Option<i32>,
}
