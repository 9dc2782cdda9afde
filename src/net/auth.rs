//! Authentication and account endpoints.
//!
//! One function per remote operation; each is a direct pass-through to
//! the client in [`super::api`] with no local validation or caching.

use serde_json::{Value, json};

use super::api::{self, ApiError};
use super::types::{LoginResponse, NovoUsuario, PerfilUpdate, Usuario};

/// `POST /auth/login`.
pub async fn login(email: &str, senha: &str) -> Result<LoginResponse, ApiError> {
    api::post_json("/auth/login", &json!({ "email": email, "senha": senha })).await
}

/// `POST /auth/register`. Creates the account; does not log in.
pub async fn register(dados: &NovoUsuario) -> Result<Usuario, ApiError> {
    api::post_json("/auth/register", dados).await
}

/// `GET /auth/me` — the startup session check.
pub async fn me() -> Result<Usuario, ApiError> {
    api::get_json("/auth/me", &[]).await
}

/// `POST /auth/forgot-password`.
pub async fn forgot_password(email: &str) -> Result<Value, ApiError> {
    api::post_json("/auth/forgot-password", &json!({ "email": email })).await
}

/// `POST /auth/reset-password`.
pub async fn reset_password(token: &str, nova_senha: &str) -> Result<Value, ApiError> {
    api::post_json(
        "/auth/reset-password",
        &json!({ "token": token, "nova_senha": nova_senha }),
    )
    .await
}

/// `PUT /auth/alterar-senha`.
pub async fn alterar_senha(senha_atual: &str, nova_senha: &str) -> Result<Value, ApiError> {
    api::put_json(
        "/auth/alterar-senha",
        &json!({ "senha_atual": senha_atual, "nova_senha": nova_senha }),
    )
    .await
}

/// `PUT /auth/perfil` — returns the updated user record.
pub async fn atualizar_perfil(dados: &PerfilUpdate) -> Result<Usuario, ApiError> {
    api::put_json("/auth/perfil", dados).await
}

/// `DELETE /auth/excluir-conta`.
pub async fn excluir_conta() -> Result<Value, ApiError> {
    api::delete_json("/auth/excluir-conta").await
}
