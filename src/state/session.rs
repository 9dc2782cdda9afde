//! Session state machine and its actions.
//!
//! LIFECYCLE
//! =========
//! `restore_from_storage` (stale cache, loading) → startup check →
//! authenticated or unauthenticated. Mutating actions (login, logout,
//! register, password reset) move directly between the two, raising the
//! `loading` flag while a request is in flight.
//!
//! The startup check only discards persisted credentials on an explicit
//! 401; a network error or 5xx leaves them in place so a transient
//! outage cannot log the user out of future loads. That asymmetry is
//! deliberate.
//!
//! Every action catches its own failure and returns a structured
//! [`ActionResult`]; nothing propagates to the caller. Error toasts are
//! produced once, by the transport interceptor, and routed here through
//! the shell; actions only push their success toasts.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net;
use crate::net::api::ApiError;
use crate::net::types::{LoginResponse, NovoUsuario, Usuario};
use crate::state::toast::ToastState;
use crate::util::storage;

/// Whether the in-memory user is a reload-surviving cache or has been
/// confirmed by the server during this load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Freshness {
    /// Rendered optimistically from the persisted snapshot.
    #[default]
    Stale,
    /// Confirmed by a successful session check or login.
    Confirmed,
}

/// The client-side record of whether a user is logged in and who they are.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<Usuario>,
    pub freshness: Freshness,
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            freshness: Freshness::Stale,
            authenticated: false,
            loading: true,
        }
    }
}

impl SessionState {
    /// Initial state at process start: last-known user rendered as a
    /// stale cache while the startup check is in flight.
    pub fn restore_from_storage() -> Self {
        Self {
            user: storage::cached_user(),
            ..Self::default()
        }
    }

    /// Fold the startup check result into the session.
    ///
    /// Only a 401 clears persisted credentials; any other failure keeps
    /// them and just marks this load unauthenticated.
    pub fn apply_check(&mut self, result: Result<Usuario, ApiError>) {
        match result {
            Ok(user) => {
                self.user = Some(user);
                self.authenticated = true;
                self.freshness = Freshness::Confirmed;
            }
            Err(ApiError::Unauthorized) => {
                storage::clear_credentials();
                self.user = None;
                self.authenticated = false;
            }
            Err(_) => {
                self.authenticated = false;
            }
        }
        self.loading = false;
    }

    /// Persist the credential pair and mark the session authenticated.
    pub fn apply_login(&mut self, resposta: LoginResponse) {
        storage::save_credentials(&resposta.access_token, &resposta.user);
        self.user = Some(resposta.user);
        self.authenticated = true;
        self.freshness = Freshness::Confirmed;
        self.loading = false;
    }

    /// Tear down persisted and in-memory state. No network call.
    pub fn clear(&mut self) {
        storage::clear_credentials();
        self.user = None;
        self.authenticated = false;
        self.freshness = Freshness::Stale;
        self.loading = false;
    }

    /// Local-only overwrite of the user and its persisted snapshot,
    /// after a profile update already succeeded elsewhere.
    pub fn replace_user(&mut self, user: Usuario) {
        storage::save_user(&user);
        self.user = Some(user);
    }
}

/// Outcome of a session action, for callers to branch on (navigate or
/// close a modal only on success).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionResult {
    pub success: bool,
    pub error: Option<String>,
}

impl ActionResult {
    fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    fn err(message: String) -> Self {
        Self {
            success: false,
            error: Some(message),
        }
    }
}

/// Server `detail` message when present, else the per-action fallback.
fn action_error(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Server { message, .. } => message.clone(),
        _ => fallback.to_owned(),
    }
}

/// Startup session check. Skips the network entirely when no token is
/// persisted.
pub async fn check_session(session: RwSignal<SessionState>) {
    if storage::token().is_none() {
        session.update(|s| {
            s.authenticated = false;
            s.loading = false;
        });
        return;
    }

    let result = net::auth::me().await;
    session.update(|s| s.apply_check(result));
}

/// Log in and persist the credential pair on success.
pub async fn login(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    email: &str,
    senha: &str,
) -> ActionResult {
    session.update(|s| s.loading = true);
    match net::auth::login(email, senha).await {
        Ok(resposta) => {
            session.update(|s| s.apply_login(resposta));
            toasts.update(|t| t.success("Login realizado com sucesso!"));
            ActionResult::ok()
        }
        Err(e) => {
            session.update(|s| s.loading = false);
            ActionResult::err(action_error(&e, "Erro ao fazer login"))
        }
    }
}

/// Create an account. No automatic login; the user is told to sign in.
pub async fn register(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    dados: &NovoUsuario,
) -> ActionResult {
    session.update(|s| s.loading = true);
    let result = net::auth::register(dados).await;
    session.update(|s| s.loading = false);
    match result {
        Ok(_) => {
            toasts.update(|t| {
                t.success("Cadastro realizado com sucesso! Faça login para continuar.");
            });
            ActionResult::ok()
        }
        Err(e) => ActionResult::err(action_error(&e, "Erro ao fazer cadastro")),
    }
}

/// Synchronous logout: clears the persisted pair and in-memory session.
pub fn logout(session: RwSignal<SessionState>, toasts: RwSignal<ToastState>) {
    session.update(SessionState::clear);
    toasts.update(|t| t.success("Logout realizado com sucesso!"));
}

/// Request a password-recovery email. No session mutation.
pub async fn forgot_password(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    email: &str,
) -> ActionResult {
    session.update(|s| s.loading = true);
    let result = net::auth::forgot_password(email).await;
    session.update(|s| s.loading = false);
    match result {
        Ok(_) => {
            toasts.update(|t| t.success("Instruções enviadas para seu email!"));
            ActionResult::ok()
        }
        Err(e) => ActionResult::err(action_error(&e, "Erro ao solicitar recuperação")),
    }
}

/// Redeem a reset token for a new password. No session mutation.
pub async fn reset_password(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    token: &str,
    nova_senha: &str,
) -> ActionResult {
    session.update(|s| s.loading = true);
    let result = net::auth::reset_password(token, nova_senha).await;
    session.update(|s| s.loading = false);
    match result {
        Ok(_) => {
            toasts.update(|t| t.success("Senha redefinida com sucesso!"));
            ActionResult::ok()
        }
        Err(e) => ActionResult::err(action_error(&e, "Erro ao redefinir senha")),
    }
}

/// Local-only user overwrite after a profile endpoint already succeeded;
/// avoids an extra re-fetch.
pub fn update_user(session: RwSignal<SessionState>, user: Usuario) {
    session.update(|s| s.replace_user(user));
}
