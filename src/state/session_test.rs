use super::*;

fn usuario(email: &str) -> Usuario {
    Usuario {
        email: Some(email.to_owned()),
        ..Usuario::default()
    }
}

fn login_response(token: &str, email: &str) -> LoginResponse {
    LoginResponse {
        access_token: token.to_owned(),
        token_type: Some("bearer".to_owned()),
        user: usuario(email),
    }
}

// =============================================================
// Startup
// =============================================================

#[test]
fn default_session_is_loading_and_unauthenticated() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.authenticated);
    assert!(state.loading);
    assert_eq!(state.freshness, Freshness::Stale);
}

#[test]
fn restore_renders_cached_user_as_stale_not_authenticated() {
    storage::clear_credentials();
    storage::save_credentials("t1", &usuario("a@b.com"));

    let state = SessionState::restore_from_storage();

    assert_eq!(state.user.as_ref().unwrap().email.as_deref(), Some("a@b.com"));
    assert_eq!(state.freshness, Freshness::Stale);
    assert!(!state.authenticated);
    assert!(state.loading);
}

#[test]
fn successful_check_confirms_the_session() {
    storage::save_credentials("t1", &usuario("velho@b.com"));
    let mut state = SessionState::restore_from_storage();

    state.apply_check(Ok(usuario("a@b.com")));

    assert!(state.authenticated);
    assert!(!state.loading);
    assert_eq!(state.freshness, Freshness::Confirmed);
    assert_eq!(state.user.unwrap().email.as_deref(), Some("a@b.com"));
}

#[test]
fn check_401_clears_persisted_credentials() {
    storage::save_credentials("stale", &usuario("a@b.com"));
    let mut state = SessionState::restore_from_storage();

    state.apply_check(Err(ApiError::Unauthorized));

    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert_eq!(storage::token(), None);
    assert!(storage::cached_user().is_none());
}

#[test]
fn check_network_failure_keeps_stale_credentials() {
    storage::save_credentials("stale", &usuario("a@b.com"));
    let mut state = SessionState::restore_from_storage();

    state.apply_check(Err(ApiError::Network("sem resposta".to_owned())));

    // Transient outage: this load is unauthenticated, but the persisted
    // pair stays for the next one.
    assert!(!state.authenticated);
    assert!(!state.loading);
    assert_eq!(storage::token(), Some("stale".to_owned()));
    assert!(storage::cached_user().is_some());
}

#[test]
fn check_server_error_also_keeps_credentials() {
    storage::save_credentials("stale", &usuario("a@b.com"));
    let mut state = SessionState::restore_from_storage();

    state.apply_check(Err(ApiError::Server {
        status: 503,
        message: "manutenção".to_owned(),
    }));

    assert!(!state.authenticated);
    assert_eq!(storage::token(), Some("stale".to_owned()));
}

// =============================================================
// Mutating actions
// =============================================================

#[test]
fn login_persists_token_and_user_together() {
    storage::clear_credentials();
    let mut state = SessionState::default();

    state.apply_login(login_response("t1", "a@b.com"));

    assert!(state.authenticated);
    assert_eq!(state.freshness, Freshness::Confirmed);
    assert!(!state.loading);
    assert_eq!(state.user.as_ref().unwrap().email.as_deref(), Some("a@b.com"));
    assert_eq!(storage::token(), Some("t1".to_owned()));
    assert_eq!(
        storage::cached_user().unwrap().email.as_deref(),
        Some("a@b.com")
    );
}

#[test]
fn clear_tears_down_storage_and_memory() {
    let mut state = SessionState::default();
    state.apply_login(login_response("t1", "a@b.com"));

    state.clear();

    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert_eq!(state.freshness, Freshness::Stale);
    assert_eq!(storage::token(), None);
    assert!(storage::cached_user().is_none());
}

#[test]
fn replace_user_overwrites_memory_and_snapshot_only() {
    let mut state = SessionState::default();
    state.apply_login(login_response("t1", "a@b.com"));

    state.replace_user(usuario("novo@b.com"));

    // Token untouched, snapshot refreshed, still authenticated.
    assert_eq!(storage::token(), Some("t1".to_owned()));
    assert_eq!(
        storage::cached_user().unwrap().email.as_deref(),
        Some("novo@b.com")
    );
    assert_eq!(state.user.unwrap().email.as_deref(), Some("novo@b.com"));
    assert!(state.authenticated);
}

#[test]
fn action_error_prefers_server_detail() {
    let server = ApiError::Server {
        status: 400,
        message: "Credenciais inválidas".to_owned(),
    };
    assert_eq!(action_error(&server, "Erro ao fazer login"), "Credenciais inválidas");
    assert_eq!(
        action_error(&ApiError::Timeout, "Erro ao fazer login"),
        "Erro ao fazer login"
    );
    assert_eq!(
        action_error(&ApiError::Unauthorized, "Erro ao fazer login"),
        "Erro ao fazer login"
    );
}

#[test]
fn action_result_shapes() {
    assert_eq!(
        ActionResult::ok(),
        ActionResult {
            success: true,
            error: None
        }
    );
    let falha = ActionResult::err("Erro ao fazer cadastro".to_owned());
    assert!(!falha.success);
    assert_eq!(falha.error.as_deref(), Some("Erro ao fazer cadastro"));
}
