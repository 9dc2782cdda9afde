use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::net::types::Usuario;

fn usuario() -> Usuario {
    Usuario {
        email: Some("a@b.com".to_owned()),
        ..Usuario::default()
    }
}

/// Capture emitted events for one test. Handlers are thread-local, and
/// each test runs on its own thread.
fn capture_events() -> (Rc<RefCell<u32>>, Rc<RefCell<Vec<String>>>) {
    events::reset();
    let unauthorized = Rc::new(RefCell::new(0u32));
    let errors = Rc::new(RefCell::new(Vec::new()));

    let u = Rc::clone(&unauthorized);
    events::on_unauthorized(move || *u.borrow_mut() += 1);
    let e = Rc::clone(&errors);
    events::on_error(move |msg| e.borrow_mut().push(msg));

    (unauthorized, errors)
}

// =============================================================
// Path classification and message extraction
// =============================================================

#[test]
fn session_check_path_is_exempt() {
    assert!(is_session_check("/auth/me"));
    assert!(!is_session_check("/auth/login"));
    assert!(!is_session_check("/transacoes"));
}

#[test]
fn detail_message_reads_server_detail() {
    assert_eq!(
        detail_message(r#"{"detail":"Credenciais inválidas"}"#),
        Some("Credenciais inválidas".to_owned())
    );
}

#[test]
fn detail_message_none_for_missing_or_invalid_body() {
    assert_eq!(detail_message(r#"{"error":"x"}"#), None);
    assert_eq!(detail_message("not json"), None);
    assert_eq!(detail_message(""), None);
}

#[test]
fn api_error_message_prefers_server_detail() {
    let err = ApiError::Server {
        status: 422,
        message: "Valor inválido".to_owned(),
    };
    assert_eq!(err.message(), "Valor inválido");
    assert_eq!(ApiError::Timeout.message(), GENERIC_ERROR);
    assert_eq!(ApiError::Network("offline".to_owned()).message(), GENERIC_ERROR);
}

// =============================================================
// Response interception
// =============================================================

#[test]
fn unauthorized_off_session_check_clears_credentials_and_emits() {
    let (unauthorized, errors) = capture_events();
    storage::save_credentials("t1", &usuario());

    let err = handle_failure("/transacoes", 401, r#"{"detail":"Token expirado"}"#);

    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(storage::token(), None);
    assert!(storage::cached_user().is_none());
    assert_eq!(*unauthorized.borrow(), 1);
    assert_eq!(errors.borrow().as_slice(), ["Token expirado"]);
}

#[test]
fn unauthorized_on_session_check_is_silent() {
    let (unauthorized, errors) = capture_events();
    storage::save_credentials("stale", &usuario());

    let err = handle_failure("/auth/me", 401, "");

    // The session check owns the teardown decision; the transport keeps
    // storage intact and emits nothing.
    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(storage::token(), Some("stale".to_owned()));
    assert_eq!(*unauthorized.borrow(), 0);
    assert!(errors.borrow().is_empty());
}

#[test]
fn server_failure_emits_detail_message() {
    let (unauthorized, errors) = capture_events();

    let err = handle_failure("/transacoes", 422, r#"{"detail":"Valor deve ser positivo"}"#);

    assert_eq!(
        err,
        ApiError::Server {
            status: 422,
            message: "Valor deve ser positivo".to_owned(),
        }
    );
    assert_eq!(*unauthorized.borrow(), 0);
    assert_eq!(errors.borrow().as_slice(), ["Valor deve ser positivo"]);
}

#[test]
fn server_failure_without_detail_falls_back_to_generic() {
    let (_, errors) = capture_events();

    let err = handle_failure("/dashboard/stats", 500, "<html>oops</html>");

    assert_eq!(
        err,
        ApiError::Server {
            status: 500,
            message: GENERIC_ERROR.to_owned(),
        }
    );
    assert_eq!(errors.borrow().as_slice(), [GENERIC_ERROR]);
}
