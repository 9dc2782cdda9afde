use super::*;

#[test]
fn pushes_carry_kind_and_message() {
    let mut state = ToastState::default();
    state.success("Login realizado com sucesso!");
    state.error("Erro interno do servidor");

    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[0].message, "Login realizado com sucesso!");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_given_toast() {
    let mut state = ToastState::default();
    state.success("um");
    state.success("dois");
    let primeiro = state.toasts[0].id;

    state.dismiss(primeiro);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].message, "dois");
}

#[test]
fn dismiss_of_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.error("fica");
    state.dismiss(uuid::Uuid::new_v4());
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn errors_linger_longer_than_successes() {
    let mut state = ToastState::default();
    state.success("ok");
    state.error("falhou");

    assert_eq!(state.toasts[0].timeout_ms(), SUCCESS_TIMEOUT_MS);
    assert_eq!(state.toasts[1].timeout_ms(), ERROR_TIMEOUT_MS);
    assert!(ERROR_TIMEOUT_MS > SUCCESS_TIMEOUT_MS);
}
