use super::*;

fn usuario(email: &str) -> Usuario {
    Usuario {
        email: Some(email.to_owned()),
        nome: Some("Ana".to_owned()),
        ..Usuario::default()
    }
}

#[test]
fn absent_token_means_unauthenticated() {
    clear_credentials();
    assert_eq!(token(), None);
    assert!(cached_user().is_none());
}

#[test]
fn save_credentials_writes_both_entries_together() {
    clear_credentials();
    save_credentials("t1", &usuario("a@b.com"));

    assert_eq!(token(), Some("t1".to_owned()));
    assert_eq!(cached_user().unwrap().email.as_deref(), Some("a@b.com"));
}

#[test]
fn clear_credentials_removes_both_entries_together() {
    save_credentials("t1", &usuario("a@b.com"));
    clear_credentials();

    assert_eq!(token(), None);
    assert!(cached_user().is_none());
}

#[test]
fn save_user_refreshes_snapshot_without_touching_token() {
    save_credentials("t1", &usuario("a@b.com"));
    save_user(&usuario("novo@b.com"));

    assert_eq!(token(), Some("t1".to_owned()));
    assert_eq!(cached_user().unwrap().email.as_deref(), Some("novo@b.com"));
}

#[test]
fn unparseable_snapshot_reads_as_absent() {
    clear_credentials();
    // Write garbage through the low-level setter path.
    save_credentials("t1", &usuario("a@b.com"));
    super::set_item(USER_KEY, "not json");
    assert!(cached_user().is_none());
}
