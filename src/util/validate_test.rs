use super::*;

#[test]
fn required_rejects_blank_input() {
    assert!(required("Ana"));
    assert!(!required(""));
    assert!(!required("   "));
}

#[test]
fn email_shape_accepts_plausible_addresses() {
    assert!(email_shape("a@b.com"));
    assert!(email_shape("  motorista@uber.com.br "));
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    assert!(!email_shape(""));
    assert!(!email_shape("sem-arroba"));
    assert!(!email_shape("@dominio.com"));
    assert!(!email_shape("a@semdominio"));
    assert!(!email_shape("a@.com"));
    assert!(!email_shape("a b@c.com"));
}

#[test]
fn min_length_counts_characters_not_bytes() {
    assert!(min_length("123456", MIN_SENHA));
    assert!(!min_length("12345", MIN_SENHA));
    assert!(min_length("çãõéíú", MIN_SENHA));
}

#[test]
fn fields_match_is_exact() {
    assert!(fields_match("segredo", "segredo"));
    assert!(!fields_match("segredo", "Segredo"));
}
