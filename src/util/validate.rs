//! Client-side form validation rules.
//!
//! These only gate submission and drive inline field errors; the server
//! re-validates everything and its errors surface through the global
//! notification channel instead.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

/// Minimum accepted password length.
pub const MIN_SENHA: usize = 6;

/// Non-empty after trimming.
pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Loose email shape check: one `@`, non-empty local part, dotted domain.
pub fn email_shape(value: &str) -> bool {
    let value = value.trim();
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// At least `min` characters (scalar values, not bytes).
pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

/// Cross-field match (password confirmation).
pub fn fields_match(a: &str, b: &str) -> bool {
    a == b
}
