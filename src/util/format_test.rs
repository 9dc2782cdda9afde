use super::*;

#[test]
fn currency_uses_pt_br_grouping() {
    assert_eq!(currency(0.0), "R$ 0,00");
    assert_eq!(currency(52.5), "R$ 52,50");
    assert_eq!(currency(1234.56), "R$ 1.234,56");
    assert_eq!(currency(1_234_567.89), "R$ 1.234.567,89");
}

#[test]
fn currency_handles_negative_values() {
    assert_eq!(currency(-80.0), "-R$ 80,00");
}

#[test]
fn currency_with_custom_symbol() {
    assert_eq!(currency_with_symbol(10.0, "US$"), "US$ 10,00");
}

#[test]
fn date_br_converts_iso_dates() {
    assert_eq!(date_br("2024-01-31"), "31/01/2024");
}

#[test]
fn date_br_leaves_malformed_input_alone() {
    assert_eq!(date_br("ontem"), "ontem");
    assert_eq!(date_br("2024-1-3"), "2024-1-3");
    assert_eq!(date_br(""), "");
}

#[test]
fn km_uses_decimal_comma() {
    assert_eq!(km(12.34), "12,3 km");
    assert_eq!(km(400.0), "400,0 km");
}
