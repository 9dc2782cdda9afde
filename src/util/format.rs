//! Display formatting in pt-BR conventions.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Format a monetary value as `R$ 1.234,56` (pt-BR grouping).
pub fn currency(valor: f64) -> String {
    currency_with_symbol(valor, "R$")
}

/// Format a monetary value with an explicit currency symbol.
pub fn currency_with_symbol(valor: f64, simbolo: &str) -> String {
    let negative = valor < 0.0;
    let cents = (valor.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{simbolo} {grouped},{frac:02}")
}

/// Convert an ISO `AAAA-MM-DD` date to `DD/MM/AAAA`.
///
/// Anything that does not look like an ISO date is returned unchanged.
pub fn date_br(iso: &str) -> String {
    let parts: Vec<&str> = iso.split('-').collect();
    match parts.as_slice() {
        [ano, mes, dia] if ano.len() == 4 && mes.len() == 2 && dia.len() == 2 => {
            format!("{dia}/{mes}/{ano}")
        }
        _ => iso.to_owned(),
    }
}

/// Format a distance as `12,3 km`.
pub fn km(valor: f64) -> String {
    let rounded = (valor * 10.0).round() / 10.0;
    format!("{} km", format!("{rounded:.1}").replace('.', ","))
}
