//! Dashboard stat card.

use leptos::prelude::*;

/// Labeled value card with an accent modifier class.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(into, default = String::new())] accent: String,
) -> impl IntoView {
    let class = if accent.is_empty() {
        "stat-card".to_owned()
    } else {
        format!("stat-card stat-card--{accent}")
    };

    view! {
        <div class=class>
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">{value}</span>
        </div>
    }
}
