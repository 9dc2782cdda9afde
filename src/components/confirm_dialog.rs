//! Confirmation dialog for destructive actions.
//!
//! Deletes (transaction, category, platform, account) never fire a
//! request before the user confirms here.

use leptos::prelude::*;

/// Modal with confirm/cancel actions over a backdrop.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Excluir"
                    </button>
                </div>
            </div>
        </div>
    }
}
