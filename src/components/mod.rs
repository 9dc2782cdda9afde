//! Reusable presentational components.

pub mod confirm_dialog;
pub mod layout;
pub mod stat_card;
pub mod toast_host;
pub mod transaction_form;
