//! Application pages, one module per route.

pub mod dashboard;
pub mod forgot_password;
pub mod login;
pub mod profile;
pub mod register;
pub mod settings;
pub mod transactions;
