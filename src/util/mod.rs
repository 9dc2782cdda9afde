//! Small shared helpers: persisted storage, formatting, form validation.

pub mod format;
pub mod storage;
pub mod validate;
