//! Network layer: HTTP client wrapper, transport events, wire types, and
//! one thin service module per API resource area.
//!
//! DESIGN
//! ======
//! Cross-cutting concerns (bearer token attachment, 401 handling, error
//! notifications, the fixed timeout) live in `api`; the per-resource
//! modules are pass-throughs with no validation, retries, or caching.
//! The transport never touches routing — it emits through `events` and
//! the application shell decides what to do.

pub mod api;
pub mod auth;
pub mod dashboard;
pub mod events;
pub mod settings;
pub mod transactions;
pub mod types;
