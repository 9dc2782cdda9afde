//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `filters`, `toast`) so pages
//! and components can depend on small focused models. Each is held in an
//! `RwSignal` provided via context by the root component; the signals are
//! constructed once at application start and reset through their own
//! clear operations, never reassigned.

pub mod filters;
pub mod session;
pub mod toast;
