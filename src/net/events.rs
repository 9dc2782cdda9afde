//! Transport-to-shell signals.
//!
//! The HTTP layer must not navigate or render. Instead it emits two
//! events through this registry: "the session is no longer authorized"
//! and "show this error to the user". The application shell installs
//! handlers at mount; emitting with no handler installed is a no-op.
//!
//! Single-threaded by construction (WASM / one handler per test thread),
//! hence `thread_local` + `RefCell`.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::cell::RefCell;

thread_local! {
    static ON_UNAUTHORIZED: RefCell<Option<Box<dyn Fn()>>> = const { RefCell::new(None) };
    static ON_ERROR: RefCell<Option<Box<dyn Fn(String)>>> = const { RefCell::new(None) };
}

/// Install the handler invoked when a request is rejected as unauthorized.
pub fn on_unauthorized(handler: impl Fn() + 'static) {
    ON_UNAUTHORIZED.with(|h| *h.borrow_mut() = Some(Box::new(handler)));
}

/// Install the handler for user-visible error notifications.
pub fn on_error(handler: impl Fn(String) + 'static) {
    ON_ERROR.with(|h| *h.borrow_mut() = Some(Box::new(handler)));
}

/// Signal that the current session is no longer authorized.
pub fn emit_unauthorized() {
    ON_UNAUTHORIZED.with(|h| {
        if let Some(handler) = h.borrow().as_ref() {
            handler();
        }
    });
}

/// Surface a user-visible error message.
pub fn emit_error(message: impl Into<String>) {
    let message = message.into();
    ON_ERROR.with(|h| {
        if let Some(handler) = h.borrow().as_ref() {
            handler(message);
        }
    });
}

/// Drop both handlers. Test isolation only.
#[cfg(test)]
pub fn reset() {
    ON_UNAUTHORIZED.with(|h| *h.borrow_mut() = None);
    ON_ERROR.with(|h| *h.borrow_mut() = None);
}
