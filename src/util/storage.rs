//! Persisted credential pair: session token + cached user snapshot.
//!
//! Browser build (`hydrate`): `localStorage`, so the session survives
//! reloads. Everywhere else (SSR, unit tests): a thread-local in-memory
//! map with the same contract.
//!
//! INVARIANT
//! =========
//! The token and the user snapshot are written together on login and
//! removed together on logout/401. `save_user` is the one exception: it
//! refreshes the snapshot in place without touching the token.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::net::types::Usuario;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key for the serialized user snapshot.
pub const USER_KEY: &str = "user";

#[cfg(not(feature = "hydrate"))]
thread_local! {
    static MEMORY: std::cell::RefCell<std::collections::BTreeMap<String, String>> =
        std::cell::RefCell::new(std::collections::BTreeMap::new());
}

fn get_item(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY.with(|m| m.borrow().get(key).cloned())
    }
}

fn set_item(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY.with(|m| {
            m.borrow_mut().insert(key.to_owned(), value.to_owned());
        });
    }
}

fn remove_item(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(Some(storage)) = web_sys::window().map_or(Ok(None), |w| w.local_storage()) {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        MEMORY.with(|m| {
            m.borrow_mut().remove(key);
        });
    }
}

/// Current session token, if any. Absence means unauthenticated.
pub fn token() -> Option<String> {
    get_item(TOKEN_KEY)
}

/// Last-known user snapshot, if present and parseable.
pub fn cached_user() -> Option<Usuario> {
    let raw = get_item(USER_KEY)?;
    serde_json::from_str(&raw).ok()
}

/// Persist token and user snapshot together (login / re-login).
pub fn save_credentials(token: &str, user: &Usuario) {
    set_item(TOKEN_KEY, token);
    save_user(user);
}

/// Refresh only the cached user snapshot, keeping the token.
pub fn save_user(user: &Usuario) {
    if let Ok(json) = serde_json::to_string(user) {
        set_item(USER_KEY, &json);
    }
}

/// Remove both entries (logout / unauthorized).
pub fn clear_credentials() {
    remove_item(TOKEN_KEY);
    remove_item(USER_KEY);
}
