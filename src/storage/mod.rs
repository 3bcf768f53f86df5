//! Session-scoped mirror of the connected display name. Purely cosmetic, so
//! every failure is swallowed.

#[cfg(target_arch = "wasm32")]
use gloo_storage::{SessionStorage, Storage};

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Mutex;

#[cfg(target_arch = "wasm32")]
const DISPLAY_NAME_KEY: &str = "spotify_manager.display_name";

// Desktop builds have no sessionStorage; process memory has the same lifetime.
#[cfg(not(target_arch = "wasm32"))]
static DISPLAY_NAME: Lazy<Mutex<Option<String>>> = Lazy::new(|| Mutex::new(None));

#[cfg(target_arch = "wasm32")]
pub fn remember_display_name(name: &str) {
    if let Err(err) = SessionStorage::set(DISPLAY_NAME_KEY, name) {
        dioxus::logger::tracing::debug!("session storage write failed: {err}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remember_display_name(name: &str) {
    let mut stored = DISPLAY_NAME.lock().unwrap_or_else(|e| e.into_inner());
    *stored = Some(name.to_string());
}

#[cfg(target_arch = "wasm32")]
pub fn remembered_display_name() -> Option<String> {
    SessionStorage::get::<String>(DISPLAY_NAME_KEY).ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remembered_display_name() -> Option<String> {
    DISPLAY_NAME
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

#[cfg(target_arch = "wasm32")]
pub fn forget_display_name() {
    SessionStorage::delete(DISPLAY_NAME_KEY);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn forget_display_name() {
    let mut stored = DISPLAY_NAME.lock().unwrap_or_else(|e| e.into_inner());
    *stored = None;
}
