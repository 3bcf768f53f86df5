//! Browser touch points: OAuth callback cleanup and the login redirect.

use crate::api::LOGIN_PATH;
#[cfg(not(target_arch = "wasm32"))]
use dioxus::logger::tracing::warn;

const OAUTH_CALLBACK_PARAMS: [&str; 3] = ["code", "state", "error"];

/// Removes OAuth callback parameters from a `location.search` string.
///
/// Returns `None` when nothing had to be removed, otherwise the new search
/// string (`""` or `"?..."`).
pub fn strip_oauth_params(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    if query.is_empty() {
        return None;
    }

    let mut removed = false;
    let kept: Vec<&str> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter(|pair| {
            let key = pair.split('=').next().unwrap_or_default();
            let is_callback = OAUTH_CALLBACK_PARAMS.contains(&key);
            removed |= is_callback;
            !is_callback
        })
        .collect();

    if !removed {
        return None;
    }
    if kept.is_empty() {
        Some(String::new())
    } else {
        Some(format!("?{}", kept.join("&")))
    }
}

/// Rewrites the address bar without the callback parameters. No reload.
#[cfg(target_arch = "wasm32")]
pub fn clean_callback_url() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let Ok(search) = location.search() else {
        return;
    };
    let Some(cleaned) = strip_oauth_params(&search) else {
        return;
    };

    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let hash = location.hash().unwrap_or_default();
    let target = format!("{pathname}{cleaned}{hash}");
    if let Ok(history) = window.history() {
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&target));
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clean_callback_url() {}

#[cfg(target_arch = "wasm32")]
pub fn redirect_to_login(api_base: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&format!("{api_base}{LOGIN_PATH}"));
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to_login(api_base: &str) {
    warn!("open {api_base}{LOGIN_PATH} in a browser to connect Spotify");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_all_callback_params() {
        assert_eq!(
            strip_oauth_params("?code=abc123&state=frontend-state"),
            Some(String::new())
        );
        assert_eq!(strip_oauth_params("?error=access_denied"), Some(String::new()));
    }

    #[test]
    fn keeps_unrelated_params_in_order() {
        assert_eq!(
            strip_oauth_params("?tab=search&code=abc&lang=en"),
            Some("?tab=search&lang=en".to_string())
        );
    }

    #[test]
    fn untouched_urls_return_none() {
        assert_eq!(strip_oauth_params(""), None);
        assert_eq!(strip_oauth_params("?"), None);
        assert_eq!(strip_oauth_params("?tab=search"), None);
        assert_eq!(strip_oauth_params("?codec=mp3"), None);
    }
}
