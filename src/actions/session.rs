use crate::actions::load_playlists;
use crate::api::SpotifyApi;
use crate::state::StateHandle;
use crate::storage;
use dioxus::logger::tracing::{info, warn};

/// Asks the server who we are and picks the initial step from the answer.
pub async fn bootstrap<S: StateHandle>(api: &SpotifyApi, state: &S) {
    let remembered = storage::remembered_display_name();
    state.update(|s| s.session.begin_check(remembered));

    match api.get_profile().await {
        Ok(profile) => {
            let name = profile.name().map(str::to_string);
            info!("connected as {}", name.as_deref().unwrap_or("<unnamed>"));
            match &name {
                Some(name) => storage::remember_display_name(name),
                None => storage::forget_display_name(),
            }
            state.update(|s| s.connect(name));
            load_playlists(api, state, 0).await;
        }
        Err(err) => {
            info!("not connected ({}): {}", err.status, err.message);
            storage::forget_display_name();
            state.update(|s| s.disconnect());
        }
    }
}

pub async fn logout<S: StateHandle>(api: &SpotifyApi, state: &S) {
    let started = state.update(|s| {
        if s.session.logging_out || !s.session.is_connected() {
            return false;
        }
        s.session.logging_out = true;
        s.session.error = None;
        true
    });
    if !started {
        return;
    }

    match api.logout().await {
        Ok(()) => {
            info!("logged out");
            storage::forget_display_name();
            state.update(|s| s.disconnect());
        }
        Err(err) => {
            warn!("logout failed: {err}");
            state.update(|s| {
                s.session.logging_out = false;
                s.session.error = Some(err.message);
            });
        }
    }
}
