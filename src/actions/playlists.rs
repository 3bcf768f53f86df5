use crate::api::SpotifyApi;
use crate::state::StateHandle;
use dioxus::logger::tracing::{debug, info, warn};

pub async fn load_playlists<S: StateHandle>(api: &SpotifyApi, state: &S, offset: u32) {
    if state.read_with(|s| s.playlists.in_flight()) {
        debug!("superseding in-flight playlist page");
    }
    let (ticket, limit) = state.update(|s| s.playlists.begin_load());
    debug!("loading playlists offset={offset} limit={limit}");

    let result = api.list_playlists(limit, offset).await;
    if let Err(err) = &result {
        warn!("playlist page failed: {err}");
    }
    let applied = state.update(|s| s.playlists.finish_load(&ticket, offset, result));
    if !applied {
        debug!("dropped superseded playlist page (request {})", ticket.id());
    }
}

pub async fn select_playlist<S: StateHandle>(
    api: &SpotifyApi,
    state: &S,
    playlist_id: String,
    playlist_name: String,
) {
    state.update(|s| s.items.select(playlist_id, playlist_name));
    load_playlist_items(api, state, 0).await;
}

pub async fn load_playlist_items<S: StateHandle>(api: &SpotifyApi, state: &S, offset: u32) {
    let Some(load) = state.update(|s| s.items.begin_load(offset)) else {
        return;
    };
    debug!("loading items for {} offset={offset}", load.playlist_id);

    let result = api
        .list_playlist_items(&load.playlist_id, load.limit, load.offset)
        .await;
    let applied = state.update(|s| s.items.finish_load(&load, result));
    if !applied {
        debug!("dropped superseded items page for {}", load.playlist_id);
    }
}

/// Submits the create form, then reloads page 0 with the new playlist marked.
pub async fn create_playlist<S: StateHandle>(api: &SpotifyApi, state: &S) {
    let Some(draft) = state.update(|s| s.create_form.begin_submit()) else {
        return;
    };

    match api
        .create_playlist(&draft.name, draft.description.as_deref(), draft.public)
        .await
    {
        Ok(created) => {
            info!("created playlist {}", created.id);
            state.update(|s| {
                s.create_form.finish_success(&created, &draft);
                s.playlists.highlight(Some(created.id.clone()));
            });
            load_playlists(api, state, 0).await;
        }
        Err(err) if err.is_validation() => {
            info!("create playlist rejected: {err}");
            state.update(|s| s.create_form.finish_error(err));
        }
        Err(err) => {
            warn!("create playlist failed: {err}");
            state.update(|s| s.create_form.finish_error(err));
        }
    }
}
