use crate::actions::load_playlist_items;
use crate::api::{SpotifyApi, Track};
use crate::state::{LibraryAction, SearchRequest, StateHandle};
use dioxus::logger::tracing::{debug, info, warn};

pub async fn search_tracks<S: StateHandle>(api: &SpotifyApi, state: &S, request: SearchRequest) {
    let Some(load) = state.update(|s| s.search.begin_search(request)) else {
        return;
    };
    debug!("searching {:?} offset={}", load.query, load.offset);

    let result = api.search_tracks(&load.query, load.limit, load.offset).await;
    if let Err(err) = &result {
        warn!("search failed: {err}");
    }
    if !state.update(|s| s.search.finish_search(&load, result)) {
        debug!("dropped superseded search page for {:?}", load.query);
    }
}

/// Adds a search result to the playlist open in the items panel, then
/// refreshes that panel if the same playlist is still open.
pub async fn add_track<S: StateHandle>(api: &SpotifyApi, state: &S, track: Track) {
    let attempt = state.update(|s| {
        let selected = s
            .items
            .selected()
            .map(|(id, name)| (id.to_string(), name.to_string()));
        let action = s.search.begin_add(&track, s.items.selected())?;
        selected.map(|(id, name)| (action, id, name))
    });
    let Some((action, playlist_id, playlist_name)) = attempt else {
        return;
    };

    let result = api.add_track_to_playlist(&playlist_id, &action.uri).await;
    let added = result.is_ok();
    match &result {
        Ok(()) => info!("added {} to {playlist_id}", action.uri),
        Err(err) => warn!("add to {playlist_id} failed: {err}"),
    }
    let applied = state.update(|s| s.search.finish_add(&action, &playlist_name, result));
    if !applied {
        debug!("dropped add result for {} after reset", action.uri);
        return;
    }
    if !added {
        return;
    }

    let reload_offset = state.read_with(|s| {
        s.items
            .is_selected(&playlist_id)
            .then_some(s.items.offset)
    });
    if let Some(offset) = reload_offset {
        load_playlist_items(api, state, offset).await;
    }
}

/// Saves the track to the library, or removes it if it was saved earlier.
pub async fn toggle_library_track<S: StateHandle>(api: &SpotifyApi, state: &S, track: Track) {
    let Some((action, kind)) = state.update(|s| s.search.begin_library(&track)) else {
        return;
    };

    let result = match kind {
        LibraryAction::Save => api.save_library_track(&action.uri).await,
        LibraryAction::Remove => api.remove_library_track(&action.uri).await,
    };
    match &result {
        Ok(()) => info!("library {:?} {}", kind, action.uri),
        Err(err) => warn!("library {:?} failed: {err}", kind),
    }
    if !state.update(|s| s.search.finish_library(&action, kind, result)) {
        debug!("dropped library result for {} after reset", action.uri);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::test_support::harness;
    use crate::api::http::Method;

    const DAFT_PUNK_RESULTS: &str = r#"{"tracks":{"items":[
        {"id":"t1","name":"One More Time","uri":"spotify:track:t1","artists":[{"name":"Daft Punk"}]},
        {"id":"t2","name":"Digital Love","uri":"spotify:track:t2","artists":[{"name":"Daft Punk"}]}
    ],"limit":10,"offset":0,"total":2}}"#;

    #[tokio::test]
    async fn blank_query_never_reaches_network() {
        let (transport, api, state) = harness();
        state.borrow_mut().search.query = "  ".to_string();

        search_tracks(&api, &state, SearchRequest::NewQuery).await;

        assert!(transport.requests().is_empty());
        assert_eq!(
            state.borrow().search.error.as_deref(),
            Some("Enter a search term.")
        );
    }

    #[tokio::test]
    async fn add_without_selected_playlist_sends_nothing() {
        let (transport, api, state) = harness();
        transport.respond(Method::Get, "/api/search", 200, DAFT_PUNK_RESULTS);
        state.borrow_mut().search.query = "Daft Punk".to_string();

        search_tracks(&api, &state, SearchRequest::NewQuery).await;
        let first = state.borrow().search.items[0].clone();
        add_track(&api, &state, first).await;

        assert_eq!(
            state.borrow().search.status_text().as_deref(),
            Some("Select a playlist before adding tracks.")
        );
        assert_eq!(
            transport.calls(),
            vec!["GET /api/search?q=Daft%20Punk&type=track&limit=10&offset=0"]
        );
    }

    #[tokio::test]
    async fn previous_page_keeps_the_searched_query() {
        let (transport, api, state) = harness();
        transport.respond(
            Method::Get,
            "/api/search",
            200,
            r#"{"tracks":{"items":[{"name":"Genesis","uri":"spotify:track:g"}],
                "limit":10,"offset":0,"total":30}}"#,
        );
        state.borrow_mut().search.query = "Daft Punk".to_string();

        search_tracks(&api, &state, SearchRequest::NewQuery).await;
        search_tracks(&api, &state, SearchRequest::Page(10)).await;
        state.borrow_mut().search.query = "Justice".to_string();
        search_tracks(&api, &state, SearchRequest::Page(0)).await;

        assert_eq!(
            transport.calls(),
            vec![
                "GET /api/search?q=Daft%20Punk&type=track&limit=10&offset=0",
                "GET /api/search?q=Daft%20Punk&type=track&limit=10&offset=10",
                "GET /api/search?q=Daft%20Punk&type=track&limit=10&offset=0",
            ]
        );
        assert_eq!(state.borrow().search.error, None);
    }

    #[tokio::test]
    async fn add_to_selected_playlist_reloads_its_items() {
        let (transport, api, state) = harness();
        transport.respond(Method::Post, "/api/playlists/p1/items", 201, r#"{"snapshot_id":"abc"}"#);
        transport.respond(
            Method::Get,
            "/api/me/playlists/p1/items",
            200,
            r#"{"items":[{"track":{"name":"One More Time"}}],"limit":25,"offset":0,"total":1}"#,
        );
        state.borrow_mut().items.select("p1".to_string(), "Road Trip".to_string());
        let track = Track {
            id: Some("t1".to_string()),
            name: "One More Time".to_string(),
            ..Track::default()
        };

        add_track(&api, &state, track).await;

        let state = state.borrow();
        assert_eq!(
            transport.calls(),
            vec![
                "POST /api/playlists/p1/items",
                "GET /api/me/playlists/p1/items?limit=25&offset=0"
            ]
        );
        assert_eq!(
            transport.requests()[0].body,
            Some(serde_json::json!({"uris": ["spotify:track:t1"]}))
        );
        assert_eq!(
            state.search.feedback.as_deref(),
            Some("Added \"One More Time\" to Road Trip.")
        );
        assert_eq!(state.search.adding_track_uri, None);
        assert_eq!(state.items.items.len(), 1);
    }

    #[tokio::test]
    async fn failed_add_skips_reload() {
        let (transport, api, state) = harness();
        transport.respond(
            Method::Post,
            "/api/playlists/p1/items",
            403,
            r#"{"detail":"You cannot add tracks to a playlist you don't own."}"#,
        );
        state.borrow_mut().items.select("p1".to_string(), "Theirs".to_string());
        let track = Track {
            uri: Some("spotify:track:t1".to_string()),
            ..Track::default()
        };

        add_track(&api, &state, track).await;

        assert_eq!(transport.calls(), vec!["POST /api/playlists/p1/items"]);
        assert_eq!(
            state.borrow().search.error.as_deref(),
            Some("You cannot add tracks to a playlist you don't own.")
        );
    }

    #[tokio::test]
    async fn library_toggle_saves_then_removes() {
        let (transport, api, state) = harness();
        transport.respond(Method::Put, "/api/library", 200, "");
        transport.respond(Method::Delete, "/api/library", 200, "");
        let track = Track {
            name: "Digital Love".to_string(),
            uri: Some("spotify:track:t2".to_string()),
            ..Track::default()
        };

        toggle_library_track(&api, &state, track.clone()).await;
        assert!(state.borrow().search.saved_uris.contains("spotify:track:t2"));

        toggle_library_track(&api, &state, track).await;
        assert!(state.borrow().search.saved_uris.is_empty());
        assert_eq!(transport.calls(), vec!["PUT /api/library", "DELETE /api/library"]);
    }
}
