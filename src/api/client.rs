//! One method per server endpoint. Inputs are trimmed and checked here so a
//! bad call never reaches the network.

use crate::api::error::ApiError;
use crate::api::http::{request_json, HttpRequest, Method, Transport};
use crate::api::models::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::rc::Rc;

pub const PLAYLISTS_PAGE_SIZE: u32 = 10;
pub const PLAYLISTS_MAX_LIMIT: u32 = 10;
pub const PLAYLIST_ITEMS_PAGE_SIZE: u32 = 25;
pub const PLAYLIST_ITEMS_MAX_LIMIT: u32 = 50;
pub const SEARCH_PAGE_SIZE: u32 = 10;
pub const SEARCH_MAX_LIMIT: u32 = 10;

pub const LOGIN_PATH: &str = "/api/auth/spotify/login";
const LOGOUT_PATH: &str = "/api/auth/logout";

const STATUS_BAD_GATEWAY: u16 = 502;

#[derive(Clone)]
pub struct SpotifyApi {
    transport: Rc<dyn Transport>,
}

impl PartialEq for SpotifyApi {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.transport, &other.transport)
    }
}

pub fn clamp_limit(limit: u32, max: u32) -> u32 {
    limit.clamp(1, max)
}

fn required(value: &str, field: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ApiError::required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn decode<T: DeserializeOwned>(payload: Option<Value>, what: &str) -> Result<T, ApiError> {
    let value = payload.ok_or_else(|| {
        ApiError::new(STATUS_BAD_GATEWAY, format!("Server returned an empty {what}."))
    })?;
    serde_json::from_value(value).map_err(|_| {
        ApiError::new(
            STATUS_BAD_GATEWAY,
            format!("Server returned a malformed {what}."),
        )
    })
}

fn to_body<T: Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::new(0, e.to_string()))
}

impl SpotifyApi {
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        Self { transport }
    }

    async fn send(&self, request: HttpRequest) -> Result<Option<Value>, ApiError> {
        request_json(self.transport.as_ref(), request).await
    }

    pub async fn get_profile(&self) -> Result<Profile, ApiError> {
        let payload = self.send(HttpRequest::get("/api/me")).await?;
        decode(payload, "profile")
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send(HttpRequest::get(LOGOUT_PATH)).await?;
        Ok(())
    }

    pub async fn list_playlists(&self, limit: u32, offset: u32) -> Result<Page<Playlist>, ApiError> {
        let limit = clamp_limit(limit, PLAYLISTS_MAX_LIMIT);
        let path = format!("/api/me/playlists?limit={limit}&offset={offset}");
        let payload = self.send(HttpRequest::get(path)).await?;
        decode(payload, "playlist page")
    }

    /// `Unavailable` when the body has no `items` array, which is how the
    /// server answers for playlists the user neither owns nor collaborates on.
    pub async fn list_playlist_items(
        &self,
        playlist_id: &str,
        limit: u32,
        offset: u32,
    ) -> Result<PlaylistItemsResponse, ApiError> {
        let playlist_id = required(playlist_id, "Playlist ID")?;
        let limit = clamp_limit(limit, PLAYLIST_ITEMS_MAX_LIMIT);
        let path = format!(
            "/api/me/playlists/{}/items?limit={limit}&offset={offset}",
            urlencoding::encode(&playlist_id)
        );
        let payload = self.send(HttpRequest::get(path)).await?;

        let has_items = payload
            .as_ref()
            .and_then(|value| value.get("items"))
            .is_some_and(Value::is_array);
        if !has_items {
            return Ok(PlaylistItemsResponse::Unavailable);
        }

        decode(payload, "playlist item page").map(PlaylistItemsResponse::Available)
    }

    pub async fn create_playlist(
        &self,
        name: &str,
        description: Option<&str>,
        public: bool,
    ) -> Result<Playlist, ApiError> {
        let name = required(name, "Playlist name")?;
        let description = description
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_string);
        let body = to_body(&CreatePlaylistRequest {
            name,
            description,
            public,
        })?;

        let payload = self
            .send(HttpRequest::with_body(Method::Post, "/api/me/playlists", body))
            .await?;
        decode(payload, "playlist")
    }

    pub async fn search_tracks(
        &self,
        query: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Track>, ApiError> {
        let query = required(query, "Search query")?;
        let limit = clamp_limit(limit, SEARCH_MAX_LIMIT);
        let path = format!(
            "/api/search?q={}&type=track&limit={limit}&offset={offset}",
            urlencoding::encode(&query)
        );
        let payload = self.send(HttpRequest::get(path)).await?;
        decode::<SearchResponse>(payload, "search result").map(|response| response.tracks)
    }

    pub async fn add_track_to_playlist(&self, playlist_id: &str, uri: &str) -> Result<(), ApiError> {
        let playlist_id = required(playlist_id, "Playlist ID")?;
        let uri = required(uri, "Track URI")?;
        let body = to_body(&UrisRequest { uris: vec![uri] })?;
        let path = format!("/api/playlists/{}/items", urlencoding::encode(&playlist_id));
        self.send(HttpRequest::with_body(Method::Post, path, body))
            .await?;
        Ok(())
    }

    pub async fn save_library_track(&self, uri: &str) -> Result<(), ApiError> {
        self.library_request(Method::Put, uri).await
    }

    pub async fn remove_library_track(&self, uri: &str) -> Result<(), ApiError> {
        self.library_request(Method::Delete, uri).await
    }

    async fn library_request(&self, method: Method, uri: &str) -> Result<(), ApiError> {
        let uri = required(uri, "Track URI")?;
        let body = to_body(&UrisRequest { uris: vec![uri] })?;
        self.send(HttpRequest::with_body(method, "/api/library", body))
            .await?;
        Ok(())
    }
}
