use serde::{Deserialize, Deserializer, Serialize};

/// `null` reads the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Spotify pads some pages with `null` entries; they are dropped.
fn skip_null_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let entries = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(entries.unwrap_or_default().into_iter().flatten().collect())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Profile {
    #[serde(default)]
    pub display_name: Option<String>,
}

impl Profile {
    /// Display name with empty strings treated as missing.
    pub fn name(&self) -> Option<&str> {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

/// Offset-paged collection as returned by the playlist and search endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    #[serde(default = "Vec::new", deserialize_with = "skip_null_entries")]
    pub items: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub offset: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            limit: 0,
            offset: 0,
            total: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaylistOwner {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ItemCount {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Playlist {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub owner: Option<PlaylistOwner>,
    #[serde(default)]
    pub items: Option<ItemCount>,
    #[serde(default)]
    pub tracks: Option<ItemCount>,
}

impl Playlist {
    pub fn owner_name(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|owner| owner.display_name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Unknown owner")
    }

    pub fn item_total(&self) -> u32 {
        self.items
            .as_ref()
            .or(self.tracks.as_ref())
            .map(|count| count.total)
            .unwrap_or(0)
    }

    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            "Untitled playlist"
        } else {
            &self.name
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArtistRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AlbumRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ShowRef {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Search result track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default, deserialize_with = "skip_null_entries")]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub album: Option<AlbumRef>,
}

impl Track {
    /// The track's `uri`, or `spotify:track:<id>` when only the id is known.
    pub fn resolved_uri(&self) -> Option<String> {
        if let Some(uri) = self.uri.as_deref().map(str::trim) {
            if !uri.is_empty() {
                return Some(uri.to_string());
            }
        }
        self.id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(|id| format!("spotify:track:{id}"))
    }

    pub fn artist_names(&self) -> String {
        join_artist_names(&self.artists)
    }

    pub fn album_name(&self) -> Option<&str> {
        non_blank_album(self.album.as_ref())
    }

    pub fn title(&self) -> &str {
        if self.name.trim().is_empty() {
            "Untitled track"
        } else {
            &self.name
        }
    }
}

/// Track or episode entry inside a playlist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlayableItem {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default, deserialize_with = "skip_null_entries")]
    pub artists: Vec<ArtistRef>,
    #[serde(default)]
    pub album: Option<AlbumRef>,
    #[serde(default)]
    pub show: Option<ShowRef>,
}

impl PlayableItem {
    pub fn is_episode(&self) -> bool {
        self.kind.as_deref() == Some("episode") || self.show.is_some()
    }

    pub fn album_name(&self) -> Option<&str> {
        non_blank_album(self.album.as_ref())
    }

    /// Artists for a track, the show name for an episode.
    pub fn subtitle(&self) -> String {
        if self.is_episode() {
            return self
                .show
                .as_ref()
                .map(|show| show.name.clone())
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "Podcast episode".to_string());
        }
        join_artist_names(&self.artists)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PlaylistItem {
    #[serde(default)]
    pub item: Option<PlayableItem>,
    #[serde(default)]
    pub track: Option<PlayableItem>,
}

impl PlaylistItem {
    /// Newer payloads carry the entry under `item`, older ones under `track`.
    pub fn playable(&self) -> Option<&PlayableItem> {
        self.item.as_ref().or(self.track.as_ref())
    }

    pub fn title(&self) -> &str {
        match self.playable() {
            Some(item) if !item.name.trim().is_empty() => &item.name,
            Some(_) => "Untitled item",
            None => "Unavailable item",
        }
    }

    pub fn subtitle(&self) -> String {
        self.playable()
            .map(PlayableItem::subtitle)
            .unwrap_or_default()
    }

    pub fn album_name(&self) -> Option<&str> {
        self.playable().and_then(PlayableItem::album_name)
    }
}

/// Playlist items, or the server's way of saying the caller may not read them.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaylistItemsResponse {
    Available(Page<PlaylistItem>),
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResponse {
    pub tracks: Page<Track>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub public: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UrisRequest {
    pub uris: Vec<String>,
}

fn non_blank_album(album: Option<&AlbumRef>) -> Option<&str> {
    album
        .map(|album| album.name.trim())
        .filter(|name| !name.is_empty())
}

fn join_artist_names(artists: &[ArtistRef]) -> String {
    let names: Vec<&str> = artists
        .iter()
        .map(|artist| artist.name.trim())
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        "Unknown artist".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn playlist_reads_legacy_tracks_count() {
        let playlist: Playlist = serde_json::from_value(json!({
            "id": "pl1",
            "name": "Road Trip",
            "owner": {"display_name": "Ana"},
            "tracks": {"total": 12}
        }))
        .unwrap();
        assert_eq!(playlist.item_total(), 12);
        assert_eq!(playlist.owner_name(), "Ana");
    }

    #[test]
    fn track_uri_falls_back_to_id() {
        let with_uri = Track {
            uri: Some("spotify:track:abc".to_string()),
            ..Track::default()
        };
        assert_eq!(with_uri.resolved_uri().as_deref(), Some("spotify:track:abc"));

        let id_only = Track {
            id: Some("xyz".to_string()),
            uri: Some("  ".to_string()),
            ..Track::default()
        };
        assert_eq!(id_only.resolved_uri().as_deref(), Some("spotify:track:xyz"));

        assert_eq!(Track::default().resolved_uri(), None);
    }

    #[test]
    fn playlist_item_reads_episode_show_from_item_field() {
        let entry: PlaylistItem = serde_json::from_value(json!({
            "item": {"type": "episode", "name": "Ep. 4", "show": {"name": "Daily Tech"}}
        }))
        .unwrap();
        assert_eq!(entry.title(), "Ep. 4");
        assert_eq!(entry.subtitle(), "Daily Tech");

        let track: PlaylistItem = serde_json::from_value(json!({
            "track": {"type": "track", "name": "One More Time",
                      "artists": [{"name": "Daft Punk"}, {"name": ""}]}
        }))
        .unwrap();
        assert_eq!(track.subtitle(), "Daft Punk");

        let removed: PlaylistItem = serde_json::from_value(json!({"track": null})).unwrap();
        assert_eq!(removed.title(), "Unavailable item");
    }

    #[test]
    fn page_drops_null_entries() {
        let page: Page<Track> = serde_json::from_value(json!({
            "items": [null, {"name": "Around the World", "uri": "spotify:track:atw"}, null],
            "limit": 10,
            "offset": null,
            "total": 1
        }))
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title(), "Around the World");
        assert_eq!(page.offset, 0);

        let empty: Page<Playlist> = serde_json::from_value(json!({"items": null})).unwrap();
        assert!(empty.items.is_empty());
    }

    #[test]
    fn null_strings_read_as_empty() {
        let playlist: Playlist = serde_json::from_value(json!({
            "id": "pl9",
            "name": null,
            "tracks": {"total": null}
        }))
        .unwrap();
        assert_eq!(playlist.display_name(), "Untitled playlist");
        assert_eq!(playlist.item_total(), 0);

        let track: Track = serde_json::from_value(json!({
            "name": null,
            "artists": [null, {"name": null}, {"name": "Justice"}],
            "album": {"name": "Cross"}
        }))
        .unwrap();
        assert_eq!(track.title(), "Untitled track");
        assert_eq!(track.artist_names(), "Justice");
        assert_eq!(track.album_name(), Some("Cross"));
    }

    #[test]
    fn create_request_omits_missing_description() {
        let body = serde_json::to_value(CreatePlaylistRequest {
            name: "Road Trip".to_string(),
            description: None,
            public: false,
        })
        .unwrap();
        assert_eq!(body, json!({"name": "Road Trip", "public": false}));
    }
}
