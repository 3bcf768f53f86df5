use crate::api::{ApiError, PlaylistItem, PlaylistItemsResponse, PLAYLIST_ITEMS_PAGE_SIZE};
use crate::state::request::{RequestSlot, RequestTicket};
use crate::state::{next_offset, page_range_text, previous_offset};

/// 403/404, or a server message about access, means "not available to you"
/// rather than a failure worth reporting.
pub fn is_unavailable_error(err: &ApiError) -> bool {
    if matches!(err.status, 403 | 404) {
        return true;
    }
    let message = err.message.to_lowercase();
    message.contains("not available") || message.contains("collaborat")
}

#[derive(Debug, Clone)]
pub struct PlaylistItemsPanel {
    pub selected_playlist_id: Option<String>,
    pub selected_playlist_name: Option<String>,
    pub items: Vec<PlaylistItem>,
    pub loading: bool,
    pub error: Option<String>,
    pub not_available: bool,
    pub offset: u32,
    pub limit: u32,
    pub total: u32,
    slot: RequestSlot,
}

impl Default for PlaylistItemsPanel {
    fn default() -> Self {
        Self {
            selected_playlist_id: None,
            selected_playlist_name: None,
            items: Vec::new(),
            loading: false,
            error: None,
            not_available: false,
            offset: 0,
            limit: PLAYLIST_ITEMS_PAGE_SIZE,
            total: 0,
            slot: RequestSlot::default(),
        }
    }
}

/// What a load needs once the ticket has been issued.
#[derive(Debug, Clone)]
pub struct ItemsLoad {
    pub ticket: RequestTicket,
    pub playlist_id: String,
    pub limit: u32,
    pub offset: u32,
}

impl PlaylistItemsPanel {
    pub fn reset(&mut self) {
        self.slot.cancel();
        *self = Self::default();
    }

    /// Switches to another playlist, dropping whatever the old one was loading.
    pub fn select(&mut self, playlist_id: String, playlist_name: String) {
        self.reset();
        self.selected_playlist_id = Some(playlist_id);
        self.selected_playlist_name = Some(playlist_name);
    }

    pub fn selected(&self) -> Option<(&str, &str)> {
        let id = self.selected_playlist_id.as_deref()?;
        let name = self.selected_playlist_name.as_deref().unwrap_or(id);
        Some((id, name))
    }

    pub fn is_selected(&self, playlist_id: &str) -> bool {
        self.selected_playlist_id.as_deref() == Some(playlist_id)
    }

    pub fn begin_load(&mut self, offset: u32) -> Option<ItemsLoad> {
        let playlist_id = self.selected_playlist_id.clone()?;
        self.loading = true;
        self.error = None;
        self.not_available = false;
        Some(ItemsLoad {
            ticket: self.slot.begin(),
            playlist_id,
            limit: self.limit,
            offset,
        })
    }

    pub fn finish_load(
        &mut self,
        load: &ItemsLoad,
        result: Result<PlaylistItemsResponse, ApiError>,
    ) -> bool {
        if !self.slot.finish(&load.ticket) || !self.is_selected(&load.playlist_id) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(PlaylistItemsResponse::Available(page)) => {
                self.items = page.items;
                self.total = page.total;
                self.offset = load.offset;
                if page.limit > 0 {
                    self.limit = page.limit;
                }
                self.error = None;
                self.not_available = false;
            }
            Ok(PlaylistItemsResponse::Unavailable) => self.mark_unavailable(),
            Err(err) if is_unavailable_error(&err) => self.mark_unavailable(),
            Err(err) => {
                self.error = Some(err.message);
            }
        }
        true
    }

    fn mark_unavailable(&mut self) {
        self.not_available = true;
        self.items.clear();
        self.total = 0;
        self.offset = 0;
        self.error = None;
    }

    pub fn previous_offset(&self) -> Option<u32> {
        if self.loading || self.not_available {
            return None;
        }
        previous_offset(self.offset, self.limit)
    }

    pub fn next_offset(&self) -> Option<u32> {
        if self.loading || self.not_available {
            return None;
        }
        next_offset(self.offset, self.limit, self.total)
    }

    pub fn status_text(&self) -> Option<String> {
        if self.selected_playlist_id.is_none() {
            return Some("Select a playlist to view its tracks.".to_string());
        }
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        if self.loading {
            return Some("Loading tracks...".to_string());
        }
        if self.not_available {
            return Some("Tracks are not available for this playlist.".to_string());
        }
        if self.items.is_empty() {
            return Some("This playlist has no tracks.".to_string());
        }
        None
    }

    pub fn summary_text(&self) -> String {
        page_range_text(self.offset, self.items.len(), self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Page, PlayableItem};

    fn items_page(names: &[&str], total: u32) -> PlaylistItemsResponse {
        PlaylistItemsResponse::Available(Page {
            items: names
                .iter()
                .map(|name| PlaylistItem {
                    track: Some(PlayableItem {
                        name: name.to_string(),
                        ..PlayableItem::default()
                    }),
                    ..PlaylistItem::default()
                })
                .collect(),
            limit: 25,
            offset: 0,
            total,
        })
    }

    fn selected_panel() -> PlaylistItemsPanel {
        let mut panel = PlaylistItemsPanel::default();
        panel.select("p1".to_string(), "Road Trip".to_string());
        panel
    }

    #[test]
    fn unavailable_classification() {
        assert!(is_unavailable_error(&ApiError::new(403, "Forbidden")));
        assert!(is_unavailable_error(&ApiError::new(404, "Not found")));
        assert!(is_unavailable_error(&ApiError::new(
            400,
            "Playlist items are Not Available for this user"
        )));
        assert!(is_unavailable_error(&ApiError::new(
            400,
            "Only collaborators can read this playlist"
        )));
        assert!(!is_unavailable_error(&ApiError::new(500, "Server exploded")));
        assert!(!is_unavailable_error(&ApiError::network()));
    }

    #[test]
    fn no_selection_means_no_load() {
        let mut panel = PlaylistItemsPanel::default();
        assert!(panel.begin_load(0).is_none());
        assert!(!panel.loading);
        assert_eq!(
            panel.status_text().as_deref(),
            Some("Select a playlist to view its tracks.")
        );
    }

    #[test]
    fn unavailable_response_sets_flag_not_error() {
        let mut panel = selected_panel();
        let load = panel.begin_load(0).unwrap();
        assert!(panel.finish_load(&load, Ok(PlaylistItemsResponse::Unavailable)));

        assert!(panel.not_available);
        assert!(panel.items.is_empty());
        assert_eq!(panel.error, None);
        assert_eq!(
            panel.status_text().as_deref(),
            Some("Tracks are not available for this playlist.")
        );
    }

    #[test]
    fn forbidden_error_is_treated_as_unavailable() {
        let mut panel = selected_panel();
        let load = panel.begin_load(0).unwrap();
        panel.finish_load(&load, Err(ApiError::new(403, "Forbidden")));
        assert!(panel.not_available);
        assert_eq!(panel.error, None);
    }

    #[test]
    fn hard_error_is_reported() {
        let mut panel = selected_panel();
        let load = panel.begin_load(0).unwrap();
        panel.finish_load(&load, Err(ApiError::network()));
        assert!(!panel.not_available);
        assert_eq!(panel.error.as_deref(), Some("Network request failed"));
    }

    #[test]
    fn reselection_drops_old_playlist_response() {
        let mut panel = selected_panel();
        let load = panel.begin_load(0).unwrap();
        panel.select("p2".to_string(), "Focus".to_string());

        assert!(!panel.finish_load(&load, Ok(items_page(&["Old"], 1))));
        assert!(panel.items.is_empty());
        assert_eq!(panel.selected(), Some(("p2", "Focus")));
    }

    #[test]
    fn successful_page_updates_cursor() {
        let mut panel = selected_panel();
        let load = panel.begin_load(25).unwrap();
        panel.finish_load(&load, Ok(items_page(&["A", "B"], 27)));

        assert_eq!(panel.offset, 25);
        assert_eq!(panel.summary_text(), "Showing 26-27 of 27");
        assert_eq!(panel.previous_offset(), Some(0));
        assert_eq!(panel.next_offset(), None);
    }
}
