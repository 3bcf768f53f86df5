use crate::api::{ApiError, Page, Playlist, PLAYLISTS_PAGE_SIZE};
use crate::state::request::{RequestSlot, RequestTicket};
use crate::state::{next_offset, page_range_text, previous_offset};

#[derive(Debug, Clone)]
pub struct PlaylistsPanel {
    pub limit: u32,
    pub offset: u32,
    pub total: u32,
    pub items: Vec<Playlist>,
    pub loading: bool,
    pub error: Option<String>,
    pub highlighted_playlist_id: Option<String>,
    slot: RequestSlot,
}

impl Default for PlaylistsPanel {
    fn default() -> Self {
        Self {
            limit: PLAYLISTS_PAGE_SIZE,
            offset: 0,
            total: 0,
            items: Vec::new(),
            loading: false,
            error: None,
            highlighted_playlist_id: None,
            slot: RequestSlot::default(),
        }
    }
}

impl PlaylistsPanel {
    pub fn reset(&mut self) {
        self.slot.cancel();
        *self = Self::default();
    }

    pub fn begin_load(&mut self) -> (RequestTicket, u32) {
        self.loading = true;
        self.error = None;
        (self.slot.begin(), self.limit)
    }

    pub fn in_flight(&self) -> bool {
        self.slot.in_flight()
    }

    /// Returns `false` when the response was superseded and dropped.
    pub fn finish_load(
        &mut self,
        ticket: &RequestTicket,
        offset: u32,
        result: Result<Page<Playlist>, ApiError>,
    ) -> bool {
        if !self.slot.finish(ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total = page.total;
                self.offset = offset;
                if page.limit > 0 {
                    self.limit = page.limit;
                }
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.message);
            }
        }
        true
    }

    pub fn highlight(&mut self, playlist_id: Option<String>) {
        self.highlighted_playlist_id = playlist_id.filter(|id| !id.is_empty());
    }

    pub fn is_highlighted(&self, playlist: &Playlist) -> bool {
        self.highlighted_playlist_id.as_deref() == Some(playlist.id.as_str())
    }

    /// `"<name> [New]"` for the playlist created most recently.
    pub fn row_label(&self, playlist: &Playlist) -> String {
        if self.is_highlighted(playlist) {
            format!("{} [New]", playlist.display_name())
        } else {
            playlist.display_name().to_string()
        }
    }

    pub fn previous_offset(&self) -> Option<u32> {
        if self.loading {
            return None;
        }
        previous_offset(self.offset, self.limit)
    }

    pub fn next_offset(&self) -> Option<u32> {
        if self.loading {
            return None;
        }
        next_offset(self.offset, self.limit, self.total)
    }

    pub fn status_text(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        if self.loading {
            return Some("Loading playlists...".to_string());
        }
        if self.items.is_empty() {
            return Some("No playlists found.".to_string());
        }
        None
    }

    pub fn summary_text(&self) -> String {
        page_range_text(self.offset, self.items.len(), self.total)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CreatePlaylistForm {
    pub name: String,
    pub description: String,
    pub public: bool,
    pub submitting: bool,
    pub error: Option<String>,
    pub feedback: Option<String>,
}

/// Snapshot of the form fields taken when a submit starts.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatePlaylistDraft {
    pub name: String,
    pub description: Option<String>,
    pub public: bool,
}

impl CreatePlaylistForm {
    pub fn begin_submit(&mut self) -> Option<CreatePlaylistDraft> {
        if self.submitting {
            return None;
        }
        self.feedback = None;
        let name = self.name.trim();
        if name.is_empty() {
            self.error = Some("Enter a playlist name.".to_string());
            return None;
        }
        self.error = None;
        self.submitting = true;
        let description = self.description.trim();
        Some(CreatePlaylistDraft {
            name: name.to_string(),
            description: (!description.is_empty()).then(|| description.to_string()),
            public: self.public,
        })
    }

    pub fn finish_success(&mut self, created: &Playlist, draft: &CreatePlaylistDraft) {
        let name = if created.name.trim().is_empty() {
            draft.name.as_str()
        } else {
            created.name.as_str()
        };
        *self = Self {
            feedback: Some(format!("Created \"{name}\".")),
            ..Self::default()
        };
    }

    pub fn finish_error(&mut self, err: ApiError) {
        self.submitting = false;
        self.error = Some(err.message);
    }
}
