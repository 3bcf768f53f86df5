use crate::api::{ApiError, Page, Track, SEARCH_PAGE_SIZE};
use crate::state::request::{RequestSlot, RequestTicket};
use crate::state::{next_offset, page_range_text, previous_offset};
use std::collections::HashSet;

/// A search from the text box, or another page of the results on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchRequest {
    NewQuery,
    Page(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LibraryAction {
    Save,
    Remove,
}

#[derive(Debug, Clone)]
pub struct SearchPanel {
    pub query: String,
    pub limit: u32,
    pub offset: u32,
    pub total: u32,
    pub items: Vec<Track>,
    pub loading: bool,
    pub error: Option<String>,
    pub feedback: Option<String>,
    pub adding_track_uri: Option<String>,
    pub saving_track_uri: Option<String>,
    /// Tracks saved to the library during this page session.
    pub saved_uris: HashSet<String>,
    /// Query the current `items` belong to; paging reuses it.
    searched_query: String,
    slot: RequestSlot,
    add_slot: RequestSlot,
    library_slot: RequestSlot,
}

impl Default for SearchPanel {
    fn default() -> Self {
        Self {
            query: String::new(),
            limit: SEARCH_PAGE_SIZE,
            offset: 0,
            total: 0,
            items: Vec::new(),
            loading: false,
            error: None,
            feedback: None,
            adding_track_uri: None,
            saving_track_uri: None,
            saved_uris: HashSet::new(),
            searched_query: String::new(),
            slot: RequestSlot::default(),
            add_slot: RequestSlot::default(),
            library_slot: RequestSlot::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchLoad {
    pub ticket: RequestTicket,
    pub query: String,
    pub limit: u32,
    pub offset: u32,
}

/// An add or library request that passed local checks.
#[derive(Debug, Clone)]
pub struct TrackAction {
    pub ticket: RequestTicket,
    pub uri: String,
    pub title: String,
}

impl SearchPanel {
    pub fn reset(&mut self) {
        self.slot.cancel();
        self.add_slot.cancel();
        self.library_slot.cancel();
        *self = Self::default();
    }

    /// A new query reads the text box; a page request always reuses the query
    /// the results on screen came from.
    pub fn begin_search(&mut self, request: SearchRequest) -> Option<SearchLoad> {
        let (query, offset) = match request {
            SearchRequest::NewQuery => (self.query.trim().to_string(), 0),
            SearchRequest::Page(offset) => {
                if self.searched_query.is_empty() {
                    return None;
                }
                (self.searched_query.clone(), offset)
            }
        };
        self.feedback = None;
        if query.is_empty() {
            self.slot.cancel();
            self.loading = false;
            self.error = Some("Enter a search term.".to_string());
            return None;
        }

        self.loading = true;
        self.error = None;
        Some(SearchLoad {
            ticket: self.slot.begin(),
            query,
            limit: self.limit,
            offset,
        })
    }

    pub fn finish_search(&mut self, load: &SearchLoad, result: Result<Page<Track>, ApiError>) -> bool {
        if !self.slot.finish(&load.ticket) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.items = page.items;
                self.total = page.total;
                self.offset = load.offset;
                if page.limit > 0 {
                    self.limit = page.limit;
                }
                self.searched_query = load.query.clone();
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.message);
            }
        }
        true
    }

    /// Checks an "Add" click. `selected` is the playlist currently open in the
    /// items panel.
    pub fn begin_add(&mut self, track: &Track, selected: Option<(&str, &str)>) -> Option<TrackAction> {
        if self.adding_track_uri.is_some() {
            return None;
        }
        self.feedback = None;
        if selected.is_none() {
            self.error = Some("Select a playlist before adding tracks.".to_string());
            return None;
        }
        let Some(uri) = track.resolved_uri() else {
            self.error = Some("This track has no playable URI.".to_string());
            return None;
        };
        self.error = None;
        self.adding_track_uri = Some(uri.clone());
        Some(TrackAction {
            ticket: self.add_slot.begin(),
            uri,
            title: track.title().to_string(),
        })
    }

    /// Returns `false` when the panel was reset while the add was in flight.
    pub fn finish_add(&mut self, action: &TrackAction, playlist_name: &str, result: Result<(), ApiError>) -> bool {
        if !self.add_slot.finish(&action.ticket) {
            return false;
        }
        self.adding_track_uri = None;
        match result {
            Ok(()) => {
                self.error = None;
                self.feedback = Some(format!("Added \"{}\" to {playlist_name}.", action.title));
            }
            Err(err) => self.error = Some(err.message),
        }
        true
    }

    pub fn library_action_for(&self, track: &Track) -> LibraryAction {
        match track.resolved_uri() {
            Some(uri) if self.saved_uris.contains(&uri) => LibraryAction::Remove,
            _ => LibraryAction::Save,
        }
    }

    pub fn begin_library(&mut self, track: &Track) -> Option<(TrackAction, LibraryAction)> {
        if self.saving_track_uri.is_some() {
            return None;
        }
        self.feedback = None;
        let Some(uri) = track.resolved_uri() else {
            self.error = Some("This track has no playable URI.".to_string());
            return None;
        };
        let kind = self.library_action_for(track);
        self.error = None;
        self.saving_track_uri = Some(uri.clone());
        Some((
            TrackAction {
                ticket: self.library_slot.begin(),
                uri,
                title: track.title().to_string(),
            },
            kind,
        ))
    }

    pub fn finish_library(
        &mut self,
        action: &TrackAction,
        kind: LibraryAction,
        result: Result<(), ApiError>,
    ) -> bool {
        if !self.library_slot.finish(&action.ticket) {
            return false;
        }
        self.saving_track_uri = None;
        match (result, kind) {
            (Ok(()), LibraryAction::Save) => {
                self.saved_uris.insert(action.uri.clone());
                self.error = None;
                self.feedback = Some(format!("Saved \"{}\" to your library.", action.title));
            }
            (Ok(()), LibraryAction::Remove) => {
                self.saved_uris.remove(&action.uri);
                self.error = None;
                self.feedback = Some(format!("Removed \"{}\" from your library.", action.title));
            }
            (Err(err), _) => self.error = Some(err.message),
        }
        true
    }

    pub fn add_button_label(&self, track: &Track) -> &'static str {
        match (&self.adding_track_uri, track.resolved_uri()) {
            (Some(adding), Some(uri)) if *adding == uri => "Adding...",
            _ => "Add",
        }
    }

    pub fn library_button_label(&self, track: &Track) -> &'static str {
        match (&self.saving_track_uri, track.resolved_uri()) {
            (Some(saving), Some(uri)) if *saving == uri => "Saving...",
            _ => match self.library_action_for(track) {
                LibraryAction::Save => "Save",
                LibraryAction::Remove => "Remove",
            },
        }
    }

    /// Only the button whose add is in flight is disabled; a second add is
    /// still refused by [`Self::begin_add`].
    pub fn add_disabled(&self, track: &Track, has_selection: bool) -> bool {
        let Some(uri) = track.resolved_uri() else {
            return true;
        };
        !has_selection || self.adding_track_uri.as_deref() == Some(uri.as_str())
    }

    pub fn library_disabled(&self, track: &Track) -> bool {
        let Some(uri) = track.resolved_uri() else {
            return true;
        };
        self.saving_track_uri.as_deref() == Some(uri.as_str())
    }

    pub fn previous_offset(&self) -> Option<u32> {
        if self.loading || self.searched_query.is_empty() {
            return None;
        }
        previous_offset(self.offset, self.limit)
    }

    pub fn next_offset(&self) -> Option<u32> {
        if self.loading || self.searched_query.is_empty() {
            return None;
        }
        next_offset(self.offset, self.limit, self.total)
    }

    pub fn status_text(&self) -> Option<String> {
        if let Some(error) = &self.error {
            return Some(error.clone());
        }
        if self.loading {
            return Some("Searching...".to_string());
        }
        if let Some(feedback) = &self.feedback {
            return Some(feedback.clone());
        }
        if !self.searched_query.is_empty() && self.items.is_empty() {
            return Some("No tracks found.".to_string());
        }
        None
    }

    pub fn summary_text(&self) -> String {
        page_range_text(self.offset, self.items.len(), self.total)
    }
}
