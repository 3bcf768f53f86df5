mod connect;
mod create_playlist;
mod pager;
mod playlist_items;
mod playlists;
mod search;

pub use connect::ConnectView;
pub use playlist_items::PlaylistItemsView;
pub use playlists::PlaylistsView;
pub use search::SearchView;
