// Playlist document model
//
// The document that transactions mutate. A `Playlist` is an ordered list of
// songs; a `PlaylistLibrary` holds every list the user has created.
//
// Every mutation validates its indices before touching the song list, so a
// failed call never leaves a playlist half-modified.

pub mod library;
pub mod model;
pub mod song;

pub use library::PlaylistLibrary;
pub use model::{ListId, Playlist};
pub use song::Song;

/// Result type for playlist operations
pub type PlaylistResult<T> = Result<T, PlaylistError>;

/// Errors raised by the playlist model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaylistError {
    #[error("Song index {index} out of range (playlist has {len} songs)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown playlist: {0}")]
    UnknownList(ListId),

    #[error("Playlist name cannot be empty")]
    EmptyName,
}
