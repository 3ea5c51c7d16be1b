// Playlister - Library exports for tests and benchmarks

pub mod config;
pub mod playlist;
pub mod session;
pub mod transaction;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EditorConfig};
pub use playlist::{ListId, Playlist, PlaylistError, PlaylistLibrary, Song};
pub use session::{PlaylistSession, SessionError, SharedSession};
pub use transaction::{
    CreateSongTransaction, MoveSongTransaction, RemoveSongTransaction, Transaction,
    TransactionError, TransactionStack, UpdateSongTransaction,
};
