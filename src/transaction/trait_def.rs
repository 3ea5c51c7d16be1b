// Transaction trait definition

use crate::playlist::{Playlist, PlaylistError};

/// Result type for transaction operations
pub type TransactionResult<T> = Result<T, TransactionError>;

/// Errors that can occur while building or running a transaction
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransactionError {
    /// Index rejected when the transaction was built
    #[error("Invalid index {index} for playlist of {len} songs")]
    InvalidIndex { index: usize, len: usize },

    /// Source and destination of a move are the same
    #[error("Cannot move song {0} onto itself")]
    InvalidMove(usize),

    /// The playlist no longer has the shape the transaction expects
    #[error("Playlist out of sync with history: {0}")]
    Inconsistent(#[from] PlaylistError),
}

/// A reversible edit of a playlist
///
/// Transactions are immutable once built: they carry the index and song
/// snapshots needed to apply and reverse one edit, and receive the playlist
/// to work on at call time.
///
/// `undo` must only be called after `execute`; the `TransactionStack`
/// guarantees that ordering.
///
/// # Example
/// ```
/// use playlister::playlist::{Playlist, Song};
/// use playlister::transaction::{Transaction, TransactionResult};
///
/// struct RenameFirstSong {
///     old_title: String,
///     new_title: String,
/// }
///
/// impl Transaction for RenameFirstSong {
///     fn execute(&self, playlist: &mut Playlist) -> TransactionResult<()> {
///         let mut song = playlist.song(0).cloned().unwrap_or_default();
///         song.title = self.new_title.clone();
///         playlist.update_song(0, song)?;
///         Ok(())
///     }
///
///     fn undo(&self, playlist: &mut Playlist) -> TransactionResult<()> {
///         let mut song = playlist.song(0).cloned().unwrap_or_default();
///         song.title = self.old_title.clone();
///         playlist.update_song(0, song)?;
///         Ok(())
///     }
///
///     fn description(&self) -> String {
///         format!("Rename to '{}'", self.new_title)
///     }
/// }
///
/// let mut playlist = Playlist::new("Mix", vec![Song::titled("A")]);
/// let rename = RenameFirstSong { old_title: "A".into(), new_title: "B".into() };
/// rename.execute(&mut playlist).unwrap();
/// assert_eq!(playlist.titles(), vec!["B"]);
/// rename.undo(&mut playlist).unwrap();
/// assert_eq!(playlist.titles(), vec!["A"]);
/// ```
pub trait Transaction: Send {
    /// Apply the forward effect
    fn execute(&self, playlist: &mut Playlist) -> TransactionResult<()>;

    /// Apply the exact inverse of `execute`
    fn undo(&self, playlist: &mut Playlist) -> TransactionResult<()>;

    /// Human-readable label, e.g. for "Undo: Remove Song 'X'" tooltips
    fn description(&self) -> String;
}
