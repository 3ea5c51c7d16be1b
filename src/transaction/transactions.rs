// Concrete transaction implementations

use crate::playlist::{Playlist, Song};
use crate::transaction::trait_def::{Transaction, TransactionError, TransactionResult};

fn invalid_index(playlist: &Playlist, index: usize) -> TransactionError {
    TransactionError::InvalidIndex {
        index,
        len: playlist.len(),
    }
}

/// Transaction that inserts a song
///
/// Undo removes whatever song sits at the insertion index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSongTransaction {
    index: usize,
    song: Song,
}

impl CreateSongTransaction {
    pub fn new(index: usize, song: Song) -> Self {
        Self { index, song }
    }

    /// Build a create transaction, checking that `index` is an insertion
    /// point of `playlist` (`0..=len`)
    pub fn capture(playlist: &Playlist, index: usize, song: Song) -> TransactionResult<Self> {
        if index > playlist.len() {
            return Err(invalid_index(playlist, index));
        }
        Ok(Self::new(index, song))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn song(&self) -> &Song {
        &self.song
    }
}

impl Transaction for CreateSongTransaction {
    fn execute(&self, playlist: &mut Playlist) -> TransactionResult<()> {
        playlist.create_song(self.index, self.song.clone())?;
        Ok(())
    }

    fn undo(&self, playlist: &mut Playlist) -> TransactionResult<()> {
        playlist.remove_song(self.index)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Add Song '{}'", self.song.title)
    }
}

/// Transaction that removes a song
///
/// Holds a copy of the removed song so undo can put it back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveSongTransaction {
    index: usize,
    song: Song,
}

impl RemoveSongTransaction {
    /// `song` must be the song currently at `index`
    pub fn new(index: usize, song: Song) -> Self {
        Self { index, song }
    }

    /// Snapshot the song at `index` and build the transaction
    pub fn capture(playlist: &Playlist, index: usize) -> TransactionResult<Self> {
        let song = playlist
            .song(index)
            .cloned()
            .ok_or_else(|| invalid_index(playlist, index))?;
        Ok(Self::new(index, song))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn song(&self) -> &Song {
        &self.song
    }
}

impl Transaction for RemoveSongTransaction {
    fn execute(&self, playlist: &mut Playlist) -> TransactionResult<()> {
        playlist.remove_song(self.index)?;
        Ok(())
    }

    fn undo(&self, playlist: &mut Playlist) -> TransactionResult<()> {
        playlist.create_song(self.index, self.song.clone())?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Remove Song '{}'", self.song.title)
    }
}

/// Transaction that replaces a song's data in place
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateSongTransaction {
    index: usize,
    old_song: Song,
    new_song: Song,
}

impl UpdateSongTransaction {
    pub fn new(index: usize, old_song: Song, new_song: Song) -> Self {
        Self {
            index,
            old_song,
            new_song,
        }
    }

    /// Snapshot the current song at `index` as the undo value
    pub fn capture(playlist: &Playlist, index: usize, new_song: Song) -> TransactionResult<Self> {
        let old_song = playlist
            .song(index)
            .cloned()
            .ok_or_else(|| invalid_index(playlist, index))?;
        Ok(Self::new(index, old_song, new_song))
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn old_song(&self) -> &Song {
        &self.old_song
    }

    pub fn new_song(&self) -> &Song {
        &self.new_song
    }
}

impl Transaction for UpdateSongTransaction {
    fn execute(&self, playlist: &mut Playlist) -> TransactionResult<()> {
        playlist.update_song(self.index, self.new_song.clone())?;
        Ok(())
    }

    fn undo(&self, playlist: &mut Playlist) -> TransactionResult<()> {
        playlist.update_song(self.index, self.old_song.clone())?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Edit Song '{}'", self.old_song.title)
    }
}

/// Transaction that drags a song to a new position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSongTransaction {
    from: usize,
    to: usize,
}

impl MoveSongTransaction {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Build a move, rejecting out-of-range indices and no-op moves
    pub fn capture(playlist: &Playlist, from: usize, to: usize) -> TransactionResult<Self> {
        for index in [from, to] {
            if index >= playlist.len() {
                return Err(invalid_index(playlist, index));
            }
        }
        if from == to {
            return Err(TransactionError::InvalidMove(from));
        }
        Ok(Self::new(from, to))
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }
}

impl Transaction for MoveSongTransaction {
    fn execute(&self, playlist: &mut Playlist) -> TransactionResult<()> {
        playlist.move_song(self.from, self.to)?;
        Ok(())
    }

    fn undo(&self, playlist: &mut Playlist) -> TransactionResult<()> {
        playlist.move_song(self.to, self.from)?;
        Ok(())
    }

    fn description(&self) -> String {
        format!("Move Song {} to {}", self.from + 1, self.to + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::PlaylistError;

    fn playlist(titles: &[&str]) -> Playlist {
        Playlist::new("Test", titles.iter().map(|t| Song::titled(*t)).collect())
    }

    fn assert_round_trip(transaction: &dyn Transaction, start: &Playlist) {
        let mut list = start.clone();
        transaction.execute(&mut list).unwrap();
        assert_ne!(list, *start, "{} had no effect", transaction.description());
        transaction.undo(&mut list).unwrap();
        assert_eq!(list, *start);
    }

    #[test]
    fn test_create_song() {
        let mut list = playlist(&["A", "B"]);
        let create = CreateSongTransaction::new(2, Song::titled("C"));
        create.execute(&mut list).unwrap();
        assert_eq!(list.titles(), vec!["A", "B", "C"]);
        create.undo(&mut list).unwrap();
        assert_eq!(list.titles(), vec!["A", "B"]);
    }

    #[test]
    fn test_remove_song_restores_full_song() {
        let start = Playlist::new(
            "Test",
            vec![Song::new("A", "Artist A", "id-a"), Song::new("B", "Artist B", "id-b")],
        );
        let remove = RemoveSongTransaction::capture(&start, 0).unwrap();
        assert_eq!(remove.song(), &Song::new("A", "Artist A", "id-a"));
        assert_round_trip(&remove, &start);
    }

    #[test]
    fn test_update_song_undo_restores_old_data() {
        let mut list = playlist(&["W", "X"]);
        let update = UpdateSongTransaction::new(1, Song::titled("X"), Song::titled("Y"));

        update.execute(&mut list).unwrap();
        assert_eq!(list.song(1).unwrap().title, "Y");
        update.undo(&mut list).unwrap();
        assert_eq!(list.song(1).unwrap(), &Song::titled("X"));
    }

    #[test]
    fn test_update_snapshot_taken_at_construction() {
        let mut list = playlist(&["A"]);
        let update = UpdateSongTransaction::capture(&list, 0, Song::titled("B")).unwrap();

        // later edits must not leak into the stored snapshot
        list.update_song(0, Song::titled("Changed")).unwrap();
        assert_eq!(update.old_song().title, "A");
    }

    #[test]
    fn test_move_song_round_trip() {
        let start = playlist(&["A", "B", "C", "D"]);
        assert_round_trip(&MoveSongTransaction::new(0, 3), &start);
        assert_round_trip(&MoveSongTransaction::new(3, 0), &start);
        assert_round_trip(&MoveSongTransaction::new(1, 2), &start);
    }

    #[test]
    fn test_capture_rejects_bad_indices() {
        let list = playlist(&["A", "B"]);
        assert_eq!(
            CreateSongTransaction::capture(&list, 3, Song::default()),
            Err(TransactionError::InvalidIndex { index: 3, len: 2 })
        );
        assert!(CreateSongTransaction::capture(&list, 2, Song::default()).is_ok());
        assert!(RemoveSongTransaction::capture(&list, 2).is_err());
        assert!(UpdateSongTransaction::capture(&list, 2, Song::default()).is_err());
        assert!(MoveSongTransaction::capture(&list, 0, 2).is_err());
        assert_eq!(
            MoveSongTransaction::capture(&list, 1, 1),
            Err(TransactionError::InvalidMove(1))
        );
    }

    #[test]
    fn test_execute_on_mismatched_playlist_is_inconsistent() {
        let mut list = playlist(&["A"]);
        let remove = RemoveSongTransaction::new(3, Song::titled("Z"));
        let err = remove.execute(&mut list).unwrap_err();
        assert_eq!(
            err,
            TransactionError::Inconsistent(PlaylistError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert_eq!(list.titles(), vec!["A"]);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            CreateSongTransaction::new(0, Song::default()).description(),
            "Add Song 'Untitled'"
        );
        assert_eq!(
            RemoveSongTransaction::new(0, Song::titled("A")).description(),
            "Remove Song 'A'"
        );
        assert_eq!(MoveSongTransaction::new(0, 2).description(), "Move Song 1 to 3");
    }
}
