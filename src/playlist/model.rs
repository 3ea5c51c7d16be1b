// Playlist document

use crate::playlist::{PlaylistError, PlaylistResult, Song};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of a playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListId(Uuid);

impl ListId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ListId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ListId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ListId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// An ordered list of songs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: ListId,
    pub name: String,
    songs: Vec<Song>,
}

impl Playlist {
    pub fn new(name: impl Into<String>, songs: Vec<Song>) -> Self {
        Self {
            id: ListId::new(),
            name: name.into(),
            songs,
        }
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn song(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Titles in playlist order
    pub fn titles(&self) -> Vec<&str> {
        self.songs.iter().map(|song| song.title.as_str()).collect()
    }

    /// Insert `song` at `index`, shifting later songs right
    ///
    /// `index == len()` appends.
    pub fn create_song(&mut self, index: usize, song: Song) -> PlaylistResult<()> {
        if index > self.songs.len() {
            return Err(self.out_of_range(index));
        }
        self.songs.insert(index, song);
        Ok(())
    }

    /// Remove and return the song at `index`
    pub fn remove_song(&mut self, index: usize) -> PlaylistResult<Song> {
        self.check_index(index)?;
        Ok(self.songs.remove(index))
    }

    /// Replace the song at `index`, returning the previous value
    pub fn update_song(&mut self, index: usize, song: Song) -> PlaylistResult<Song> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.songs[index], song))
    }

    /// Relocate the song at `from` so that it ends up at `to`
    ///
    /// Moving `to -> from` afterwards restores the original order.
    pub fn move_song(&mut self, from: usize, to: usize) -> PlaylistResult<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let song = self.songs.remove(from);
        self.songs.insert(to, song);
        Ok(())
    }

    pub(crate) fn check_index(&self, index: usize) -> PlaylistResult<()> {
        if index < self.songs.len() {
            Ok(())
        } else {
            Err(self.out_of_range(index))
        }
    }

    fn out_of_range(&self, index: usize) -> PlaylistError {
        PlaylistError::IndexOutOfRange {
            index,
            len: self.songs.len(),
        }
    }
}
