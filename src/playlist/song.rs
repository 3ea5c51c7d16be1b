// Song record

use serde::{Deserialize, Serialize};

/// A single playlist entry
///
/// Songs are plain values: transactions keep their own copies so that an
/// edit can be reversed even after the playlist has changed further.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    #[serde(rename = "youTubeId")]
    pub you_tube_id: String,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        you_tube_id: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            you_tube_id: you_tube_id.into(),
        }
    }

    /// Song with only a title, the other fields left empty
    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(title, "", "")
    }
}

impl Default for Song {
    /// The placeholder song inserted by the "add song" toolbar button
    fn default() -> Self {
        Self::new("Untitled", "???", "dQw4w9WgXcQ")
    }
}

impl std::fmt::Display for Song {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)
    }
}
