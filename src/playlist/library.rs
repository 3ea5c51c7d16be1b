// Collection of playlists

use crate::playlist::{ListId, Playlist, PlaylistError, PlaylistResult, Song};

/// All playlists known to the editor, kept sorted by name
///
/// Creating, renaming and deleting whole lists is not undoable; only edits
/// inside a loaded list go through the transaction stack.
#[derive(Debug, Clone, Default)]
pub struct PlaylistLibrary {
    lists: Vec<Playlist>,
}

impl PlaylistLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new list and return its id
    pub fn add_new_list(&mut self, name: impl Into<String>, songs: Vec<Song>) -> ListId {
        let list = Playlist::new(name, songs);
        let id = list.id;
        self.lists.push(list);
        self.sort_lists();
        id
    }

    /// Insert an already built playlist (e.g. one restored by the host)
    pub fn insert(&mut self, list: Playlist) -> ListId {
        let id = list.id;
        self.lists.retain(|existing| existing.id != id);
        self.lists.push(list);
        self.sort_lists();
        id
    }

    pub fn delete_list(&mut self, id: ListId) -> PlaylistResult<Playlist> {
        let index = self.list_index(id).ok_or(PlaylistError::UnknownList(id))?;
        Ok(self.lists.remove(index))
    }

    pub fn rename_list(&mut self, id: ListId, name: impl Into<String>) -> PlaylistResult<()> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PlaylistError::EmptyName);
        }
        let list = self.get_mut(id).ok_or(PlaylistError::UnknownList(id))?;
        list.name = name;
        self.sort_lists();
        Ok(())
    }

    pub fn get(&self, id: ListId) -> Option<&Playlist> {
        self.lists.iter().find(|list| list.id == id)
    }

    pub fn get_mut(&mut self, id: ListId) -> Option<&mut Playlist> {
        self.lists.iter_mut().find(|list| list.id == id)
    }

    /// Position of the list in name order
    pub fn list_index(&self, id: ListId) -> Option<usize> {
        self.lists.iter().position(|list| list.id == id)
    }

    pub fn list(&self, index: usize) -> Option<&Playlist> {
        self.lists.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Playlist> {
        self.lists.iter()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    fn sort_lists(&mut self) {
        self.lists
            .sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    }
}
