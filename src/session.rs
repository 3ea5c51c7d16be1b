// PlaylistSession - the editor's controller-facing facade
//
// Owns the playlist library, the currently loaded list and the transaction
// stack for that list. The UI layer calls the `add_*_transaction` methods
// in response to gestures and `undo`/`redo` from the toolbar.
//
// Switching or closing the loaded list clears the history: transactions
// only make sense against the list they were recorded on.

use crate::config::EditorConfig;
use crate::playlist::{ListId, Playlist, PlaylistError, PlaylistLibrary, Song};
use crate::transaction::{
    CreateSongTransaction, MoveSongTransaction, RemoveSongTransaction, Transaction,
    TransactionError, TransactionStack, UpdateSongTransaction,
};
use std::sync::{Arc, Mutex};

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Session shared with a multi-threaded host; every call holds the lock
pub type SharedSession = Arc<Mutex<PlaylistSession>>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No playlist is loaded")]
    NoListLoaded,

    #[error(transparent)]
    Playlist(#[from] PlaylistError),

    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

#[derive(Debug, Default)]
pub struct PlaylistSession {
    library: PlaylistLibrary,
    current: Option<ListId>,
    transactions: TransactionStack,
    config: EditorConfig,
}

impl PlaylistSession {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            library: PlaylistLibrary::new(),
            current: None,
            transactions: TransactionStack::with_capacity(config.max_history),
            config,
        }
    }

    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn library(&self) -> &PlaylistLibrary {
        &self.library
    }

    pub fn transactions(&self) -> &TransactionStack {
        &self.transactions
    }

    // ---- list management (not undoable) ----

    pub fn add_new_list(&mut self, name: impl Into<String>, songs: Vec<Song>) -> ListId {
        let id = self.library.add_new_list(name, songs);
        log::debug!("Created playlist {}", id);
        id
    }

    /// Add a list restored by the host's storage layer
    ///
    /// Replacing the loaded list starts a fresh history, since the recorded
    /// transactions no longer match the new document.
    pub fn insert_list(&mut self, list: Playlist) -> ListId {
        let id = self.library.insert(list);
        if self.current == Some(id) {
            self.transactions.clear();
            log::debug!("Replaced loaded playlist {}, history cleared", id);
        }
        id
    }

    /// Make `id` the edited list, starting a fresh history
    pub fn load_list(&mut self, id: ListId) -> SessionResult<()> {
        if self.library.get(id).is_none() {
            return Err(PlaylistError::UnknownList(id).into());
        }
        self.current = Some(id);
        self.transactions.clear();
        log::debug!("Loaded playlist {}", id);
        Ok(())
    }

    pub fn close_list(&mut self) {
        if let Some(id) = self.current.take() {
            log::debug!("Closed playlist {}", id);
        }
        self.transactions.clear();
    }

    pub fn delete_list(&mut self, id: ListId) -> SessionResult<Playlist> {
        let removed = self.library.delete_list(id)?;
        if self.current == Some(id) {
            self.close_list();
        }
        Ok(removed)
    }

    pub fn rename_current_list(&mut self, name: impl Into<String>) -> SessionResult<()> {
        let id = self.current.ok_or(SessionError::NoListLoaded)?;
        self.library.rename_list(id, name)?;
        Ok(())
    }

    pub fn current_list_id(&self) -> Option<ListId> {
        self.current
    }

    pub fn current_list(&self) -> Option<&Playlist> {
        self.current.and_then(|id| self.library.get(id))
    }

    // ---- undoable edits ----

    /// Run a transaction against the loaded list and record it
    pub fn do_transaction(&mut self, transaction: Box<dyn Transaction>) -> SessionResult<()> {
        let id = self.current.ok_or(SessionError::NoListLoaded)?;
        let list = self
            .library
            .get_mut(id)
            .ok_or(PlaylistError::UnknownList(id))?;
        self.transactions.execute(transaction, list)?;
        Ok(())
    }

    /// Append the configured default song
    pub fn add_create_song_transaction(&mut self) -> SessionResult<()> {
        let list = self.current_list().ok_or(SessionError::NoListLoaded)?;
        let transaction =
            CreateSongTransaction::capture(list, list.len(), self.config.default_song.clone())?;
        self.do_transaction(Box::new(transaction))
    }

    pub fn add_remove_song_transaction(&mut self, index: usize) -> SessionResult<()> {
        let list = self.current_list().ok_or(SessionError::NoListLoaded)?;
        let transaction = RemoveSongTransaction::capture(list, index)?;
        self.do_transaction(Box::new(transaction))
    }

    pub fn add_update_song_transaction(
        &mut self,
        index: usize,
        title: impl Into<String>,
        artist: impl Into<String>,
        you_tube_id: impl Into<String>,
    ) -> SessionResult<()> {
        let list = self.current_list().ok_or(SessionError::NoListLoaded)?;
        let new_song = Song::new(title, artist, you_tube_id);
        let transaction = UpdateSongTransaction::capture(list, index, new_song)?;
        self.do_transaction(Box::new(transaction))
    }

    pub fn add_move_song_transaction(&mut self, from: usize, to: usize) -> SessionResult<()> {
        let list = self.current_list().ok_or(SessionError::NoListLoaded)?;
        let transaction = match MoveSongTransaction::capture(list, from, to) {
            Ok(transaction) => transaction,
            Err(err) => {
                log::warn!("Rejected move {} -> {}: {}", from, to, err);
                return Err(err.into());
            }
        };
        self.do_transaction(Box::new(transaction))
    }

    /// Undo the last edit; `Ok(None)` when there is nothing to undo
    pub fn undo(&mut self) -> SessionResult<Option<String>> {
        if !self.transactions.can_undo() {
            return Ok(None);
        }
        let id = self.current.ok_or(SessionError::NoListLoaded)?;
        let list = self
            .library
            .get_mut(id)
            .ok_or(PlaylistError::UnknownList(id))?;
        Ok(self.transactions.undo(list)?)
    }

    /// Redo the last undone edit; `Ok(None)` when there is nothing to redo
    pub fn redo(&mut self) -> SessionResult<Option<String>> {
        if !self.transactions.can_redo() {
            return Ok(None);
        }
        let id = self.current.ok_or(SessionError::NoListLoaded)?;
        let list = self
            .library
            .get_mut(id)
            .ok_or(PlaylistError::UnknownList(id))?;
        Ok(self.transactions.redo(list)?)
    }

    // ---- toolbar state ----

    pub fn can_undo(&self) -> bool {
        self.transactions.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.transactions.can_redo()
    }

    pub fn can_add_song(&self) -> bool {
        self.current.is_some()
    }

    pub fn can_close(&self) -> bool {
        self.current.is_some()
    }

    pub fn undo_description(&self) -> Option<String> {
        self.transactions.undo_description()
    }

    pub fn redo_description(&self) -> Option<String> {
        self.transactions.redo_description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(titles: &[&str]) -> (PlaylistSession, ListId) {
        let mut session = PlaylistSession::default();
        let id = session.add_new_list(
            "Mix",
            titles.iter().map(|t| Song::titled(*t)).collect(),
        );
        session.load_list(id).unwrap();
        (session, id)
    }

    fn titles(session: &PlaylistSession) -> Vec<String> {
        session
            .current_list()
            .unwrap()
            .songs()
            .iter()
            .map(|s| s.title.clone())
            .collect()
    }

    #[test]
    fn test_edit_without_list() {
        let mut session = PlaylistSession::default();
        assert_eq!(
            session.add_create_song_transaction(),
            Err(SessionError::NoListLoaded)
        );
        assert_eq!(session.undo(), Ok(None));
        assert!(!session.can_add_song());
    }

    #[test]
    fn test_add_song_uses_configured_default() {
        let config = EditorConfig {
            max_history: 0,
            default_song: Song::new("Fresh", "Someone", "xyz"),
        };
        let mut session = PlaylistSession::new(config);
        let id = session.add_new_list("Mix", vec![]);
        session.load_list(id).unwrap();

        session.add_create_song_transaction().unwrap();
        assert_eq!(
            session.current_list().unwrap().song(0),
            Some(&Song::new("Fresh", "Someone", "xyz"))
        );
        assert_eq!(session.undo_description().as_deref(), Some("Add Song 'Fresh'"));
    }

    #[test]
    fn test_update_then_undo() {
        let (mut session, _) = session_with(&["A", "B"]);
        session.add_update_song_transaction(1, "C", "Artist", "id").unwrap();
        assert_eq!(titles(&session), vec!["A", "C"]);

        session.undo().unwrap();
        assert_eq!(session.current_list().unwrap().song(1), Some(&Song::titled("B")));
    }

    #[test]
    fn test_move_onto_itself_rejected() {
        let (mut session, _) = session_with(&["A", "B"]);
        assert_eq!(
            session.add_move_song_transaction(1, 1),
            Err(SessionError::Transaction(TransactionError::InvalidMove(1)))
        );
        assert!(!session.can_undo());
    }

    #[test]
    fn test_invalid_remove_never_enters_history() {
        let (mut session, _) = session_with(&["A"]);
        assert!(session.add_remove_song_transaction(4).is_err());
        assert!(!session.can_undo());
        assert_eq!(titles(&session), vec!["A"]);
    }

    #[test]
    fn test_load_list_clears_history() {
        let (mut session, first) = session_with(&["A"]);
        let second = session.add_new_list("Other", vec![]);

        session.add_remove_song_transaction(0).unwrap();
        session.load_list(second).unwrap();
        assert!(!session.can_undo());

        // the edit stays applied to the first list
        session.load_list(first).unwrap();
        assert!(titles(&session).is_empty());
    }

    #[test]
    fn test_replacing_loaded_list_clears_history() {
        let mut session = PlaylistSession::default();
        let stored = Playlist::new("Mix", vec![Song::titled("A"), Song::titled("B")]);
        let id = session.insert_list(stored.clone());
        session.load_list(id).unwrap();

        session.add_remove_song_transaction(0).unwrap();
        assert!(session.can_undo());

        // the host restores the stored copy over the edited one
        assert_eq!(session.insert_list(stored), id);
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(session.undo(), Ok(None));
        assert_eq!(titles(&session), vec!["A", "B"]);
    }

    #[test]
    fn test_inserting_other_list_keeps_history() {
        let (mut session, id) = session_with(&["A"]);
        session.add_create_song_transaction().unwrap();

        let other = session.insert_list(Playlist::new("Other", vec![]));
        assert_ne!(other, id);
        assert!(session.can_undo());

        session.undo().unwrap();
        assert_eq!(titles(&session), vec!["A"]);
    }

    #[test]
    fn test_delete_current_list_closes_it() {
        let (mut session, id) = session_with(&["A"]);
        session.add_create_song_transaction().unwrap();

        let removed = session.delete_list(id).unwrap();
        assert_eq!(removed.len(), 2);
        assert_eq!(session.current_list_id(), None);
        assert!(!session.can_undo());
        assert!(!session.can_close());
    }

    #[test]
    fn test_rename_current_list() {
        let (mut session, _) = session_with(&[]);
        session.rename_current_list("Road Trip").unwrap();
        assert_eq!(session.current_list().unwrap().name, "Road Trip");

        session.close_list();
        assert_eq!(
            session.rename_current_list("x"),
            Err(SessionError::NoListLoaded)
        );
    }

    #[test]
    fn test_shared_session_across_threads() {
        let (session, _) = session_with(&["A"]);
        let shared = session.into_shared();

        let worker = Arc::clone(&shared);
        std::thread::spawn(move || {
            let mut session = worker.lock().unwrap();
            session.add_create_song_transaction().unwrap();
        })
        .join()
        .unwrap();

        let mut session = shared.lock().unwrap();
        assert_eq!(session.current_list().unwrap().len(), 2);
        session.undo().unwrap();
        assert_eq!(session.current_list().unwrap().len(), 1);
    }
}
