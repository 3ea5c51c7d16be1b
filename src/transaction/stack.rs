// TransactionStack - undo/redo history with a cursor

use crate::playlist::Playlist;
use crate::transaction::trait_def::{Transaction, TransactionResult};

/// Manages transaction execution and undo/redo
///
/// The stack keeps a single history vector and a cursor:
/// - `history[..position]`: transactions currently applied to the playlist
/// - `history[position..]`: undone transactions that can be redone
///
/// Executing a new transaction drops the redo tail first, so history is
/// always linear.
///
/// # Failures
/// The cursor only moves after a transaction reports success. Playlist
/// mutations validate before they change anything, so a failed `execute`,
/// `undo` or `redo` leaves both the playlist and the history as they were
/// and the error is returned to the caller.
///
/// # Memory Management
/// An optional history limit drops the oldest applied transaction once the
/// limit is exceeded. A limit of 0 keeps everything.
pub struct TransactionStack {
    history: Vec<Box<dyn Transaction>>,

    /// Number of transactions currently applied
    position: usize,

    /// Maximum number of transactions kept, 0 for unlimited
    max_history: usize,
}

impl TransactionStack {
    /// Create an empty stack without a history limit
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty stack keeping at most `max_history` transactions
    pub fn with_capacity(max_history: usize) -> Self {
        Self {
            history: Vec::new(),
            position: 0,
            max_history,
        }
    }

    /// Execute a transaction and record it
    ///
    /// This will:
    /// 1. Execute the transaction
    /// 2. Drop the redo tail (new timeline)
    /// 3. Append it to the history
    /// 4. Trim history if needed
    ///
    /// # Errors
    /// Returns the transaction's error if it could not be applied; nothing
    /// is recorded in that case and the redo tail survives.
    #[doc(alias = "do")]
    pub fn execute(
        &mut self,
        transaction: Box<dyn Transaction>,
        playlist: &mut Playlist,
    ) -> TransactionResult<()> {
        if let Err(err) = transaction.execute(playlist) {
            log::warn!("{} failed: {}", transaction.description(), err);
            return Err(err);
        }
        log::debug!("Applied: {}", transaction.description());

        if self.position < self.history.len() {
            log::debug!(
                "Discarding {} redoable transaction(s)",
                self.history.len() - self.position
            );
            self.history.truncate(self.position);
        }

        self.history.push(transaction);
        self.position += 1;

        if self.max_history > 0 && self.history.len() > self.max_history {
            let excess = self.history.len() - self.max_history;
            self.history.drain(..excess);
            self.position -= excess;
        }

        Ok(())
    }

    /// Undo the most recently applied transaction
    ///
    /// Returns `Ok(None)` when there is nothing to undo, otherwise the
    /// description of the transaction that was undone.
    ///
    /// # Errors
    /// Returns an error if the undo could not be applied; the cursor does
    /// not move.
    pub fn undo(&mut self, playlist: &mut Playlist) -> TransactionResult<Option<String>> {
        if self.position == 0 {
            return Ok(None);
        }

        let transaction = &self.history[self.position - 1];
        let description = transaction.description();

        if let Err(err) = transaction.undo(playlist) {
            log::warn!("Undo of {} failed: {}", description, err);
            return Err(err);
        }

        self.position -= 1;
        log::debug!("Undone: {}", description);

        Ok(Some(description))
    }

    /// Redo the next undone transaction
    ///
    /// Returns `Ok(None)` when there is nothing to redo, otherwise the
    /// description of the transaction that was re-applied.
    ///
    /// # Errors
    /// Returns an error if the transaction could not be re-applied; the
    /// cursor does not move.
    pub fn redo(&mut self, playlist: &mut Playlist) -> TransactionResult<Option<String>> {
        let Some(transaction) = self.history.get(self.position) else {
            return Ok(None);
        };
        let description = transaction.description();

        if let Err(err) = transaction.execute(playlist) {
            log::warn!("Redo of {} failed: {}", description, err);
            return Err(err);
        }

        self.position += 1;
        log::debug!("Redone: {}", description);

        Ok(Some(description))
    }

    /// Check if there are transactions that can be undone
    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    /// Check if there are transactions that can be redone
    pub fn can_redo(&self) -> bool {
        self.position < self.history.len()
    }

    /// Description of the transaction that would be undone
    pub fn undo_description(&self) -> Option<String> {
        self.position
            .checked_sub(1)
            .map(|index| self.history[index].description())
    }

    /// Description of the transaction that would be redone
    pub fn redo_description(&self) -> Option<String> {
        self.history.get(self.position).map(|t| t.description())
    }

    /// Forget all history without touching the playlist
    pub fn clear(&mut self) {
        self.history.clear();
        self.position = 0;
    }

    /// Number of transactions currently applied
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of recorded transactions, applied or not
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn undo_count(&self) -> usize {
        self.position
    }

    pub fn redo_count(&self) -> usize {
        self.history.len() - self.position
    }

    pub fn max_history(&self) -> usize {
        self.max_history
    }
}

impl Default for TransactionStack {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TransactionStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionStack")
            .field(
                "history",
                &self.history.iter().map(|t| t.description()).collect::<Vec<_>>(),
            )
            .field("position", &self.position)
            .field("max_history", &self.max_history)
            .finish()
    }
}
