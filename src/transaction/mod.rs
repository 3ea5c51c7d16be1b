// Transaction processing for undo/redo
//
// Every reversible playlist edit is a Transaction that the TransactionStack
// applies, undoes and redoes in strict order.
//
// Architecture:
// - Transaction trait: execute(), undo(), description()
// - TransactionStack: history plus a cursor separating applied entries
//   from the redo tail
// - Concrete transactions: CreateSong, RemoveSong, UpdateSong, MoveSong
//
// The stack never looks at the playlist itself; it only hands the document
// to the transaction it is running.

pub mod stack;
pub mod trait_def;
pub mod transactions;

pub use stack::TransactionStack;
pub use trait_def::{Transaction, TransactionError, TransactionResult};
pub use transactions::{
    CreateSongTransaction, MoveSongTransaction, RemoveSongTransaction, UpdateSongTransaction,
};
