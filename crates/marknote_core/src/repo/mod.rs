//! Persistence contracts and key-value implementations.
//!
//! # Responsibility
//! - Define the key-value access contract the note history is stored behind.
//! - Keep SQLite details out of service/orchestration code.
//!
//! # Invariants
//! - The note history is the only writer of its storage key.
//! - Load paths fail open to empty state; write paths surface errors.

pub mod kv;
pub mod note_store;
