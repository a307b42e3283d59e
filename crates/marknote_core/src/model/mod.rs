//! Domain records for saved notes.
//!
//! # Responsibility
//! - Define the canonical saved-note shape shared by service and view code.
//!
//! # Invariants
//! - The persisted form of a note is its raw text only; rendered HTML is an
//!   in-memory projection.

pub mod note;
