//! Live composing surface model and decoration pass.
//!
//! # Responsibility
//! - Hold the transient plain-text document being composed.
//! - Derive the presentation overlay the host view renders while typing.
//!
//! # Invariants
//! - The decoration pass never mutates the document.
//! - Decoration is synchronous and touches no storage.

pub mod decorator;
pub mod document;
