//! Marker-recognition and text-to-markup translation engine.
//!
//! # Responsibility
//! - Own the line-prefix rule table shared by the live and batch paths.
//! - Keep matching logic separate from presentation lookup.
//!
//! # Invariants
//! - Rules are evaluated longest-marker-first, so a `*** ` line is never
//!   claimed by the `* ` rule.
//! - A line matches a rule only when it starts with the literal marker
//!   including its trailing space.

pub mod presentation;
pub mod rules;
pub mod translate;
