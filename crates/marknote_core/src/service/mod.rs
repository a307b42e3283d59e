//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate the compose/decorate/save flow over the persistence layer.
//! - Keep host view layers decoupled from storage details.

pub mod editor_service;
