//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls and list derivation into use-case APIs.
//! - Keep UI layers decoupled from store and ranking details.

pub mod note_service;
