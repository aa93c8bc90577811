//! Note domain model.
//!
//! # Responsibility
//! - Define the note record, attachment references and write inputs.
//! - Keep behavior-free data shapes shared by store and query layers.
//!
//! # Invariants
//! - Every note is identified by a stable `NoteId`.
//! - Deletion removes the record; there is no tombstone state.

pub mod note;
