//! Note store contract and implementations.
//!
//! # Responsibility
//! - Define the CRUD seam every note read/write passes through.
//! - Return semantic errors (`NotFound`, `InvalidInput`) instead of panics.
//!
//! # Invariants
//! - Writes are atomic per call: a failed call leaves the store unchanged.
//! - `list()` is always `updated_at DESC, id ASC`, recomputed on each call.
//! - `delete` and `get` treat absence as a normal result, not an error.

use crate::model::note::{Note, NoteDraft, NoteId, NotePatch, NoteValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod memory;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for note mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Target note does not exist.
    NotFound(NoteId),
    /// The write would persist a note that breaks a model invariant.
    InvalidInput(NoteValidationError),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidInput(err) => write!(f, "invalid note input: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::InvalidInput(err) => Some(err),
        }
    }
}

impl From<NoteValidationError> for StoreError {
    fn from(value: NoteValidationError) -> Self {
        Self::InvalidInput(value)
    }
}

/// Repository interface for note CRUD operations.
///
/// A persistence layer would implement this trait; callers hold an explicit
/// handle to one store instance.
pub trait NoteStore {
    /// Creates a note from trimmed draft fields and returns it.
    fn add(&mut self, draft: NoteDraft) -> StoreResult<Note>;
    /// Merges supplied fields into an existing note and refreshes `updated_at`.
    fn update(&mut self, id: NoteId, patch: NotePatch) -> StoreResult<Note>;
    /// Removes a note. Missing ids are a no-op.
    fn delete(&mut self, id: NoteId);
    /// Gets one note by id without touching timestamps.
    fn get(&self, id: NoteId) -> Option<Note>;
    /// Lists notes, most recently updated first.
    fn list(&self) -> Vec<Note>;
    /// Number of live notes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Sorts notes into the canonical store order: `updated_at DESC, id ASC`.
pub fn sort_by_recency(notes: &mut [Note]) {
    notes.sort_by(|a, b| {
        b.updated_at
            .cmp(&a.updated_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}
