//! Search ranking entry points.
//!
//! # Responsibility
//! - Define the ranking strategy seam used by the list pipeline.
//! - Provide the default approximate-match ranker over heading/description.
//!
//! # Invariants
//! - A ranker returns a subsequence of its input: no synthesized or
//!   duplicated notes.

use crate::model::note::Note;

pub mod fuzzy;

/// Strategy that filters and re-orders notes for a search query.
pub trait NoteRanker {
    /// Returns the notes matching `query`, best match first.
    ///
    /// Callers skip ranking for blank queries; implementations may assume a
    /// non-empty, trimmed query.
    fn rank(&self, notes: Vec<Note>, query: &str) -> Vec<Note>;
}

impl<R: NoteRanker + ?Sized> NoteRanker for &R {
    fn rank(&self, notes: Vec<Note>, query: &str) -> Vec<Note> {
        (**self).rank(notes, query)
    }
}

impl<R: NoteRanker + ?Sized> NoteRanker for Box<R> {
    fn rank(&self, notes: Vec<Note>, query: &str) -> Vec<Note> {
        (**self).rank(notes, query)
    }
}
