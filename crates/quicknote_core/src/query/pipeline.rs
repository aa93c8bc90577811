//! Filter -> sort -> search derivation of the displayed note list.
//!
//! # Invariants
//! - `derive_view` is pure: same inputs, same output; inputs are untouched.
//! - Search only ever narrows and reorders the filtered, sorted set.
//! - A blank (after trimming) query skips ranking entirely.

use crate::model::note::Note;
use crate::query::filter::NoteFilter;
use crate::query::sort::{SortKey, SortSpec};
use crate::search::NoteRanker;
use serde::{Deserialize, Serialize};

/// User-selected list criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListCriteria {
    pub filter: NoteFilter,
    pub sort: SortSpec,
    pub search_query: String,
}

impl ListCriteria {
    pub fn with_filter(mut self, filter: NoteFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Applies a sort-key selection; see [`SortSpec::select`].
    pub fn select_sort(&mut self, key: SortKey) {
        self.sort.select(key);
    }

    /// Returns the trimmed query, or `None` when search is inactive.
    pub fn active_query(&self) -> Option<&str> {
        let trimmed = self.search_query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}

/// Derives the displayed sequence from `notes` and `criteria`.
///
/// `now_ms` is the evaluation instant for the recency filter.
pub fn derive_view<R>(notes: &[Note], criteria: &ListCriteria, ranker: &R, now_ms: i64) -> Vec<Note>
where
    R: NoteRanker + ?Sized,
{
    let mut view = criteria.filter.apply(notes, now_ms);
    criteria.sort.sort(&mut view);

    match criteria.active_query() {
        Some(query) => ranker.rank(view, query),
        None => view,
    }
}

/// Why a derived list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The store holds no notes at all.
    NoNotes,
    /// Notes exist but none survive the current criteria.
    NoResults,
}

impl EmptyState {
    /// Classifies an empty view; `None` when something is displayed.
    pub fn classify(total_notes: usize, displayed: usize) -> Option<Self> {
        match (total_notes, displayed) {
            (_, shown) if shown > 0 => None,
            (0, _) => Some(Self::NoNotes),
            _ => Some(Self::NoResults),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::NoNotes => "No notes yet",
            Self::NoResults => "No results found",
        }
    }

    pub fn hint(self) -> &'static str {
        match self {
            Self::NoNotes => "Tap the + button to create your first note",
            Self::NoResults => "Try a different search term",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_view, EmptyState, ListCriteria};
    use crate::model::note::Note;
    use crate::search::NoteRanker;
    use std::cell::Cell;
    use uuid::Uuid;

    struct CountingRanker {
        calls: Cell<usize>,
    }

    impl NoteRanker for CountingRanker {
        fn rank(&self, notes: Vec<Note>, _query: &str) -> Vec<Note> {
            self.calls.set(self.calls.get() + 1);
            notes.into_iter().rev().collect()
        }
    }

    fn note(heading: &str, updated_at: i64) -> Note {
        Note {
            id: Uuid::new_v4(),
            heading: heading.to_string(),
            description: String::new(),
            images: Vec::new(),
            files: Vec::new(),
            created_at: 0,
            updated_at,
        }
    }

    #[test]
    fn blank_query_skips_ranker() {
        let ranker = CountingRanker {
            calls: Cell::new(0),
        };
        let notes = vec![note("a", 1), note("b", 2)];
        let criteria = ListCriteria::default().with_search("   ");

        let view = derive_view(&notes, &criteria, &ranker, 0);
        assert_eq!(ranker.calls.get(), 0);
        assert_eq!(view[0].heading, "b");
    }

    #[test]
    fn ranker_sees_sorted_input() {
        let ranker = CountingRanker {
            calls: Cell::new(0),
        };
        let notes = vec![note("a", 1), note("b", 2), note("c", 3)];
        let criteria = ListCriteria::default().with_search("x");

        let view = derive_view(&notes, &criteria, &ranker, 0);
        assert_eq!(ranker.calls.get(), 1);
        let headings: Vec<_> = view.iter().map(|n| n.heading.as_str()).collect();
        assert_eq!(headings, vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_state_distinguishes_no_notes_from_no_results() {
        assert_eq!(EmptyState::classify(0, 0), Some(EmptyState::NoNotes));
        assert_eq!(EmptyState::classify(3, 0), Some(EmptyState::NoResults));
        assert_eq!(EmptyState::classify(3, 1), None);
        assert_eq!(EmptyState::NoResults.title(), "No results found");
    }
}
