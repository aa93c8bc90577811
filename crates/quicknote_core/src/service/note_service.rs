//! Note use-case service.
//!
//! # Responsibility
//! - Provide editor-level create/save/delete/get APIs over a `NoteStore`.
//! - Hold the list criteria and derive the displayed list on demand.
//!
//! # Invariants
//! - Every read and write goes through the wrapped store.
//! - The displayed list is recomputed from `store.list()` on every call.
//! - Saving an existing note replaces all editable fields, never identity.

use crate::clock::Clock;
use crate::model::note::{Note, NoteDraft, NoteId, NotePatch};
use crate::query::filter::NoteFilter;
use crate::query::pipeline::{derive_view, EmptyState, ListCriteria};
use crate::query::sort::SortKey;
use crate::search::NoteRanker;
use crate::store::{NoteStore, StoreResult};

/// Displayed list plus its empty-state classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesView {
    /// Notes in display order.
    pub items: Vec<Note>,
    /// Total live notes before filtering and search.
    pub total: usize,
    /// Set only when `items` is empty.
    pub empty_state: Option<EmptyState>,
}

/// Note service facade over a store, a clock and a search strategy.
pub struct NoteService<S, C, R>
where
    S: NoteStore,
    C: Clock,
    R: NoteRanker,
{
    store: S,
    clock: C,
    ranker: R,
    criteria: ListCriteria,
}

impl<S, C, R> NoteService<S, C, R>
where
    S: NoteStore,
    C: Clock,
    R: NoteRanker,
{
    /// Creates a service with default list criteria.
    pub fn new(store: S, clock: C, ranker: R) -> Self {
        Self {
            store,
            clock,
            ranker,
            criteria: ListCriteria::default(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn criteria(&self) -> &ListCriteria {
        &self.criteria
    }

    /// Creates one note.
    pub fn create_note(&mut self, draft: NoteDraft) -> StoreResult<Note> {
        self.store.add(draft)
    }

    /// Merges a partial update into one note.
    pub fn update_note(&mut self, id: NoteId, patch: NotePatch) -> StoreResult<Note> {
        self.store.update(id, patch)
    }

    /// Saves editor state: creates when `target` is `None`, otherwise
    /// replaces every editable field of the target note.
    pub fn save_draft(&mut self, target: Option<NoteId>, draft: NoteDraft) -> StoreResult<Note> {
        match target {
            Some(id) => self.store.update(id, NotePatch::from(draft)),
            None => self.store.add(draft),
        }
    }

    pub fn delete_note(&mut self, id: NoteId) {
        self.store.delete(id);
    }

    pub fn get_note(&self, id: NoteId) -> Option<Note> {
        self.store.get(id)
    }

    /// Lists notes in canonical store order.
    pub fn list_notes(&self) -> Vec<Note> {
        self.store.list()
    }

    pub fn set_filter(&mut self, filter: NoteFilter) {
        self.criteria.filter = filter;
    }

    /// Selects a sort key; re-selecting the active key flips the order.
    pub fn select_sort(&mut self, key: SortKey) {
        self.criteria.select_sort(key);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.criteria.search_query = query.into();
    }

    pub fn clear_search(&mut self) {
        self.criteria.search_query.clear();
    }

    /// Derives the displayed list for the current criteria.
    pub fn displayed_notes(&self) -> NotesView {
        let notes = self.store.list();
        let items = derive_view(&notes, &self.criteria, &self.ranker, self.clock.now_ms());
        NotesView {
            empty_state: EmptyState::classify(notes.len(), items.len()),
            total: notes.len(),
            items,
        }
    }
}
