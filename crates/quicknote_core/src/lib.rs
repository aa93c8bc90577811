//! Core domain logic for QuickNote.
//! This crate is the single source of truth for note invariants and the
//! displayed-list derivation.

pub mod clock;
pub mod logging;
pub mod model;
pub mod query;
pub mod search;
pub mod service;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::note::{
    Attachment, Note, NoteDraft, NoteId, NotePatch, NoteValidationError, DEFAULT_MIME_TYPE,
};
pub use query::filter::{NoteFilter, RECENT_WINDOW_MS};
pub use query::pipeline::{derive_view, EmptyState, ListCriteria};
pub use query::sort::{compare_headings, SortKey, SortOrder, SortSpec};
pub use search::fuzzy::{FuzzyOptions, FuzzyRanker};
pub use search::NoteRanker;
pub use service::note_service::{NoteService, NotesView};
pub use store::memory::InMemoryNoteStore;
pub use store::{NoteStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
