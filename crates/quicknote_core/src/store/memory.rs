//! In-memory note store.
//!
//! # Responsibility
//! - Own the live note mapping for one process session.
//! - Stamp identity and timestamps from injected sources.
//!
//! # Invariants
//! - Ids are unique among live notes; generation retries on collision.
//! - `updated_at` never drops below `created_at`, even if the clock steps back.
//! - Blank heading + description is rejected with `InvalidInput`.

use crate::clock::{Clock, SystemClock};
use crate::model::note::{Note, NoteDraft, NoteId, NotePatch, NoteValidationError};
use crate::store::{sort_by_recency, NoteStore, StoreError, StoreResult};
use log::{debug, warn};
use std::collections::HashMap;
use uuid::Uuid;

const WELCOME_HEADING: &str = "Welcome to Notes!";
const WELCOME_DESCRIPTION: &str = "This is your first note. Tap to view or edit it.";
const TIPS_HEADING: &str = "Quick Tips";
const TIPS_DESCRIPTION: &str =
    "You can add images to your notes and organize them however you like!";
const TIPS_AGE_MS: i64 = 1_000;

/// `HashMap`-backed note store.
pub struct InMemoryNoteStore<C: Clock = SystemClock> {
    notes: HashMap<NoteId, Note>,
    clock: C,
}

impl Default for InMemoryNoteStore<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> InMemoryNoteStore<C> {
    /// Creates an empty store.
    pub fn new(clock: C) -> Self {
        Self {
            notes: HashMap::new(),
            clock,
        }
    }

    /// Creates a store seeded with the two starter notes.
    ///
    /// "Quick Tips" is stamped one second older than "Welcome to Notes!", so
    /// the welcome note lists first.
    pub fn with_welcome_notes(clock: C) -> Self {
        let mut store = Self::new(clock);
        let now = store.clock.now_ms();
        store.insert_seed(WELCOME_HEADING, WELCOME_DESCRIPTION, now);
        store.insert_seed(TIPS_HEADING, TIPS_DESCRIPTION, now - TIPS_AGE_MS);
        store
    }

    /// Returns the clock used for timestamps.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn insert_seed(&mut self, heading: &str, description: &str, at: i64) {
        let note = Note {
            id: self.next_id(),
            heading: heading.to_string(),
            description: description.to_string(),
            images: Vec::new(),
            files: Vec::new(),
            created_at: at,
            updated_at: at,
        };
        self.notes.insert(note.id, note);
    }

    fn next_id(&self) -> NoteId {
        loop {
            let candidate = Uuid::new_v4();
            if !self.notes.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}

impl<C: Clock> NoteStore for InMemoryNoteStore<C> {
    fn add(&mut self, draft: NoteDraft) -> StoreResult<Note> {
        if draft.is_blank() {
            warn!("event=note_add module=store status=rejected reason=empty_content");
            return Err(StoreError::InvalidInput(NoteValidationError::EmptyContent));
        }

        let now = self.clock.now_ms();
        let note = Note {
            id: self.next_id(),
            heading: draft.heading.trim().to_string(),
            description: draft.description.trim().to_string(),
            images: draft.images,
            files: draft.files,
            created_at: now,
            updated_at: now,
        };
        self.notes.insert(note.id, note.clone());

        debug!(
            "event=note_add module=store status=ok note_id={} images={} files={}",
            note.id,
            note.images.len(),
            note.files.len()
        );
        Ok(note)
    }

    fn update(&mut self, id: NoteId, patch: NotePatch) -> StoreResult<Note> {
        let Some(existing) = self.notes.get(&id) else {
            warn!("event=note_update module=store status=not_found note_id={id}");
            return Err(StoreError::NotFound(id));
        };

        let mut candidate = existing.clone();
        patch.apply_to(&mut candidate);
        candidate.updated_at = self.clock.now_ms().max(candidate.created_at);
        if let Err(err) = candidate.validate() {
            warn!("event=note_update module=store status=rejected note_id={id} reason={err}");
            return Err(err.into());
        }

        self.notes.insert(id, candidate.clone());
        debug!(
            "event=note_update module=store status=ok note_id={id} updated_at={}",
            candidate.updated_at
        );
        Ok(candidate)
    }

    fn delete(&mut self, id: NoteId) {
        let removed = self.notes.remove(&id).is_some();
        debug!("event=note_delete module=store status=ok note_id={id} removed={removed}");
    }

    fn get(&self, id: NoteId) -> Option<Note> {
        self.notes.get(&id).cloned()
    }

    fn list(&self) -> Vec<Note> {
        let mut notes: Vec<Note> = self.notes.values().cloned().collect();
        sort_by_recency(&mut notes);
        notes
    }

    fn len(&self) -> usize {
        self.notes.len()
    }
}
