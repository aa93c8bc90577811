//! List filters.

use crate::model::note::Note;
use serde::{Deserialize, Serialize};

/// Lookback used by [`NoteFilter::Recent`]: three days in milliseconds.
pub const RECENT_WINDOW_MS: i64 = 3 * 24 * 60 * 60 * 1000;

/// Mutually exclusive list filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteFilter {
    /// Keeps every note.
    #[default]
    All,
    /// Keeps notes updated within [`RECENT_WINDOW_MS`] of the evaluation time.
    Recent,
    /// Keeps notes with at least one image or file.
    WithAttachments,
}

impl NoteFilter {
    /// Returns whether `note` passes this filter at `now_ms`.
    ///
    /// The recency boundary is inclusive.
    pub fn matches(self, note: &Note, now_ms: i64) -> bool {
        match self {
            Self::All => true,
            Self::Recent => note.updated_at >= now_ms.saturating_sub(RECENT_WINDOW_MS),
            Self::WithAttachments => note.has_attachments(),
        }
    }

    /// Clones the passing notes, preserving input order.
    pub fn apply(self, notes: &[Note], now_ms: i64) -> Vec<Note> {
        notes
            .iter()
            .filter(|note| self.matches(note, now_ms))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteFilter, RECENT_WINDOW_MS};
    use crate::model::note::{Attachment, Note};
    use uuid::Uuid;

    fn note_at(updated_at: i64) -> Note {
        Note {
            id: Uuid::new_v4(),
            heading: "h".to_string(),
            description: String::new(),
            images: Vec::new(),
            files: Vec::new(),
            created_at: 0,
            updated_at,
        }
    }

    #[test]
    fn recent_boundary_is_inclusive() {
        let now = 10 * RECENT_WINDOW_MS;
        assert!(NoteFilter::Recent.matches(&note_at(now - RECENT_WINDOW_MS), now));
        assert!(!NoteFilter::Recent.matches(&note_at(now - RECENT_WINDOW_MS - 1), now));
    }

    #[test]
    fn with_attachments_accepts_images_or_files() {
        let mut with_image = note_at(0);
        with_image.images.push("file:///photo.jpg".to_string());
        let mut with_file = note_at(0);
        with_file
            .files
            .push(Attachment::new("file:///a.pdf", "a.pdf", "application/pdf"));

        assert!(NoteFilter::WithAttachments.matches(&with_image, 0));
        assert!(NoteFilter::WithAttachments.matches(&with_file, 0));
        assert!(!NoteFilter::WithAttachments.matches(&note_at(0), 0));
    }
}
