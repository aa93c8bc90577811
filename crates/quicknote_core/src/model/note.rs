//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical note record and its attachment references.
//! - Define the write-side input shapes (`NoteDraft`, `NotePatch`).
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - `created_at <= updated_at` for every stored note.
//! - A stored note never has both `heading` and `description` blank.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier of a note.
pub type NoteId = Uuid;

/// MIME type used when a picker does not report one.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// Validation failures for note content and timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Heading and description are both empty after trimming.
    EmptyContent,
    /// `updated_at` is earlier than `created_at`.
    TimestampOrder { created_at: i64, updated_at: i64 },
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "note heading and description cannot both be empty"),
            Self::TimestampOrder {
                created_at,
                updated_at,
            } => write!(
                f,
                "updated_at ({updated_at}) must be >= created_at ({created_at})"
            ),
        }
    }
}

impl Error for NoteValidationError {}

/// Reference to a non-image file attached to a note.
///
/// Only the location handle is stored; bytes stay with the platform layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// Opaque location handle owned by the platform file/cache layer.
    pub uri: String,
    /// Display filename.
    pub name: String,
    /// MIME type. Serialized as `type` to match external schema naming.
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Byte count, when the picker reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl Attachment {
    pub fn new(
        uri: impl Into<String>,
        name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            uri: uri.into(),
            name: name.into(),
            mime_type: mime_type.into(),
            size: None,
        }
    }

    /// Builds an attachment from raw picker output.
    ///
    /// A missing or blank MIME type falls back to [`DEFAULT_MIME_TYPE`].
    pub fn from_picker(
        uri: impl Into<String>,
        name: impl Into<String>,
        mime_type: Option<&str>,
        size: Option<u64>,
    ) -> Self {
        let mime_type = mime_type
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_MIME_TYPE);
        Self::new(uri, name, mime_type).with_size(size)
    }

    pub fn with_size(mut self, size: Option<u64>) -> Self {
        self.size = size;
        self
    }

    /// Returns whether this file should be rendered like an image.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }
}

/// Canonical note record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub heading: String,
    pub description: String,
    /// Ordered image URIs. Absent on the wire means empty.
    #[serde(default)]
    pub images: Vec<String>,
    /// Ordered file references. Absent on the wire means empty.
    #[serde(default)]
    pub files: Vec<Attachment>,
    /// Unix epoch milliseconds, set once at creation.
    pub created_at: i64,
    /// Unix epoch milliseconds, refreshed on every update.
    pub updated_at: i64,
}

impl Note {
    /// Returns whether the note carries any image or file.
    pub fn has_attachments(&self) -> bool {
        !self.images.is_empty() || !self.files.is_empty()
    }

    /// Returns whether heading and description are both blank.
    pub fn is_blank(&self) -> bool {
        is_blank_content(&self.heading, &self.description)
    }

    /// Checks the content and timestamp invariants of a stored note.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        if self.is_blank() {
            return Err(NoteValidationError::EmptyContent);
        }
        if self.updated_at < self.created_at {
            return Err(NoteValidationError::TimestampOrder {
                created_at: self.created_at,
                updated_at: self.updated_at,
            });
        }
        Ok(())
    }
}

/// Input for creating a note. Text fields are trimmed by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub heading: String,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub files: Vec<Attachment>,
}

impl NoteDraft {
    pub fn new(heading: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            description: description.into(),
            images: Vec::new(),
            files: Vec::new(),
        }
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    pub fn with_files(mut self, files: Vec<Attachment>) -> Self {
        self.files = files;
        self
    }

    /// Returns whether saving would produce a note with no content.
    pub fn is_blank(&self) -> bool {
        is_blank_content(&self.heading, &self.description)
    }

    /// Returns whether this draft differs from what is stored.
    ///
    /// `existing = None` compares against an empty note, which is the
    /// create-new editor case. Text is compared after trimming.
    pub fn has_changes_from(&self, existing: Option<&Note>) -> bool {
        let (heading, description, images, files) = match existing {
            Some(note) => (
                note.heading.as_str(),
                note.description.as_str(),
                note.images.as_slice(),
                note.files.as_slice(),
            ),
            None => ("", "", &[][..], &[][..]),
        };

        self.heading.trim() != heading
            || self.description.trim() != description
            || self.images.as_slice() != images
            || self.files.as_slice() != files
    }
}

/// Field-by-field partial update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotePatch {
    pub heading: Option<String>,
    pub description: Option<String>,
    pub images: Option<Vec<String>>,
    pub files: Option<Vec<Attachment>>,
}

impl NotePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn images(mut self, images: Vec<String>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn files(mut self, files: Vec<Attachment>) -> Self {
        self.files = Some(files);
        self
    }

    /// Returns whether no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.heading.is_none()
            && self.description.is_none()
            && self.images.is_none()
            && self.files.is_none()
    }

    /// Merges supplied fields into `note`, trimming text fields.
    ///
    /// Identity and timestamps are never touched here.
    pub fn apply_to(self, note: &mut Note) {
        if let Some(heading) = self.heading {
            note.heading = heading.trim().to_string();
        }
        if let Some(description) = self.description {
            note.description = description.trim().to_string();
        }
        if let Some(images) = self.images {
            note.images = images;
        }
        if let Some(files) = self.files {
            note.files = files;
        }
    }
}

impl From<NoteDraft> for NotePatch {
    /// Full replacement of every editable field, as the editor saves it.
    fn from(draft: NoteDraft) -> Self {
        Self {
            heading: Some(draft.heading),
            description: Some(draft.description),
            images: Some(draft.images),
            files: Some(draft.files),
        }
    }
}

fn is_blank_content(heading: &str, description: &str) -> bool {
    heading.trim().is_empty() && description.trim().is_empty()
}
