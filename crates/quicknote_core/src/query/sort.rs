//! Sort keys, sort state and heading collation.
//!
//! # Invariants
//! - Sorting is stable: equal keys keep their input order.
//! - Heading comparison is total and case-insensitive at the primary level.

use crate::model::note::Note;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// By `updated_at`.
    #[default]
    ModifiedTime,
    /// By `created_at`.
    CreatedTime,
    /// By `heading`, see [`compare_headings`].
    Alphabetical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort selection. Defaults to newest-modified first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Applies a sort-key selection.
    ///
    /// Re-selecting the active key flips the order; picking another key
    /// switches to it in descending order.
    pub fn select(&mut self, key: SortKey) {
        if self.key == key {
            self.order = self.order.toggled();
        } else {
            self.key = key;
            self.order = SortOrder::Descending;
        }
    }

    /// Sorts `notes` in place.
    pub fn sort(self, notes: &mut [Note]) {
        notes.sort_by(|a, b| {
            let ordering = match self.key {
                SortKey::ModifiedTime => a.updated_at.cmp(&b.updated_at),
                SortKey::CreatedTime => a.created_at.cmp(&b.created_at),
                SortKey::Alphabetical => compare_headings(&a.heading, &b.heading),
            };
            match self.order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
    }
}

/// Locale-style comparison of note headings.
///
/// Levels, in order:
/// 1. base letters: decomposed, accents stripped, lowercased;
/// 2. accents;
/// 3. case, lowercase before uppercase at the first differing letter;
/// 4. raw code points.
///
/// `["Banana", "apple", "Cherry"]` sorts to `["apple", "Banana", "Cherry"]`,
/// and `"apple"` sorts before `"Apple"`.
pub fn compare_headings(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| compare_case(a, b))
        .then_with(|| a.cmp(b))
}

fn base_key(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(value: &str) -> String {
    value.nfd().flat_map(char::to_lowercase).collect()
}

fn compare_case(a: &str, b: &str) -> Ordering {
    for (left, right) in a.nfd().zip(b.nfd()) {
        if left == right {
            continue;
        }
        match (left.is_lowercase(), right.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}
