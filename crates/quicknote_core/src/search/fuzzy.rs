//! Approximate-match ranker over note heading and description.
//!
//! # Responsibility
//! - Score notes against a query with edit-distance tolerance.
//! - Order matches best-first, keeping input order for equal scores.
//!
//! # Invariants
//! - Field score is `errors / pattern_len + |start - location| / distance`.
//! - A field matches only when its score is `<= threshold`.
//! - Notes without a matching field are dropped, never reordered in.

use crate::model::note::Note;
use crate::search::NoteRanker;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^ ]+").expect("valid token regex"));

/// Substitute for a perfect field score so products stay meaningful.
const EXACT_MATCH_SCORE: f64 = f64::EPSILON;

/// Tuning knobs for [`FuzzyRanker`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyOptions {
    /// Highest accepted field score. `0.0` demands an exact match at
    /// `location`, `1.0` accepts almost anything.
    pub threshold: f64,
    /// Character position where a match is expected to start.
    pub location: usize,
    /// Characters of drift from `location` that cost a full score point.
    pub distance: usize,
    pub case_sensitive: bool,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            threshold: 0.4,
            location: 0,
            distance: 100,
            case_sensitive: false,
        }
    }
}

/// Default search strategy for the list pipeline.
#[derive(Debug, Clone, Default)]
pub struct FuzzyRanker {
    options: FuzzyOptions,
}

impl FuzzyRanker {
    pub fn new(options: FuzzyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FuzzyOptions {
        &self.options
    }

    /// Scores one note against `query`; lower is better.
    ///
    /// Returns `None` when neither heading nor description matches.
    pub fn score(&self, note: &Note, query: &str) -> Option<f64> {
        let pattern = self.fold(query.trim());
        if pattern.is_empty() {
            return None;
        }
        self.score_folded(note, &pattern)
    }

    fn fold(&self, text: &str) -> Vec<char> {
        if self.options.case_sensitive {
            text.chars().collect()
        } else {
            text.chars().flat_map(char::to_lowercase).collect()
        }
    }

    fn score_folded(&self, note: &Note, pattern: &[char]) -> Option<f64> {
        let mut total: Option<f64> = None;
        for field in [note.heading.as_str(), note.description.as_str()] {
            let text = self.fold(field);
            let Some(score) = best_window_score(&text, pattern, &self.options) else {
                continue;
            };
            let score = if score <= 0.0 { EXACT_MATCH_SCORE } else { score };
            total = Some(total.unwrap_or(1.0) * score.powf(field_norm(field)));
        }
        total
    }
}

impl NoteRanker for FuzzyRanker {
    fn rank(&self, notes: Vec<Note>, query: &str) -> Vec<Note> {
        let pattern = self.fold(query.trim());
        if pattern.is_empty() {
            return notes;
        }

        let candidates = notes.len();
        let mut scored: Vec<(f64, usize, Note)> = notes
            .into_iter()
            .enumerate()
            .filter_map(|(position, note)| {
                self.score_folded(&note, &pattern)
                    .map(|score| (score, position, note))
            })
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

        debug!(
            "event=search_rank module=search status=ok candidates={} hits={} pattern_chars={}",
            candidates,
            scored.len(),
            pattern.len()
        );
        scored.into_iter().map(|(_, _, note)| note).collect()
    }
}

/// Best score of any approximate occurrence of `pattern` in `text`.
///
/// Only the prefix of `text` where a match can still start within the
/// proximity budget is scanned.
fn best_window_score(text: &[char], pattern: &[char], options: &FuzzyOptions) -> Option<f64> {
    let pattern_len = pattern.len();
    if pattern_len == 0 || text.is_empty() {
        return None;
    }

    let threshold = options.threshold.max(0.0);
    let max_errors = (threshold * pattern_len as f64).floor() as usize;
    let reach = (threshold * options.distance as f64).floor() as usize;
    let scan_end = options
        .location
        .saturating_add(reach)
        .saturating_add(pattern_len + max_errors)
        .min(text.len());

    let mut aligner = SubstringAligner::new(pattern);
    let mut best: Option<f64> = None;
    for (column, text_char) in text[..scan_end].iter().enumerate() {
        let (errors, start) = aligner.advance(column, *text_char);
        if errors > max_errors {
            continue;
        }
        let score = errors as f64 / pattern_len as f64 + proximity_penalty(start, options);
        if score <= threshold && best.map_or(true, |current| score < current) {
            best = Some(score);
            if score <= 0.0 {
                break;
            }
        }
    }

    best
}

fn proximity_penalty(start: usize, options: &FuzzyOptions) -> f64 {
    let offset = start.abs_diff(options.location);
    if options.distance == 0 {
        return if offset == 0 { 0.0 } else { 1.0 };
    }
    offset as f64 / options.distance as f64
}

/// Approximate-substring edit distance, one text column at a time.
///
/// Row 0 costs nothing in every column, so an occurrence may start anywhere.
/// Each cell also carries the text position its alignment starts at.
struct SubstringAligner<'p> {
    pattern: &'p [char],
    errors: Vec<usize>,
    starts: Vec<usize>,
}

impl<'p> SubstringAligner<'p> {
    fn new(pattern: &'p [char]) -> Self {
        Self {
            pattern,
            errors: (0..=pattern.len()).collect(),
            starts: vec![0; pattern.len() + 1],
        }
    }

    /// Consumes the text char at `column` and returns `(errors, start)` of
    /// the best alignment ending there.
    fn advance(&mut self, column: usize, text_char: char) -> (usize, usize) {
        let mut diag_errors = self.errors[0];
        let mut diag_start = self.starts[0];
        self.starts[0] = column + 1;

        for row in 1..=self.pattern.len() {
            let up_errors = self.errors[row];
            let up_start = self.starts[row];
            let cost = usize::from(self.pattern[row - 1] != text_char);

            let mut errors = diag_errors + cost;
            let mut start = diag_start;
            if up_errors + 1 < errors {
                errors = up_errors + 1;
                start = up_start;
            }
            if self.errors[row - 1] + 1 < errors {
                errors = self.errors[row - 1] + 1;
                start = self.starts[row - 1];
            }

            diag_errors = up_errors;
            diag_start = up_start;
            self.errors[row] = errors;
            self.starts[row] = start;
        }

        let last = self.pattern.len();
        (self.errors[last], self.starts[last])
    }
}

/// Field-length norm: shorter fields weigh matches more heavily.
fn field_norm(field: &str) -> f64 {
    let tokens = TOKEN_RE.find_iter(field).count().max(1);
    let norm = 1.0 / (tokens as f64).sqrt();
    (norm * 1000.0).round() / 1000.0
}
