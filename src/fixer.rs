/*!
 * Hint recomputation for medium exercises.
 *
 * Walks every exercise of a [`Document`], and for the ones tagged
 * `"medium"` rewrites each answer's `start` from the hint table. Other
 * exercises are never touched.
 */

use log::{debug, trace};
use std::fmt;

use crate::exercise::{Answer, Document, Record};
use crate::hints::visible_letters_for;

/// Counters accumulated over one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixStats {
    /// Exercises tagged `"medium"` that were visited
    pub medium_exercises: usize,
    /// Answers whose `start` value actually changed
    pub updated_words: usize,
}

impl FixStats {
    /// The three lines reported to the operator after a successful run
    pub fn summary_lines(&self) -> [String; 3] {
        [
            "✅ Update completed".to_string(),
            format!("📘 'medium' exercises processed: {}", self.medium_exercises),
            format!("✏️  Words updated: {}", self.updated_words),
        ]
    }
}

impl std::ops::AddAssign for FixStats {
    fn add_assign(&mut self, other: Self) {
        self.medium_exercises += other.medium_exercises;
        self.updated_words += other.updated_words;
    }
}

impl fmt::Display for FixStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary_lines().join("\n"))
    }
}

/// Recomputes hints across the whole document
pub fn fix_document(document: &mut Document) -> FixStats {
    let mut stats = FixStats::default();
    for mut record in document.records_mut() {
        stats += fix_record(&mut record);
    }
    stats
}

/// Recomputes hints for one exercise; non-medium exercises yield empty stats
pub fn fix_record(record: &mut Record<'_>) -> FixStats {
    let mut stats = FixStats::default();

    if !record.is_medium() {
        trace!("Skipping exercise with difficulty {:?}", record.difficulty());
        return stats;
    }

    stats.medium_exercises = 1;
    for mut answer in record.answers_mut() {
        if fix_answer(&mut answer) {
            stats.updated_words += 1;
        }
    }

    stats
}

/// Sets `start` from the word length, returning whether the value changed
pub fn fix_answer(answer: &mut Answer<'_>) -> bool {
    let visible = visible_letters_for(answer.word());
    if answer.start_matches(visible) {
        return false;
    }

    debug!(
        "Updating '{}': start {} -> {}",
        answer.word(),
        answer.raw_start().map_or_else(|| "<missing>".to_string(), |v| v.to_string()),
        visible
    );
    answer.set_start(visible);
    true
}
