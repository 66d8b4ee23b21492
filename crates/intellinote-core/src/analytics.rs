//! Note list aggregation for the analytics view.
//!
//! Everything here is recomputed from the note list on each call; nothing
//! is cached between calls.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::defaults::ANALYTICS_TOP_N;
use crate::models::Note;

/// A label with the number of notes (or tag uses) it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCount {
    pub name: String,
    pub count: usize,
}

/// Aggregate counts over one user's notes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteAnalytics {
    pub total_notes: usize,
    pub pinned_notes: usize,
    pub archived_notes: usize,
    pub unique_tags: usize,
    pub total_tag_uses: usize,
    pub folder_count: usize,
    /// Tag uses per note, rounded to one decimal place.
    pub avg_tags_per_note: f64,
    pub top_folders: Vec<FacetCount>,
    pub top_tags: Vec<FacetCount>,
}

impl NoteAnalytics {
    /// Aggregate `notes` using the default top-N cutoff.
    pub fn from_notes(notes: &[Note]) -> Self {
        Self::with_top_n(notes, ANALYTICS_TOP_N)
    }

    /// Aggregate `notes`, keeping at most `top_n` folders and tags.
    pub fn with_top_n(notes: &[Note], top_n: usize) -> Self {
        let total_notes = notes.len();
        let pinned_notes = notes.iter().filter(|n| n.is_pinned).count();
        let archived_notes = notes.iter().filter(|n| n.is_archived).count();

        let all_tags: Vec<&str> = notes
            .iter()
            .flat_map(|n| n.tags.iter().map(String::as_str))
            .collect();
        let unique_tags = all_tags.iter().collect::<HashSet<_>>().len();
        let total_tag_uses = all_tags.len();

        let folders = count_in_order(notes.iter().map(|n| n.folder.as_str()));
        let folder_count = folders.len();
        let tags = count_in_order(all_tags.iter().copied());

        let avg_tags_per_note = if total_notes > 0 {
            round_one_decimal(total_tag_uses as f64 / total_notes as f64)
        } else {
            0.0
        };

        Self {
            total_notes,
            pinned_notes,
            archived_notes,
            unique_tags,
            total_tag_uses,
            folder_count,
            avg_tags_per_note,
            top_folders: top_by_count(folders, top_n),
            top_tags: top_by_count(tags, top_n),
        }
    }

    /// Count for a folder among the top folders, if present.
    pub fn folder(&self, name: &str) -> Option<usize> {
        self.top_folders
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.count)
    }
}

/// Count occurrences, keeping labels in first-seen order.
fn count_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<FacetCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<FacetCount> = Vec::new();
    for item in items {
        match index.get(item) {
            Some(&i) => counts[i].count += 1,
            None => {
                index.insert(item, counts.len());
                counts.push(FacetCount {
                    name: item.to_string(),
                    count: 1,
                });
            }
        }
    }
    counts
}

/// Highest counts first; ties keep first-seen order (stable sort).
fn top_by_count(mut counts: Vec<FacetCount>, top_n: usize) -> Vec<FacetCount> {
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
