//! Listing order and text filtering over a user's notes.

use std::cmp::Ordering;

use crate::models::Note;

/// Listing order: pinned notes first, then newest `created_at` first.
pub fn listing_order(a: &Note, b: &Note) -> Ordering {
    b.is_pinned
        .cmp(&a.is_pinned)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// Sort notes in place using [`listing_order`].
pub fn sort_for_listing(notes: &mut [Note]) {
    notes.sort_by(listing_order);
}

/// Case-insensitive substring match against title, content, or any tag.
///
/// A blank query matches every note.
pub fn matches_query(note: &Note, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return true;
    }
    note.title.to_lowercase().contains(&query)
        || note.content.to_lowercase().contains(&query)
        || note.tags.iter().any(|tag| tag.to_lowercase().contains(&query))
}

/// Keep the notes matching `query`, preserving order.
pub fn filter_notes(notes: Vec<Note>, query: &str) -> Vec<Note> {
    if query.trim().is_empty() {
        return notes;
    }
    notes
        .into_iter()
        .filter(|note| matches_query(note, query))
        .collect()
}
