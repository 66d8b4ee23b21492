//! Tag normalization and parsing.
//!
//! Tags are short lowercase labels. Order is user-visible, so every helper
//! here preserves first-seen order.

use std::collections::HashSet;

/// Trim and lowercase a single tag.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase()
}

/// Parse a comma-separated provider response into tags.
///
/// Each piece is trimmed and lowercased; empty pieces are dropped.
/// Duplicates are kept.
pub fn parse_tag_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_tag)
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Normalize a user-supplied tag list for storage.
///
/// Trims, lowercases, drops empties and removes duplicates while keeping
/// the first occurrence.
pub fn normalize_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    tags.into_iter()
        .map(|tag| normalize_tag(tag.as_ref()))
        .filter(|tag| !tag.is_empty() && seen.insert(tag.clone()))
        .collect()
}

/// Merge suggested tags into an existing list.
///
/// Existing tags keep their positions; new tags are appended in order.
/// This is the client side of the tag suggester: the output of
/// `POST /api/ai/tags` is merged into the note's tags and sent back through
/// `PUT /api/notes/:id`.
///
/// ```
/// use intellinote_core::{merge_tags, parse_tag_list, UpdateNoteRequest};
///
/// let existing = vec!["work".to_string(), "planning".to_string()];
/// let suggested = parse_tag_list("Planning, Q3, work");
///
/// let update = UpdateNoteRequest {
///     tags: Some(merge_tags(&existing, &suggested)),
///     ..Default::default()
/// };
/// assert_eq!(update.tags.unwrap(), vec!["work", "planning", "q3"]);
/// ```
pub fn merge_tags(existing: &[String], suggested: &[String]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut merged = Vec::with_capacity(existing.len() + suggested.len());
    for tag in existing.iter().chain(suggested.iter()) {
        if seen.insert(tag.as_str()) {
            merged.push(tag.clone());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_list_keeps_duplicates() {
        assert_eq!(parse_tag_list("Idea, Work, work,  "), vec!["idea", "work", "work"]);
    }

    #[test]
    fn test_parse_tag_list_empty_input() {
        assert!(parse_tag_list("").is_empty());
        assert!(parse_tag_list(" , ,").is_empty());
    }

    #[test]
    fn test_parse_tag_list_trailing_newline() {
        assert_eq!(parse_tag_list("rust, async\n"), vec!["rust", "async"]);
    }

    #[test]
    fn test_normalize_tags_dedupes_first_seen() {
        let tags = normalize_tags(["Rust", " web ", "rust", "", "API"]);
        assert_eq!(tags, vec!["rust", "web", "api"]);
    }

    #[test]
    fn test_merge_tags_appends_new() {
        let existing = vec!["work".to_string(), "idea".to_string()];
        let suggested = vec!["idea".to_string(), "plan".to_string(), "plan".to_string()];
        assert_eq!(merge_tags(&existing, &suggested), vec!["work", "idea", "plan"]);
    }
}
