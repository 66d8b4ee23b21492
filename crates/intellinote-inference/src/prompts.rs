//! Prompt templates for the note assistant.

use intellinote_core::NoteExcerpt;

/// Fallback the model is told to use when the notes lack an answer.
pub const NOT_IN_NOTES: &str = "The answer is not available in the notes.";

/// Separator placed between notes in the answer context.
pub const NOTE_SEPARATOR: &str = "\n\n---\n\n";

/// Render notes as `Title:`/`Content:` blocks joined by [`NOTE_SEPARATOR`].
pub fn notes_context(notes: &[NoteExcerpt]) -> String {
    notes
        .iter()
        .map(|note| format!("Title: {}\nContent: {}", note.title, note.content))
        .collect::<Vec<_>>()
        .join(NOTE_SEPARATOR)
}

/// Question answering restricted to the supplied notes.
pub fn answer_prompt(question: &str, notes: &[NoteExcerpt]) -> String {
    format!(
        "You are a helpful assistant that answers questions based ONLY on the user's notes.\n\
         \n\
         Rules:\n\
         - Use only the provided notes\n\
         - If the answer is not present, say \"{}\"\n\
         \n\
         Notes:\n\
         {}\n\
         \n\
         Question:\n\
         {}\n\
         \n\
         Answer:\n",
        NOT_IN_NOTES,
        notes_context(notes),
        question
    )
}

/// Two-to-three sentence summary of one note.
pub fn summary_prompt(content: &str) -> String {
    format!(
        "Summarize the following note in 2–3 concise sentences.\n\
         Focus only on the key points and main ideas.\n\
         Do not add extra information.\n\
         \n\
         Note:\n\
         {}\n\
         \n\
         Summary:\n",
        content
    )
}

/// Three to five short lowercase tags as a comma-separated list.
pub fn tags_prompt(title: &str, content: &str) -> String {
    format!(
        "Generate 3–5 relevant tags for the following note.\n\
         \n\
         Rules:\n\
         - Return ONLY a comma-separated list\n\
         - No explanations\n\
         - No numbering\n\
         - Use short, lowercase words\n\
         \n\
         Title:\n\
         {}\n\
         \n\
         Content:\n\
         {}\n\
         \n\
         Tags:\n",
        title, content
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn excerpt(title: &str, content: &str) -> NoteExcerpt {
        NoteExcerpt {
            title: title.to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_notes_context_format() {
        let ctx = notes_context(&[excerpt("A", "one"), excerpt("B", "two")]);
        assert_eq!(ctx, "Title: A\nContent: one\n\n---\n\nTitle: B\nContent: two");
    }

    #[test]
    fn test_single_note_has_no_separator() {
        let ctx = notes_context(&[excerpt("A", "one")]);
        assert!(!ctx.contains("---"));
    }

    #[test]
    fn test_answer_prompt_embeds_rule_notes_and_question() {
        let prompt = answer_prompt("When is the trip?", &[excerpt("Trip", "Friday")]);
        assert!(prompt.contains(NOT_IN_NOTES));
        assert!(prompt.contains("Title: Trip\nContent: Friday"));
        assert!(prompt.contains("Question:\nWhen is the trip?"));
        assert!(prompt.trim_end().ends_with("Answer:"));
    }

    #[test]
    fn test_summary_prompt() {
        let prompt = summary_prompt("Long meeting notes");
        assert!(prompt.contains("2–3 concise sentences"));
        assert!(prompt.contains("Note:\nLong meeting notes"));
    }

    #[test]
    fn test_tags_prompt_allows_empty_title() {
        let prompt = tags_prompt("", "body");
        assert!(prompt.contains("comma-separated list"));
        assert!(prompt.contains("Title:\n\n"));
        assert!(prompt.contains("Content:\nbody"));
    }
}
