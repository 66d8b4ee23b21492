//! Core data models for IntelliNote.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A note owned by a single user.
///
/// `user_id` is fixed at creation; every mutation is scoped by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    /// AI-generated summary, if one was saved.
    pub summary: Option<String>,
    /// Tags in user-visible order.
    pub tags: Vec<String>,
    pub is_pinned: bool,
    pub is_archived: bool,
    /// Free-text grouping label (not a path).
    pub folder: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Title/content pair sent as question-answering context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteExcerpt {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl From<&Note> for NoteExcerpt {
    fn from(note: &Note) -> Self {
        Self {
            title: note.title.clone(),
            content: note.content.clone(),
        }
    }
}

// =============================================================================
// USER TYPES
// =============================================================================

/// Display identity for an authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller identity resolved from a verified session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: Uuid,
    pub email: Option<String>,
}

// =============================================================================
// SHARING TYPES (schema only)
// =============================================================================

/// Permission level granted to a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    View,
    Edit,
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::View => write!(f, "view"),
            Self::Edit => write!(f, "edit"),
        }
    }
}

impl std::str::FromStr for Permission {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            other => Err(format!("Unknown permission: {}", other)),
        }
    }
}

/// Links a note to a collaborating user.
///
/// The table exists but nothing reads or writes it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
    pub id: Uuid,
    pub note_id: Uuid,
    pub user_id: Uuid,
    pub permission: Permission,
    pub created_at: DateTime<Utc>,
}

/// One view event of a note by a user.
///
/// The table exists but nothing reads or writes it yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteView {
    pub id: Uuid,
    pub note_id: Uuid,
    pub user_id: Uuid,
    pub viewed_at: DateTime<Utc>,
}
