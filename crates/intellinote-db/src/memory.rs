//! In-memory repositories.
//!
//! Same owner-scoping and ordering semantics as the PostgreSQL
//! implementations, backed by process memory. Used by the HTTP tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

use intellinote_core::{
    normalize_tags, sort_for_listing, CreateNoteRequest, Error, Note, NoteRepository, Profile,
    ProfileRepository, Result, SessionStore, SessionUser, UpdateNoteRequest,
};

use crate::notes::resolve_folder;
use crate::sessions::{generate_token, hash_token};

fn poisoned<T>(_: T) -> Error {
    Error::Internal("in-memory store lock poisoned".to_string())
}

// =============================================================================
// NOTES
// =============================================================================

/// In-memory NoteRepository.
#[derive(Default)]
pub struct MemoryNoteRepository {
    notes: RwLock<Vec<Note>>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with existing notes.
    pub fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: RwLock::new(notes),
        }
    }

    /// Total number of stored notes across all owners.
    pub fn len(&self) -> usize {
        self.notes.read().map(|n| n.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Note>> {
        let notes = self.notes.read().map_err(poisoned)?;
        let mut owned: Vec<Note> = notes
            .iter()
            .filter(|n| n.user_id == owner_id)
            .cloned()
            .collect();
        sort_for_listing(&mut owned);
        Ok(owned)
    }

    async fn fetch_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Note>> {
        let notes = self.notes.read().map_err(poisoned)?;
        Ok(notes
            .iter()
            .find(|n| n.id == id && n.user_id == owner_id)
            .cloned())
    }

    async fn insert(&self, owner_id: Uuid, req: CreateNoteRequest) -> Result<Note> {
        let now = Utc::now();
        let note = Note {
            id: Uuid::now_v7(),
            user_id: owner_id,
            title: req.title,
            content: req.content,
            summary: req.summary,
            tags: normalize_tags(&req.tags),
            is_pinned: req.is_pinned,
            is_archived: req.is_archived,
            folder: resolve_folder(req.folder.as_deref()),
            created_at: now,
            updated_at: now,
        };
        self.notes.write().map_err(poisoned)?.push(note.clone());
        Ok(note)
    }

    async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        req: UpdateNoteRequest,
    ) -> Result<Option<Note>> {
        let mut notes = self.notes.write().map_err(poisoned)?;
        let Some(note) = notes
            .iter_mut()
            .find(|n| n.id == id && n.user_id == owner_id)
        else {
            return Ok(None);
        };

        if let Some(title) = req.title {
            note.title = title;
        }
        if let Some(content) = req.content {
            note.content = content;
        }
        if let Some(summary) = req.summary {
            note.summary = Some(summary);
        }
        if let Some(tags) = req.tags {
            note.tags = normalize_tags(&tags);
        }
        if let Some(folder) = req.folder {
            note.folder = resolve_folder(Some(&folder));
        }
        if let Some(pinned) = req.is_pinned {
            note.is_pinned = pinned;
        }
        if let Some(archived) = req.is_archived {
            note.is_archived = archived;
        }
        note.updated_at = Utc::now();
        Ok(Some(note.clone()))
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool> {
        let mut notes = self.notes.write().map_err(poisoned)?;
        let before = notes.len();
        notes.retain(|n| !(n.id == id && n.user_id == owner_id));
        Ok(notes.len() < before)
    }
}

// =============================================================================
// PROFILES
// =============================================================================

/// In-memory ProfileRepository.
#[derive(Default)]
pub struct MemoryProfileRepository {
    profiles: RwLock<HashMap<Uuid, Profile>>,
}

impl MemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a profile.
    pub fn put(&self, profile: Profile) {
        if let Ok(mut profiles) = self.profiles.write() {
            profiles.insert(profile.id, profile);
        }
    }
}

#[async_trait]
impl ProfileRepository for MemoryProfileRepository {
    async fn fetch(&self, user_id: Uuid) -> Result<Option<Profile>> {
        let profiles = self.profiles.read().map_err(poisoned)?;
        Ok(profiles.get(&user_id).cloned())
    }
}

// =============================================================================
// SESSIONS
// =============================================================================

/// In-memory SessionStore keyed by token hash.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, (SessionUser, DateTime<Utc>)>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn verify(&self, token: &str) -> Result<Option<SessionUser>> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions
            .get(&hash_token(token))
            .filter(|(_, expires_at)| *expires_at > Utc::now())
            .map(|(user, _)| user.clone()))
    }

    async fn issue(&self, user: &SessionUser, ttl: Duration) -> Result<String> {
        let token = generate_token();
        self.sessions
            .write()
            .map_err(poisoned)?
            .insert(hash_token(&token), (user.clone(), Utc::now() + ttl));
        Ok(token)
    }

    async fn revoke(&self, token: &str) -> Result<()> {
        self.sessions
            .write()
            .map_err(poisoned)?
            .remove(&hash_token(token));
        Ok(())
    }
}
