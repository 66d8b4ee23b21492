//! Core traits for IntelliNote abstractions.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// NOTE REPOSITORY TRAITS
// =============================================================================

/// Request for creating a new note.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNoteRequest {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Blank or missing folders fall back to the default folder.
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub is_archived: bool,
}

/// Partial update of an owned note. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateNoteRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
    pub folder: Option<String>,
    pub is_pinned: Option<bool>,
    pub is_archived: Option<bool>,
}

impl UpdateNoteRequest {
    /// True when the request would not change anything.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.summary.is_none()
            && self.tags.is_none()
            && self.folder.is_none()
            && self.is_pinned.is_none()
            && self.is_archived.is_none()
    }
}

/// Repository for owner-scoped note CRUD.
///
/// Every method takes the caller's id; implementations must filter on it
/// in addition to the note id.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// List the owner's notes, pinned first, newest first within each group.
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Note>>;

    /// Fetch a single note if it exists and belongs to the owner.
    async fn fetch_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Note>>;

    /// Insert a new note owned by `owner_id`.
    async fn insert(&self, owner_id: Uuid, req: CreateNoteRequest) -> Result<Note>;

    /// Update a note matching both id and owner. Returns `None` when no row matched.
    async fn update(&self, id: Uuid, owner_id: Uuid, req: UpdateNoteRequest)
        -> Result<Option<Note>>;

    /// Delete a note matching both id and owner. Returns whether a row was removed.
    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool>;
}

// =============================================================================
// USER TRAITS
// =============================================================================

/// Read access to user profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch the profile for a user, if one exists.
    async fn fetch(&self, user_id: Uuid) -> Result<Option<Profile>>;
}

/// Verifies bearer session tokens issued by the authentication provider.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Resolve a token to its user. Unknown or expired tokens yield `None`.
    async fn verify(&self, token: &str) -> Result<Option<SessionUser>>;

    /// Issue a new session token for a user.
    async fn issue(&self, user: &SessionUser, ttl: Duration) -> Result<String>;

    /// Revoke a token. Revoking an unknown token is not an error.
    async fn revoke(&self, token: &str) -> Result<()>;
}

// =============================================================================
// GENERATION TRAITS
// =============================================================================

/// Backend for text generation (single blocking completion).
#[async_trait]
pub trait GenerationBackend: Send + Sync {
    /// Generate text given a prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;
}

/// Resolves a generation backend for the current request.
///
/// Returns `None` when no provider credential is configured.
pub trait GenerationProvider: Send + Sync {
    fn resolve(&self) -> Option<Arc<dyn GenerationBackend>>;
}

/// Provider that always hands out the same backend (or none).
#[derive(Clone, Default)]
pub struct FixedGenerationProvider {
    backend: Option<Arc<dyn GenerationBackend>>,
}

impl FixedGenerationProvider {
    pub fn new(backend: Arc<dyn GenerationBackend>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    /// A provider with no credential configured.
    pub fn unconfigured() -> Self {
        Self { backend: None }
    }
}

impl GenerationProvider for FixedGenerationProvider {
    fn resolve(&self) -> Option<Arc<dyn GenerationBackend>> {
        self.backend.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoBackend;

    #[async_trait]
    impl GenerationBackend for EchoBackend {
        async fn generate(&self, prompt: &str) -> Result<String> {
            Ok(prompt.to_string())
        }

        fn model_name(&self) -> &str {
            "echo"
        }
    }

    #[test]
    fn test_update_request_is_empty() {
        assert!(UpdateNoteRequest::default().is_empty());
        let req = UpdateNoteRequest {
            is_pinned: Some(true),
            ..Default::default()
        };
        assert!(!req.is_empty());
    }

    #[test]
    fn test_create_request_defaults() {
        let req: CreateNoteRequest =
            serde_json::from_str(r#"{"title":"a","content":"b"}"#).unwrap();
        assert!(req.tags.is_empty());
        assert!(req.folder.is_none());
        assert!(!req.is_pinned);
        assert!(!req.is_archived);
    }

    #[test]
    fn test_unconfigured_provider_resolves_none() {
        assert!(FixedGenerationProvider::unconfigured().resolve().is_none());
    }

    #[tokio::test]
    async fn test_fixed_provider_resolves_backend() {
        let provider = FixedGenerationProvider::new(Arc::new(EchoBackend));
        let backend = provider.resolve().expect("backend configured");
        assert_eq!(backend.model_name(), "echo");
        assert_eq!(backend.generate("hi").await.unwrap(), "hi");
    }
}
