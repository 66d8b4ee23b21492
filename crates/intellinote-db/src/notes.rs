//! Note repository implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{Pool, Postgres, Row};
use tracing::{debug, info};
use uuid::Uuid;

use intellinote_core::defaults::DEFAULT_FOLDER;
use intellinote_core::{
    normalize_tags, CreateNoteRequest, Error, Note, NoteRepository, Result, UpdateNoteRequest,
};

/// Columns selected for every note query, in `map_row_to_note` order.
const NOTE_COLUMNS: &str = "id, user_id, title, content, summary, tags, is_pinned, is_archived, \
                            folder, created_at, updated_at";

/// PostgreSQL implementation of NoteRepository.
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

/// Folder to store: trimmed, or the default folder when blank.
pub(crate) fn resolve_folder(folder: Option<&str>) -> String {
    match folder.map(str::trim) {
        Some(f) if !f.is_empty() => f.to_string(),
        _ => DEFAULT_FOLDER.to_string(),
    }
}

/// Map a database row to a Note.
fn map_row_to_note(row: &PgRow) -> Note {
    Note {
        id: row.get("id"),
        user_id: row.get("user_id"),
        title: row.get("title"),
        content: row.get("content"),
        summary: row.get("summary"),
        tags: row.get("tags"),
        is_pinned: row.get("is_pinned"),
        is_archived: row.get("is_archived"),
        folder: row.get("folder"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Note>> {
        let query = format!(
            "SELECT {} FROM note WHERE user_id = $1 ORDER BY is_pinned DESC, created_at DESC",
            NOTE_COLUMNS
        );
        let rows = sqlx::query(&query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "list",
            user_id = %owner_id,
            result_count = rows.len(),
            "Listed notes"
        );
        Ok(rows.iter().map(map_row_to_note).collect())
    }

    async fn fetch_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Note>> {
        let query = format!("SELECT {} FROM note WHERE id = $1 AND user_id = $2", NOTE_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(row.as_ref().map(map_row_to_note))
    }

    async fn insert(&self, owner_id: Uuid, req: CreateNoteRequest) -> Result<Note> {
        let now = Utc::now();
        let id = Uuid::now_v7();
        let tags = normalize_tags(&req.tags);
        let folder = resolve_folder(req.folder.as_deref());

        let query = format!(
            "INSERT INTO note (id, user_id, title, content, summary, tags, is_pinned, \
             is_archived, folder, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $10) \
             RETURNING {}",
            NOTE_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&req.title)
            .bind(&req.content)
            .bind(&req.summary)
            .bind(&tags)
            .bind(req.is_pinned)
            .bind(req.is_archived)
            .bind(&folder)
            .bind(now)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        info!(
            subsystem = "db",
            component = "notes",
            op = "insert",
            user_id = %owner_id,
            note_id = %id,
            "Note created"
        );
        Ok(map_row_to_note(&row))
    }

    async fn update(
        &self,
        id: Uuid,
        owner_id: Uuid,
        req: UpdateNoteRequest,
    ) -> Result<Option<Note>> {
        let tags = req.tags.as_ref().map(normalize_tags);
        let folder = req.folder.as_deref().map(|f| resolve_folder(Some(f)));

        let query = format!(
            "UPDATE note SET \
                title = COALESCE($3, title), \
                content = COALESCE($4, content), \
                summary = COALESCE($5, summary), \
                tags = COALESCE($6, tags), \
                folder = COALESCE($7, folder), \
                is_pinned = COALESCE($8, is_pinned), \
                is_archived = COALESCE($9, is_archived), \
                updated_at = $10 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {}",
            NOTE_COLUMNS
        );
        let row = sqlx::query(&query)
            .bind(id)
            .bind(owner_id)
            .bind(&req.title)
            .bind(&req.content)
            .bind(&req.summary)
            .bind(&tags)
            .bind(&folder)
            .bind(req.is_pinned)
            .bind(req.is_archived)
            .bind(Utc::now())
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;

        debug!(
            subsystem = "db",
            component = "notes",
            op = "update",
            user_id = %owner_id,
            note_id = %id,
            matched = row.is_some(),
            "Note update"
        );
        Ok(row.as_ref().map(map_row_to_note))
    }

    async fn delete(&self, id: Uuid, owner_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM note WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        let removed = result.rows_affected() > 0;
        info!(
            subsystem = "db",
            component = "notes",
            op = "delete",
            user_id = %owner_id,
            note_id = %id,
            removed,
            "Note delete"
        );
        Ok(removed)
    }
}
