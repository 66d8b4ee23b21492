//! # intellinote-db
//!
//! PostgreSQL database layer for IntelliNote.
//!
//! This crate provides:
//! - Connection pool management
//! - Owner-scoped note repository
//! - Profile lookups and session token verification
//! - In-memory counterparts of each repository (feature `memory`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use intellinote_db::{Database, NoteRepository, CreateNoteRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/intellinote").await?;
//!
//!     let note = db.notes.insert(owner_id, CreateNoteRequest {
//!         title: "Hello".to_string(),
//!         content: "Hello, world!".to_string(),
//!         ..Default::default()
//!     }).await?;
//!
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```
#[cfg(feature = "memory")]
pub mod memory;
pub mod notes;
pub mod pool;
pub mod profiles;
pub mod sessions;

// Test fixtures for integration tests
// Note: Always compiled so integration tests (in tests/) can use DEFAULT_TEST_DATABASE_URL
pub mod test_fixtures;

// Re-export core types
pub use intellinote_core::*;

#[cfg(feature = "memory")]
pub use memory::{MemoryNoteRepository, MemoryProfileRepository, MemorySessionStore};
pub use notes::PgNoteRepository;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};
pub use profiles::PgProfileRepository;
pub use sessions::PgSessionStore;

/// Combined database context with all repositories.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// Note repository for owner-scoped CRUD.
    pub notes: PgNoteRepository,
    /// Profile repository.
    pub profiles: PgProfileRepository,
    /// Session token store.
    pub sessions: PgSessionStore,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            notes: PgNoteRepository::new(pool.clone()),
            profiles: PgProfileRepository::new(pool.clone()),
            sessions: PgSessionStore::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}
