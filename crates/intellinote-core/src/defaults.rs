//! Centralized default constants for IntelliNote.
//!
//! Crates reference these instead of repeating literals.

// =============================================================================
// NOTES
// =============================================================================

/// Folder assigned to notes created without one.
pub const DEFAULT_FOLDER: &str = "general";

// =============================================================================
// ANALYTICS
// =============================================================================

/// Number of folders and tags kept in the analytics top lists.
pub const ANALYTICS_TOP_N: usize = 5;

// =============================================================================
// SESSIONS
// =============================================================================

/// Lifetime of a newly issued session token, in hours.
pub const SESSION_TTL_HOURS: i64 = 24 * 7;

// =============================================================================
// SERVER
// =============================================================================

/// Default HTTP server port.
pub const SERVER_PORT: u16 = 3000;

/// Default maximum request body size in bytes.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

// =============================================================================
// GENERATION
// =============================================================================

/// Default generation model.
pub const GEN_MODEL: &str = "gemini-2.5-flash";
