//! # intellinote-core
//!
//! Core types, traits, and abstractions for IntelliNote.
//!
//! This crate provides the data model shared by every other crate, the
//! repository and generation-backend traits the HTTP layer is written
//! against, and the pure list helpers (ordering, search filtering, tag
//! normalization, analytics aggregation).

pub mod analytics;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod search;
pub mod tags;
pub mod traits;

// Re-export commonly used types at crate root
pub use analytics::{FacetCount, NoteAnalytics};
pub use error::{Error, Result};
pub use models::*;
pub use search::{filter_notes, listing_order, matches_query, sort_for_listing};
pub use tags::{merge_tags, normalize_tag, normalize_tags, parse_tag_list};
pub use traits::*;
