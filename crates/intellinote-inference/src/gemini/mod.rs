//! Google Gemini generation backend.
//!
//! # Example
//!
//! ```rust,no_run
//! use intellinote_inference::gemini::{GeminiBackend, GeminiConfig};
//! use intellinote_core::GenerationBackend;
//!
//! #[tokio::main]
//! async fn main() {
//!     let backend = GeminiBackend::new(GeminiConfig::with_api_key("key")).unwrap();
//!     let text = backend.generate("Say hello").await.unwrap();
//!     println!("{}", text);
//! }
//! ```

mod backend;
mod types;

pub use backend::{GeminiBackend, GeminiConfig, API_KEY_HEADER, DEFAULT_GEMINI_URL};
pub use types::*;
