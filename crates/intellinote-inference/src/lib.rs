//! # intellinote-inference
//!
//! Text generation for IntelliNote.
//!
//! This crate provides:
//! - Gemini `generateContent` backend
//! - Environment-backed provider that reads the API key per request
//! - Prompt templates for answering, summarizing, and tagging notes
//! - Mock backend (feature `mock`)
//!
//! # Example
//!
//! ```rust,no_run
//! use intellinote_inference::{EnvGeminiProvider, prompts};
//! use intellinote_core::GenerationProvider;
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = EnvGeminiProvider::from_env().unwrap();
//!     if let Some(backend) = provider.resolve() {
//!         let summary = backend.generate(&prompts::summary_prompt("...")).await.unwrap();
//!         println!("{}", summary);
//!     }
//! }
//! ```

pub mod gemini;
pub mod prompts;
pub mod provider;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

// Re-export core types
pub use intellinote_core::*;

pub use gemini::{GeminiBackend, GeminiConfig};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockGenerationBackend;
pub use provider::{EnvGeminiProvider, API_KEY_VAR};
