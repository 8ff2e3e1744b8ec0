//! Client for Google's Gemini `generateContent` API with Maps grounding.
//!
//! The model is treated as an untyped text source: callers get the reply text
//! back and do their own parsing.

pub mod client;
pub mod error;
pub mod prompt;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
pub use prompt::lead_search_prompt;
