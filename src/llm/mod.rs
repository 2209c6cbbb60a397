//! Text generation backend for drafting request language.

mod client;

pub use client::{LlmClient, LlmConfig, LlmError, DRAFT_PROMPT};
