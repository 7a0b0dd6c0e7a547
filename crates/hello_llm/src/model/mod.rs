//! Model client module for chat completion
//!
//! This module provides:
//! - `client`: OpenAI-compatible model client

mod client;

pub use client::{
    build_request, ModelClient, ModelConfig, DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_MODEL,
    GREETING_PROMPT,
};
