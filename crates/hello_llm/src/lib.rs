//! hello_llm: one-shot chat greeting against a locally served model
//!
//! This library provides:
//! - A chat-completion client for an OpenAI-compatible endpoint
//! - The static "Hello World" greeting
//!
//! # Example
//!
//! ```no_run
//! use hello_llm::{greeting, ModelClient, ModelConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = ModelClient::new(ModelConfig::default());
//!     let reply = client.greet().await.unwrap();
//!     println!("{}", reply);
//!     greeting::hello_world();
//! }
//! ```

// Core modules
pub mod error;
pub mod greeting;
pub mod model;

// Re-export commonly used types and functions
pub use error::{ModelError, Result};

// Model re-exports
pub use model::{
    build_request, ModelClient, ModelConfig, DEFAULT_API_KEY, DEFAULT_BASE_URL, DEFAULT_MODEL,
    GREETING_PROMPT,
};

// Greeting re-exports
pub use greeting::{hello_world, HELLO_WORLD};
