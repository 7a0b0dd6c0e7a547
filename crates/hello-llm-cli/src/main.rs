//! hello-llm CLI - send one fixed greeting to a local model
//!
//! Usage:
//!     hello-llm [OPTIONS]
//!
//! Environment Variables:
//!     HELLO_LLM_BASE_URL: Model API base URL (default: http://localhost:11434/v1)
//!     HELLO_LLM_MODEL: Model name (default: gpt-oss)
//!     HELLO_LLM_API_KEY: API key for model authentication (default: ollama)

use anyhow::Result;
use clap::Parser;
use hello_llm::{greeting, ModelClient, ModelConfig};

/// hello-llm - print a model's reply to "Hello!", then "Hello World"
#[derive(Parser, Debug)]
#[command(name = "hello-llm")]
#[command(about = "Send a fixed greeting to a local model and print the reply")]
#[command(after_help = r#"Examples:
    # Run against a local Ollama daemon
    hello-llm

    # Specify model endpoint
    hello-llm --base-url http://localhost:11434/v1

    # Use a different served model
    hello-llm --model gpt-oss:20b
"#)]
struct Cli {
    /// Model API base URL
    #[arg(long, env = "HELLO_LLM_BASE_URL", default_value = "http://localhost:11434/v1")]
    base_url: String,

    /// Model name
    #[arg(long, env = "HELLO_LLM_MODEL", default_value = "gpt-oss")]
    model: String,

    /// API key for model authentication
    #[arg(long, env = "HELLO_LLM_API_KEY", default_value = "ollama")]
    apikey: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt::init();

    let model_config = ModelConfig::new(&args.base_url, &args.model).with_api_key(&args.apikey);
    let client = ModelClient::new(model_config);

    let reply = client.greet().await?;
    println!("{}", reply);

    greeting::hello_world();

    Ok(())
}
