//! # chatline - Terminal Chat Client
//!
//! `chatline` is an interactive command-line client for OpenAI-compatible
//! chat completion endpoints. Every line you type is sent as a single,
//! independent user message; the reply is printed and every exchange is
//! appended to a timestamped interaction log.
//!
//! ## Quick Start
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! chatline
//! # You: What is the capital of France?
//! # AI: The capital of France is Paris.
//! # You: exit
//! ```
//!
//! ## Configuration
//!
//! Optional settings live in `~/.config/chatline/config.toml`:
//!
//! ```toml
//! [chat]
//! endpoint = "https://api.openai.com"
//! model = "gpt-3.5-turbo-0301"
//! temperature = 0.5
//! log_file = "interaction.log"
//! api_key_env = "OPENAI_API_KEY"
//! ```
//!
//! CLI options override the file; the API key is only ever read from the
//! environment.

/// Interactive chat session.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Chat completion client for OpenAI-compatible APIs.
pub mod completion;

/// Configuration file management.
pub mod config;

/// Fatal startup errors.
pub mod error;

/// Timestamped, append-only interaction log.
pub mod interaction_log;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Terminal UI components (spinner, colors).
pub mod ui;
