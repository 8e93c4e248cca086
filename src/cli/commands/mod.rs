//! Subcommand implementations.

/// Interactive chat (the default command).
pub mod chat;

/// Configuration display.
pub mod config;
