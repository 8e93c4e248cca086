use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;
use tokio::io::BufReader;

use crate::chat::{self, ChatSession};
use crate::completion::{ClientConfig, OpenAiClient};
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::interaction_log::InteractionLog;

pub struct ChatOptions {
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub log_file: Option<PathBuf>,
}

impl ChatOptions {
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
            log_file: self.log_file.clone(),
        }
    }
}

pub async fn run_chat(options: ChatOptions) -> Result<()> {
    let (config, _) = load_session_config(&options)?;

    let api_key = config.api_key()?;
    let log = InteractionLog::open(&config.log_file)?;

    let client = OpenAiClient::new(ClientConfig {
        endpoint: config.endpoint.clone(),
        api_key,
        model: config.model.clone(),
        temperature: config.temperature,
    });
    tracing::debug!(
        url = client.url(),
        log_file = %config.log_file.display(),
        "chat session starting"
    );

    chat::print_header(&config.model);

    let mut session = ChatSession::new(client, log);
    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    session
        .run(stdin, &mut stdout)
        .await
        .context("Chat session aborted")?;

    chat::print_goodbye();
    Ok(())
}

/// Loads the config file and merges the CLI overrides into it.
///
/// Returns the resolved configuration and the config file path it was read from.
pub fn load_session_config(options: &ChatOptions) -> Result<(ResolvedConfig, PathBuf)> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load()?;
    let resolved = resolve_config(&options.resolve_options(), &file_config)?;
    Ok((resolved, manager.config_path().clone()))
}
