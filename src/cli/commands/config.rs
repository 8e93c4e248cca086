use anyhow::Result;
use std::path::Path;

use super::chat::{ChatOptions, load_session_config};
use crate::config::ResolvedConfig;
use crate::ui::Style;

pub fn print_config(options: &ChatOptions) -> Result<()> {
    let (config, config_path) = load_session_config(options)?;
    print!("{}", render_config(&config, &config_path, config.api_key().is_ok()));
    Ok(())
}

fn render_config(config: &ResolvedConfig, config_path: &Path, api_key_set: bool) -> String {
    let api_key = if api_key_set {
        Style::success(format!("set (${})", config.api_key_env))
    } else {
        Style::error(format!("missing (${})", config.api_key_env))
    };

    format!(
        "{}\n  {}     {}\n  {}        {}\n  {}  {}\n  {}     {}\n  {}      {}\n  {}  {}\n",
        Style::header("Configuration"),
        Style::label("endpoint"),
        Style::secondary(&config.endpoint),
        Style::label("model"),
        Style::value(&config.model),
        Style::label("temperature"),
        Style::value(config.temperature),
        Style::label("log file"),
        Style::secondary(config.log_file.display()),
        Style::label("api key"),
        api_key,
        Style::label("config file"),
        Style::secondary(config_path.display()),
    )
}
