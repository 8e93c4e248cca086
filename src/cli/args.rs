use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chatline")]
#[command(about = "Interactive terminal chat with OpenAI-compatible models")]
#[command(version)]
pub struct Args {
    /// Model name
    #[arg(short = 'm', long, global = true)]
    pub model: Option<String>,

    /// API endpoint base URL (e.g., https://api.openai.com)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Sampling temperature (0.0 to 2.0)
    #[arg(short = 't', long, global = true)]
    pub temperature: Option<f32>,

    /// Interaction log file
    #[arg(short = 'l', long = "log-file", global = true)]
    pub log_file: Option<PathBuf>,

    /// Suppress the banner, spinner and goodbye message
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show the resolved configuration
    Config,
}
