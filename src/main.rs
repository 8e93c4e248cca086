use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chatline::cli::commands::{chat, config};
use chatline::cli::{Args, Command};
use chatline::error::StartupError;
use chatline::output::{self, OutputConfig};
use chatline::ui::Style;

/// Environment variable holding the diagnostics filter (e.g. `debug`).
const LOG_FILTER_ENV: &str = "CHATLINE_LOG";

#[tokio::main]
async fn main() {
    let args = Args::parse();

    output::init(OutputConfig::from_flags(args.quiet, args.no_color));
    init_tracing();

    if let Err(e) = run(args).await {
        eprintln!("{} {e:#}", Style::error("Error:"));
        let code = e
            .downcast_ref::<StartupError>()
            .map_or(exitcode::SOFTWARE, StartupError::exit_code);
        std::process::exit(code);
    }
}

async fn run(args: Args) -> Result<()> {
    let options = chat::ChatOptions {
        endpoint: args.endpoint,
        model: args.model,
        temperature: args.temperature,
        log_file: args.log_file,
    };

    match args.command {
        Some(Command::Config) => config::print_config(&options),
        None => chat::run_chat(options).await,
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!output::is_no_color())
        .init();
}
