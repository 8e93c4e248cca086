//! Errors that stop the program before the first prompt.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Please set {env_var} environment variable")]
    MissingApiKey { env_var: String },

    #[error("Failed to open log file {}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {message}", .path.display())]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Temperature must be between 0.0 and 2.0, got {0}")]
    InvalidTemperature(f32),
}

impl StartupError {
    /// Process exit code for this error (sysexits conventions).
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::MissingApiKey { .. } | Self::InvalidConfig { .. } | Self::InvalidTemperature(_) => {
                exitcode::CONFIG
            }
            Self::LogFile { .. } => exitcode::CANTCREAT,
        }
    }
}
