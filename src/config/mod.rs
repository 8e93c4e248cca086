//! Configuration file management and resolution.

mod manager;

pub use manager::{
    ChatConfig, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT,
    DEFAULT_LOG_FILE, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ResolveOptions, ResolvedConfig,
    resolve_config,
};
