mod api_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod poll_config;
mod session_file;

#[cfg(test)]
mod tests;

pub use api_config::ApiConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use poll_config::PollConfig;
pub use session_file::SessionFile;

const CONFIG_DIR_ENV: &str = "CB_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".chef-buddy";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_COLORED: bool = true;
