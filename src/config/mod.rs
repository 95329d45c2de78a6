// Configuration module entry point
// Loads layered configuration: file, environment, then built-in defaults

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{
    AssetsConfig, Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig,
    StorageConfig,
};

impl Config {
    /// Load configuration from "config.toml" if present, with `PAINBOARD_*`
    /// environment variable overrides.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("PAINBOARD"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("server.enforce_https", false)?
            .set_default("logging.access_log", true)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .set_default("storage.data_file", "data/pain_points.json")?
            .set_default("assets.root", "public")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.request_timeout", 30)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
