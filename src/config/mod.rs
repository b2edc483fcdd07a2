use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_APP_NAME: &str = "ToDo App";

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

// ─── TOML config file ─────────────────────────────────────────────────────────

/// `config.toml` — all fields are optional overrides.
/// Priority: CLI / env var  >  TOML  >  built-in default.
#[derive(Deserialize, Default)]
struct TomlConfig {
    /// HTTP server port (default: 8000).
    port: Option<u16>,
    /// Bind address (default: "127.0.0.1"; use "0.0.0.0" for LAN access).
    bind_address: Option<String>,
    /// Log level filter string, e.g. "debug", "info,todod=trace" (default: "info").
    log: Option<String>,
    /// Log output format: "pretty" (default, human-readable) | "json".
    log_format: Option<String>,
    /// Application display name reported by GET /info.
    app_name: Option<String>,
    /// Debug flag reported by GET /info.
    debug: Option<bool>,
}

fn load_toml(path: &Path) -> Option<TomlConfig> {
    let contents = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

// ─── AppConfig ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    /// Bind address for the HTTP server (TODOD_BIND env var, default: "127.0.0.1").
    pub bind_address: String,
    pub log: String,
    /// "pretty" (default) | "json" (structured for log aggregators).
    pub log_format: String,
    /// Application display name (TODOD_APP_NAME env var, default: "ToDo App").
    pub app_name: String,
    /// Debug flag (TODOD_DEBUG env var, default: false).
    pub debug: bool,
}

impl AppConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file at `config_path` (default: ./config.toml)
    ///   3. Built-in defaults
    pub fn new(
        port: Option<u16>,
        bind_address: Option<String>,
        log: Option<String>,
        config_path: Option<PathBuf>,
    ) -> Self {
        let config_path = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));
        let toml = load_toml(&config_path).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let bind_address = bind_address
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let log_format = std::env::var("TODOD_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let app_name = std::env::var("TODOD_APP_NAME")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.app_name)
            .unwrap_or_else(|| DEFAULT_APP_NAME.to_string());

        let debug = std::env::var("TODOD_DEBUG")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(toml.debug)
            .unwrap_or(false);

        Self {
            port,
            bind_address,
            log,
            log_format,
            app_name,
            debug,
        }
    }
}
