//! Server configuration.
//!
//! Layers, later wins:
//! 1. built-in defaults
//! 2. optional TOML file (`--config calcora.toml`)
//! 3. `CALCORA_*` environment variables
//! 4. command-line flags
//!
//! ```toml
//! host = "0.0.0.0"
//! port = 8080
//! messages_dir = "messages"
//! log_format = "json"
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<LogFormat> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Some(LogFormat::Compact),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Dictionaries on disk; the embedded copy is used when unset
    pub messages_dir: Option<PathBuf>,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            messages_dir: None,
            log_format: LogFormat::Compact,
        }
    }
}

/// Command-line flags for the `calcora` server binary.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "calcora", version, about = "Calcora calculator web service")]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<IpAddr>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Directory with translation dictionaries
    #[arg(long)]
    pub messages_dir: Option<PathBuf>,

    /// Log output format
    #[arg(long, value_enum)]
    pub log_format: Option<LogFormat>,
}

impl ServerConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Apply `CALCORA_*` variables read through `var`.
    pub fn apply_env<F>(&mut self, var: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = var("CALCORA_HOST") {
            self.host = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: "CALCORA_HOST",
                value: value.clone(),
            })?;
        }
        if let Some(value) = var("CALCORA_PORT") {
            self.port = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: "CALCORA_PORT",
                value: value.clone(),
            })?;
        }
        if let Some(value) = var("CALCORA_MESSAGES_DIR") {
            if !value.trim().is_empty() {
                self.messages_dir = Some(PathBuf::from(value));
            }
        }
        if let Some(value) = var("CALCORA_LOG_FORMAT") {
            self.log_format = LogFormat::parse(&value).ok_or_else(|| ConfigError::InvalidEnv {
                name: "CALCORA_LOG_FORMAT",
                value: value.clone(),
            })?;
        }
        Ok(())
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(host) = cli.host {
            self.host = host;
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(dir) = &cli.messages_dir {
            self.messages_dir = Some(dir.clone());
        }
        if let Some(format) = cli.log_format {
            self.log_format = format;
        }
    }

    /// Resolve the full configuration for the server binary.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|name| std::env::var(name).ok())?;
        config.apply_cli(cli);
        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
