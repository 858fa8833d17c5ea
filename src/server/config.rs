use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_DIR: &str = "Files-Upload";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,

    /// Directory uploaded client images are stored in.
    pub upload_dir: String,
    pub max_upload_bytes: usize,

    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: parse_var("BIND_ADDR", DEFAULT_BIND_ADDR)?,
            upload_dir: std::env::var("UPLOAD_DIR").unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            max_upload_bytes: parse_var("MAX_UPLOAD_BYTES", &DEFAULT_MAX_UPLOAD_BYTES.to_string())?,
            log_format: match std::env::var("LOG_FORMAT") {
                Ok(value) => LogFormat::parse(&value)?,
                Err(_) => LogFormat::Text,
            },
        })
    }
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidEnvVar {
                name: "LOG_FORMAT".to_string(),
                value: value.to_string(),
                reason: "expected 'text' or 'json'".to_string(),
            }),
        }
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());

    value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value: value.clone(),
        reason: e.to_string(),
    })
}
