use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub cors_allowed_origins: Option<Vec<String>>,
    pub max_upload_bytes: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "PORT",
                expected: "u16",
                value,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let max_upload_bytes = match std::env::var("MAX_UPLOAD_BYTES") {
            Ok(value) => value
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "MAX_UPLOAD_BYTES",
                    expected: "byte count",
                    value,
                })?,
            Err(_) => DEFAULT_MAX_UPLOAD_BYTES,
        };

        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS").ok().map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        Ok(Self {
            port,
            cors_allowed_origins,
            max_upload_bytes,
        })
    }
}
