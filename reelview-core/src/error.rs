use reqwest::StatusCode;
use thiserror::Error;

/// Why the movie collection could not be loaded.
///
/// The variants only matter for logging; the browser shows the `Display`
/// text and nothing else.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to load movies (HTTP {status})")]
    Status { status: StatusCode },
    #[error("Failed to reach movie service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to read movie list: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Errors raised while resolving browser configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend URL '{value}'")]
    InvalidBackendUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
