//! Backend address resolution.

use url::Url;

use crate::error::ConfigError;

/// Environment variable naming the catalog backend.
pub const BACKEND_URL_ENV: &str = "BACKEND_URL";

/// Backend used when `BACKEND_URL` is unset or blank.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Path of the movie list, relative to the backend base.
pub const MOVIES_PATH: &str = "api/movies";

/// Browser configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserConfig {
    backend_url: Url,
    movies_endpoint: Url,
}

impl BrowserConfig {
    /// Build a configuration for the given backend base address.
    ///
    /// Accepts bare `host:port` values; a missing scheme becomes `http://`.
    pub fn new(backend_url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let base = normalize(backend_url.as_ref());
        let backend_url = parse(&base)?;
        let movies_endpoint = parse(&format!("{base}/{MOVIES_PATH}"))?;

        Ok(Self {
            backend_url,
            movies_endpoint,
        })
    }

    /// Load `.env` if present, then resolve `BACKEND_URL` from the process
    /// environment.
    pub fn from_environment() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => {
                log::debug!("[Config] Loaded environment from {}", path.display())
            }
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(BACKEND_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        Self::new(raw)
    }

    pub fn backend_url(&self) -> &Url {
        &self.backend_url
    }

    /// `<BACKEND_URL>/api/movies`
    pub fn movies_endpoint(&self) -> &Url {
        &self.movies_endpoint
    }
}

fn normalize(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        let with_scheme = format!("http://{trimmed}");
        log::warn!(
            "[Config] Normalized backend URL from '{}' to '{}'",
            raw,
            with_scheme
        );
        with_scheme
    }
}

fn has_http_scheme(value: &str) -> bool {
    value.split_once("://").is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
    })
}

fn parse(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidBackendUrl {
        value: value.to_string(),
        source,
    })
}
