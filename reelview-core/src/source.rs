//! Transport seam for the movie collection.

use std::fmt::Debug;
use std::time::Instant;

use async_trait::async_trait;
use reelview_model::{Movie, MovieListResponse};
use reqwest::Client;
use serde::de::Error as _;
use url::Url;

use crate::config::BrowserConfig;
use crate::error::LoadError;

/// Anything that can produce the movie collection.
///
/// The browser only ever calls [`MovieSource::fetch_movies`] once; tests
/// swap in an in-memory source to drive the load lifecycle without I/O.
#[async_trait]
pub trait MovieSource: Send + Sync + Debug {
    async fn fetch_movies(&self) -> Result<Vec<Movie>, LoadError>;
}

/// `GET <BACKEND_URL>/api/movies` over reqwest.
#[derive(Debug, Clone)]
pub struct HttpMovieSource {
    client: Client,
    endpoint: Url,
}

impl HttpMovieSource {
    pub fn new(config: &BrowserConfig) -> Result<Self, LoadError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, config.movies_endpoint().clone()))
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        log::info!("[MovieSource] Using movie endpoint {}", endpoint);
        Self { client, endpoint }
    }
}

#[async_trait]
impl MovieSource for HttpMovieSource {
    async fn fetch_movies(&self) -> Result<Vec<Movie>, LoadError> {
        let now = Instant::now();
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!(
                "[MovieSource] {} answered with status {}",
                self.endpoint,
                status
            );
            return Err(LoadError::Status { status });
        }

        let body = response.bytes().await?;
        let movies = decode_movie_list(&body)?;

        log::info!(
            "[MovieSource] Fetched movie list: movies={} bytes={} elapsed={:?}",
            movies.len(),
            body.len(),
            now.elapsed()
        );

        Ok(movies)
    }
}

/// Decode a `/api/movies` body.
///
/// The top-level value must be a JSON object; a missing or `null`
/// `results` field decodes to an empty collection.
pub fn decode_movie_list(body: &[u8]) -> Result<Vec<Movie>, LoadError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(LoadError::Decode(serde_json::Error::custom(
            "expected a JSON object with a `results` field",
        )));
    }

    let response: MovieListResponse = serde_json::from_value(value)?;
    Ok(response.into_movies())
}
