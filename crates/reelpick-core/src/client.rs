//! HTTP client for the TMDB API.
//!
//! This module is the sole point of contact with TMDB. Every request carries
//! the API key, language and `include_adult=false` as query parameters. The
//! client never retries; each call is independently retryable by the caller.

use std::env;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::TMDB_BASE_URL;
use crate::error::{Result, TmdbError};
use crate::filter::filter_restricted;
use crate::types::{Genre, MovieDetail, MoviePage, Video, VideoCollection};

/// Language requested from TMDB
const DEFAULT_LANGUAGE: &str = "en-US";

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum average rating for discovery results
const MIN_DISCOVER_RATING: f32 = 7.0;

/// Minimum vote count for discovery results
const MIN_DISCOVER_VOTES: u32 = 100;

/// Environment variable holding the TMDB API key
const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Configuration for the TMDB HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Static API key attached to every request
    pub api_key: String,
    /// API base URL (override to point tests at a mock server)
    pub base_url: String,
    /// Language for localized fields (default: "en-US")
    pub language: String,
    /// Request timeout in seconds (default: 30)
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Create a configuration with defaults for everything but the key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: TMDB_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Wire envelope for the genre list endpoint
#[derive(Debug, Deserialize)]
struct GenreListPayload {
    genres: Vec<Genre>,
}

/// HTTP client for the TMDB API
///
/// All operations are asynchronous and side-effect-free with respect to
/// local state. Cloning is cheap; clones share the underlying connection
/// pool.
///
/// # Example
/// ```no_run
/// use reelpick_core::TmdbClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TmdbClient::new("api-key")?;
///
///     let page = client.popular(1).await?;
///     println!("{} popular movies", page.results.len());
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct TmdbClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Client configuration
    config: ClientConfig,
}

impl TmdbClient {
    /// Create a new client with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a new client with custom configuration.
    ///
    /// # Arguments
    /// * `config` - Client configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a new client from the `TMDB_API_KEY` environment variable.
    ///
    /// # Errors
    /// Returns `TmdbError::MissingApiKey` if the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_ENV).unwrap_or_default();
        if api_key.is_empty() {
            return Err(TmdbError::MissingApiKey);
        }
        Self::new(api_key)
    }

    /// Fetch a JSON payload from a TMDB path.
    ///
    /// Attaches the standard parameters, maps 404 to `NotFound` and any
    /// other non-success status to `Api`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, path);
        tracing::debug!(path, "TMDB request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("api_key", self.config.api_key.as_str()),
                ("language", self.config.language.as_str()),
                ("include_adult", "false"),
            ])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TmdbError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            return Err(TmdbError::Api {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.json::<T>().await?)
    }

    /// Fetch one page of popular movies.
    ///
    /// Restricted genres are filtered out of the returned results.
    ///
    /// # Arguments
    /// * `page` - Page number (1-based)
    pub async fn popular(&self, page: u32) -> Result<MoviePage> {
        let mut movie_page: MoviePage = self
            .get_json("/movie/popular", &[("page", page.to_string())])
            .await?;
        movie_page.results = filter_restricted(movie_page.results);
        Ok(movie_page)
    }

    /// Search movies by title.
    ///
    /// Restricted genres are filtered out of the returned results.
    ///
    /// # Arguments
    /// * `query` - Search query, passed verbatim (URL-encoded) to TMDB
    /// * `page` - Page number (1-based)
    ///
    /// # Errors
    /// Returns `TmdbError::EmptyQuery` if the query is empty or
    /// whitespace-only.
    pub async fn search(&self, query: &str, page: u32) -> Result<MoviePage> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(TmdbError::EmptyQuery);
        }

        let mut movie_page: MoviePage = self
            .get_json(
                "/search/movie",
                &[
                    ("query", trimmed.to_string()),
                    ("page", page.to_string()),
                ],
            )
            .await?;
        movie_page.results = filter_restricted(movie_page.results);
        Ok(movie_page)
    }

    /// Fetch full detail for a movie, including videos, credits and
    /// similar movies in one round trip.
    ///
    /// # Arguments
    /// * `id` - TMDB movie id
    ///
    /// # Errors
    /// Returns `TmdbError::NotFound` if the id does not exist upstream.
    pub async fn detail(&self, id: u32) -> Result<MovieDetail> {
        let path = format!("/movie/{}", id);
        self.get_json(
            &path,
            &[("append_to_response", "videos,credits,similar".to_string())],
        )
        .await
    }

    /// Fetch the TMDB genre vocabulary.
    pub async fn genres(&self) -> Result<Vec<Genre>> {
        let payload: GenreListPayload = self.get_json("/genre/movie/list", &[]).await?;
        Ok(payload.genres)
    }

    /// Fetch one page of well-rated movies for a genre.
    ///
    /// Results are constrained to an average rating of at least 7.0 over at
    /// least 100 votes, so obscure or poorly rated movies never reach the
    /// recommendation pool. Results are not content-filtered here; the
    /// recommender filters after merging candidates.
    ///
    /// # Arguments
    /// * `genre_id` - TMDB genre id
    pub async fn discover_by_genre(&self, genre_id: u32) -> Result<MoviePage> {
        self.get_json(
            "/discover/movie",
            &[
                ("with_genres", genre_id.to_string()),
                ("vote_average.gte", MIN_DISCOVER_RATING.to_string()),
                ("vote_count.gte", MIN_DISCOVER_VOTES.to_string()),
            ],
        )
        .await
    }

    /// Look up a soundtrack video for a movie, returning a YouTube URL.
    ///
    /// Matches video type/name against "soundtrack" and "music". The match
    /// is heuristic and can both over- and under-match.
    ///
    /// # Arguments
    /// * `id` - TMDB movie id
    pub async fn soundtrack_url(&self, id: u32) -> Result<Option<String>> {
        let path = format!("/movie/{}/videos", id);
        let videos: VideoCollection = self.get_json(&path, &[]).await?;
        Ok(find_soundtrack(&videos.results))
    }
}

/// Pick the first video that looks like a soundtrack
fn find_soundtrack(videos: &[Video]) -> Option<String> {
    videos
        .iter()
        .find(|video| {
            let kind = video.kind.to_lowercase();
            let name = video.name.to_lowercase();
            kind.contains("soundtrack") || name.contains("soundtrack") || kind.contains("music")
        })
        .map(|video| format!("https://www.youtube.com/watch?v={}", video.key))
}
