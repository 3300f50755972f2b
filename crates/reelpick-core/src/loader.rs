//! Incremental paginated catalog loader.
//!
//! A `MovieLoader` accumulates pages from either the popular listing or a
//! title search, one page per `load` call. Each loader instance is owned by
//! exactly one screen; the popular grid and the search grid each get their
//! own.

use crate::client::TmdbClient;
use crate::error::TmdbError;
use crate::types::Movie;

/// Lifecycle phase of a loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No page has been requested yet
    Idle,
    /// A page fetch is in flight
    Loading,
    /// The last fetch succeeded
    Loaded,
    /// The last fetch failed; accumulated movies are intact
    Failed,
}

/// Stateful page accumulator over the popular or search listings.
///
/// Entries from page N always precede entries from page N+1; the loader
/// never reorders or sorts. A failed fetch records the error and leaves
/// previously accumulated pages untouched.
///
/// # Example
/// ```no_run
/// use reelpick_core::{MovieLoader, TmdbClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TmdbClient::new("api-key")?;
///     let mut loader = MovieLoader::new(client);
///
///     loader.load(None).await; // first popular page
///     loader.load(None).await; // second page appended
///     println!("{} movies loaded", loader.movies().len());
///
///     Ok(())
/// }
/// ```
pub struct MovieLoader {
    /// Client used for page fetches
    client: TmdbClient,
    /// Accumulated movies across all successfully fetched pages
    movies: Vec<Movie>,
    /// Next page to fetch (1-based)
    page: u32,
    /// Whether more pages remain after the last fetched one
    has_more: bool,
    /// Current lifecycle phase
    phase: LoadPhase,
    /// Error from the most recent failed fetch
    last_error: Option<TmdbError>,
}

impl MovieLoader {
    /// Create an idle loader on page 1
    pub fn new(client: TmdbClient) -> Self {
        Self {
            client,
            movies: Vec::new(),
            page: 1,
            has_more: true,
            phase: LoadPhase::Idle,
            last_error: None,
        }
    }

    /// Fetch the next page and fold it into the accumulated list.
    ///
    /// With a query, the search listing is used; without one, the popular
    /// listing. Page 1 replaces the accumulated list, later pages append.
    /// Calling while a fetch is already in flight is a no-op.
    ///
    /// Errors are not returned: a failed fetch records the error in
    /// `last_error`, moves the loader to `Failed` and keeps the movies from
    /// prior pages.
    ///
    /// # Arguments
    /// * `query` - Search query, or None for the popular listing
    pub async fn load(&mut self, query: Option<&str>) {
        if self.phase == LoadPhase::Loading {
            return;
        }
        self.phase = LoadPhase::Loading;
        self.last_error = None;

        let result = match query {
            Some(q) => self.client.search(q, self.page).await,
            None => self.client.popular(self.page).await,
        };

        match result {
            Ok(fetched) => {
                if self.page == 1 {
                    self.movies = fetched.results;
                } else {
                    self.movies.extend(fetched.results);
                }
                self.has_more = fetched.page < fetched.total_pages;
                self.page += 1;
                self.phase = LoadPhase::Loaded;
            }
            Err(error) => {
                tracing::debug!(page = self.page, %error, "page fetch failed");
                self.last_error = Some(error);
                self.phase = LoadPhase::Failed;
            }
        }
    }

    /// Clear all state back to an idle loader on page 1.
    ///
    /// Called whenever the active query changes.
    pub fn reset(&mut self) {
        self.movies.clear();
        self.page = 1;
        self.has_more = true;
        self.phase = LoadPhase::Idle;
        self.last_error = None;
    }

    /// Accumulated movies, in page order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Whether more pages remain
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a fetch is in flight
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Error from the most recent failed fetch, cleared on the next `load`
    pub fn last_error(&self) -> Option<&TmdbError> {
        self.last_error.as_ref()
    }
}
