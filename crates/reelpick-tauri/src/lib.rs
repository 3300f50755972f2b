//! Reelpick Tauri Integration
//!
//! This crate provides Tauri commands for integrating the Reelpick movie
//! discovery core into Tauri 2.0 applications.
//!
//! # Usage
//!
//! ```rust,ignore
//! use reelpick_tauri::{CatalogState, PreferenceState};
//! use tauri::Manager;
//!
//! fn main() {
//!     tauri::Builder::default()
//!         .setup(|app| {
//!             app.manage(CatalogState::from_env()?);
//!             let store_path = app
//!                 .path()
//!                 .app_data_dir()?
//!                 .join("preferences.json");
//!             app.manage(PreferenceState::open(store_path)?);
//!             Ok(())
//!         })
//!         .invoke_handler(tauri::generate_handler![
//!             reelpick_tauri::commands::load_popular,
//!             reelpick_tauri::commands::reset_popular,
//!             reelpick_tauri::commands::search_movies,
//!             reelpick_tauri::commands::reset_search,
//!             reelpick_tauri::commands::movie_detail,
//!             reelpick_tauri::commands::genre_list,
//!             reelpick_tauri::commands::movie_soundtrack,
//!             reelpick_tauri::commands::random_movie,
//!             reelpick_tauri::commands::toggle_favorite,
//!             reelpick_tauri::commands::get_favorites,
//!             reelpick_tauri::commands::toggle_watched,
//!             reelpick_tauri::commands::rate_movie,
//!             reelpick_tauri::commands::get_watched,
//!         ])
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! # Commands
//! - `load_popular` / `reset_popular` - Incremental popular-movies grid
//! - `search_movies` / `reset_search` - Incremental search grid
//! - `movie_detail` - Full detail with videos, credits, similar movies
//! - `genre_list` - The TMDB genre vocabulary
//! - `movie_soundtrack` - Best-effort soundtrack link for a movie
//! - `random_movie` - Genre-weighted random recommendation
//! - `toggle_favorite` / `get_favorites` - Favorites list
//! - `toggle_watched` / `rate_movie` / `get_watched` - Watched list

pub mod commands;
pub mod store;

use tokio::sync::Mutex;

use reelpick_core::{MovieLoader, Recommender, TmdbClient};

use crate::store::PreferenceStore;

/// Managed catalog state: the shared client, the recommender and one
/// loader per screen.
///
/// The popular grid and the search grid own separate loaders so each
/// screen accumulates and resets its pages independently, with at most
/// one in-flight request per loader.
pub struct CatalogState {
    client: TmdbClient,
    recommender: Recommender,
    browse: Mutex<MovieLoader>,
    search: Mutex<MovieLoader>,
}

impl CatalogState {
    /// Create catalog state from an API key.
    ///
    /// # Errors
    /// Returns an error string if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self, String> {
        let client = TmdbClient::new(api_key).map_err(|e| e.to_string())?;
        Ok(Self::with_client(client))
    }

    /// Create catalog state from the `TMDB_API_KEY` environment variable.
    ///
    /// # Errors
    /// Returns an error string if the variable is unset or the HTTP client
    /// cannot be created.
    pub fn from_env() -> Result<Self, String> {
        let client = TmdbClient::from_env().map_err(|e| e.to_string())?;
        Ok(Self::with_client(client))
    }

    /// Create catalog state around a pre-configured client.
    ///
    /// Useful for tests or custom client configuration.
    pub fn with_client(client: TmdbClient) -> Self {
        Self {
            recommender: Recommender::new(client.clone()),
            browse: Mutex::new(MovieLoader::new(client.clone())),
            search: Mutex::new(MovieLoader::new(client.clone())),
            client,
        }
    }

    /// The shared TMDB client
    pub fn client(&self) -> &TmdbClient {
        &self.client
    }

    /// The recommendation engine
    pub fn recommender(&self) -> &Recommender {
        &self.recommender
    }

    /// Loader backing the popular-movies grid
    pub fn browse(&self) -> &Mutex<MovieLoader> {
        &self.browse
    }

    /// Loader backing the search grid
    pub fn search(&self) -> &Mutex<MovieLoader> {
        &self.search
    }
}

/// Managed preference state wrapping the on-disk store
pub struct PreferenceState {
    store: Mutex<PreferenceStore>,
}

impl PreferenceState {
    /// Open the preference store at `path`.
    ///
    /// # Errors
    /// Returns an error string if the store file exists but cannot be read
    /// or parsed.
    pub fn open(path: impl Into<std::path::PathBuf>) -> Result<Self, String> {
        let store = PreferenceStore::open(path).map_err(|e| e.to_string())?;
        Ok(Self {
            store: Mutex::new(store),
        })
    }

    /// The wrapped preference store
    pub fn store(&self) -> &Mutex<PreferenceStore> {
        &self.store
    }
}
