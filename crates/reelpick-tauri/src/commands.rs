//! Tauri commands for the Reelpick movie discovery core.
//!
//! This module contains all Tauri commands that can be invoked from the
//! frontend.

use serde::Serialize;
use tauri::State;

use reelpick_core::{Genre, Movie, MovieDetail, MovieLoader, ThreadRngSource};

use crate::store::WatchedMovie;
use crate::{CatalogState, PreferenceState};

/// Snapshot of a loader handed to the frontend grid after each load
#[derive(Debug, Clone, Serialize)]
pub struct MovieFeed {
    /// Accumulated movies, in page order
    pub movies: Vec<Movie>,
    /// Whether more pages remain
    pub has_more: bool,
    /// Message from the most recent failed page fetch, retry-eligible
    pub error: Option<String>,
}

impl MovieFeed {
    fn from_loader(loader: &MovieLoader) -> Self {
        Self {
            movies: loader.movies().to_vec(),
            has_more: loader.has_more(),
            error: loader.last_error().map(|e| e.to_string()),
        }
    }
}

/// Fetch the next popular page into the browse grid.
///
/// # Returns
/// * `Ok(MovieFeed)` with the accumulated grid state
#[tauri::command]
pub async fn load_popular(state: State<'_, CatalogState>) -> Result<MovieFeed, String> {
    let mut loader = state.browse().lock().await;
    loader.load(None).await;
    Ok(MovieFeed::from_loader(&loader))
}

/// Reset the browse grid back to page 1.
#[tauri::command]
pub async fn reset_popular(state: State<'_, CatalogState>) -> Result<(), String> {
    state.browse().lock().await.reset();
    Ok(())
}

/// Fetch the next search page for `query` into the search grid.
///
/// Call `reset_search` first when the query changes.
///
/// # Arguments
/// * `query` - Search query string
#[tauri::command]
pub async fn search_movies(
    state: State<'_, CatalogState>,
    query: String,
) -> Result<MovieFeed, String> {
    let mut loader = state.search().lock().await;
    loader.load(Some(&query)).await;
    Ok(MovieFeed::from_loader(&loader))
}

/// Reset the search grid back to page 1.
#[tauri::command]
pub async fn reset_search(state: State<'_, CatalogState>) -> Result<(), String> {
    state.search().lock().await.reset();
    Ok(())
}

/// Get full detail for a movie, including videos, credits and similar
/// movies.
///
/// # Arguments
/// * `movie_id` - TMDB movie id
#[tauri::command]
pub async fn movie_detail(
    state: State<'_, CatalogState>,
    movie_id: u32,
) -> Result<MovieDetail, String> {
    state
        .client()
        .detail(movie_id)
        .await
        .map_err(|e| e.to_string())
}

/// Get the TMDB genre vocabulary.
#[tauri::command]
pub async fn genre_list(state: State<'_, CatalogState>) -> Result<Vec<Genre>, String> {
    state.client().genres().await.map_err(|e| e.to_string())
}

/// Look up a soundtrack link for a movie, if one can be found.
///
/// # Arguments
/// * `movie_id` - TMDB movie id
#[tauri::command]
pub async fn movie_soundtrack(
    state: State<'_, CatalogState>,
    movie_id: u32,
) -> Result<Option<String>, String> {
    state
        .client()
        .soundtrack_url(movie_id)
        .await
        .map_err(|e| e.to_string())
}

/// Recommend one movie from the user's favorites and highly-rated watched
/// movies.
///
/// Failures surface as an error to the caller; a recommendation that
/// cannot be produced is never silently swallowed.
#[tauri::command]
pub async fn random_movie(
    catalog: State<'_, CatalogState>,
    preferences: State<'_, PreferenceState>,
) -> Result<Movie, String> {
    let snapshot = preferences.store().lock().await.preference_snapshot();
    catalog
        .recommender()
        .recommend(&snapshot, &mut ThreadRngSource)
        .await
        .map_err(|e| e.to_string())
}

/// Toggle a movie in the favorites list.
///
/// # Returns
/// * `Ok(Vec<u32>)` with the favorites after the toggle
#[tauri::command]
pub async fn toggle_favorite(
    preferences: State<'_, PreferenceState>,
    movie_id: u32,
) -> Result<Vec<u32>, String> {
    let mut store = preferences.store().lock().await;
    store.toggle_favorite(movie_id).map_err(|e| e.to_string())?;
    Ok(store.favorites().to_vec())
}

/// Get the current favorites list.
#[tauri::command]
pub async fn get_favorites(preferences: State<'_, PreferenceState>) -> Result<Vec<u32>, String> {
    Ok(preferences.store().lock().await.favorites().to_vec())
}

/// Toggle a movie in the watched list.
///
/// # Returns
/// * `Ok(Vec<WatchedMovie>)` with the watched list after the toggle
#[tauri::command]
pub async fn toggle_watched(
    preferences: State<'_, PreferenceState>,
    movie_id: u32,
) -> Result<Vec<WatchedMovie>, String> {
    let mut store = preferences.store().lock().await;
    store.toggle_watched(movie_id).map_err(|e| e.to_string())?;
    Ok(store.watched().to_vec())
}

/// Set or clear the rating (1-5) and comment of a watched movie.
///
/// # Arguments
/// * `movie_id` - TMDB movie id, must already be on the watched list
/// * `rating` - Rating on the 1-5 scale, or None to clear
/// * `comment` - Free-text comment, or None to clear
#[tauri::command]
pub async fn rate_movie(
    preferences: State<'_, PreferenceState>,
    movie_id: u32,
    rating: Option<u8>,
    comment: Option<String>,
) -> Result<(), String> {
    preferences
        .store()
        .lock()
        .await
        .rate(movie_id, rating, comment)
        .map_err(|e| e.to_string())
}

/// Get the current watched list.
#[tauri::command]
pub async fn get_watched(
    preferences: State<'_, PreferenceState>,
) -> Result<Vec<WatchedMovie>, String> {
    Ok(preferences.store().lock().await.watched().to_vec())
}
