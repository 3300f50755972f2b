//! Local preference store: favorites and watched movies.
//!
//! Persists the two user-owned lists as a single JSON file. The catalog
//! core never touches this module; it only consumes read-only snapshots
//! produced by `preference_snapshot`.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use reelpick_core::{PreferenceSnapshot, RatedMovie};

/// Minimum rating that qualifies a watched movie as a recommendation seed
const SEED_RATING: u8 = 4;

/// Error type for preference store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the store file failed
    #[error("Failed to access preference store: {0}")]
    Io(#[from] io::Error),

    /// The store file exists but does not hold valid store JSON
    #[error("Preference store is corrupted: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// Rating outside the 1-5 scale
    #[error("Rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// Rated a movie that is not on the watched list
    #[error("Movie {0} is not in the watched list")]
    NotWatched(u32),
}

/// Serialize StoreError as a string for Tauri compatibility
impl Serialize for StoreError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for preference store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// A watched movie with its optional rating and comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchedMovie {
    /// TMDB movie id
    pub id: u32,
    /// User rating on the 1-5 scale
    #[serde(default)]
    pub rating: Option<u8>,
    /// Free-text comment
    #[serde(default)]
    pub comment: Option<String>,
}

/// On-disk shape of the store file
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    favorites: Vec<u32>,
    #[serde(default)]
    watched: Vec<WatchedMovie>,
}

/// JSON-file-backed store for favorites and the watched list.
///
/// Every mutation is written through to disk before it returns, so the
/// file is always the source of truth across restarts.
pub struct PreferenceStore {
    /// Store file location
    path: PathBuf,
    /// In-memory copy of the store file
    data: StoreData,
}

impl PreferenceStore {
    /// Open the store at `path`, starting empty if the file does not exist.
    ///
    /// # Errors
    /// Returns `StoreError::Corrupt` if the file exists but cannot be
    /// parsed, or `StoreError::Io` on any other read failure.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(error) if error.kind() == io::ErrorKind::NotFound => StoreData::default(),
            Err(error) => return Err(error.into()),
        };
        Ok(Self { path, data })
    }

    /// Write the current state through to disk
    fn persist(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Currently favorited movie ids, in insertion order
    pub fn favorites(&self) -> &[u32] {
        &self.data.favorites
    }

    /// Whether a movie is currently favorited
    pub fn is_favorite(&self, movie_id: u32) -> bool {
        self.data.favorites.contains(&movie_id)
    }

    /// Add the movie to favorites, or remove it if already present.
    ///
    /// Returns whether the movie is favorited after the toggle.
    pub fn toggle_favorite(&mut self, movie_id: u32) -> StoreResult<bool> {
        let now_favorite = match self.data.favorites.iter().position(|&id| id == movie_id) {
            Some(index) => {
                self.data.favorites.remove(index);
                false
            }
            None => {
                self.data.favorites.push(movie_id);
                true
            }
        };
        self.persist()?;
        Ok(now_favorite)
    }

    /// Watched movies, in insertion order
    pub fn watched(&self) -> &[WatchedMovie] {
        &self.data.watched
    }

    /// Mark the movie watched, or unmark it if already present.
    ///
    /// Unmarking discards any rating and comment. Returns whether the
    /// movie is on the watched list after the toggle.
    pub fn toggle_watched(&mut self, movie_id: u32) -> StoreResult<bool> {
        let now_watched = match self.data.watched.iter().position(|m| m.id == movie_id) {
            Some(index) => {
                self.data.watched.remove(index);
                false
            }
            None => {
                self.data.watched.push(WatchedMovie {
                    id: movie_id,
                    rating: None,
                    comment: None,
                });
                true
            }
        };
        self.persist()?;
        Ok(now_watched)
    }

    /// Set or clear the rating and comment of a watched movie.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidRating` for ratings outside 1-5 and
    /// `StoreError::NotWatched` if the movie is not on the watched list.
    pub fn rate(
        &mut self,
        movie_id: u32,
        rating: Option<u8>,
        comment: Option<String>,
    ) -> StoreResult<()> {
        if let Some(value) = rating {
            if !(1..=5).contains(&value) {
                return Err(StoreError::InvalidRating(value));
            }
        }

        let entry = self
            .data
            .watched
            .iter_mut()
            .find(|m| m.id == movie_id)
            .ok_or(StoreError::NotWatched(movie_id))?;
        entry.rating = rating;
        entry.comment = comment;

        self.persist()
    }

    /// Read-only snapshot consumed by the recommendation engine.
    ///
    /// Highly-rated means a rating of at least 4.
    pub fn preference_snapshot(&self) -> PreferenceSnapshot {
        let highly_rated = self
            .data
            .watched
            .iter()
            .filter_map(|m| {
                m.rating
                    .filter(|&rating| rating >= SEED_RATING)
                    .map(|rating| RatedMovie { id: m.id, rating })
            })
            .collect();

        PreferenceSnapshot {
            favorites: self.data.favorites.clone(),
            highly_rated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> PreferenceStore {
        PreferenceStore::open(dir.path().join("preferences.json")).unwrap()
    }

    #[test]
    fn test_open_missing_file_starts_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.favorites().is_empty());
        assert!(store.watched().is_empty());
    }

    #[test]
    fn test_toggle_favorite_roundtrip() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(store.toggle_favorite(42).unwrap());
        assert!(store.is_favorite(42));
        assert!(!store.toggle_favorite(42).unwrap());
        assert!(!store.is_favorite(42));
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");

        {
            let mut store = PreferenceStore::open(&path).unwrap();
            store.toggle_favorite(42).unwrap();
            store.toggle_watched(7).unwrap();
            store.rate(7, Some(5), Some("great".to_string())).unwrap();
        }

        let store = PreferenceStore::open(&path).unwrap();
        assert_eq!(store.favorites(), &[42]);
        assert_eq!(store.watched()[0].rating, Some(5));
        assert_eq!(store.watched()[0].comment.as_deref(), Some("great"));
    }

    #[test]
    fn test_unwatch_discards_rating() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        store.toggle_watched(7).unwrap();
        store.rate(7, Some(4), None).unwrap();
        store.toggle_watched(7).unwrap();
        store.toggle_watched(7).unwrap();

        assert_eq!(store.watched()[0].rating, None);
    }

    #[test]
    fn test_rate_rejects_out_of_range() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.toggle_watched(7).unwrap();

        assert!(matches!(
            store.rate(7, Some(0), None),
            Err(StoreError::InvalidRating(0))
        ));
        assert!(matches!(
            store.rate(7, Some(6), None),
            Err(StoreError::InvalidRating(6))
        ));
    }

    #[test]
    fn test_rate_requires_watched_entry() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        assert!(matches!(
            store.rate(7, Some(3), None),
            Err(StoreError::NotWatched(7))
        ));
    }

    #[test]
    fn test_snapshot_selects_highly_rated() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);

        store.toggle_favorite(1).unwrap();
        for id in [10, 11, 12, 13] {
            store.toggle_watched(id).unwrap();
        }
        store.rate(10, Some(5), None).unwrap();
        store.rate(11, Some(4), None).unwrap();
        store.rate(12, Some(3), None).unwrap();
        // 13 stays unrated

        let snapshot = store.preference_snapshot();
        assert_eq!(snapshot.favorites, vec![1]);
        let seed_ids: Vec<u32> = snapshot.highly_rated.iter().map(|m| m.id).collect();
        assert_eq!(seed_ids, vec![10, 11]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            PreferenceStore::open(&path),
            Err(StoreError::Corrupt(_))
        ));
    }
}
