//! Genre-weighted random movie recommendation.
//!
//! The recommender infers genre preference from the movies a user has
//! favorited or rated highly, pulls well-rated movies for each of those
//! genres, and picks one at random. With no preference signal (or no
//! surviving candidates) it falls back to the popular listing.

use std::collections::HashSet;

use futures::future::try_join_all;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::client::TmdbClient;
use crate::error::{Result, TmdbError};
use crate::filter::filter_restricted;
use crate::types::Movie;

/// A watched movie together with the rating that qualified it as a seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatedMovie {
    /// TMDB movie id
    pub id: u32,
    /// User rating on the 1-5 scale, at least 4 for seeds
    pub rating: u8,
}

/// Read-only snapshot of the user's preference state.
///
/// Supplied explicitly by the caller; the recommender never reads ambient
/// state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferenceSnapshot {
    /// Favorited movie ids
    pub favorites: Vec<u32>,
    /// Watched movies rated highly enough to count as preference signal
    pub highly_rated: Vec<RatedMovie>,
}

impl PreferenceSnapshot {
    /// Union of favorite and highly-rated ids, first occurrence wins
    fn seed_ids(&self) -> Vec<u32> {
        let mut seen = HashSet::new();
        self.favorites
            .iter()
            .copied()
            .chain(self.highly_rated.iter().map(|rated| rated.id))
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

/// Injectable source of randomness for candidate selection.
///
/// Isolated behind a trait so tests can force deterministic picks.
pub trait RandomSource: Send {
    /// Pick an index in `[0, len)`. Callers only invoke this with a
    /// non-zero `len`, and implementations must stay within the range.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Default random source backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Genre-weighted random movie recommender.
///
/// Stateless between calls; each recommendation is independent.
///
/// # Example
/// ```no_run
/// use reelpick_core::{PreferenceSnapshot, Recommender, ThreadRngSource, TmdbClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TmdbClient::new("api-key")?;
///     let recommender = Recommender::new(client);
///
///     let preferences = PreferenceSnapshot {
///         favorites: vec![27205],
///         highly_rated: Vec::new(),
///     };
///     let movie = recommender
///         .recommend(&preferences, &mut ThreadRngSource)
///         .await?;
///     println!("Tonight: {}", movie.title);
///
///     Ok(())
/// }
/// ```
pub struct Recommender {
    client: TmdbClient,
}

impl Recommender {
    /// Create a recommender over the given client
    pub fn new(client: TmdbClient) -> Self {
        Self { client }
    }

    /// Recommend one movie based on the user's preference snapshot.
    ///
    /// Seed details and per-genre discovery pages are fetched concurrently
    /// as all-or-nothing batches: a single failed fetch fails the whole
    /// call, since partial genre data would skew the result. Candidates
    /// never include seed ids, and the uniform random pick is delegated to
    /// `random`.
    ///
    /// # Errors
    /// Propagates client errors verbatim; returns `TmdbError::NoCandidates`
    /// only when even the popular fallback page is empty.
    pub async fn recommend(
        &self,
        preferences: &PreferenceSnapshot,
        random: &mut dyn RandomSource,
    ) -> Result<Movie> {
        let seed_ids = preferences.seed_ids();
        if seed_ids.is_empty() {
            // No preference signal to weight by
            tracing::info!("no seeds, recommending from the popular pool");
            return self.pick_popular(random).await;
        }

        let details = try_join_all(seed_ids.iter().map(|&id| self.client.detail(id))).await?;

        let mut seen_genres = HashSet::new();
        let genre_ids: Vec<u32> = details
            .iter()
            .flat_map(|detail| detail.genre_ids())
            .filter(|genre_id| seen_genres.insert(*genre_id))
            .collect();

        let pages = try_join_all(
            genre_ids
                .iter()
                .map(|&genre_id| self.client.discover_by_genre(genre_id)),
        )
        .await?;

        let seed_set: HashSet<u32> = seed_ids.iter().copied().collect();
        let mut seen_ids = HashSet::new();
        let candidates: Vec<Movie> = pages
            .into_iter()
            .flat_map(|page| page.results)
            .filter(|movie| seen_ids.insert(movie.id))
            .filter(|movie| !seed_set.contains(&movie.id))
            .collect();

        let mut candidates = filter_restricted(candidates);

        tracing::info!(
            seeds = seed_ids.len(),
            genres = genre_ids.len(),
            candidates = candidates.len(),
            "recommendation pool assembled"
        );

        if candidates.is_empty() {
            return self.pick_popular(random).await;
        }

        let index = random.pick_index(candidates.len());
        Ok(candidates.swap_remove(index))
    }

    /// Fallback pool: one uniformly random movie from the first popular page
    async fn pick_popular(&self, random: &mut dyn RandomSource) -> Result<Movie> {
        let page = self.client.popular(1).await?;
        let mut results = page.results;
        if results.is_empty() {
            return Err(TmdbError::NoCandidates);
        }
        let index = random.pick_index(results.len());
        Ok(results.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_union_dedups() {
        let preferences = PreferenceSnapshot {
            favorites: vec![1, 2, 3],
            highly_rated: vec![
                RatedMovie { id: 2, rating: 5 },
                RatedMovie { id: 4, rating: 4 },
            ],
        };

        assert_eq!(preferences.seed_ids(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_seed_ids_empty() {
        let preferences = PreferenceSnapshot::default();
        assert!(preferences.seed_ids().is_empty());
    }

    #[test]
    fn test_thread_rng_source_in_range() {
        let mut source = ThreadRngSource;
        for _ in 0..64 {
            let index = source.pick_index(5);
            assert!(index < 5);
        }
    }

    #[test]
    fn test_thread_rng_source_single_element() {
        let mut source = ThreadRngSource;
        assert_eq!(source.pick_index(1), 0);
    }
}
