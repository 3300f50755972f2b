//! Content filter applied to every surfaced movie list.
//!
//! TMDB tags movies with genre ids from a shared vocabulary. A fixed set of
//! those ids is excluded from everything this library surfaces. The set is
//! policy, not configuration.

use crate::types::Movie;

/// Genre ids excluded from all surfaced results: 99 (Documentary),
/// 10402 (Music), 10751 (Family)
const RESTRICTED_GENRES: [u32; 3] = [99, 10402, 10751];

/// Whether a movie carries a restricted genre id
fn is_restricted(movie: &Movie) -> bool {
    movie
        .genre_ids
        .iter()
        .any(|genre_id| RESTRICTED_GENRES.contains(genre_id))
}

/// Remove movies tagged with a restricted genre.
///
/// Pure and order-preserving: surviving movies keep their relative order.
/// An empty input yields an empty output.
///
/// # Example
/// ```
/// use reelpick_core::filter::filter_restricted;
///
/// let kept = filter_restricted(Vec::new());
/// assert!(kept.is_empty());
/// ```
pub fn filter_restricted(movies: Vec<Movie>) -> Vec<Movie> {
    movies.into_iter().filter(|m| !is_restricted(m)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn movie(id: u32, genre_ids: Vec<u32>) -> Movie {
        Movie {
            id,
            title: format!("Movie {}", id),
            overview: String::new(),
            poster_path: None,
            backdrop_path: None,
            vote_average: 0.0,
            vote_count: 0,
            release_date: None,
            genre_ids,
        }
    }

    #[test]
    fn test_filter_removes_restricted_genres() {
        let movies = vec![
            movie(1, vec![28, 12]),
            movie(2, vec![99]),
            movie(3, vec![18, 10402]),
            movie(4, vec![10751, 35]),
            movie(5, vec![35]),
        ];

        let kept = filter_restricted(movies);
        let ids: Vec<u32> = kept.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 5]);
    }

    #[test]
    fn test_filter_keeps_untagged_movies() {
        let movies = vec![movie(1, vec![]), movie(2, vec![28])];
        let kept = filter_restricted(movies);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_filter_empty_input() {
        let kept = filter_restricted(Vec::new());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filter_preserves_order() {
        let movies = vec![
            movie(9, vec![12]),
            movie(3, vec![99]),
            movie(7, vec![28]),
            movie(1, vec![16]),
        ];

        let kept = filter_restricted(movies);
        let ids: Vec<u32> = kept.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![9, 7, 1]);
    }

    fn arb_movie() -> impl Strategy<Value = Movie> {
        (
            any::<u32>(),
            proptest::collection::vec(
                prop_oneof![Just(28u32), Just(12), Just(99), Just(10402), Just(10751), Just(35)],
                0..4,
            ),
        )
            .prop_map(|(id, genre_ids)| movie(id, genre_ids))
    }

    proptest! {
        #[test]
        fn prop_filter_is_idempotent(movies in proptest::collection::vec(arb_movie(), 0..32)) {
            let once = filter_restricted(movies);
            let once_ids: Vec<u32> = once.iter().map(|m| m.id).collect();
            let twice = filter_restricted(once);
            let twice_ids: Vec<u32> = twice.iter().map(|m| m.id).collect();
            prop_assert_eq!(once_ids, twice_ids);
        }

        #[test]
        fn prop_no_restricted_genre_survives(movies in proptest::collection::vec(arb_movie(), 0..32)) {
            let kept = filter_restricted(movies);
            for m in &kept {
                for genre_id in &m.genre_ids {
                    prop_assert!(!RESTRICTED_GENRES.contains(genre_id));
                }
            }
        }
    }
}
