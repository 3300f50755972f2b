//! Data types for the Reelpick core library.
//!
//! These structs mirror the TMDB JSON wire format and are validated at the
//! client boundary: required fields must be present, optional payloads
//! default to empty rather than failing the whole response. All types
//! implement Serialize and Deserialize for JSON compatibility with Tauri.

use serde::{Deserialize, Serialize};

/// A single movie as returned by listing, search and discovery endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    /// Stable TMDB identifier, used for deduplication and exclusion
    pub id: u32,
    /// Display title
    pub title: String,
    /// Plot overview, may be empty
    #[serde(default)]
    pub overview: String,
    /// Poster image path (compose with `config::poster_url`)
    pub poster_path: Option<String>,
    /// Backdrop image path (compose with `config::backdrop_url`)
    pub backdrop_path: Option<String>,
    /// Average community rating in [0, 10]
    #[serde(default)]
    pub vote_average: f32,
    /// Number of community votes
    #[serde(default)]
    pub vote_count: u32,
    /// ISO release date (e.g. "2010-07-15"), absent for unreleased entries
    pub release_date: Option<String>,
    /// Genre ids referencing the TMDB genre vocabulary
    #[serde(default)]
    pub genre_ids: Vec<u32>,
}

/// One page of movies in the TMDB response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoviePage {
    /// Page number (1-based)
    pub page: u32,
    /// Movies on this page
    pub results: Vec<Movie>,
    /// Total number of pages available
    pub total_pages: u32,
    /// Total number of matching movies
    pub total_results: u32,
}

/// A genre from the TMDB genre vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    /// Stable genre identifier
    pub id: u32,
    /// Human-readable genre name
    pub name: String,
}

/// A video (trailer, teaser, clip) attached to a movie
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Provider-specific video key (YouTube video id for site "YouTube")
    pub key: String,
    /// Display name of the video
    pub name: String,
    /// Hosting site (e.g. "YouTube")
    pub site: String,
    /// Video category as reported by TMDB (e.g. "Trailer")
    #[serde(rename = "type")]
    pub kind: String,
}

/// Videos sub-resource as embedded in a detail response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VideoCollection {
    /// Videos attached to the movie
    #[serde(default)]
    pub results: Vec<Video>,
}

/// A cast member from the credits sub-resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastMember {
    /// TMDB person identifier
    pub id: u32,
    /// Actor name
    pub name: String,
    /// Character played, absent for uncredited roles
    pub character: Option<String>,
    /// Profile image path
    pub profile_path: Option<String>,
}

/// Credits sub-resource as embedded in a detail response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credits {
    /// Billed cast, in billing order
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// Full movie detail with expanded sub-resources.
///
/// Produced by `TmdbClient::detail`, which requests videos, credits and
/// similar movies in one round trip. Unlike listing results, genres arrive
/// here as named records rather than bare ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieDetail {
    /// Stable TMDB identifier
    pub id: u32,
    /// Display title
    pub title: String,
    /// Plot overview, may be empty
    #[serde(default)]
    pub overview: String,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Backdrop image path
    pub backdrop_path: Option<String>,
    /// Average community rating in [0, 10]
    #[serde(default)]
    pub vote_average: f32,
    /// Number of community votes
    #[serde(default)]
    pub vote_count: u32,
    /// ISO release date
    pub release_date: Option<String>,
    /// Runtime in minutes, absent when TMDB has no data
    pub runtime: Option<u32>,
    /// Named genres for this movie
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Attached videos (trailers, teasers)
    #[serde(default)]
    pub videos: VideoCollection,
    /// Cast credits
    #[serde(default)]
    pub credits: Credits,
    /// Movies TMDB considers similar
    pub similar: Option<MoviePage>,
}

impl MovieDetail {
    /// Genre ids referenced by this movie
    pub fn genre_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.genres.iter().map(|g| g.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserialization() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "overview": "A thief who steals corporate secrets.",
            "poster_path": "/inception.jpg",
            "backdrop_path": null,
            "vote_average": 8.4,
            "vote_count": 34495,
            "release_date": "2010-07-15",
            "genre_ids": [28, 878, 12]
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, 27205);
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.poster_path.as_deref(), Some("/inception.jpg"));
        assert_eq!(movie.backdrop_path, None);
        assert_eq!(movie.genre_ids, vec![28, 878, 12]);
    }

    #[test]
    fn test_movie_missing_optionals_default() {
        // Discovery occasionally omits vote fields and genre ids
        let json = r#"{"id": 1, "title": "Bare"}"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.overview, "");
        assert_eq!(movie.vote_average, 0.0);
        assert_eq!(movie.vote_count, 0);
        assert!(movie.genre_ids.is_empty());
        assert!(movie.release_date.is_none());
    }

    #[test]
    fn test_movie_page_envelope() {
        let json = r#"{
            "page": 2,
            "results": [{"id": 7, "title": "Seven"}],
            "total_pages": 10,
            "total_results": 195
        }"#;

        let page: MoviePage = serde_json::from_str(json).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.total_pages, 10);
        assert_eq!(page.total_results, 195);
    }

    #[test]
    fn test_movie_detail_with_sub_resources() {
        let json = r#"{
            "id": 27205,
            "title": "Inception",
            "runtime": 148,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}],
            "videos": {"results": [{"key": "abc", "name": "Official Trailer", "site": "YouTube", "type": "Trailer"}]},
            "credits": {"cast": [{"id": 6193, "name": "Leonardo DiCaprio", "character": "Cobb", "profile_path": null}]},
            "similar": {"page": 1, "results": [], "total_pages": 1, "total_results": 0}
        }"#;

        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.runtime, Some(148));
        assert_eq!(detail.genre_ids().collect::<Vec<_>>(), vec![28, 878]);
        assert_eq!(detail.videos.results[0].kind, "Trailer");
        assert_eq!(detail.credits.cast[0].name, "Leonardo DiCaprio");
        assert!(detail.similar.unwrap().results.is_empty());
    }

    #[test]
    fn test_movie_detail_without_sub_resources() {
        // Detail without append_to_response has no videos/credits/similar
        let json = r#"{"id": 5, "title": "Plain"}"#;

        let detail: MovieDetail = serde_json::from_str(json).unwrap();
        assert!(detail.videos.results.is_empty());
        assert!(detail.credits.cast.is_empty());
        assert!(detail.similar.is_none());
        assert!(detail.genres.is_empty());
    }

    #[test]
    fn test_movie_roundtrip() {
        let movie = Movie {
            id: 42,
            title: "Test Movie".to_string(),
            overview: "Overview".to_string(),
            poster_path: Some("/p.jpg".to_string()),
            backdrop_path: None,
            vote_average: 7.2,
            vote_count: 1200,
            release_date: Some("2020-01-01".to_string()),
            genre_ids: vec![18],
        };

        let json = serde_json::to_string(&movie).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, 42);
        assert_eq!(back.genre_ids, vec![18]);
    }
}
