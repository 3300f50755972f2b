//! TMDB endpoint and image configuration.
//!
//! TMDB serves images from a separate host, bucketed by size. A full image
//! URL is composed as `{image base}/{size}/{path}` where `path` is the
//! leading-slash path TMDB returns on movie records (e.g. `/abc123.jpg`).

/// Base URL for the TMDB v3 API
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Base URL for TMDB-hosted images
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Size buckets available for poster images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    /// 154px wide
    Small,
    /// 342px wide
    Medium,
    /// 500px wide
    Large,
    /// As uploaded
    Original,
}

impl PosterSize {
    /// The size segment used in image URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::Small => "w154",
            PosterSize::Medium => "w342",
            PosterSize::Large => "w500",
            PosterSize::Original => "original",
        }
    }
}

/// Size buckets available for backdrop images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackdropSize {
    /// 300px wide
    Small,
    /// 780px wide
    Medium,
    /// 1280px wide
    Large,
    /// As uploaded
    Original,
}

impl BackdropSize {
    /// The size segment used in image URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            BackdropSize::Small => "w300",
            BackdropSize::Medium => "w780",
            BackdropSize::Large => "w1280",
            BackdropSize::Original => "original",
        }
    }
}

/// Compose a full poster URL from a TMDB poster path.
///
/// # Example
/// ```
/// use reelpick_core::config::{poster_url, PosterSize};
///
/// let url = poster_url("/abc123.jpg", PosterSize::Medium);
/// assert_eq!(url, "https://image.tmdb.org/t/p/w342/abc123.jpg");
/// ```
pub fn poster_url(path: &str, size: PosterSize) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), path)
}

/// Compose a full backdrop URL from a TMDB backdrop path.
pub fn backdrop_url(path: &str, size: BackdropSize) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poster_size_segments() {
        assert_eq!(PosterSize::Small.as_str(), "w154");
        assert_eq!(PosterSize::Medium.as_str(), "w342");
        assert_eq!(PosterSize::Large.as_str(), "w500");
        assert_eq!(PosterSize::Original.as_str(), "original");
    }

    #[test]
    fn test_backdrop_size_segments() {
        assert_eq!(BackdropSize::Small.as_str(), "w300");
        assert_eq!(BackdropSize::Medium.as_str(), "w780");
        assert_eq!(BackdropSize::Large.as_str(), "w1280");
        assert_eq!(BackdropSize::Original.as_str(), "original");
    }

    #[test]
    fn test_poster_url_composition() {
        let url = poster_url("/poster.jpg", PosterSize::Large);
        assert_eq!(url, "https://image.tmdb.org/t/p/w500/poster.jpg");
    }

    #[test]
    fn test_backdrop_url_composition() {
        let url = backdrop_url("/backdrop.jpg", BackdropSize::Original);
        assert_eq!(url, "https://image.tmdb.org/t/p/original/backdrop.jpg");
    }
}
