//! Reelpick Core Library
//!
//! This crate provides the movie discovery core behind the Reelpick UI,
//! backed by TMDB (The Movie Database).
//!
//! # Features
//! - Browse popular movies and search by title, page by page
//! - Full movie detail with videos, credits and similar movies
//! - Genre-weighted random recommendation seeded from favorites and
//!   highly-rated watched movies
//! - Fixed content policy filtering restricted genres from every list

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod recommend;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, TmdbClient};
pub use error::{Result, TmdbError};
pub use filter::filter_restricted;
pub use loader::{LoadPhase, MovieLoader};
pub use recommend::{
    PreferenceSnapshot, RandomSource, RatedMovie, Recommender, ThreadRngSource,
};
pub use types::{
    CastMember, Credits, Genre, Movie, MovieDetail, MoviePage, Video, VideoCollection,
};
