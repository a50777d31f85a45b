//! Client library for the TMDB v3 API.
//!
//! Build a [`Client`] once with its builder, then call the per-resource
//! methods; each one formats an authenticated URL, issues the request,
//! and decodes the JSON response into a typed value. Remote errors are
//! surfaced as [`ErrorResponse`] inside `anyhow::Error`.

/// Client, builder, and the request executor.
pub mod client;
/// Query-option formatting.
pub mod options;
/// Shared response types and the remote error envelope.
pub mod types;

/// Collection endpoints.
pub mod collections;
/// Company endpoints.
pub mod companies;
/// Configuration endpoints.
pub mod configuration;
/// Credit endpoints.
pub mod credits;
/// Discover endpoints.
pub mod discover;
/// Genre endpoints.
pub mod genres;
/// Guest session endpoints.
pub mod guest_sessions;
/// Keyword endpoints.
pub mod keywords;
/// List endpoints.
pub mod lists;
/// Movie endpoints.
pub mod movies;
/// Person endpoints.
pub mod people;
/// Search endpoints.
pub mod search;
/// TV series endpoints.
pub mod tv;
/// TV episode endpoints.
pub mod tv_episodes;
/// TV season endpoints.
pub mod tv_seasons;

pub use client::{Client, ClientBuilder};
pub use options::Options;
pub use types::ErrorResponse;
