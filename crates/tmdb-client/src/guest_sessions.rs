//! Guest session endpoints (`/authentication/guest_session/new`,
//! `/guest_session/{id}/rated/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;
use crate::types::{MovieSummary, Paginated, TvSummary};

/// A newly created guest session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuestSession {
    /// Success flag.
    #[serde(default)]
    pub success: bool,
    /// Guest session ID.
    #[serde(default)]
    pub guest_session_id: String,
    /// Session expiry timestamp.
    #[serde(default)]
    pub expires_at: String,
}

/// A movie rated by a guest session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatedMovie {
    /// Rating given (0.5 - 10.0).
    #[serde(default)]
    pub rating: f64,
    /// The rated movie.
    #[serde(flatten)]
    pub movie: MovieSummary,
}

/// A TV series rated by a guest session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatedTv {
    /// Rating given (0.5 - 10.0).
    #[serde(default)]
    pub rating: f64,
    /// The rated series.
    #[serde(flatten)]
    pub tv: TvSummary,
}

/// A TV episode rated by a guest session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RatedTvEpisode {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode name.
    #[serde(default)]
    pub name: String,
    /// Season number.
    #[serde(default)]
    pub season_number: u32,
    /// Episode number within the season.
    #[serde(default)]
    pub episode_number: u32,
    /// TMDB series ID the episode belongs to.
    #[serde(default)]
    pub show_id: u64,
    /// Air date (YYYY-MM-DD or null).
    pub air_date: Option<String>,
    /// Still image path.
    pub still_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Rating given (0.5 - 10.0).
    #[serde(default)]
    pub rating: f64,
}

impl Client {
    /// Creates a new guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn create_guest_session(&self, options: Option<&Options>) -> Result<GuestSession> {
        let url = self.fmt_url("/authentication/guest_session/new", options);
        self.get(&url).await
    }

    /// Fetches the movies rated by a guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn guest_rated_movies(
        &self,
        session_id: &str,
        options: Option<&Options>,
    ) -> Result<Paginated<RatedMovie>> {
        let url = self.fmt_url(&format!("/guest_session/{session_id}/rated/movies"), options);
        self.get(&url).await
    }

    /// Fetches the TV series rated by a guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn guest_rated_tv(
        &self,
        session_id: &str,
        options: Option<&Options>,
    ) -> Result<Paginated<RatedTv>> {
        let url = self.fmt_url(&format!("/guest_session/{session_id}/rated/tv"), options);
        self.get(&url).await
    }

    /// Fetches the TV episodes rated by a guest session.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn guest_rated_tv_episodes(
        &self,
        session_id: &str,
        options: Option<&Options>,
    ) -> Result<Paginated<RatedTvEpisode>> {
        let url = self.fmt_url(
            &format!("/guest_session/{session_id}/rated/tv/episodes"),
            options,
        );
        self.get(&url).await
    }
}
