//! TV season endpoints (`/tv/{id}/season/{n}/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;
use crate::tv_episodes::EpisodeDetails;
use crate::types::{Changes, Credits, ExternalIds, Image, VideoResults};

/// Details of a TV season, including its episode list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonDetails {
    /// TMDB season ID.
    pub id: u64,
    /// Internal object ID.
    #[serde(rename = "_id", default)]
    pub object_id: String,
    /// Season name.
    #[serde(default)]
    pub name: String,
    /// Overview text.
    #[serde(default)]
    pub overview: String,
    /// Season number (0 for specials).
    #[serde(default)]
    pub season_number: u32,
    /// Air date (YYYY-MM-DD or null).
    pub air_date: Option<String>,
    /// Episodes of the season.
    #[serde(default)]
    pub episodes: Vec<EpisodeDetails>,
    /// Poster image path.
    pub poster_path: Option<String>,
}

/// Poster images of a TV season.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonImages {
    /// Season ID.
    #[serde(default)]
    pub id: u64,
    /// Poster images.
    #[serde(default)]
    pub posters: Vec<Image>,
}

impl Client {
    /// Fetches the details of a TV season, including its episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_season_details(
        &self,
        tv_id: u64,
        season_number: u32,
        options: Option<&Options>,
    ) -> Result<SeasonDetails> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/season/{season_number}"), options);
        self.get(&url).await
    }

    /// Fetches the change history of a TV season by its season ID.
    ///
    /// Supports `start_date`, `end_date`, and `page` options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_season_changes(
        &self,
        season_id: u64,
        options: Option<&Options>,
    ) -> Result<Changes> {
        let url = self.fmt_url(&format!("/tv/season/{season_id}/changes"), options);
        self.get(&url).await
    }

    /// Fetches the cast and crew of a TV season.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_season_credits(
        &self,
        tv_id: u64,
        season_number: u32,
        options: Option<&Options>,
    ) -> Result<Credits> {
        let url = self.fmt_url(
            &format!("/tv/{tv_id}/season/{season_number}/credits"),
            options,
        );
        self.get(&url).await
    }

    /// Fetches the external IDs of a TV season.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_season_external_ids(
        &self,
        tv_id: u64,
        season_number: u32,
        options: Option<&Options>,
    ) -> Result<ExternalIds> {
        let url = self.fmt_url(
            &format!("/tv/{tv_id}/season/{season_number}/external_ids"),
            options,
        );
        self.get(&url).await
    }

    /// Fetches the poster images of a TV season.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_season_images(
        &self,
        tv_id: u64,
        season_number: u32,
        options: Option<&Options>,
    ) -> Result<SeasonImages> {
        let url = self.fmt_url(
            &format!("/tv/{tv_id}/season/{season_number}/images"),
            options,
        );
        self.get(&url).await
    }

    /// Fetches the videos of a TV season.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_season_videos(
        &self,
        tv_id: u64,
        season_number: u32,
        options: Option<&Options>,
    ) -> Result<VideoResults> {
        let url = self.fmt_url(
            &format!("/tv/{tv_id}/season/{season_number}/videos"),
            options,
        );
        self.get(&url).await
    }
}
