//! TV episode endpoints (`/tv/{id}/season/{n}/episode/{m}/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;
use crate::types::{CastMember, Changes, CrewMember, ExternalIds, Image, Translations, VideoResults};

/// Details of a TV episode, as returned directly or embedded in a season.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpisodeDetails {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode name.
    #[serde(default)]
    pub name: String,
    /// Overview text.
    #[serde(default)]
    pub overview: String,
    /// Season number.
    #[serde(default)]
    pub season_number: u32,
    /// Episode number within the season.
    #[serde(default)]
    pub episode_number: u32,
    /// Air date (YYYY-MM-DD or null).
    pub air_date: Option<String>,
    /// Production code.
    #[serde(default)]
    pub production_code: String,
    /// Still image path.
    pub still_path: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Crew credits.
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    /// Guest star credits.
    #[serde(default)]
    pub guest_stars: Vec<CastMember>,
}

/// Cast, crew, and guest stars of a TV episode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpisodeCredits {
    /// Episode ID.
    #[serde(default)]
    pub id: u64,
    /// Cast credits.
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// Crew credits.
    #[serde(default)]
    pub crew: Vec<CrewMember>,
    /// Guest star credits.
    #[serde(default)]
    pub guest_stars: Vec<CastMember>,
}

/// Still images of a TV episode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EpisodeImages {
    /// Episode ID.
    #[serde(default)]
    pub id: u64,
    /// Still images.
    #[serde(default)]
    pub stills: Vec<Image>,
}

impl Client {
    /// Fetches the details of a TV episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_episode_details(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
        options: Option<&Options>,
    ) -> Result<EpisodeDetails> {
        let url = self.fmt_url(
            &format!("/tv/{tv_id}/season/{season_number}/episode/{episode_number}"),
            options,
        );
        self.get(&url).await
    }

    /// Fetches the change history of a TV episode by its episode ID.
    ///
    /// Supports `start_date`, `end_date`, and `page` options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_episode_changes(
        &self,
        episode_id: u64,
        options: Option<&Options>,
    ) -> Result<Changes> {
        let url = self.fmt_url(&format!("/tv/episode/{episode_id}/changes"), options);
        self.get(&url).await
    }

    /// Fetches the cast, crew, and guest stars of a TV episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_episode_credits(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
        options: Option<&Options>,
    ) -> Result<EpisodeCredits> {
        let url = self.fmt_url(
            &format!("/tv/{tv_id}/season/{season_number}/episode/{episode_number}/credits"),
            options,
        );
        self.get(&url).await
    }

    /// Fetches the external IDs of a TV episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_episode_external_ids(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
        options: Option<&Options>,
    ) -> Result<ExternalIds> {
        let url = self.fmt_url(
            &format!("/tv/{tv_id}/season/{season_number}/episode/{episode_number}/external_ids"),
            options,
        );
        self.get(&url).await
    }

    /// Fetches the still images of a TV episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_episode_images(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
        options: Option<&Options>,
    ) -> Result<EpisodeImages> {
        let url = self.fmt_url(
            &format!("/tv/{tv_id}/season/{season_number}/episode/{episode_number}/images"),
            options,
        );
        self.get(&url).await
    }

    /// Fetches the translations of a TV episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_episode_translations(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
        options: Option<&Options>,
    ) -> Result<Translations> {
        let url = self.fmt_url(
            &format!("/tv/{tv_id}/season/{season_number}/episode/{episode_number}/translations"),
            options,
        );
        self.get(&url).await
    }

    /// Fetches the videos of a TV episode.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_episode_videos(
        &self,
        tv_id: u64,
        season_number: u32,
        episode_number: u32,
        options: Option<&Options>,
    ) -> Result<VideoResults> {
        let url = self.fmt_url(
            &format!("/tv/{tv_id}/season/{season_number}/episode/{episode_number}/videos"),
            options,
        );
        self.get(&url).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_client(server: &MockServer) -> Client {
        Client::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_tv_episode_details_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"id":63056,"name":"Winter Is Coming","overview":"Jon Arryn, the Hand of the King, is dead.","season_number":1,"episode_number":1,"air_date":"2011-04-17","production_code":"101","still_path":"/wrGWeW4WKxnaeA8sxJb2T9O6ryo.jpg","vote_average":7.8,"vote_count":205,"crew":[{"id":44797,"credit_id":"5256c8a219c2956ff6046e77","name":"Tim Van Patten","department":"Directing","job":"Director"}],"guest_stars":[{"id":119783,"name":"Joseph Mawle","credit_id":"5256c8a219c2956ff6046f40","character":"Benjen Stark","order":61}]}"#;
        Mock::given(method("GET"))
            .and(path("/tv/1399/season/1/episode/1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let episode = client.tv_episode_details(1399, 1, 1, None).await.unwrap();

        // Assert
        assert_eq!(episode.name, "Winter Is Coming");
        assert_eq!(episode.episode_number, 1);
        assert_eq!(episode.crew[0].job, "Director");
        assert_eq!(episode.guest_stars[0].character, "Benjen Stark");
    }

    #[tokio::test]
    async fn test_tv_episode_changes_uses_episode_id_path() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"changes":[{"key":"overview","items":[{"id":"5c423aaf925141344cb32a9d","action":"updated","time":"2019-01-19 05:39:59 UTC","iso_639_1":"en"}]}]}"#;
        Mock::given(method("GET"))
            .and(path("/tv/episode/63056/changes"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let changes = client.tv_episode_changes(63056, None).await.unwrap();

        // Assert
        assert_eq!(changes.changes[0].key, "overview");
    }

    #[tokio::test]
    async fn test_tv_episode_images_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"id":63056,"stills":[{"aspect_ratio":1.777,"file_path":"/wrGWeW4WKxnaeA8sxJb2T9O6ryo.jpg","height":1080,"width":1920,"iso_639_1":null,"vote_average":5.3,"vote_count":5}]}"#;
        Mock::given(method("GET"))
            .and(path("/tv/1399/season/1/episode/1/images"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let images = client.tv_episode_images(1399, 1, 1, None).await.unwrap();

        // Assert
        assert_eq!(images.stills[0].width, 1920);
    }
}
