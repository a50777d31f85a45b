//! TV series endpoints (`/tv/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;
use crate::types::{
    AlternativeTitle, Changes, Credits, ExternalIds, Genre, Images, Keyword, Paginated,
    ProductionCompany, Translations, TvSummary, VideoResults,
};

/// A series creator credit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Creator {
    /// TMDB person ID.
    pub id: u64,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Person name.
    #[serde(default)]
    pub name: String,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: Option<u32>,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// A broadcasting network as embedded in series details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkSummary {
    /// TMDB network ID.
    pub id: u64,
    /// Network name.
    #[serde(default)]
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    #[serde(default)]
    pub origin_country: String,
}

/// A season as embedded in series details.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonSummary {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 for specials).
    #[serde(default)]
    pub season_number: u32,
    /// Season name.
    #[serde(default)]
    pub name: String,
    /// Overview text.
    #[serde(default)]
    pub overview: String,
    /// Air date (YYYY-MM-DD or null).
    pub air_date: Option<String>,
    /// Number of episodes.
    #[serde(default)]
    pub episode_count: u32,
    /// Poster image path.
    pub poster_path: Option<String>,
}

/// Primary details of a TV series.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct TvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    #[serde(default)]
    pub name: String,
    /// Original name.
    #[serde(default)]
    pub original_name: String,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: String,
    /// Overview text.
    #[serde(default)]
    pub overview: String,
    /// Series status (e.g. "Returning Series").
    #[serde(default)]
    pub status: String,
    /// Series type (e.g. "Scripted").
    #[serde(rename = "type", default)]
    pub series_type: String,
    /// Creators.
    #[serde(default)]
    pub created_by: Vec<Creator>,
    /// Episode runtimes in minutes.
    #[serde(default)]
    pub episode_run_time: Vec<u32>,
    /// First air date (YYYY-MM-DD or null).
    pub first_air_date: Option<String>,
    /// Last air date (YYYY-MM-DD or null).
    pub last_air_date: Option<String>,
    /// Last aired episode (nullable, shape varies).
    #[serde(default)]
    pub last_episode_to_air: serde_json::Value,
    /// Whether the series is still in production.
    #[serde(default)]
    pub in_production: bool,
    /// Spoken languages (ISO 639-1).
    #[serde(default)]
    pub languages: Vec<String>,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Broadcasting networks.
    #[serde(default)]
    pub networks: Vec<NetworkSummary>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Number of episodes.
    #[serde(default)]
    pub number_of_episodes: u32,
    /// Number of seasons.
    #[serde(default)]
    pub number_of_seasons: u32,
    /// Seasons.
    #[serde(default)]
    pub seasons: Vec<SeasonSummary>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
}

/// Alternative titles of a TV series.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct TvAlternativeTitles {
    /// Series ID.
    #[serde(default)]
    pub id: u64,
    /// Alternative titles.
    #[serde(default)]
    pub results: Vec<AlternativeTitle>,
}

/// A content rating of a TV series in one country.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentRating {
    /// Country (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: String,
    /// Rating (e.g. "TV-MA").
    #[serde(default)]
    pub rating: String,
}

/// Content ratings of a TV series, grouped by country.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentRatings {
    /// Series ID.
    #[serde(default)]
    pub id: u64,
    /// Per-country ratings.
    #[serde(default)]
    pub results: Vec<ContentRating>,
}

/// Keywords attached to a TV series.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct TvKeywords {
    /// Series ID.
    #[serde(default)]
    pub id: u64,
    /// Keywords.
    #[serde(default)]
    pub results: Vec<Keyword>,
}

/// An episode screened theatrically.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenedEpisode {
    /// TMDB episode ID.
    pub id: u64,
    /// Season number.
    #[serde(default)]
    pub season_number: u32,
    /// Episode number.
    #[serde(default)]
    pub episode_number: u32,
}

/// Episodes of a TV series that were screened theatrically.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScreenedTheatrically {
    /// Series ID.
    #[serde(default)]
    pub id: u64,
    /// Screened episodes.
    #[serde(default)]
    pub results: Vec<ScreenedEpisode>,
}

impl Client {
    /// Fetches the primary details of a TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_details(&self, tv_id: u64, options: Option<&Options>) -> Result<TvDetails> {
        let url = self.fmt_url(&format!("/tv/{tv_id}"), options);
        self.get(&url).await
    }

    /// Fetches the alternative titles of a TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_alternative_titles(
        &self,
        tv_id: u64,
        options: Option<&Options>,
    ) -> Result<TvAlternativeTitles> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/alternative_titles"), options);
        self.get(&url).await
    }

    /// Fetches the change history of a TV series.
    ///
    /// Supports `start_date`, `end_date`, and `page` options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_changes(&self, tv_id: u64, options: Option<&Options>) -> Result<Changes> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/changes"), options);
        self.get(&url).await
    }

    /// Fetches the content ratings of a TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_content_ratings(
        &self,
        tv_id: u64,
        options: Option<&Options>,
    ) -> Result<ContentRatings> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/content_ratings"), options);
        self.get(&url).await
    }

    /// Fetches the cast and crew of a TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_credits(&self, tv_id: u64, options: Option<&Options>) -> Result<Credits> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/credits"), options);
        self.get(&url).await
    }

    /// Fetches the external IDs of a TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_external_ids(
        &self,
        tv_id: u64,
        options: Option<&Options>,
    ) -> Result<ExternalIds> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/external_ids"), options);
        self.get(&url).await
    }

    /// Fetches the images of a TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_images(&self, tv_id: u64, options: Option<&Options>) -> Result<Images> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/images"), options);
        self.get(&url).await
    }

    /// Fetches the keywords of a TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_keywords(&self, tv_id: u64, options: Option<&Options>) -> Result<TvKeywords> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/keywords"), options);
        self.get(&url).await
    }

    /// Fetches recommendations for a TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_recommendations(
        &self,
        tv_id: u64,
        options: Option<&Options>,
    ) -> Result<Paginated<TvSummary>> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/recommendations"), options);
        self.get(&url).await
    }

    /// Fetches the episodes of a TV series that were screened theatrically.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_screened_theatrically(
        &self,
        tv_id: u64,
        options: Option<&Options>,
    ) -> Result<ScreenedTheatrically> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/screened_theatrically"), options);
        self.get(&url).await
    }

    /// Fetches TV series similar to a series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_similar(
        &self,
        tv_id: u64,
        options: Option<&Options>,
    ) -> Result<Paginated<TvSummary>> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/similar"), options);
        self.get(&url).await
    }

    /// Fetches the translations of a TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_translations(
        &self,
        tv_id: u64,
        options: Option<&Options>,
    ) -> Result<Translations> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/translations"), options);
        self.get(&url).await
    }

    /// Fetches the videos of a TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_videos(&self, tv_id: u64, options: Option<&Options>) -> Result<VideoResults> {
        let url = self.fmt_url(&format!("/tv/{tv_id}/videos"), options);
        self.get(&url).await
    }

    /// Fetches the most recently created TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn latest_tv(&self, options: Option<&Options>) -> Result<TvDetails> {
        let url = self.fmt_url("/tv/latest", options);
        self.get(&url).await
    }

    /// Fetches TV series airing today.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn airing_today_tv(&self, options: Option<&Options>) -> Result<Paginated<TvSummary>> {
        let url = self.fmt_url("/tv/airing_today", options);
        self.get(&url).await
    }

    /// Fetches TV series currently on the air.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn on_the_air_tv(&self, options: Option<&Options>) -> Result<Paginated<TvSummary>> {
        let url = self.fmt_url("/tv/on_the_air", options);
        self.get(&url).await
    }

    /// Fetches the current popular TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn popular_tv(&self, options: Option<&Options>) -> Result<Paginated<TvSummary>> {
        let url = self.fmt_url("/tv/popular", options);
        self.get(&url).await
    }

    /// Fetches the top rated TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn top_rated_tv(&self, options: Option<&Options>) -> Result<Paginated<TvSummary>> {
        let url = self.fmt_url("/tv/top_rated", options);
        self.get(&url).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_client(server: &MockServer) -> Client {
        Client::builder()
            .api_key("test-key")
            .base_url(server.uri())
            .build()
            .unwrap()
    }

    #[test]
    fn test_parse_tv_details_fixture() {
        // Arrange
        let json = include_str!("../../../fixtures/tmdb/tv_details_1399.json");

        // Act
        let details: TvDetails = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(details.id, 1399);
        assert_eq!(details.name, "Game of Thrones");
        assert_eq!(details.original_language, "en");
        assert!(details.number_of_seasons >= 8);
        assert_eq!(details.seasons[1].season_number, 1);
        assert_eq!(details.networks[0].name, "HBO");
    }

    #[tokio::test]
    async fn test_tv_details_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/tv_details_1399.json");
        Mock::given(method("GET"))
            .and(path("/tv/1399"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let details = client.tv_details(1399, None).await.unwrap();

        // Assert
        assert_eq!(details.id, 1399);
        assert_eq!(details.name, "Game of Thrones");
    }

    #[tokio::test]
    async fn test_tv_content_ratings_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body =
            r#"{"id":1399,"results":[{"iso_3166_1":"US","rating":"TV-MA"},{"iso_3166_1":"DE","rating":"16"}]}"#;
        Mock::given(method("GET"))
            .and(path("/tv/1399/content_ratings"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let ratings = client.tv_content_ratings(1399, None).await.unwrap();

        // Assert
        assert_eq!(ratings.results.len(), 2);
        assert_eq!(ratings.results[0].rating, "TV-MA");
    }

    #[tokio::test]
    async fn test_tv_keywords_use_results_key() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"id":1399,"results":[{"id":6091,"name":"war"},{"id":818,"name":"based on novel or book"}]}"#;
        Mock::given(method("GET"))
            .and(path("/tv/1399/keywords"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let keywords = client.tv_keywords(1399, None).await.unwrap();

        // Assert
        assert_eq!(keywords.results[0].name, "war");
    }

    #[tokio::test]
    async fn test_airing_today_tv_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"page":1,"results":[{"id":1399,"name":"Game of Thrones","original_name":"Game of Thrones","original_language":"en","origin_country":["US"],"genre_ids":[10765,18],"popularity":53.516,"vote_average":8.2,"vote_count":4682,"first_air_date":"2011-04-17"}],"total_pages":1,"total_results":1}"#;
        Mock::given(method("GET"))
            .and(path("/tv/airing_today"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let page = client.airing_today_tv(None).await.unwrap();

        // Assert
        assert_eq!(page.results[0].name, "Game of Thrones");
        assert_eq!(page.results[0].origin_country, vec![String::from("US")]);
    }
}
