//! Configuration endpoints (`/configuration/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;

/// Image hosting configuration of the API.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct ImageConfiguration {
    /// Plain image base URL.
    #[serde(default)]
    pub base_url: String,
    /// HTTPS image base URL.
    #[serde(default)]
    pub secure_base_url: String,
    /// Available backdrop sizes.
    #[serde(default)]
    pub backdrop_sizes: Vec<String>,
    /// Available logo sizes.
    #[serde(default)]
    pub logo_sizes: Vec<String>,
    /// Available poster sizes.
    #[serde(default)]
    pub poster_sizes: Vec<String>,
    /// Available profile sizes.
    #[serde(default)]
    pub profile_sizes: Vec<String>,
    /// Available still sizes.
    #[serde(default)]
    pub still_sizes: Vec<String>,
}

/// System-wide API configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct ApiConfiguration {
    /// Image hosting configuration.
    #[serde(default)]
    pub images: ImageConfiguration,
    /// Field keys tracked by the change endpoints.
    #[serde(default)]
    pub change_keys: Vec<String>,
}

/// A country used throughout the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Country {
    /// Country (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: String,
    /// Country name in English.
    #[serde(default)]
    pub english_name: String,
}

/// Jobs belonging to one department.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartmentJobs {
    /// Department name.
    #[serde(default)]
    pub department: String,
    /// Jobs in the department.
    #[serde(default)]
    pub jobs: Vec<String>,
}

/// A language used throughout the API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Language {
    /// Language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: String,
    /// Language name in English.
    #[serde(default)]
    pub english_name: String,
    /// Language name in that language.
    #[serde(default)]
    pub name: String,
}

/// Time zones of one country.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryTimezones {
    /// Country (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: String,
    /// Time zone names.
    #[serde(default)]
    pub zones: Vec<String>,
}

impl Client {
    /// Fetches the system-wide API configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn api_configuration(&self, options: Option<&Options>) -> Result<ApiConfiguration> {
        let url = self.fmt_url("/configuration", options);
        self.get(&url).await
    }

    /// Fetches the countries used throughout the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn countries(&self, options: Option<&Options>) -> Result<Vec<Country>> {
        let url = self.fmt_url("/configuration/countries", options);
        self.get(&url).await
    }

    /// Fetches the jobs and departments used throughout the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn jobs(&self, options: Option<&Options>) -> Result<Vec<DepartmentJobs>> {
        let url = self.fmt_url("/configuration/jobs", options);
        self.get(&url).await
    }

    /// Fetches the languages used throughout the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn languages(&self, options: Option<&Options>) -> Result<Vec<Language>> {
        let url = self.fmt_url("/configuration/languages", options);
        self.get(&url).await
    }

    /// Fetches the officially supported translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn primary_translations(&self, options: Option<&Options>) -> Result<Vec<String>> {
        let url = self.fmt_url("/configuration/primary_translations", options);
        self.get(&url).await
    }

    /// Fetches the time zones used throughout the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn timezones(&self, options: Option<&Options>) -> Result<Vec<CountryTimezones>> {
        let url = self.fmt_url("/configuration/timezones", options);
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

    #[test]
    fn test_parse_api_configuration_fixture() {
        // Arrange
        let json = include_str!("../../../fixtures/tmdb/configuration.json");

        // Act
        let config: ApiConfiguration = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(config.images.secure_base_url, "https://image.tmdb.org/t/p/");
        assert!(config.images.poster_sizes.contains(&String::from("w500")));
        assert!(config.change_keys.contains(&String::from("overview")));
    }

    #[tokio::test]
    async fn test_api_configuration_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = include_str!("../../../fixtures/tmdb/configuration.json");
        Mock::given(method("GET"))
            .and(path("/configuration"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let config = client.api_configuration(None).await.unwrap();

        // Assert
        assert_eq!(config.images.base_url, "http://image.tmdb.org/t/p/");
    }

    #[tokio::test]
    async fn test_languages_is_a_bare_array() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"[{"iso_639_1":"en","english_name":"English","name":"English"},{"iso_639_1":"pt","english_name":"Portuguese","name":"Português"}]"#;
        Mock::given(method("GET"))
            .and(path("/configuration/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let languages = client.languages(None).await.unwrap();

        // Assert
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[1].name, "Português");
    }

    #[tokio::test]
    async fn test_primary_translations_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"["en-US","pt-BR","ja-JP"]"#;
        Mock::given(method("GET"))
            .and(path("/configuration/primary_translations"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let translations = client.primary_translations(None).await.unwrap();

        // Assert
        assert_eq!(translations, vec!["en-US", "pt-BR", "ja-JP"]);
    }
}
