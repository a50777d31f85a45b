//! Genre endpoints (`/genre/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;
use crate::types::Genre;

/// The official genre list for one media kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenreList {
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
}

impl Client {
    /// Fetches the official list of movie genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_genres(&self, options: Option<&Options>) -> Result<GenreList> {
        let url = self.fmt_url("/genre/movie/list", options);
        self.get(&url).await
    }

    /// Fetches the official list of TV genres.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn tv_genres(&self, options: Option<&Options>) -> Result<GenreList> {
        let url = self.fmt_url("/genre/tv/list", options);
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

    #[tokio::test]
    async fn test_movie_genres_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"genres":[{"id":28,"name":"Action"},{"id":18,"name":"Drama"}]}"#;
        Mock::given(method("GET"))
            .and(path("/genre/movie/list"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let list = client.movie_genres(None).await.unwrap();

        // Assert
        assert_eq!(list.genres.len(), 2);
        assert_eq!(list.genres[1].name, "Drama");
    }

    #[tokio::test]
    async fn test_tv_genres_with_language_option() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"genres":[{"id":18,"name":"Drama"}]}"#;
        Mock::given(method("GET"))
            .and(path("/genre/tv/list"))
            .and(query_param("language", "en-US"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);
        let mut options = Options::new();
        options.insert(String::from("language"), String::from("en-US"));

        // Act
        let list = client.tv_genres(Some(&options)).await.unwrap();

        // Assert
        assert_eq!(list.genres[0].id, 18);
    }
}
