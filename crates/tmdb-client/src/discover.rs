//! Discover endpoints (`/discover/...`).

use anyhow::Result;

use crate::client::Client;
use crate::options::Options;
use crate::types::{MovieSummary, Paginated, TvSummary};

impl Client {
    /// Discovers movies by filter and sort options (e.g. `sort_by`,
    /// `with_genres`, `primary_release_year`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn discover_movies(
        &self,
        options: Option<&Options>,
    ) -> Result<Paginated<MovieSummary>> {
        let url = self.fmt_url("/discover/movie", options);
        self.get(&url).await
    }

    /// Discovers TV series by filter and sort options (e.g. `sort_by`,
    /// `with_networks`, `first_air_date_year`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn discover_tv(&self, options: Option<&Options>) -> Result<Paginated<TvSummary>> {
        let url = self.fmt_url("/discover/tv", options);
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
    async fn test_discover_movies_passes_filter_options() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"page":1,"results":[{"id":490132,"title":"Green Book","original_title":"Green Book","original_language":"en","release_date":"2018-11-16","genre_ids":[18,35],"popularity":40.138,"vote_average":8.3,"vote_count":1384,"adult":false,"video":false}],"total_pages":1,"total_results":1}"#;
        Mock::given(method("GET"))
            .and(path("/discover/movie"))
            .and(query_param("sort_by", "popularity.desc"))
            .and(query_param("primary_release_year", "2018"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);
        let mut options = Options::new();
        options.insert(String::from("sort_by"), String::from("popularity.desc"));
        options.insert(String::from("primary_release_year"), String::from("2018"));

        // Act
        let page = client.discover_movies(Some(&options)).await.unwrap();

        // Assert
        assert_eq!(page.results[0].title, "Green Book");
    }

    #[tokio::test]
    async fn test_discover_tv_via_http() {
        // Arrange
        let mock_server = MockServer::start().await;
        let json_body = r#"{"page":1,"results":[{"id":1396,"name":"Breaking Bad","original_name":"Breaking Bad","original_language":"en","origin_country":["US"],"first_air_date":"2008-01-20","genre_ids":[18],"popularity":168.314,"vote_average":8.6,"vote_count":3317}],"total_pages":1,"total_results":1}"#;
        Mock::given(method("GET"))
            .and(path("/discover/tv"))
            .respond_with(ResponseTemplate::new(200).set_body_string(json_body))
            .mount(&mock_server)
            .await;
        let client = test_client(&mock_server);

        // Act
        let page = client.discover_tv(None).await.unwrap();

        // Assert
        assert_eq!(page.results[0].name, "Breaking Bad");
    }
}
