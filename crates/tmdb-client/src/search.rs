//! Search endpoints (`/search/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::{Options, escape};
use crate::people::PersonSummary;
use crate::types::{Keyword, MovieSummary, Paginated, TvSummary};

/// A company as it appears in search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanySummary {
    /// TMDB company ID.
    pub id: u64,
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country of origin (ISO 3166-1).
    #[serde(default)]
    pub origin_country: String,
}

/// A collection as it appears in search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionSummary {
    /// TMDB collection ID.
    pub id: u64,
    /// Collection name.
    #[serde(default)]
    pub name: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// A multi-search result: a movie, TV series, or person.
///
/// `media_type` selects which of the optional fields are populated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MultiResult {
    /// Media kind ("movie", "tv", or "person").
    #[serde(default)]
    pub media_type: String,
    /// TMDB resource ID.
    #[serde(default)]
    pub id: u64,
    /// Movie title.
    pub title: Option<String>,
    /// Series or person name.
    pub name: Option<String>,
    /// Overview text (movie and TV results).
    pub overview: Option<String>,
    /// Movie release date.
    pub release_date: Option<String>,
    /// Series first air date.
    pub first_air_date: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Profile image path (person results).
    pub profile_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average (movie and TV results).
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count (movie and TV results).
    #[serde(default)]
    pub vote_count: u32,
}

impl Client {
    /// Builds a search URL with the escaped `query` parameter appended.
    fn fmt_search_url(&self, path: &str, query: &str, options: Option<&Options>) -> String {
        format!("{}&query={}", self.fmt_url(path, options), escape(query))
    }

    /// Searches for companies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn search_companies(
        &self,
        query: &str,
        options: Option<&Options>,
    ) -> Result<Paginated<CompanySummary>> {
        let url = self.fmt_search_url("/search/company", query, options);
        self.get(&url).await
    }

    /// Searches for collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn search_collections(
        &self,
        query: &str,
        options: Option<&Options>,
    ) -> Result<Paginated<CollectionSummary>> {
        let url = self.fmt_search_url("/search/collection", query, options);
        self.get(&url).await
    }

    /// Searches for keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn search_keywords(
        &self,
        query: &str,
        options: Option<&Options>,
    ) -> Result<Paginated<Keyword>> {
        let url = self.fmt_search_url("/search/keyword", query, options);
        self.get(&url).await
    }

    /// Searches for movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn search_movies(
        &self,
        query: &str,
        options: Option<&Options>,
    ) -> Result<Paginated<MovieSummary>> {
        let url = self.fmt_search_url("/search/movie", query, options);
        self.get(&url).await
    }

    /// Searches movies, TV series, and people with a single query.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn search_multi(
        &self,
        query: &str,
        options: Option<&Options>,
    ) -> Result<Paginated<MultiResult>> {
        let url = self.fmt_search_url("/search/multi", query, options);
        self.get(&url).await
    }

    /// Searches for people.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn search_people(
        &self,
        query: &str,
        options: Option<&Options>,
    ) -> Result<Paginated<PersonSummary>> {
        let url = self.fmt_search_url("/search/person", query, options);
        self.get(&url).await
    }

    /// Searches for TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn search_tv(
        &self,
        query: &str,
        options: Option<&Options>,
    ) -> Result<Paginated<TvSummary>> {
        let url = self.fmt_search_url("/search/tv", query, options);
        self.get(&url).await
    }
}
