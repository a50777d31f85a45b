//! Collection endpoints (`/collection/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;
use crate::types::{Images, MovieSummary, Translations};

/// Details of a movie collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CollectionDetails {
    /// TMDB collection ID.
    pub id: u64,
    /// Collection name.
    #[serde(default)]
    pub name: String,
    /// Overview text.
    #[serde(default)]
    pub overview: String,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Movies in the collection.
    #[serde(default)]
    pub parts: Vec<MovieSummary>,
}

impl Client {
    /// Fetches the details of a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn collection_details(
        &self,
        collection_id: u64,
        options: Option<&Options>,
    ) -> Result<CollectionDetails> {
        let url = self.fmt_url(&format!("/collection/{collection_id}"), options);
        self.get(&url).await
    }

    /// Fetches the images of a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn collection_images(
        &self,
        collection_id: u64,
        options: Option<&Options>,
    ) -> Result<Images> {
        let url = self.fmt_url(&format!("/collection/{collection_id}/images"), options);
        self.get(&url).await
    }

    /// Fetches the translations of a collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn collection_translations(
        &self,
        collection_id: u64,
        options: Option<&Options>,
    ) -> Result<Translations> {
        let url = self.fmt_url(&format!("/collection/{collection_id}/translations"), options);
        self.get(&url).await
    }
}
