//! Keyword endpoints (`/keyword/...`).

use anyhow::Result;

use crate::client::Client;
use crate::options::Options;
use crate::types::{Keyword, MovieSummary, Paginated};

impl Client {
    /// Fetches the details of a keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn keyword_details(
        &self,
        keyword_id: u64,
        options: Option<&Options>,
    ) -> Result<Keyword> {
        let url = self.fmt_url(&format!("/keyword/{keyword_id}"), options);
        self.get(&url).await
    }

    /// Fetches the movies tagged with a keyword.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn keyword_movies(
        &self,
        keyword_id: u64,
        options: Option<&Options>,
    ) -> Result<Paginated<MovieSummary>> {
        let url = self.fmt_url(&format!("/keyword/{keyword_id}/movies"), options);
        self.get(&url).await
    }
}
