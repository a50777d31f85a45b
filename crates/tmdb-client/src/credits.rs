//! Credit endpoints (`/credit/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;

/// The person side of a credit record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditPerson {
    /// TMDB person ID.
    #[serde(default)]
    pub id: u64,
    /// Person name.
    #[serde(default)]
    pub name: String,
}

/// Details of a single credit record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreditDetails {
    /// Credit ID (a hex string, not numeric).
    #[serde(default)]
    pub id: String,
    /// Credit kind ("cast" or "crew").
    #[serde(default)]
    pub credit_type: String,
    /// Department (crew credits).
    #[serde(default)]
    pub department: String,
    /// Job (crew credits).
    #[serde(default)]
    pub job: String,
    /// Media kind ("movie" or "tv").
    #[serde(default)]
    pub media_type: String,
    /// The credited media (shape depends on `media_type`).
    #[serde(default)]
    pub media: serde_json::Value,
    /// The credited person.
    #[serde(default)]
    pub person: CreditPerson,
}

impl Client {
    /// Fetches the details of a credit record by its credit ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn credit_details(
        &self,
        credit_id: &str,
        options: Option<&Options>,
    ) -> Result<CreditDetails> {
        let url = self.fmt_url(&format!("/credit/{credit_id}"), options);
        self.get(&url).await
    }
}
