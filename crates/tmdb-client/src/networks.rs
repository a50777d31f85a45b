//! Network endpoints (`/network/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;
use crate::types::{AlternativeNames, Logos};

/// Details of a broadcasting network.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkDetails {
    /// TMDB network ID.
    pub id: u64,
    /// Network name.
    #[serde(default)]
    pub name: String,
    /// Headquarters location.
    #[serde(default)]
    pub headquarters: String,
    /// Homepage URL.
    #[serde(default)]
    pub homepage: String,
    /// Country of origin (ISO 3166-1).
    #[serde(default)]
    pub origin_country: String,
    /// Logo image path.
    pub logo_path: Option<String>,
}

impl Client {
    /// Fetches the details of a network.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn network_details(
        &self,
        network_id: u64,
        options: Option<&Options>,
    ) -> Result<NetworkDetails> {
        let url = self.fmt_url(&format!("/network/{network_id}"), options);
        self.get(&url).await
    }

    /// Fetches the alternative names of a network.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn network_alternative_names(
        &self,
        network_id: u64,
        options: Option<&Options>,
    ) -> Result<AlternativeNames> {
        let url = self.fmt_url(&format!("/network/{network_id}/alternative_names"), options);
        self.get(&url).await
    }

    /// Fetches the logos of a network.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn network_images(
        &self,
        network_id: u64,
        options: Option<&Options>,
    ) -> Result<Logos> {
        let url = self.fmt_url(&format!("/network/{network_id}/images"), options);
        self.get(&url).await
    }
}
