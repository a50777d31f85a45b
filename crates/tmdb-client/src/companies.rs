//! Company endpoints (`/company/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;
use crate::types::{AlternativeNames, Logos};

/// Details of a production company.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyDetails {
    /// TMDB company ID.
    pub id: u64,
    /// Company name.
    #[serde(default)]
    pub name: String,
    /// Company description.
    #[serde(default)]
    pub description: String,
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
    /// Parent company (nullable, shape varies).
    #[serde(default)]
    pub parent_company: serde_json::Value,
}

impl Client {
    /// Fetches the details of a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn company_details(
        &self,
        company_id: u64,
        options: Option<&Options>,
    ) -> Result<CompanyDetails> {
        let url = self.fmt_url(&format!("/company/{company_id}"), options);
        self.get(&url).await
    }

    /// Fetches the alternative names of a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn company_alternative_names(
        &self,
        company_id: u64,
        options: Option<&Options>,
    ) -> Result<AlternativeNames> {
        let url = self.fmt_url(&format!("/company/{company_id}/alternative_names"), options);
        self.get(&url).await
    }

    /// Fetches the logos of a company.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn company_images(
        &self,
        company_id: u64,
        options: Option<&Options>,
    ) -> Result<Logos> {
        let url = self.fmt_url(&format!("/company/{company_id}/images"), options);
        self.get(&url).await
    }
}
