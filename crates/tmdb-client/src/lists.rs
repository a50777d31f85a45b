//! List endpoints (`/list/...`).
//!
//! The write operations (create, add, remove, clear) require a user
//! session; the session ID is supplied through the options mapping as
//! `session_id`.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::client::Client;
use crate::options::Options;
use crate::types::MovieSummary;

/// Details of a user list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDetails {
    /// TMDB list ID (a string for v3 lists).
    #[serde(default)]
    pub id: String,
    /// List name.
    #[serde(default)]
    pub name: String,
    /// List description.
    #[serde(default)]
    pub description: String,
    /// Username of the list creator.
    #[serde(default)]
    pub created_by: String,
    /// List language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: String,
    /// Number of items in the list.
    #[serde(default)]
    pub item_count: u32,
    /// Number of users who favorited the list.
    #[serde(default)]
    pub favorite_count: u32,
    /// Items in the list.
    #[serde(default)]
    pub items: Vec<MovieSummary>,
    /// Poster image path.
    pub poster_path: Option<String>,
}

/// Whether a list contains a given movie.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemStatus {
    /// List ID.
    #[serde(default)]
    pub id: String,
    /// Whether the movie is in the list.
    #[serde(default)]
    pub item_present: bool,
}

/// Request body for creating a list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateListBody {
    /// List name.
    pub name: String,
    /// List description.
    pub description: String,
    /// List language (ISO 639-1).
    pub language: String,
}

/// Response to creating a list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateListResponse {
    /// TMDB-specific status code.
    #[serde(default)]
    pub status_code: u32,
    /// Human-readable status message.
    #[serde(default)]
    pub status_message: String,
    /// Success flag.
    #[serde(default)]
    pub success: bool,
    /// ID of the created list.
    #[serde(default)]
    pub list_id: u64,
}

/// Generic status response of list mutations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListStatus {
    /// TMDB-specific status code.
    #[serde(default)]
    pub status_code: u32,
    /// Human-readable status message.
    #[serde(default)]
    pub status_message: String,
}

/// Request body naming a media item of a list mutation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListMediaBody {
    /// TMDB movie ID.
    pub media_id: u64,
}

impl Client {
    /// Fetches the details of a list.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn list_details(
        &self,
        list_id: &str,
        options: Option<&Options>,
    ) -> Result<ListDetails> {
        let url = self.fmt_url(&format!("/list/{list_id}"), options);
        self.get(&url).await
    }

    /// Checks whether a list contains a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn list_item_status(
        &self,
        list_id: &str,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<ItemStatus> {
        let url = format!(
            "{}&movie_id={movie_id}",
            self.fmt_url(&format!("/list/{list_id}/item_status"), options),
        );
        self.get(&url).await
    }

    /// Creates a new list. Requires a `session_id` option.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn create_list(
        &self,
        body: &CreateListBody,
        options: Option<&Options>,
    ) -> Result<CreateListResponse> {
        let url = self.fmt_url("/list", options);
        self.post(&url, body).await
    }

    /// Adds a movie to a list. Requires a `session_id` option.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn list_add_item(
        &self,
        list_id: &str,
        body: &ListMediaBody,
        options: Option<&Options>,
    ) -> Result<ListStatus> {
        let url = self.fmt_url(&format!("/list/{list_id}/add_item"), options);
        self.post(&url, body).await
    }

    /// Removes a movie from a list. Requires a `session_id` option.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn list_remove_item(
        &self,
        list_id: &str,
        body: &ListMediaBody,
        options: Option<&Options>,
    ) -> Result<ListStatus> {
        let url = self.fmt_url(&format!("/list/{list_id}/remove_item"), options);
        self.post(&url, body).await
    }

    /// Clears all items from a list. Requires a `session_id` option and an
    /// explicit confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn list_clear(
        &self,
        list_id: &str,
        confirm: bool,
        options: Option<&Options>,
    ) -> Result<ListStatus> {
        let url = format!(
            "{}&confirm={confirm}",
            self.fmt_url(&format!("/list/{list_id}/clear"), options),
        );
        self.post(&url, &serde_json::json!({})).await
    }
}
