//! Shared TMDB response types.

use std::fmt;

use serde::Deserialize;

/// Error envelope returned by the TMDB API on non-success statuses.
///
/// Travels inside `anyhow::Error` and can be recovered with
/// `err.downcast_ref::<ErrorResponse>()`; its `Display` output is the
/// remote status message verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable message from the remote API.
    #[serde(default)]
    pub status_message: String,
    /// Success flag (always false for errors).
    #[serde(default)]
    pub success: bool,
    /// TMDB-specific status code (not the HTTP status).
    #[serde(default)]
    pub status_code: u32,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.status_message)
    }
}

impl std::error::Error for ErrorResponse {}

/// A page of results as returned by list-shaped endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Results on this page.
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

// Manual impl: `T` itself does not need a default value for an empty page.
impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            page: 0,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

/// A movie as it appears in search, discover, and list results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieSummary {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    #[serde(default)]
    pub title: String,
    /// Original title.
    #[serde(default)]
    pub original_title: String,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: String,
    /// Overview text.
    #[serde(default)]
    pub overview: String,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
    /// Video flag.
    #[serde(default)]
    pub video: bool,
}

/// A TV series as it appears in search, discover, and list results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TvSummary {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    #[serde(default)]
    pub name: String,
    /// Original name.
    #[serde(default)]
    pub original_name: String,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    #[serde(default)]
    pub origin_country: Vec<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: String,
    /// First air date (YYYY-MM-DD or null).
    pub first_air_date: Option<String>,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
}

/// A genre.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Genre {
    /// TMDB genre ID.
    pub id: u64,
    /// Genre name.
    pub name: String,
}

/// An image (poster, backdrop, still, or profile).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Image {
    /// Width / height ratio.
    #[serde(default)]
    pub aspect_ratio: f64,
    /// Image path, relative to the configured image base URL.
    #[serde(default)]
    pub file_path: String,
    /// Image height in pixels.
    #[serde(default)]
    pub height: u32,
    /// Image width in pixels.
    #[serde(default)]
    pub width: u32,
    /// Language of any text in the image (ISO 639-1, nullable).
    pub iso_639_1: Option<String>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
}

/// A company or network logo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Logo {
    /// Logo credit ID.
    #[serde(default)]
    pub id: String,
    /// Width / height ratio.
    #[serde(default)]
    pub aspect_ratio: f64,
    /// Image path.
    #[serde(default)]
    pub file_path: String,
    /// File type (e.g. ".svg").
    #[serde(default)]
    pub file_type: String,
    /// Image height in pixels.
    #[serde(default)]
    pub height: u32,
    /// Image width in pixels.
    #[serde(default)]
    pub width: u32,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
}

/// Logos of a company or network.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Logos {
    /// Owner company/network ID.
    #[serde(default)]
    pub id: u64,
    /// Logo images.
    #[serde(default)]
    pub logos: Vec<Logo>,
}

/// Poster and backdrop images of a movie, TV series, or collection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Images {
    /// Owner resource ID.
    #[serde(default)]
    pub id: u64,
    /// Backdrop images.
    #[serde(default)]
    pub backdrops: Vec<Image>,
    /// Poster images.
    #[serde(default)]
    pub posters: Vec<Image>,
}

/// A video (trailer, teaser, clip, ...).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Video {
    /// Video credit ID.
    #[serde(default)]
    pub id: String,
    /// Language (ISO 639-1).
    pub iso_639_1: Option<String>,
    /// Country (ISO 3166-1).
    pub iso_3166_1: Option<String>,
    /// Site-specific video key.
    #[serde(default)]
    pub key: String,
    /// Video title.
    #[serde(default)]
    pub name: String,
    /// Hosting site (e.g. "YouTube").
    #[serde(default)]
    pub site: String,
    /// Vertical resolution.
    #[serde(default)]
    pub size: u32,
    /// Video type (e.g. "Trailer").
    #[serde(rename = "type", default)]
    pub video_type: String,
}

/// Videos attached to a resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VideoResults {
    /// Owner resource ID.
    #[serde(default)]
    pub id: u64,
    /// Videos.
    #[serde(default)]
    pub results: Vec<Video>,
}

/// A cast credit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CastMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    #[serde(default)]
    pub name: String,
    /// Character played.
    #[serde(default)]
    pub character: String,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Billing order.
    #[serde(default)]
    pub order: u32,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: Option<u32>,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// A crew credit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CrewMember {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    #[serde(default)]
    pub name: String,
    /// Department (e.g. "Directing").
    #[serde(default)]
    pub department: String,
    /// Job (e.g. "Director").
    #[serde(default)]
    pub job: String,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    pub gender: Option<u32>,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// Cast and crew of a resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credits {
    /// Owner resource ID.
    #[serde(default)]
    pub id: u64,
    /// Cast credits.
    #[serde(default)]
    pub cast: Vec<CastMember>,
    /// Crew credits.
    #[serde(default)]
    pub crew: Vec<CrewMember>,
}

/// External service IDs of a resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExternalIds {
    /// Owner resource ID.
    #[serde(default)]
    pub id: u64,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// TheTVDB ID.
    pub tvdb_id: Option<u64>,
    /// Freebase MID (legacy).
    pub freebase_mid: Option<String>,
    /// Freebase ID (legacy).
    pub freebase_id: Option<String>,
    /// TVRage ID (legacy).
    pub tvrage_id: Option<u64>,
    /// Facebook ID.
    pub facebook_id: Option<String>,
    /// Instagram ID.
    pub instagram_id: Option<String>,
    /// Twitter ID.
    pub twitter_id: Option<String>,
}

/// One recorded change of a single field value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeItem {
    /// Change ID.
    #[serde(default)]
    pub id: String,
    /// Action performed (e.g. "updated").
    #[serde(default)]
    pub action: String,
    /// Change timestamp.
    #[serde(default)]
    pub time: String,
    /// Language of the changed value (ISO 639-1).
    pub iso_639_1: Option<String>,
    /// New value (shape depends on the changed key).
    #[serde(default)]
    pub value: serde_json::Value,
    /// Previous value.
    #[serde(default)]
    pub original_value: serde_json::Value,
}

/// Changes recorded for a single field key.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeGroup {
    /// Changed field key (e.g. "overview").
    #[serde(default)]
    pub key: String,
    /// Individual changes.
    #[serde(default)]
    pub items: Vec<ChangeItem>,
}

/// Change history of a resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Changes {
    /// Change groups, one per changed field key.
    #[serde(default)]
    pub changes: Vec<ChangeGroup>,
}

/// An alternative title of a movie or TV series.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlternativeTitle {
    /// Country the title is used in (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: String,
    /// The alternative title.
    #[serde(default)]
    pub title: String,
    /// Title type (e.g. "working title"), often empty.
    #[serde(rename = "type", default)]
    pub title_type: String,
}

/// An alternative name of a company or network.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlternativeName {
    /// The alternative name.
    #[serde(default)]
    pub name: String,
    /// Name type, often empty.
    #[serde(rename = "type", default)]
    pub name_type: String,
}

/// Alternative names of a company or network.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlternativeNames {
    /// Owner company/network ID.
    #[serde(default)]
    pub id: u64,
    /// Alternative names.
    #[serde(default)]
    pub results: Vec<AlternativeName>,
}

/// A translation of a resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Translation {
    /// Country (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: String,
    /// Language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: String,
    /// Language name in that language.
    #[serde(default)]
    pub name: String,
    /// Language name in English.
    #[serde(default)]
    pub english_name: String,
    /// Translated fields (shape depends on the resource kind).
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Translations of a resource.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Translations {
    /// Owner resource ID.
    #[serde(default)]
    pub id: u64,
    /// Translations.
    #[serde(default)]
    pub translations: Vec<Translation>,
}

/// A keyword.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Keyword {
    /// TMDB keyword ID.
    pub id: u64,
    /// Keyword text.
    #[serde(default)]
    pub name: String,
}

/// A production company attached to a movie or TV series.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductionCompany {
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

/// A production country.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductionCountry {
    /// Country (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: String,
    /// Country name.
    #[serde(default)]
    pub name: String,
}

/// A spoken language.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpokenLanguage {
    /// Language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: String,
    /// Language name in that language.
    #[serde(default)]
    pub name: String,
}

/// Release-date window of a now-playing / upcoming page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dates {
    /// Latest release date in the window.
    #[serde(default)]
    pub maximum: String,
    /// Earliest release date in the window.
    #[serde(default)]
    pub minimum: String,
}
