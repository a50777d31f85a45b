//! Movie endpoints (`/movie/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;
use crate::types::{
    AlternativeTitle, Changes, Credits, Dates, ExternalIds, Genre, Images, Keyword, MovieSummary,
    Paginated, ProductionCompany, ProductionCountry, SpokenLanguage, Translations, VideoResults,
};

/// Primary details of a movie.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieDetails {
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
    /// Tagline.
    #[serde(default)]
    pub tagline: String,
    /// Release status (e.g. "Released").
    #[serde(default)]
    pub status: String,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Budget in US dollars.
    #[serde(default)]
    pub budget: u64,
    /// Revenue in US dollars.
    #[serde(default)]
    pub revenue: u64,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Production companies.
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
    /// Collection membership (nullable, shape varies).
    #[serde(default)]
    pub belongs_to_collection: serde_json::Value,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
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

/// Alternative titles of a movie.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieAlternativeTitles {
    /// Movie ID.
    #[serde(default)]
    pub id: u64,
    /// Alternative titles.
    #[serde(default)]
    pub titles: Vec<AlternativeTitle>,
}

/// Keywords attached to a movie.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieKeywords {
    /// Movie ID.
    #[serde(default)]
    pub id: u64,
    /// Keywords.
    #[serde(default)]
    pub keywords: Vec<Keyword>,
}

/// A user list a movie belongs to.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSummary {
    /// TMDB list ID.
    pub id: u64,
    /// List name.
    #[serde(default)]
    pub name: String,
    /// List description.
    #[serde(default)]
    pub description: String,
    /// List language (ISO 639-1).
    #[serde(default)]
    pub iso_639_1: String,
    /// List type (e.g. "movie").
    #[serde(default)]
    pub list_type: String,
    /// Number of items in the list.
    #[serde(default)]
    pub item_count: u32,
    /// Number of users who favorited the list.
    #[serde(default)]
    pub favorite_count: u32,
    /// Poster image path.
    pub poster_path: Option<String>,
}

/// A single release date entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseDate {
    /// Certification (e.g. "R"), often empty.
    #[serde(default)]
    pub certification: String,
    /// Language of the release (ISO 639-1, nullable).
    pub iso_639_1: Option<String>,
    /// Release timestamp.
    #[serde(default)]
    pub release_date: String,
    /// Release type (1 premiere .. 6 TV).
    #[serde(rename = "type", default)]
    pub release_type: u32,
    /// Free-form note.
    #[serde(default)]
    pub note: String,
}

/// Release dates of a movie in one country.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CountryReleaseDates {
    /// Country (ISO 3166-1).
    #[serde(default)]
    pub iso_3166_1: String,
    /// Release dates in that country.
    #[serde(default)]
    pub release_dates: Vec<ReleaseDate>,
}

/// Release dates of a movie, grouped by country.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseDates {
    /// Movie ID.
    #[serde(default)]
    pub id: u64,
    /// Per-country release dates.
    #[serde(default)]
    pub results: Vec<CountryReleaseDates>,
}

/// A page of movies bounded by a release-date window.
#[derive(Debug, Clone, Default, Deserialize)]
#[allow(clippy::module_name_repetitions)]
pub struct MoviesWithDates {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Movies on this page.
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    /// Release-date window.
    #[serde(default)]
    pub dates: Dates,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

impl Client {
    /// Fetches the primary details of a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_details(
        &self,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<MovieDetails> {
        let url = self.fmt_url(&format!("/movie/{movie_id}"), options);
        self.get(&url).await
    }

    /// Fetches the alternative titles of a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_alternative_titles(
        &self,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<MovieAlternativeTitles> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/alternative_titles"), options);
        self.get(&url).await
    }

    /// Fetches the change history of a movie.
    ///
    /// Supports `start_date`, `end_date`, and `page` options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_changes(&self, movie_id: u64, options: Option<&Options>) -> Result<Changes> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/changes"), options);
        self.get(&url).await
    }

    /// Fetches the cast and crew of a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_credits(&self, movie_id: u64, options: Option<&Options>) -> Result<Credits> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/credits"), options);
        self.get(&url).await
    }

    /// Fetches the external IDs of a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_external_ids(
        &self,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<ExternalIds> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/external_ids"), options);
        self.get(&url).await
    }

    /// Fetches the images of a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_images(&self, movie_id: u64, options: Option<&Options>) -> Result<Images> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/images"), options);
        self.get(&url).await
    }

    /// Fetches the keywords of a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_keywords(
        &self,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<MovieKeywords> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/keywords"), options);
        self.get(&url).await
    }

    /// Fetches the user lists a movie belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_lists(
        &self,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<Paginated<ListSummary>> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/lists"), options);
        self.get(&url).await
    }

    /// Fetches recommendations for a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_recommendations(
        &self,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<Paginated<MovieSummary>> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/recommendations"), options);
        self.get(&url).await
    }

    /// Fetches the release dates of a movie, grouped by country.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_release_dates(
        &self,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<ReleaseDates> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/release_dates"), options);
        self.get(&url).await
    }

    /// Fetches movies similar to a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_similar(
        &self,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<Paginated<MovieSummary>> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/similar"), options);
        self.get(&url).await
    }

    /// Fetches the translations of a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_translations(
        &self,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<Translations> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/translations"), options);
        self.get(&url).await
    }

    /// Fetches the videos of a movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn movie_videos(
        &self,
        movie_id: u64,
        options: Option<&Options>,
    ) -> Result<VideoResults> {
        let url = self.fmt_url(&format!("/movie/{movie_id}/videos"), options);
        self.get(&url).await
    }

    /// Fetches the most recently created movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn latest_movie(&self, options: Option<&Options>) -> Result<MovieDetails> {
        let url = self.fmt_url("/movie/latest", options);
        self.get(&url).await
    }

    /// Fetches movies currently in theatres.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn now_playing_movies(&self, options: Option<&Options>) -> Result<MoviesWithDates> {
        let url = self.fmt_url("/movie/now_playing", options);
        self.get(&url).await
    }

    /// Fetches the current popular movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn popular_movies(
        &self,
        options: Option<&Options>,
    ) -> Result<Paginated<MovieSummary>> {
        let url = self.fmt_url("/movie/popular", options);
        self.get(&url).await
    }

    /// Fetches the top rated movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn top_rated_movies(
        &self,
        options: Option<&Options>,
    ) -> Result<Paginated<MovieSummary>> {
        let url = self.fmt_url("/movie/top_rated", options);
        self.get(&url).await
    }

    /// Fetches upcoming movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn upcoming_movies(&self, options: Option<&Options>) -> Result<MoviesWithDates> {
        let url = self.fmt_url("/movie/upcoming", options);
        self.get(&url).await
    }
}
