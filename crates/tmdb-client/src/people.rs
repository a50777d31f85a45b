//! Person endpoints (`/person/...`).

use anyhow::Result;
use serde::Deserialize;

use crate::client::Client;
use crate::options::Options;
use crate::types::{Changes, ExternalIds, Image, MovieSummary, Paginated, Translations, TvSummary};

/// Primary details of a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    #[serde(default)]
    pub name: String,
    /// Other names the person is known by.
    #[serde(default)]
    pub also_known_as: Vec<String>,
    /// Biography text.
    #[serde(default)]
    pub biography: String,
    /// Department the person is best known for.
    #[serde(default)]
    pub known_for_department: String,
    /// Birthday (YYYY-MM-DD or null).
    pub birthday: Option<String>,
    /// Deathday (YYYY-MM-DD or null).
    pub deathday: Option<String>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    #[serde(default)]
    pub gender: u32,
    /// IMDb ID.
    pub imdb_id: Option<String>,
    /// Homepage URL.
    pub homepage: Option<String>,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
}

/// A movie cast credit of a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonMovieCast {
    /// Character played.
    #[serde(default)]
    pub character: String,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// The movie.
    #[serde(flatten)]
    pub movie: MovieSummary,
}

/// A movie crew credit of a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonMovieCrew {
    /// Department (e.g. "Directing").
    #[serde(default)]
    pub department: String,
    /// Job (e.g. "Director").
    #[serde(default)]
    pub job: String,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// The movie.
    #[serde(flatten)]
    pub movie: MovieSummary,
}

/// Movie credits of a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonMovieCredits {
    /// Person ID.
    #[serde(default)]
    pub id: u64,
    /// Cast credits.
    #[serde(default)]
    pub cast: Vec<PersonMovieCast>,
    /// Crew credits.
    #[serde(default)]
    pub crew: Vec<PersonMovieCrew>,
}

/// A TV cast credit of a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonTvCast {
    /// Character played.
    #[serde(default)]
    pub character: String,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Number of episodes credited.
    #[serde(default)]
    pub episode_count: u32,
    /// The series.
    #[serde(flatten)]
    pub tv: TvSummary,
}

/// A TV crew credit of a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonTvCrew {
    /// Department (e.g. "Writing").
    #[serde(default)]
    pub department: String,
    /// Job (e.g. "Writer").
    #[serde(default)]
    pub job: String,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Number of episodes credited.
    #[serde(default)]
    pub episode_count: u32,
    /// The series.
    #[serde(flatten)]
    pub tv: TvSummary,
}

/// TV credits of a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonTvCredits {
    /// Person ID.
    #[serde(default)]
    pub id: u64,
    /// Cast credits.
    #[serde(default)]
    pub cast: Vec<PersonTvCast>,
    /// Crew credits.
    #[serde(default)]
    pub crew: Vec<PersonTvCrew>,
}

/// A combined movie-or-TV credit of a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CombinedCredit {
    /// Media kind ("movie" or "tv").
    #[serde(default)]
    pub media_type: String,
    /// TMDB movie or series ID.
    #[serde(default)]
    pub id: u64,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Character played (cast credits).
    pub character: Option<String>,
    /// Department (crew credits).
    pub department: Option<String>,
    /// Job (crew credits).
    pub job: Option<String>,
    /// Movie title.
    pub title: Option<String>,
    /// Series name.
    pub name: Option<String>,
    /// Movie release date.
    pub release_date: Option<String>,
    /// Series first air date.
    pub first_air_date: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
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

/// Combined movie and TV credits of a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonCombinedCredits {
    /// Person ID.
    #[serde(default)]
    pub id: u64,
    /// Cast credits.
    #[serde(default)]
    pub cast: Vec<CombinedCredit>,
    /// Crew credits.
    #[serde(default)]
    pub crew: Vec<CombinedCredit>,
}

/// Profile images of a person.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonImages {
    /// Person ID.
    #[serde(default)]
    pub id: u64,
    /// Profile images.
    #[serde(default)]
    pub profiles: Vec<Image>,
}

/// An image a person has been tagged in.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaggedImage {
    /// Image credit ID.
    #[serde(default)]
    pub id: String,
    /// Image kind (e.g. "backdrop").
    #[serde(default)]
    pub image_type: String,
    /// Media kind the image belongs to ("movie" or "tv").
    #[serde(default)]
    pub media_type: String,
    /// The tagged media (shape depends on `media_type`).
    #[serde(default)]
    pub media: serde_json::Value,
    /// The image itself.
    #[serde(flatten)]
    pub image: Image,
}

/// A person as it appears in popular and search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonSummary {
    /// TMDB person ID.
    pub id: u64,
    /// Person name.
    #[serde(default)]
    pub name: String,
    /// Department the person is best known for.
    #[serde(default)]
    pub known_for_department: String,
    /// Media the person is known for (shape varies by media type).
    #[serde(default)]
    pub known_for: Vec<serde_json::Value>,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Gender (0 unknown, 1 female, 2 male, 3 non-binary).
    #[serde(default)]
    pub gender: u32,
    /// Adult flag.
    #[serde(default)]
    pub adult: bool,
}

impl Client {
    /// Fetches the primary details of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn person_details(
        &self,
        person_id: u64,
        options: Option<&Options>,
    ) -> Result<PersonDetails> {
        let url = self.fmt_url(&format!("/person/{person_id}"), options);
        self.get(&url).await
    }

    /// Fetches the change history of a person.
    ///
    /// Supports `start_date`, `end_date`, and `page` options.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn person_changes(
        &self,
        person_id: u64,
        options: Option<&Options>,
    ) -> Result<Changes> {
        let url = self.fmt_url(&format!("/person/{person_id}/changes"), options);
        self.get(&url).await
    }

    /// Fetches the movie credits of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn person_movie_credits(
        &self,
        person_id: u64,
        options: Option<&Options>,
    ) -> Result<PersonMovieCredits> {
        let url = self.fmt_url(&format!("/person/{person_id}/movie_credits"), options);
        self.get(&url).await
    }

    /// Fetches the TV credits of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn person_tv_credits(
        &self,
        person_id: u64,
        options: Option<&Options>,
    ) -> Result<PersonTvCredits> {
        let url = self.fmt_url(&format!("/person/{person_id}/tv_credits"), options);
        self.get(&url).await
    }

    /// Fetches the combined movie and TV credits of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn person_combined_credits(
        &self,
        person_id: u64,
        options: Option<&Options>,
    ) -> Result<PersonCombinedCredits> {
        let url = self.fmt_url(&format!("/person/{person_id}/combined_credits"), options);
        self.get(&url).await
    }

    /// Fetches the external IDs of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn person_external_ids(
        &self,
        person_id: u64,
        options: Option<&Options>,
    ) -> Result<ExternalIds> {
        let url = self.fmt_url(&format!("/person/{person_id}/external_ids"), options);
        self.get(&url).await
    }

    /// Fetches the profile images of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn person_images(
        &self,
        person_id: u64,
        options: Option<&Options>,
    ) -> Result<PersonImages> {
        let url = self.fmt_url(&format!("/person/{person_id}/images"), options);
        self.get(&url).await
    }

    /// Fetches the images a person has been tagged in.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn person_tagged_images(
        &self,
        person_id: u64,
        options: Option<&Options>,
    ) -> Result<Paginated<TaggedImage>> {
        let url = self.fmt_url(&format!("/person/{person_id}/tagged_images"), options);
        self.get(&url).await
    }

    /// Fetches the translations of a person.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn person_translations(
        &self,
        person_id: u64,
        options: Option<&Options>,
    ) -> Result<Translations> {
        let url = self.fmt_url(&format!("/person/{person_id}/translations"), options);
        self.get(&url).await
    }

    /// Fetches the most recently created person.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn latest_person(&self, options: Option<&Options>) -> Result<PersonDetails> {
        let url = self.fmt_url("/person/latest", options);
        self.get(&url).await
    }

    /// Fetches the current popular people.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request or JSON parsing fails.
    pub async fn popular_people(
        &self,
        options: Option<&Options>,
    ) -> Result<Paginated<PersonSummary>> {
        let url = self.fmt_url("/person/popular", options);
        self.get(&url).await
    }
}
