//! Typed records returned by the catalog service.
//!
//! Field names follow the catalog's snake_case JSON. Metadata the UI can live
//! without is `#[serde(default)]` so a sparse record still decodes.

use serde::{Deserialize, Serialize};

/// Catalog identity of a movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub u64);

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A movie as it appears in list and search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// ISO date; empty means "to be announced".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub overview: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub adult: bool,
    #[serde(default)]
    pub video: bool,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub original_language: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub original_title: String,
}

impl MovieSummary {
    /// Minimal summary, mostly useful for building fixtures.
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: id.into(),
            original_title: title.clone(),
            title,
            poster_path: None,
            release_date: String::new(),
            vote_average: 0.0,
            overview: String::new(),
            backdrop_path: None,
            vote_count: 0,
            genre_ids: Vec::new(),
            popularity: 0.0,
            adult: false,
            video: false,
            original_language: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: u64,
    #[serde(default)]
    pub logo_path: Option<String>,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub origin_country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub english_name: String,
    pub iso_639_1: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

/// Full detail record for a single movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub summary: MovieSummary,
    #[serde(default)]
    pub genres: Vec<Genre>,
    /// Minutes; the catalog sends `null` or `0` when unknown.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// USD.
    #[serde(default)]
    pub budget: u64,
    /// USD.
    #[serde(default)]
    pub revenue: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tagline: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default)]
    pub production_companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub production_countries: Vec<ProductionCountry>,
    #[serde(default)]
    pub spoken_languages: Vec<SpokenLanguage>,
}

impl MovieDetails {
    pub fn id(&self) -> MovieId {
        self.summary.id
    }
}

/// One page of a movie list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoviesResponse {
    pub page: u32,
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
