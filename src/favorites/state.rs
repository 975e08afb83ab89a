use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{MovieId, MovieSummary};
use crate::mvi::StoreState;

/// A favorited movie, reduced to what the favorites page shows.
///
/// The serialized shape is the persisted format, so field names are stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    pub id: MovieId,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    /// Set once at insertion.
    #[serde(rename = "addedAt")]
    pub added_at: DateTime<Utc>,
}

impl FavoriteEntry {
    pub fn from_movie(movie: &MovieSummary, added_at: DateTime<Utc>) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            poster_path: movie.poster_path.clone(),
            release_date: movie.release_date.clone(),
            vote_average: movie.vote_average,
            added_at,
        }
    }

    /// Four-digit year from `release_date`, if there is one.
    pub fn release_year(&self) -> Option<i32> {
        release_year(&self.release_date)
    }
}

pub(crate) fn release_year(date: &str) -> Option<i32> {
    date.get(..4)?.parse().ok()
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FavoritesState {
    /// Insertion order, unique by id.
    pub entries: Vec<FavoriteEntry>,
    /// Until this is set, nothing is written to storage.
    pub initialized: bool,
}

impl StoreState for FavoritesState {}

impl FavoritesState {
    pub fn contains(&self, movie_id: MovieId) -> bool {
        self.entries.iter().any(|entry| entry.id == movie_id)
    }

    pub fn position(&self, movie_id: MovieId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == movie_id)
    }
}
