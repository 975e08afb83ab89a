use crate::catalog::{ListName, MovieDetails, MovieId, MoviesResponse};
use crate::mvi::Intent;

/// State transitions for remote movie data.
///
/// `*Started` intents come from commands; `*Succeeded` / `*Failed` come from
/// completion events, possibly in a different order than the commands.
#[derive(Debug, Clone)]
pub enum MoviesIntent {
    FetchStarted {
        list: ListName,
    },
    FetchSucceeded {
        list: ListName,
        response: MoviesResponse,
    },
    /// Also used for failed searches (`list == ListName::Search`).
    FetchFailed {
        list: ListName,
        message: String,
    },
    SearchStarted {
        query: String,
    },
    SearchSucceeded {
        query: String,
        response: MoviesResponse,
    },
    DetailsStarted {
        movie_id: MovieId,
    },
    DetailsSucceeded {
        movie_id: MovieId,
        details: Box<MovieDetails>,
    },
    DetailsFailed {
        movie_id: MovieId,
        message: String,
    },
    /// Reset the search slice to its initial state.
    ClearSearch,
    /// Record the query text (e.g. as the user types) without fetching.
    SetSearchQuery {
        query: String,
    },
}

impl Intent for MoviesIntent {}
