//! Slice state for remote movie data.

use std::collections::HashMap;

use crate::catalog::{ListName, MovieDetails, MovieId, MovieSummary, MoviesResponse};
use crate::mvi::StoreState;

/// Where a slice is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Error,
}

/// Remote data plus the status of the last fetch that touched it.
///
/// `data` is the last successful result. A failed fetch keeps it, so a view
/// can show stale results next to the error.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSlice<T> {
    pub data: Option<T>,
    pub status: FetchStatus,
    pub error: Option<String>,
}

impl<T> Default for FetchSlice<T> {
    fn default() -> Self {
        Self {
            data: None,
            status: FetchStatus::Idle,
            error: None,
        }
    }
}

impl<T> FetchSlice<T> {
    pub(crate) fn start(&mut self) {
        self.status = FetchStatus::Loading;
        self.error = None;
    }

    pub(crate) fn succeed(&mut self, data: T) {
        self.data = Some(data);
        self.status = FetchStatus::Loaded;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.status = FetchStatus::Error;
        self.error = Some(message);
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl FetchSlice<MoviesResponse> {
    /// Movies from the last successful page, empty if none.
    pub fn movies(&self) -> &[MovieSummary] {
        self.data
            .as_ref()
            .map(|page| page.results.as_slice())
            .unwrap_or_default()
    }

    /// `(page, total_pages)` of the last successful page.
    pub fn pagination(&self) -> Option<(u32, u32)> {
        self.data
            .as_ref()
            .map(|page| (page.page, page.total_pages))
    }
}

/// The search slice also remembers what was searched for.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchSlice {
    pub slice: FetchSlice<MoviesResponse>,
    pub query: String,
}

/// Everything the movies store owns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MoviesState {
    pub trending: FetchSlice<MoviesResponse>,
    pub popular: FetchSlice<MoviesResponse>,
    pub top_rated: FetchSlice<MoviesResponse>,
    pub now_playing: FetchSlice<MoviesResponse>,
    pub upcoming: FetchSlice<MoviesResponse>,
    pub search: SearchSlice,
    /// Created on first fetch for an id, never evicted.
    pub details: HashMap<MovieId, FetchSlice<MovieDetails>>,
}

impl StoreState for MoviesState {}

impl MoviesState {
    pub fn list(&self, list: ListName) -> &FetchSlice<MoviesResponse> {
        match list {
            ListName::Trending => &self.trending,
            ListName::Popular => &self.popular,
            ListName::TopRated => &self.top_rated,
            ListName::NowPlaying => &self.now_playing,
            ListName::Upcoming => &self.upcoming,
            ListName::Search => &self.search.slice,
        }
    }

    pub(crate) fn list_mut(&mut self, list: ListName) -> &mut FetchSlice<MoviesResponse> {
        match list {
            ListName::Trending => &mut self.trending,
            ListName::Popular => &mut self.popular,
            ListName::TopRated => &mut self.top_rated,
            ListName::NowPlaying => &mut self.now_playing,
            ListName::Upcoming => &mut self.upcoming,
            ListName::Search => &mut self.search.slice,
        }
    }

    pub fn detail(&self, movie_id: MovieId) -> Option<&FetchSlice<MovieDetails>> {
        self.details.get(&movie_id)
    }

    pub(crate) fn detail_mut(&mut self, movie_id: MovieId) -> &mut FetchSlice<MovieDetails> {
        self.details.entry(movie_id).or_default()
    }
}
