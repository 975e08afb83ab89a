//! Remote-data store: commands start fetches, completions update slices.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::catalog::{
    CatalogError, CatalogFuture, CatalogSource, ListName, ListQuery, MovieDetails, MovieId,
    MoviesResponse, SearchParams,
};
use crate::movies::intent::MoviesIntent;
use crate::movies::reducer::MoviesReducer;
use crate::movies::state::{FetchSlice, MoviesState, SearchSlice};
use crate::mvi::Reducer;

/// Result of a dispatched catalog call, waiting to be applied.
#[derive(Debug)]
pub enum Completion {
    List {
        list: ListName,
        result: Result<MoviesResponse, CatalogError>,
    },
    Search {
        query: String,
        result: Result<MoviesResponse, CatalogError>,
    },
    Details {
        movie_id: MovieId,
        result: Result<MovieDetails, CatalogError>,
    },
}

/// Identifies the slice a completion was applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceKey {
    List(ListName),
    Details(MovieId),
}

impl Completion {
    fn key(&self) -> SliceKey {
        match self {
            Completion::List { list, .. } => SliceKey::List(*list),
            Completion::Search { .. } => SliceKey::List(ListName::Search),
            Completion::Details { movie_id, .. } => SliceKey::Details(*movie_id),
        }
    }

    fn into_intent(self) -> MoviesIntent {
        match self {
            Completion::List { list, result } => match result {
                Ok(response) => MoviesIntent::FetchSucceeded { list, response },
                Err(err) => MoviesIntent::FetchFailed {
                    list,
                    message: failure_message(SliceKey::List(list), &err),
                },
            },
            Completion::Search { query, result } => match result {
                Ok(response) => MoviesIntent::SearchSucceeded { query, response },
                Err(err) => MoviesIntent::FetchFailed {
                    list: ListName::Search,
                    message: failure_message(SliceKey::List(ListName::Search), &err),
                },
            },
            Completion::Details { movie_id, result } => match result {
                Ok(details) => MoviesIntent::DetailsSucceeded {
                    movie_id,
                    details: Box::new(details),
                },
                Err(err) => MoviesIntent::DetailsFailed {
                    movie_id,
                    message: failure_message(SliceKey::Details(movie_id), &err),
                },
            },
        }
    }
}

fn failure_message(key: SliceKey, err: &CatalogError) -> String {
    tracing::warn!(slice = ?key, kind = err.kind(), error = %err, "Fetch failed");
    err.to_string()
}

/// Owns every remote-data slice.
///
/// Commands (`fetch`, `search`, `fetch_details`) mark the slice as loading,
/// spawn the catalog call and return at once. Each finished call queues a
/// [`Completion`]; nothing changes until the owner applies it through
/// [`next_completion`](Self::next_completion),
/// [`drain_completions`](Self::drain_completions) or
/// [`settle`](Self::settle).
///
/// Completions are applied in the order they finish, not the order their
/// commands were issued. Two overlapping fetches of one slice leave it with
/// the result of whichever finished last. Callers that need strict ordering
/// must wait for one fetch before issuing the next.
pub struct MoviesStore {
    catalog: Arc<dyn CatalogSource>,
    state: MoviesState,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl MoviesStore {
    pub fn new(catalog: Arc<dyn CatalogSource>) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            catalog,
            state: MoviesState::default(),
            completions_tx,
            completions_rx,
            in_flight: 0,
        }
    }

    // -- Reads ---------------------------------------------------------------

    pub fn state(&self) -> &MoviesState {
        &self.state
    }

    pub fn slice(&self, list: ListName) -> &FetchSlice<MoviesResponse> {
        self.state.list(list)
    }

    pub fn search_slice(&self) -> &SearchSlice {
        &self.state.search
    }

    /// `None` until the first `fetch_details` for this id.
    pub fn detail(&self, movie_id: MovieId) -> Option<&FetchSlice<MovieDetails>> {
        self.state.detail(movie_id)
    }

    /// Dispatched fetches whose completion has not been applied yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    // -- Commands ------------------------------------------------------------

    /// Start fetching one of the curated lists.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn fetch(&mut self, query: ListQuery) {
        let list = query.list();
        tracing::debug!(list = %list, ?query, "Fetch dispatched");
        self.dispatch(MoviesIntent::FetchStarted { list });

        let future = self.catalog.fetch_list(query);
        self.spawn(future, move |result| Completion::List { list, result });
    }

    /// Start a search. A blank query is ignored and returns `false`.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn search(&mut self, params: SearchParams) -> bool {
        if params.is_blank() {
            tracing::debug!("Ignoring blank search query");
            return false;
        }

        let query = params.query.clone();
        tracing::debug!(query = %query, page = ?params.page, "Search dispatched");
        self.dispatch(MoviesIntent::SearchStarted {
            query: query.clone(),
        });

        let future = self.catalog.fetch_search(params);
        self.spawn(future, move |result| Completion::Search { query, result });
        true
    }

    /// Start fetching details for one movie. Concurrent calls for the same
    /// id are not coalesced.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn fetch_details(&mut self, movie_id: MovieId) {
        tracing::debug!(movie_id = %movie_id, "Details fetch dispatched");
        self.dispatch(MoviesIntent::DetailsStarted { movie_id });

        let future = self.catalog.fetch_details(movie_id);
        self.spawn(future, move |result| Completion::Details { movie_id, result });
    }

    pub fn clear_search(&mut self) {
        self.dispatch(MoviesIntent::ClearSearch);
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.dispatch(MoviesIntent::SetSearchQuery {
            query: query.into(),
        });
    }

    // -- Completions ---------------------------------------------------------

    /// Wait for the next completion and apply it.
    ///
    /// Returns `None` immediately when nothing is in flight.
    pub async fn next_completion(&mut self) -> Option<SliceKey> {
        if self.in_flight == 0 {
            return None;
        }
        let completion = self.completions_rx.recv().await?;
        Some(self.apply(completion))
    }

    /// Apply every completion that is already queued, without waiting.
    pub fn drain_completions(&mut self) -> Vec<SliceKey> {
        let mut applied = Vec::new();
        while let Ok(completion) = self.completions_rx.try_recv() {
            applied.push(self.apply(completion));
        }
        applied
    }

    /// Apply completions until nothing is in flight.
    pub async fn settle(&mut self) {
        while self.next_completion().await.is_some() {}
    }

    fn apply(&mut self, completion: Completion) -> SliceKey {
        self.in_flight = self.in_flight.saturating_sub(1);
        let key = completion.key();
        self.dispatch(completion.into_intent());
        tracing::debug!(slice = ?key, in_flight = self.in_flight, "Completion applied");
        key
    }

    fn dispatch(&mut self, intent: MoviesIntent) {
        self.state = MoviesReducer::reduce(std::mem::take(&mut self.state), intent);
    }

    /// Run `future` on its own task. A watcher task joins it and always
    /// queues a completion, so `in_flight` drops back even if the fetch
    /// panics or is aborted.
    fn spawn<T, F>(&mut self, future: CatalogFuture<T>, complete: F)
    where
        T: Send + 'static,
        F: FnOnce(Result<T, CatalogError>) -> Completion + Send + 'static,
    {
        self.in_flight += 1;
        let tx = self.completions_tx.clone();
        let fetch = tokio::spawn(future);
        tokio::spawn(async move {
            let result = fetch.await.unwrap_or_else(|err| {
                tracing::error!(error = %err, "Fetch task did not complete");
                Err(CatalogError::Interrupted(err.to_string()))
            });
            if tx.send(complete(result)).is_err() {
                tracing::trace!("Completion dropped (store gone)");
            }
        });
    }
}
