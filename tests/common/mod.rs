//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use movie_browser::catalog::{
    CatalogClient, CatalogError, CatalogFuture, CatalogSource, ListQuery, MovieDetails, MovieId,
    MovieSummary, MoviesResponse, SearchParams,
};
use movie_browser::config::CatalogConfig;
use parking_lot::Mutex;
use tokio::sync::oneshot;

// -- Fixtures -----------------------------------------------------------------

pub fn movie(id: u64, title: &str) -> MovieSummary {
    let mut movie = MovieSummary::new(id, title);
    movie.release_date = "2010-07-16".to_string();
    movie.vote_average = 8.2;
    movie.poster_path = Some(format!("/poster-{}.jpg", id));
    movie
}

pub fn page(page: u32, ids: &[u64]) -> MoviesResponse {
    MoviesResponse {
        page,
        results: ids
            .iter()
            .map(|id| movie(*id, &format!("Movie {}", id)))
            .collect(),
        total_pages: 10,
        total_results: 200,
    }
}

pub fn page_json(page: u32, ids: &[u64]) -> String {
    serde_json::to_string(&self::page(page, ids)).unwrap()
}

pub fn details(id: u64, title: &str) -> MovieDetails {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "release_date": "2010-07-16",
        "vote_average": 8.4,
        "runtime": 148,
        "budget": 160000000u64,
        "revenue": 825532764u64,
        "genres": [{"id": 28, "name": "Action"}],
        "tagline": "Your mind is the scene of the crime."
    }))
    .unwrap()
}

pub fn not_found() -> CatalogError {
    CatalogError::Remote {
        status: 404,
        status_text: "Not Found".to_string(),
    }
}

/// Catalog config pointing at `base_url` with a test key.
pub fn catalog_config(base_url: &str) -> CatalogConfig {
    CatalogConfig {
        base_url: Some(base_url.to_string()),
        api_key: Some("test-key".to_string()),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

pub fn client_for(base_url: &str) -> CatalogClient {
    CatalogClient::new(&catalog_config(base_url)).expect("Failed to build client")
}

// -- Scripted catalog ---------------------------------------------------------

/// A call the store made against the scripted catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(ListQuery),
    Search(SearchParams),
    Details(MovieId),
}

enum Reply {
    Movies(oneshot::Sender<Result<MoviesResponse, CatalogError>>),
    Details(oneshot::Sender<Result<MovieDetails, CatalogError>>),
}

/// `CatalogSource` whose calls stay pending until the test resolves them,
/// so completion order is fully under test control.
#[derive(Default)]
pub struct ScriptedCatalog {
    calls: Mutex<Vec<Call>>,
    replies: Mutex<Vec<Option<Reply>>>,
}

impl ScriptedCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Resolve the `index`-th call (0-based) with a list/search result.
    pub fn resolve_movies(&self, index: usize, result: Result<MoviesResponse, CatalogError>) {
        match self.replies.lock()[index].take() {
            Some(Reply::Movies(tx)) => {
                let _ = tx.send(result);
            }
            _ => panic!("call {} is not a pending list/search call", index),
        }
    }

    /// Resolve the `index`-th call (0-based) with a details result.
    pub fn resolve_details(&self, index: usize, result: Result<MovieDetails, CatalogError>) {
        match self.replies.lock()[index].take() {
            Some(Reply::Details(tx)) => {
                let _ = tx.send(result);
            }
            _ => panic!("call {} is not a pending details call", index),
        }
    }

    fn movies_call(&self, call: Call) -> CatalogFuture<MoviesResponse> {
        let (tx, rx) = oneshot::channel();
        self.calls.lock().push(call);
        self.replies.lock().push(Some(Reply::Movies(tx)));
        Box::pin(async move { rx.await.unwrap_or_else(|_| Err(dropped())) })
    }
}

fn dropped() -> CatalogError {
    CatalogError::InvalidArgument("scripted reply dropped".to_string())
}

impl CatalogSource for ScriptedCatalog {
    fn fetch_list(&self, query: ListQuery) -> CatalogFuture<MoviesResponse> {
        self.movies_call(Call::List(query))
    }

    fn fetch_search(&self, params: SearchParams) -> CatalogFuture<MoviesResponse> {
        self.movies_call(Call::Search(params))
    }

    fn fetch_details(&self, movie_id: MovieId) -> CatalogFuture<MovieDetails> {
        let (tx, rx) = oneshot::channel();
        self.calls.lock().push(Call::Details(movie_id));
        self.replies.lock().push(Some(Reply::Details(tx)));
        Box::pin(async move { rx.await.unwrap_or_else(|_| Err(dropped())) })
    }
}
