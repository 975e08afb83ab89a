//! The seam between the movies store and whatever serves catalog data.

use std::future::Future;
use std::pin::Pin;

use crate::catalog::client::CatalogClient;
use crate::catalog::error::CatalogError;
use crate::catalog::models::{MovieDetails, MovieId, MoviesResponse};
use crate::catalog::params::{ListQuery, SearchParams};

/// A pending catalog call. Owns everything it needs, so it can be spawned.
pub type CatalogFuture<T> = Pin<Box<dyn Future<Output = Result<T, CatalogError>> + Send + 'static>>;

/// Source of remote movie data for the movies store.
///
/// Each call returns immediately with a future; the store decides where
/// that future runs and how its result is applied.
pub trait CatalogSource: Send + Sync {
    fn fetch_list(&self, query: ListQuery) -> CatalogFuture<MoviesResponse>;

    fn fetch_search(&self, params: SearchParams) -> CatalogFuture<MoviesResponse>;

    fn fetch_details(&self, movie_id: MovieId) -> CatalogFuture<MovieDetails>;
}

impl CatalogSource for CatalogClient {
    fn fetch_list(&self, query: ListQuery) -> CatalogFuture<MoviesResponse> {
        let client = self.clone();
        Box::pin(async move { client.list(query).await })
    }

    fn fetch_search(&self, params: SearchParams) -> CatalogFuture<MoviesResponse> {
        let client = self.clone();
        Box::pin(async move { client.search(&params).await })
    }

    fn fetch_details(&self, movie_id: MovieId) -> CatalogFuture<MovieDetails> {
        let client = self.clone();
        Box::pin(async move { client.details(movie_id).await })
    }
}
