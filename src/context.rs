//! Composition root handed to the view layer.

use std::sync::Arc;

use crate::catalog::{CatalogClient, CatalogError, CatalogSource, ListQuery, TrendingWindow};
use crate::config::Config;
use crate::favorites::{FavoritesStore, FileStorage, KeyValueStorage};
use crate::movies::MoviesStore;

/// Owns the session's stores. Views borrow it; nothing is global.
pub struct AppContext {
    config: Config,
    movies: MoviesStore,
    favorites: FavoritesStore,
}

impl AppContext {
    /// Wire a real catalog client and the given storage.
    pub fn new(config: Config, storage: Box<dyn KeyValueStorage>) -> Result<Self, CatalogError> {
        let client = CatalogClient::new(&config.catalog)?;
        Ok(Self::with_catalog(config, Arc::new(client), storage))
    }

    /// Wire a real catalog client and file storage from `config.storage`.
    pub fn from_config(config: Config) -> Result<Self, CatalogError> {
        let dir = config.storage.resolved_dir();
        tracing::debug!(dir = %dir.display(), "Using file storage");
        Self::new(config, Box::new(FileStorage::new(dir)))
    }

    pub fn with_catalog(
        config: Config,
        catalog: Arc<dyn CatalogSource>,
        storage: Box<dyn KeyValueStorage>,
    ) -> Self {
        Self {
            config,
            movies: MoviesStore::new(catalog),
            favorites: FavoritesStore::new(storage),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn movies(&self) -> &MoviesStore {
        &self.movies
    }

    pub fn movies_mut(&mut self) -> &mut MoviesStore {
        &mut self.movies
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    pub fn favorites_mut(&mut self) -> &mut FavoritesStore {
        &mut self.favorites
    }

    /// Issue the five list fetches the dashboard shows.
    ///
    /// # Panics
    /// Must be called from within a Tokio runtime.
    pub fn load_dashboard(&mut self, window: TrendingWindow) {
        for query in [
            ListQuery::Trending { window },
            ListQuery::Popular { page: 1 },
            ListQuery::TopRated { page: 1 },
            ListQuery::NowPlaying { page: 1 },
            ListQuery::Upcoming { page: 1 },
        ] {
            self.movies.fetch(query);
        }
    }
}
