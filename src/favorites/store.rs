//! Favorites store with storage synchronization.

use chrono::Utc;
use thiserror::Error;

use crate::catalog::{MovieId, MovieSummary};
use crate::favorites::intent::FavoritesIntent;
use crate::favorites::reducer::FavoritesReducer;
use crate::favorites::state::{FavoriteEntry, FavoritesState};
use crate::favorites::stats::FavoritesStats;
use crate::favorites::storage::{KeyValueStorage, StorageError};
use crate::mvi::Reducer;

/// Storage key holding the JSON array of favorites.
pub const FAVORITES_STORAGE_KEY: &str = "movie-favorites";

#[derive(Debug, Error)]
pub enum FavoritesError {
    #[error("Index {index} is out of range for {len} favorites")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Stored favorites are not valid JSON: {0}")]
    StorageParse(#[source] serde_json::Error),

    #[error("Failed to encode favorites: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Ordered favorites plus the storage they are mirrored to.
///
/// Starts uninitialized. While uninitialized, commands still change the
/// in-memory list but nothing is written, so an empty startup state can
/// never overwrite a saved snapshot. After [`load`](Self::load) or
/// [`initialize`](Self::initialize), every change writes the full list.
pub struct FavoritesStore {
    state: FavoritesState,
    storage: Box<dyn KeyValueStorage>,
}

impl FavoritesStore {
    pub fn new(storage: Box<dyn KeyValueStorage>) -> Self {
        Self {
            state: FavoritesState::default(),
            storage,
        }
    }

    pub fn state(&self) -> &FavoritesState {
        &self.state
    }

    pub fn entries(&self) -> &[FavoriteEntry] {
        &self.state.entries
    }

    pub fn is_initialized(&self) -> bool {
        self.state.initialized
    }

    pub fn is_favorite(&self, movie_id: MovieId) -> bool {
        self.state.contains(movie_id)
    }

    pub fn stats(&self) -> FavoritesStats {
        FavoritesStats::from_entries(&self.state.entries)
    }

    /// Read the saved snapshot and initialize from it.
    ///
    /// Does nothing if already initialized. A missing or malformed snapshot
    /// initializes an empty list. If storage itself can't be read the store
    /// stays uninitialized, so nothing overwrites the snapshot; a later
    /// `load` may retry.
    pub fn load(&mut self) {
        if self.state.initialized {
            tracing::debug!("Favorites already initialized, skipping load");
            return;
        }

        let entries = match self.read_snapshot() {
            Ok(entries) => entries,
            Err(FavoritesError::Storage(err)) => {
                tracing::error!(error = %err, "Favorites storage unreadable, writes stay disabled");
                return;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to load favorites, starting empty");
                Vec::new()
            }
        };
        tracing::debug!(count = entries.len(), "Favorites loaded");
        self.initialize(entries);
    }

    /// Set entries and allow writes. A second call overwrites entries.
    ///
    /// Nothing is written here; the next change persists the full list.
    pub fn initialize(&mut self, entries: Vec<FavoriteEntry>) {
        self.state =
            FavoritesReducer::reduce(self.state.clone(), FavoritesIntent::Initialize { entries });
    }

    pub fn add(&mut self, movie: &MovieSummary) {
        if self.is_favorite(movie.id) {
            return;
        }
        self.dispatch(FavoritesIntent::Add {
            entry: FavoriteEntry::from_movie(movie, Utc::now()),
        });
    }

    pub fn remove(&mut self, movie_id: MovieId) {
        self.dispatch(FavoritesIntent::Remove { movie_id });
    }

    pub fn toggle(&mut self, movie: &MovieSummary) {
        self.dispatch(FavoritesIntent::Toggle {
            entry: FavoriteEntry::from_movie(movie, Utc::now()),
        });
    }

    pub fn clear(&mut self) {
        self.dispatch(FavoritesIntent::Clear);
    }

    /// Move the entry at `from` to `to`, shifting the others.
    ///
    /// # Errors
    /// `IndexOutOfRange` if either index is `>= len`; the list is untouched.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), FavoritesError> {
        let len = self.state.entries.len();
        for index in [from, to] {
            if index >= len {
                return Err(FavoritesError::IndexOutOfRange { index, len });
            }
        }
        self.dispatch(FavoritesIntent::Reorder { from, to });
        Ok(())
    }

    fn read_snapshot(&self) -> Result<Vec<FavoriteEntry>, FavoritesError> {
        match self.storage.get(FAVORITES_STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(FavoritesError::StorageParse),
            None => Ok(Vec::new()),
        }
    }

    fn dispatch(&mut self, intent: FavoritesIntent) {
        let next = FavoritesReducer::reduce(self.state.clone(), intent);
        if next == self.state {
            return;
        }
        self.state = next;
        if self.state.initialized {
            if let Err(err) = self.persist() {
                tracing::warn!(error = %err, "Failed to persist favorites");
            }
        }
    }

    fn persist(&self) -> Result<(), FavoritesError> {
        let snapshot =
            serde_json::to_string(&self.state.entries).map_err(FavoritesError::Encode)?;
        self.storage.set(FAVORITES_STORAGE_KEY, &snapshot)?;
        tracing::trace!(count = self.state.entries.len(), "Favorites persisted");
        Ok(())
    }
}
