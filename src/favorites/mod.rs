//! Locally persisted list of favorite movies.

mod intent;
mod reducer;
mod state;
mod stats;
mod storage;
mod store;

pub use intent::FavoritesIntent;
pub use reducer::FavoritesReducer;
pub use state::{FavoriteEntry, FavoritesState};
pub(crate) use state::release_year;
pub use stats::FavoritesStats;
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{FavoritesError, FavoritesStore, FAVORITES_STORAGE_KEY};
