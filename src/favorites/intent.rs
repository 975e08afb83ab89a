use crate::catalog::MovieId;
use crate::favorites::state::FavoriteEntry;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FavoritesIntent {
    /// Replace entries with what was read from storage and unlock writes.
    Initialize { entries: Vec<FavoriteEntry> },
    /// Append unless an entry with the same id exists.
    Add { entry: FavoriteEntry },
    Remove { movie_id: MovieId },
    /// Remove if present, otherwise append `entry`.
    Toggle { entry: FavoriteEntry },
    Clear,
    /// Indices must be in range; anything else leaves the state unchanged.
    Reorder { from: usize, to: usize },
}

impl Intent for FavoritesIntent {}
