use std::collections::HashSet;

use crate::favorites::intent::FavoritesIntent;
use crate::favorites::state::{FavoriteEntry, FavoritesState};
use crate::mvi::Reducer;

pub struct FavoritesReducer;

impl Reducer for FavoritesReducer {
    type State = FavoritesState;
    type Intent = FavoritesIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FavoritesIntent::Initialize { entries } => {
                state.entries = dedup_by_id(entries);
                state.initialized = true;
            }
            FavoritesIntent::Add { entry } => {
                if !state.contains(entry.id) {
                    state.entries.push(entry);
                }
            }
            FavoritesIntent::Remove { movie_id } => {
                state.entries.retain(|entry| entry.id != movie_id);
            }
            FavoritesIntent::Toggle { entry } => match state.position(entry.id) {
                Some(index) => {
                    state.entries.remove(index);
                }
                None => state.entries.push(entry),
            },
            FavoritesIntent::Clear => state.entries.clear(),
            FavoritesIntent::Reorder { from, to } => {
                let len = state.entries.len();
                if from < len && to < len && from != to {
                    let moved = state.entries.remove(from);
                    state.entries.insert(to, moved);
                }
            }
        }
        state
    }
}

/// Keeps the first entry for each id. Only matters for hand-edited or
/// corrupted snapshots.
fn dedup_by_id(entries: Vec<FavoriteEntry>) -> Vec<FavoriteEntry> {
    let mut seen = HashSet::with_capacity(entries.len());
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.id))
        .collect()
}
