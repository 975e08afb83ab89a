//! Remote-data store for catalog lists, search and movie details.

mod intent;
mod reducer;
mod state;
mod store;

pub use intent::MoviesIntent;
pub use reducer::MoviesReducer;
pub use state::{FetchSlice, FetchStatus, MoviesState, SearchSlice};
pub use store::{Completion, MoviesStore, SliceKey};
