//! Display-side helpers shared by every view.

mod card;
mod format;

pub use card::{catalog_cards, favorite_cards, MovieCard};
pub use format::{format_currency, format_runtime};
