//! Client for the remote movie catalog.
//!
//! One async method per catalog query. Responses are decoded into the typed
//! records in [`models`]; failures are classified by [`CatalogError`].
//! No retries happen at this layer.

mod client;
mod error;
mod image;
pub mod models;
mod params;
mod source;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use image::{full_image_url, image_url, ImageSize, IMAGE_BASE_URL, PLACEHOLDER_IMAGE};
pub use models::{
    Genre, MovieDetails, MovieId, MovieSummary, MoviesResponse, ProductionCompany,
    ProductionCountry, SpokenLanguage,
};
pub use params::{DiscoverFilters, ListName, ListQuery, SearchParams, TrendingWindow};
pub use source::{CatalogFuture, CatalogSource};
