//! Client-side data layer for a movie catalog browser.
//!
//! - [`catalog`]: HTTP client for the remote catalog
//! - [`movies`]: remote-data slices (lists, search, details)
//! - [`favorites`]: persisted favorites list
//! - [`context`]: composition root owning both stores
//! - [`view`]: display helpers shared by views

pub mod catalog;
pub mod config;
pub mod context;
pub mod favorites;
pub mod logging;
pub mod movies;
pub mod mvi;
pub mod view;

pub use context::AppContext;
