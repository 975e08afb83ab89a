use crate::catalog::{image_url, ImageSize, MovieId, MovieSummary};
use crate::favorites::{release_year, FavoriteEntry};

/// Anything the movie grid can render.
///
/// Catalog results and favorites share a card layout but not a type; the
/// view wraps them here once instead of probing fields at render time.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieCard {
    Catalog(MovieSummary),
    Favorite(FavoriteEntry),
}

impl MovieCard {
    pub fn id(&self) -> MovieId {
        match self {
            MovieCard::Catalog(movie) => movie.id,
            MovieCard::Favorite(entry) => entry.id,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            MovieCard::Catalog(movie) => &movie.title,
            MovieCard::Favorite(entry) => &entry.title,
        }
    }

    pub fn poster_path(&self) -> Option<&str> {
        match self {
            MovieCard::Catalog(movie) => movie.poster_path.as_deref(),
            MovieCard::Favorite(entry) => entry.poster_path.as_deref(),
        }
    }

    pub fn release_date(&self) -> &str {
        match self {
            MovieCard::Catalog(movie) => &movie.release_date,
            MovieCard::Favorite(entry) => &entry.release_date,
        }
    }

    pub fn vote_average(&self) -> f64 {
        match self {
            MovieCard::Catalog(movie) => movie.vote_average,
            MovieCard::Favorite(entry) => entry.vote_average,
        }
    }

    /// Only catalog cards carry an overview.
    pub fn overview(&self) -> Option<&str> {
        match self {
            MovieCard::Catalog(movie) if !movie.overview.is_empty() => Some(&movie.overview),
            _ => None,
        }
    }

    pub fn poster_url(&self, size: ImageSize) -> String {
        image_url(self.poster_path(), size)
    }

    /// Release year, or "TBA" when there is no date.
    pub fn release_year_label(&self) -> String {
        release_year(self.release_date())
            .map(|year| year.to_string())
            .unwrap_or_else(|| "TBA".to_string())
    }

    /// Rating with one decimal, e.g. "8.4".
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.vote_average())
    }
}

impl From<MovieSummary> for MovieCard {
    fn from(movie: MovieSummary) -> Self {
        MovieCard::Catalog(movie)
    }
}

impl From<FavoriteEntry> for MovieCard {
    fn from(entry: FavoriteEntry) -> Self {
        MovieCard::Favorite(entry)
    }
}

/// Wrap a page of results for the grid.
pub fn catalog_cards(movies: &[MovieSummary]) -> Vec<MovieCard> {
    movies.iter().cloned().map(MovieCard::Catalog).collect()
}

/// Wrap the favorites list for the grid.
pub fn favorite_cards(entries: &[FavoriteEntry]) -> Vec<MovieCard> {
    entries.iter().cloned().map(MovieCard::Favorite).collect()
}
