//! Request parameters for catalog queries.

use std::fmt;

/// Time window for the trending list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrendingWindow {
    Day,
    #[default]
    Week,
}

impl TrendingWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingWindow::Day => "day",
            TrendingWindow::Week => "week",
        }
    }
}

impl fmt::Display for TrendingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-text search request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchParams {
    pub query: String,
    /// Defaults to 1 when unset.
    pub page: Option<u32>,
    /// Release year filter, e.g. "1999".
    pub year: Option<String>,
}

impl SearchParams {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// True when the query has nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.query.trim().is_empty()
    }

    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("query", self.query.clone()),
            ("page", self.page.unwrap_or(1).to_string()),
        ];
        push_non_empty(&mut params, "year", self.year.as_deref());
        params
    }
}

/// Filters for the discover endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverFilters {
    pub page: u32,
    /// Comma-separated genre ids, passed as `with_genres`.
    pub genre: Option<String>,
    pub year: Option<String>,
    pub sort_by: String,
    pub include_adult: bool,
}

impl Default for DiscoverFilters {
    fn default() -> Self {
        Self {
            page: 1,
            genre: None,
            year: None,
            sort_by: "popularity.desc".to_string(),
            include_adult: false,
        }
    }
}

impl DiscoverFilters {
    pub(crate) fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("sort_by", self.sort_by.clone()),
            ("include_adult", self.include_adult.to_string()),
        ];
        push_non_empty(&mut params, "with_genres", self.genre.as_deref());
        push_non_empty(&mut params, "year", self.year.as_deref());
        params
    }
}

fn push_non_empty(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
    }
}

/// Named remote-data list backed by its own slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListName {
    Trending,
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
    Search,
}

impl ListName {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListName::Trending => "trending",
            ListName::Popular => "popular",
            ListName::TopRated => "top_rated",
            ListName::NowPlaying => "now_playing",
            ListName::Upcoming => "upcoming",
            ListName::Search => "search",
        }
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fetch request for one of the curated lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListQuery {
    Trending { window: TrendingWindow },
    Popular { page: u32 },
    TopRated { page: u32 },
    NowPlaying { page: u32 },
    Upcoming { page: u32 },
}

impl ListQuery {
    /// The slice this query writes into.
    pub fn list(&self) -> ListName {
        match self {
            ListQuery::Trending { .. } => ListName::Trending,
            ListQuery::Popular { .. } => ListName::Popular,
            ListQuery::TopRated { .. } => ListName::TopRated,
            ListQuery::NowPlaying { .. } => ListName::NowPlaying,
            ListQuery::Upcoming { .. } => ListName::Upcoming,
        }
    }
}
