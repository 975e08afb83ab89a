use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::catalog::error::CatalogError;
use crate::catalog::models::{MovieDetails, MovieId, MoviesResponse};
use crate::catalog::params::{DiscoverFilters, ListQuery, SearchParams, TrendingWindow};
use crate::config::{CatalogConfig, CredentialStatus, SecureString};

type QueryParams = Vec<(&'static str, String)>;

/// HTTP client for the movie catalog.
///
/// Stateless apart from connection pooling; cheap to clone.
#[derive(Clone)]
pub struct CatalogClient {
    http: Client,
    base_url: Arc<str>,
    api_key: Option<SecureString>,
}

impl CatalogClient {
    /// Build a client from catalog configuration.
    ///
    /// A missing base URL or key is not an error: requests will fail
    /// individually with `Network` or `Remote`.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()?;
        Ok(Self::with_http(http, config))
    }

    /// Build a client around an existing reqwest `Client`.
    pub fn with_http(http: Client, config: &CatalogConfig) -> Self {
        let base_url = config
            .base_url
            .as_deref()
            .unwrap_or_default()
            .trim_end_matches('/');
        let api_key = match config.resolve_credential() {
            CredentialStatus::Configured(key) => Some(key),
            CredentialStatus::Unconfigured { .. } => None,
        };

        Self {
            http,
            base_url: Arc::from(base_url),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn trending(&self, window: TrendingWindow) -> Result<MoviesResponse, CatalogError> {
        self.get(&format!("/trending/movie/{}", window), Vec::new())
            .await
    }

    pub async fn popular(&self, page: u32) -> Result<MoviesResponse, CatalogError> {
        self.get("/movie/popular", page_param(page)).await
    }

    pub async fn top_rated(&self, page: u32) -> Result<MoviesResponse, CatalogError> {
        self.get("/movie/top_rated", page_param(page)).await
    }

    pub async fn now_playing(&self, page: u32) -> Result<MoviesResponse, CatalogError> {
        self.get("/movie/now_playing", page_param(page)).await
    }

    pub async fn upcoming(&self, page: u32) -> Result<MoviesResponse, CatalogError> {
        self.get("/movie/upcoming", page_param(page)).await
    }

    /// Free-text search.
    ///
    /// # Errors
    /// `InvalidArgument` for a blank query; nothing is sent in that case.
    pub async fn search(&self, params: &SearchParams) -> Result<MoviesResponse, CatalogError> {
        if params.is_blank() {
            return Err(CatalogError::InvalidArgument(
                "search query is required".to_string(),
            ));
        }
        self.get("/search/movie", params.to_query()).await
    }

    pub async fn details(&self, movie_id: MovieId) -> Result<MovieDetails, CatalogError> {
        self.get(&format!("/movie/{}", movie_id), Vec::new()).await
    }

    pub async fn similar(
        &self,
        movie_id: MovieId,
        page: u32,
    ) -> Result<MoviesResponse, CatalogError> {
        self.get(&format!("/movie/{}/similar", movie_id), page_param(page))
            .await
    }

    pub async fn recommendations(
        &self,
        movie_id: MovieId,
        page: u32,
    ) -> Result<MoviesResponse, CatalogError> {
        self.get(
            &format!("/movie/{}/recommendations", movie_id),
            page_param(page),
        )
        .await
    }

    pub async fn discover(
        &self,
        filters: &DiscoverFilters,
    ) -> Result<MoviesResponse, CatalogError> {
        self.get("/discover/movie", filters.to_query()).await
    }

    /// Dispatch one of the curated list queries.
    pub async fn list(&self, query: ListQuery) -> Result<MoviesResponse, CatalogError> {
        match query {
            ListQuery::Trending { window } => self.trending(window).await,
            ListQuery::Popular { page } => self.popular(page).await,
            ListQuery::TopRated { page } => self.top_rated(page).await,
            ListQuery::NowPlaying { page } => self.now_playing(page).await,
            ListQuery::Upcoming { page } => self.upcoming(page).await,
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: QueryParams,
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let mut request = self.http.get(&url);

        if let Some(key) = &self.api_key {
            request = request.query(&[("api_key", key.expose())]);
        }
        if !params.is_empty() {
            request = request.query(&params);
        }

        tracing::debug!(endpoint = %endpoint, "Catalog request");

        let response = request.send().await.map_err(|e| {
            tracing::warn!(endpoint = %endpoint, error = %e, "Catalog request failed");
            CatalogError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %endpoint, status = %status, "Catalog returned an error");
            return Err(CatalogError::Remote {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        decode(&body)
    }
}

fn page_param(page: u32) -> QueryParams {
    vec![("page", page.to_string())]
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, CatalogError> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| CatalogError::Decode {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}
