//! HTTP-level tests for the catalog client.

mod common;

use common::mock_catalog::{MockCatalog, MockResponse};
use common::{catalog_config, client_for, page_json};
use movie_browser::catalog::{
    CatalogClient, CatalogError, DiscoverFilters, ListQuery, MovieId, SearchParams,
    TrendingWindow,
};
use movie_browser::config::CatalogConfig;

#[tokio::test]
async fn test_popular_sends_page_and_api_key() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::json(&page_json(2, &[1, 2, 3])))
        .await;

    let client = client_for(&mock.base_url());
    let response = client.popular(2).await.unwrap();

    assert_eq!(response.page, 2);
    assert_eq!(response.results.len(), 3);
    assert_eq!(response.total_pages, 10);

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/movie/popular");
    assert_eq!(requests[0].param("api_key"), Some("test-key"));
    assert_eq!(requests[0].param("page"), Some("2"));
}

#[tokio::test]
async fn test_list_queries_hit_their_endpoints() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock.base_url());

    for query in [
        ListQuery::Trending {
            window: TrendingWindow::Day,
        },
        ListQuery::Trending {
            window: TrendingWindow::Week,
        },
        ListQuery::TopRated { page: 1 },
        ListQuery::NowPlaying { page: 1 },
        ListQuery::Upcoming { page: 3 },
    ] {
        client.list(query).await.unwrap();
    }

    let paths: Vec<String> = mock
        .captured_requests()
        .await
        .into_iter()
        .map(|r| r.path)
        .collect();
    assert_eq!(
        paths,
        vec![
            "/trending/movie/day",
            "/trending/movie/week",
            "/movie/top_rated",
            "/movie/now_playing",
            "/movie/upcoming",
        ]
    );
}

#[tokio::test]
async fn test_trailing_slash_on_base_url() {
    let mock = MockCatalog::start().await;
    let client = client_for(&format!("{}/", mock.base_url()));

    client.popular(1).await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/movie/popular");
}

#[tokio::test]
async fn test_no_api_key_param_without_credential() {
    let mock = MockCatalog::start().await;
    let config = CatalogConfig {
        api_key: None,
        ..catalog_config(&mock.base_url())
    };
    let client = CatalogClient::new(&config).unwrap();

    client.popular(1).await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].param("api_key"), None);
}

#[tokio::test]
async fn test_search_sends_query_page_and_year() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock.base_url());

    client
        .search(&SearchParams::new("Fight Club").year("1999"))
        .await
        .unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/search/movie");
    assert_eq!(requests[0].param("query"), Some("Fight Club"));
    assert_eq!(requests[0].param("page"), Some("1"));
    assert_eq!(requests[0].param("year"), Some("1999"));
}

#[tokio::test]
async fn test_blank_search_sends_nothing() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock.base_url());

    let err = client.search(&SearchParams::new("   ")).await.unwrap_err();

    assert!(matches!(err, CatalogError::InvalidArgument(_)));
    assert!(mock.captured_requests().await.is_empty());
}

#[tokio::test]
async fn test_details_decodes_full_record() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"{
            "id": 27205,
            "title": "Inception",
            "poster_path": "/inception.jpg",
            "release_date": "2010-07-16",
            "vote_average": 8.4,
            "runtime": 148,
            "budget": 160000000,
            "revenue": 825532764,
            "tagline": null,
            "genres": [{"id": 28, "name": "Action"}, {"id": 878, "name": "Science Fiction"}]
        }"#,
    ))
    .await;

    let client = client_for(&mock.base_url());
    let details = client.details(MovieId(27205)).await.unwrap();

    assert_eq!(details.id(), MovieId(27205));
    assert_eq!(details.summary.title, "Inception");
    assert_eq!(details.runtime, Some(148));
    assert_eq!(details.budget, 160_000_000);
    assert_eq!(details.tagline, "");
    assert_eq!(details.genres.len(), 2);

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/movie/27205");
}

#[tokio::test]
async fn test_similar_and_recommendations_paths() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock.base_url());

    client.similar(MovieId(550), 1).await.unwrap();
    client.recommendations(MovieId(550), 2).await.unwrap();

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/movie/550/similar");
    assert_eq!(requests[1].path, "/movie/550/recommendations");
    assert_eq!(requests[1].param("page"), Some("2"));
}

#[tokio::test]
async fn test_discover_sends_filters() {
    let mock = MockCatalog::start().await;
    let client = client_for(&mock.base_url());

    let filters = DiscoverFilters {
        genre: Some("28".to_string()),
        year: Some("2010".to_string()),
        ..DiscoverFilters::default()
    };
    client.discover(&filters).await.unwrap();

    let requests = mock.captured_requests().await;
    let req = &requests[0];
    assert_eq!(req.path, "/discover/movie");
    assert_eq!(req.param("with_genres"), Some("28"));
    assert_eq!(req.param("year"), Some("2010"));
    assert_eq!(req.param("sort_by"), Some("popularity.desc"));
    assert_eq!(req.param("include_adult"), Some("false"));
    assert_eq!(req.param("page"), Some("1"));
}

#[tokio::test]
async fn test_not_found_is_remote_error() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::error(404, "The resource could not be found."))
        .await;

    let client = client_for(&mock.base_url());
    let err = client.details(MovieId(1)).await.unwrap_err();

    match &err {
        CatalogError::Remote {
            status,
            status_text,
        } => {
            assert_eq!(*status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("expected Remote, got {:?}", other),
    }
    assert_eq!(err.to_string(), "API error: 404 Not Found");
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_server_error_is_remote_error() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::error(503, "down")).await;

    let client = client_for(&mock.base_url());
    let err = client.popular(1).await.unwrap_err();

    assert_eq!(err.kind(), "remote");
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let mock = MockCatalog::start().await;
    mock.enqueue_response(MockResponse::json(r#"{"page": 1, "results": [{"id": "x"}]}"#))
        .await;

    let client = client_for(&mock.base_url());
    let err = client.popular(1).await.unwrap_err();

    match err {
        CatalogError::Decode { path, .. } => assert_eq!(path, "results[0].id"),
        other => panic!("expected Decode, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_base_url_is_network_error() {
    let config = CatalogConfig {
        base_url: None,
        ..catalog_config("unused")
    };
    let client = CatalogClient::new(&config).unwrap();

    let err = client.popular(1).await.unwrap_err();
    assert!(matches!(err, CatalogError::Network { .. }));
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{}", port));

    let err = client.popular(1).await.unwrap_err();
    assert_eq!(err.kind(), "network");
}
