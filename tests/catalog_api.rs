//! Integration tests for the catalog endpoints and the fixture catalog

mod common;

use axum::http::StatusCode;
use beer_cart::catalog::load_from_path;
use common::{beer_ids, create_test_app, fixture_path, send_request};

#[test]
fn test_fixture_catalog_loads_sorted() {
    let store = load_from_path(fixture_path()).unwrap();

    let ids: Vec<_> = store.list_all().iter().map(|b| b.id).collect();
    assert_eq!(ids, (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_list_beers_sorted() {
    let app = create_test_app();

    for uri in ["/beer", "/beer/"] {
        let (status, body) = send_request(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::OK);

        let ids = beer_ids(&body);
        assert_eq!(ids.len(), 12);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }
}

#[tokio::test]
async fn test_search_ipa() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/beer/search?q=IPA", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(beer_ids(&body), vec![1, 9, 12]);
}

#[tokio::test]
async fn test_search_matches_food_pairing() {
    let app = create_test_app();

    let (_, body) = send_request(&app, "GET", "/beer/search?q=crab", None).await;
    assert_eq!(beer_ids(&body), vec![2, 4, 8]);
}

#[tokio::test]
async fn test_search_is_case_sensitive() {
    let app = create_test_app();

    let (_, upper) = send_request(&app, "GET", "/beer/search?q=Yuzu", None).await;
    let (_, lower) = send_request(&app, "GET", "/beer/search?q=yuzu", None).await;

    assert_eq!(beer_ids(&upper), vec![3, 7]);
    assert_eq!(beer_ids(&lower), vec![3]);
}

#[tokio::test]
async fn test_empty_search_returns_everything() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/beer/search?q=", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(beer_ids(&body).len(), 12);
}

#[tokio::test]
async fn test_search_without_query_is_rejected() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/beer/search", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_get_beer() {
    let app = create_test_app();

    let (status, body) = send_request(&app, "GET", "/beer/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Trashy Blonde");
    assert_eq!(body["volume"]["unit"], "litres");
    // Whole numbers keep their integer form on the wire
    assert_eq!(body["target_fg"], serde_json::json!(1010));
    assert_eq!(body["ebc"], serde_json::json!(20));
    assert_eq!(body["ph"], serde_json::json!(4.4));

    let (status, _) = send_request(&app, "GET", "/beer/404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send_request(&app, "GET", "/beer/pale", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
