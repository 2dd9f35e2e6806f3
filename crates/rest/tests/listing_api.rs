//! Integration tests for the listing and count endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};

use common::{create_test_server, ids};
use vigil_persistence::types::FuneralHomeRecord;

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_default_listing() {
    let (server, _backend) = create_test_server();

    let response = server.get("/funeral-homes").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(ids(&body), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_record_shape() {
    let (server, _backend) = create_test_server();

    let response = server
        .get("/funeral-homes")
        .add_query_param("phone", "217-555-0101")
        .await;
    response.assert_status_ok();
    response.assert_json(&json!([{
        "internal_id": 1,
        "cluster_id": "c-0001",
        "name": "Oak Grove Chapel",
        "street": "12 Elm St",
        "city": "Springfield",
        "region": "IL",
        "postal_code": "62701",
        "country": "US",
        "phone": "217-555-0101",
        "website": "https://oakgrove.example",
        "latitude": 39.7817,
        "longitude": -89.6501,
        "sources": "[\"nfda\"]",
        "source_ids": "[\"N-1\"]",
        "cluster_size": 2
    }]));
}

#[tokio::test]
async fn test_absent_attributes_are_null() {
    let (server, _backend) = create_test_server();

    let body: Value = server
        .get("/funeral-homes")
        .add_query_param("country", "us")
        .await
        .json();

    let record = &body[0];
    assert_eq!(record["internal_id"], 6);
    assert!(record["name"].is_null());
    assert!(record["website"].is_null());
    assert!(record["cluster_size"].is_null());
}

#[tokio::test]
async fn test_city_filter_is_case_insensitive_substring() {
    let (server, _backend) = create_test_server();

    let body: Value = server
        .get("/funeral-homes")
        .add_query_param("city", "SPRING")
        .await
        .json();
    assert_eq!(ids(&body), vec![1, 5, 6]);
}

#[tokio::test]
async fn test_region_filter_is_exact_ignoring_case() {
    let (server, _backend) = create_test_server();

    let body: Value = server
        .get("/funeral-homes")
        .add_query_param("region", "on")
        .await
        .json();
    assert_eq!(ids(&body), vec![3, 4]);
}

#[tokio::test]
async fn test_country_filter_is_case_sensitive() {
    let (server, _backend) = create_test_server();

    let body: Value = server
        .get("/funeral-homes")
        .add_query_param("country", "US")
        .await
        .json();
    assert_eq!(ids(&body), vec![1, 2, 5]);
}

#[tokio::test]
async fn test_combined_filters() {
    let (server, _backend) = create_test_server();

    let body: Value = server
        .get("/funeral-homes")
        .add_query_param("name", "funeral")
        .add_query_param("region", "ON")
        .add_query_param("postal_code", "m5v")
        .await
        .json();
    assert_eq!(ids(&body), vec![4]);
}

#[tokio::test]
async fn test_empty_filter_values_are_ignored() {
    let (server, _backend) = create_test_server();

    let body: Value = server.get("/funeral-homes?name=&city=&country=").await.json();
    assert_eq!(ids(&body).len(), 6);
}

#[tokio::test]
async fn test_unknown_parameters_are_ignored() {
    let (server, _backend) = create_test_server();

    let response = server.get("/funeral-homes?page=7&q=oak").await;
    response.assert_status_ok();
    assert_eq!(ids(&response.json()).len(), 6);
}

#[tokio::test]
async fn test_repeated_filter_takes_last_value() {
    let (server, _backend) = create_test_server();

    let response = server.get("/funeral-homes?city=a&city=Toronto").await;
    response.assert_status_ok();
    assert_eq!(ids(&response.json()), vec![4]);

    let response = server.get("/funeral-homes?limit=1&limit=3").await;
    response.assert_status_ok();
    assert_eq!(ids(&response.json()), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_sort_by_name_puts_null_names_first() {
    let (server, _backend) = create_test_server();

    let body: Value = server.get("/funeral-homes?sort_by=name").await.json();
    assert_eq!(ids(&body), vec![6, 5, 4, 1, 2, 3]);

    let body: Value = server
        .get("/funeral-homes?sort_by=name&sort_dir=desc")
        .await
        .json();
    assert_eq!(ids(&body), vec![3, 2, 1, 4, 5, 6]);
}

#[tokio::test]
async fn test_sort_desc_with_page() {
    let (server, _backend) = create_test_server();

    let body: Value = server
        .get("/funeral-homes")
        .add_query_param("sort_by", "cluster_size")
        .add_query_param("sort_dir", "desc")
        .add_query_param("country", "US")
        .add_query_param("limit", "2")
        .await
        .json();
    assert_eq!(ids(&body), vec![5, 1]);
}

#[tokio::test]
async fn test_sort_dir_is_case_insensitive() {
    let (server, _backend) = create_test_server();

    let body: Value = server
        .get("/funeral-homes?sort_by=internal_id&sort_dir=DESC&limit=2")
        .await
        .json();
    assert_eq!(ids(&body), vec![6, 5]);
}

#[tokio::test]
async fn test_offset_past_end_is_empty() {
    let (server, _backend) = create_test_server();

    let response = server.get("/funeral-homes?offset=100").await;
    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[tokio::test]
async fn test_limit_bounds_are_inclusive() {
    let (server, _backend) = create_test_server();

    server.get("/funeral-homes?limit=1").await.assert_status_ok();
    server.get("/funeral-homes?limit=500").await.assert_status_ok();
}

// ============================================================================
// Validation
// ============================================================================

#[tokio::test]
async fn test_invalid_sort_by() {
    let (server, _backend) = create_test_server();

    let response = server.get("/funeral-homes?sort_by=website").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({
        "detail": "Invalid sort_by. Choose one of: internal_id, name, city, region, postal_code, cluster_size"
    }));
}

#[tokio::test]
async fn test_invalid_sort_dir() {
    let (server, _backend) = create_test_server();

    let response = server.get("/funeral-homes?sort_dir=sideways").await;
    response.assert_status(StatusCode::BAD_REQUEST);
    response.assert_json(&json!({"detail": "sort_dir must be 'asc' or 'desc'"}));
}

#[tokio::test]
async fn test_limit_out_of_range() {
    let (server, _backend) = create_test_server();

    for limit in ["0", "501", "-3"] {
        let response = server.get("/funeral-homes").add_query_param("limit", limit).await;
        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    }
}

#[tokio::test]
async fn test_negative_offset() {
    let (server, _backend) = create_test_server();

    let response = server.get("/funeral-homes?offset=-1").await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert!(body["detail"].as_str().unwrap().contains("offset"));
}

#[tokio::test]
async fn test_non_integer_limit() {
    let (server, _backend) = create_test_server();

    let response = server.get("/funeral-homes?limit=lots").await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    response.assert_json(&json!({"detail": "limit must be an integer, got 'lots'"}));
}

// ============================================================================
// Count
// ============================================================================

#[tokio::test]
async fn test_count_all() {
    let (server, _backend) = create_test_server();

    let response = server.get("/funeral-homes/count").await;
    response.assert_status_ok();
    response.assert_json(&json!({"total": 6}));
}

#[tokio::test]
async fn test_count_ignores_paging_and_sort() {
    let (server, _backend) = create_test_server();

    let response = server
        .get("/funeral-homes/count?city=spring&limit=1&offset=50&sort_by=bogus")
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({"total": 3}));
}

#[tokio::test]
async fn test_count_agrees_with_listing() {
    let (server, _backend) = create_test_server();

    for filters in [
        "",
        "city=spring",
        "region=il",
        "country=CA&name=maple",
        "postal_code=0",
        "phone=000",
    ] {
        let listing: Value = server
            .get(&format!("/funeral-homes?limit=500&{}", filters))
            .await
            .json();
        let count: Value = server
            .get(&format!("/funeral-homes/count?{}", filters))
            .await
            .json();
        assert_eq!(
            ids(&listing).len() as u64,
            count["total"].as_u64().unwrap(),
            "filters {:?}",
            filters
        );
    }
}

#[tokio::test]
async fn test_repeated_count_filter_takes_last_value() {
    let (server, _backend) = create_test_server();

    let response = server
        .get("/funeral-homes/count?country=CA&country=US")
        .await;
    response.assert_status_ok();
    response.assert_json(&json!({"total": 3}));
}

#[tokio::test]
async fn test_count_exceeds_largest_page() {
    let (server, backend) = create_test_server();

    let extra: Vec<FuneralHomeRecord> = (100..720)
        .map(|id| FuneralHomeRecord::new(id).with_city("Springfield"))
        .collect();
    backend.import_records(&extra).unwrap();

    let listing: Value = server
        .get("/funeral-homes?city=SPRING&limit=500")
        .await
        .json();
    let count: Value = server.get("/funeral-homes/count?city=SPRING").await.json();

    assert_eq!(ids(&listing).len(), 500);
    assert_eq!(count, json!({"total": 623}));
}

#[tokio::test]
async fn test_count_reflects_newly_loaded_records() {
    let (server, backend) = create_test_server();

    backend
        .import_records(&[FuneralHomeRecord::new(7).with_city("Springfield")])
        .unwrap();

    let response = server.get("/funeral-homes/count?city=springfield").await;
    response.assert_json(&json!({"total": 4}));
}
