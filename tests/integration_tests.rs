//! Integration tests using a mock HTTP server
//!
//! Exercises the full flow: client → transport → status classification →
//! DTO decoding → pagination cursors.

use cesium_ion::assets::{
    AssetOptions, AssetStatus, AssetType, CreateAssetRequest, ListAssetsParams, ModifyAssetRequest,
};
use cesium_ion::exports::ExportAssetRequest;
use cesium_ion::{Error, IonClient, PaginationLinks};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Pagination walk
// ============================================================================

#[tokio::test]
async fn test_paged_listing_walk() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/assets"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "items": [{"id": "1", "name": "first", "type": "IMAGERY"}]
                }))
                .insert_header(
                    "Link",
                    format!(
                        "<{}/v1/assets?limit=1&page=2>; rel=\"next\"",
                        mock_server.uri()
                    )
                    .as_str(),
                ),
        )
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/assets"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "items": [{"id": "2", "name": "second", "type": "IMAGERY"}]
                }))
                .insert_header(
                    "Link",
                    format!(
                        "<{}/v1/assets?limit=1&page=1>; rel=\"prev\"",
                        mock_server.uri()
                    )
                    .as_str(),
                ),
        )
        .mount(&mock_server)
        .await;

    let client = IonClient::with_host(mock_server.uri(), "test-token");

    let params = ListAssetsParams {
        limit: 1,
        ..Default::default()
    };
    let (page_one, links) = client.assets().list(&params).await.unwrap();
    assert_eq!(page_one.items[0].name, "first");

    // Follow the next cursor: it is an absolute URL the transport fetches
    // directly, bypassing the base URL.
    let next_url = links.unwrap().next.unwrap();
    let response = client
        .transport()
        .get(&next_url, &std::collections::HashMap::new())
        .await
        .unwrap();
    let page_two = PaginationLinks::from_headers(&response.headers).unwrap().unwrap();

    assert_eq!(response.body["items"][0]["name"], "second");
    assert!(page_two.next.is_none());
    assert!(page_two.prev.is_some());
}

// ============================================================================
// Asset lifecycle
// ============================================================================

#[tokio::test]
async fn test_asset_lifecycle() {
    let mock_server = MockServer::start().await;
    let client = IonClient::with_host(mock_server.uri(), "lifecycle-token");

    Mock::given(method("POST"))
        .and(path("/v1/assets"))
        .and(header("Authorization", "Bearer lifecycle-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "assetMetadata": {"id": "7", "name": "survey", "type": "GEOJSON", "status": "AWAITING_FILES"}
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/assets/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "7", "name": "survey", "type": "GEOJSON", "status": "COMPLETE"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("PATCH"))
        .and(path("/v1/assets/7"))
        .and(body_json(json!({"description": "city survey"})))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/assets/7"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let assets = client.assets();

    let created = assets
        .create(&CreateAssetRequest {
            name: "survey".to_string(),
            description: None,
            attribution: None,
            asset_type: AssetType::GeoJson,
            percent_complete: None,
            options: AssetOptions::GeoJson,
            from: None,
        })
        .await
        .unwrap();
    assert_eq!(
        created.asset_metadata.unwrap().status,
        Some(AssetStatus::AwaitingFiles)
    );

    let fetched = assets.get(7).await.unwrap();
    assert_eq!(fetched.status, Some(AssetStatus::Complete));

    assets
        .modify(
            7,
            &ModifyAssetRequest {
                description: Some("city survey".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assets.delete(7).await.unwrap();
}

// ============================================================================
// Error surfacing
// ============================================================================

#[tokio::test]
async fn test_classified_errors_surface_through_resource_clients() {
    let mock_server = MockServer::start().await;
    let client = IonClient::with_host(mock_server.uri(), "test-token");

    Mock::given(method("POST"))
        .and(path("/v1/assets/42/exports"))
        .respond_with(ResponseTemplate::new(402).set_body_string("upgrade required"))
        .mount(&mock_server)
        .await;

    let request = ExportAssetRequest::s3("bucket", "prefix/", "AK", "SK");
    let err = client.exports().export(42, &request).await.unwrap_err();

    assert!(matches!(err, Error::PlanUpgradeRequired(_)));
    let msg = err.to_string();
    assert!(msg.contains("POST"));
    assert!(msg.contains("/v1/assets/42/exports"));
    assert!(msg.contains("402"));
    assert!(msg.contains("upgrade required"));
}

#[tokio::test]
async fn test_malformed_link_header_fails_the_listing() {
    let mock_server = MockServer::start().await;
    let client = IonClient::with_host(mock_server.uri(), "test-token");

    Mock::given(method("GET"))
        .and(path("/v1/assets"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"items": []}))
                .insert_header("Link", "this is not a link header"),
        )
        .mount(&mock_server)
        .await;

    let err = client
        .assets()
        .list(&ListAssetsParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MalformedResponse { .. }));
}

// ============================================================================
// Concurrency
// ============================================================================

#[tokio::test]
async fn test_concurrent_calls_share_one_transport() {
    let mock_server = MockServer::start().await;
    let client = IonClient::with_host(mock_server.uri(), "test-token");

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "scopes": ["profile:read"]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/tokens/default"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "d", "isDefault": true, "scopes": []
        })))
        .mount(&mock_server)
        .await;

    let user = client.user();
    let tokens = client.tokens();
    let (profile, token) = tokio::join!(
        user.profile(),
        tokens.default_token(),
    );

    assert_eq!(profile.unwrap().id, 1);
    assert_eq!(token.unwrap().is_default, Some(true));
}
