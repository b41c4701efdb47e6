//! Tests for the exports resource area

use std::sync::Arc;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;
use crate::error::Error;
use crate::http::Transport;

fn client_for(server: &MockServer) -> ExportsClient {
    ExportsClient::new(Arc::new(Transport::with_host(server.uri(), "test-token")))
}

#[tokio::test]
async fn test_list_exports_with_pagination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/assets/42/exports"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "items": [{
                        "id": 3,
                        "assetId": 42,
                        "dateAdded": "2021-02-03T10:00:00.000Z",
                        "status": "COMPLETE",
                        "bytesExported": 8192,
                        "to": {"type": "S3", "bucket": "my-bucket", "prefix": "exports/"}
                    }]
                }))
                .insert_header(
                    "Link",
                    "<https://api.cesium.com/v1/assets/42/exports?page=2>; rel=\"next\"",
                ),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let (response, links) = client.list(42).await.unwrap();

    assert_eq!(response.items.len(), 1);
    let export = &response.items[0];
    assert_eq!(export.status, Some(ExportStatus::Complete));
    assert_eq!(
        export.to.as_ref().unwrap().bucket.as_deref(),
        Some("my-bucket")
    );

    assert_eq!(
        links.unwrap().next.as_deref(),
        Some("https://api.cesium.com/v1/assets/42/exports?page=2")
    );
}

#[tokio::test]
async fn test_export_posts_s3_destination() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/assets/42/exports"))
        .and(body_json(json!({
            "format": "S3",
            "bucket": "my-bucket",
            "prefix": "exports/",
            "accessKeyId": "AK",
            "secretAccessKey": "SK"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "assetId": 42,
            "status": "QUEUED"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = ExportAssetRequest::s3("my-bucket", "exports/", "AK", "SK");
    let export = client.export(42, &request).await.unwrap();

    assert_eq!(export.id, Some(4));
    assert_eq!(export.status, Some(ExportStatus::Queued));
}

#[tokio::test]
async fn test_export_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/assets/42/exports/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4,
            "assetId": 42,
            "status": "IN_PROGRESS",
            "bytesExported": 100
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let export = client.status(42, 4).await.unwrap();
    assert_eq!(export.status, Some(ExportStatus::InProgress));
}

#[tokio::test]
async fn test_export_requires_plan_upgrade() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/assets/42/exports"))
        .respond_with(ResponseTemplate::new(402).set_body_string("upgrade your plan"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let request = ExportAssetRequest::s3("my-bucket", "exports/", "AK", "SK");
    let err = client.export(42, &request).await.unwrap_err();

    assert!(matches!(err, Error::PlanUpgradeRequired(_)));
    assert!(err.to_string().contains("upgrade your plan"));
}
