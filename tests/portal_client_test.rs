//! Tests for the HTTP portal client against a local mock server

use dgca_harvest::{ContentId, ContentSource, HarvestConfig, PortalClient, ServiceName, TransportError};
use mockito::Matcher;

fn config_for(server: &mockito::ServerGuard) -> HarvestConfig {
    HarvestConfig::builder()
        .output_dir(".")
        .endpoint(format!("{}/digigov-portal/scan", server.url()))
        .request_timeout_secs(5)
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_fetch_posts_form_with_metadata() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/digigov-portal/scan")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("contentId".into(), "9467".into()),
            Matcher::UrlEncoded("serviceName".into(), "fetchRulebookContentDtlsList".into()),
            Matcher::UrlEncoded("ruleBookId".into(), "259".into()),
            Matcher::UrlEncoded("actionVal".into(), "viewStaticData".into()),
        ]))
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let client = PortalClient::new(&config_for(&server)).unwrap();
    let body = client
        .fetch(&ContentId::from("9467"), ServiceName::NodeContent)
        .await
        .unwrap();

    assert_eq!(body, r#"{"data":[]}"#);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_root_listing_uses_parent_service() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/digigov-portal/scan")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("contentId".into(), "4184".into()),
            Matcher::UrlEncoded("serviceName".into(), "getParentData".into()),
        ]))
        .with_body("<ul></ul>")
        .create_async()
        .await;

    let client = PortalClient::new(&config_for(&server)).unwrap();
    let body = client
        .fetch(&ContentId::from("4184"), ServiceName::ParentListing)
        .await
        .unwrap();

    assert_eq!(body, "<ul></ul>");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_a_transport_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/digigov-portal/scan")
        .with_status(503)
        .with_body("Service Unavailable")
        .create_async()
        .await;

    let client = PortalClient::new(&config_for(&server)).unwrap();
    let err = client
        .fetch(&ContentId::from("9467"), ServiceName::NodeContent)
        .await
        .unwrap_err();

    match err {
        TransportError::Status {
            content_id, status, ..
        } => {
            assert_eq!(content_id.as_str(), "9467");
            assert_eq!(status, 503);
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_request_error() {
    let config = HarvestConfig::builder()
        .output_dir(".")
        .endpoint("http://127.0.0.1:1/scan")
        .request_timeout_secs(2)
        .build()
        .unwrap();

    let client = PortalClient::new(&config).unwrap();
    let err = client
        .fetch(&ContentId::from("9467"), ServiceName::NodeContent)
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Request { .. }));
}
