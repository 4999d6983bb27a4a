mod common;

use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_redirect_success() {
    let (server, links, _visits) = common::create_test_server();

    links.seed("go123456", "https://example.com/target");

    let response = server.get("/links/go123456").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_unknown_falls_back_to_home() {
    // Visitors never see an error status; unknown links go home.
    let (server, _links, _visits) = common::create_test_server();

    let response = server.get("/links/missing1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "/");
}

#[tokio::test]
async fn test_redirect_records_visit() {
    let (server, links, visits) = common::create_test_server();

    let link = links.seed("track123", "https://example.com");

    let response = server
        .get("/links/track123")
        .add_header("X-Forwarded-For", "203.0.113.7, 10.0.0.1")
        .add_header("User-Agent", "Mozilla/5.0 (Linux; Android 14; Pixel 8)")
        .add_header("Referer", "https://google.com")
        .await;

    assert_eq!(response.status_code(), 302);

    let recorded = visits.recorded();
    assert_eq!(recorded.len(), 1);

    let visit = &recorded[0];
    assert_eq!(visit.link_id, link.id);
    // First forwarded-for entry only.
    assert_eq!(visit.visitor_ip.as_deref(), Some("203.0.113.7"));
    assert_eq!(visit.device.as_deref(), Some("Android"));
    assert_eq!(visit.referer.as_deref(), Some("https://google.com"));
    assert_eq!(
        visit.user_agent.as_deref(),
        Some("Mozilla/5.0 (Linux; Android 14; Pixel 8)")
    );
    assert!(visit.country.is_none());
    assert!(visit.city.is_none());
}

#[tokio::test]
async fn test_redirect_without_headers_records_nulls() {
    let (server, links, visits) = common::create_test_server();

    links.seed("bare1234", "https://example.com");

    let response = server.get("/links/bare1234").await;

    assert_eq!(response.status_code(), 302);

    let recorded = visits.recorded();
    assert_eq!(recorded.len(), 1);
    assert!(recorded[0].visitor_ip.is_none());
    assert!(recorded[0].user_agent.is_none());
    assert!(recorded[0].referer.is_none());
    assert!(recorded[0].device.is_none());
}

#[tokio::test]
async fn test_redirect_survives_recording_failure() {
    // Visit recording is best-effort: an insert failure is logged, and
    // the visitor is still redirected to the original URL.
    let (server, links, visits) = common::create_test_server();

    links.seed("resil123", "https://example.com/still-works");
    visits.fail_record.store(true, Ordering::SeqCst);

    let response = server.get("/links/resil123").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(
        response.header("location"),
        "https://example.com/still-works"
    );
    assert!(visits.recorded().is_empty());
}
