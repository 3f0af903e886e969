use crate::helpers::mock_controller::{USERNAME, mock_cluster_status, mock_login, session_builder};
use alb_sdk::errors::AviError;
use alb_sdk::session::{ApiOptions, AviSessionBuilder};
use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use serde_json::json;
use std::time::{Duration, Instant};

#[test]
fn test_retryable_status_is_retried_until_max_retries() {
    let server = MockServer::start();
    let login = mock_login(&server);
    let status = mock_cluster_status(&server, 200);
    let unavailable = server.mock(|when, then| {
        when.method(GET).path("/api/pool");
        then.status(503).body("service unavailable");
    });

    let session = session_builder(&server).max_api_retries(3).build().unwrap();
    let result = session.get_raw("api/pool", &ApiOptions::default());

    unavailable.assert_hits(3);
    status.assert_hits(3);
    login.assert_hits(4);
    assert_eq!(
        result,
        Err(AviError::Controller {
            verb: "GET".to_string(),
            url: server.url("/api/pool"),
            status: 503,
            message: None,
        })
    );
}

#[test]
fn test_retry_waits_between_attempts() {
    let server = MockServer::start();
    mock_login(&server);
    mock_cluster_status(&server, 200);
    let throttled = server.mock(|when, then| {
        when.method(POST).path("/api/vsvip");
        then.status(419);
    });

    let session = session_builder(&server)
        .max_api_retries(3)
        .api_retry_interval(Duration::from_millis(100))
        .build()
        .unwrap();
    let started = Instant::now();
    let result = session.post_raw("api/vsvip", &json!({"name": "vip"}), &ApiOptions::default());

    throttled.assert_hits(3);
    assert!(started.elapsed() >= Duration::from_millis(200));
    assert_eq!(result.unwrap_err().http_status(), Some(419));
}

#[test]
fn test_disabled_status_check_returns_first_failure() {
    let server = MockServer::start();
    mock_login(&server);
    let status = mock_cluster_status(&server, 200);
    let bad_gateway = server.mock(|when, then| {
        when.method(GET).path("/api/cloud");
        then.status(502);
    });

    let session = session_builder(&server)
        .disable_controller_status_check(true)
        .build()
        .unwrap();
    let result = session.get_raw("api/cloud", &ApiOptions::default());

    bad_gateway.assert_hits(1);
    status.assert_hits(0);
    assert_eq!(result.unwrap_err().http_status(), Some(502));
}

#[test]
fn test_internal_server_error_is_returned_without_retry() {
    let server = MockServer::start();
    mock_login(&server);
    let status = mock_cluster_status(&server, 200);
    let broken = server.mock(|when, then| {
        when.method(GET).path("/api/serviceenginegroup");
        then.status(500).json_body(json!({"error": "Internal error while fetching objects"}));
    });

    let session = session_builder(&server).build().unwrap();
    let result = session.get_raw("api/serviceenginegroup", &ApiOptions::default());

    broken.assert_hits(1);
    status.assert_hits(0);
    match result {
        Err(AviError::Controller { status, message, .. }) => {
            assert_eq!(status, 500);
            assert_eq!(message.as_deref(), Some("Internal error while fetching objects"));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_controller_unavailable_after_status_checks() {
    let server = MockServer::start();
    mock_login(&server);
    let status = mock_cluster_status(&server, 503);
    let down = server.mock(|when, then| {
        when.method(GET).path("/api/network");
        then.status(502);
    });

    let session = session_builder(&server).build().unwrap();
    let result = session.get_raw("api/network", &ApiOptions::default());

    down.assert_hits(1);
    status.assert_hits(2);
    assert_eq!(
        result,
        Err(AviError::ControllerUnavailable {
            url: server.url("/api/cluster/status"),
            attempts: 2,
        })
    );
}

#[test]
fn test_transport_error_without_status_check() {
    // nothing listens on port 1
    let session = AviSessionBuilder::new("http://127.0.0.1:1", USERNAME)
        .password("password")
        .lazy_authentication(true)
        .disable_controller_status_check(true)
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();

    let result = session.get_raw("api/pool", &ApiOptions::default());
    assert!(matches!(result, Err(AviError::Transport { .. })), "{result:?}");
}
