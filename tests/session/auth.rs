use crate::helpers::mock_controller::{
    CSRF_TOKEN, PASSWORD, USERNAME, mock_cluster_status, mock_login, session_builder, session_cookie,
};
use crate::helpers::utilities::{init, teardown};
use alb_sdk::errors::AviError;
use alb_sdk::session::{ApiOptions, AviSessionBuilder};
use httpmock::Method::{GET, POST};
use httpmock::MockServer;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[test]
fn test_login_then_send_csrf_and_session_cookies() {
    let start = init();
    let server = MockServer::start();
    let login = mock_login(&server);
    let pools = server.mock(|when, then| {
        when.method(GET)
            .path("/api/pool")
            .header("X-CSRFToken", CSRF_TOKEN)
            .header("Cookie", session_cookie())
            .header("X-Avi-Tenant", "team-a")
            .header("X-Avi-Version", "22.1.3")
            .header("X-Request-ID", "req-42")
            .header("X-Custom", "custom")
            .header("Referer", server.url("/"));
        then.status(200)
            .json_body(json!({"count": 1, "results": [{"name": "pool-1", "uuid": "pool-1-uuid"}]}));
    });

    let session = session_builder(&server)
        .tenant("team-a")
        .version("22.1.3")
        .user_header("X-Custom", "custom")
        .build()
        .unwrap();
    assert!(session.is_authenticated());

    let results: Vec<Value> = session
        .get_collection("api/pool", &ApiOptions::new().request_id("req-42"))
        .unwrap();

    login.assert();
    pools.assert();
    assert_eq!(results[0]["name"], "pool-1");
    teardown(start, "test_login_then_send_csrf_and_session_cookies");
}

#[test]
fn test_per_call_tenant_overrides_session_tenant() {
    let server = MockServer::start();
    mock_login(&server);
    let tenant_b = server.mock(|when, then| {
        when.method(GET).path("/api/vsvip").header("X-Avi-Tenant", "team-b");
        then.status(200).json_body(json!({"count": 0, "results": []}));
    });

    let session = session_builder(&server).build().unwrap();
    assert_eq!(session.tenant(), "admin");
    let _: Vec<Value> = session
        .get_collection("api/vsvip", &ApiOptions::new().tenant("team-b"))
        .unwrap();
    tenant_b.assert();

    session.set_tenant("team-b");
    let _: Vec<Value> = session.get_collection("api/vsvip", &ApiOptions::default()).unwrap();
    tenant_b.assert_hits(2);
}

#[test]
fn test_lazy_authentication_logs_in_on_first_request() {
    let server = MockServer::start();
    let login = mock_login(&server);
    let tenants = server.mock(|when, then| {
        when.method(GET).path("/api/tenant").header("X-CSRFToken", CSRF_TOKEN);
        then.status(200).json_body(json!({"count": 0, "results": []}));
    });

    let session = session_builder(&server).lazy_authentication(true).build().unwrap();
    login.assert_hits(0);
    assert!(!session.is_authenticated());

    let _: Vec<Value> = session.get_collection("api/tenant", &ApiOptions::default()).unwrap();
    let _: Vec<Value> = session.get_collection("api/tenant", &ApiOptions::default()).unwrap();

    login.assert_hits(1);
    tenants.assert_hits(2);
}

#[test]
fn test_token_login_refreshes_token_on_each_login() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/login")
            .json_body(json!({"username": USERNAME, "token": "token-from-refresh"}));
        then.status(200)
            .header("Set-Cookie", "csrftoken=csrf-token-1")
            .header("Set-Cookie", "avi-sessionid=session-id-1")
            .json_body(json!({}));
    });

    let refreshes = Arc::new(AtomicUsize::new(0));
    let counter = refreshes.clone();
    let session = AviSessionBuilder::new(server.base_url(), USERNAME)
        .refresh_auth_token(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok("token-from-refresh".to_string())
        })
        .build()
        .unwrap();
    session.login().unwrap();

    login.assert_hits(2);
    assert_eq!(refreshes.load(Ordering::SeqCst), 2);
    assert!(session.is_authenticated());
}

#[test]
fn test_login_failure_is_returned() {
    let server = MockServer::start();
    let login = server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(401).json_body(json!({"error": "Invalid credentials"}));
    });

    let result = session_builder(&server).build();

    login.assert_hits(1);
    match result {
        Err(AviError::Controller { status, message, .. }) => {
            assert_eq!(status, 401);
            assert_eq!(message.as_deref(), Some("Invalid credentials"));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_cookies_are_kept_only_when_complete() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/login");
        then.status(200).header("Set-Cookie", "csrftoken=only-csrf").json_body(json!({}));
    });

    let session = session_builder(&server).build().unwrap();
    assert!(!session.is_authenticated());
}

#[test]
fn test_unauthorized_triggers_relogin_before_retry() {
    let server = MockServer::start();
    let login = mock_login(&server);
    let status = mock_cluster_status(&server, 200);
    let expired = server.mock(|when, then| {
        when.method(GET).path("/api/virtualservice");
        then.status(401).json_body(json!({"error": "Authentication credentials were not provided."}));
    });

    let session = session_builder(&server).max_api_retries(2).build().unwrap();
    let result = session.get_raw("api/virtualservice", &ApiOptions::default());

    expired.assert_hits(2);
    status.assert_hits(2);
    // initial login, then a login on each 401 and another one after each status check
    login.assert_hits(5);
    assert_eq!(result.unwrap_err().http_status(), Some(401));
}

#[test]
fn test_logout_and_reset_password() {
    let server = MockServer::start();
    mock_login(&server);
    let logout = server.mock(|when, then| {
        when.method(POST).path("/logout").header("X-CSRFToken", CSRF_TOKEN);
        then.status(200);
    });
    let new_password_login = server.mock(|when, then| {
        when.method(POST)
            .path("/login")
            .json_body(json!({"username": USERNAME, "password": "n3w-password"}));
        then.status(200)
            .header("Set-Cookie", "csrftoken=csrf-token-2")
            .header("Set-Cookie", "sessionid=session-id-2")
            .json_body(json!({}));
    });

    let session = session_builder(&server).build().unwrap();
    assert_ne!(PASSWORD, "n3w-password");

    session.reset_password("n3w-password");
    logout.assert();
    assert!(!session.is_authenticated());

    session.login().unwrap();
    new_password_login.assert();
    assert!(session.is_authenticated());
}
