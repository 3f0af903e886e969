use alb_sdk::session::AviSessionBuilder;
use httpmock::Method::{GET, POST};
use httpmock::{Mock, MockServer};
use serde_json::json;
use std::time::Duration;

pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "password";
pub const CSRF_TOKEN: &str = "csrf-token-1";
pub const SESSION_ID: &str = "session-id-1";

/// Cookie header sent on every request once logged in.
pub fn session_cookie() -> String {
    format!("csrftoken={CSRF_TOKEN}; sessionid={SESSION_ID}; avi-sessionid={SESSION_ID}")
}

/// Password login handing out the CSRF token and the session id.
pub fn mock_login(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(POST)
            .path("/login")
            .json_body(json!({"username": USERNAME, "password": PASSWORD}));
        then.status(200)
            .header("Set-Cookie", format!("csrftoken={CSRF_TOKEN}; Path=/; Secure"))
            .header("Set-Cookie", format!("sessionid={SESSION_ID}; Path=/; HttpOnly"))
            .json_body(json!({"user": {"username": USERNAME}}));
    })
}

pub fn mock_cluster_status(server: &MockServer, status: u16) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/api/cluster/status");
        then.status(status).json_body(json!({"cluster_state": {"state": "CLUSTER_UP_NO_HA"}}));
    })
}

/// Builder against the mock server with short waits between retries and status checks.
pub fn session_builder(server: &MockServer) -> AviSessionBuilder {
    AviSessionBuilder::new(server.base_url(), USERNAME)
        .password(PASSWORD)
        .api_retry_interval(Duration::from_millis(10))
        .controller_status_check_limits(2, Duration::from_millis(10))
}
