use crate::helpers::mock_controller::{CSRF_TOKEN, mock_cluster_status, mock_login, session_builder};
use alb_sdk::session::ApiOptions;
use httpmock::Method::{GET, POST};
use httpmock::MockServer;

#[test]
fn test_upload_file_as_multipart() {
    let server = MockServer::start();
    mock_login(&server);
    let upload = server.mock(|when, then| {
        when.method(POST)
            .path("/api/fileservice/hsmpackages")
            .query_param("hsmtype", "safenet")
            .header("X-CSRFToken", CSRF_TOKEN)
            .body_contains("name=\"file\"; filename=\"safenet.tar\"")
            .body_contains("hsm package content")
            .body_contains("name=\"uri\"")
            .body_contains("controller://hsmpackages");
        then.status(201);
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("safenet.tar");
    std::fs::write(&path, "hsm package content").unwrap();

    let session = session_builder(&server).build().unwrap();
    session
        .upload_file("hsmpackages?hsmtype=safenet", &path, &ApiOptions::default())
        .unwrap();

    upload.assert();
}

#[test]
fn test_upload_is_retried_with_the_same_content() {
    let server = MockServer::start();
    mock_login(&server);
    mock_cluster_status(&server, 200);
    let busy = server.mock(|when, then| {
        when.method(POST)
            .path("/api/fileservice/seova")
            .body_contains("se image");
        then.status(503);
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("se.ova");
    std::fs::write(&path, "se image").unwrap();

    let session = session_builder(&server).max_api_retries(2).build().unwrap();
    let result = session.upload_file("seova", &path, &ApiOptions::default());

    busy.assert_hits(2);
    assert_eq!(result.unwrap_err().http_status(), Some(503));
}

#[test]
fn test_upload_missing_file() {
    let server = MockServer::start();
    mock_login(&server);

    let session = session_builder(&server).build().unwrap();
    let dir = tempfile::tempdir().unwrap();
    let result = session.upload_file("seova", &dir.path().join("missing.ova"), &ApiOptions::default());

    assert!(matches!(result, Err(alb_sdk::AviError::Io { .. })));
}

#[test]
fn test_download_file_into_writer() {
    let server = MockServer::start();
    mock_login(&server);
    let download = server.mock(|when, then| {
        when.method(GET)
            .path("/api/fileservice/seova")
            .query_param("file_format", "ova");
        then.status(200).body("binary se image");
    });

    let session = session_builder(&server).build().unwrap();
    let mut content: Vec<u8> = vec![];
    let written = session
        .download_file("seova", &mut content, &ApiOptions::new().param("file_format", "ova"))
        .unwrap();

    download.assert();
    assert_eq!(written, 15);
    assert_eq!(content, b"binary se image");
}

#[test]
fn test_download_missing_file() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/fileservice/missing");
        then.status(404).body("{\"error\": \"file not found\"}");
    });

    let session = session_builder(&server).build().unwrap();
    let mut content: Vec<u8> = vec![];
    let result = session.download_file("missing", &mut content, &ApiOptions::default());

    assert_eq!(result.unwrap_err().http_status(), Some(404));
    assert!(content.is_empty());
}
