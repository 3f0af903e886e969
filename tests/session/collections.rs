use crate::helpers::mock_controller::{mock_login, session_builder};
use alb_sdk::errors::AviError;
use alb_sdk::models::{Pool, Tenant};
use alb_sdk::session::{ApiOptions, PatchOp};
use httpmock::Method::{DELETE, GET, PATCH, PUT};
use httpmock::MockServer;
use serde_json::{Value, json};

#[test]
fn test_get_collection_all_follows_next_cursor() {
    let server = MockServer::start();
    mock_login(&server);
    let first_page = server.mock(|when, then| {
        when.method(GET).path("/api/pool").query_param("page_size", "2");
        then.status(200).json_body(json!({
            "count": 3,
            "results": [{"name": "pool-1"}, {"name": "pool-2"}],
            "next": server.url("/api/pool?page=2&fields=name"),
        }));
    });
    let second_page = server.mock(|when, then| {
        when.method(GET).path("/api/pool").query_param("page", "2");
        then.status(200).json_body(json!({"count": 3, "results": [{"name": "pool-3"}]}));
    });

    let session = session_builder(&server).build().unwrap();
    let pools: Vec<Pool> = session
        .get_collection_all("api/pool", &ApiOptions::new().param("page_size", "2"))
        .unwrap();

    first_page.assert();
    second_page.assert();
    let names: Vec<&str> = pools.iter().filter_map(|pool| pool.name.as_deref()).collect();
    assert_eq!(names, vec!["pool-1", "pool-2", "pool-3"]);
}

#[test]
fn test_get_collection_is_empty_when_count_is_zero() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/tenant");
        then.status(200).json_body(json!({"count": 0}));
    });

    let session = session_builder(&server).build().unwrap();
    let tenants: Vec<Tenant> = session.get_collection("api/tenant", &ApiOptions::default()).unwrap();
    assert!(tenants.is_empty());
}

#[test]
fn test_cluster_uri_is_a_single_object() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/cluster");
        then.status(200)
            .json_body(json!({"name": "cluster-0-1", "uuid": "cluster-1", "nodes": [{"ip": {"addr": "10.10.10.10"}}]}));
    });

    let session = session_builder(&server).build().unwrap();
    let result = session
        .get_collection_raw("api/cluster?include_name=true", &ApiOptions::default())
        .unwrap();

    assert_eq!(result.count, 1);
    assert_eq!(result.results["uuid"], "cluster-1");
    assert_eq!(result.next, None);
}

#[test]
fn test_cluster_uri_with_extra_params_is_a_single_object() {
    let server = MockServer::start();
    mock_login(&server);
    let cluster = server.mock(|when, then| {
        when.method(GET).path("/api/cluster").query_param("include_name", "true");
        then.status(200).json_body(json!({"name": "cluster-0-1", "uuid": "cluster-1"}));
    });

    let session = session_builder(&server).build().unwrap();
    let options = ApiOptions::new().param("include_name", "true");
    let result = session.get_collection_raw("api/cluster", &options).unwrap();

    cluster.assert();
    assert_eq!(result.count, 1);
    assert_eq!(result.results["name"], "cluster-0-1");
    assert_eq!(result.results["uuid"], "cluster-1");
}

#[test]
fn test_get_object_by_name() {
    let server = MockServer::start();
    mock_login(&server);
    let lookup = server.mock(|when, then| {
        when.method(GET)
            .path("/api/pool")
            .query_param("name", "web pool")
            .query_param("cloud", "Default-Cloud")
            .query_param("include_name", "true");
        then.status(200).json_body(json!({
            "count": 1,
            "results": [{"name": "web pool", "uuid": "pool-1", "cloud_ref": "https://ctrl/api/cloud/cloud-1#Default-Cloud"}],
        }));
    });

    let session = session_builder(&server).build().unwrap();
    let options = ApiOptions::new().cloud("Default-Cloud").include_name(true);
    let pool: Pool = session.get_object_by_name("pool", "web pool", &options).unwrap();

    lookup.assert();
    assert_eq!(pool.uuid.as_deref(), Some("pool-1"));
}

#[test]
fn test_get_object_not_found_and_duplicates() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/vsvip").query_param("name", "missing");
        then.status(200).json_body(json!({"count": 0, "results": []}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/vsvip").query_param("name", "twice");
        then.status(200)
            .json_body(json!({"count": 2, "results": [{"name": "twice"}, {"name": "twice"}]}));
    });

    let session = session_builder(&server).build().unwrap();

    let missing = session.get_object_by_name::<Value>("vsvip", "missing", &ApiOptions::default());
    assert_eq!(
        missing,
        Err(AviError::ObjectNotFound {
            object_type: "vsvip".to_string(),
            name: "missing".to_string(),
        })
    );
    assert!(missing.unwrap_err().is_not_found());

    let twice = session.get_object_by_name::<Value>("vsvip", "twice", &ApiOptions::default());
    assert!(matches!(twice, Err(AviError::MultipleObjectsFound { .. })));

    let unnamed = session.get_object::<Value>("vsvip", &ApiOptions::default());
    assert!(matches!(unnamed, Err(AviError::MissingName { .. })));
}

#[test]
fn test_put_patch_and_delete() {
    let server = MockServer::start();
    mock_login(&server);
    let put = server.mock(|when, then| {
        when.method(PUT)
            .path("/api/pool/pool-1")
            .json_body(json!({"name": "pool-1", "uuid": "pool-1"}));
        then.status(200).json_body(json!({"name": "pool-1", "uuid": "pool-1"}));
    });
    let patch = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/pool/pool-1")
            .json_body(json!({"delete": {"servers": [{"ip": {"addr": "10.0.0.1", "type": "V4"}}]}}));
        then.status(200).json_body(json!({"name": "pool-1", "uuid": "pool-1", "servers": []}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/pool/pool-1");
        then.status(204);
    });

    let session = session_builder(&server).build().unwrap();
    let pool = Pool {
        name: Some("pool-1".to_string()),
        uuid: Some("pool-1".to_string()),
        ..Default::default()
    };

    let updated: Pool = session.put("api/pool/pool-1", &pool, &ApiOptions::default()).unwrap();
    let patched: Value = session
        .patch(
            "api/pool/pool-1",
            &json!({"servers": [{"ip": {"addr": "10.0.0.1", "type": "V4"}}]}),
            PatchOp::Delete,
            &ApiOptions::default(),
        )
        .unwrap();
    session.delete("api/pool/pool-1", &ApiOptions::default()).unwrap();

    put.assert();
    patch.assert();
    delete.assert();
    assert_eq!(updated, pool);
    assert_eq!(patched["servers"], json!([]));
}

#[test]
fn test_controller_version_and_sync() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/initial-data");
        then.status(200).json_body(json!({
            "version": {"Version": "22.1.3", "Build": 9096, "Date": "2023-01-10T07:27:01+00:00"},
            "setup_failed": false,
        }));
    });
    let synced = server.mock(|when, then| {
        when.method(GET).path("/api/tenant").header("X-Avi-Version", "22.1.3");
        then.status(200).json_body(json!({"count": 0, "results": []}));
    });

    let session = session_builder(&server).build().unwrap();
    assert_eq!(session.get_controller_version().unwrap(), "22.1.3");
    assert_eq!(session.version(), "18.2.6");

    assert_eq!(session.sync_version_with_controller().unwrap(), "22.1.3");
    assert_eq!(session.version(), "22.1.3");
    let _: Vec<Value> = session.get_collection("api/tenant", &ApiOptions::default()).unwrap();
    synced.assert();
}
