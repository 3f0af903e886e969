use crate::helpers::mock_controller::{mock_login, session_builder};
use crate::helpers::utilities::{init, teardown};
use alb_sdk::clients::{AviClient, AviClientPool};
use alb_sdk::errors::AviError;
use alb_sdk::models::{HealthMonitor, IpAddr, Pool, Server, VirtualService};
use alb_sdk::refs::{ObjectRef, ObjectType};
use alb_sdk::session::{ApiOptions, PatchOp};
use httpmock::Method::{DELETE, GET, PATCH, POST, PUT};
use httpmock::MockServer;
use serde_json::json;

#[test]
fn test_pool_lifecycle() {
    let start = init();
    let server = MockServer::start();
    mock_login(&server);
    let create = server.mock(|when, then| {
        when.method(POST).path("/api/pool").json_body(json!({
            "name": "cluster--default-app-80",
            "health_monitor_refs": ["/api/healthmonitor/?name=System-TCP"],
            "servers": [{"ip": {"addr": "10.0.0.1", "type": "V4"}, "port": 8080}],
        }));
        then.status(201).json_body(json!({
            "name": "cluster--default-app-80",
            "uuid": "pool-1",
            "servers": [{"ip": {"addr": "10.0.0.1", "type": "V4"}, "port": 8080}],
        }));
    });
    let get = server.mock(|when, then| {
        when.method(GET).path("/api/pool/pool-1");
        then.status(200).json_body(json!({"name": "cluster--default-app-80", "uuid": "pool-1"}));
    });
    let update = server.mock(|when, then| {
        when.method(PUT).path("/api/pool/pool-1");
        then.status(200)
            .json_body(json!({"name": "cluster--default-app-80", "uuid": "pool-1", "description": "updated"}));
    });
    let patch = server.mock(|when, then| {
        when.method(PATCH)
            .path("/api/pool/pool-1")
            .json_body(json!({"add": {"servers": [{"ip": {"addr": "10.0.0.2", "type": "V4"}, "port": 8080}]}}));
        then.status(200).json_body(json!({"uuid": "pool-1", "servers": [
            {"ip": {"addr": "10.0.0.1", "type": "V4"}, "port": 8080},
            {"ip": {"addr": "10.0.0.2", "type": "V4"}, "port": 8080},
        ]}));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/pool/pool-1");
        then.status(204);
    });

    let client = AviClient::new(session_builder(&server).build().unwrap());
    let pools = client.pool();
    let options = ApiOptions::default();

    let pool = Pool {
        name: Some("cluster--default-app-80".to_string()),
        health_monitor_refs: vec![ObjectRef::by_name(ObjectType::HealthMonitor, "System-TCP")],
        servers: vec![Server::new(IpAddr::v4("10.0.0.1"), 8080)],
        ..Default::default()
    };
    let created = pools.create(&pool, &options).unwrap();
    assert_eq!(created.uuid.as_deref(), Some("pool-1"));

    let fetched = pools.get("pool-1", &options).unwrap();
    assert_eq!(fetched.name, pool.name);

    let updated = pools
        .update(
            &Pool {
                description: Some("updated".to_string()),
                ..created.clone()
            },
            &options,
        )
        .unwrap();
    assert_eq!(updated.description.as_deref(), Some("updated"));

    let patched = pools
        .patch(
            "pool-1",
            &json!({"servers": [Server::new(IpAddr::v4("10.0.0.2"), 8080)]}),
            PatchOp::Add,
            &options,
        )
        .unwrap();
    assert_eq!(patched.servers.len(), 2);

    pools.delete("pool-1", &options).unwrap();

    create.assert();
    get.assert();
    update.assert();
    patch.assert();
    delete.assert();
    teardown(start, "test_pool_lifecycle");
}

#[test]
fn test_get_all_and_delete_by_name() {
    let server = MockServer::start();
    mock_login(&server);
    let monitors = hashmap! {
        "System-HTTP" => "healthmonitor-1",
        "System-TCP" => "healthmonitor-2",
    };
    server.mock(|when, then| {
        when.method(GET).path("/api/healthmonitor").query_param("name", "System-TCP");
        then.status(200).json_body(json!({
            "count": 1,
            "results": [{"name": "System-TCP", "uuid": monitors["System-TCP"], "type": "HEALTH_MONITOR_TCP"}],
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/healthmonitor").query_param("page_size", "50");
        then.status(200).json_body(json!({
            "count": 2,
            "results": [
                {"name": "System-HTTP", "uuid": monitors["System-HTTP"], "type": "HEALTH_MONITOR_HTTP"},
                {"name": "System-TCP", "uuid": monitors["System-TCP"], "type": "HEALTH_MONITOR_TCP"},
            ],
        }));
    });
    let delete = server.mock(|when, then| {
        when.method(DELETE).path("/api/healthmonitor/healthmonitor-2");
        then.status(204);
    });

    let client = AviClient::new(session_builder(&server).build().unwrap());
    let all: Vec<HealthMonitor> = client
        .health_monitor()
        .get_all(&ApiOptions::new().param("page_size", "50"))
        .unwrap();
    assert_eq!(all.len(), 2);
    for monitor in &all {
        let name = monitor.name.as_deref().unwrap();
        assert_eq!(monitor.uuid.as_deref(), Some(monitors[name]));
    }

    client
        .health_monitor()
        .delete_by_name("System-TCP", &ApiOptions::default())
        .unwrap();
    delete.assert();
}

#[test]
fn test_create_conflict_is_a_controller_error() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(POST).path("/api/virtualservice");
        then.status(409)
            .json_body(json!({"error": "Virtual Service with this Name and Tenant already exist."}));
    });

    let client = AviClient::new(session_builder(&server).build().unwrap());
    let vs = VirtualService {
        name: Some("vs-1".to_string()),
        ..Default::default()
    };

    match client.virtual_service().create(&vs, &ApiOptions::default()) {
        Err(AviError::Controller { status, message, .. }) => {
            assert_eq!(status, 409);
            assert!(message.unwrap().contains("already exist"));
        }
        other => panic!("unexpected result {other:?}"),
    }
}

#[test]
fn test_controller_version() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/initial-data");
        then.status(200).json_body(json!({"version": {"Version": "30.1.1", "Build": 9001}}));
    });

    let client = AviClient::new(session_builder(&server).build().unwrap());
    let version = client.controller_version().unwrap();

    assert_eq!(version.to_string(), "30.1.1");
    assert!(version.is_at_least("22.1.3").unwrap());
}

#[test]
fn test_client_pool_pins_every_session_to_the_controller_version() {
    let start = init();
    let server = MockServer::start();
    let login = mock_login(&server);
    let initial_data = server.mock(|when, then| {
        when.method(GET).path("/api/initial-data");
        then.status(200).json_body(json!({"version": {"Version": "30.1.1", "Build": 9001}}));
    });
    let pools = server.mock(|when, then| {
        when.method(GET).path("/api/pool").header("X-Avi-Version", "30.1.1");
        then.status(200).json_body(json!({"count": 0, "results": []}));
    });

    let pool = AviClientPool::new(3, || session_builder(&server)).unwrap();

    assert_eq!(pool.len(), 3);
    login.assert_hits(3);
    initial_data.assert_hits(1);
    assert!(pool.clients().iter().all(|client| client.session().version() == "30.1.1"));

    // worker indexes wrap around the pool
    let last = pool.client(5).pool().get_all(&ApiOptions::default()).unwrap();
    assert!(last.is_empty());
    pools.assert();
    teardown(start, "test_client_pool_pins_every_session_to_the_controller_version");
}

#[test]
fn test_client_pool_keeps_configured_version_when_unreadable() {
    let server = MockServer::start();
    mock_login(&server);
    server.mock(|when, then| {
        when.method(GET).path("/api/initial-data");
        then.status(404).json_body(json!({"error": "not found"}));
    });

    let pool = AviClientPool::new(2, || session_builder(&server).version("22.1.3")).unwrap();

    assert!(pool.clients().iter().all(|client| client.session().version() == "22.1.3"));
}
