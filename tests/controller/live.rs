use crate::helpers::utilities::{init, teardown};
use alb_sdk::clients::AviClient;
use alb_sdk::config::ControllerConfig;
use alb_sdk::models::Tenant;
use alb_sdk::session::ApiOptions;
use tracing::info;

fn client() -> AviClient {
    let config = ControllerConfig::from_env().expect("CTRL_* variables are mandatory for controller tests");
    let session = config
        .session_builder()
        .build()
        .expect("cannot open a session to the controller");
    AviClient::new(session)
}

#[test]
fn test_controller_version_and_admin_tenant() {
    let start = init();
    let client = client();

    let version = client.controller_version().expect("cannot read controller version");
    info!("controller version {}", version);
    assert!(version.is_at_least("18.2.6").unwrap());

    let tenants: Vec<Tenant> = client.tenant().get_all(&ApiOptions::default()).unwrap();
    assert!(tenants.iter().any(|tenant| tenant.name.as_deref() == Some("admin")));

    let admin = client.tenant().get_by_name("admin", &ApiOptions::default()).unwrap();
    assert!(admin.uuid.is_some());

    client.session().logout().unwrap();
    teardown(start, "test_controller_version_and_admin_tenant");
}
