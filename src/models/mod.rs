//! Wire models of the controller REST schema.
//!
//! Every field is optional on the Rust side. Fields the schema flags as required are
//! always serialized (as `null` when unset), every other field is omitted when unset.
//! Nothing is validated client side, the controller does that.

mod api_response;
mod application_profile;
mod cloud;
mod common;
mod controller;
mod health_monitor;
mod http_policy;
mod infra;
mod pool;
mod service_engine_group;
mod ssl;
mod virtual_service;
mod vs_vip;

pub use api_response::*;
pub use application_profile::*;
pub use cloud::*;
pub use common::*;
pub use controller::*;
pub use health_monitor::*;
pub use http_policy::*;
pub use infra::*;
pub use pool::*;
pub use service_engine_group::*;
pub use ssl::*;
pub use virtual_service::*;
pub use vs_vip::*;

use crate::refs::ObjectType;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A top level controller object, reachable under `api/<object type>`.
pub trait AviResource: Serialize + DeserializeOwned {
    const OBJECT_TYPE: ObjectType;

    fn uuid(&self) -> Option<&str>;
    fn name(&self) -> Option<&str>;
}

macro_rules! avi_resource {
    ($($model:ty => $object_type:expr),+ $(,)?) => {
        $(
            impl AviResource for $model {
                const OBJECT_TYPE: ObjectType = $object_type;

                fn uuid(&self) -> Option<&str> {
                    self.uuid.as_deref()
                }

                fn name(&self) -> Option<&str> {
                    self.name.as_deref()
                }
            }
        )+
    };
}

avi_resource! {
    VirtualService => ObjectType::VirtualService,
    VsVip => ObjectType::VsVip,
    Pool => ObjectType::Pool,
    PoolGroup => ObjectType::PoolGroup,
    HealthMonitor => ObjectType::HealthMonitor,
    HttpPolicySet => ObjectType::HttpPolicySet,
    SslKeyAndCertificate => ObjectType::SslKeyAndCertificate,
    ServiceEngineGroup => ObjectType::ServiceEngineGroup,
    Cloud => ObjectType::Cloud,
    IpamDnsProviderProfile => ObjectType::IpamDnsProviderProfile,
    Tenant => ObjectType::Tenant,
    VrfContext => ObjectType::VrfContext,
    Network => ObjectType::Network,
    ApplicationProfile => ObjectType::ApplicationProfile,
    ApplicationPersistenceProfile => ObjectType::ApplicationPersistenceProfile,
    NetworkProfile => ObjectType::NetworkProfile,
    VsDataScriptSet => ObjectType::VsDataScriptSet,
}
