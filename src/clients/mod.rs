//! Typed clients over an `AviSession`, one per controller object type.

use crate::config::ControllerConfig;
use crate::errors::AviError;
use crate::models::{
    ApplicationPersistenceProfile, ApplicationProfile, AviResource, Cloud, HealthMonitor, HttpPolicySet,
    IpamDnsProviderProfile, Network, NetworkProfile, Pool, PoolGroup, ServiceEngineGroup, SslKeyAndCertificate,
    Tenant, VirtualService, VrfContext, VsDataScriptSet, VsVip,
};
use crate::session::{ApiOptions, AviSession, AviSessionBuilder, PatchOp};
use crate::version::ControllerVersion;
use serde::Serialize;
use std::marker::PhantomData;
use tracing::{info, warn};

/// CRUD on `api/<object type>` for one resource type.
pub struct ResourceClient<'a, T: AviResource> {
    session: &'a AviSession,
    resource: PhantomData<T>,
}

impl<'a, T: AviResource> ResourceClient<'a, T> {
    pub fn new(session: &'a AviSession) -> Self {
        ResourceClient {
            session,
            resource: PhantomData,
        }
    }

    pub fn session(&self) -> &'a AviSession {
        self.session
    }

    fn collection_path(&self) -> String {
        T::OBJECT_TYPE.collection_path()
    }

    fn object_path(&self, uuid: &str) -> String {
        format!("{}/{}", self.collection_path(), uuid)
    }

    /// Every object of the collection, across pages.
    pub fn get_all(&self, options: &ApiOptions) -> Result<Vec<T>, AviError> {
        self.session.get_collection_all(&self.collection_path(), options)
    }

    pub fn get(&self, uuid: &str, options: &ApiOptions) -> Result<T, AviError> {
        self.session.get(&self.object_path(uuid), options)
    }

    pub fn get_by_name(&self, name: &str, options: &ApiOptions) -> Result<T, AviError> {
        self.session.get_object_by_name(T::OBJECT_TYPE.as_str(), name, options)
    }

    /// Lookup by the name, cloud and filters carried by `options`.
    pub fn get_object(&self, options: &ApiOptions) -> Result<T, AviError> {
        self.session.get_object(T::OBJECT_TYPE.as_str(), options)
    }

    pub fn create(&self, object: &T, options: &ApiOptions) -> Result<T, AviError> {
        let created: T = self.session.post(&self.collection_path(), object, options)?;
        info!(
            "created {} {}",
            T::OBJECT_TYPE,
            created.name().or(object.name()).unwrap_or_default()
        );
        Ok(created)
    }

    pub fn update(&self, object: &T, options: &ApiOptions) -> Result<T, AviError> {
        let uuid = object.uuid().ok_or_else(|| AviError::MissingUuid {
            object_type: T::OBJECT_TYPE.to_string(),
        })?;
        self.session.put(&self.object_path(uuid), object, options)
    }

    /// Patch with any partial payload, e.g. a `serde_json::Value` holding only the changed fields.
    pub fn patch<P: Serialize + ?Sized>(
        &self,
        uuid: &str,
        payload: &P,
        patch_op: PatchOp,
        options: &ApiOptions,
    ) -> Result<T, AviError> {
        self.session.patch(&self.object_path(uuid), payload, patch_op, options)
    }

    pub fn delete(&self, uuid: &str, options: &ApiOptions) -> Result<(), AviError> {
        self.session.delete(&self.object_path(uuid), options)?;
        info!("deleted {} {}", T::OBJECT_TYPE, uuid);
        Ok(())
    }

    pub fn delete_by_name(&self, name: &str, options: &ApiOptions) -> Result<(), AviError> {
        let object = self.get_by_name(name, options)?;
        let uuid = object.uuid().ok_or_else(|| AviError::MissingUuid {
            object_type: T::OBJECT_TYPE.to_string(),
        })?;
        self.delete(uuid, options)
    }
}

/// Owns a session and hands out the typed clients.
#[derive(Debug)]
pub struct AviClient {
    session: AviSession,
}

impl AviClient {
    pub fn new(session: AviSession) -> Self {
        AviClient { session }
    }

    pub fn session(&self) -> &AviSession {
        &self.session
    }

    pub fn into_session(self) -> AviSession {
        self.session
    }

    pub fn resource<T: AviResource>(&self) -> ResourceClient<'_, T> {
        ResourceClient::new(&self.session)
    }

    pub fn controller_version(&self) -> Result<ControllerVersion, AviError> {
        ControllerVersion::new(&self.session.get_controller_version()?)
    }

    pub fn virtual_service(&self) -> ResourceClient<'_, VirtualService> {
        self.resource()
    }

    pub fn vs_vip(&self) -> ResourceClient<'_, VsVip> {
        self.resource()
    }

    pub fn pool(&self) -> ResourceClient<'_, Pool> {
        self.resource()
    }

    pub fn pool_group(&self) -> ResourceClient<'_, PoolGroup> {
        self.resource()
    }

    pub fn health_monitor(&self) -> ResourceClient<'_, HealthMonitor> {
        self.resource()
    }

    pub fn http_policy_set(&self) -> ResourceClient<'_, HttpPolicySet> {
        self.resource()
    }

    pub fn ssl_key_and_certificate(&self) -> ResourceClient<'_, SslKeyAndCertificate> {
        self.resource()
    }

    pub fn service_engine_group(&self) -> ResourceClient<'_, ServiceEngineGroup> {
        self.resource()
    }

    pub fn cloud(&self) -> ResourceClient<'_, Cloud> {
        self.resource()
    }

    pub fn ipam_dns_provider_profile(&self) -> ResourceClient<'_, IpamDnsProviderProfile> {
        self.resource()
    }

    pub fn tenant(&self) -> ResourceClient<'_, Tenant> {
        self.resource()
    }

    pub fn vrf_context(&self) -> ResourceClient<'_, VrfContext> {
        self.resource()
    }

    pub fn network(&self) -> ResourceClient<'_, Network> {
        self.resource()
    }

    pub fn application_profile(&self) -> ResourceClient<'_, ApplicationProfile> {
        self.resource()
    }

    pub fn application_persistence_profile(&self) -> ResourceClient<'_, ApplicationPersistenceProfile> {
        self.resource()
    }

    pub fn network_profile(&self) -> ResourceClient<'_, NetworkProfile> {
        self.resource()
    }

    pub fn vs_datascript_set(&self) -> ResourceClient<'_, VsDataScriptSet> {
        self.resource()
    }
}

/// A fixed set of clients against one controller, one per worker.
#[derive(Debug)]
pub struct AviClientPool {
    clients: Vec<AviClient>,
}

impl AviClientPool {
    /// Builds `size` sessions from `make_builder`. The first session reads the controller version
    /// and every session is pinned to it; when that read fails the configured version stays.
    pub fn new<F>(size: usize, make_builder: F) -> Result<AviClientPool, AviError>
    where
        F: Fn() -> AviSessionBuilder,
    {
        if size == 0 {
            return Err(AviError::Configuration("client pool size must be at least 1".to_string()));
        }

        let clients = (0..size)
            .map(|_| make_builder().build().map(AviClient::new))
            .collect::<Result<Vec<AviClient>, AviError>>()?;

        match clients[0].session().sync_version_with_controller() {
            Ok(version) => {
                for client in &clients[1..] {
                    client.session().set_version(version.clone());
                }
            }
            Err(e) => warn!("cannot read the controller version, keeping {}: {}", clients[0].session().version(), e),
        }

        info!("created a pool of {} controller clients", size);
        Ok(AviClientPool { clients })
    }

    pub fn from_config(config: &ControllerConfig, size: usize) -> Result<AviClientPool, AviError> {
        config.validate()?;
        AviClientPool::new(size, || config.session_builder())
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn clients(&self) -> &[AviClient] {
        &self.clients
    }

    /// Client for a worker index, wrapping around the pool size.
    pub fn client(&self, index: usize) -> &AviClient {
        &self.clients[index % self.clients.len()]
    }
}
