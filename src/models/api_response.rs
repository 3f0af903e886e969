use super::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Paginated envelope returned by every collection endpoint.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// count
    /// Required: true
    #[serialize_always]
    #[serde(default)]
    pub count: Option<i32>,

    /// Absolute URL of the next page, absent on the last one.
    pub next: Option<String>,

    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub results: Vec<T>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        ApiResponse {
            count: None,
            next: None,
            results: vec![],
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}

pub type VirtualServiceApiResponse = ApiResponse<VirtualService>;
pub type VsVipApiResponse = ApiResponse<VsVip>;
pub type PoolApiResponse = ApiResponse<Pool>;
pub type PoolGroupApiResponse = ApiResponse<PoolGroup>;
pub type HealthMonitorApiResponse = ApiResponse<HealthMonitor>;
pub type HttpPolicySetApiResponse = ApiResponse<HttpPolicySet>;
pub type SslKeyAndCertificateApiResponse = ApiResponse<SslKeyAndCertificate>;
pub type ServiceEngineGroupApiResponse = ApiResponse<ServiceEngineGroup>;
pub type CloudApiResponse = ApiResponse<Cloud>;
pub type IpamDnsProviderProfileApiResponse = ApiResponse<IpamDnsProviderProfile>;
pub type TenantApiResponse = ApiResponse<Tenant>;
pub type VrfContextApiResponse = ApiResponse<VrfContext>;
pub type NetworkApiResponse = ApiResponse<Network>;
pub type ApplicationProfileApiResponse = ApiResponse<ApplicationProfile>;
pub type ApplicationPersistenceProfileApiResponse = ApiResponse<ApplicationPersistenceProfile>;
pub type NetworkProfileApiResponse = ApiResponse<NetworkProfile>;
pub type VsDataScriptSetApiResponse = ApiResponse<VsDataScriptSet>;
