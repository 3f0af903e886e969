use super::*;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Cloud cloud
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Cloud {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// CloudConnector polling interval in seconds for external autoscale groups.
    pub autoscale_polling_interval: Option<u32>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    pub custom_tags: Option<String>,

    /// Select the IP address management scheme. Enables DHCP on the VIP and data networks.
    pub dhcp_enabled: Option<bool>,

    /// DNS Profile for the cloud. It is a reference to an object of type IpamDnsProviderProfile.
    pub dns_provider_ref: Option<String>,

    /// DNS resolver for the cloud.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dns_resolvers: Vec<DnsResolver>,

    /// Use static routes for VIP side network resolution during VirtualService placement.
    pub enable_vip_static_routes: Option<bool>,

    /// Enable IPv6 auto configuration.
    pub ip6_autocfg_enabled: Option<bool>,

    /// Ipam Profile for the cloud. It is a reference to an object of type IpamDnsProviderProfile.
    pub ipam_provider_ref: Option<String>,

    /// Specifies the default license tier which would be used by new SE Groups. Enum options -
    /// ENTERPRISE_16, ENTERPRISE, ENTERPRISE_18, BASIC, ESSENTIALS, ENTERPRISE_WITH_CLOUD_SERVICES.
    pub license_tier: Option<String>,

    /// If no license type is specified then default license enforcement for the cloud type is chosen.
    /// Enum options - LIC_BACKEND_SERVERS, LIC_SOCKETS, LIC_CORES, LIC_HOSTS, LIC_SE_BANDWIDTH,
    /// LIC_METERED_SE_BANDWIDTH.
    pub license_type: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// MTU setting for the cloud.
    pub mtu: Option<u32>,

    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// NSX-T Cloud Platform Configuration.
    pub nsxt_configuration: Option<NsxtConfiguration>,

    /// Prefer static routes over interface routes during VirtualService placement.
    pub prefer_static_routes: Option<bool>,

    /// The Service Engine Group to use as template. It is a reference to an object of type
    /// ServiceEngineGroup.
    pub se_group_template_ref: Option<String>,

    /// DNS records for VIPs are added/deleted based on the operational state of the VIPs.
    pub state_based_dns_registration: Option<bool>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    pub uuid: Option<String>,

    pub vcenter_configuration: Option<VCenterConfiguration>,

    /// Cloud type. Enum options - CLOUD_NONE, CLOUD_VCENTER, CLOUD_OPENSTACK, CLOUD_AWS, CLOUD_VCA,
    /// CLOUD_APIC, CLOUD_MESOS, CLOUD_LINUXSERVER, CLOUD_DOCKER_UCP, CLOUD_RANCHER, CLOUD_OSHIFT_K8S,
    /// CLOUD_AZURE, CLOUD_GCP, CLOUD_NSXT.
    /// Required: true
    #[serialize_always]
    pub vtype: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct DnsResolver {
    /// Set of IPs of the name servers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub nameserver_ips: Vec<IpAddr>,

    /// Name of the resolver.
    /// Required: true
    #[serialize_always]
    pub resolver_name: Option<String>,

    /// If configured, this value used for refreshing the DNS entries. Overrides both received_ttl and
    /// min_ttl. The entries are refreshed only on fixed_ttleven if the server is sending lesser TTL value.
    pub fixed_ttl: Option<u32>,

    /// If configured, this ttl overrides the ttl from responses, only if it is less.
    pub min_ttl: Option<u32>,

    /// If this field is set to true, the DNS resolver uses 8.8.8.8 as a nameserver.
    pub use_mgmt: Option<bool>,
}

/// VCenterConfiguration v center configuration
///
/// `Debug` leaves out the password.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Derivative, Clone, Default, PartialEq, Eq)]
#[derivative(Debug)]
#[serde(default)]
pub struct VCenterConfiguration {
    /// Datacenter for virtual infrastructure discovery.
    pub datacenter: Option<String>,

    /// Management subnet to use for Avi Service Engines.
    pub management_ip_subnet: Option<IpAddrPrefix>,

    /// Management network to use for Avi Service Engines. It is a reference to an object of type
    /// VIMgrNWRuntime.
    pub management_network: Option<String>,

    /// The password Avi Vantage will use when authenticating with vCenter.
    #[derivative(Debug = "ignore")]
    pub password: Option<String>,

    /// Set the access mode to vCenter as either Read, which allows Avi to discover networks and servers,
    /// or Write, which also allows Avi to create Service Engines and configure their network properties.
    /// Enum options - NO_ACCESS, READ_ACCESS, WRITE_ACCESS.
    /// Required: true
    #[serialize_always]
    pub privilege: Option<String>,

    /// The username Avi Vantage will use when authenticating with vCenter.
    pub username: Option<String>,

    /// Avi Service Engine Template in vCenter to be used for creating Service Engines.
    pub vcenter_template_se_location: Option<String>,

    /// vCenter hostname or IP address.
    pub vcenter_url: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NsxtConfiguration {
    /// Credentials to access NSX-T manager. It is a reference to an object of type CloudConnectorUser.
    pub nsxt_credentials_ref: Option<String>,

    /// NSX-T manager hostname or IP address.
    pub nsxt_url: Option<String>,

    /// Domain where NSGroup objects belongs to.
    pub domain_id: Option<String>,

    /// Enforcement point is where the rules of a policy to apply.
    pub enforcementpoint_id: Option<String>,

    /// Site where transport zone belongs to.
    pub site_id: Option<String>,
}

/// IpamDnsProviderProfile ipam dns provider profile
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct IpamDnsProviderProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// If this flag is set, only allocate IP from networks in the Virtual Service VRF.
    pub allocate_ip_in_vrf: Option<bool>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// Provider details if type is Avi.
    pub internal_profile: Option<IpamDnsInternalProfile>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// Name for the IPAM/DNS Provider profile.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// Provider Type for the IPAM/DNS Provider profile. Enum options - IPAMDNS_TYPE_INFOBLOX,
    /// IPAMDNS_TYPE_AWS, IPAMDNS_TYPE_OPENSTACK, IPAMDNS_TYPE_GCP, IPAMDNS_TYPE_INFOBLOX_DNS,
    /// IPAMDNS_TYPE_CUSTOM, IPAMDNS_TYPE_CUSTOM_DNS, IPAMDNS_TYPE_AZURE, IPAMDNS_TYPE_OCI,
    /// IPAMDNS_TYPE_TENCENT, IPAMDNS_TYPE_INTERNAL, IPAMDNS_TYPE_INTERNAL_DNS, IPAMDNS_TYPE_AWS_DNS,
    /// IPAMDNS_TYPE_AZURE_DNS.
    /// Required: true
    #[serialize_always]
    #[serde(rename = "type")]
    pub type_: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    pub uuid: Option<String>,
}

/// IpamDnsInternalProfile ipam dns internal profile
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IpamDnsInternalProfile {
    /// List of service domains.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dns_service_domain: Vec<DnsServiceDomain>,

    /// Avi VirtualService to be used for serving DNS records. It is a reference to an object of type
    /// VirtualService.
    pub dns_virtualservice_ref: Option<String>,

    /// Default TTL for all records. Allowed values are 1-604800. Unit is SEC.
    pub ttl: Option<u32>,

    /// Use usable_networks for Virtual IP address allocation.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub usable_networks: Vec<IpamUsableNetwork>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DnsServiceDomain {
    /// Service domain string used for FQDN.
    /// Required: true
    #[serialize_always]
    pub domain_name: Option<String>,

    /// Third-party Authoritative domain requests are delegated toDNS VirtualService's pool of nameservers.
    pub pass_through: Option<bool>,

    /// TTL value for DNS records.
    pub record_ttl: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IpamUsableNetwork {
    /// Labels as key value pairs, used for selection of IPAM networks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValueTuple>,

    /// Network. It is a reference to an object of type Network.
    /// Required: true
    #[serialize_always]
    pub nw_ref: Option<String>,
}
