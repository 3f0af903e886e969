use super::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Tenant tenant
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Tenant {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    pub config_settings: Option<TenantConfiguration>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// Creator of this tenant.
    pub created_by: Option<String>,

    pub description: Option<String>,

    /// The referred label groups are enforced on the tenant if this is set to true.
    pub enforce_label_group: Option<bool>,

    /// The label_groups to be enforced on the tenant. It is a reference to an object of type LabelGroup.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub label_group_refs: Vec<String>,

    pub local: Option<bool>,

    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    pub uuid: Option<String>,
}

/// TenantConfiguration tenant configuration
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TenantConfiguration {
    /// Controls the ownership of ServiceEngines. Service Engines can either be exclusively owned by each
    /// tenant or owned by the administrator and shared by all tenants.
    pub se_in_provider_context: Option<bool>,

    /// Service Engines are managed within the tenant's context.
    pub tenant_access_to_provider_se: Option<bool>,

    /// When 'Per Tenant IP Domain' is selected, each tenant gets its own routing domain that is not shared
    /// with any other tenant.
    pub tenant_vrf: Option<bool>,
}

/// VrfContext vrf context
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VrfContext {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// Key/value vrfcontext attributes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<KeyValue>,

    /// It is a reference to an object of type Cloud.
    pub cloud_ref: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub static_routes: Vec<StaticRoute>,

    /// Boolean to check if the vrf is a system VRF.
    pub system_default: Option<bool>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    pub uuid: Option<String>,
}

/// StaticRoute static route
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StaticRoute {
    /// Disable the gateway monitor for default gateway. They are monitored by default.
    pub disable_gateway_monitor: Option<bool>,

    /// If the static route is an interface route, it is not advertised.
    pub if_name: Option<String>,

    /// Labels associated with this route.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,

    /// Required: true
    #[serialize_always]
    pub next_hop: Option<IpAddr>,

    /// Required: true
    #[serialize_always]
    pub prefix: Option<IpAddrPrefix>,

    /// Required: true
    #[serialize_always]
    pub route_id: Option<String>,
}

/// Network network
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Network {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// Key/value network attributes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<KeyValue>,

    /// It is a reference to an object of type Cloud.
    pub cloud_ref: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub configured_subnets: Vec<Subnet>,

    /// Select the IP address management scheme for this Network.
    pub dhcp_enabled: Option<bool>,

    /// When selected, excludes all discovered subnets in this network from consideration for virtual
    /// service placement.
    pub exclude_discovered_subnets: Option<bool>,

    /// Enable IPv6 auto configuration.
    pub ip6_autocfg_enabled: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// Set when the network was learned from a Service Engine.
    pub synced_from_se: Option<bool>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    pub uuid: Option<String>,

    /// The network is backed by a vCenter distributed virtual switch.
    pub vcenter_dvs: Option<bool>,

    /// It is a reference to an object of type VIMgrNWRuntime.
    pub vimgrnw_ref: Option<String>,

    /// It is a reference to an object of type VrfContext.
    pub vrf_context_ref: Option<String>,
}

/// Subnet subnet
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Subnet {
    /// Specify an IP subnet prefix for this Network.
    /// Required: true
    #[serialize_always]
    pub prefix: Option<IpAddrPrefix>,

    /// Static IP ranges for this subnet.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub static_ip_ranges: Vec<StaticIpRange>,
}

/// StaticIpRange static Ip range
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StaticIpRange {
    /// IP range.
    /// Required: true
    #[serialize_always]
    pub range: Option<IpAddrRange>,

    /// Object type (VIP only, Service Engine only, or both) that can use this IP range. Enum options -
    /// STATIC_IPS_FOR_SE, STATIC_IPS_FOR_VIP, STATIC_IPS_FOR_VIP_AND_SE.
    #[serde(rename = "type")]
    pub type_: Option<String>,
}
