use super::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// VsVip vs vip
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VsVip {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    /// Read Only: true
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// LOCAL_PREF to be used for VsVip advertised. Applicable only over iBGP.
    pub bgp_local_preference: Option<u32>,

    /// Number of times the local AS should be prepended additionally to VsVip. Applicable only over eBGP.
    pub bgp_num_as_path_prepend: Option<u32>,

    /// Select BGP peers, using peer label, for VsVip advertisement.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bgp_peer_labels: Vec<String>,

    /// It is a reference to an object of type Cloud.
    pub cloud_ref: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// Service discovery specific data including fully qualified domain name, type and Time-To-Live of the
    /// DNS record. This takes effect only if dns profile is associated with cloud.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dns_info: Vec<DnsInfo>,

    /// Force placement on all Service Engines in the Service Engine Group (Container clouds only).
    pub east_west_placement: Option<bool>,

    /// Determines the set of IPAM networks to use for this VsVip. Selector type must be SELECTOR_IPAM and
    /// only one label is supported.
    pub ipam_selector: Option<Selector>,

    /// List of labels to be used for granular RBAC.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// Name for the VsVip object.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// This sets the placement scope of virtualservice to given tier1 logical router in Nsx-t.
    pub tier1_lr: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    /// This overrides the cloud level default and needs to match the SE Group value in which it will be
    /// used if the SE Group use_standard_alb value is set.
    pub use_standard_alb: Option<bool>,

    /// UUID of the VsVip object.
    pub uuid: Option<String>,

    /// List of Virtual Service IPs and other shareable entities.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vip: Vec<Vip>,

    /// Virtual Routing Context that the Virtual Service is bound to. It is a reference to an object of type
    /// VrfContext.
    pub vrf_context_ref: Option<String>,

    /// Checksum of cloud configuration for VsVip. Internally set by cloud connector.
    pub vsvip_cloud_config_cksum: Option<String>,
}

/// Vip vip
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Vip {
    /// Auto-allocate floating/elastic IP from the Cloud infrastructure.
    pub auto_allocate_floating_ip: Option<bool>,

    /// Auto-allocate VIP from the provided subnet.
    pub auto_allocate_ip: Option<bool>,

    /// Specifies whether to auto-allocate only a V4 address, only a V6 address, or one of each type.
    /// Enum options - V4_ONLY, V6_ONLY, V4_V6.
    pub auto_allocate_ip_type: Option<String>,

    /// Availability-zone to place the Virtual Service.
    pub availability_zone: Option<String>,

    /// (internal-use) FIP allocated by Avi in the Cloud infrastructure.
    pub avi_allocated_fip: Option<bool>,

    /// (internal-use) VIP allocated by Avi in the Cloud infrastructure.
    pub avi_allocated_vip: Option<bool>,

    /// Discovered networks providing reachability for client facing Vip IP.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub discovered_networks: Vec<DiscoveredNetwork>,

    /// Enable or disable the Vip.
    pub enabled: Option<bool>,

    /// Floating IPv4 to associate with this Vip.
    pub floating_ip: Option<IpAddr>,

    /// Floating IPv6 address to associate with this Vip.
    pub floating_ip6: Option<IpAddr>,

    /// If auto_allocate_floating_ip is True and more than one floating-ip subnets exist, then the subnet
    /// for the floating IP address allocation.
    pub floating_subnet_uuid: Option<String>,

    /// IPv6 Address of the Vip.
    pub ip6_address: Option<IpAddr>,

    /// IPv4 Address of the VIP.
    pub ip_address: Option<IpAddr>,

    /// Subnet and/or Network for allocating VirtualService IP by IPAM Provider module.
    pub ipam_network_subnet: Option<IpNetworkSubnet>,

    /// Manually override the network on which the Vip is placed. It is a reference to an object of type
    /// Network.
    pub network_ref: Option<String>,

    /// Placement networks/subnets to use for vip placement.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placement_networks: Vec<VipPlacementNetwork>,

    /// (internal-use) Network port assigned to the Vip IP address.
    pub port_uuid: Option<String>,

    /// Mask applied for the Vip, non-default mask supported only for wildcard Vip. Allowed values are 0-32.
    pub prefix_length: Option<u32>,

    /// Subnet providing reachability for client facing Vip IP.
    pub subnet: Option<IpAddrPrefix>,

    /// Subnet providing reachability for client facing Vip IPv6.
    pub subnet6: Option<IpAddrPrefix>,

    /// If auto_allocate_ip is True, then the subnet for the Vip IP address allocation.
    pub subnet_uuid: Option<String>,

    /// Unique ID associated with the vip.
    /// Required: true
    #[serialize_always]
    pub vip_id: Option<String>,
}

/// DNSInfo d n s info
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DnsInfo {
    /// Specifies the algorithm to pick the IP address(es) to be returned, when multiple entries are
    /// configured. Enum options - DNS_RECORD_RESPONSE_ROUND_ROBIN, DNS_RECORD_RESPONSE_CONSISTENT_HASH.
    pub algorithm: Option<String>,

    /// Canonical name in CNAME record.
    pub cname: Option<String>,

    /// Fully qualified domain name.
    pub fqdn: Option<String>,

    /// Any metadata associated with this record.
    pub metadata: Option<String>,

    /// Specifies the number of records returned for this FQDN. Enter 0 to return all records.
    pub num_records_in_response: Option<u32>,

    /// Time to live for fqdn record. Default value is chosen from DNS profile for this cloud if no value
    /// provided.
    pub ttl: Option<u32>,

    /// DNS record type. Enum options - DNS_RECORD_OTHER, DNS_RECORD_A, DNS_RECORD_NS, DNS_RECORD_CNAME,
    /// DNS_RECORD_SOA, DNS_RECORD_PTR, DNS_RECORD_HINFO, DNS_RECORD_MX, DNS_RECORD_TXT, DNS_RECORD_RP,
    /// DNS_RECORD_DNSKEY, DNS_RECORD_AAAA, DNS_RECORD_SRV, DNS_RECORD_OPT, DNS_RECORD_RRSIG, DNS_RECORD_AXFR,
    /// DNS_RECORD_ANY.
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

/// IPNetworkSubnet i p network subnet
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IpNetworkSubnet {
    /// Network for VirtualService IP allocation with Vantage as the IPAM provider. Network should be
    /// created before this is configured. It is a reference to an object of type Network.
    pub network_ref: Option<String>,

    /// Subnet for VirtualService IP allocation with Vantage or Infoblox as the IPAM provider. Only one of
    /// subnet or subnet_uuid configuration is allowed.
    pub subnet: Option<IpAddrPrefix>,

    /// Subnet for VirtualService IPv6 allocation with Vantage or Infoblox as the IPAM provider.
    pub subnet6: Option<IpAddrPrefix>,

    pub subnet6_uuid: Option<String>,

    pub subnet_uuid: Option<String>,
}

/// VipPlacementNetwork vip placement network
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VipPlacementNetwork {
    /// Network to use for vip placement. It is a reference to an object of type Network.
    pub network_ref: Option<String>,

    /// IPv4 Subnet to use for vip placement.
    pub subnet: Option<IpAddrPrefix>,

    /// IPv6 subnet to use for vip placement.
    pub subnet6: Option<IpAddrPrefix>,
}

/// DiscoveredNetwork discovered network
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DiscoveredNetwork {
    /// Discovered network for this IP. It is a reference to an object of type Network.
    /// Required: true
    pub network_ref: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subnet: Vec<IpAddrPrefix>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subnet6: Vec<IpAddrPrefix>,
}
