use super::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// VirtualService virtual service
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VirtualService {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    /// Read Only: true
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// This configuration only applies if the VirtualService is in Legacy Active Standby HA mode and Load
    /// Distribution among Active Standby is enabled. Enum options - ACTIVE_STANDBY_SE_1, ACTIVE_STANDBY_SE_2.
    pub active_standby_se_tag: Option<String>,

    /// Keep advertising Virtual Service via BGP even if it is marked down by health monitor.
    pub advertise_down_vs: Option<bool>,

    /// Process request even if invalid client certificate is presented.
    pub allow_invalid_client_cert: Option<bool>,

    /// Specifies settings related to analytics. It is a reference to an object of type AnalyticsProfile.
    pub analytics_profile_ref: Option<String>,

    /// Enable application layer specific features for the Virtual Service.
    /// It is a reference to an object of type ApplicationProfile.
    pub application_profile_ref: Option<String>,

    /// LOCAL_PREF to be used for VS VIP advertised. Applicable only over iBGP.
    pub bgp_local_preference: Option<u32>,

    /// Number of times the local AS should be prepended additionally to VS VIP. Applicable only over eBGP.
    pub bgp_num_as_path_prepend: Option<u32>,

    /// Select BGP peers, using peer label, for VsVip advertisement.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bgp_peer_labels: Vec<String>,

    /// Close client connection on vs config update.
    pub close_client_conn_on_config_update: Option<bool>,

    /// Checksum of cloud configuration for VS. Internally set by cloud connector.
    pub cloud_config_cksum: Option<String>,

    /// It is a reference to an object of type Cloud.
    pub cloud_ref: Option<String>,

    /// Enum options - CLOUD_NONE, CLOUD_VCENTER, CLOUD_OPENSTACK, CLOUD_AWS, CLOUD_VCA, CLOUD_APIC,
    /// CLOUD_MESOS, CLOUD_LINUXSERVER, CLOUD_DOCKER_UCP, CLOUD_RANCHER, CLOUD_OSHIFT_K8S, CLOUD_AZURE,
    /// CLOUD_GCP, CLOUD_NSXT.
    pub cloud_type: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// Creator name.
    pub created_by: Option<String>,

    /// Select the algorithm for QoS fairness. This determines how multiple Virtual Services sharing the
    /// same Service Engines will prioritize traffic over a congested network.
    pub delay_fairness: Option<bool>,

    pub description: Option<String>,

    /// Service discovery specific data including fully qualified domain name, type and Time-To-Live of the
    /// DNS record. Note that only one of fqdn and dns_info setting is allowed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dns_info: Vec<DnsInfo>,

    /// Force placement on all SE's in service group (Mesos mode only).
    pub east_west_placement: Option<bool>,

    /// Response traffic to clients will be sent back to the source MAC address of the connection, rather
    /// than statically sent to a default gateway.
    pub enable_autogw: Option<bool>,

    /// Enable Route Health Injection using the BGP Config in the vrf context.
    pub enable_rhi: Option<bool>,

    /// Enable Route Health Injection for Source NAT'ted floating IP Address using the BGP Config in the vrf
    /// context.
    pub enable_rhi_snat: Option<bool>,

    /// Enable or disable the Virtual Service.
    pub enabled: Option<bool>,

    /// Error Page Profile to be used for this virtualservice. It is a reference to an object of type
    /// ErrorPageProfile.
    pub error_page_profile_ref: Option<String>,

    /// Criteria for flow distribution among SEs. Enum options - LOAD_AWARE, CONSISTENT_HASH_SOURCE_IP_ADDRESS,
    /// CONSISTENT_HASH_SOURCE_IP_ADDRESS_AND_PORT.
    pub flow_dist: Option<String>,

    /// DNS resolvable, fully qualified domain name of the virtualservice. Only one of 'fqdn' and 'dns_info'
    /// configuration is allowed.
    pub fqdn: Option<String>,

    /// Translate the host name sent to the servers to this value.
    pub host_name_xlate: Option<String>,

    /// HTTP Policies applied on the data traffic of the Virtual Service.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub http_policies: Vec<HttpPolicies>,

    /// Ignore Pool servers network reachability constraints for Virtual Service placement.
    pub ign_pool_net_reach: Option<bool>,

    /// Limit potential DoS attackers who exceed max_cps_per_client significantly to a fraction of
    /// max_cps_per_client for a while.
    pub limit_doser: Option<bool>,

    /// List of labels to be used for granular RBAC.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// Maximum connections per second per client IP. Allowed values are 10-1000. Special values are 0-
    /// unlimited.
    pub max_cps_per_client: Option<u32>,

    /// The minimum number of UP pools in the pool group required for the VS to stay UP.
    pub min_pools_up: Option<u32>,

    /// Name for the Virtual Service.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// Determines network settings such as protocol, TCP or UDP, and related options for the protocol.
    /// It is a reference to an object of type NetworkProfile.
    pub network_profile_ref: Option<String>,

    /// Network security policies for the Virtual Service. It is a reference to an object of type
    /// NetworkSecurityPolicy.
    pub network_security_policy_ref: Option<String>,

    /// The pool group is an object that contains pools. It is a reference to an object of type PoolGroup.
    pub pool_group_ref: Option<String>,

    /// The pool is an object that contains destination servers and related attributes such as
    /// load-balancing and persistence. It is a reference to an object of type Pool.
    pub pool_ref: Option<String>,

    /// Remove listening port if VirtualService is down.
    pub remove_listening_port_on_vs_down: Option<bool>,

    /// Disable re-distribution of flows across service engines for a virtual service.
    pub scaleout_ecmp: Option<bool>,

    /// The Service Engine Group to use for this Virtual Service. Moving to a new SE Group is disruptive to
    /// existing connections for this VS. It is a reference to an object of type ServiceEngineGroup.
    pub se_group_ref: Option<String>,

    /// Determines the network settings profile for the server side of TCP proxied connections.
    /// It is a reference to an object of type NetworkProfile.
    pub server_network_profile_ref: Option<String>,

    /// Metadata pertaining to the service provided by this virtual service. In openshift/kubernetes
    /// environments, egress pod info is stored. Any user input to this field will be overwritten by Avi
    /// Vantage.
    pub service_metadata: Option<String>,

    /// List of Services defined for this Virtual Service.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,

    /// NAT'ted floating source IP Address(es) for upstream connection to servers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub snat_ip: Vec<IpAddr>,

    /// GSLB pools used to manage site-persistence functionality. It is a reference to an object of type
    /// Pool.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sp_pool_refs: Vec<String>,

    /// Select or create one or two certificates, EC and/or RSA, that will be presented to SSL/TLS
    /// terminated connections. It is a reference to an object of type SSLKeyAndCertificate.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ssl_key_and_certificate_refs: Vec<String>,

    /// Determines the set of SSL versions and ciphers to accept for SSL/TLS terminated connections.
    /// It is a reference to an object of type SSLProfile.
    pub ssl_profile_ref: Option<String>,

    /// Expected number of SSL session cache entries (may be exceeded).
    pub ssl_sess_cache_avg_size: Option<u32>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// Server network or list of servers for cloning traffic. It is a reference to an object of type
    /// TrafficCloneProfile.
    pub traffic_clone_profile_ref: Option<String>,

    /// Knob to enable the Virtual Service traffic on its assigned service engines. This setting is
    /// effective only when the enabled flag is set to True.
    pub traffic_enabled: Option<bool>,

    /// Specify if this is a normal Virtual Service, or if it is the parent or child of an SNI-enabled
    /// virtual hosted Virtual Service. Enum options - VS_TYPE_NORMAL, VS_TYPE_VH_PARENT, VS_TYPE_VH_CHILD.
    #[serde(rename = "type")]
    pub type_: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    /// Use the Virtual IP as the SNAT IP for health monitoring and sending traffic to the backend servers
    /// instead of the Service Engine interface IP.
    pub use_vip_as_snat: Option<bool>,

    /// Unique object identifier of the object.
    pub uuid: Option<String>,

    /// The exact name requested from the client's SNI-enabled TLS hello domain name field. If this is a
    /// match, the parent VS will forward the connection to this child VS.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vh_domain_name: Vec<String>,

    /// Host and path match criteria to select this child VS.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vh_matches: Vec<VhMatch>,

    /// Specifies the Virtual Service acting as Virtual Hosting (SNI) parent.
    /// It is a reference to an object of type VirtualService.
    pub vh_parent_vs_ref: Option<String>,

    /// Specify if the Virtual Hosting VS is of type SNI or Enhanced. Enum options - VS_TYPE_VH_SNI,
    /// VS_TYPE_VH_ENHANCED.
    pub vh_type: Option<String>,

    /// List of Virtual Service IPs. While creating a 'Shared VS',please use vsvip_ref to point to the shared
    /// entities.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vip: Vec<Vip>,

    /// Virtual Routing Context that the Virtual Service is bound to. This is used to provide the isolation
    /// of the set of networks the application is attached to. It is a reference to an object of type
    /// VrfContext.
    pub vrf_context_ref: Option<String>,

    /// Datascripts applied on the data traffic of the Virtual Service.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vs_datascripts: Vec<VsDataScripts>,

    /// Checksum of cloud configuration for VsVip. Internally set by cloud connector.
    pub vsvip_cloud_config_cksum: Option<String>,

    /// Mostly used during the creation of Shared VS, this field refers to entities that can be shared
    /// across Virtual Services. It is a reference to an object of type VsVip.
    pub vsvip_ref: Option<String>,

    /// WAF policy for the Virtual Service. It is a reference to an object of type WafPolicy.
    pub waf_policy_ref: Option<String>,

    /// The Quality of Service weight to assign to traffic transmitted from this Virtual Service.
    pub weight: Option<u32>,
}

/// Service service
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Service {
    /// Enable HTTP2 on this port.
    pub enable_http2: Option<bool>,

    /// Enable SSL termination and offload for traffic from clients.
    pub enable_ssl: Option<bool>,

    /// Used for Horizon deployment. If set used for L7 redirect.
    pub horizon_internal: Option<bool>,

    /// Source port used by VS for active FTP data connections.
    pub is_active_ftp_data_port: Option<bool>,

    /// Enable application layer specific features for the this specific service.
    /// It is a reference to an object of type ApplicationProfile.
    pub override_application_profile_ref: Option<String>,

    /// Override the network profile for this specific service port.
    /// It is a reference to an object of type NetworkProfile.
    pub override_network_profile_ref: Option<String>,

    /// The Virtual Service's port number. Allowed values are 0-65535.
    /// Required: true
    #[serialize_always]
    pub port: Option<i32>,

    /// The end of the Virtual Service's port number range. Allowed values are 1-65535. Special values are
    /// 0- single port.
    pub port_range_end: Option<i32>,
}

impl Service {
    pub fn new(port: i32, enable_ssl: bool) -> Self {
        Service {
            port: Some(port),
            enable_ssl: Some(enable_ssl),
            ..Default::default()
        }
    }
}

/// HTTPPolicies HTTP policies
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpPolicies {
    /// HTTP Policy Set. It is a reference to an object of type HTTPPolicySet.
    /// Required: true
    #[serialize_always]
    pub http_policy_set_ref: Option<String>,

    /// Index of the virtual service HTTP policy collection.
    /// Required: true
    #[serialize_always]
    pub index: Option<i32>,
}

/// VSDataScripts v s data scripts
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VsDataScripts {
    /// Index of the virtual service datascript collection.
    /// Required: true
    #[serialize_always]
    pub index: Option<i32>,

    /// UUID of the virtual service datascript collection. It is a reference to an object of type
    /// VSDataScriptSet.
    /// Required: true
    #[serialize_always]
    pub vs_datascript_set_ref: Option<String>,
}

/// VHMatch v h match
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VhMatch {
    /// Host/domain name match configuration. Must be configured along with at least one path match criteria.
    /// Required: true
    #[serialize_always]
    pub host: Option<String>,

    /// Resource/uri path match configuration. Must be configured along with Host match criteria.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<PathMatch>,
}

/// VSDataScriptSet v s data script set
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct VsDataScriptSet {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// Creator name.
    pub created_by: Option<String>,

    /// DataScripts to execute.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub datascript: Vec<VsDataScript>,

    pub description: Option<String>,

    /// UUID of IP Groups that could be referred by VSDataScriptSet objects.
    /// It is a reference to an object of type IpAddrGroup.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ipgroup_refs: Vec<String>,

    /// List of labels to be used for granular RBAC.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// Name for the virtual service datascript collection.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// UUID of pool groups that could be referred by VSDataScriptSet objects.
    /// It is a reference to an object of type PoolGroup.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pool_group_refs: Vec<String>,

    /// UUID of pools that could be referred by VSDataScriptSet objects.
    /// It is a reference to an object of type Pool.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pool_refs: Vec<String>,

    /// List of protocol parsers that could be referred by VSDataScriptSet objects.
    /// It is a reference to an object of type ProtocolParser.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub protocol_parser_refs: Vec<String>,

    /// UUID of String Groups that could be referred by VSDataScriptSet objects.
    /// It is a reference to an object of type StringGroup.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub string_group_refs: Vec<String>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    pub url: Option<String>,

    /// UUID of the virtual service datascript collection.
    pub uuid: Option<String>,
}

/// VSDataScript v s data script
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VsDataScript {
    /// Event triggering execution of datascript. Enum options - VS_DATASCRIPT_EVT_HTTP_REQ,
    /// VS_DATASCRIPT_EVT_HTTP_RESP, VS_DATASCRIPT_EVT_HTTP_RESP_DATA, VS_DATASCRIPT_EVT_HTTP_LB_FAILED,
    /// VS_DATASCRIPT_EVT_HTTP_REQ_DATA, VS_DATASCRIPT_EVT_HTTP_RESP_FAILED, VS_DATASCRIPT_EVT_HTTP_LB_DONE,
    /// VS_DATASCRIPT_EVT_HTTP_AUTH, VS_DATASCRIPT_EVT_HTTP_POST_AUTH, VS_DATASCRIPT_EVT_TCP_CLIENT_ACCEPT,
    /// VS_DATASCRIPT_EVT_SSL_HANDSHAKE_DONE, VS_DATASCRIPT_EVT_CLIENT_SSL_PRE_CONNECT,
    /// VS_DATASCRIPT_EVT_CLIENT_SSL_CLIENT_HELLO_RECV, VS_DATASCRIPT_EVT_DNS_REQ,
    /// VS_DATASCRIPT_EVT_DNS_RESP, VS_DATASCRIPT_EVT_L4_REQUEST, VS_DATASCRIPT_EVT_L4_RESPONSE,
    /// VS_DATASCRIPT_EVT_MAX.
    /// Required: true
    #[serialize_always]
    pub evt: Option<String>,

    /// Datascript to execute when the event triggers.
    /// Required: true
    #[serialize_always]
    pub script: Option<String>,
}
