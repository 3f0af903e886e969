use super::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// Pool pool
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Pool {
    /// UNIX time since epoch in microseconds. Units(MICROSECONDS).
    /// Read Only: true
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// Specifies settings related to analytics. It is a reference to an object of type AnalyticsProfile.
    pub analytics_profile_ref: Option<String>,

    /// Allows the option to append port to hostname in the host header while sending a request to the
    /// server. Enum options - NON_DEFAULT_80_443, NEVER, ALWAYS.
    pub append_port: Option<String>,

    /// Persistence will ensure the same user sticks to the same server for a desired duration of time.
    /// It is a reference to an object of type ApplicationPersistenceProfile.
    pub application_persistence_profile_ref: Option<String>,

    /// Inline estimation of capacity of servers.
    pub capacity_estimation: Option<bool>,

    /// Checksum of cloud configuration for Pool. Internally set by cloud connector.
    pub cloud_config_cksum: Option<String>,

    /// It is a reference to an object of type Cloud.
    pub cloud_ref: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// Duration for which new connections will be gradually ramped up to a server recently brought online.
    /// Allowed values are 1-300. Special values are 0 - Immediate. Unit is MIN.
    pub connection_ramp_duration: Option<i32>,

    /// Creator name.
    pub created_by: Option<String>,

    /// Traffic sent to servers will use this destination server port unless overridden by the server's
    /// specific port attribute. Allowed values are 1-65535.
    pub default_server_port: Option<i32>,

    /// Indicates whether existing IPs are disabled(false) or deleted(true) on dns hostname refresh.
    pub delete_server_on_dns_refresh: Option<bool>,

    /// A description of the pool.
    pub description: Option<String>,

    /// Comma separated list of domain names which will be used to verify the common names or subject
    /// alternative names presented by server certificates.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain_name: Vec<String>,

    /// Inherited config from VirtualService.
    pub east_west: Option<bool>,

    /// Enable HTTP/2 for traffic from VirtualService to all backend servers in this pool.
    pub enable_http2: Option<bool>,

    /// Enable or disable the pool. Disabling will terminate all open connections and pause health monitors.
    pub enabled: Option<bool>,

    /// Used to gracefully disable a server. Virtual service waits for the specified time before terminating
    /// the existing connections to the servers that are disabled. Allowed values are 1-7200. Special values
    /// are 0 - Immediate, -1 - Infinite. Unit is MIN.
    pub graceful_disable_timeout: Option<i32>,

    /// Verify server health by applying one or more health monitors. Active monitors generate synthetic
    /// traffic from each Service Engine and mark a server up or down based on the response.
    /// It is a reference to an object of type HealthMonitor.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub health_monitor_refs: Vec<String>,

    /// Enable common name check for server certificate.
    pub host_check_enabled: Option<bool>,

    /// Ignore the server port in building the load balancing state. Applicable only for consistent hash
    /// load balancing algorithm or Disable Port translation (use_service_port) use cases.
    pub ignore_server_port: Option<bool>,

    /// The Passive monitor will monitor client to server connections and requests and adjust traffic load
    /// to servers based on successful responses.
    pub inline_health_monitor: Option<bool>,

    /// Use list of servers from Ip Address Group. It is a reference to an object of type IpAddrGroup.
    pub ipaddrgroup_ref: Option<String>,

    /// The load balancing algorithm will pick a server within the pool's list of available servers.
    /// Enum options - LB_ALGORITHM_LEAST_CONNECTIONS, LB_ALGORITHM_ROUND_ROBIN,
    /// LB_ALGORITHM_FASTEST_RESPONSE, LB_ALGORITHM_CONSISTENT_HASH, LB_ALGORITHM_LEAST_LOAD,
    /// LB_ALGORITHM_FEWEST_SERVERS, LB_ALGORITHM_RANDOM, LB_ALGORITHM_FEWEST_TASKS,
    /// LB_ALGORITHM_NEAREST_SERVER, LB_ALGORITHM_CORE_AFFINITY, LB_ALGORITHM_TOPOLOGY.
    pub lb_algorithm: Option<String>,

    /// HTTP header name to be used for the hash key.
    pub lb_algorithm_consistent_hash_hdr: Option<String>,

    /// Criteria used as a key for determining the hash between the client and server.
    pub lb_algorithm_hash: Option<String>,

    /// Allow server lookup by name.
    pub lookup_server_by_name: Option<bool>,

    /// List of labels to be used for granular RBAC.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// The maximum number of concurrent connections allowed to each server within the pool.
    pub max_concurrent_connections_per_server: Option<i32>,

    /// Minimum number of health monitors in UP state to mark server UP.
    pub min_health_monitors_up: Option<u32>,

    /// Minimum number of servers in UP state for marking the pool UP.
    pub min_servers_up: Option<u32>,

    /// The name of the pool.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// Avi will validate the SSL certificate present by a server against the selected PKI Profile.
    /// It is a reference to an object of type PKIProfile.
    pub pki_profile_ref: Option<String>,

    /// Manually select the networks and subnets used to provide reachability to the pool's servers.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub placement_networks: Vec<PlacementNetwork>,

    /// Type or Purpose, the Pool is to be used for. Enum options - POOL_TYPE_GENERIC_APP, POOL_TYPE_OAUTH.
    pub pool_type: Option<String>,

    /// Minimum number of requests to be queued when pool is full.
    pub request_queue_depth: Option<u32>,

    /// Enable request queue when pool is full.
    pub request_queue_enabled: Option<bool>,

    /// This field is used as a flag to create a job for JobManager.
    pub resolve_pool_by_dns: Option<bool>,

    /// Rewrite incoming Host Header to server name of the server to which the request is proxied.
    pub rewrite_host_header_to_server_name: Option<bool>,

    /// If SNI server name is specified, rewrite incoming host header to the SNI server name.
    pub rewrite_host_header_to_sni: Option<bool>,

    /// Enable to do routing when this pool is selected to send traffic. No servers present in routing pool.
    pub routing_pool: Option<bool>,

    /// Server graceful disable timeout behaviour. Enum options - DISALLOW_NEW_CONNECTION,
    /// ALLOW_NEW_CONNECTION_IF_PERSISTENCE_PRESENT.
    pub server_disable_type: Option<String>,

    /// Fully qualified DNS hostname which will be used in the TLS SNI extension in server connections if
    /// SNI is enabled. If no value is specified, Avi will use the incoming host header instead.
    pub server_name: Option<String>,

    /// Server timeout value specifies the time within which a server connection needs to be established
    /// and a request-response exchange completes between AVI and the server. Value of 0 results in using
    /// default timeout of 60 minutes. Allowed values are 0-21600000. Unit is MILLISECONDS.
    pub server_timeout: Option<u32>,

    /// The pool directs load balanced traffic to this list of destination servers. The servers can be
    /// configured by IP address, name, network or via IP Address Group.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    /// Metadata pertaining to the service provided by this Pool. In Openshift/Kubernetes environments, app
    /// metadata info is stored.
    pub service_metadata: Option<String>,

    /// Enable TLS SNI for server connections. If disabled, Avi will not send the SNI extension as part of
    /// the handshake.
    pub sni_enabled: Option<bool>,

    /// Service Engines will present a client SSL certificate to the server.
    /// It is a reference to an object of type SSLKeyAndCertificate.
    pub ssl_key_and_certificate_ref: Option<String>,

    /// When enabled, Avi re-encrypts traffic to the backend servers. The specific SSL profile defines which
    /// ciphers and SSL versions will be supported. It is a reference to an object of type SSLProfile.
    pub ssl_profile_ref: Option<String>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// This tier1_lr field should be set same as VirtualService associated for NSX-T.
    pub tier1_lr: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    /// Do not translate the client's destination port when sending the connection to the server. The pool
    /// or servers specified service port will still be used for health monitoring.
    pub use_service_port: Option<bool>,

    /// This applies only when use_service_port is set to true. If enabled, SSL mode of the connection to
    /// the server is decided by the SSL mode on the Virtualservice service port, on which the request was
    /// received.
    pub use_service_ssl_mode: Option<bool>,

    /// UUID of the pool.
    pub uuid: Option<String>,

    /// Virtual Routing Context that the pool is bound to. This is used to provide the isolation of the set
    /// of networks the pool is attached to. It is a reference to an object of type VrfContext.
    pub vrf_ref: Option<String>,
}

/// Server server
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Server {
    /// Name of autoscaling group this server belongs to.
    pub autoscaling_group_name: Option<String>,

    /// Availability-zone of the server VM.
    pub availability_zone: Option<String>,

    /// A description of the Server.
    pub description: Option<String>,

    /// (internal-use) Discovered networks providing reachability for server IP. This field is used
    /// internally by Avi, not editable by the user.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub discovered_networks: Vec<DiscoveredNetwork>,

    /// Enable, Disable or Graceful Disable determine if new or existing connections to the server are
    /// allowed.
    pub enabled: Option<bool>,

    /// UUID identifying VM in OpenStack and other external compute.
    pub external_uuid: Option<String>,

    /// DNS resolvable name of the server. May be used in place of the IP address.
    pub hostname: Option<String>,

    /// IP Address of the server. Required if there is no resolvable host name.
    /// Required: true
    #[serialize_always]
    pub ip: Option<IpAddr>,

    /// (internal-use) Geographic location of the server. Currently only for internal usage.
    pub location: Option<String>,

    /// MAC address of server.
    pub mac_address: Option<String>,

    /// (internal-use) This field is used internally by Avi, not editable by the user.
    /// It is a reference to an object of type VIMgrNWRuntime.
    pub nw_ref: Option<String>,

    /// Optionally specify the servers port number. This will override the pool's default server port
    /// attribute. Allowed values are 1-65535. Special values are 0- use backend port in pool.
    pub port: Option<i32>,

    /// Header value for custom header persistence.
    pub prst_hdr_val: Option<String>,

    /// Ratio of selecting eligible servers in the pool. Allowed values are 1-20.
    pub ratio: Option<i32>,

    /// Auto resolve server's IP using DNS name.
    pub resolve_server_by_dns: Option<bool>,

    /// Rewrite incoming Host Header to server name.
    pub rewrite_host_header: Option<bool>,

    /// Hostname of the node where the server VM or container resides.
    pub server_node: Option<String>,

    /// If statically learned.
    #[serde(rename = "static")]
    pub static_: Option<bool>,

    /// Verify server belongs to a discovered network or reachable via a discovered network. Verify
    /// reachable network isn't the OpenStack management network.
    pub verify_network: Option<bool>,

    /// (internal-use) This field is used internally by Avi, not editable by the user.
    /// It is a reference to an object of type VIMgrVMRuntime.
    pub vm_ref: Option<String>,
}

impl Server {
    pub fn new(ip: IpAddr, port: i32) -> Self {
        Server {
            ip: Some(ip),
            port: Some(port),
            ..Default::default()
        }
    }
}

/// PlacementNetwork placement network
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PlacementNetwork {
    /// It is a reference to an object of type Network.
    /// Required: true
    #[serialize_always]
    pub network_ref: Option<String>,

    /// Required: true
    #[serialize_always]
    pub subnet: Option<IpAddrPrefix>,
}

/// PoolGroup pool group
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct PoolGroup {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// Checksum of cloud configuration for PoolGroup. Internally set by cloud connector.
    pub cloud_config_cksum: Option<String>,

    /// It is a reference to an object of type Cloud.
    pub cloud_ref: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// Name of the user who created the object.
    pub created_by: Option<String>,

    /// When setup autoscale manager will automatically promote new pools into production when deployment
    /// goals are met. It is a reference to an object of type PoolGroupDeploymentPolicy.
    pub deployment_policy_ref: Option<String>,

    /// Description of Pool Group.
    pub description: Option<String>,

    /// Enable an action - Close Connection, HTTP Redirect, or Local HTTP Response - when a pool group
    /// failure happens. By default, a connection will be closed, in case the pool group experiences a
    /// failure.
    pub fail_action: Option<FailAction>,

    /// Whether an implicit set of priority labels is generated.
    pub implicit_priority_labels: Option<bool>,

    /// List of labels to be used for granular RBAC.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// List of pool group members object of type PoolGroupMember.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<PoolGroupMember>,

    /// The minimum number of servers to distribute traffic to. Allowed values are 1-65535. Special values
    /// are 0 - Disable.
    pub min_servers: Option<u32>,

    /// The name of the pool group.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// UUID of the priority labels. If not provided, pool group member priority label will be interpreted
    /// as a number with a larger number considered higher priority. It is a reference to an object of type
    /// PriorityLabels.
    pub priority_labels_ref: Option<String>,

    /// Metadata pertaining to the service provided by this PoolGroup. In Openshift/Kubernetes environments,
    /// route/ingress info is stored.
    pub service_metadata: Option<String>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    /// UUID of the pool group.
    pub uuid: Option<String>,
}

/// PoolGroupMember pool group member
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PoolGroupMember {
    /// Pool deployment state used with the PG deployment policy. Enum options - EVALUATION_IN_PROGRESS,
    /// IN_SERVICE, OUT_OF_SERVICE, EVALUATION_FAILED.
    pub deployment_state: Option<String>,

    /// UUID of the pool. It is a reference to an object of type Pool.
    /// Required: true
    #[serialize_always]
    pub pool_ref: Option<String>,

    /// All pools with same label are treated similarly in a pool group. A pool with a higher priority is
    /// selected, as long as the pool is eligible or an explicit policy chooses a different pool.
    pub priority_label: Option<String>,

    /// Ratio of selecting eligible pools in the pool group. Allowed values are 1-1000. Special values are
    /// 0 - Do not select this pool for new connections.
    pub ratio: Option<u32>,
}

/// FailAction fail action
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FailAction {
    /// Local response to HTTP requests when pool experiences a failure.
    pub local_rsp: Option<FailActionHttpLocalResponse>,

    /// URL to redirect HTTP requests to when pool experiences a failure.
    pub redirect: Option<FailActionHttpRedirect>,

    /// Enables a response to client when pool experiences a failure. By default TCP connection is closed.
    /// Enum options - FAIL_ACTION_HTTP_REDIRECT, FAIL_ACTION_HTTP_LOCAL_RSP, FAIL_ACTION_CLOSE_CONN,
    /// FAIL_ACTION_BACKUP_POOL.
    /// Required: true
    #[serialize_always]
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FailActionHttpLocalResponse {
    /// Enum options - FAIL_HTTP_STATUS_CODE_200, FAIL_HTTP_STATUS_CODE_503.
    pub status_code: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FailActionHttpRedirect {
    /// The host to which the redirect request is sent.
    /// Required: true
    #[serialize_always]
    pub host: Option<String>,

    /// Path configuration for the redirect request.
    pub path: Option<String>,

    /// Enum options - HTTP, HTTPS.
    pub protocol: Option<String>,

    /// Query configuration for the redirect request URI.
    pub query: Option<String>,

    /// Enum options - HTTP_REDIRECT_STATUS_CODE_301, HTTP_REDIRECT_STATUS_CODE_302,
    /// HTTP_REDIRECT_STATUS_CODE_307.
    pub status_code: Option<String>,
}
