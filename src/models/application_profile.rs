use super::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// ApplicationProfile application profile
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApplicationProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// Checksum of application profiles. Internally set by cloud connector.
    pub cloud_config_cksum: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// Name of the application profile creator.
    pub created_by: Option<String>,

    pub description: Option<String>,

    /// Specifies various DNS service related controls for virtual service.
    pub dns_service_profile: Option<DnsServiceApplicationProfile>,

    /// Specifies the HTTP application proxy profile parameters.
    pub http_profile: Option<HttpApplicationProfile>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// The name of the application profile.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// Specifies if client IP needs to be preserved for backend connection. Not compatible with
    /// Connection Multiplexing.
    pub preserve_client_ip: Option<bool>,

    /// Specifies if destination IP and port needs to be preserved for backend connection.
    pub preserve_dest_ip_port: Option<bool>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// Specifies which application layer proxy is enabled for the virtual service. Enum options -
    /// APPLICATION_PROFILE_TYPE_L4, APPLICATION_PROFILE_TYPE_HTTP, APPLICATION_PROFILE_TYPE_SYSLOG,
    /// APPLICATION_PROFILE_TYPE_DNS, APPLICATION_PROFILE_TYPE_SSL, APPLICATION_PROFILE_TYPE_SIP.
    /// Required: true
    #[serialize_always]
    #[serde(rename = "type")]
    pub type_: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    pub uuid: Option<String>,
}

/// HTTPApplicationProfile HTTP application profile
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpApplicationProfile {
    /// Allow use of dot (.) in HTTP header names.
    pub allow_dots_in_header_name: Option<bool>,

    /// The max idle time allowed between HTTP requests over a Keep-alive connection. Unit is MILLISECONDS.
    pub keepalive_timeout: Option<u32>,

    /// Enable request body buffering for POST requests.
    pub enable_request_body_buffering: Option<bool>,

    /// Client requests received via HTTP will be redirected to HTTPS.
    pub http_to_https: Option<bool>,

    /// Maximum size in Kbytes of a single HTTP header in the client request. Allowed values are 1-64.
    /// Unit is KB.
    pub client_max_header_size: Option<i32>,

    /// Maximum size in Kbytes of all the client HTTP request headers, overridden by
    /// client_max_header_size if that is larger. Allowed values are 1-256. Unit is KB.
    pub client_max_request_size: Option<i32>,

    /// Maximum number of HTTP requests per connection.
    pub max_keepalive_requests: Option<i32>,

    /// Maximum size for the client request body. Unit is KB.
    pub client_max_body_size: Option<u64>,

    /// Mark server cookies with the 'Secure' attribute.
    pub secure_cookie_enabled: Option<bool>,

    /// Connection Multiplexing. Allows reuse of server side connections.
    pub connection_multiplexing_enabled: Option<bool>,

    /// Inserts HTTP Strict-Transport-Security header in the HTTPS response.
    pub hsts_enabled: Option<bool>,

    /// Number of days for which the client should regard this virtual service as a known HSTS host.
    pub hsts_max_age: Option<u64>,

    /// The client's original IP address is inserted into an HTTP request header sent to the server.
    pub x_forwarded_proto_enabled: Option<bool>,

    /// Insert an X-Forwarded-For HTTP header with the client's IP address.
    pub xff_enabled: Option<bool>,

    /// Provide a custom name for the X-Forwarded-For header sent to the servers.
    pub xff_alternate_name: Option<String>,

    /// Use 'Keep-Alive' header timeout sent by application instead of sending the HTTP Keep-Alive Timeout.
    pub use_app_keepalive_timeout: Option<bool>,

    /// Enable support for fire and forget feature.
    pub websockets_enabled: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DnsServiceApplicationProfile {
    /// Respond to AAAA queries with empty response when there are only IPV4 records.
    pub aaaa_empty_response: Option<bool>,

    /// Subdomain names serviced by this Virtual Service.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain_names: Vec<String>,

    /// Enable DNS service to be aware of EDNS.
    pub edns: Option<bool>,

    /// Specifies the TTL value (in seconds) for SOA (Start of Authority) record.
    pub negative_caching_ttl: Option<u32>,

    /// Specifies the TTL value (in seconds) for records served by DNS Service.
    pub ttl: Option<u32>,
}

/// ApplicationPersistenceProfile application persistence profile
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ApplicationPersistenceProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    pub description: Option<String>,

    /// Specifies the Application Cookie Persistence profile parameters.
    pub app_cookie_persistence_profile: Option<AppCookiePersistenceProfile>,

    /// Specifies the custom HTTP Header Persistence profile parameters.
    pub hdr_persistence_profile: Option<HdrPersistenceProfile>,

    /// Specifies the HTTP Cookie Persistence profile parameters.
    pub http_cookie_persistence_profile: Option<HttpCookiePersistenceProfile>,

    /// Specifies the Client IP Persistence profile parameters.
    pub ip_persistence_profile: Option<IpPersistenceProfile>,

    /// This field describes the object's replication scope.
    pub is_federated: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// A user-friendly name for the persistence profile.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// Method used to persist clients to the same server for a duration of time or a session. Enum options -
    /// PERSISTENCE_TYPE_CLIENT_IP_ADDRESS, PERSISTENCE_TYPE_HTTP_COOKIE, PERSISTENCE_TYPE_TLS,
    /// PERSISTENCE_TYPE_CLIENT_IPV6_ADDRESS, PERSISTENCE_TYPE_CUSTOM_HTTP_HEADER,
    /// PERSISTENCE_TYPE_APP_COOKIE, PERSISTENCE_TYPE_GSLB_SITE.
    /// Required: true
    #[serialize_always]
    pub persistence_type: Option<String>,

    /// Specifies behavior when a persistent server has been marked down by a health monitor. Enum options -
    /// HM_DOWN_PICK_NEW_SERVER, HM_DOWN_ABORT_CONNECTION, HM_DOWN_CONTINUE_PERSISTENT_SERVER.
    pub server_hm_down_recovery: Option<String>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    pub uuid: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppCookiePersistenceProfile {
    /// Key to use for cookie encryption.
    pub encryption_key: Option<String>,

    /// Header or cookie name for application cookie persistence.
    /// Required: true
    #[serialize_always]
    pub prst_hdr_name: Option<String>,

    /// The length of time after a client's connections have closed before expiring the client's
    /// persistence to a server. Unit is MIN.
    pub timeout: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HdrPersistenceProfile {
    /// Header name for custom header persistence.
    pub prst_hdr_name: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpCookiePersistenceProfile {
    /// If no persistence cookie was received from the client, always send it.
    pub always_send_cookie: Option<bool>,

    /// HTTP cookie name for cookie persistence.
    pub cookie_name: Option<String>,

    /// Key name to use for cookie encryption.
    pub encryption_key: Option<String>,

    /// When True, the cookie used is a session cookie, i.e., it is not persisted on the client and is
    /// deleted when the browser is closed.
    pub http_only: Option<bool>,

    /// The maximum lifetime for the HTTP cookie persistence. Unit is MIN.
    pub timeout: Option<i32>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct IpPersistenceProfile {
    /// Mask to be applied on client IPv6 address.
    pub ip_mask: Option<u32>,

    /// Persistence will ensure the same user sticks to the same server for a desired duration of time.
    /// Unit is MIN.
    pub ip_persistent_timeout: Option<u32>,
}

/// NetworkProfile network profile
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct NetworkProfile {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// When enabled, Avi mirrors all TCP fastpath connections to standby.
    pub connection_mirror: Option<bool>,

    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// The name of the network profile.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// Required: true
    #[serialize_always]
    pub profile: Option<NetworkProfileUnion>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    pub uuid: Option<String>,
}

/// NetworkProfileUnion network profile union
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NetworkProfileUnion {
    pub tcp_fast_path_profile: Option<TcpFastPathProfile>,

    pub tcp_proxy_profile: Option<TcpProxyProfile>,

    /// Configure one of either proxy or fast path profiles. Enum options - PROTOCOL_TYPE_TCP_PROXY,
    /// PROTOCOL_TYPE_TCP_FAST_PATH, PROTOCOL_TYPE_UDP_FAST_PATH, PROTOCOL_TYPE_UDP_PROXY,
    /// PROTOCOL_TYPE_SCTP_PROXY, PROTOCOL_TYPE_SCTP_FAST_PATH.
    /// Required: true
    #[serialize_always]
    #[serde(rename = "type")]
    pub type_: Option<String>,

    pub udp_fast_path_profile: Option<UdpFastPathProfile>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TcpFastPathProfile {
    /// When enabled, Avi will complete the 3-way handshake with the client before forwarding any packets
    /// to the server.
    pub enable_syn_protection: Option<bool>,

    /// The amount of time (in sec) for which a connection needs to be idle before it is eligible to be
    /// deleted. Unit is SEC.
    pub session_idle_timeout: Option<i32>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TcpProxyProfile {
    /// Dynamically pick the relevant parameters for connections.
    pub automatic: Option<bool>,

    /// The duration for keepalive probes or session idle timeout. Unit is SEC.
    pub idle_connection_timeout: Option<i32>,

    /// Controls the behavior of idle connections. Enum options - TCP_CLOSE_IDLE, KEEP_ALIVE.
    pub idle_connection_type: Option<String>,

    /// Maximum TCP segment size. Unit is BYTES.
    pub mss: Option<u32>,

    /// Use the interface MTU to calculate the TCP max segment size.
    pub use_interface_mtu: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UdpFastPathProfile {
    /// When enabled, every UDP packet is considered a new transaction and may be load balanced to a
    /// different server.
    pub per_pkt_loadbalance: Option<bool>,

    /// The amount of time (in sec) for which a flow needs to be idle before it is deleted. Unit is SEC.
    pub session_idle_timeout: Option<u32>,

    /// When disabled, Source NAT will not be performed for all client UDP packets.
    pub snat: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_application_profile() {
        let profile = ApplicationProfile {
            name: Some("System-Secure-HTTP".to_string()),
            type_: Some("APPLICATION_PROFILE_TYPE_HTTP".to_string()),
            http_profile: Some(HttpApplicationProfile {
                http_to_https: Some(true),
                xff_enabled: Some(true),
                xff_alternate_name: Some("X-Forwarded-For".to_string()),
                hsts_enabled: Some(true),
                client_max_header_size: Some(12),
                client_max_request_size: Some(48),
                ..Default::default()
            }),
            ..Default::default()
        };

        let encoded = serde_json::to_value(&profile).expect("cannot encode application profile");
        assert_eq!(
            encoded,
            json!({
                "name": "System-Secure-HTTP",
                "type": "APPLICATION_PROFILE_TYPE_HTTP",
                "http_profile": {
                    "http_to_https": true,
                    "xff_enabled": true,
                    "xff_alternate_name": "X-Forwarded-For",
                    "hsts_enabled": true,
                    "client_max_header_size": 12,
                    "client_max_request_size": 48
                }
            })
        );
    }

    #[test]
    fn test_network_profile_union_type() {
        let profile: NetworkProfile = serde_json::from_value(json!({
            "name": "System-UDP-Fast-Path",
            "profile": {"type": "PROTOCOL_TYPE_UDP_FAST_PATH", "udp_fast_path_profile": {"snat": true, "session_idle_timeout": 10}}
        }))
        .expect("cannot decode network profile");

        let union = profile.profile.expect("missing profile union");
        assert_eq!(union.type_.as_deref(), Some("PROTOCOL_TYPE_UDP_FAST_PATH"));
        assert_eq!(union.udp_fast_path_profile.and_then(|udp| udp.session_idle_timeout), Some(10));
        assert!(union.tcp_proxy_profile.is_none());
    }

    #[test]
    fn test_persistence_profile_required_fields() {
        assert_eq!(
            serde_json::to_value(ApplicationPersistenceProfile::default()).expect("cannot encode"),
            json!({"name": null, "persistence_type": null})
        );
    }

    #[test]
    fn test_application_profile_round_trip() {
        let document = json!({
            "_last_modified": "1617277282624283",
            "url": "https://10.50.1.2/api/applicationprofile/applicationprofile-5b2c",
            "uuid": "applicationprofile-5b2c",
            "name": "cluster--http-profile",
            "type": "APPLICATION_PROFILE_TYPE_HTTP",
            "tenant_ref": "https://10.50.1.2/api/tenant/admin",
            "cloud_config_cksum": "a1b2c3",
            "created_by": "ako-cluster",
            "description": "shared http profile",
            "preserve_client_ip": false,
            "preserve_dest_ip_port": false,
            "http_profile": {
                "xff_enabled": true,
                "xff_alternate_name": "X-Forwarded-For",
                "client_max_header_size": 12,
                "client_max_request_size": 48,
                "keepalive_timeout": 30000
            },
            "markers": [{"key": "app", "values": ["foo"]}],
            "configpb_attributes": {"version": 2}
        });

        let profile: ApplicationProfile = serde_json::from_value(document.clone()).expect("cannot decode profile");
        assert_eq!(serde_json::to_value(&profile).expect("cannot encode profile"), document);
        assert!(profile.tenant_ref.is_some());
    }

    #[test]
    fn test_application_persistence_profile_round_trip() {
        let document = json!({
            "_last_modified": "1617277282624283",
            "url": "https://10.50.1.2/api/applicationpersistenceprofile/applicationpersistenceprofile-9d3e",
            "uuid": "applicationpersistenceprofile-9d3e",
            "name": "cluster--cookie-persistence",
            "persistence_type": "PERSISTENCE_TYPE_HTTP_COOKIE",
            "tenant_ref": "https://10.50.1.2/api/tenant/admin",
            "description": "sticky sessions",
            "is_federated": false,
            "server_hm_down_recovery": "HM_DOWN_PICK_NEW_SERVER",
            "http_cookie_persistence_profile": {
                "always_send_cookie": false,
                "cookie_name": "AVI_STICKY",
                "http_only": true,
                "timeout": 20
            },
            "ip_persistence_profile": {"ip_mask": 24, "ip_persistent_timeout": 5},
            "markers": [{"key": "app", "values": ["foo"]}],
            "configpb_attributes": {"version": 1}
        });

        let profile: ApplicationPersistenceProfile =
            serde_json::from_value(document.clone()).expect("cannot decode persistence profile");
        assert_eq!(serde_json::to_value(&profile).expect("cannot encode persistence profile"), document);
        assert!(profile.tenant_ref.is_some());
    }

    #[test]
    fn test_network_profile_round_trip() {
        let document = json!({
            "_last_modified": "1617277282624283",
            "url": "https://10.50.1.2/api/networkprofile/networkprofile-2f4a",
            "uuid": "networkprofile-2f4a",
            "name": "cluster--tcp-proxy",
            "tenant_ref": "https://10.50.1.2/api/tenant/admin",
            "connection_mirror": false,
            "description": "tcp proxy for l7",
            "profile": {
                "type": "PROTOCOL_TYPE_TCP_PROXY",
                "tcp_proxy_profile": {
                    "automatic": true,
                    "idle_connection_timeout": 600,
                    "idle_connection_type": "KEEP_ALIVE",
                    "mss": 1460,
                    "use_interface_mtu": true
                }
            },
            "markers": [{"key": "app", "values": ["foo"]}],
            "configpb_attributes": {"version": 1}
        });

        let profile: NetworkProfile = serde_json::from_value(document.clone()).expect("cannot decode network profile");
        assert_eq!(serde_json::to_value(&profile).expect("cannot encode network profile"), document);
        assert!(profile.tenant_ref.is_some());
    }
}
