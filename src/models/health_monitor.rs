use super::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// HealthMonitor health monitor
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HealthMonitor {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// By default, multiple instances of the same healthmonitor to the same server are suppressed
    /// intelligently. Use this knob to allow duplicates.
    pub allow_duplicate_monitors: Option<bool>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    pub description: Option<String>,

    /// During addition of a server or healthmonitors or during bootup, Avi performs sequential health
    /// checks rather than waiting for send-interval to kick in. This knob turns this feature off.
    pub disable_quickstart: Option<bool>,

    pub dns_monitor: Option<HealthMonitorDns>,

    pub external_monitor: Option<HealthMonitorExternal>,

    /// Number of continuous failed health checks before the server is marked down. Allowed values are 1-50.
    pub failed_checks: Option<i32>,

    pub http_monitor: Option<HealthMonitorHttp>,

    pub https_monitor: Option<HealthMonitorHttp>,

    /// This field describes the object's replication scope.
    pub is_federated: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// Use this port instead of the port defined for the server in the Pool. Allowed values are 1-65535.
    /// Special values are 0 - 'Use server port'.
    pub monitor_port: Option<i32>,

    /// A user friendly name for this health monitor.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// A valid response from the server is expected within the receive timeout window. This timeout must
    /// be less than the send interval. Allowed values are 1-2400. Unit is SEC.
    pub receive_timeout: Option<i32>,

    /// Frequency, in seconds, that monitors are sent to a server. Allowed values are 1-3600. Unit is SEC.
    pub send_interval: Option<i32>,

    /// Number of continuous successful health checks before server is marked up. Allowed values are 1-50.
    pub successful_checks: Option<i32>,

    pub tcp_monitor: Option<HealthMonitorTcp>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// Type of the health monitor. Enum options - HEALTH_MONITOR_PING, HEALTH_MONITOR_TCP,
    /// HEALTH_MONITOR_HTTP, HEALTH_MONITOR_HTTPS, HEALTH_MONITOR_EXTERNAL, HEALTH_MONITOR_UDP,
    /// HEALTH_MONITOR_DNS, HEALTH_MONITOR_GSLB, HEALTH_MONITOR_SIP, HEALTH_MONITOR_RADIUS,
    /// HEALTH_MONITOR_SMTP, HEALTH_MONITOR_SMTPS, HEALTH_MONITOR_POP3, HEALTH_MONITOR_POP3S,
    /// HEALTH_MONITOR_IMAP, HEALTH_MONITOR_IMAPS.
    /// Required: true
    #[serialize_always]
    #[serde(rename = "type")]
    pub type_: Option<String>,

    pub udp_monitor: Option<HealthMonitorUdp>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    /// UUID of the health monitor.
    pub uuid: Option<String>,
}

/// HealthMonitorHTTP health monitor HTTP
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HealthMonitorHttp {
    /// Type of the authentication method. Enum options - AUTH_BASIC, AUTH_NTLM.
    pub auth_type: Option<String>,

    /// Use the exact http_request string as specified by user, without any automatic insert of headers
    /// like Host header.
    pub exact_http_request: Option<bool>,

    /// Send an HTTP request to the server. The default GET / HTTP/1.0 may be extended with additional
    /// headers or information.
    pub http_request: Option<String>,

    /// HTTP request body.
    pub http_request_body: Option<String>,

    /// Match for a keyword in the first 2Kb of the server header and body response.
    pub http_response: Option<String>,

    /// List of HTTP response codes to match as successful. Enum options - HTTP_ANY, HTTP_1XX, HTTP_2XX,
    /// HTTP_3XX, HTTP_4XX, HTTP_5XX.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub http_response_code: Vec<String>,

    /// Match or look for this keyword in the first 2KB of server header and body response indicating
    /// server maintenance.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub maintenance_code: Vec<u32>,

    pub maintenance_response: Option<String>,

    /// Expected http/https response page size.
    pub response_size: Option<u32>,
}

/// HealthMonitorTCP health monitor TCP
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HealthMonitorTcp {
    /// Configure TCP health monitor to use half-open TCP connections to monitor the health of backend
    /// servers thereby avoiding consumption of a full fledged server side connection.
    pub tcp_half_open: Option<bool>,

    /// Match or look for this keyword in the first 2KB of server's response indicating server maintenance.
    pub maintenance_response: Option<String>,

    /// Request data to send after completing the TCP handshake.
    pub tcp_request: Option<String>,

    /// Match for the desired keyword in the first 2Kb of the server's TCP response.
    pub tcp_response: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HealthMonitorUdp {
    pub maintenance_response: Option<String>,
    pub udp_request: Option<String>,
    pub udp_response: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HealthMonitorDns {
    /// Query_Type Response has atleast one answer of which the resource record type matches the query type.
    /// Enum options - DNS_QUERY_TYPE, DNS_ANY_TYPE, DNS_ANY_THING.
    pub qtype: Option<String>,

    /// The DNS monitor will query the DNS server for the fully qualified name in this field.
    /// Required: true
    #[serialize_always]
    pub query_name: Option<String>,

    /// When No Error is selected, a DNS query will be marked failed is any error code is returned by the
    /// server. Enum options - RCODE_NO_ERROR, RCODE_ANYTHING.
    pub rcode: Option<String>,

    /// Resource record type used in the healthmonitor DNS query.
    pub record_type: Option<String>,

    /// The resource record of the queried DNS server's response for the Request Name must include the IP
    /// address defined in this field.
    pub response_string: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HealthMonitorExternal {
    /// Command script provided inline.
    /// Required: true
    #[serialize_always]
    pub command_code: Option<String>,

    /// Optional arguments to feed into the script.
    pub command_parameters: Option<String>,

    /// Path of external health monitor script.
    pub command_path: Option<String>,

    /// Environment variables to be fed into the script.
    pub command_variables: Option<String>,
}
