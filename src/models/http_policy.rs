use super::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// HTTPPolicySet HTTP policy set
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HttpPolicySet {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// Checksum of cloud configuration for Pool. Internally set by cloud connector.
    pub cloud_config_cksum: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    /// Creator name.
    pub created_by: Option<String>,

    pub description: Option<String>,

    /// HTTP request policy for the virtual service.
    pub http_request_policy: Option<HttpRequestPolicy>,

    /// HTTP response policy for the virtual service.
    pub http_response_policy: Option<HttpResponsePolicy>,

    /// HTTP security policy for the virtual service.
    pub http_security_policy: Option<HttpSecurityPolicy>,

    /// Inherited config from VirtualService.
    pub is_internal_policy: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// Name of the HTTP Policy Set.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    /// UUID of the HTTP Policy Set.
    pub uuid: Option<String>,
}

/// HTTPRequestPolicy HTTP request policy
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HttpRequestPolicy {
    /// Add rules to the HTTP request policy.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<HttpRequestRule>,
}

/// HTTPRequestRule HTTP request rule
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HttpRequestRule {
    /// Log all HTTP headers upon rule match.
    pub all_headers: Option<bool>,

    /// Enable or disable the rule.
    /// Required: true
    #[serialize_always]
    pub enable: Option<bool>,

    /// HTTP header rewrite action.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hdr_action: Vec<HttpHdrAction>,

    /// Index of the rule.
    /// Required: true
    #[serialize_always]
    pub index: Option<i32>,

    /// Log HTTP request upon rule match.
    pub log: Option<bool>,

    /// Add match criteria to the rule.
    #[serde(rename = "match")]
    pub match_: Option<MatchTarget>,

    /// Name of the rule.
    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// HTTP redirect action.
    pub redirect_action: Option<HttpRedirectAction>,

    /// HTTP request URL rewrite action.
    pub rewrite_url_action: Option<HttpRewriteUrlAction>,

    /// Content switching action.
    pub switching_action: Option<HttpSwitchingAction>,
}

/// HTTPResponsePolicy HTTP response policy
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HttpResponsePolicy {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<HttpResponseRule>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HttpResponseRule {
    pub all_headers: Option<bool>,

    /// Required: true
    #[serialize_always]
    pub enable: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hdr_action: Vec<HttpHdrAction>,

    /// Required: true
    #[serialize_always]
    pub index: Option<i32>,

    pub log: Option<bool>,

    #[serde(rename = "match")]
    pub match_: Option<MatchTarget>,

    /// Required: true
    #[serialize_always]
    pub name: Option<String>,
}

/// HTTPSecurityPolicy HTTP security policy
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HttpSecurityPolicy {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<HttpSecurityRule>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HttpSecurityRule {
    /// Action to be performed upon successful matching.
    pub action: Option<HttpSecurityAction>,

    /// Required: true
    #[serialize_always]
    pub enable: Option<bool>,

    /// Required: true
    #[serialize_always]
    pub index: Option<i32>,

    pub log: Option<bool>,

    #[serde(rename = "match")]
    pub match_: Option<MatchTarget>,

    /// Required: true
    #[serialize_always]
    pub name: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpSecurityAction {
    /// Type of the security action to perform. Enum options - HTTP_SECURITY_ACTION_CLOSE_CONN,
    /// HTTP_SECURITY_ACTION_SEND_RESPONSE, HTTP_SECURITY_ACTION_ALLOW,
    /// HTTP_SECURITY_ACTION_REDIRECT_TO_HTTPS, HTTP_SECURITY_ACTION_RATE_LIMIT,
    /// HTTP_SECURITY_ACTION_REQUEST_CHECK_ICAP.
    /// Required: true
    #[serialize_always]
    pub action: Option<String>,

    /// Secure SSL/TLS port to redirect the HTTP request to. Allowed values are 1-65535.
    pub https_port: Option<i32>,

    /// HTTP status code to use for local response. Enum options - HTTP_LOCAL_RESPONSE_STATUS_CODE_200,
    /// HTTP_LOCAL_RESPONSE_STATUS_CODE_204, HTTP_LOCAL_RESPONSE_STATUS_CODE_403,
    /// HTTP_LOCAL_RESPONSE_STATUS_CODE_404, HTTP_LOCAL_RESPONSE_STATUS_CODE_429,
    /// HTTP_LOCAL_RESPONSE_STATUS_CODE_501.
    pub status_code: Option<String>,
}

/// MatchTarget match target
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct MatchTarget {
    /// Configure client ip addresses.
    pub client_ip: Option<IpAddrMatch>,

    /// Configure HTTP header(s).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub hdrs: Vec<HdrMatch>,

    /// Configure the host header.
    pub host_hdr: Option<HostHdrMatch>,

    /// Configure HTTP methods.
    pub method: Option<MethodMatch>,

    /// Configure request paths.
    pub path: Option<PathMatch>,

    /// Configure the type of HTTP protocol.
    pub protocol: Option<ProtocolMatch>,

    /// Configure request query.
    pub query: Option<QueryMatch>,

    /// Configure virtual service ports.
    pub vs_port: Option<PortMatch>,
}

/// HostHdrMatch host hdr match
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HostHdrMatch {
    /// Case sensitivity to use for the match. Enum options - SENSITIVE, INSENSITIVE.
    pub match_case: Option<String>,

    /// Criterion to use for the host header value match. Enum options - HDR_EXISTS, HDR_DOES_NOT_EXIST,
    /// HDR_BEGINS_WITH, HDR_DOES_NOT_BEGIN_WITH, HDR_CONTAINS, HDR_DOES_NOT_CONTAIN, HDR_ENDS_WITH,
    /// HDR_DOES_NOT_END_WITH, HDR_EQUALS, HDR_DOES_NOT_EQUAL.
    /// Required: true
    #[serialize_always]
    pub match_criteria: Option<String>,

    /// String value(s) in the host header.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<String>,
}

/// PathMatch path match
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PathMatch {
    /// Case sensitivity to use for the match. Enum options - SENSITIVE, INSENSITIVE.
    pub match_case: Option<String>,

    /// Criterion to use for matching the path in the HTTP request URI. Enum options - BEGINS_WITH,
    /// DOES_NOT_BEGIN_WITH, CONTAINS, DOES_NOT_CONTAIN, ENDS_WITH, DOES_NOT_END_WITH, EQUALS,
    /// DOES_NOT_EQUAL, REGEX_MATCH, REGEX_DOES_NOT_MATCH.
    /// Required: true
    #[serialize_always]
    pub match_criteria: Option<String>,

    /// Decode the path before matching it.
    pub match_decoded_string: Option<bool>,

    /// String values.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub match_str: Vec<String>,

    /// UUID of the string group(s). It is a reference to an object of type StringGroup.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub string_group_refs: Vec<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HdrMatch {
    /// Name of the HTTP header whose value is to be matched.
    /// Required: true
    #[serialize_always]
    pub hdr: Option<String>,

    pub match_case: Option<String>,

    /// Required: true
    #[serialize_always]
    pub match_criteria: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub value: Vec<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct IpAddrMatch {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub addrs: Vec<IpAddr>,

    /// UUID of IP address group(s). It is a reference to an object of type IpAddrGroup.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub group_refs: Vec<String>,

    /// Criterion to use for IP address matching the HTTP request. Enum options - IS_IN, IS_NOT_IN.
    /// Required: true
    #[serialize_always]
    pub match_criteria: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prefixes: Vec<IpAddrPrefix>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ranges: Vec<IpAddrRange>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MethodMatch {
    /// Criterion to use for HTTP method matching the method in the HTTP request. Enum options - IS_IN,
    /// IS_NOT_IN.
    /// Required: true
    #[serialize_always]
    pub match_criteria: Option<String>,

    /// Configure HTTP method(s). Enum options - HTTP_METHOD_GET, HTTP_METHOD_HEAD, HTTP_METHOD_PUT,
    /// HTTP_METHOD_DELETE, HTTP_METHOD_POST, HTTP_METHOD_OPTIONS, HTTP_METHOD_TRACE, HTTP_METHOD_CONNECT,
    /// HTTP_METHOD_PATCH, HTTP_METHOD_PROPFIND, HTTP_METHOD_PROPPATCH, HTTP_METHOD_MKCOL, HTTP_METHOD_COPY,
    /// HTTP_METHOD_MOVE, HTTP_METHOD_LOCK, HTTP_METHOD_UNLOCK.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProtocolMatch {
    /// Required: true
    #[serialize_always]
    pub match_criteria: Option<String>,

    /// HTTP or HTTPS protocol. Enum options - HTTP, HTTPS.
    /// Required: true
    #[serialize_always]
    pub protocols: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct QueryMatch {
    pub match_case: Option<String>,

    /// Criterion to use for matching the query in HTTP request URI. Enum options - QUERY_MATCH_CONTAINS,
    /// QUERY_MATCH_DOES_NOT_CONTAIN, QUERY_MATCH_EXISTS, QUERY_MATCH_DOES_NOT_EXIST,
    /// QUERY_MATCH_BEGINS_WITH, QUERY_MATCH_DOES_NOT_BEGIN_WITH, QUERY_MATCH_ENDS_WITH,
    /// QUERY_MATCH_DOES_NOT_END_WITH, QUERY_MATCH_EQUALS, QUERY_MATCH_DOES_NOT_EQUAL,
    /// QUERY_MATCH_REGEX_MATCH, QUERY_MATCH_REGEX_DOES_NOT_MATCH.
    /// Required: true
    #[serialize_always]
    pub match_criteria: Option<String>,

    pub match_decoded_string: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub match_str: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub string_group_refs: Vec<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PortMatch {
    /// Criterion to use for port matching the HTTP request. Enum options - IS_IN, IS_NOT_IN.
    /// Required: true
    #[serialize_always]
    pub match_criteria: Option<String>,

    /// Listening TCP port(s). Allowed values are 1-65535.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<i64>,
}

/// HTTPHdrAction HTTP hdr action
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpHdrAction {
    /// ADD: A new header with the new value is added irrespective of the existence of an HTTP header of the
    /// given name. REPLACE: A new header with the new value is added if no header of the given name exists,
    /// else existing headers with the given name are removed and a new header with the new value is added.
    /// REMOVE: All the headers of the given name are removed. Enum options - HTTP_ADD_HDR,
    /// HTTP_REMOVE_HDR, HTTP_REPLACE_HDR.
    /// Required: true
    #[serialize_always]
    pub action: Option<String>,

    /// HTTP header information.
    pub hdr: Option<HttpHdrData>,

    pub hdr_index: Option<u32>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpHdrData {
    /// HTTP header name.
    pub name: Option<String>,

    /// HTTP header value.
    pub value: Option<HttpHdrValue>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpHdrValue {
    /// Variable. Enum options - HTTP_POLICY_VAR_CLIENT_IP, HTTP_POLICY_VAR_VS_PORT,
    /// HTTP_POLICY_VAR_VS_IP, HTTP_POLICY_VAR_HTTP_HDR, HTTP_POLICY_VAR_SSL_CLIENT_FINGERPRINT,
    /// HTTP_POLICY_VAR_SSL_CLIENT_SERIAL, HTTP_POLICY_VAR_SSL_CLIENT_ISSUER,
    /// HTTP_POLICY_VAR_SSL_CLIENT_SUBJECT, HTTP_POLICY_VAR_SSL_CLIENT_RAW,
    /// HTTP_POLICY_VAR_SSL_PROTOCOL, HTTP_POLICY_VAR_SSL_CIPHER, HTTP_POLICY_VAR_USER_NAME,
    /// HTTP_POLICY_VAR_SSL_SERVER_NAME.
    pub var: Option<String>,

    /// HTTP header value or variable representing an HTTP header.
    pub val: Option<String>,

    pub is_sensitive: Option<bool>,
}

/// HTTPRedirectAction HTTP redirect action
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpRedirectAction {
    /// Add a query string to the redirect URI. If keep_query is set, concatenates the add_string to the
    /// query of the incoming request.
    pub add_string: Option<String>,

    /// Host config.
    pub host: Option<UriParam>,

    /// Keep or drop the query of the incoming request URI in the redirected URI.
    pub keep_query: Option<bool>,

    /// Path config.
    pub path: Option<UriParam>,

    /// Port to which redirect the request. Allowed values are 1-65535.
    pub port: Option<u32>,

    /// Protocol type. Enum options - HTTP, HTTPS.
    /// Required: true
    #[serialize_always]
    pub protocol: Option<String>,

    /// HTTP redirect status code. Enum options - HTTP_REDIRECT_STATUS_CODE_301,
    /// HTTP_REDIRECT_STATUS_CODE_302, HTTP_REDIRECT_STATUS_CODE_307.
    pub status_code: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpRewriteUrlAction {
    pub host_hdr: Option<UriParam>,
    pub path: Option<UriParam>,

    /// Query config.
    pub query: Option<UriParamQuery>,
}

/// URIParam URI param
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UriParam {
    /// Token config either for the URI components or a constant string.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tokens: Vec<UriParamToken>,

    /// URI param type. Enum options - URI_PARAM_TYPE_TOKENIZED.
    /// Required: true
    #[serialize_always]
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UriParamToken {
    /// Index of the ending token in the incoming URI.
    pub end_index: Option<u32>,

    /// Index of the starting token in the incoming URI.
    pub start_index: Option<u32>,

    /// Constant string to use as a token.
    pub str_value: Option<String>,

    /// Token type for constructing the URI. Enum options - URI_TOKEN_TYPE_HOST, URI_TOKEN_TYPE_PATH,
    /// URI_TOKEN_TYPE_STRING, URI_TOKEN_TYPE_STRING_GROUP, URI_TOKEN_TYPE_REGEX,
    /// URI_TOKEN_TYPE_REGEX_QUERY.
    /// Required: true
    #[serialize_always]
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct UriParamQuery {
    /// Concatenate a string to the query of the incoming request URI and then use it in the request URI
    /// going to the backend server.
    pub add_string: Option<String>,

    /// Use or drop the query of the incoming request URI in the request URI to the backend server.
    pub keep_query: Option<bool>,
}

/// HTTPSwitchingAction HTTP switching action
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpSwitchingAction {
    /// Content switching action type. Enum options - HTTP_SWITCHING_SELECT_POOL,
    /// HTTP_SWITCHING_SELECT_LOCAL, HTTP_SWITCHING_SELECT_POOLGROUP.
    /// Required: true
    #[serialize_always]
    pub action: Option<String>,

    /// File from which to serve local response to the request.
    pub file: Option<HttpLocalFile>,

    /// UUID of the pool group to serve the request. It is a reference to an object of type PoolGroup.
    pub pool_group_ref: Option<String>,

    /// UUID of the pool of servers to serve the request. It is a reference to an object of type Pool.
    pub pool_ref: Option<String>,

    /// HTTP status code to use when serving local response. Enum options -
    /// HTTP_LOCAL_RESPONSE_STATUS_CODE_200, HTTP_LOCAL_RESPONSE_STATUS_CODE_204,
    /// HTTP_LOCAL_RESPONSE_STATUS_CODE_403, HTTP_LOCAL_RESPONSE_STATUS_CODE_404,
    /// HTTP_LOCAL_RESPONSE_STATUS_CODE_429, HTTP_LOCAL_RESPONSE_STATUS_CODE_501.
    pub status_code: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct HttpLocalFile {
    /// Mime-type of the content in the file.
    /// Required: true
    #[serialize_always]
    pub content_type: Option<String>,

    /// File content to used in the local HTTP response body.
    /// Required: true
    #[serialize_always]
    pub file_content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_switching_rule_uses_match_key() {
        let policy = HttpPolicySet {
            name: Some("cluster--default-foo.com".to_string()),
            tenant_ref: Some("/api/tenant/?name=admin".to_string()),
            http_request_policy: Some(HttpRequestPolicy {
                rules: vec![HttpRequestRule {
                    name: Some("foo.com/api".to_string()),
                    index: Some(0),
                    enable: Some(true),
                    match_: Some(MatchTarget {
                        host_hdr: Some(HostHdrMatch {
                            match_criteria: Some("HDR_EQUALS".to_string()),
                            value: vec!["foo.com".to_string()],
                            ..Default::default()
                        }),
                        path: Some(PathMatch {
                            match_criteria: Some("BEGINS_WITH".to_string()),
                            match_case: Some("INSENSITIVE".to_string()),
                            match_str: vec!["/api".to_string()],
                            ..Default::default()
                        }),
                        ..Default::default()
                    }),
                    switching_action: Some(HttpSwitchingAction {
                        action: Some("HTTP_SWITCHING_SELECT_POOLGROUP".to_string()),
                        pool_group_ref: Some("/api/poolgroup/?name=cluster--default-foo.com-api".to_string()),
                        ..Default::default()
                    }),
                    ..Default::default()
                }],
            }),
            ..Default::default()
        };

        let encoded = serde_json::to_value(&policy).expect("cannot encode http policy set");
        let rule = &encoded["http_request_policy"]["rules"][0];
        assert!(rule.get("match_").is_none());
        assert_eq!(rule["match"]["path"]["match_str"], json!(["/api"]));
        assert_eq!(rule["match"]["host_hdr"]["match_criteria"], json!("HDR_EQUALS"));
        assert_eq!(rule["switching_action"]["action"], json!("HTTP_SWITCHING_SELECT_POOLGROUP"));

        let decoded: HttpPolicySet = serde_json::from_value(encoded).expect("cannot decode http policy set");
        assert_eq!(decoded, policy);
    }

    #[test]
    fn test_redirect_rule_decoding() {
        let rule: HttpRequestRule = serde_json::from_value(json!({
            "name": "redirect-to-https",
            "index": 1,
            "enable": true,
            "match": {"protocol": {"match_criteria": "IS_IN", "protocols": "HTTP"}, "vs_port": {"match_criteria": "IS_IN", "ports": [80]}},
            "redirect_action": {"protocol": "HTTPS", "port": 443, "status_code": "HTTP_REDIRECT_STATUS_CODE_302"},
            "unknown_field": {"ignored": true}
        }))
        .expect("cannot decode http request rule");

        let redirect = rule.redirect_action.expect("missing redirect action");
        assert_eq!(redirect.port, Some(443));
        assert_eq!(redirect.protocol.as_deref(), Some("HTTPS"));
        assert_eq!(
            rule.match_.and_then(|target| target.vs_port).map(|port| port.ports),
            Some(vec![80])
        );
    }
}
