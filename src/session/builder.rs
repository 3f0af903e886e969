use crate::errors::AviError;
use crate::session::{AviSession, Credentials, SessionCookies};
use derivative::Derivative;
use reqwest::blocking::Client;
use reqwest::Certificate;
use std::net::IpAddr;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_AVI_VERSION: &str = "18.2.6";
pub const DEFAULT_API_TENANT: &str = "admin";
pub const DEFAULT_MAX_API_RETRIES: u32 = 3;
pub const DEFAULT_API_RETRY_INTERVAL: Duration = Duration::from_millis(500);
pub const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_CONTROLLER_STATUS_CHECK_COUNT: u32 = 10;

/// Produces a fresh auth token, called before every login.
pub type RefreshAuthToken = Arc<dyn Fn() -> Result<String, AviError> + Send + Sync>;

/// How a session waits for the controller before retrying a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerStatusCheck {
    /// Failed requests are handed back to the caller without retry.
    Disabled,
    /// Polls `api/cluster/status` up to `count` times. Without an interval, waits
    /// `min(3·e^round, 30)` seconds between rounds.
    Enabled { count: u32, interval: Option<Duration> },
}

impl Default for ControllerStatusCheck {
    fn default() -> Self {
        ControllerStatusCheck::Enabled {
            count: DEFAULT_CONTROLLER_STATUS_CHECK_COUNT,
            interval: None,
        }
    }
}

#[derive(Derivative)]
#[derivative(Debug)]
pub struct AviSessionBuilder {
    controller: String,
    username: String,
    #[derivative(Debug = "ignore")]
    password: Option<String>,
    #[derivative(Debug = "ignore")]
    auth_token: Option<String>,
    #[derivative(Debug = "ignore")]
    refresh_auth_token: Option<RefreshAuthToken>,
    tenant: String,
    version: String,
    insecure: bool,
    #[derivative(Debug = "ignore")]
    root_certificate_pem: Option<Vec<u8>>,
    timeout: Duration,
    lazy_authentication: bool,
    max_api_retries: u32,
    api_retry_interval: Duration,
    status_check_limits: Option<(u32, Duration)>,
    disable_controller_status_check: bool,
    user_headers: Vec<(String, String)>,
    http_client: Option<Client>,
}

impl AviSessionBuilder {
    /// `controller` is a host name, an IPv4 or IPv6 address, or a full base URL such as
    /// `http://127.0.0.1:8080`.
    pub fn new<C: Into<String>, U: Into<String>>(controller: C, username: U) -> Self {
        AviSessionBuilder {
            controller: controller.into(),
            username: username.into(),
            password: None,
            auth_token: None,
            refresh_auth_token: None,
            tenant: DEFAULT_API_TENANT.to_string(),
            version: DEFAULT_AVI_VERSION.to_string(),
            insecure: false,
            root_certificate_pem: None,
            timeout: DEFAULT_API_TIMEOUT,
            lazy_authentication: false,
            max_api_retries: DEFAULT_MAX_API_RETRIES,
            api_retry_interval: DEFAULT_API_RETRY_INTERVAL,
            status_check_limits: None,
            disable_controller_status_check: false,
            user_headers: vec![],
            http_client: None,
        }
    }

    pub fn password<T: Into<String>>(mut self, password: T) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn auth_token<T: Into<String>>(mut self, auth_token: T) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }

    pub fn refresh_auth_token<F>(mut self, refresh: F) -> Self
    where
        F: Fn() -> Result<String, AviError> + Send + Sync + 'static,
    {
        self.refresh_auth_token = Some(Arc::new(refresh));
        self
    }

    pub fn tenant<T: Into<String>>(mut self, tenant: T) -> Self {
        self.tenant = tenant.into();
        self
    }

    pub fn version<T: Into<String>>(mut self, version: T) -> Self {
        self.version = version.into();
        self
    }

    /// Skips certificate verification.
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Trusts the given PEM encoded CA on top of the built-in roots.
    pub fn root_certificate_pem<T: Into<Vec<u8>>>(mut self, pem: T) -> Self {
        self.root_certificate_pem = Some(pem.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Defers login to the first request.
    pub fn lazy_authentication(mut self, lazy_authentication: bool) -> Self {
        self.lazy_authentication = lazy_authentication;
        self
    }

    pub fn max_api_retries(mut self, max_api_retries: u32) -> Self {
        self.max_api_retries = max_api_retries;
        self
    }

    pub fn api_retry_interval(mut self, api_retry_interval: Duration) -> Self {
        self.api_retry_interval = api_retry_interval;
        self
    }

    /// Both values must be greater than zero.
    pub fn controller_status_check_limits(mut self, count: u32, interval: Duration) -> Self {
        self.status_check_limits = Some((count, interval));
        self
    }

    pub fn disable_controller_status_check(mut self, disable: bool) -> Self {
        self.disable_controller_status_check = disable;
        self
    }

    pub fn user_header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.user_headers.push((key.into(), value.into()));
        self
    }

    /// Uses an externally built client. TLS settings and timeout must then be set on that client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    pub fn build(self) -> Result<AviSession, AviError> {
        let status_check = match (self.disable_controller_status_check, self.status_check_limits) {
            (true, _) => ControllerStatusCheck::Disabled,
            (false, Some((count, interval))) => {
                if count == 0 || interval.is_zero() {
                    return Err(AviError::InvalidOption(
                        "Retry count and retry interval should be greater than zero".to_string(),
                    ));
                }
                ControllerStatusCheck::Enabled {
                    count,
                    interval: Some(interval),
                }
            }
            (false, None) => ControllerStatusCheck::default(),
        };

        if self.insecure {
            warn!("Strict certificate verification is *DISABLED*");
        }

        let client = match self.http_client {
            Some(client) => {
                if self.insecure || self.root_certificate_pem.is_some() {
                    return Err(AviError::InvalidOption(
                        "Cannot set custom TLS settings for external clients".to_string(),
                    ));
                }
                client
            }
            None => {
                let mut client_builder = Client::builder()
                    .timeout(self.timeout)
                    .danger_accept_invalid_certs(self.insecure);
                if let Some(pem) = &self.root_certificate_pem {
                    let certificate = Certificate::from_pem(pem)
                        .map_err(|e| AviError::InvalidOption(format!("invalid root certificate: {e}")))?;
                    client_builder = client_builder.add_root_certificate(certificate);
                }
                client_builder
                    .build()
                    .map_err(|e| AviError::InvalidOption(format!("cannot build http client: {e}")))?
            }
        };

        let session = AviSession {
            client,
            prefix: controller_prefix(&self.controller),
            username: self.username,
            credentials: RwLock::new(Credentials {
                password: self.password,
                auth_token: self.auth_token,
            }),
            refresh_auth_token: self.refresh_auth_token,
            tenant: RwLock::new(self.tenant),
            version: RwLock::new(self.version),
            cookies: Mutex::new(SessionCookies::default()),
            user_headers: self.user_headers,
            lazy_authentication: self.lazy_authentication,
            max_api_retries: self.max_api_retries,
            api_retry_interval: self.api_retry_interval,
            status_check,
        };

        if !session.lazy_authentication {
            session.login()?;
        }

        Ok(session)
    }
}

/// Base URL every uri is appended to, always ending with `/`.
pub fn controller_prefix(controller: &str) -> String {
    if controller.contains("://") {
        return format!("{}/", controller.trim_end_matches('/'));
    }

    match controller.parse::<IpAddr>() {
        Ok(IpAddr::V6(_)) => format!("https://[{controller}]/"),
        _ => format!("https://{controller}/"),
    }
}
