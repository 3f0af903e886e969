//! Controller connection settings, read from `CTRL_*` environment variables or a YAML file.

use crate::errors::AviError;
use crate::session::{AviSessionBuilder, DEFAULT_API_TENANT, DEFAULT_API_TIMEOUT, DEFAULT_AVI_VERSION};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CTRL_IPADDRESS: &str = "CTRL_IPADDRESS";
pub const CTRL_USERNAME: &str = "CTRL_USERNAME";
pub const CTRL_PASSWORD: &str = "CTRL_PASSWORD";
pub const CTRL_AUTHTOKEN: &str = "CTRL_AUTHTOKEN";
pub const CTRL_CA_DATA: &str = "CTRL_CA_DATA";
pub const CTRL_VERSION: &str = "CTRL_VERSION";
pub const CTRL_TENANT: &str = "CTRL_TENANT";
pub const CTRL_INSECURE: &str = "CTRL_INSECURE";

#[derive(Derivative, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[derivative(Debug)]
#[serde(default)]
pub struct ControllerConfig {
    pub controller: String,
    pub username: String,
    #[derivative(Debug = "ignore")]
    pub password: Option<String>,
    #[derivative(Debug = "ignore")]
    pub auth_token: Option<String>,
    /// PEM encoded CA of the controller certificate.
    #[derivative(Debug = "ignore")]
    pub ca_data: Option<String>,
    pub version: String,
    pub tenant: String,
    pub insecure: bool,
    pub timeout_seconds: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        ControllerConfig {
            controller: String::new(),
            username: String::new(),
            password: None,
            auth_token: None,
            ca_data: None,
            version: DEFAULT_AVI_VERSION.to_string(),
            tenant: DEFAULT_API_TENANT.to_string(),
            insecure: false,
            timeout_seconds: DEFAULT_API_TIMEOUT.as_secs(),
        }
    }
}

impl ControllerConfig {
    pub fn from_env() -> Result<ControllerConfig, AviError> {
        ControllerConfig::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` against any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<ControllerConfig, AviError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|value| value.trim().to_string()).filter(|value| !value.is_empty());
        let defaults = ControllerConfig::default();

        let insecure = match get(CTRL_INSECURE) {
            Some(value) => value.parse::<bool>().map_err(|_| {
                AviError::Configuration(format!("{CTRL_INSECURE} must be `true` or `false`, got `{value}`"))
            })?,
            None => defaults.insecure,
        };

        let config = ControllerConfig {
            controller: get(CTRL_IPADDRESS).unwrap_or_default(),
            username: get(CTRL_USERNAME).unwrap_or_default(),
            password: get(CTRL_PASSWORD),
            auth_token: get(CTRL_AUTHTOKEN),
            ca_data: get(CTRL_CA_DATA),
            version: get(CTRL_VERSION).unwrap_or(defaults.version),
            tenant: get(CTRL_TENANT).unwrap_or(defaults.tenant),
            insecure,
            timeout_seconds: defaults.timeout_seconds,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: &Path) -> Result<ControllerConfig, AviError> {
        let content = std::fs::read_to_string(path)?;
        ControllerConfig::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> Result<ControllerConfig, AviError> {
        let config: ControllerConfig = serde_yaml::from_str(content)
            .map_err(|e| AviError::Configuration(format!("cannot parse controller configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Controller, username, and a password or an auth token are mandatory.
    pub fn validate(&self) -> Result<(), AviError> {
        let mut missing: Vec<&str> = vec![];
        if self.controller.is_empty() {
            missing.push("controller");
        }
        if self.username.is_empty() {
            missing.push("username");
        }
        if self.password.is_none() && self.auth_token.is_none() {
            missing.push("password or auth token");
        }

        if !missing.is_empty() {
            return Err(AviError::Configuration(format!("missing {}", missing.join(", "))));
        }
        Ok(())
    }

    pub fn session_builder(&self) -> AviSessionBuilder {
        let mut builder = AviSessionBuilder::new(&self.controller, &self.username)
            .tenant(&self.tenant)
            .version(&self.version)
            .timeout(Duration::from_secs(self.timeout_seconds));

        if let Some(password) = &self.password {
            builder = builder.password(password);
        }
        if let Some(auth_token) = &self.auth_token {
            builder = builder.auth_token(auth_token);
        }

        match &self.ca_data {
            Some(ca_data) => builder.root_certificate_pem(ca_data.as_bytes()),
            None => builder.insecure(self.insecure),
        }
    }
}
