use serde::Deserialize;
use serde_json::Value;
use std::fmt::{Display, Formatter};

/// Per call options of the session operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiOptions {
    pub name: Option<String>,
    pub cloud: Option<String>,
    pub cloud_uuid: Option<String>,
    /// Overrides the session tenant for this call.
    pub tenant: Option<String>,
    pub skip_default: bool,
    pub include_name: bool,
    /// Extra query parameters, appended in order.
    pub params: Vec<(String, String)>,
    /// Sent as `X-Request-ID`.
    pub request_id: Option<String>,
}

impl ApiOptions {
    pub fn new() -> Self {
        ApiOptions::default()
    }

    pub fn name<T: Into<String>>(mut self, name: T) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn cloud<T: Into<String>>(mut self, cloud: T) -> Self {
        self.cloud = Some(cloud.into());
        self
    }

    pub fn cloud_uuid<T: Into<String>>(mut self, cloud_uuid: T) -> Self {
        self.cloud_uuid = Some(cloud_uuid.into());
        self
    }

    pub fn tenant<T: Into<String>>(mut self, tenant: T) -> Self {
        self.tenant = Some(tenant.into());
        self
    }

    pub fn skip_default(mut self, skip_default: bool) -> Self {
        self.skip_default = skip_default;
        self
    }

    pub fn include_name(mut self, include_name: bool) -> Self {
        self.include_name = include_name;
        self
    }

    pub fn param<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn request_id<T: Into<String>>(mut self, request_id: T) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Appends `params` to `uri`, leaving out the ones already carried by the dedicated options.
    pub fn apply_params(&self, uri: &str) -> String {
        let extra: Vec<String> = self
            .params
            .iter()
            .filter(|(key, _)| !self.is_covered(key))
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();

        if extra.is_empty() {
            return uri.to_string();
        }

        let separator = if uri.contains('?') { '&' } else { '?' };
        format!("{uri}{separator}{}", extra.join("&"))
    }

    fn is_covered(&self, key: &str) -> bool {
        match key {
            "name" => self.name.is_some(),
            "cloud" => self.cloud.is_some(),
            "cloud_ref.uuid" => self.cloud_uuid.is_some(),
            "include_name" => self.include_name,
            "skip_default" => self.skip_default,
            _ => false,
        }
    }
}

/// Operation of a PATCH request, sent as `{"<op>": payload}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOp {
    Add,
    Replace,
    Delete,
}

impl PatchOp {
    pub fn as_str(&self) -> &str {
        match self {
            PatchOp::Add => "add",
            PatchOp::Replace => "replace",
            PatchOp::Delete => "delete",
        }
    }
}

impl Display for PatchOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One page of a collection with its results left as raw JSON.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AviCollectionResult {
    pub count: i64,
    pub results: Value,
    pub next: Option<String>,
}
