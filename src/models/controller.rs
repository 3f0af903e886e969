use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// The `api/initial-data` document.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct InitialData {
    pub version: Option<ControllerVersionInfo>,

    /// Set when the initial controller setup failed.
    pub setup_failed: Option<bool>,

    pub user_initial_setup: Option<bool>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ControllerVersionInfo {
    #[serde(rename = "Version")]
    pub version: Option<String>,

    #[serde(rename = "Build")]
    pub build: Option<u64>,

    #[serde(rename = "Date")]
    pub date: Option<String>,

    #[serde(rename = "Patch")]
    pub patch: Option<String>,

    #[serde(rename = "ProductName")]
    pub product_name: Option<String>,

    #[serde(rename = "Tag")]
    pub tag: Option<String>,
}
