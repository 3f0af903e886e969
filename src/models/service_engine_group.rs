use super::*;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// ServiceEngineGroup service engine group
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ServiceEngineGroup {
    #[serde(rename = "_last_modified")]
    pub last_modified: Option<String>,

    /// Service Engines in active/standby mode for HA failover.
    pub active_standby: Option<bool>,

    /// Use Standard SKU Azure Load Balancer.
    pub algo: Option<String>,

    /// If set, Virtual Services will be automatically migrated when load on an SE is less than minimum or
    /// more than maximum thresholds. Only Alerts are generated when the auto_rebalance is not set.
    pub auto_rebalance: Option<bool>,

    /// Set of criteria for SE Auto Rebalance. Enum options - SE_AUTO_REBALANCE_CPU,
    /// SE_AUTO_REBALANCE_PPS, SE_AUTO_REBALANCE_MBPS, SE_AUTO_REBALANCE_OPEN_CONNS,
    /// SE_AUTO_REBALANCE_CPS.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub auto_rebalance_criteria: Vec<String>,

    /// Frequency of rebalance, if 'Auto rebalance' is enabled. Unit is SEC.
    pub auto_rebalance_interval: Option<i32>,

    /// Excess Service Engine capacity provisioned for HA failover.
    pub buffer_se: Option<i32>,

    /// It is a reference to an object of type Cloud.
    pub cloud_ref: Option<String>,

    pub configpb_attributes: Option<ConfigPbAttributes>,

    pub description: Option<String>,

    /// Amount of disk space for each of the Service Engine virtual machines. Unit is GB.
    pub disk_per_se: Option<i32>,

    /// High Availability mode for all the Virtual Services using this Service Engine group. Enum options -
    /// HA_MODE_SHARED_PAIR, HA_MODE_SHARED, HA_MODE_LEGACY_ACTIVE_STANDBY.
    pub ha_mode: Option<String>,

    /// Override default hypervisor. Enum options - DEFAULT, VMWARE_ESX, KVM, VMWARE_VSAN, XEN.
    pub hypervisor: Option<String>,

    /// Labels associated with this SE group.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValue>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub markers: Vec<RoleFilterMatchLabel>,

    /// Maximum number of Services Engines in this group. Allowed values are 0-1000.
    pub max_se: Option<i32>,

    /// Maximum number of Virtual Services that can be placed on a single Service Engine.
    pub max_vs_per_se: Option<i32>,

    /// Amount of memory for each of the Service Engine virtual machines. Changes to this setting do not
    /// affect existing SEs.
    pub memory_per_se: Option<i32>,

    /// Enable or disable real time SE metrics.
    pub realtime_se_metrics: Option<MetricsRealTimeUpdate>,

    /// Minimum number of active Service Engines for the Virtual Service. Allowed values are 1-64.
    pub min_scaleout_per_vs: Option<i32>,

    /// Maximum number of active Service Engines for the Virtual Service. Allowed values are 1-64.
    pub max_scaleout_per_vs: Option<i32>,

    /// Required: true
    #[serialize_always]
    pub name: Option<String>,

    /// Number of vcpus for each of the Service Engine virtual machines. Changes to this setting do not
    /// affect existing SEs.
    pub vcpus_per_se: Option<i32>,

    /// Prefix to use for virtual machine name of Service Engines.
    pub se_name_prefix: Option<String>,

    /// Parameters to place Virtual Services on only a subset of the cores of an SE.
    pub vss_placement: Option<VssPlacement>,

    /// Ensure primary and secondary Service Engines are deployed on different physical hosts.
    pub vs_host_redundancy: Option<bool>,

    /// It is a reference to an object of type Tenant.
    pub tenant_ref: Option<String>,

    /// url
    /// Read Only: true
    pub url: Option<String>,

    pub uuid: Option<String>,
}

/// MetricsRealTimeUpdate metrics real time update
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MetricsRealTimeUpdate {
    /// Real time metrics collection duration in minutes. 0 for infinite. Special values are 0 - infinite.
    /// Unit is MIN.
    pub duration: Option<u32>,

    /// Enables real time metrics collection. When deactivated, 6 hour view is the most granular the system
    /// will track.
    /// Required: true
    #[serialize_always]
    pub enabled: Option<bool>,
}

/// VssPlacement vss placement
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VssPlacement {
    /// Degree of core non-affinity for VS placement. Allowed values are 1-256.
    pub core_nonaffinity: Option<u32>,

    /// Number of sub-cores that comprise a CPU core. Allowed values are 1-128.
    pub num_subcores: Option<u32>,
}
