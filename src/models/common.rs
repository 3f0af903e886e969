use ipnet::IpNet;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::net;
use std::str::FromStr;

pub const IP_ADDR_TYPE_V4: &str = "V4";
pub const IP_ADDR_TYPE_V6: &str = "V6";
pub const IP_ADDR_TYPE_DNS: &str = "DNS";

/// IpAddr ip addr
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct IpAddr {
    /// IP address.
    /// Required: true
    #[serialize_always]
    pub addr: Option<String>,

    /// Enum options - V4, DNS, V6.
    /// Required: true
    #[serialize_always]
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

impl IpAddr {
    pub fn v4<T: Into<String>>(addr: T) -> Self {
        IpAddr {
            addr: Some(addr.into()),
            type_: Some(IP_ADDR_TYPE_V4.to_string()),
        }
    }

    pub fn v6<T: Into<String>>(addr: T) -> Self {
        IpAddr {
            addr: Some(addr.into()),
            type_: Some(IP_ADDR_TYPE_V6.to_string()),
        }
    }

    /// The address as a std ip, `None` for DNS entries or garbage.
    pub fn to_std(&self) -> Option<net::IpAddr> {
        match self.type_.as_deref() {
            Some(IP_ADDR_TYPE_DNS) => None,
            _ => self.addr.as_deref().and_then(|addr| net::IpAddr::from_str(addr).ok()),
        }
    }
}

impl From<net::IpAddr> for IpAddr {
    fn from(ip: net::IpAddr) -> Self {
        match ip {
            net::IpAddr::V4(v4) => IpAddr::v4(v4.to_string()),
            net::IpAddr::V6(v6) => IpAddr::v6(v6.to_string()),
        }
    }
}

/// IpAddrPrefix ip addr prefix
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct IpAddrPrefix {
    /// Required: true
    #[serialize_always]
    pub ip_addr: Option<IpAddr>,

    /// Required: true
    #[serialize_always]
    pub mask: Option<i32>,
}

impl IpAddrPrefix {
    pub fn from_ip_net(net: &IpNet) -> Self {
        IpAddrPrefix {
            ip_addr: Some(IpAddr::from(net.addr())),
            mask: Some(net.prefix_len() as i32),
        }
    }

    pub fn to_ip_net(&self) -> Option<IpNet> {
        let ip = self.ip_addr.as_ref()?.to_std()?;
        let mask = u8::try_from(self.mask?).ok()?;
        IpNet::new(ip, mask).ok()
    }
}

/// IpAddrRange ip addr range
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(default)]
pub struct IpAddrRange {
    /// Starting IP address of the range.
    /// Required: true
    #[serialize_always]
    pub begin: Option<IpAddr>,

    /// Ending IP address of the range.
    /// Required: true
    #[serialize_always]
    pub end: Option<IpAddr>,
}

/// Protobuf versioning for config pbs.
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ConfigPbAttributes {
    pub version: Option<u32>,
}

/// Label used for granular RBAC.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RoleFilterMatchLabel {
    /// Required: true
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KeyValue {
    /// Required: true
    #[serialize_always]
    pub key: Option<String>,
    pub value: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KeyValueTuple {
    /// Required: true
    #[serialize_always]
    pub key: Option<String>,
    pub value: Option<String>,
}

/// Selector selector
#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Selector {
    /// Labels as key value pairs, used in selection of entities.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<KeyValueTuple>,

    /// Selector type. Enum options - SELECTOR_IPAM.
    /// Required: true
    #[serialize_always]
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

#[skip_serializing_none]
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct TimeStamp {
    /// Required: true
    #[serialize_always]
    pub secs: Option<i64>,

    /// Required: true
    #[serialize_always]
    pub usecs: Option<i64>,
}
