use crate::errors::AviError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use strum_macros::EnumIter;
use url::Url;

/// Object types exposed by this crate, named after their `api/<object type>` collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ObjectType {
    VirtualService,
    VsVip,
    Pool,
    PoolGroup,
    HealthMonitor,
    HttpPolicySet,
    SslKeyAndCertificate,
    ServiceEngineGroup,
    Cloud,
    IpamDnsProviderProfile,
    Tenant,
    VrfContext,
    Network,
    ApplicationProfile,
    ApplicationPersistenceProfile,
    NetworkProfile,
    VsDataScriptSet,
}

impl ObjectType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ObjectType::VirtualService => "virtualservice",
            ObjectType::VsVip => "vsvip",
            ObjectType::Pool => "pool",
            ObjectType::PoolGroup => "poolgroup",
            ObjectType::HealthMonitor => "healthmonitor",
            ObjectType::HttpPolicySet => "httppolicyset",
            ObjectType::SslKeyAndCertificate => "sslkeyandcertificate",
            ObjectType::ServiceEngineGroup => "serviceenginegroup",
            ObjectType::Cloud => "cloud",
            ObjectType::IpamDnsProviderProfile => "ipamdnsproviderprofile",
            ObjectType::Tenant => "tenant",
            ObjectType::VrfContext => "vrfcontext",
            ObjectType::Network => "network",
            ObjectType::ApplicationProfile => "applicationprofile",
            ObjectType::ApplicationPersistenceProfile => "applicationpersistenceprofile",
            ObjectType::NetworkProfile => "networkprofile",
            ObjectType::VsDataScriptSet => "vsdatascriptset",
        }
    }

    /// Collection path relative to the controller prefix, e.g. `api/pool`.
    pub fn collection_path(&self) -> String {
        format!("api/{}", self.as_str())
    }
}

impl Display for ObjectType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObjectType {
    type Err = AviError;

    fn from_str(s: &str) -> Result<ObjectType, AviError> {
        let v: &str = &s.to_lowercase();
        match v {
            "virtualservice" => Ok(ObjectType::VirtualService),
            "vsvip" => Ok(ObjectType::VsVip),
            "pool" => Ok(ObjectType::Pool),
            "poolgroup" => Ok(ObjectType::PoolGroup),
            "healthmonitor" => Ok(ObjectType::HealthMonitor),
            "httppolicyset" => Ok(ObjectType::HttpPolicySet),
            "sslkeyandcertificate" => Ok(ObjectType::SslKeyAndCertificate),
            "serviceenginegroup" => Ok(ObjectType::ServiceEngineGroup),
            "cloud" => Ok(ObjectType::Cloud),
            "ipamdnsproviderprofile" => Ok(ObjectType::IpamDnsProviderProfile),
            "tenant" => Ok(ObjectType::Tenant),
            "vrfcontext" => Ok(ObjectType::VrfContext),
            "network" => Ok(ObjectType::Network),
            "applicationprofile" => Ok(ObjectType::ApplicationProfile),
            "applicationpersistenceprofile" => Ok(ObjectType::ApplicationPersistenceProfile),
            "networkprofile" => Ok(ObjectType::NetworkProfile),
            "vsdatascriptset" => Ok(ObjectType::VsDataScriptSet),
            _ => Err(AviError::InvalidReference {
                reference: s.to_string(),
                reason: "unknown object type".to_string(),
            }),
        }
    }
}

/// A parsed reference field.
///
/// The controller hands references out as `https://<host>/api/<type>/<uuid>#<name>` and accepts
/// `/api/<type>/?name=<name>` or `/api/<type>/<uuid>` on input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRef {
    pub object_type: String,
    pub uuid: Option<String>,
    pub name: Option<String>,
}

impl ObjectRef {
    pub fn parse(reference: &str) -> Result<ObjectRef, AviError> {
        let invalid = |reason: &str| AviError::InvalidReference {
            reference: reference.to_string(),
            reason: reason.to_string(),
        };

        let (path, query, fragment) = if reference.contains("://") {
            let url = Url::parse(reference).map_err(|e| invalid(&e.to_string()))?;
            (
                url.path().to_string(),
                url.query().map(|q| q.to_string()),
                url.fragment().map(|f| f.to_string()),
            )
        } else {
            let (rest, fragment) = match reference.split_once('#') {
                Some((rest, fragment)) => (rest, Some(fragment.to_string())),
                None => (reference, None),
            };
            match rest.split_once('?') {
                Some((path, query)) => (path.to_string(), Some(query.to_string()), fragment),
                None => (rest.to_string(), None, fragment),
            }
        };

        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
        let object_type = match segments.as_slice() {
            ["api", object_type, ..] => object_type.to_string(),
            _ => return Err(invalid("no api/<object type> path")),
        };
        let uuid = segments.get(2).map(|uuid| uuid.to_string());

        let name_from_query = query.as_deref().and_then(|query| {
            query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .find(|(key, _)| *key == "name")
                .map(|(_, value)| decode(value))
        });
        let name = name_from_query.or_else(|| fragment.filter(|f| !f.is_empty()).map(|f| decode(&f)));

        Ok(ObjectRef {
            object_type,
            uuid,
            name,
        })
    }

    pub fn by_name(object_type: ObjectType, name: &str) -> String {
        format!("/api/{}/?name={}", object_type, urlencoding::encode(name))
    }

    pub fn by_uuid(object_type: ObjectType, uuid: &str) -> String {
        format!("/api/{object_type}/{uuid}")
    }

    /// The object type when it is one this crate has a model for.
    pub fn kind(&self) -> Option<ObjectType> {
        ObjectType::from_str(&self.object_type).ok()
    }
}

fn decode(value: &str) -> String {
    let plus_decoded = value.replace('+', " ");
    match urlencoding::decode(&plus_decoded) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => plus_decoded,
    }
}

/// Object type of a reference URL: the path element right after `api`.
///
/// The path must read `api/<type>/...`, with or without the controller prefix. Any other
/// path is an error instead of yielding whatever sits in second position.
pub fn object_type_from_url(url: &str) -> Result<String, AviError> {
    ObjectRef::parse(url).map(|object_ref| object_ref.object_type)
}

/// Last path element of a reference, without query or fragment.
pub fn uuid_from_ref(reference: &str) -> Option<String> {
    let without_fragment = reference.split('#').next().unwrap_or_default();
    let without_query = without_fragment.split('?').next().unwrap_or_default();
    without_query
        .split('/')
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(|segment| segment.to_string())
}
