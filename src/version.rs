use crate::errors::AviError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Dotted numeric controller version, e.g. `22.1.3`.
///
/// Ordering is component-wise; when one version is a prefix of the other, the shorter one is
/// smaller (`22.1 < 22.1.0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControllerVersion {
    subversions: Vec<u64>,
}

impl ControllerVersion {
    pub fn new(version: &str) -> Result<ControllerVersion, AviError> {
        let subversions = version
            .split('.')
            .map(|component| {
                component.parse::<u64>().map_err(|e| {
                    AviError::InvalidOption(format!("invalid controller version `{version}`: {e}"))
                })
            })
            .collect::<Result<Vec<u64>, AviError>>()?;

        Ok(ControllerVersion { subversions })
    }

    pub fn subversions(&self) -> &[u64] {
        &self.subversions
    }

    pub fn is_at_least(&self, other: &str) -> Result<bool, AviError> {
        Ok(*self >= ControllerVersion::new(other)?)
    }
}

impl FromStr for ControllerVersion {
    type Err = AviError;

    fn from_str(s: &str) -> Result<ControllerVersion, AviError> {
        ControllerVersion::new(s)
    }
}

impl Display for ControllerVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rendered = self
            .subversions
            .iter()
            .map(|subversion| subversion.to_string())
            .collect::<Vec<String>>()
            .join(".");
        f.write_str(&rendered)
    }
}
