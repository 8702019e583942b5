use serde::{Deserialize, Serialize};
use std::fmt;

/// `group:artifact` identity of a module, without version.
///
/// This is the unit used to look modules up in a fraction catalog and to
/// assign scopes to declared dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleKey(String);

/// A module key that names a known fraction
pub type FractionKey = ModuleKey;

impl ModuleKey {
    pub fn new(group: &str, artifact: &str) -> Self {
        Self(format!("{}:{}", group, artifact))
    }

    /// Parses `group:artifact`; anything else is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        let (group, artifact) = value.split_once(':')?;
        if group.is_empty() || artifact.is_empty() || artifact.contains(':') {
            return None;
        }
        Some(Self::new(group, artifact))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Group, name and version of a module
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleCoordinates {
    group: String,
    name: String,
    version: String,
}

impl ModuleCoordinates {
    pub fn new(group: impl Into<String>, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn key(&self) -> ModuleKey {
        ModuleKey::new(&self.group, &self.name)
    }

    /// `group:name:version`
    pub fn gav(&self) -> String {
        format!("{}:{}:{}", self.group, self.name, self.version)
    }
}

impl fmt::Display for ModuleCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}
