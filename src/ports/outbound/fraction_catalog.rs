use crate::fraction_resolution::domain::{FractionKey, ModuleKey};
use crate::shared::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One entry of the fraction catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionDescriptor {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Human-readable fraction name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl FractionDescriptor {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            name: None,
        }
    }

    pub fn key(&self) -> FractionKey {
        ModuleKey::new(&self.group_id, &self.artifact_id)
    }
}

/// FractionCatalog port listing the fractions the runtime knows about
///
/// The catalog is read-only and is queried once per resolution pass.
pub trait FractionCatalog {
    /// Returns every fraction in the catalog
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be loaded
    fn fraction_descriptors(&self) -> Result<Vec<FractionDescriptor>>;

    /// Returns the `group:artifact` keys of every fraction
    ///
    /// # Errors
    /// Returns an error if the catalog cannot be loaded
    fn fraction_keys(&self) -> Result<HashSet<FractionKey>> {
        Ok(self
            .fraction_descriptors()?
            .iter()
            .map(FractionDescriptor::key)
            .collect())
    }
}

impl<T: FractionCatalog + ?Sized> FractionCatalog for &T {
    fn fraction_descriptors(&self) -> Result<Vec<FractionDescriptor>> {
        (**self).fraction_descriptors()
    }

    fn fraction_keys(&self) -> Result<HashSet<FractionKey>> {
        (**self).fraction_keys()
    }
}
