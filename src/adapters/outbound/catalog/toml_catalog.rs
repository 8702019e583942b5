use crate::ports::outbound::{FractionCatalog, FractionDescriptor, InputReader};
use crate::shared::error::ResolverError;
use crate::shared::Result;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "fraction")]
    fractions: Vec<FractionDescriptor>,
}

/// TomlFractionCatalog adapter backed by a list of `[[fraction]]` tables
///
/// ```toml
/// [[fraction]]
/// group_id = "io.thorntail"
/// artifact_id = "jaxrs"
/// name = "JAX-RS"
/// ```
#[derive(Debug, Clone, Default)]
pub struct TomlFractionCatalog {
    fractions: Vec<FractionDescriptor>,
}

impl TomlFractionCatalog {
    /// A catalog that knows no fractions
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load<R: InputReader>(reader: &R, path: &Path) -> Result<Self> {
        let content = reader.read_input(path)?;
        Self::parse(&content, path).map_err(Into::into)
    }

    /// Parses catalog content; `source` only names the input in errors
    pub fn parse(content: &str, source: &Path) -> std::result::Result<Self, ResolverError> {
        let parse_error = |details: String| ResolverError::CatalogParseError {
            path: source.to_path_buf(),
            details,
        };

        let file: CatalogFile = toml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        if let Some(invalid) = file
            .fractions
            .iter()
            .find(|f| f.group_id.trim().is_empty() || f.artifact_id.trim().is_empty())
        {
            return Err(parse_error(format!(
                "fraction entry with empty coordinates: '{}:{}'",
                invalid.group_id, invalid.artifact_id
            )));
        }

        tracing::debug!(
            "Loaded {} fraction(s) from {}",
            file.fractions.len(),
            source.display()
        );
        Ok(Self {
            fractions: file.fractions,
        })
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }
}

impl FractionCatalog for TomlFractionCatalog {
    fn fraction_descriptors(&self) -> Result<Vec<FractionDescriptor>> {
        Ok(self.fractions.clone())
    }
}
