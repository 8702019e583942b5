use super::variants::{
    AdditionalDependency, AdditionalFraction, Autodetection, Dependencies, IncludedTechnology,
    Packaging,
};
use crate::shared::error::ResolverError;
use std::collections::BTreeSet;
use std::fmt;

const RECORD_SEPARATOR: char = ':';
const TECHNOLOGY_SEPARATOR: char = ',';

/// Setup of the generated testing project.
///
/// Construction guarantees that every included technology's prerequisites
/// are included too. All derivations are pure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TestingProject {
    packaging: Packaging,
    dependencies: Dependencies,
    autodetection: Autodetection,
    included_technologies: BTreeSet<IncludedTechnology>,
    additional_dependency: AdditionalDependency,
    additional_fraction: AdditionalFraction,
}

impl TestingProject {
    /// # Errors
    /// Returns `ResolverError::InvalidConfiguration` naming the first
    /// technology whose prerequisites are missing.
    pub fn new(
        packaging: Packaging,
        dependencies: Dependencies,
        autodetection: Autodetection,
        included_technologies: &[IncludedTechnology],
        additional_dependency: AdditionalDependency,
        additional_fraction: AdditionalFraction,
    ) -> Result<Self, ResolverError> {
        let technologies: BTreeSet<IncludedTechnology> = included_technologies.iter().copied().collect();
        for technology in &technologies {
            let missing: Vec<_> = technology
                .depends_on()
                .iter()
                .filter(|prerequisite| !technologies.contains(*prerequisite))
                .map(|prerequisite| prerequisite.name())
                .collect();
            if !missing.is_empty() {
                return Err(ResolverError::invalid_configuration(format!(
                    "If you want to include {}, you also have to include {}",
                    technology,
                    missing.join(", ")
                )));
            }
        }

        Ok(Self {
            packaging,
            dependencies,
            autodetection,
            included_technologies: technologies,
            additional_dependency,
            additional_fraction,
        })
    }

    pub fn packaging(&self) -> Packaging {
        self.packaging
    }

    pub fn dependencies(&self) -> Dependencies {
        self.dependencies
    }

    pub fn autodetection(&self) -> Autodetection {
        self.autodetection
    }

    pub fn included_technologies(&self) -> &BTreeSet<IncludedTechnology> {
        &self.included_technologies
    }

    pub fn additional_dependency(&self) -> AdditionalDependency {
        self.additional_dependency
    }

    pub fn additional_fraction(&self) -> AdditionalFraction {
        self.additional_fraction
    }

    pub fn has_explicit_fraction_dependencies(&self) -> bool {
        self.dependencies == Dependencies::Fractions
    }

    pub fn autodetection_effective(&self) -> bool {
        match self.autodetection {
            Autodetection::Force => true,
            Autodetection::Never => false,
            Autodetection::WhenMissing => !self.has_explicit_fraction_dependencies(),
        }
    }

    /// Whether the project's integration tests can run at all
    pub fn tests_runnable(&self) -> bool {
        // the tests hit HTTP endpoints, which only a WAR exposes
        if self.packaging == Packaging::Jar {
            return false;
        }
        if self.dependencies == Dependencies::JavaEeApis {
            return self.autodetection_effective();
        }
        true
    }

    pub fn expected_present_fractions(&self) -> BTreeSet<&'static str> {
        let mut expected: BTreeSet<&'static str> = self
            .included_technologies
            .iter()
            .map(|technology| technology.fraction())
            .collect();

        if self.autodetection_effective() {
            expected.extend(self.additional_dependency.brings_fraction());
        }

        // plain EE APIs without autodetection give nothing to infer fractions from
        if self.dependencies == Dependencies::JavaEeApis && !self.autodetection_effective() {
            expected.clear();
        }

        expected.extend(self.additional_fraction.brings_fraction());
        expected
    }

    pub fn expected_absent_fractions(&self) -> BTreeSet<&'static str> {
        let present = self.expected_present_fractions();
        Self::all_known_fractions()
            .into_iter()
            .filter(|fraction| !present.contains(fraction))
            .collect()
    }

    /// Every fraction any scenario could bring
    pub fn all_known_fractions() -> BTreeSet<&'static str> {
        IncludedTechnology::ALL
            .iter()
            .map(|technology| technology.fraction())
            .chain(AdditionalDependency::all_possible_fractions())
            .chain(AdditionalFraction::all_possible_fractions())
            .collect()
    }

    /// Dependency declarations for the project descriptor
    pub fn dependencies_snippet(&self) -> String {
        let mut snippet: String = self
            .included_technologies
            .iter()
            .map(|technology| technology.dependency_snippet(self.dependencies))
            .collect();
        snippet.push_str(&self.additional_dependency.dependency_snippet());
        snippet
    }

    /// Packaging plugin configuration
    pub fn plugin_configuration_snippet(&self) -> String {
        let mut snippet = format!(
            "<fractionDetectMode>{}</fractionDetectMode>\n",
            self.autodetection.plugin_value()
        );
        if let Some(fraction) = self.additional_fraction.brings_fraction() {
            snippet.push_str(&format!(
                "<fractions><fraction>{}</fraction></fractions>\n",
                fraction
            ));
        }
        snippet
    }

    /// Colon-delimited record:
    /// `packaging:dependencies:autodetection:tech1,tech2:additional-dependency:additional-fraction`
    pub fn serialize(&self) -> String {
        let technologies: Vec<&str> = self
            .included_technologies
            .iter()
            .map(|technology| technology.name())
            .collect();
        [
            self.packaging.name().to_string(),
            self.dependencies.name().to_string(),
            self.autodetection.name().to_string(),
            technologies.join(&TECHNOLOGY_SEPARATOR.to_string()),
            self.additional_dependency.name().to_string(),
            self.additional_fraction.name().to_string(),
        ]
        .join(&RECORD_SEPARATOR.to_string())
    }

    /// Parses a record produced by [`TestingProject::serialize`].
    ///
    /// # Errors
    /// Returns `ResolverError::InvalidConfiguration` for a wrong field count,
    /// an unknown value or a model that fails validation.
    pub fn deserialize(record: &str) -> Result<Self, ResolverError> {
        let parts: Vec<&str> = record.trim().split(RECORD_SEPARATOR).collect();
        if parts.len() != 6 {
            return Err(ResolverError::invalid_configuration(format!(
                "Expected 6 ':'-separated fields in testing project record, found {}: '{}'",
                parts.len(),
                record
            )));
        }

        let technologies = if parts[3].is_empty() {
            Vec::new()
        } else {
            parts[3]
                .split(TECHNOLOGY_SEPARATOR)
                .map(str::parse)
                .collect::<Result<Vec<IncludedTechnology>, _>>()?
        };

        Self::new(
            parts[0].parse()?,
            parts[1].parse()?,
            parts[2].parse()?,
            &technologies,
            parts[4].parse()?,
            parts[5].parse()?,
        )
    }
}

impl fmt::Display for TestingProject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let technologies: Vec<&str> = self
            .included_technologies
            .iter()
            .map(|technology| technology.name())
            .collect();
        write!(
            f,
            "packaging: {}, dependencies: {}, autodetection: {}, technologies: [{}], additional dependency: {}, additional fraction: {}",
            self.packaging,
            self.dependencies,
            self.autodetection,
            technologies.join(", "),
            self.additional_dependency,
            self.additional_fraction
        )
    }
}
