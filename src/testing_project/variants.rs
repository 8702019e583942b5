use crate::shared::error::ResolverError;
use std::fmt;
use std::str::FromStr;

/// Declares a closed scenario enumeration whose variants round-trip through
/// their upper-case record names.
macro_rules! scenario_variants {
    ($(#[$meta:meta])* $name:ident, $label:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $name {
            type Err = ResolverError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok($name::$variant),)+
                    other => Err(ResolverError::invalid_configuration(format!(
                        "Unknown {} value: '{}'",
                        $label, other
                    ))),
                }
            }
        }
    };
}

scenario_variants!(
    /// Archive type of the testing project
    Packaging, "packaging" {
        Jar => "JAR",
        War => "WAR",
    }
);

scenario_variants!(
    /// How the testing project declares what it needs
    Dependencies, "dependencies" {
        Fractions => "FRACTIONS",
        JavaEeApis => "JAVA_EE_APIS",
    }
);

scenario_variants!(
    /// Fraction autodetection policy handed to the packaging plugin
    Autodetection, "autodetection" {
        Force => "FORCE",
        Never => "NEVER",
        WhenMissing => "WHEN_MISSING",
    }
);

scenario_variants!(
    /// Technologies the testing project exercises
    IncludedTechnology, "included technology" {
        Servlet => "SERVLET",
        JaxRs => "JAX_RS",
        Ejb => "EJB",
    }
);

scenario_variants!(
    /// An extra library dependency that autodetection may or may not act on
    AdditionalDependency, "additional dependency" {
        None => "NONE",
        NonJavaEe => "NON_JAVA_EE",
        UsingJavaEe => "USING_JAVA_EE",
    }
);

scenario_variants!(
    /// An extra fraction requested explicitly in the plugin configuration
    AdditionalFraction, "additional fraction" {
        None => "NONE",
        AlreadyPresent => "ALREADY_PRESENT",
        NotYetPresent => "NOT_YET_PRESENT",
    }
);

const FRACTION_GROUP: &str = "io.thorntail";

fn dependency_xml(group: &str, artifact: &str, version: Option<&str>, scope: Option<&str>) -> String {
    let mut xml = format!(
        "<dependency><groupId>{}</groupId><artifactId>{}</artifactId>",
        group, artifact
    );
    if let Some(version) = version {
        xml.push_str(&format!("<version>{}</version>", version));
    }
    if let Some(scope) = scope {
        xml.push_str(&format!("<scope>{}</scope>", scope));
    }
    xml.push_str("</dependency>\n");
    xml
}

impl Packaging {
    pub fn packaging_type(&self) -> &'static str {
        match self {
            Packaging::Jar => "jar",
            Packaging::War => "war",
        }
    }
}

impl Autodetection {
    /// Value of the plugin's `fractionDetectMode` setting
    pub fn plugin_value(&self) -> &'static str {
        match self {
            Autodetection::Force => "force",
            Autodetection::Never => "never",
            Autodetection::WhenMissing => "when_missing",
        }
    }
}

impl IncludedTechnology {
    /// Fraction that provides this technology
    pub fn fraction(&self) -> &'static str {
        match self {
            IncludedTechnology::Servlet => "undertow",
            IncludedTechnology::JaxRs => "jaxrs",
            IncludedTechnology::Ejb => "ejb",
        }
    }

    /// Technologies that must be included alongside this one
    pub fn depends_on(&self) -> &'static [IncludedTechnology] {
        match self {
            IncludedTechnology::Servlet | IncludedTechnology::JaxRs => &[],
            // the EJB sample is invoked through a servlet
            IncludedTechnology::Ejb => &[IncludedTechnology::Servlet],
        }
    }

    pub fn dependency_snippet(&self, dependencies: Dependencies) -> String {
        match dependencies {
            Dependencies::Fractions => dependency_xml(FRACTION_GROUP, self.fraction(), None, None),
            Dependencies::JavaEeApis => {
                let (group, artifact) = match self {
                    IncludedTechnology::Servlet => ("javax.servlet", "javax.servlet-api"),
                    IncludedTechnology::JaxRs => {
                        ("org.jboss.spec.javax.ws.rs", "jboss-jaxrs-api_2.1_spec")
                    }
                    IncludedTechnology::Ejb => ("org.jboss.spec.javax.ejb", "jboss-ejb-api_3.2_spec"),
                };
                dependency_xml(group, artifact, None, Some("provided"))
            }
        }
    }
}

impl AdditionalDependency {
    /// Fraction autodetection infers from this dependency, if any
    pub fn brings_fraction(&self) -> Option<&'static str> {
        match self {
            AdditionalDependency::None | AdditionalDependency::NonJavaEe => None,
            AdditionalDependency::UsingJavaEe => Some("cdi"),
        }
    }

    pub fn dependency_snippet(&self) -> String {
        match self {
            AdditionalDependency::None => String::new(),
            AdditionalDependency::NonJavaEe => dependency_xml("joda-time", "joda-time", Some("2.10.5"), None),
            AdditionalDependency::UsingJavaEe => dependency_xml(
                "org.apache.deltaspike.core",
                "deltaspike-core-api",
                Some("1.9.3"),
                None,
            ),
        }
    }

    pub fn all_possible_fractions() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().filter_map(|d| d.brings_fraction())
    }
}

impl AdditionalFraction {
    /// Fraction explicitly requested in the plugin configuration, if any
    pub fn brings_fraction(&self) -> Option<&'static str> {
        match self {
            AdditionalFraction::None => None,
            AdditionalFraction::AlreadyPresent => Some("undertow"),
            AdditionalFraction::NotYetPresent => Some("logstash"),
        }
    }

    pub fn all_possible_fractions() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().filter_map(|f| f.brings_fraction())
    }
}
