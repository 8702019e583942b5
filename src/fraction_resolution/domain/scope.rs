use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical dependency scope
///
/// `Import` marks platform/BOM imports; they contribute no artifacts and are
/// never part of a resolution result.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    #[default]
    Compile,
    Provided,
    Runtime,
    Test,
    Import,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Provided => "provided",
            Scope::Runtime => "runtime",
            Scope::Test => "test",
            Scope::Import => "import",
        }
    }

    pub fn is_import(&self) -> bool {
        matches!(self, Scope::Import)
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compile" => Ok(Scope::Compile),
            "provided" => Ok(Scope::Provided),
            "runtime" => Ok(Scope::Runtime),
            "test" => Ok(Scope::Test),
            "import" => Ok(Scope::Import),
            other => Err(format!("Unknown scope: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_display_matches_from_str() {
        for scope in [
            Scope::Compile,
            Scope::Provided,
            Scope::Runtime,
            Scope::Test,
            Scope::Import,
        ] {
            assert_eq!(Scope::from_str(&scope.to_string()).unwrap(), scope);
        }
    }

    #[test]
    fn test_scope_from_str_unknown() {
        let err = Scope::from_str("system").unwrap_err();
        assert!(err.contains("system"));
    }

    #[test]
    fn test_scope_serde_lowercase() {
        let json = serde_json::to_string(&Scope::Provided).unwrap();
        assert_eq!(json, "\"provided\"");
        let scope: Scope = serde_json::from_str("\"test\"").unwrap();
        assert_eq!(scope, Scope::Test);
    }

    #[test]
    fn test_only_import_is_import() {
        assert!(Scope::Import.is_import());
        assert!(!Scope::Runtime.is_import());
        assert_eq!(Scope::default(), Scope::Compile);
    }
}
