//! Package specification parsing.

use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

const MIN_VERSION_OP: &str = ">=";

/// A package name with an optional minimum version.
/// Format: "name" or "name>=version"
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageSpec {
    pub name: String,
    pub min_version: Option<String>,
}

impl PackageSpec {
    pub fn new(name: impl Into<String>, min_version: impl Into<String>) -> Self {
        PackageSpec {
            name: name.into(),
            min_version: Some(min_version.into()),
        }
    }
}

impl std::fmt::Display for PackageSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.min_version {
            Some(v) => write!(f, "{}{}{}", self.name, MIN_VERSION_OP, v),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for PackageSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, min_version) = match s.split_once(MIN_VERSION_OP) {
            Some((name, version)) => {
                let version = version.trim();
                if version.is_empty() {
                    return Err(anyhow!(
                        "Invalid package '{}': version after '>=' cannot be empty. Expected 'name>=version'.",
                        s
                    ));
                }
                (name.trim(), Some(version.to_string()))
            }
            None => (s, None),
        };

        if name.is_empty() {
            return Err(anyhow!(
                "Invalid package '{}': name cannot be empty. Expected 'name' or 'name>=version'.",
                s
            ));
        }

        Ok(PackageSpec {
            name: name.to_string(),
            min_version,
        })
    }
}

impl TryFrom<String> for PackageSpec {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PackageSpec> for String {
    fn from(spec: PackageSpec) -> Self {
        spec.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_spec_with_min_version() {
        let spec = PackageSpec::from_str("openai>=1.0.0").unwrap();
        assert_eq!(spec.name, "openai");
        assert_eq!(spec.min_version, Some("1.0.0".to_string()));
    }

    #[test]
    fn test_parse_spec_without_version() {
        let spec = PackageSpec::from_str("tqdm").unwrap();
        assert_eq!(spec.name, "tqdm");
        assert_eq!(spec.min_version, None);
    }

    #[test]
    fn test_parse_spec_trims_whitespace() {
        let spec = PackageSpec::from_str("  numpy >= 1.24.0 ").unwrap();
        assert_eq!(spec, PackageSpec::new("numpy", "1.24.0"));
    }

    #[test]
    fn test_parse_spec_empty_version_fails() {
        let result = PackageSpec::from_str("pandas>=");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("cannot be empty"));
    }

    #[test]
    fn test_parse_spec_empty_name_fails() {
        assert!(PackageSpec::from_str(">=1.0").is_err());
        assert!(PackageSpec::from_str("").is_err());
    }

    #[test]
    fn test_spec_display_keeps_installer_form() {
        let spec = PackageSpec::new("python-docx", "0.8.11");
        assert_eq!(format!("{}", spec), "python-docx>=0.8.11");

        let bare = PackageSpec {
            name: "markdown".into(),
            min_version: None,
        };
        assert_eq!(format!("{}", bare), "markdown");
    }

    #[test]
    fn test_spec_serde_as_string() {
        let spec: PackageSpec = serde_json::from_str(r#""chromadb>=0.4.0""#).unwrap();
        assert_eq!(spec, PackageSpec::new("chromadb", "0.4.0"));
        assert_eq!(
            serde_json::to_string(&spec).unwrap(),
            r#""chromadb>=0.4.0""#
        );
        assert!(serde_json::from_str::<PackageSpec>(r#"">=1""#).is_err());
    }
}
