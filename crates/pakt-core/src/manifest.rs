//! The `Pakt.toml` package manifest.

use std::path::Path;

use serde::{Deserialize, Serialize};

use pakt_util::errors::PaktError;

use crate::dependency::Dependency;

/// A parsed `Pakt.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub package: PackageMeta,

    /// Dependency declarations in the textual `NAME [OP VER ...]` form.
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// The `[package]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMeta {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, rename = "import-path")]
    pub import_path: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default = "default_license")]
    pub license: String,
}

fn default_version() -> String {
    "0.1.0".to_string()
}

fn default_license() -> String {
    "MIT".to_string()
}

impl Manifest {
    pub fn new(name: &str) -> Self {
        Self {
            package: PackageMeta {
                name: name.to_string(),
                version: default_version(),
                import_path: None,
                summary: None,
                description: None,
                homepage: None,
                license: default_license(),
            },
            dependencies: Vec::new(),
        }
    }

    pub fn parse_toml(content: &str) -> Result<Self, PaktError> {
        toml::from_str(content).map_err(|e| PaktError::Manifest {
            message: e.to_string(),
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, PaktError> {
        let content = std::fs::read_to_string(path).map_err(|e| PaktError::Manifest {
            message: format!("Could not read {}: {e}", path.display()),
        })?;
        Self::parse_toml(&content)
    }

    pub fn to_toml_string(&self) -> Result<String, PaktError> {
        toml::to_string_pretty(self).map_err(|e| PaktError::Manifest {
            message: e.to_string(),
        })
    }

    pub fn write_to(&self, path: &Path) -> Result<(), PaktError> {
        let content = self.to_toml_string()?;
        std::fs::write(path, content).map_err(PaktError::Io)
    }

    /// Parse the declared dependency strings.
    pub fn dependencies(&self) -> Result<Vec<Dependency>, PaktError> {
        self.dependencies.iter().map(|s| Dependency::parse(s)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal() {
        let m = Manifest::parse_toml(
            r#"
[package]
name = "fruitbowl"
"#,
        )
        .unwrap();
        assert_eq!(m.package.name, "fruitbowl");
        assert_eq!(m.package.version, "0.1.0");
        assert_eq!(m.package.license, "MIT");
        assert!(m.dependencies.is_empty());
    }

    #[test]
    fn parse_full() {
        let m = Manifest::parse_toml(
            r#"
dependencies = ["apple =1.0.0", "banana >=0.0.2"]

[package]
name = "fruitbowl"
version = "1.2.0"
import-path = "example.org/fruitbowl"
summary = "A bowl of fruit"
license = "BSD-2-Clause"
"#,
        )
        .unwrap();
        assert_eq!(m.package.import_path.as_deref(), Some("example.org/fruitbowl"));
        assert_eq!(m.package.license, "BSD-2-Clause");
        let deps = m.dependencies().unwrap();
        assert_eq!(deps.len(), 2);
        assert_eq!(deps[0].name, "apple");
        assert_eq!(deps[1].to_string(), "banana >=0.0.2");
    }

    #[test]
    fn bad_dependency_string_is_an_error() {
        let m = Manifest::parse_toml(
            r#"
dependencies = ["apple =not.a.version"]

[package]
name = "broken"
"#,
        )
        .unwrap();
        assert!(m.dependencies().is_err());
    }

    #[test]
    fn toml_round_trip() {
        let mut m = Manifest::new("roundtrip");
        m.dependencies.push("apple >=1.0.0".to_string());
        let text = m.to_toml_string().unwrap();
        let back = Manifest::parse_toml(&text).unwrap();
        assert_eq!(back.package.name, "roundtrip");
        assert_eq!(back.dependencies, vec!["apple >=1.0.0".to_string()]);
    }
}
