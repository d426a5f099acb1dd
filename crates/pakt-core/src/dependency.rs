//! Dependency specifications: a package name plus version constraints.

use std::fmt;
use std::str::FromStr;

use pakt_util::errors::PaktError;

use crate::version::{Constraint, Version};

/// A named requirement on a package, carrying zero or more constraints.
///
/// The textual form is `NAME [OP VER [OP VER ...]]`, e.g. `durian >=0.0.1`
/// or `pack3 ~1.0.0 !=1.1.2`. An empty constraint list matches any version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub name: String,
    pub constraints: Vec<Constraint>,
}

impl Dependency {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            constraints: Vec::new(),
        }
    }

    pub fn with_constraints(name: &str, constraints: Vec<Constraint>) -> Self {
        Self {
            name: name.to_string(),
            constraints,
        }
    }

    /// Parse the textual form. The first whitespace-separated token is the
    /// package name; every following token is a constraint.
    pub fn parse(text: &str) -> Result<Self, PaktError> {
        let mut tokens = text.split_whitespace();
        let name = tokens.next().ok_or_else(|| PaktError::Parse {
            message: "empty dependency".to_string(),
        })?;
        if name.starts_with(['=', '!', '<', '>', '~']) {
            return Err(PaktError::Parse {
                message: format!("dependency must start with a package name: {text:?}"),
            });
        }

        let constraints = tokens
            .map(Constraint::parse)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            constraints,
        })
    }

    /// Whether `version` satisfies every constraint.
    pub fn matched_by(&self, version: &Version) -> bool {
        self.constraints.iter().all(|c| c.matches(version))
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for c in &self.constraints {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}

impl FromStr for Dependency {
    type Err = PaktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
