//! Package version parsing, comparison, and constraint matching.
//!
//! A version has four fields: numeric major/minor/patch and a pre-release
//! tag. Tags compare lexicographically and sort *below* the empty tag at
//! equal numeric parts, so `1.0.0-rc1 < 1.0.0`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use pakt_util::errors::PaktError;

/// A concrete package version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    /// Pre-release tag; empty for a release version.
    pub release: String,
}

impl Version {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            release: String::new(),
        }
    }

    pub fn with_release(major: u32, minor: u32, patch: u32, release: &str) -> Self {
        Self {
            major,
            minor,
            patch,
            release: release.to_string(),
        }
    }

    /// Parse `"M.m.p"` or `"M.m.p-tag"`.
    pub fn parse(text: &str) -> Result<Self, PaktError> {
        let bad = || PaktError::Parse {
            message: format!("invalid version: {text:?}"),
        };

        let (numbers, release) = match text.split_once('-') {
            Some((n, tag)) if !tag.is_empty() => (n, tag.to_string()),
            Some(_) => return Err(bad()),
            None => (text, String::new()),
        };

        let mut parts = numbers.split('.');
        let mut field = || -> Result<u32, PaktError> {
            parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(bad)
        };
        let major = field()?;
        let minor = field()?;
        let patch = field()?;
        if parts.next().is_some() {
            return Err(bad());
        }

        Ok(Self {
            major,
            minor,
            patch,
            release,
        })
    }

    /// Test whether this version satisfies `op other`.
    pub fn satisfies(&self, op: ConstraintOperator, other: &Version) -> bool {
        use ConstraintOperator::*;
        match op {
            Equal => self == other,
            NotEqual => self != other,
            LessThan => self < other,
            LessEqual => self <= other,
            GreaterThan => self > other,
            GreaterEqual => self >= other,
            // ~X.Y.Z means >= X.Y.Z and < X.(Y+1).0
            Approximately => {
                let upper = Version::new(other.major, other.minor + 1, 0);
                self >= other && *self < upper
            }
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.release.is_empty() {
            write!(f, "-{}", self.release)?;
        }
        Ok(())
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let numeric = (self.major, self.minor, self.patch);
        let other_numeric = (other.major, other.minor, other.patch);
        match numeric.cmp(&other_numeric) {
            Ordering::Equal => match (self.release.is_empty(), other.release.is_empty()) {
                (true, true) => Ordering::Equal,
                (true, false) => Ordering::Greater,
                (false, true) => Ordering::Less,
                (false, false) => self.release.cmp(&other.release),
            },
            ord => ord,
        }
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for Version {
    type Err = PaktError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Relational operator in a version constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstraintOperator {
    Equal,
    NotEqual,
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,
    Approximately,
}

impl ConstraintOperator {
    pub fn as_str(self) -> &'static str {
        use ConstraintOperator::*;
        match self {
            Equal => "=",
            NotEqual => "!=",
            LessThan => "<",
            LessEqual => "<=",
            GreaterThan => ">",
            GreaterEqual => ">=",
            Approximately => "~",
        }
    }
}

impl fmt::Display for ConstraintOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `operator version` requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub operator: ConstraintOperator,
    pub version: Version,
}

impl Constraint {
    pub fn new(operator: ConstraintOperator, version: Version) -> Self {
        Self { operator, version }
    }

    /// Parse a constraint token such as `>=1.0.0`, `~2.1.0`, or `!=1.1.2`.
    ///
    /// A bare version means `=`.
    pub fn parse(token: &str) -> Result<Self, PaktError> {
        use ConstraintOperator::*;
        // Two-character operators first so `<=` is not read as `<` `=...`.
        let (operator, rest) = if let Some(rest) = token.strip_prefix("!=") {
            (NotEqual, rest)
        } else if let Some(rest) = token.strip_prefix("<=") {
            (LessEqual, rest)
        } else if let Some(rest) = token.strip_prefix(">=") {
            (GreaterEqual, rest)
        } else if let Some(rest) = token.strip_prefix('=') {
            (Equal, rest)
        } else if let Some(rest) = token.strip_prefix('<') {
            (LessThan, rest)
        } else if let Some(rest) = token.strip_prefix('>') {
            (GreaterThan, rest)
        } else if let Some(rest) = token.strip_prefix('~') {
            (Approximately, rest)
        } else {
            (Equal, token)
        };

        Ok(Self {
            operator,
            version: Version::parse(rest)?,
        })
    }

    /// Whether `version` satisfies this constraint.
    pub fn matches(&self, version: &Version) -> bool {
        version.satisfies(self.operator, &self.version)
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.operator, self.version)
    }
}
