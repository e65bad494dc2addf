//! Version policy for catalog entries
//!
//! Versions are plain `major.minor.patch` triples. The only automatic bump
//! is the patch component; brand-new entries start at [`Version::SEED`].

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

static VERSION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)\.(\d+)\.(\d+)$").expect("version pattern is valid"));

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Malformed version \"{0}\": expected MAJOR.MINOR.PATCH")]
    MalformedVersion(String),
}

/// A `major.minor.patch` version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Version given to an entry created without an explicit version
    pub const SEED: Version = Version::new(1, 0, 0);

    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

/// Parse exactly three dot-separated non-negative integers
///
/// Components that do not fit in a `u64` are treated as malformed.
pub fn parse_version(s: &str) -> Result<Version, VersionError> {
    let malformed = || VersionError::MalformedVersion(s.to_string());
    let caps = VERSION_PATTERN.captures(s).ok_or_else(malformed)?;

    let component = |i: usize| -> Result<u64, VersionError> {
        caps[i].parse::<u64>().map_err(|_| malformed())
    };

    Ok(Version::new(component(1)?, component(2)?, component(3)?))
}

/// Successor of `current`: patch + 1, major and minor unchanged
pub fn next_version(current: Version) -> Version {
    Version {
        patch: current.patch.saturating_add(1),
        ..current
    }
}

/// Version to assign when the caller leaves it blank
///
/// Returns the successor of the existing entry's version, or the seed when
/// there is no existing entry. A stored version that no longer parses (for
/// example after a hand edit) yields `Err` carrying the seed so the caller
/// can warn before using it.
pub fn derive_version(existing: Option<&str>) -> Result<Version, (VersionError, Version)> {
    match existing {
        None => Ok(Version::SEED),
        Some(raw) => match parse_version(raw) {
            Ok(current) => Ok(next_version(current)),
            Err(err) => Err((err, Version::SEED)),
        },
    }
}
