//! Host version parsing and minimum-version checks.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// A dotted numeric version as reported by the host (`10.0.17763`, `2.0`).
///
/// Missing trailing components compare as zero, so `2` == `2.0.0`.
#[derive(Debug, Clone)]
pub struct HostVersion {
    raw: String,
    parts: Vec<u64>,
}

impl HostVersion {
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        let parts = raw
            .split('.')
            .map(|part| part.parse::<u64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_| {
                Error::validation_invalid_argument(
                    "version",
                    format!("Invalid host version '{}'", input),
                    Some(input.to_string()),
                    None,
                )
                .with_hint("Expected dotted numbers, e.g. 10.0.17763")
            })?;

        Ok(Self {
            raw: raw.to_string(),
            parts,
        })
    }

    pub fn parts(&self) -> &[u64] {
        &self.parts
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for HostVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for HostVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HostVersion {}

impl PartialOrd for HostVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HostVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| {
                let a = self.parts.get(i).copied().unwrap_or(0);
                let b = other.parts.get(i).copied().unwrap_or(0);
                a.cmp(&b)
            })
            .find(|ord| *ord != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

/// Fail with a version mismatch when `actual` is older than `required`.
///
/// `function` names the operation that needs the newer host.
pub fn require_version(function: &str, required: &str, actual: &str) -> Result<()> {
    let required_version = HostVersion::parse(required)?;
    let actual_version = HostVersion::parse(actual)?;

    if actual_version < required_version {
        return Err(Error::version_mismatch(
            required_version.as_str(),
            actual_version.as_str(),
            function,
        ));
    }

    Ok(())
}
