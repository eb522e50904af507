use crate::error::{Result, VrsError};

/// A version split into the parts the bump cares about.
///
/// Only `minor` is interpreted. `major` and `patch` are opaque text and pass
/// through a bump untouched, so `2.9.beta` bumps to `2.10.beta`. Components
/// after the third are not kept.
#[derive(Debug, Clone, PartialEq)]
pub struct VersionParts<'a> {
    pub major: &'a str,
    pub minor: u64,
    pub patch: &'a str,
}

impl<'a> VersionParts<'a> {
    /// Splits a dotted version string.
    ///
    /// # Returns
    /// * `Ok(VersionParts)` - At least three components with an integer minor
    /// * `Err(VrsError::MalformedVersion)` - Fewer than three components, or a
    ///   minor component that is not a non-negative integer
    pub fn parse(version: &'a str) -> Result<Self> {
        let parts: Vec<&str> = version.split('.').collect();
        if parts.len() < 3 {
            return Err(VrsError::malformed(
                version,
                "expected three dot-separated components",
            ));
        }

        let minor = parts[1].parse::<u64>().map_err(|_| {
            VrsError::malformed(
                version,
                format!("minor component '{}' is not a non-negative integer", parts[1]),
            )
        })?;

        Ok(VersionParts {
            major: parts[0],
            minor,
            patch: parts[2],
        })
    }

    /// The next version: minor incremented, major and patch carried through.
    ///
    /// Returns `None` when the minor component cannot be incremented.
    pub fn bumped(&self) -> Option<String> {
        let minor = self.minor.checked_add(1)?;
        Some(format!("{}.{}.{}", self.major, minor, self.patch))
    }
}

/// Computes the version that follows `version`.
///
/// # Example
/// ```
/// assert_eq!(vrs::version::bump("1.4.0").unwrap(), "1.5.0");
/// assert_eq!(vrs::version::bump("2.9.beta").unwrap(), "2.10.beta");
/// ```
pub fn bump(version: &str) -> Result<String> {
    VersionParts::parse(version)?
        .bumped()
        .ok_or_else(|| VrsError::malformed(version, "minor component overflows"))
}

/// Name of the git tag marking `version`.
pub fn tag_name(version: &str) -> String {
    format!("v{}", version)
}
