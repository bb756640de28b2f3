//! Automatic semver bumping for the manifest `version` key.

use semver::Version;
use thiserror::Error;

/// Error returned when the current version cannot be bumped automatically.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    /// The stored version is not a `MAJOR.MINOR.PATCH` semver string.
    #[error("version `{0}` is not a semver version")]
    NotSemver(String),
}

/// Which component of the version to increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    /// Increment the patch component (the default).
    Patch,
    /// Increment the minor component.
    Minor,
    /// Increment the major component.
    Major,
}

/// Increment one component of a semver version string.
///
/// Lower components are left untouched: bumping `0.1.1` by minor yields
/// `0.2.1`, and bumping that by major yields `1.2.1`.
///
/// # Errors
///
/// Returns [`VersionError::NotSemver`] if `current` does not parse as
/// semver; an explicit replacement version bypasses this path entirely.
pub fn bump(current: &str, kind: BumpKind) -> Result<String, VersionError> {
    let mut version =
        Version::parse(current).map_err(|_| VersionError::NotSemver(current.to_owned()))?;

    match kind {
        BumpKind::Patch => version.patch += 1,
        BumpKind::Minor => version.minor += 1,
        BumpKind::Major => version.major += 1,
    }

    Ok(version.to_string())
}
