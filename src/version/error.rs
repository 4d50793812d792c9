use semver::Version;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VersionCheckError {
    /// The requested version string did not parse; the parser's error is
    /// passed through unchanged.
    #[error(transparent)]
    Parse(#[from] semver::Error),

    /// The requested version parsed but lies outside the supported range.
    #[error(
        "requested version ({requested}) does not meet the requirements for this type (min: {min}, max: {max})"
    )]
    Unsupported {
        requested: Version,
        min: Version,
        max: Version,
    },
}
