//! Versioning contract and range-containment check

#[cfg(test)]
use mockall::automock;

use semver::Version;
use tracing::trace;

use crate::version::error::VersionCheckError;
use crate::version::semver::{must_parse, parse};

/// Minimum bound used when a [`GenericVersioner`] is given an empty minimum
pub const DEFAULT_MIN_VERSION: &str = "1.0";

/// Maximum bound used when a [`GenericVersioner`] is given an empty maximum
pub const DEFAULT_MAX_VERSION: &str = "2.0";

/// Trait for types that carry supported-version information
///
/// Purpose-built implementers usually return fixed literals through
/// [`must_parse`]; ad hoc ranges use [`GenericVersioner`].
#[cfg_attr(test, automock)]
pub trait Versioner {
    /// Inclusive minimum supported version
    fn min_version(&self) -> Version;

    /// Inclusive maximum supported version
    fn max_version(&self) -> Version;

    /// Whether the versioned entity is deprecated
    fn deprecated(&self) -> bool;
}

/// Gets the minimum api version required for a thing
pub fn min_version_for(v: &impl Versioner) -> Version {
    v.min_version()
}

/// Gets the maximum api version required for a thing
pub fn max_version_for(v: &impl Versioner) -> Version {
    v.max_version()
}

/// Indicates if a thing is deprecated or not
pub fn is_deprecated(v: &impl Versioner) -> bool {
    v.deprecated()
}

/// Versioner for ad hoc range checks
///
/// Some operations don't have a response type to hang a [`Versioner`]
/// implementation on (think DELETE or PUT), but still need a version
/// check; this covers those call sites.
#[derive(Debug, Clone)]
pub struct GenericVersioner {
    min: String,
    max: String,
    deprecated: bool,
}

impl GenericVersioner {
    /// Returns a versioner with the specified constraints.
    ///
    /// Empty `minimum`/`maximum` strings fall back to
    /// [`DEFAULT_MIN_VERSION`] / [`DEFAULT_MAX_VERSION`]. Bounds are not
    /// validated here: a syntactically invalid bound panics on the first
    /// accessor read, and `minimum > maximum` is accepted silently (the
    /// range check then never succeeds).
    pub fn new(minimum: &str, maximum: &str, deprecated: bool) -> Self {
        let min = if minimum.is_empty() {
            DEFAULT_MIN_VERSION
        } else {
            minimum
        };
        let max = if maximum.is_empty() {
            DEFAULT_MAX_VERSION
        } else {
            maximum
        };
        GenericVersioner {
            min: min.to_string(),
            max: max.to_string(),
            deprecated,
        }
    }
}

impl Versioner for GenericVersioner {
    fn min_version(&self) -> Version {
        must_parse(&self.min)
    }

    fn max_version(&self) -> Version {
        must_parse(&self.max)
    }

    fn deprecated(&self) -> bool {
        self.deprecated
    }
}

/// Checks a versioner against a provided version string.
///
/// `requested` is untrusted input; a malformed string yields
/// [`VersionCheckError::Parse`] with the parser's error passed through.
/// Both bounds are inclusive: the explicit equality checks below are what
/// admit the endpoints, since the interior comparison is strict on both
/// sides.
pub fn check_supported_version(
    v: &impl Versioner,
    requested: &str,
) -> Result<(), VersionCheckError> {
    let min = min_version_for(v);
    let max = max_version_for(v);

    let requested = parse(requested)?;
    if requested == min || requested == max {
        return Ok(());
    }
    if requested > min && requested < max {
        return Ok(());
    }

    trace!(
        "version {} rejected, supported range is {} to {}",
        requested, min, max
    );
    Err(VersionCheckError::Unsupported {
        requested,
        min,
        max,
    })
}
