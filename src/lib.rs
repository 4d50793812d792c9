//! Semantic version range gating for API client operations
//!
//! API clients often talk to servers whose capabilities vary by version.
//! This crate lets a client library attach an inclusive supported-version
//! range and a deprecation flag to any type, then gate each operation
//! with a single check against the server-reported version string.
//!
//! ```
//! use version_gate::{GenericVersioner, check_supported_version};
//!
//! let gate = GenericVersioner::new("1.0.1", "1.9", false);
//! assert!(check_supported_version(&gate, "1.1").is_ok());
//! assert!(check_supported_version(&gate, "2.0").is_err());
//! ```

pub mod version;

pub use version::error::VersionCheckError;
pub use version::semver::{must_parse, parse, parse_version};
pub use version::versioner::{
    DEFAULT_MAX_VERSION, DEFAULT_MIN_VERSION, GenericVersioner, Versioner,
    check_supported_version, is_deprecated, max_version_for, min_version_for,
};
