use semver::Version;

/// Zero-pad a partial version to `major.minor.patch` form.
///
/// Pre-release/build metadata is split off first so that padding never
/// lands inside a suffix: "1.0-beta" becomes "1.0.0-beta", not
/// "1.0-beta.0".
fn normalize(version: &str) -> String {
    let (core, suffix) = match version.find(['-', '+']) {
        Some(idx) => version.split_at(idx),
        None => (version, ""),
    };
    let parts: Vec<&str> = core.split('.').collect();
    let padded = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => core.to_string(),
    };
    format!("{padded}{suffix}")
}

/// Parse an untrusted version string, normalizing partial versions.
///
/// Handles partial versions like "1" or "1.2" by padding with zeros
/// before delegating to `semver::Version::parse`. A parse failure is
/// returned to the caller untouched.
///
/// Examples:
/// - "1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "1.2.3" -> Version(1, 2, 3)
/// - "2.0.0-beta" -> Version(2, 0, 0) with pre-release "beta"
pub fn parse(version: &str) -> Result<Version, semver::Error> {
    Version::parse(&normalize(version))
}

/// Like [`parse`], but discards the error.
pub fn parse_version(version: &str) -> Option<Version> {
    parse(version).ok()
}

/// Parse a version string that the calling code knows is well-formed.
///
/// Panics on failure. Intended only for version literals embedded in
/// code, where a parse failure is a programmer error that should be loud
/// and immediate; never use it on user- or network-sourced strings (use
/// [`parse`] for those).
pub fn must_parse(version: &str) -> Version {
    match parse(version) {
        Ok(parsed) => parsed,
        Err(e) => panic!("cannot parse version {version:?}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1", Version::new(1, 0, 0))]
    #[case("1.2", Version::new(1, 2, 0))]
    #[case("1.2.3", Version::new(1, 2, 3))]
    #[case("0.1", Version::new(0, 1, 0))]
    fn test_parse_pads_partial_versions(#[case] input: &str, #[case] expected: Version) {
        assert_eq!(parse(input).unwrap(), expected);
    }

    #[rstest]
    #[case("1.0-beta", "1.0.0-beta")]
    #[case("2.0.0-beta", "2.0.0-beta")]
    #[case("1.2.3+build.5", "1.2.3+build.5")]
    #[case("1-rc.1", "1.0.0-rc.1")]
    fn test_parse_preserves_suffixes(#[case] input: &str, #[case] canonical: &str) {
        assert_eq!(parse(input).unwrap(), Version::parse(canonical).unwrap());
    }

    #[rstest]
    #[case("foobar")]
    #[case("")]
    #[case("1.2.3.4")]
    #[case("1.x")]
    fn test_parse_rejects_invalid(#[case] input: &str) {
        assert!(parse(input).is_err());
        assert!(parse_version(input).is_none());
    }

    #[rstest]
    #[case("1.0")]
    #[case("1.2.3")]
    #[case("2.0.0-beta")]
    fn test_must_parse_round_trips(#[case] input: &str) {
        let parsed = must_parse(input);
        assert_eq!(must_parse(&parsed.to_string()), parsed);
    }

    #[test]
    #[should_panic(expected = "cannot parse version")]
    fn test_must_parse_panics_on_invalid() {
        must_parse("foobar");
    }

    #[rstest]
    #[case("0.9", "1.0", "1.0.1")]
    #[case("1.0.0-alpha", "1.0.0-beta", "1.0.0")]
    #[case("1.9", "1.10", "2.0")]
    fn test_ordering_is_transitive(#[case] a: &str, #[case] b: &str, #[case] c: &str) {
        let (a, b, c) = (must_parse(a), must_parse(b), must_parse(c));
        assert!(a < b);
        assert!(b < c);
        assert!(a < c);
    }
}
