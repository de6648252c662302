use semver::{Prerelease, Version};

/// Parse a release tag into a semver::Version.
///
/// Tags are free-form upstream, so this accepts what release tags usually
/// look like rather than strict semver only:
/// - a leading 'v' is stripped
/// - partial versions are padded with zeros
/// - leading zeros in major, minor and patch are dropped
///
/// Examples:
/// - "v1" -> Version(1, 0, 0)
/// - "1.2" -> Version(1, 2, 0)
/// - "v1.2-rc1" -> Version(1, 2, 0, pre: "rc1")
/// - "v2024.02.0" -> Version(2024, 2, 0)
pub fn parse_tag(tag: &str) -> Result<Version, semver::Error> {
    let version = tag.strip_prefix('v').unwrap_or(tag);
    let suffix_start = version.find(['-', '+']).unwrap_or(version.len());
    let (core, suffix) = version.split_at(suffix_start);

    let mut parts: Vec<&str> = core.split('.').map(trim_leading_zeros).collect();
    if parts.len() < 3 {
        parts.resize(3, "0");
    }
    Version::parse(&format!("{}{}", parts.join("."), suffix))
}

/// "02" -> "2", "000" -> "0"; anything not purely numeric is left for the parser to reject
fn trim_leading_zeros(part: &str) -> &str {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return part;
    }
    match part.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    }
}

/// Whether the version carries no prerelease component
pub fn is_stable(version: &Version) -> bool {
    version.pre.is_empty()
}

/// Whether `candidate` has strictly higher precedence than `current`.
///
/// Build metadata does not take part in precedence.
pub fn is_newer(candidate: &Version, current: &Version) -> bool {
    precedence(candidate) > precedence(current)
}

fn precedence(version: &Version) -> (u64, u64, u64, &Prerelease) {
    (version.major, version.minor, version.patch, &version.pre)
}
