//! Version-stability classification.
//!
//! Mirrors the convention of dependency-update tooling: a version is stable
//! unless a pre-release qualifier terminates it.

use std::sync::LazyLock;

use regex::Regex;

/// Suffixes that force a version to be treated as stable.
const STABLE_SUFFIXES: [&str; 3] = ["RELEASE", "FINAL", "GA"];

/// Pre-release qualifiers. Matched case-insensitively, preceded by `.` or
/// `-`, optionally followed by digits, dots, or dashes.
const QUALIFIERS: [&str; 11] = [
    "alpha", "b", "beta", "rc", "m", "ea", "pr", "atlassian", "snapshot", "dev", "preview",
];

static QUALIFIER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    QUALIFIERS
        .iter()
        .map(|qualifier| {
            Regex::new(&format!(r"(?i).*[.-]{}[.\d-]*$", qualifier))
                .expect("Qualifier pattern must be valid")
        })
        .collect()
});

/// True when the version string carries a pre-release qualifier.
pub fn is_non_stable(version: &str) -> bool {
    let upper = version.to_uppercase();
    if STABLE_SUFFIXES.iter().any(|suffix| upper.ends_with(suffix)) {
        return false;
    }
    QUALIFIER_PATTERNS.iter().any(|pattern| pattern.is_match(version))
}

/// True when the version string has no pre-release qualifier.
pub fn is_stable(version: &str) -> bool {
    !is_non_stable(version)
}
