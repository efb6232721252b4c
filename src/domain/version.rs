//! Pure helpers over plugin release version strings.
//!
//! Release versions follow the `x.y.z` scheme where `x.y.1` opens a major
//! line and later `z` values are patches of that line. Version strings
//! without any `.` are treated as dev builds.

/// Sentinel used when a version string has no `.`-separated segments.
pub const DEV_VERSION: &str = "0.0.0-dev";

/// Strip a single leading `v`/`V` from a release tag.
pub fn version_from_tag(tag: &str) -> &str {
    tag.strip_prefix(['v', 'V']).unwrap_or(tag)
}

/// Collapse a version to its dotless feature line: drop the final
/// `.`-segment, then remove the remaining dots (`"1.2.1"` → `"12"`).
/// A string without any `.` yields [`DEV_VERSION`].
pub fn compact_version(version: &str) -> String {
    match version.rfind('.') {
        Some(idx) => version[..idx].replace('.', ""),
        None => DEV_VERSION.to_string(),
    }
}

/// True when the version opens a major line (`x.y.1`).
pub fn is_major_line(version: &str) -> bool {
    version.contains('.') && version.rsplit('.').next() == Some("1")
}

/// Name the major line a version belongs to by replacing the final
/// `.`-segment with `1`. Returns `None` for versions without any `.`.
pub fn major_line_of(version: &str) -> Option<String> {
    version.rfind('.').map(|idx| format!("{}.1", &version[..idx]))
}
