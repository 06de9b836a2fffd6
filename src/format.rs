use regex::{Captures, Regex};

use crate::config::VersionSource;
use crate::probe::CommitInfo;
use crate::semver::ParsedVersion;

/// Named format kinds. Anything else passed to [format_version] is
/// treated as a custom template.
pub const FORMATS: &[&str] = &[
    "full",
    "compact",
    "version",
    "version-only",
    "major",
    "minor",
    "patch",
    "commit",
    "prerelease",
    "buildmetadata",
];

/// Returns true if `format` is one of the named kinds rather than a
/// custom template.
pub fn is_named_format(format: &str) -> bool {
    FORMATS.contains(&format)
}

/// Renders the `full` kind, which is source-sensitive: a file-based
/// version has no commit to report.
///
/// # Example
/// ```
/// # use tagver::config::VersionSource;
/// # use tagver::probe::CommitInfo;
/// # use tagver::format::full_format;
/// let parts = tagver::semver::parse("1.0.0");
/// let commit = CommitInfo::new("abc123def".to_string());
/// assert_eq!(
///     full_format(&parts, &commit, VersionSource::File),
///     "Version 1.0.0"
/// );
/// assert_eq!(
///     full_format(&parts, &commit, VersionSource::GitLocal),
///     "Version 1.0.0 (commit abc123)"
/// );
/// ```
pub fn full_format(parts: &ParsedVersion, commit: &CommitInfo, source: VersionSource) -> String {
    if source == VersionSource::File {
        format!("Version {}", parts.clean)
    } else {
        format!("Version {} (commit {})", parts.clean, commit.short)
    }
}

/// Formats a parsed version according to a named kind or custom template.
///
/// Named kinds map to a single field or a fixed rendering; any other
/// string is scanned for `{token}` placeholders which are substituted in
/// one non-recursive pass. Unrecognized tokens are left verbatim.
pub fn format_version(
    format: &str,
    parts: &ParsedVersion,
    commit: &CommitInfo,
    branch: &str,
    source: VersionSource,
) -> String {
    match format {
        "full" => full_format(parts, commit, source),
        "compact" => format!("v{}", parts.clean),
        "version" => parts.full.clone(),
        "version-only" => parts.clean.clone(),
        "major" => parts.major.clone(),
        "minor" => parts.minor.clone(),
        "patch" => parts.patch.clone(),
        "commit" => commit.short.clone(),
        "prerelease" => parts.prerelease.clone(),
        "buildmetadata" => parts.buildmetadata.clone(),
        template => format_custom(template, parts, commit, branch, source),
    }
}

/// Substitutes `{token}` placeholders in a custom template.
///
/// A single `replace_all` scan guarantees inserted text is never
/// re-substituted, unlike chained string replacement.
fn format_custom(
    template: &str,
    parts: &ParsedVersion,
    commit: &CommitInfo,
    branch: &str,
    source: VersionSource,
) -> String {
    let re = match Regex::new(r"\{([a-z-]+)\}") {
        Ok(re) => re,
        Err(_) => return template.to_string(),
    };

    re.replace_all(template, |caps: &Captures| match &caps[1] {
        "full" => full_format(parts, commit, source),
        "compact" => format!("v{}", parts.clean),
        "version" => parts.full.clone(),
        "version-only" => parts.clean.clone(),
        "major" => parts.major.clone(),
        "minor" => parts.minor.clone(),
        "patch" => parts.patch.clone(),
        "commit" => commit.short.clone(),
        "prerelease" => parts.prerelease.clone(),
        "buildmetadata" => parts.buildmetadata.clone(),
        "branch" => branch.to_string(),
        _ => caps[0].to_string(),
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semver::parse;

    fn commit() -> CommitInfo {
        CommitInfo::new("abc123def4567890".to_string())
    }

    #[test]
    fn test_named_kinds_map_to_fields() {
        let parts = parse("v1.2.3-alpha.1+build.9");
        let commit = commit();

        let cases = vec![
            ("compact", "v1.2.3-alpha.1+build.9"),
            ("version", "v1.2.3-alpha.1+build.9"),
            ("version-only", "1.2.3-alpha.1+build.9"),
            ("major", "1"),
            ("minor", "2"),
            ("patch", "3"),
            ("commit", "abc123"),
            ("prerelease", "alpha.1"),
            ("buildmetadata", "build.9"),
        ];

        for (kind, expected) in cases {
            assert_eq!(
                format_version(kind, &parts, &commit, "main", VersionSource::GitLocal),
                expected,
                "kind '{}'",
                kind
            );
        }
    }

    #[test]
    fn test_full_format_source_sensitivity() {
        let parts = parse("1.0.0");
        let commit = commit();

        assert_eq!(
            full_format(&parts, &commit, VersionSource::File),
            "Version 1.0.0"
        );
        assert_eq!(
            full_format(&parts, &commit, VersionSource::GitLocal),
            "Version 1.0.0 (commit abc123)"
        );
        assert_eq!(
            full_format(&parts, &commit, VersionSource::GitRemote),
            "Version 1.0.0 (commit abc123)"
        );
    }

    #[test]
    fn test_custom_template() {
        let parts = parse("v2.1.0");
        let rendered = format_version(
            "{compact} on {branch} ({commit})",
            &parts,
            &commit(),
            "develop",
            VersionSource::GitLocal,
        );
        assert_eq!(rendered, "v2.1.0 on develop (abc123)");
    }

    #[test]
    fn test_custom_template_unknown_tokens_left_verbatim() {
        let parts = parse("1.0.0");
        let rendered = format_version(
            "{major}.{minor} {unknown} {not-a-token}",
            &parts,
            &commit(),
            "main",
            VersionSource::GitLocal,
        );
        assert_eq!(rendered, "1.0 {unknown} {not-a-token}");
    }

    #[test]
    fn test_custom_template_single_pass() {
        // inserted text containing a token must not be re-substituted
        let mut parts = parse("1.0.0");
        parts.prerelease = "{major}".to_string();
        let rendered = format_version(
            "{prerelease}",
            &parts,
            &commit(),
            "main",
            VersionSource::GitLocal,
        );
        assert_eq!(rendered, "{major}");
    }

    #[test]
    fn test_is_named_format() {
        assert!(is_named_format("full"));
        assert!(is_named_format("version-only"));
        assert!(!is_named_format("{major}.{minor}"));
        assert!(!is_named_format("timestamp-year"));
    }
}
