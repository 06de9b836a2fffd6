use regex::Regex;
use serde::Serialize;

/// Semantic version grammar, applied after prefix stripping.
///
/// major/minor/patch are `0` or a non-zero-leading digit run; prerelease
/// identifiers are dot-separated and either all-digits without a leading
/// zero or contain at least one letter/hyphen; build metadata identifiers
/// allow any alphanumeric-or-hyphen content including leading zeros.
const MATCHER: &str = r"^(?P<major>0|[1-9]\d*)\.(?P<minor>0|[1-9]\d*)\.(?P<patch>0|[1-9]\d*)(?:-(?P<prerelease>(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+(?P<buildmetadata>[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$";

/// Leading label recognized on tags: `v`, `ver` or `version`, case
/// insensitive, optionally followed by a dot or whitespace separator.
/// Longest alternative first so "version1.0.0" does not strip just "v".
const PREFIX: &str = r"^(?i:version|ver|v)[.\s]*";

/// A version string split into its semantic components.
///
/// All fields are kept as strings: formatting is purely textual
/// substitution, and unparsable input must survive verbatim.
/// When `clean` does not match the grammar, the five structured fields
/// are empty and `clean` is the prefix-stripped input as given.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ParsedVersion {
    /// Original input, including any prefix
    pub full: String,
    /// Input with the recognized prefix stripped
    pub clean: String,
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub prerelease: String,
    pub buildmetadata: String,
}

/// Parses a raw version string into components.
///
/// Pure and total: never fails. An unparsable string yields a
/// [ParsedVersion] with empty structured fields rather than an error.
///
/// # Example
/// ```
/// let parts = tagver::semver::parse("v1.2.3-alpha.1+build.123");
/// assert_eq!(parts.clean, "1.2.3-alpha.1+build.123");
/// assert_eq!(parts.major, "1");
/// assert_eq!(parts.prerelease, "alpha.1");
/// ```
pub fn parse(raw: &str) -> ParsedVersion {
    let clean = match Regex::new(PREFIX) {
        Ok(re) => re.replace(raw, "").into_owned(),
        Err(_) => raw.to_string(),
    };

    if let Ok(re) = Regex::new(MATCHER) {
        if let Some(captures) = re.captures(&clean) {
            let group = |name: &str| {
                captures
                    .name(name)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default()
            };

            return ParsedVersion {
                full: raw.to_string(),
                clean: clean.clone(),
                major: group("major"),
                minor: group("minor"),
                patch: group("patch"),
                prerelease: group("prerelease"),
                buildmetadata: group("buildmetadata"),
            };
        }
    }

    ParsedVersion {
        full: raw.to_string(),
        clean,
        ..Default::default()
    }
}

/// Checks a string against the semantic version grammar after prefix
/// stripping. Used by the strict tag validation mode.
pub fn is_valid(raw: &str) -> bool {
    !parse(raw).major.is_empty()
}
