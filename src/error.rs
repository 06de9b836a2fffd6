use std::path::PathBuf;
use thiserror::Error;

/// Unified error type for version resolution.
///
/// The probe layer never produces these: command execution failures are
/// collapsed into empty output there. Only the resolver and facade convert
/// a missing precondition or an empty result into one of these kinds.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Git is not installed or not available in the system PATH.")]
    GitNotInstalled,

    #[error("The current directory is not a Git repository.")]
    NotGitRepository,

    #[error("No Git tags found in the repository. Please create at least one version tag.")]
    NoTagsFound,

    #[error("Invalid tag format: '{0}'. Expected semantic version format (e.g., v1.0.0).")]
    InvalidTagFormat(String),

    #[error("Remote repository '{0}' is not accessible or does not exist.")]
    RemoteRepositoryUnavailable(String),

    #[error("Version file not found: {}", .0.display())]
    VersionFileNotFound(PathBuf),

    #[error("Version file is not valid: {}", .0.display())]
    InvalidVersionFile(PathBuf),

    #[error("Version file is empty: {}", .0.display())]
    EmptyVersionFile(PathBuf),
}

/// Convenience type alias for Results in tagver
pub type Result<T> = std::result::Result<T, VersionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VersionError::GitNotInstalled;
        assert_eq!(
            err.to_string(),
            "Git is not installed or not available in the system PATH."
        );
    }

    #[test]
    fn test_error_with_tag() {
        let err = VersionError::InvalidTagFormat("release-x".to_string());
        assert!(err.to_string().contains("release-x"));
        assert!(err.to_string().contains("v1.0.0"));
    }

    #[test]
    fn test_error_with_url() {
        let err = VersionError::RemoteRepositoryUnavailable("git@example.com:a/b.git".to_string());
        assert!(err.to_string().contains("git@example.com:a/b.git"));
    }

    #[test]
    fn test_file_errors_include_path() {
        let path = PathBuf::from("/tmp/project/VERSION");
        let errors = vec![
            VersionError::VersionFileNotFound(path.clone()),
            VersionError::InvalidVersionFile(path.clone()),
            VersionError::EmptyVersionFile(path.clone()),
        ];

        for err in errors {
            assert!(err.to_string().contains("/tmp/project/VERSION"));
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (VersionError::GitNotInstalled, "Git is not installed"),
            (VersionError::NotGitRepository, "not a Git repository"),
            (VersionError::NoTagsFound, "No Git tags found"),
        ];

        for (err, expected_fragment) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.contains(expected_fragment),
                "Error message should contain '{}', but got '{}'",
                expected_fragment,
                msg
            );
        }
    }
}
