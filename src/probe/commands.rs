//! Command shapes issued against the `git` binary.
//!
//! Kept in one place so the probe implementation stays a thin executor.
//! The remote queries are shell pipelines; they are run through `sh -c`
//! with the working directory set to the configured base path.

/// Check if git is available on the system.
pub fn check_git_available() -> String {
    "git --version".to_string()
}

/// Check if the current directory is a git repository.
pub fn check_git_repository() -> String {
    "git rev-parse --git-dir".to_string()
}

/// Get the URL of the origin remote.
pub fn get_repository_url() -> String {
    "git config --get remote.origin.url".to_string()
}

/// Get the commit hash of the local HEAD.
pub fn get_commit_on_local() -> String {
    "git rev-parse --verify HEAD".to_string()
}

/// Get the hash of the latest commit on a remote repository.
pub fn get_latest_commit_on_remote(repository: &str) -> String {
    format!("git ls-remote {} | tail -1 | cut -f1", repository)
}

/// Get the nearest version tag on the local repository.
pub fn get_latest_version_on_local() -> String {
    "git describe --tags --abbrev=0".to_string()
}

/// Count the tags in the repository.
pub fn count_tags() -> String {
    "git tag -l | wc -l".to_string()
}

/// Get the current branch name.
pub fn get_current_branch() -> String {
    "git rev-parse --abbrev-ref HEAD".to_string()
}

/// Get the highest version tag on a remote repository. Peeled tag refs
/// (`^{}`) are filtered out before the version sort.
pub fn get_latest_version_on_remote(repository: &str) -> String {
    format!(
        "git ls-remote {} | grep 'refs/tags/' | grep -v '{{}}' | cut -d '/' -f 3 | sort --version-sort | tail -1",
        repository
    )
}

/// Check whether a remote repository is reachable.
pub fn validate_remote_repository(repository: &str) -> String {
    format!("git ls-remote --exit-code {} HEAD", repository)
}
