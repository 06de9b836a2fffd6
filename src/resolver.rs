use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{VersionConfig, VersionSource};
use crate::error::{Result, VersionError};
use crate::probe::{CommitInfo, GitProbe};
use crate::semver;

/// Longest version-file content accepted, after trimming.
const MAX_VERSION_FILE_LEN: usize = 100;

/// Selects and executes one of the three version-retrieval strategies.
///
/// Borrows the probe and configuration; holds no state between calls.
/// This is the layer that turns empty probe answers into typed failures.
pub struct VersionResolver<'a> {
    config: &'a VersionConfig,
    probe: &'a dyn GitProbe,
    base_path: &'a Path,
}

impl<'a> VersionResolver<'a> {
    pub fn new(config: &'a VersionConfig, probe: &'a dyn GitProbe, base_path: &'a Path) -> Self {
        VersionResolver {
            config,
            probe,
            base_path,
        }
    }

    /// Retrieves the raw version string for the configured source.
    ///
    /// Git preconditions (binary installed, repository present, tags
    /// exist) are the facade's responsibility; this method assumes they
    /// already held.
    pub fn resolve(&self) -> Result<String> {
        match self.config.source {
            VersionSource::GitLocal => Ok(self.probe.latest_local_tag()),
            VersionSource::GitRemote => self.resolve_remote(),
            VersionSource::File => self.resolve_file(),
        }
    }

    fn resolve_remote(&self) -> Result<String> {
        let url = self.probe.repository_url();
        if !self.probe.validate_remote_repository(&url) {
            return Err(VersionError::RemoteRepositoryUnavailable(url));
        }

        Ok(self.probe.latest_remote_tag(&url))
    }

    /// Resolves the version from the configured VERSION file.
    fn resolve_file(&self) -> Result<String> {
        let path = self.version_file_path();

        if !path.exists() {
            return Err(VersionError::VersionFileNotFound(path));
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(_) => return Err(VersionError::InvalidVersionFile(path)),
        };

        if !is_valid_version_file(&content) {
            return Err(VersionError::InvalidVersionFile(path));
        }

        let version = parse_version_content(&content);
        if version.is_empty() {
            return Err(VersionError::EmptyVersionFile(path));
        }

        Ok(version)
    }

    /// Absolute path of the configured version file.
    pub fn version_file_path(&self) -> PathBuf {
        self.base_path.join(&self.config.version_file)
    }

    /// Commit hash for the configured source: empty for file versions,
    /// local HEAD for git-local, the latest remote commit for git-remote.
    pub fn commit_hash(&self) -> String {
        match self.config.source {
            VersionSource::File => String::new(),
            VersionSource::GitLocal => self.probe.local_head_hash(),
            VersionSource::GitRemote => {
                let url = self.probe.repository_url();
                self.probe.remote_head_hash(&url)
            }
        }
    }

    pub fn commit_info(&self) -> CommitInfo {
        CommitInfo::new(self.commit_hash())
    }

    /// Branch to report: the configured branch for file versions, the
    /// actual checked-out branch otherwise.
    pub fn current_branch(&self) -> String {
        match self.config.source {
            VersionSource::File => self.config.branch.clone(),
            _ => self.probe.current_branch(),
        }
    }

    /// Strict validation of a specific tag against the semantic version
    /// grammar. Not part of the default resolution path.
    pub fn validate_tag(&self, tag: &str) -> Result<()> {
        if semver::is_valid(tag) {
            Ok(())
        } else {
            Err(VersionError::InvalidTagFormat(tag.to_string()))
        }
    }
}

/// Basic validity check for version-file content: non-empty after
/// trimming, bounded length, and only version-safe characters over the
/// whole (untrimmed) content.
pub fn is_valid_version_file(content: &str) -> bool {
    let trimmed = content.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_VERSION_FILE_LEN {
        return false;
    }

    content
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || ".-+_".contains(c))
}

/// Cleans version-file content for use: takes the first non-empty line
/// and collapses internal whitespace runs to a single space.
pub fn parse_version_content(content: &str) -> String {
    for line in content.lines() {
        if !line.trim().is_empty() {
            return line.split_whitespace().collect::<Vec<_>>().join(" ");
        }
    }

    String::new()
}
