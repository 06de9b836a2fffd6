use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{VersionConfig, VersionSource};
use crate::error::{Result, VersionError};
use crate::format;
use crate::probe::{CommitInfo, GitCommandProbe, GitProbe};
use crate::resolver::VersionResolver;
use crate::semver::{self, ParsedVersion};

/// How long a resolved version stays valid before the source is asked
/// again.
pub const CACHE_TTL: Duration = Duration::from_secs(300);

/// Fallback string returned by [VersionFacade::show] when resolution
/// fails.
pub const NO_VERSION: &str = "No version available";

/// A resolved version with its expiry. Held per facade instance, never
/// persisted across processes.
#[derive(Debug, Clone)]
struct CachedVersion {
    value: String,
    expires_at: Instant,
}

impl CachedVersion {
    fn new(value: String) -> Self {
        CachedVersion {
            value,
            expires_at: Instant::now() + CACHE_TTL,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Aggregate version information built fresh on every call.
///
/// On success `version`, `commit` and `branch` are filled; on failure
/// `error` carries the message instead. The source-specific diagnostic
/// fields are filled on both paths.
#[derive(Debug, Clone, Serialize)]
pub struct VersionReport {
    pub source: VersionSource,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<ParsedVersion>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<CommitInfo>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    // git sources
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_git_repo: Option<bool>,

    // file source
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_file: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_file_path: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_file_exists: Option<bool>,
}

/// Public entry point for version queries.
///
/// Owns the probe, the configuration and a short-lived cache of the last
/// resolved version. [VersionFacade::current_version] is the one method
/// whose failures are observable; `show` and `version_info` absorb them
/// into a fallback string or report field.
pub struct VersionFacade {
    config: VersionConfig,
    base_path: PathBuf,
    probe: Box<dyn GitProbe>,
    cache: Option<CachedVersion>,
}

impl VersionFacade {
    /// Creates a facade shelling out to `git` in `base_path`.
    pub fn new(base_path: impl Into<PathBuf>, config: VersionConfig) -> Self {
        let base_path = base_path.into();
        let probe = Box::new(GitCommandProbe::new(base_path.clone()));
        VersionFacade {
            config,
            base_path,
            probe,
            cache: None,
        }
    }

    /// Creates a facade with an injected probe. Used by tests to script
    /// git behavior without a repository.
    pub fn with_probe(
        base_path: impl Into<PathBuf>,
        config: VersionConfig,
        probe: Box<dyn GitProbe>,
    ) -> Self {
        VersionFacade {
            config,
            base_path: base_path.into(),
            probe,
            cache: None,
        }
    }

    pub fn config(&self) -> &VersionConfig {
        &self.config
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn resolver(&self) -> VersionResolver<'_> {
        VersionResolver::new(&self.config, self.probe.as_ref(), &self.base_path)
    }

    /// Returns the current raw version string.
    ///
    /// Serves from cache while unexpired; otherwise checks the git
    /// preconditions (skipped entirely for file sources), resolves, and
    /// caches the result for [CACHE_TTL].
    ///
    /// This is the one entry point that surfaces typed failures to
    /// callers willing to branch on them.
    pub fn current_version(&mut self) -> Result<String> {
        if let Some(cached) = &self.cache {
            if !cached.is_expired() {
                debug!(version = %cached.value, "serving version from cache");
                return Ok(cached.value.clone());
            }
        }

        // File sources have no git preconditions. Both git sources need a
        // local binary, repository and tags, even git-remote: ls-remote
        // still runs through the local git installation.
        if self.config.source != VersionSource::File {
            if !self.probe.is_git_available() {
                return Err(VersionError::GitNotInstalled);
            }

            if !self.probe.is_git_repository() {
                return Err(VersionError::NotGitRepository);
            }

            if !self.probe.has_git_tags() {
                return Err(VersionError::NoTagsFound);
            }
        }

        let version = self.resolver().resolve()?;
        if version.is_empty() {
            return Err(VersionError::NoTagsFound);
        }

        self.cache = Some(CachedVersion::new(version.clone()));
        Ok(version)
    }

    /// Formats the current version for display. Never fails: resolution
    /// errors are logged and rendered as [NO_VERSION].
    ///
    /// Format resolution order: explicit argument, then the configured
    /// default, then `"full"`.
    pub fn show(&mut self, format: Option<&str>) -> String {
        let kind = format
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| {
                if self.config.format.is_empty() {
                    "full".to_string()
                } else {
                    self.config.format.clone()
                }
            });

        match self.current_version() {
            Ok(raw) => {
                let parts = semver::parse(&raw);
                let resolver = self.resolver();
                let commit = resolver.commit_info();
                let branch = resolver.current_branch();
                format::format_version(&kind, &parts, &commit, &branch, self.config.source)
            }
            Err(e) => {
                warn!(error = %e, "version resolution failed");
                NO_VERSION.to_string()
            }
        }
    }

    /// Builds the full version report for the configured source.
    ///
    /// The same resolution as [VersionFacade::current_version], but
    /// failures land in the `error` field instead of propagating. The
    /// report itself is never cached.
    pub fn version_info(&mut self) -> VersionReport {
        let resolution = self.current_version();

        let mut report = VersionReport {
            source: self.config.source,
            version: None,
            commit: None,
            branch: None,
            error: None,
            repository_url: None,
            is_git_repo: None,
            version_file: None,
            version_file_path: None,
            version_file_exists: None,
        };

        // Diagnostics are filled regardless of how resolution went.
        match self.config.source {
            VersionSource::File => {
                let path = self.resolver().version_file_path();
                report.version_file = Some(self.config.version_file.clone());
                report.version_file_exists = Some(path.exists());
                report.version_file_path = Some(path.display().to_string());
            }
            _ => {
                report.repository_url = Some(self.probe.repository_url());
                report.is_git_repo = Some(self.probe.is_git_repository());
            }
        }

        match resolution {
            Ok(raw) => {
                let resolver = self.resolver();
                report.commit = Some(resolver.commit_info());
                report.branch = Some(resolver.current_branch());
                report.version = Some(semver::parse(&raw));
            }
            Err(e) => {
                warn!(error = %e, "version resolution failed");
                report.error = Some(e.to_string());
            }
        }

        report
    }
}
