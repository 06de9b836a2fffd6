//! Repository probe abstraction
//!
//! This module provides a trait-based abstraction over the synchronous,
//! non-throwing queries tagver issues against the `git` binary. The
//! concrete implementations are:
//!
//! - [cli::GitCommandProbe]: shells out to `git` in a base directory
//! - [mock::MockProbe]: a scripted implementation for testing
//!
//! The probe layer is total: every command execution failure, non-zero
//! exit or recognized error substring collapses into an empty string or
//! `false` plus a log line. Converting emptiness into typed failures is
//! the resolver's job, not the probe's.

pub mod cli;
pub mod commands;
pub mod mock;

pub use cli::GitCommandProbe;
pub use mock::MockProbe;

use serde::Serialize;

/// Commit identification as reported by the probe.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CommitInfo {
    /// The full commit hash, or empty when unknown
    pub hash: String,
    /// First 6 characters of the hash; empty hash gives an empty short
    pub short: String,
}

impl CommitInfo {
    pub fn new(hash: String) -> Self {
        let short = hash.chars().take(6).collect();
        CommitInfo { hash, short }
    }
}

/// Synchronous, non-throwing queries against the version-control tool.
///
/// All implementors must be `Send + Sync`. Methods never fail: a probe
/// that cannot answer returns `false` or an empty string.
pub trait GitProbe: Send + Sync {
    /// True iff the `git` binary runs and identifies itself.
    fn is_git_available(&self) -> bool;

    /// True iff the base directory is inside a git repository.
    fn is_git_repository(&self) -> bool;

    /// True iff the repository has at least one tag. False when the base
    /// directory is not a repository at all.
    fn has_git_tags(&self) -> bool;

    /// The `origin` remote URL, or empty when none is configured.
    fn repository_url(&self) -> String;

    /// True iff `url` is non-empty and the remote answers a reachability
    /// probe.
    fn validate_remote_repository(&self, url: &str) -> bool;

    /// Hash of the local HEAD commit.
    fn local_head_hash(&self) -> String;

    /// Hash of the latest commit on the remote at `url`.
    fn remote_head_hash(&self, url: &str) -> String;

    /// Nearest tag reachable from the local HEAD.
    fn latest_local_tag(&self) -> String;

    /// Highest tag on the remote at `url` by version sort.
    fn latest_remote_tag(&self, url: &str) -> String;

    /// Name of the currently checked-out branch.
    fn current_branch(&self) -> String;
}
