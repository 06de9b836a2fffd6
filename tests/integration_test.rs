// tests/integration_test.rs
use std::path::Path;
use std::process::Command;

use serial_test::serial;
use tagver::config::VersionConfig;
use tagver::facade::VersionFacade;
use tagver::probe::{GitCommandProbe, GitProbe};
use tempfile::TempDir;

#[test]
fn test_tagver_help() {
    let output = Command::new("cargo")
        .args(["run", "--bin", "tagver", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("tagver"));
    assert!(stdout.contains("Show the current project version"));
}

fn git_installed() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(dir: &Path, args: &[&str]) {
    let status = Command::new("git")
        .args([
            "-c",
            "user.name=Test User",
            "-c",
            "user.email=test@example.com",
        ])
        .args(args)
        .current_dir(dir)
        .status()
        .expect("Could not run git");
    assert!(status.success(), "git {:?} failed", args);
}

// Helper to set up a temporary git repo with one commit and one tag
fn setup_test_repo() -> TempDir {
    let temp_dir = TempDir::new().expect("Could not create temp dir");
    let dir = temp_dir.path();

    git(dir, &["init", "-b", "main"]);
    std::fs::write(dir.join("README.md"), "Initial content\n").unwrap();
    git(dir, &["add", "README.md"]);
    git(dir, &["commit", "-m", "Initial commit"]);
    git(dir, &["tag", "v1.2.3"]);

    temp_dir
}

#[test]
#[serial]
fn test_probe_against_real_repository() {
    if !git_installed() {
        eprintln!("git not installed, skipping");
        return;
    }

    let temp_dir = setup_test_repo();
    let probe = GitCommandProbe::new(temp_dir.path());

    assert!(probe.is_git_available());
    assert!(probe.is_git_repository());
    assert!(probe.has_git_tags());
    assert_eq!(probe.latest_local_tag(), "v1.2.3");
    assert_eq!(probe.current_branch(), "main");

    let hash = probe.local_head_hash();
    assert_eq!(hash.len(), 40);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));

    // no origin remote configured
    assert_eq!(probe.repository_url(), "");
    assert!(!probe.validate_remote_repository(""));
}

#[test]
#[serial]
fn test_probe_outside_repository() {
    if !git_installed() {
        eprintln!("git not installed, skipping");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let probe = GitCommandProbe::new(temp_dir.path());

    assert!(probe.is_git_available());
    assert!(!probe.is_git_repository());
    assert!(!probe.has_git_tags());
    assert_eq!(probe.latest_local_tag(), "");
}

#[test]
#[serial]
fn test_facade_against_real_repository() {
    if !git_installed() {
        eprintln!("git not installed, skipping");
        return;
    }

    let temp_dir = setup_test_repo();
    let mut facade = VersionFacade::new(temp_dir.path(), VersionConfig::default());

    assert_eq!(facade.current_version().unwrap(), "v1.2.3");

    let probe = GitCommandProbe::new(temp_dir.path());
    let short: String = probe.local_head_hash().chars().take(6).collect();
    assert_eq!(
        facade.show(Some("full")),
        format!("Version 1.2.3 (commit {})", short)
    );

    let report = facade.version_info();
    assert!(report.error.is_none());
    assert_eq!(report.version.unwrap().clean, "1.2.3");
    assert_eq!(report.branch.as_deref(), Some("main"));
    assert_eq!(report.is_git_repo, Some(true));
}

#[test]
#[serial]
fn test_facade_repository_without_tags() {
    if !git_installed() {
        eprintln!("git not installed, skipping");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path();
    git(dir, &["init", "-b", "main"]);
    std::fs::write(dir.join("README.md"), "x\n").unwrap();
    git(dir, &["add", "README.md"]);
    git(dir, &["commit", "-m", "Initial commit"]);

    let mut facade = VersionFacade::new(dir, VersionConfig::default());
    assert!(matches!(
        facade.current_version(),
        Err(tagver::VersionError::NoTagsFound)
    ));
    assert_eq!(facade.show(None), "No version available");
}
