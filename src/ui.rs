use crate::facade::VersionReport;

pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message); // Red color
}

/// Prints a version report as aligned key/value lines.
pub fn display_report(report: &VersionReport) {
    println!("\x1b[1mVersion report\x1b[0m");
    println!("  source:       {}", report.source);

    if let Some(version) = &report.version {
        println!("  version:      {}", version.full);
        println!("  clean:        {}", version.clean);
        if !version.major.is_empty() {
            println!(
                "  semver:       {}.{}.{}",
                version.major, version.minor, version.patch
            );
        }
        if !version.prerelease.is_empty() {
            println!("  prerelease:   {}", version.prerelease);
        }
        if !version.buildmetadata.is_empty() {
            println!("  build:        {}", version.buildmetadata);
        }
    }

    if let Some(commit) = &report.commit {
        if !commit.hash.is_empty() {
            println!("  commit:       {} ({})", commit.short, commit.hash);
        }
    }

    if let Some(branch) = &report.branch {
        println!("  branch:       {}", branch);
    }

    if let Some(url) = &report.repository_url {
        let shown = if url.is_empty() { "(none)" } else { url.as_str() };
        println!("  remote:       {}", shown);
    }

    if let Some(is_repo) = report.is_git_repo {
        println!("  git repo:     {}", is_repo);
    }

    if let Some(file) = &report.version_file {
        println!("  file:         {}", file);
    }

    if let Some(path) = &report.version_file_path {
        println!("  file path:    {}", path);
    }

    if let Some(exists) = report.version_file_exists {
        println!("  file exists:  {}", exists);
    }

    if let Some(error) = &report.error {
        println!("  error:        \x1b[31m{}\x1b[0m", error);
    }
}
