use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Where the version string is retrieved from.
///
/// Selected once at configuration time and immutable for a run.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum VersionSource {
    GitLocal,
    GitRemote,
    File,
}

impl VersionSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            VersionSource::GitLocal => "git-local",
            VersionSource::GitRemote => "git-remote",
            VersionSource::File => "file",
        }
    }
}

impl fmt::Display for VersionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VersionSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "git-local" => Ok(VersionSource::GitLocal),
            "git-remote" => Ok(VersionSource::GitRemote),
            "file" => Ok(VersionSource::File),
            other => Err(format!(
                "unknown version source '{}' (expected git-local, git-remote or file)",
                other
            )),
        }
    }
}

/// Represents the complete configuration for tagver.
///
/// Controls the version source, the reported branch for file sources,
/// the version file name and the default display format.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default = "default_source")]
    pub source: VersionSource,

    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_version_file")]
    pub version_file: String,

    #[serde(default = "default_format")]
    pub format: String,

    /// Display format for timestamp placeholders. Recognized for
    /// compatibility; the core resolution logic does not consume it.
    #[serde(default = "default_datetime_format")]
    pub datetime_format: String,
}

fn default_source() -> VersionSource {
    VersionSource::GitLocal
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_version_file() -> String {
    "VERSION".to_string()
}

fn default_format() -> String {
    "full".to_string()
}

fn default_datetime_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            source: default_source(),
            branch: default_branch(),
            version_file: default_version_file(),
            format: default_format(),
            datetime_format: default_datetime_format(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagver.toml` in current directory
/// 3. `~/.config/.tagver.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(VersionConfig)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<VersionConfig, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./tagver.toml").exists() {
        fs::read_to_string("./tagver.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".tagver.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(VersionConfig::default());
        }
    } else {
        return Ok(VersionConfig::default());
    };

    let config: VersionConfig = toml::from_str(&config_str)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VersionConfig::default();
        assert_eq!(config.source, VersionSource::GitLocal);
        assert_eq!(config.branch, "main");
        assert_eq!(config.version_file, "VERSION");
        assert_eq!(config.format, "full");
    }

    #[test]
    fn test_source_round_trip() {
        for source in [
            VersionSource::GitLocal,
            VersionSource::GitRemote,
            VersionSource::File,
        ] {
            let parsed: VersionSource = source.as_str().parse().unwrap();
            assert_eq!(parsed, source);
        }
    }

    #[test]
    fn test_source_from_str_rejects_unknown() {
        let result = VersionSource::from_str("subversion");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("subversion"));
    }

    #[test]
    fn test_parse_partial_toml_uses_defaults() {
        let config: VersionConfig = toml::from_str("source = \"file\"").unwrap();
        assert_eq!(config.source, VersionSource::File);
        assert_eq!(config.version_file, "VERSION");
        assert_eq!(config.format, "full");
    }

    #[test]
    fn test_parse_kebab_case_sources() {
        let config: VersionConfig = toml::from_str("source = \"git-remote\"").unwrap();
        assert_eq!(config.source, VersionSource::GitRemote);
    }
}
