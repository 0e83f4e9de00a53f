//! Configuration file handling

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Get the configuration directory for autocorrect
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine configuration directory")?;
    Ok(base.join("autocorrect"))
}

/// Get the default config file path
pub fn default_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Validate that a config file path has .json extension
pub fn validate_config_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|s| s.to_str()) {
        Some("json") => Ok(()),
        Some(ext) => Err(anyhow::anyhow!(
            "Config file must have .json extension, got .{}. Please use a .json file.",
            ext
        )),
        None => Err(anyhow::anyhow!(
            "Config file must have .json extension. Please add .json to the filename."
        )),
    }
}

/// User configuration stored in the config file.
///
/// Every field is optional in the file; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Lowercase dictionary words and queries before lookup
    pub case_fold: Option<bool>,
    /// Skip empty query lines in the line protocol
    pub skip_blank_lines: Option<bool>,
}

impl CliConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and defaults are used if nothing is there.
    pub fn load_from(custom_path: Option<&Path>) -> Result<Self> {
        let path = match custom_path {
            Some(path) => {
                validate_config_path(path)?;
                path.to_path_buf()
            }
            None => match default_config_path() {
                Ok(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Save configuration to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        validate_config_path(path)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Merge with command-line options (CLI options take precedence)
    pub fn merge_with_cli(&self, case_fold: Option<bool>, skip_blank_lines: Option<bool>) -> Self {
        Self {
            case_fold: case_fold.or(self.case_fold),
            skip_blank_lines: skip_blank_lines.or(self.skip_blank_lines),
        }
    }

    /// Whether to lowercase input
    pub fn case_fold(&self) -> bool {
        self.case_fold.unwrap_or(true)
    }

    /// Whether to skip empty query lines
    pub fn skip_blank_lines(&self) -> bool {
        self.skip_blank_lines.unwrap_or(true)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            case_fold: Some(true),
            skip_blank_lines: Some(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_merge_prefers_cli() {
        let config = CliConfig {
            case_fold: Some(true),
            skip_blank_lines: None,
        };
        let merged = config.merge_with_cli(Some(false), None);
        assert!(!merged.case_fold());
        assert!(merged.skip_blank_lines());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{ "case_fold": false }"#).unwrap();

        let config = CliConfig::load_from(Some(&path)).unwrap();
        assert!(!config.case_fold());
        assert!(config.skip_blank_lines());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");
        let config = CliConfig {
            case_fold: Some(false),
            skip_blank_lines: Some(false),
        };

        config.save_to(&path).unwrap();
        assert_eq!(CliConfig::load_from(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_rejects_non_json_path() {
        assert!(validate_config_path(Path::new("config.toml")).is_err());
        assert!(validate_config_path(Path::new("config")).is_err());
        assert!(validate_config_path(Path::new("config.json")).is_ok());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        assert!(CliConfig::load_from(Some(&path)).is_err());
    }
}
