use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const SERIES_ENV_VAR: &str = "WEBTOON_NAMER_SERIES";

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub series_title: Option<String>,
    pub extension: Option<String>,
}

impl Config {
    /// Loads the config from an explicit path, which must exist, or from the
    /// default location, which may be missing.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            return Self::from_file(path);
        }

        let path = get_config_path();
        if path.exists() {
            Self::from_file(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Picks the series title from the command line, then the environment, then
/// the config file.
pub fn resolve_series_title(
    from_cli: Option<String>,
    from_env: Option<String>,
    config: &Config,
) -> Result<String> {
    [from_cli, from_env, config.series_title.clone()]
        .into_iter()
        .flatten()
        .find(|title| !title.trim().is_empty())
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Series title not found. Pass --series, set {SERIES_ENV_VAR}, or add series_title = \"...\" to {}",
                get_config_path().display()
            )
        })
}

pub fn series_title_from_env() -> Option<String> {
    env::var(SERIES_ENV_VAR).ok()
}

fn get_config_dir_path() -> PathBuf {
    xdir::config()
        .map(|path| path.join("webtoon-namer"))
        // If the standard path could not be found (e.g.`$HOME` is not set),
        // default to the current directory.
        .unwrap_or_default()
}

fn get_config_path() -> PathBuf {
    get_config_dir_path().join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.toml");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(
            &temp_dir,
            "series_title = \"Tower of God\"\nextension = \"cbz\"\n",
        );

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(
            config,
            Config {
                series_title: Some("Tower of God".to_string()),
                extension: Some("cbz".to_string()),
            }
        );
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "extension = \"zip\"\n");

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.series_title, None);
        assert_eq!(config.extension.as_deref(), Some("zip"));
    }

    #[test]
    fn test_load_missing_explicit_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.toml");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_malformed_config_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_config(&temp_dir, "series_title = [unterminated");

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_resolve_series_title_precedence() {
        let config = Config {
            series_title: Some("From Config".to_string()),
            extension: None,
        };

        assert_eq!(
            resolve_series_title(
                Some("From Cli".to_string()),
                Some("From Env".to_string()),
                &config
            )
            .unwrap(),
            "From Cli"
        );
        assert_eq!(
            resolve_series_title(None, Some("From Env".to_string()), &config).unwrap(),
            "From Env"
        );
        assert_eq!(
            resolve_series_title(None, None, &config).unwrap(),
            "From Config"
        );
        // Blank values are skipped
        assert_eq!(
            resolve_series_title(Some("  ".to_string()), None, &config).unwrap(),
            "From Config"
        );
    }

    #[test]
    fn test_resolve_series_title_missing() {
        let err = resolve_series_title(None, None, &Config::default()).unwrap_err();
        assert!(err.to_string().contains("Series title not found"));
    }
}
