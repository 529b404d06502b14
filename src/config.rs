use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub cache: CacheConfig,
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service: ServiceConfig::default(),
            cache: CacheConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServiceConfig {
    /// Short service name matched against offer index keys (e.g. `ec2`).
    pub name: String,
    /// URL of the global offer index document.
    pub index_url: String,
    /// Region whose current catalog is fetched.
    pub region: String,
    /// Transport-level timeout applied to every request.
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "ec2".to_string(),
            index_url: "https://pricing.us-east-1.amazonaws.com/offers/v1.0/aws/index.json"
                .to_string(),
            region: "us-east-1".to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory holding raw downloaded index/catalog documents.
    pub scratch_dir: PathBuf,
    /// Path of the persisted size-type artifact.
    pub artifact_path: PathBuf,
    /// Maximum artifact age, in whole days, before a refresh is forced.
    pub max_age_days: i64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            scratch_dir: PathBuf::from("/tmp"),
            artifact_path: PathBuf::from("./sizes.txt"),
            max_age_days: default_max_age_days(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub columns: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
fn default_max_age_days() -> i64 {
    10
}
fn default_columns() -> usize {
    4
}

/// Load configuration from a TOML file.
///
/// A missing file is not an error: the tool runs with built-in defaults so a
/// bare `offersync refresh` works without any setup. A file that exists but
/// does not parse or validate is fatal.
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.service.name.trim().is_empty() {
        anyhow::bail!("service.name must not be empty");
    }

    if config.service.index_url.trim().is_empty() {
        anyhow::bail!("service.index_url must not be empty");
    }

    if config.cache.max_age_days < 0 {
        anyhow::bail!("cache.max_age_days must be >= 0");
    }

    if config.display.columns < 1 {
        anyhow::bail!("display.columns must be >= 1");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("nope.toml")).unwrap();
        assert_eq!(config.service.name, "ec2");
        assert_eq!(config.cache.max_age_days, 10);
        assert_eq!(config.display.columns, 4);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("offersync.toml");
        fs::write(
            &path,
            r#"
[cache]
max_age_days = 3
"#,
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.cache.max_age_days, 3);
        assert_eq!(config.service.region, "us-east-1");
    }

    #[test]
    fn test_zero_columns_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("offersync.toml");
        fs::write(&path, "[display]\ncolumns = 0\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_negative_max_age_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("offersync.toml");
        fs::write(&path, "[cache]\nmax_age_days = -1\n").unwrap();
        assert!(load_config(&path).is_err());
    }
}
