use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::context::{AppInfo, Links};
use crate::host::RuntimeInfo;
use crate::platform::Platform;

pub const DEFAULT_CONFIG_PATH: &str = "menu.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub app: AppInfo,
    pub runtime: RuntimeConfig,
    pub links: Links,
    pub platform: PlatformConfig,
    pub logging: LoggingConfig,
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub name: String,
    pub version: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            name: "Electron".to_string(),
            version: "1.6.11".to_string(),
        }
    }
}

impl From<RuntimeConfig> for RuntimeInfo {
    fn from(config: RuntimeConfig) -> Self {
        RuntimeInfo {
            name: config.name,
            version: config.version,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PlatformConfig {
    /// Use this platform's template instead of the detected one
    #[serde(rename = "override")]
    pub override_: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Append log lines here instead of stderr
    pub file: Option<PathBuf>,
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Directory the headless session treats as its HTTP cache
    pub dir: Option<PathBuf>,
}

impl Config {
    /// Platform flag: the override if set, else the running OS
    pub fn platform(&self) -> Result<Platform> {
        match &self.platform.override_ {
            Some(name) => Platform::from_str(name)
                .with_context(|| format!("Unknown platform override: {}", name)),
            None => Ok(Platform::detect()),
        }
    }

    pub fn log_level(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.logging.level)
            .with_context(|| format!("Unknown log level: {}", self.logging.level))
    }
}

/// Load and parse the config file
pub fn load_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path).context("Failed to read config file")?;
    let config: Config = toml::from_str(&contents).context("Failed to parse TOML config")?;
    Ok(config)
}

/// Like `load_config`, but a missing file yields the defaults
pub fn load_config_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        load_config(path).with_context(|| format!("Failed to load {}", path.display()))
    } else {
        log::info!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }
}
