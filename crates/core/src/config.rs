use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpangateError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExporterConfig {
    /// Source identifier stamped on every exported span.
    pub source: String,
    /// Static application-level tags appended after span attributes, in
    /// configuration order.
    pub app_tags: Vec<(String, String)>,
    /// Concurrency ceiling for in-flight sends.
    pub max_in_flight: usize,
}

impl Default for ExporterConfig {
    fn default() -> Self {
        Self {
            source: env::var("HOSTNAME").unwrap_or_else(|_| "unknown".to_string()),
            app_tags: Vec::new(),
            max_in_flight: 128,
        }
    }
}

impl ExporterConfig {
    pub fn load() -> Result<Self> {
        let mut cfg = Self::default();
        let config_path = config_file_path();
        if let Some(file_overrides) = load_file_overrides(&config_path)? {
            apply_overrides(&mut cfg, file_overrides, "config file")?;
        }
        let env_overrides = load_env_overrides()?;
        apply_overrides(&mut cfg, env_overrides, "environment")?;
        cfg.validate()
    }

    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();
        let env_overrides = load_env_overrides()?;
        apply_overrides(&mut cfg, env_overrides, "environment")?;
        cfg.validate()
    }

    fn validate(self) -> Result<Self> {
        if self.max_in_flight == 0 {
            return Err(SpangateError::Config(
                "max_in_flight must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigOverrides {
    source: Option<String>,
    app_tags: Option<String>,
    max_in_flight: Option<usize>,
}

fn config_file_path() -> PathBuf {
    if let Ok(path) = env::var("SPANGATE_CONFIG") {
        return PathBuf::from(path);
    }

    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let config_home = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(home).join(".config"));
    config_home.join("spangate/config.toml")
}

fn load_file_overrides(path: &PathBuf) -> Result<Option<ConfigOverrides>> {
    if !path.exists() {
        return Ok(None);
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| SpangateError::Config(format!("failed reading {}: {e}", path.display())))?;
    let parsed: ConfigOverrides = toml::from_str(&raw)
        .map_err(|e| SpangateError::Config(format!("failed parsing {}: {e}", path.display())))?;
    Ok(Some(parsed))
}

fn load_env_overrides() -> Result<ConfigOverrides> {
    let max_in_flight = match env::var("SPANGATE_MAX_IN_FLIGHT") {
        Ok(v) => Some(v.parse::<usize>().map_err(|e| {
            SpangateError::Config(format!("bad SPANGATE_MAX_IN_FLIGHT in environment: {e}"))
        })?),
        Err(_) => None,
    };

    Ok(ConfigOverrides {
        source: env::var("SPANGATE_SOURCE").ok(),
        app_tags: env::var("SPANGATE_APP_TAGS").ok(),
        max_in_flight,
    })
}

fn apply_overrides(cfg: &mut ExporterConfig, overrides: ConfigOverrides, source: &str) -> Result<()> {
    if let Some(v) = overrides.source {
        cfg.source = v;
    }
    if let Some(v) = overrides.app_tags {
        cfg.app_tags = parse_app_tags(&v).map_err(|e| {
            SpangateError::Config(format!("bad app_tags in {source}: {e} (value={v})"))
        })?;
    }
    if let Some(v) = overrides.max_in_flight {
        cfg.max_in_flight = v;
    }
    Ok(())
}

fn parse_app_tags(raw: &str) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for entry in raw.split(',') {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some((key, value)) = trimmed.split_once('=') else {
            return Err(SpangateError::Config(
                "tag entries must use key=value syntax".to_string(),
            ));
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(SpangateError::Config("tag key cannot be empty".to_string()));
        }
        out.push((key.to_string(), value.trim().to_string()));
    }
    Ok(out)
}
