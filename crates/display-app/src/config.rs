use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

const DEFAULT_SNAPSHOT_PATH: &str = "meters.json";

#[derive(Clone, Debug, PartialEq)]
pub struct DisplayConfig {
    pub snapshot_path: String,
    /// Reload period; unset means the snapshot is read once.
    pub refresh_interval_ms: Option<u64>,
    pub reject_out_of_order: bool,
    /// Newest history records shown in a meter detail.
    pub history_limit: Option<usize>,
}

impl DisplayConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    pub fn load_with_path(config_path: Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(file_config) = load_file_config(config_path.as_deref())? {
            apply_file_config(&mut config, file_config);
        }

        apply_env_overrides(&mut config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.snapshot_path.trim().is_empty() {
            anyhow::bail!("snapshot.path must be non-empty");
        }
        if let Some(interval_ms) = self.refresh_interval_ms {
            if interval_ms == 0 {
                anyhow::bail!("snapshot.refresh_interval_ms must be >= 1 when set");
            }
        }
        if let Some(limit) = self.history_limit {
            if limit == 0 {
                anyhow::bail!("view.history_limit must be >= 1 when set");
            }
        }

        Ok(())
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh_interval_ms.map(Duration::from_millis)
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            snapshot_path: DEFAULT_SNAPSHOT_PATH.to_string(),
            refresh_interval_ms: None,
            reject_out_of_order: true,
            history_limit: None,
        }
    }
}

fn apply_env_overrides(config: &mut DisplayConfig) {
    if let Ok(value) = env::var("METER_DISPLAY_SNAPSHOT") {
        config.snapshot_path = value;
    }

    config.refresh_interval_ms =
        parse_env_u64("METER_DISPLAY_REFRESH_MS").or(config.refresh_interval_ms);
    config.reject_out_of_order =
        parse_env_bool("METER_DISPLAY_REJECT_OUT_OF_ORDER").unwrap_or(config.reject_out_of_order);
    config.history_limit =
        parse_env_usize("METER_DISPLAY_HISTORY_LIMIT").or(config.history_limit);
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    snapshot: Option<FileSnapshotConfig>,
    registry: Option<FileRegistryConfig>,
    view: Option<FileViewConfig>,
}

#[derive(Debug, Deserialize)]
struct FileSnapshotConfig {
    path: Option<String>,
    refresh_interval_ms: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FileRegistryConfig {
    reject_out_of_order: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct FileViewConfig {
    history_limit: Option<usize>,
}

fn load_file_config(config_path: Option<&str>) -> Result<Option<FileConfig>> {
    let path = match config_path {
        Some(path) => path.to_string(),
        None => match env::var("METER_DISPLAY_CONFIG") {
            Ok(value) => value,
            Err(_) => return Ok(None),
        },
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("read config file {path}"))?;
    let ext = Path::new(&path).extension().and_then(|value| value.to_str());

    let config = match ext {
        Some("json") => serde_json::from_str(&content).context("parse json config")?,
        _ => toml::from_str(&content).context("parse toml config")?,
    };

    Ok(Some(config))
}

fn apply_file_config(config: &mut DisplayConfig, file: FileConfig) {
    if let Some(snapshot) = file.snapshot {
        if let Some(path) = snapshot.path {
            config.snapshot_path = path;
        }
        if let Some(interval_ms) = snapshot.refresh_interval_ms {
            config.refresh_interval_ms = Some(interval_ms);
        }
    }

    if let Some(registry) = file.registry {
        if let Some(reject) = registry.reject_out_of_order {
            config.reject_out_of_order = reject;
        }
    }

    if let Some(view) = file.view {
        if let Some(limit) = view.history_limit {
            config.history_limit = Some(limit);
        }
    }
}

fn parse_env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}

fn parse_env_usize(key: &str) -> Option<usize> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}

fn parse_env_bool(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}
