//! Application configuration (JSON file + command line)

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::model::{DEFAULT_PROGRESS_PERCENT, DEFAULT_VOLUME_PERCENT};

const CONFIG_DIR_NAME: &str = "music-hub";
const CONFIG_FILE_NAME: &str = "config.json";

/// Music Hub - search and play tracks from three streaming services (mock catalog)
#[derive(Parser, Debug, Default)]
#[command(name = "music-hub", version, about)]
pub struct Args {
    /// Path to a JSON config file (defaults to <config dir>/music-hub/config.json)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Directory for log files, overrides the config file
    #[arg(long)]
    pub log_dir: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_dir: PathBuf,
    /// `EnvFilter` directives; `RUST_LOG` wins when set
    pub log_filter: String,
    pub tick_rate_ms: u64,
    pub initial_volume: u8,
    pub initial_progress: u8,
    pub volume_step: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(".logs"),
            log_filter: "music_hub=debug,warn".to_string(),
            tick_rate_ms: 50,
            initial_volume: DEFAULT_VOLUME_PERCENT,
            initial_progress: DEFAULT_PROGRESS_PERCENT,
            volume_step: 5,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads the config named on the command line, or the default one if it exists.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(args: &Args) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };

        if let Some(log_dir) = &args.log_dir {
            config.log_dir = log_dir.clone();
        }

        Ok(config.sanitized())
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        Ok(config.sanitized())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn sanitized(mut self) -> Self {
        self.initial_volume = self.initial_volume.min(100);
        self.initial_progress = self.initial_progress.min(100);
        self.volume_step = self.volume_step.clamp(1, 100);
        self.tick_rate_ms = self.tick_rate_ms.max(10);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config = AppConfig::from_json(r#"{ "initial_volume": 40 }"#).unwrap();
        assert_eq!(config.initial_volume, 40);
        assert_eq!(config.initial_progress, DEFAULT_PROGRESS_PERCENT);
        assert_eq!(config.log_dir, PathBuf::from(".logs"));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = AppConfig::from_json(
            r#"{ "initial_volume": 180, "initial_progress": 255, "volume_step": 0, "tick_rate_ms": 1 }"#,
        )
        .unwrap();
        assert_eq!(config.initial_volume, 100);
        assert_eq!(config.initial_progress, 100);
        assert_eq!(config.volume_step, 1);
        assert_eq!(config.tick_rate_ms, 10);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(AppConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let args = Args {
            config: Some(PathBuf::from("/definitely/not/here/config.json")),
            ..Args::default()
        };
        assert!(AppConfig::load(&args).is_err());
    }

    #[test]
    fn log_dir_flag_overrides_file() {
        let dir = std::env::temp_dir().join(format!("music-hub-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, r#"{ "log_dir": "from-file", "volume_step": 10 }"#).unwrap();

        let args = Args {
            config: Some(path),
            log_dir: Some(PathBuf::from("from-flag")),
            print_config: false,
        };
        let config = AppConfig::load(&args).unwrap();
        assert_eq!(config.log_dir, PathBuf::from("from-flag"));
        assert_eq!(config.volume_step, 10);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn json_round_trip_keeps_values() {
        let config = AppConfig {
            volume_step: 7,
            ..AppConfig::default()
        };
        let parsed = AppConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
