use crate::core::calculator::PIXELS_PER_MINUTE;
use crate::errors::{AppError, AppResult};
use crate::ingest::InputFormat;
use crate::utils::path::app_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_pixels_per_minute")]
    pub pixels_per_minute: f64,
    #[serde(default = "default_min_block_minutes")]
    pub min_block_minutes: f64,
    /// Schedule file used when `--input` is not given.
    #[serde(default)]
    pub default_input: Option<String>,
    #[serde(default)]
    pub input_format: InputFormat,
    /// Speaker wall export, session API format only.
    #[serde(default)]
    pub speakers_file: Option<String>,
    /// Fixed layout offset such as `+02:00`; system local time when absent.
    #[serde(default)]
    pub utc_offset: Option<String>,
    #[serde(default = "default_true")]
    pub locale_day_labels: bool,
}

fn default_pixels_per_minute() -> f64 {
    PIXELS_PER_MINUTE
}
fn default_min_block_minutes() -> f64 {
    5.0
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pixels_per_minute: default_pixels_per_minute(),
            min_block_minutes: default_min_block_minutes(),
            default_input: None,
            input_format: InputFormat::default(),
            speakers_file: None,
            utc_offset: None,
            locale_day_labels: default_true(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory
    pub fn config_dir() -> PathBuf {
        app_dir()
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("devfest-schedule.conf")
    }

    /// Load the config at `path` (or the standard location). A missing file
    /// yields defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::config_file);

        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.check()?;
        debug!(path = %path.display(), "config loaded");
        Ok(cfg)
    }

    pub fn check(&self) -> AppResult<()> {
        if !(self.pixels_per_minute.is_finite() && self.pixels_per_minute > 0.0) {
            return Err(AppError::Config(format!(
                "pixels_per_minute must be a positive number, got {}",
                self.pixels_per_minute
            )));
        }
        if !(self.min_block_minutes.is_finite() && self.min_block_minutes >= 0.0) {
            return Err(AppError::Config(format!(
                "min_block_minutes must be zero or positive, got {}",
                self.min_block_minutes
            )));
        }
        Ok(())
    }

    /// Write the default configuration to `path`. Existing files are kept
    /// unless `force` is set.
    pub fn init_file(path: &Path, force: bool) -> AppResult<PathBuf> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(path, yaml)?;
        Ok(path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_conf(name: &str) -> PathBuf {
        let p = env::temp_dir().join(format!("{name}_devfest-schedule.conf"));
        fs::remove_file(&p).ok();
        p
    }

    #[test]
    fn missing_file_gives_defaults() {
        let p = temp_conf("cfg_missing");
        assert_eq!(Config::load(Some(p.as_path())).unwrap(), Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let p = temp_conf("cfg_partial");
        fs::write(&p, "pixels_per_minute: 2.0\nutc_offset: \"+02:00\"\ninput_format: sessionize\n").unwrap();

        let cfg = Config::load(Some(p.as_path())).unwrap();
        assert_eq!(cfg.pixels_per_minute, 2.0);
        assert_eq!(cfg.min_block_minutes, 5.0);
        assert_eq!(cfg.utc_offset.as_deref(), Some("+02:00"));
        assert_eq!(cfg.input_format, InputFormat::Sessionize);
        assert!(cfg.locale_day_labels);
    }

    #[test]
    fn bad_values_are_rejected() {
        let p = temp_conf("cfg_bad");
        fs::write(&p, "pixels_per_minute: 0\n").unwrap();
        assert!(matches!(Config::load(Some(p.as_path())), Err(AppError::Config(_))));

        fs::write(&p, "pixels_per_minute: [1, 2]\n").unwrap();
        assert!(matches!(Config::load(Some(p.as_path())), Err(AppError::ConfigParse(_))));
    }

    #[test]
    fn init_writes_defaults_once() {
        let p = temp_conf("cfg_init");
        Config::init_file(&p, false).unwrap();
        assert_eq!(Config::load(Some(p.as_path())).unwrap(), Config::default());
        assert!(Config::init_file(&p, false).is_err());
        assert!(Config::init_file(&p, true).is_ok());
    }
}
