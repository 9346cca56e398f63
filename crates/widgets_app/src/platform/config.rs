//! Optional RON configuration read from the working directory.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use widget_logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = ".widgets.ron";

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) enum Focus {
    #[default]
    Calculator,
    Stopwatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub(crate) enum LogTarget {
    Terminal,
    #[default]
    File,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    /// Stopwatch sampling period while it is running.
    pub tick_interval_ms: u64,
    pub log_destination: LogTarget,
    pub log_file: PathBuf,
    pub start_focus: Focus,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            log_destination: LogTarget::default(),
            log_file: PathBuf::from("./widgets.log"),
            start_focus: Focus::default(),
        }
    }
}

impl AppConfig {
    pub(crate) fn log_destination(&self) -> LogDestination {
        match self.log_destination {
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::File => LogDestination::File(self.log_file.clone()),
            LogTarget::Both => LogDestination::Both(self.log_file.clone()),
        }
    }
}

/// Loads `{dir}/.widgets.ron`. A missing file yields the defaults.
pub(crate) fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    ron::from_str(&content).map_err(|err| ConfigError::Parse {
        path,
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(temp.path()).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_fills_remaining_fields() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            "(tick_interval_ms: 40, start_focus: Stopwatch)",
        )
        .unwrap();

        let config = load_config(temp.path()).unwrap();
        assert_eq!(config.tick_interval_ms, 40);
        assert_eq!(config.start_focus, Focus::Stopwatch);
        assert_eq!(config.log_destination, LogTarget::File);
    }

    #[test]
    fn invalid_file_is_reported() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "(tick_interval_ms: \"soon\")").unwrap();

        let err = load_config(temp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn round_trips_through_ron() {
        let config = AppConfig {
            log_destination: LogTarget::Both,
            ..AppConfig::default()
        };
        let text = ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new()).unwrap();
        let parsed: AppConfig = ron::from_str(&text).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(
            parsed.log_destination(),
            LogDestination::Both(PathBuf::from("./widgets.log"))
        );
    }
}
