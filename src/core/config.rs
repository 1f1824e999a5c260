//! Engine configuration: defaults, optional JSON file, environment overrides.
//!
//! Nothing here is global; the loaded [`EngineConfig`] is handed to the
//! assembler and the HTTP client explicitly.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{
    cli::types::Season,
    error::{Result, SleepyError},
    BASE_URL_ENV_VAR, BIND_ENV_VAR, CONFIG_ENV_VAR, SEASON_ENV_VAR, TIMEOUT_ENV_VAR,
};

/// Public Sleeper read API.
pub const SLEEPER_BASE_URL: &str = "https://api.sleeper.app/v1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Upstream API root, without trailing slash.
    pub base_url: String,
    /// Sport segment used in league and player paths.
    pub sport: String,
    /// Season used when a caller does not name one.
    pub default_season: Season,
    /// Per-request upstream timeout.
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Default trending lookback window in hours.
    pub trending_hours: u32,
    /// Default number of trending players.
    pub trending_limit: u32,
    /// Listen address for `sleepy serve`.
    pub bind: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: SLEEPER_BASE_URL.to_string(),
            sport: "nfl".to_string(),
            default_season: Season::current(),
            timeout_secs: 10,
            user_agent: concat!("sleepy-ffl/", env!("CARGO_PKG_VERSION")).to_string(),
            trending_hours: 12,
            trending_limit: 25,
            bind: "127.0.0.1:8001".to_string(),
        }
    }
}

impl EngineConfig {
    /// Load from the default config file location (if present) and the process environment.
    pub fn load() -> Result<Self> {
        let path = config_path();
        Self::load_from(path.as_deref(), |key| std::env::var(key).ok())
    }

    /// Load from `path` (skipped when missing), then apply overrides from `env`.
    pub fn load_from<F>(path: Option<&Path>, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path.and_then(try_read_to_string) {
            Some(contents) => serde_json::from_str(&contents)?,
            None => Self::default(),
        };
        config.apply_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_overrides<F>(&mut self, env: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = env(BASE_URL_ENV_VAR) {
            self.base_url = url;
        }
        if let Some(season) = env(SEASON_ENV_VAR) {
            self.default_season = season.parse()?;
        }
        if let Some(secs) = env(TIMEOUT_ENV_VAR) {
            self.timeout_secs = secs.trim().parse().map_err(|_| SleepyError::Config {
                message: format!("{TIMEOUT_ENV_VAR} must be a whole number of seconds, got {secs:?}"),
            })?;
        }
        if let Some(bind) = env(BIND_ENV_VAR) {
            self.bind = bind;
        }
        Ok(())
    }

    fn validate(&mut self) -> Result<()> {
        self.base_url = self.base_url.trim_end_matches('/').to_string();
        reqwest::Url::parse(&self.base_url).map_err(|e| SleepyError::Config {
            message: format!("invalid base_url {:?}: {e}", self.base_url),
        })?;
        if self.timeout_secs == 0 {
            return Err(SleepyError::Config {
                message: "timeout_secs must be greater than zero".to_string(),
            });
        }
        if self.sport.trim().is_empty() {
            return Err(SleepyError::Config {
                message: "sport must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `$SLEEPY_CONFIG`, else `<config dir>/sleepy-ffl/config.json`.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|base| base.join("sleepy-ffl").join("config.json"))
}

/// Try to read a file into a String
fn try_read_to_string(path: &Path) -> Option<String> {
    let mut f = fs::File::open(path).ok()?;
    let mut s = String::new();

    f.read_to_string(&mut s).ok()?;

    Some(s)
}
