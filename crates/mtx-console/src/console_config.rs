//! Layered console configuration: defaults, then TOML file, then CLI flags.

use std::path::Path;

use mtx_console_core::{ConsoleLocale, LocaleParseError, DEFAULT_RESPONSE_DELAY_MS};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONSOLE_BIND: &str = "127.0.0.1:8790";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid locale in config '{path}': {source}")]
    Locale {
        path: String,
        #[source]
        source: LocaleParseError,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsoleConfigFile {
    bind: Option<String>,
    response_delay_ms: Option<u64>,
    locale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsoleConfigOverrides {
    pub bind: Option<String>,
    pub response_delay_ms: Option<u64>,
    pub locale: Option<ConsoleLocale>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    pub bind: String,
    pub response_delay_ms: u64,
    pub locale: ConsoleLocale,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_CONSOLE_BIND.to_string(),
            response_delay_ms: DEFAULT_RESPONSE_DELAY_MS,
            locale: ConsoleLocale::default(),
        }
    }
}

impl ConsoleConfig {
    pub fn load(
        path: Option<&Path>,
        overrides: ConsoleConfigOverrides,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(path) = path {
            config.apply_file(path)?;
        }
        if let Some(bind) = overrides.bind {
            config.bind = bind;
        }
        if let Some(delay) = overrides.response_delay_ms {
            config.response_delay_ms = delay;
        }
        if let Some(locale) = overrides.locale {
            config.locale = locale;
        }
        Ok(config)
    }

    fn apply_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let file = toml::from_str::<ConsoleConfigFile>(&raw).map_err(|source| {
            ConfigError::Parse {
                path: display.clone(),
                source,
            }
        })?;

        if let Some(bind) = file.bind {
            self.bind = bind;
        }
        if let Some(delay) = file.response_delay_ms {
            self.response_delay_ms = delay;
        }
        if let Some(locale) = file.locale {
            self.locale = locale
                .parse::<ConsoleLocale>()
                .map_err(|source| ConfigError::Locale {
                    path: display,
                    source,
                })?;
        }
        Ok(())
    }
}
