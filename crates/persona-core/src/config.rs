//! Application configuration.
//!
//! Loaded once at startup from defaults, an optional TOML file and a few
//! environment variables, then passed down explicitly.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{CoreError, CoreResult};

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "persona.toml";

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4-1106-preview";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Environment variables read by [`AppConfig::apply_env`].
pub const ENV_API_KEY: &str = "PERSONA_API_KEY";
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_MODEL: &str = "PERSONA_MODEL";
pub const ENV_BASE_URL: &str = "PERSONA_BASE_URL";

/// Top-level config structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub llm: LlmSettings,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
        }
    }
}

/// `[llm]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    /// Request timeout. Unset leaves the HTTP client's default.
    pub timeout_secs: Option<u64>,
    pub api_key: Option<String>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: None,
            api_key: None,
        }
    }
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml(contents: &str) -> CoreResult<Self> {
        let config: Self = toml::from_str(contents)?;
        config.check()?;
        Ok(config)
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents)?;
        debug!(path = %path.display(), "Loaded config from file");
        Ok(config)
    }

    /// Load from `explicit` if given, else from [`DEFAULT_CONFIG_FILE`] in
    /// `dir` if it exists, else defaults.
    ///
    /// An explicit path that cannot be read is an error.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> CoreResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            Self::from_file(&fallback)
        } else {
            debug!(path = %fallback.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Override settings from environment lookups.
    ///
    /// `lookup` is usually `|k| std::env::var(k).ok()`; it is a parameter so
    /// the caller decides when the environment is read.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty(ENV_API_KEY).or_else(|| non_empty(ENV_OPENAI_API_KEY)) {
            self.llm.api_key = Some(key);
        }
        if let Some(model) = non_empty(ENV_MODEL) {
            info!(model = %model, "Model overridden from environment");
            self.llm.model = model;
        }
        if let Some(url) = non_empty(ENV_BASE_URL) {
            self.llm.base_url = url;
        }
    }

    fn check(&self) -> CoreResult<()> {
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(CoreError::config(format!(
                "llm.temperature must be between 0 and 2, got {}",
                self.llm.temperature
            )));
        }
        if self.llm.model.trim().is_empty() {
            return Err(CoreError::config("llm.model must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_config() {
        let toml = r#"
[server]
port = 8080

[llm]
model = "gpt-4o-mini"
temperature = 0.7
timeout_secs = 45
"#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.llm.timeout_secs, Some(45));
        assert_eq!(config.llm.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.llm.temperature, DEFAULT_TEMPERATURE);
        assert_eq!(config.llm.timeout_secs, None);
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_bad_temperature_rejected() {
        let err = AppConfig::from_toml("[llm]\ntemperature = 3.5\n").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_OPENAI_API_KEY, "sk-openai"),
            (ENV_MODEL, "gpt-4o"),
            (ENV_BASE_URL, ""),
        ]);
        let mut config = AppConfig::default();
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));

        assert_eq!(config.llm.api_key.as_deref(), Some("sk-openai"));
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_persona_key_wins() {
        let env: HashMap<&str, &str> =
            HashMap::from([(ENV_API_KEY, "sk-persona"), (ENV_OPENAI_API_KEY, "sk-openai")]);
        let mut config = AppConfig::default();
        config.apply_env(|k| env.get(k).map(|v| v.to_string()));
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-persona"));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.server.port, 3030);

        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[server]\nport = 9000\n").unwrap();
        let config = AppConfig::load(None, dir.path()).unwrap();
        assert_eq!(config.server.port, 9000);

        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            AppConfig::load(Some(&missing), dir.path()),
            Err(CoreError::Io(_))
        ));
    }
}
