use crate::error::{Result, WardrobeError};
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Placeholder credential shipped in sample env files. Treated as "no key".
pub const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

/// Environment variable consulted for the weather credential by default.
pub const DEFAULT_WEATHER_ENV_VAR: &str = "WEATHER_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WardrobeConfig {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_web_port")]
    pub port: u16,
    #[serde(default = "default_web_host")]
    pub host: String,
    /// Maximum accepted request body, in megabytes. Base64 images are large.
    #[serde(default = "default_body_limit_mb")]
    pub body_limit_mb: usize,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            port: default_web_port(),
            host: default_web_host(),
            body_limit_mb: default_body_limit_mb(),
        }
    }
}

impl WebConfig {
    /// Body limit in bytes, saturating at `usize::MAX`.
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb.saturating_mul(1024 * 1024)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub env_var: Option<String>,
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,
    #[serde(default = "default_weather_timeout_secs")]
    pub timeout_secs: u64,
    /// City used when a weather request names none.
    #[serde(default = "default_city")]
    pub default_city: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            env_var: None,
            base_url: default_weather_base_url(),
            timeout_secs: default_weather_timeout_secs(),
            default_city: default_city(),
        }
    }
}

impl WeatherConfig {
    /// Resolve the provider credential: explicit `api_key` first, then the
    /// configured (or default) environment variable. Empty values and the
    /// placeholder key count as unset, which puts the gateway in mock mode.
    pub fn resolve_api_key(&self) -> Option<String> {
        let from_env = || {
            let name = self.env_var.as_deref().unwrap_or(DEFAULT_WEATHER_ENV_VAR);
            std::env::var(name).ok()
        };
        self.api_key
            .clone()
            .filter(|k| is_real_key(k))
            .or_else(|| from_env().filter(|k| is_real_key(k)))
    }
}

fn is_real_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_API_KEY
}

// -- Defaults --

fn default_web_port() -> u16 {
    5000
}
fn default_web_host() -> String {
    "0.0.0.0".to_string()
}
fn default_body_limit_mb() -> usize {
    50
}
fn default_weather_base_url() -> String {
    "http://api.openweathermap.org".to_string()
}
fn default_weather_timeout_secs() -> u64 {
    5
}
fn default_city() -> String {
    "London".to_string()
}

impl WardrobeConfig {
    /// Load configuration with three-layer TOML merge:
    /// 1. ~/.config/wardrobe/config.toml (global)
    /// 2. .wardrobe/config.toml (project)
    /// 3. .wardrobe/config.local.toml (local, gitignored)
    ///
    /// The `PORT` environment variable, when set, wins over every file.
    pub fn load(project_dir: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                builder = builder.add_source(File::from(global_path).required(false));
            }
        }

        if let Some(dir) = project_dir {
            let project_config = dir.join(".wardrobe").join("config.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }

            let local_config = dir.join(".wardrobe").join("config.local.toml");
            if local_config.exists() {
                builder = builder.add_source(File::from(local_config).required(false));
            }
        }

        let config = builder
            .build()
            .map_err(|e| WardrobeError::Config(e.to_string()))?;

        let mut cfg: Self = config
            .try_deserialize()
            .map_err(|e| WardrobeError::Config(e.to_string()))?;

        cfg.apply_port_override(std::env::var("PORT").ok().as_deref());
        for warning in cfg.validate() {
            tracing::warn!("config: {warning}");
        }
        Ok(cfg)
    }

    /// Load with defaults only (no files).
    pub fn default_config() -> Self {
        Self::default()
    }

    fn apply_port_override(&mut self, port: Option<&str>) {
        let Some(raw) = port else { return };
        match raw.trim().parse::<u16>() {
            Ok(port) => self.web.port = port,
            Err(_) => tracing::warn!("ignoring invalid PORT value '{raw}'"),
        }
    }

    /// Validate config values, fixing out-of-range values rather than
    /// rejecting the config. Returns one warning per adjustment.
    pub fn validate(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();

        if self.weather.timeout_secs == 0 {
            warnings.push(format!(
                "weather.timeout_secs must be positive, using {}",
                default_weather_timeout_secs()
            ));
            self.weather.timeout_secs = default_weather_timeout_secs();
        }

        if self.weather.base_url.trim().is_empty() {
            warnings.push("weather.base_url is empty, using the OpenWeatherMap default".into());
            self.weather.base_url = default_weather_base_url();
        }

        if self.weather.default_city.trim().is_empty() {
            warnings.push("weather.default_city is empty, using London".into());
            self.weather.default_city = default_city();
        }

        if self.web.body_limit_mb == 0 {
            warnings.push(format!(
                "web.body_limit_mb must be positive, using {}",
                default_body_limit_mb()
            ));
            self.web.body_limit_mb = default_body_limit_mb();
        }

        warnings
    }
}

/// Returns `~/.config/wardrobe/config.toml` when a config dir exists.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wardrobe").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WardrobeConfig::default_config();
        assert_eq!(config.web.port, 5000);
        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.web.body_limit_mb, 50);
        assert_eq!(config.weather.base_url, "http://api.openweathermap.org");
        assert_eq!(config.weather.timeout_secs, 5);
        assert_eq!(config.weather.default_city, "London");
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn test_load_config_no_files() {
        let config = WardrobeConfig::load(Some(Path::new("/nonexistent/path"))).unwrap();
        assert_eq!(config.weather.timeout_secs, 5);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = WardrobeConfig::default_config();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: WardrobeConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.web.port, config.web.port);
        assert_eq!(parsed.weather.base_url, config.weather.base_url);
    }

    #[test]
    fn test_weather_config_toml_parsing() {
        let toml_str = r#"
[weather]
api_key = "abc123"
base_url = "http://localhost:9000"
timeout_secs = 2
"#;
        let config: WardrobeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.weather.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.weather.base_url, "http://localhost:9000");
        assert_eq!(config.weather.timeout_secs, 2);
        // Untouched section keeps its defaults
        assert_eq!(config.web.port, 5000);
    }

    #[test]
    fn test_validate_fixes_zero_values() {
        let mut config = WardrobeConfig::default_config();
        config.weather.timeout_secs = 0;
        config.web.body_limit_mb = 0;
        let warnings = config.validate();
        assert_eq!(warnings.len(), 2);
        assert_eq!(config.weather.timeout_secs, 5);
        assert_eq!(config.web.body_limit_mb, 50);
    }

    #[test]
    fn test_body_limit_bytes() {
        let mut web = WebConfig::default();
        assert_eq!(web.body_limit_bytes(), 50 * 1024 * 1024);
        web.body_limit_mb = usize::MAX;
        assert_eq!(web.body_limit_bytes(), usize::MAX);
    }

    #[test]
    fn test_validate_default_is_clean() {
        let mut config = WardrobeConfig::default_config();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_port_override() {
        let mut config = WardrobeConfig::default_config();
        config.apply_port_override(Some("8080"));
        assert_eq!(config.web.port, 8080);

        config.apply_port_override(Some("not-a-port"));
        assert_eq!(config.web.port, 8080);

        config.apply_port_override(None);
        assert_eq!(config.web.port, 8080);
    }

    #[test]
    fn test_explicit_key_resolves() {
        let weather = WeatherConfig {
            api_key: Some("real-key".into()),
            ..Default::default()
        };
        assert_eq!(weather.resolve_api_key().as_deref(), Some("real-key"));
    }

    #[test]
    fn test_placeholder_key_is_unset() {
        let weather = WeatherConfig {
            api_key: Some(PLACEHOLDER_API_KEY.into()),
            env_var: Some("WARDROBE_TEST_UNSET_WEATHER_KEY".into()),
            ..Default::default()
        };
        assert!(weather.resolve_api_key().is_none());
    }

    #[test]
    fn test_empty_key_is_unset() {
        let weather = WeatherConfig {
            api_key: Some("   ".into()),
            env_var: Some("WARDROBE_TEST_UNSET_WEATHER_KEY".into()),
            ..Default::default()
        };
        assert!(weather.resolve_api_key().is_none());
    }
}
