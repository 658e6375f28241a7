use crate::error::{Result, SkycastError};
use dialoguer::{Input, Password};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub weatherapi: WeatherApiConfig,
}

#[derive(Clone, Deserialize, Serialize)]
pub struct WeatherApiConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Forecast window in days, counted from today.
    #[serde(default = "default_lookahead_days")]
    pub lookahead_days: u32,
}

fn default_base_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_lookahead_days() -> u32 {
    7
}

impl std::fmt::Debug for WeatherApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("lookahead_days", &self.lookahead_days)
            .finish()
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(SkycastError::Config(format!(
                "Config file not found at {:?}. Run `skycast init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| SkycastError::Config(format!("Failed to read config: {}", e)))?;

        // Substitute environment variables
        let config_str = Self::substitute_env_vars(&config_str);

        let config: Config = serde_yaml::from_str(&config_str)
            .map_err(|e| SkycastError::Config(format!("Failed to parse config: {}", e)))?;

        if config.weatherapi.lookahead_days == 0 {
            return Err(SkycastError::Config(
                "lookahead_days must be at least 1".into(),
            ));
        }

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        // Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("skycast").join("config.yaml");
            if xdg_config.exists() {
                return Ok(xdg_config);
            }
        }

        // Return XDG path as the default (will trigger "not found" in load)
        let default_path = dirs::config_dir()
            .ok_or_else(|| SkycastError::Config("Cannot determine config directory".into()))?
            .join("skycast")
            .join("config.yaml");
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/skycast/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| SkycastError::Config("Cannot determine config directory".into()))?
            .join("skycast");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up skycast!");
        println!();

        println!("WeatherAPI.com (free tier keys work)");
        let api_key: String = Password::new()
            .with_prompt("  API key")
            .interact()
            .map_err(|e| SkycastError::Config(format!("Input error: {}", e)))?;

        let lookahead_days: u32 = Input::new()
            .with_prompt("  Forecast days")
            .default(7)
            .interact_text()
            .map_err(|e| SkycastError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            weatherapi: WeatherApiConfig {
                api_key,
                base_url: default_base_url(),
                lookahead_days: lookahead_days.max(1),
            },
        };

        // Write to default config path
        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| SkycastError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# skycast Configuration\n# Generated by `skycast init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weatherapi: WeatherApiConfig {
                api_key: String::new(),
                base_url: default_base_url(),
                lookahead_days: 7,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config_applies_defaults() {
        let yaml = "weatherapi:\n  api_key: abc123\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.weatherapi.api_key, "abc123");
        assert_eq!(config.weatherapi.base_url, "https://api.weatherapi.com/v1");
        assert_eq!(config.weatherapi.lookahead_days, 7);
    }

    #[test]
    fn lookahead_days_is_overridable() {
        let yaml = "weatherapi:\n  api_key: abc123\n  lookahead_days: 3\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.weatherapi.lookahead_days, 3);
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = Config {
            weatherapi: WeatherApiConfig {
                api_key: "secret".into(),
                base_url: default_base_url(),
                lookahead_days: 7,
            },
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
