use serde::Deserialize;
use std::path::Path;

use super::theme::ThemeMode;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the event API, without trailing slash
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub default_locale: String,
    pub default_theme: ThemeMode,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:9090"

[ui]
default_locale = "en"
default_theme = "light"
"#;

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:9090".to_string(),
            },
            ui: UiConfig {
                default_locale: "en".to_string(),
                default_theme: ThemeMode::Light,
            },
        }
    }
}

impl ApiConfig {
    /// Join an API path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Parse configuration from TOML text
pub fn load_config_from_str(contents: &str) -> anyhow::Result<DashboardConfig> {
    let config: DashboardConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load configuration from `path`
///
/// Falls back to the embedded default when no path is given or the file
/// does not exist.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DashboardConfig> {
    if let Some(config_path) = path {
        if config_path.exists() {
            log::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(config_path)?;
            return load_config_from_str(&contents);
        }
        log::warn!("Config not found at: {}", config_path.display());
    }

    log::info!("Using default embedded configuration");
    load_config_from_str(DEFAULT_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config_from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = load_config(Some(Path::new("/nonexistent/uranus/config.toml"))).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9090");
        assert_eq!(load_config(None).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_custom_config() {
        let config = load_config_from_str(
            r#"
[api]
base_url = "https://api.example.org/"

[ui]
default_locale = "de"
default_theme = "dark"
"#,
        )
        .unwrap();
        assert_eq!(config.ui.default_theme, ThemeMode::Dark);
        assert_eq!(config.api.url("/api/image/5"), "https://api.example.org/api/image/5");
    }

    #[test]
    fn test_invalid_config() {
        assert!(load_config_from_str("[api]\nbase_url = 5").is_err());
        assert!(load_config_from_str("[ui]\ndefault_locale = \"en\"\ndefault_theme = \"forest\"").is_err());
    }
}
