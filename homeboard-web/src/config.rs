//! Frontend configuration module
//!
//! Endpoints and keys are fixed at build time through `option_env!`, so a
//! deployment can repoint the remote services without touching code.

/// Frontend configuration for remote endpoints and keys.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the user directory API.
    pub directory_base_url: String,
    /// URL of the current-weather endpoint.
    pub weather_base_url: String,
    /// Weather API key; `None` when the build carried no key.
    pub weather_api_key: Option<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            directory_base_url: option_env!("HOMEBOARD_DIRECTORY_URL")
                .unwrap_or("https://jsonplaceholder.typicode.com")
                .to_string(),
            weather_base_url: option_env!("HOMEBOARD_WEATHER_URL")
                .unwrap_or("https://api.openweathermap.org/data/2.5/weather")
                .to_string(),
            weather_api_key: option_env!("HOMEBOARD_OPENWEATHER_KEY").map(ToString::to_string),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_endpoints_are_absolute_urls() {
        let config = FrontendConfig::new();
        assert!(config.directory_base_url.starts_with("http"));
        assert!(config.weather_base_url.starts_with("http"));
    }

    #[test]
    fn test_config_clone_keeps_values() {
        let config1 = FrontendConfig::new();
        let config2 = config1.clone();
        assert_eq!(config1.directory_base_url, config2.directory_base_url);
        assert_eq!(config1.weather_api_key, config2.weather_api_key);
    }

    #[test]
    fn test_config_debug() {
        let config = FrontendConfig::new();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("FrontendConfig"));
        assert!(debug_str.contains("directory_base_url"));
    }
}
