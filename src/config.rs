use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Panel API
    pub api_url: String,

    // Languages
    pub languages_dir: String,
    pub default_language: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file (ignored in production)
        let _ = dotenvy::dotenv();

        Ok(Self {
            // Base URL of the panel API the dropdown endpoints live under
            api_url: std::env::var("PANEL_API_URL")
                .context("PANEL_API_URL not set")?,

            // Directory holding one translations file per language
            languages_dir: std::env::var("LANGUAGES_DIR")
                .unwrap_or_else(|_| "site/languages".to_string()),
            default_language: std::env::var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|_| "en".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_reads_all_keys() {
        std::env::set_var("PANEL_API_URL", "http://localhost:8000/api");
        std::env::set_var("LANGUAGES_DIR", "/tmp/languages");
        std::env::set_var("DEFAULT_LANGUAGE", "de");

        let config = Config::from_env().expect("config");
        assert_eq!(config.api_url, "http://localhost:8000/api");
        assert_eq!(config.languages_dir, "/tmp/languages");
        assert_eq!(config.default_language, "de");

        std::env::remove_var("LANGUAGES_DIR");
        std::env::remove_var("DEFAULT_LANGUAGE");
    }

    #[test]
    fn test_config_clone_and_debug() {
        let config = Config {
            api_url: "http://localhost:8000/api".to_string(),
            languages_dir: "site/languages".to_string(),
            default_language: "en".to_string(),
        };

        let cloned = config.clone();
        assert_eq!(config.api_url, cloned.api_url);

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("languages_dir"));
    }
}
