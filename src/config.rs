use anyhow::{Context, Result};

/// Default word list shipped by most Debian/Ubuntu `wbritish` packages
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/british-english";

/// Spellchecker word list, kept apart from the dictionary so that words the
/// dictionary accepts can still be flagged and corrected
pub const DEFAULT_SPELLCHECK_PATH: &str = "/usr/share/dict/american-english";

#[derive(Debug, Clone)]
pub struct Config {
    // Translation backend (LibreTranslate-compatible)
    pub translation_service_url: String,
    pub translation_api_key: Option<String>,

    // Lexicon
    pub dictionary_path: String,
    pub spellcheck_path: String,

    // Server
    pub port: u16,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let translation_service_url = std::env::var("TRANSLATION_SERVICE_URL")
            .context("TRANSLATION_SERVICE_URL not set")?
            .trim_end_matches('/')
            .to_string();

        let dictionary_path = std::env::var("DICTIONARY_PATH")
            .unwrap_or_else(|_| DEFAULT_DICTIONARY_PATH.to_string());

        Ok(Self {
            translation_service_url,
            translation_api_key: std::env::var("TRANSLATION_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),

            spellcheck_path: std::env::var("SPELLCHECK_PATH")
                .unwrap_or_else(|_| DEFAULT_SPELLCHECK_PATH.to_string()),
            dictionary_path,

            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }

    /// URL of the backend's translate endpoint
    pub fn translate_endpoint(&self) -> String {
        format!("{}/translate", self.translation_service_url)
    }
}
