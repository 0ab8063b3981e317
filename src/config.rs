//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to automatically deserialize environment variables into a type-safe struct.

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 3000
/// - `KEYS_FILE` (optional): path of the JSON file storing API keys, defaults to "api_keys.json"
/// - `REQUIRE_AUTH` (optional): whether chat endpoints require an API key, defaults to false
/// - `GROQ_API_KEY` (optional): LLM provider credential; when absent the service
///   answers from the built-in knowledge base only
/// - `GROQ_MODEL` (optional): LLM model name, defaults to "gemma2-9b-it"
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_keys_file")]
    pub keys_file: String,

    #[serde(default)]
    pub require_auth: bool,

    pub groq_api_key: Option<String>,

    #[serde(default = "default_model")]
    pub groq_model: String,
}

/// Default port if SERVER_PORT environment variable is not set.
fn default_port() -> u16 {
    3000
}

/// Default path of the API key store file.
fn default_keys_file() -> String {
    "api_keys.json".to_string()
}

/// Default LLM model if GROQ_MODEL environment variable is not set.
fn default_model() -> String {
    "gemma2-9b-it".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This method first attempts to load a `.env` file (which is optional),
    /// then reads environment variables and deserializes them into a Config struct.
    ///
    /// # Errors
    ///
    /// Returns an error if environment variable values cannot be parsed into
    /// expected types (e.g., a non-numeric SERVER_PORT).
    pub fn from_env() -> Result<Self, envy::Error> {
        // Try to load .env file if it exists (does nothing if not found)
        dotenvy::dotenv().ok();

        // Parse environment variables into Config struct
        // Field names are automatically converted: server_port -> SERVER_PORT
        envy::from_env::<Config>()
    }
}
