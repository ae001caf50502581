use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use secrecy::Secret;
use serde_json::Value;

use crate::consts;
use crate::errors::AxiomError;

/// Process-wide settings, built once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct Settings {
    pub title: String,
    pub version: String,
    pub debug: bool,
    pub environment: String,
    pub google_api_key: Secret<String>,
    pub llm_model: String,
    pub llm_api_base: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub prompt_file_path: PathBuf,
    pub frontend_api_url: String,
    pub workers: Option<NonZeroUsize>,
}

impl Settings {
    /// Builds settings from a key lookup. Keys are the upper-case variable names.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AxiomError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let google_api_key = lookup("GOOGLE_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AxiomError::ConfigError("GOOGLE_API_KEY is required".to_string()))?;

        let debug = match lookup("DEBUG") {
            Some(raw) => parse_bool("DEBUG", &raw)?,
            None => false,
        };

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AxiomError::ConfigError(format!("invalid PORT {:?}: {}", raw, e))
            })?,
            None => consts::DEFAULT_PORT,
        };

        let workers = match lookup("WORKERS") {
            Some(raw) => Some(raw.trim().parse::<NonZeroUsize>().map_err(|e| {
                AxiomError::ConfigError(format!("invalid WORKERS {:?}: {}", raw, e))
            })?),
            None => None,
        };

        let cors_origins = parse_cors_origins(&cors_value(
            &get("CORS_ORIGINS", consts::CORS_WILDCARD),
        ));

        Ok(Settings {
            title: get("API_TITLE", consts::DEFAULT_TITLE),
            version: get("API_VERSION", consts::DEFAULT_VERSION),
            debug,
            environment: get("ENVIRONMENT", consts::DEFAULT_ENVIRONMENT),
            google_api_key: Secret::new(google_api_key),
            llm_model: get("LLM_MODEL", consts::DEFAULT_MODEL),
            llm_api_base: get("LLM_API_BASE", consts::DEFAULT_LLM_API_BASE),
            host: get("HOST", consts::DEFAULT_HOST),
            port,
            cors_origins,
            prompt_file_path: PathBuf::from(get("PROMPT_FILE_PATH", consts::DEFAULT_PROMPT_FILE)),
            frontend_api_url: get("FRONTEND_API_URL", consts::DEFAULT_FRONTEND_API_URL),
            workers,
        })
    }
}

pub trait SettingsLoader: Send + Sync {
    fn load_settings(&self) -> Result<Settings, AxiomError>;
}

/// Reads settings from the process environment, after a `.env` file if present.
pub struct EnvSettingsLoader;

impl EnvSettingsLoader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader for EnvSettingsLoader {
    fn load_settings(&self) -> Result<Settings, AxiomError> {
        dotenv::dotenv().ok();
        Settings::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Loads settings from a fixed map; used by tests and embedders.
pub struct MapSettingsLoader {
    values: HashMap<String, String>,
}

impl MapSettingsLoader {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl SettingsLoader for MapSettingsLoader {
    fn load_settings(&self) -> Result<Settings, AxiomError> {
        Settings::from_lookup(|key| self.values.get(key).cloned())
    }
}

pub fn load_settings() -> Result<Settings, AxiomError> {
    let loader = EnvSettingsLoader::new();
    loader.load_settings()
}

/// Normalizes a configured CORS origin value into the list of allowed origins.
///
/// `"*"` allows everything. A string is split on commas with blanks dropped.
/// A list is taken as-is. Anything else, or an empty result, falls back to `["*"]`.
pub fn parse_cors_origins(value: &Value) -> Vec<String> {
    let origins: Vec<String> = match value {
        Value::String(raw) if raw.trim() == consts::CORS_WILDCARD => vec![],
        Value::String(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_str().map(str::to_string))
            .collect(),
        _ => vec![],
    };

    if origins.is_empty() {
        vec![consts::CORS_WILDCARD.to_string()]
    } else {
        origins
    }
}

// A JSON array literal in the environment is read as a list, everything else as a string.
fn cors_value(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.starts_with('[') {
        if let Ok(list @ Value::Array(_)) = serde_json::from_str::<Value>(trimmed) {
            return list;
        }
    }
    Value::String(raw.to_string())
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, AxiomError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(AxiomError::ConfigError(format!(
            "invalid {} value {:?}, expected a boolean",
            key, other
        ))),
    }
}
