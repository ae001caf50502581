pub const API_PREFIX: &str = "/api/v1";
pub const DOCS_PATH: &str = "/docs";

pub const MIN_MESSAGE_CHARS: usize = 1;
pub const MAX_MESSAGE_CHARS: usize = 10_000;

pub const DEFAULT_TITLE: &str = "Axiom API";
pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_MODEL: &str = "gemini-3-pro-preview";
pub const DEFAULT_LLM_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_PROMPT_FILE: &str = "app/prompts/system_prompt.md";
pub const DEFAULT_FRONTEND_API_URL: &str = "http://localhost:8000";

pub const CORS_WILDCARD: &str = "*";
pub(crate) const CORS_MAX_AGE_SECS: usize = 3600;

pub(crate) const GENERATION_ERROR_PREFIX: &str = "Error generating response";
