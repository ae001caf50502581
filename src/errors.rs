use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::consts::GENERATION_ERROR_PREFIX;

/// One failed constraint on the request body, reported back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldViolation {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|part| part.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum AxiomError {
    ConfigError(String),
    ValidationError(Vec<FieldViolation>),
    PromptUnavailable(String),
    GenerationError(String),
    RenderError(String),
}

impl fmt::Display for AxiomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxiomError::ConfigError(msg) => write!(f, "Config error: {}", msg),
            AxiomError::ValidationError(violations) => {
                let messages: Vec<&str> = violations.iter().map(|v| v.msg.as_str()).collect();
                write!(f, "Validation error: {}", messages.join("; "))
            }
            AxiomError::PromptUnavailable(msg) => write!(f, "{}", msg),
            AxiomError::GenerationError(msg) => write!(f, "{}", msg),
            AxiomError::RenderError(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for AxiomError {}

impl From<reqwest::Error> for AxiomError {
    fn from(err: reqwest::Error) -> Self {
        AxiomError::GenerationError(err.to_string())
    }
}

impl From<serde_json::Error> for AxiomError {
    fn from(err: serde_json::Error) -> Self {
        AxiomError::GenerationError(err.to_string())
    }
}

impl From<askama::Error> for AxiomError {
    fn from(err: askama::Error) -> Self {
        AxiomError::RenderError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AxiomError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations = vec![];
        for (field, field_errors) in errors.field_errors() {
            let field = field.to_string();
            for error in field_errors {
                let msg = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value for {}", field));
                violations.push(FieldViolation::new(
                    &["body", field.as_str()],
                    msg,
                    error.code.to_string(),
                ));
            }
        }
        AxiomError::ValidationError(violations)
    }
}

impl ResponseError for AxiomError {
    fn status_code(&self) -> StatusCode {
        match self {
            AxiomError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AxiomError::ConfigError(_)
            | AxiomError::PromptUnavailable(_)
            | AxiomError::GenerationError(_)
            | AxiomError::RenderError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AxiomError::ValidationError(violations) => json!({ "detail": violations }),
            AxiomError::PromptUnavailable(msg) | AxiomError::GenerationError(msg) => {
                json!({ "detail": format!("{}: {}", GENERATION_ERROR_PREFIX, msg) })
            }
            AxiomError::ConfigError(_) | AxiomError::RenderError(_) => {
                json!({ "detail": self.to_string() })
            }
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}
