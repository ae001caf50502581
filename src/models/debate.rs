use serde::{self, Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct DebateRequest {
    #[validate(length(
        min = 1,
        max = 10000,
        code = "string_length",
        message = "message must be between 1 and 10000 characters"
    ))]
    pub message: String,
}

impl DebateRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DebateResponse {
    pub response: String,
    pub model: String,
}
