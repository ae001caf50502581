//! Wire types for the Generative Language `generateContent` REST call.

use serde::{self, Deserialize, Serialize};

use super::content::{ContentSegment, ModelContent};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TextPart {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SystemInstruction {
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RequestContent {
    pub role: String,
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: SystemInstruction,
    pub contents: Vec<RequestContent>,
}

impl GenerateContentRequest {
    pub fn new(system_prompt: &str, user_message: &str) -> Self {
        Self {
            system_instruction: SystemInstruction {
                parts: vec![TextPart {
                    text: system_prompt.to_string(),
                }],
            },
            contents: vec![RequestContent {
                role: "user".to_string(),
                parts: vec![TextPart {
                    text: user_message.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentSegment>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub content: Option<CandidateContent>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// Content of the first candidate, or a description of why there is none.
    pub fn into_content(self) -> Result<ModelContent, String> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);
        let Some(candidate) = self.candidates.into_iter().next() else {
            return Err(match block_reason {
                Some(reason) => format!("prompt blocked by provider: {}", reason),
                None => "provider returned no candidates".to_string(),
            });
        };

        match candidate.content {
            Some(content) => Ok(ModelContent::Segments(content.parts)),
            None => Err(format!(
                "candidate has no content (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )),
        }
    }
}
