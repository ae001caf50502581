use actix_web::mime;
use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};

use crate::config::Settings;
use crate::errors::AxiomError;
use crate::models::ModelContent;
use crate::models::gemini::{GenerateContentRequest, GenerateContentResponse};

/// A remote text-generation provider.
///
/// One call is one outbound request: no retries, no streaming. The call either
/// yields the full content or fails.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<ModelContent, AxiomError>;
}

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Secret<String>,
}

impl GeminiClient {
    pub fn new(
        client: reqwest::Client,
        base_url: &str,
        model: &str,
        api_key: Secret<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        }
    }

    pub fn from_settings(client: reqwest::Client, settings: &Settings) -> Self {
        Self::new(
            client,
            &settings.llm_api_base,
            &settings.llm_model,
            settings.google_api_key.clone(),
        )
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1beta/models/{}:generateContent", self.base_url, self.model)
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<ModelContent, AxiomError> {
        let request = GenerateContentRequest::new(system_prompt, user_message);

        log::debug!("sending generateContent request for model {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();

            return Err(AxiomError::GenerationError(format!(
                "provider error: status {status}, text {text}"
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<mime::Mime>().ok());
        match content_type {
            Some(ct) if ct.essence_str() == mime::APPLICATION_JSON.essence_str() => {}
            other => {
                return Err(AxiomError::GenerationError(format!(
                    "content-type: {}, expected: {}",
                    other.map(|ct| ct.to_string()).unwrap_or_else(|| "none".to_string()),
                    mime::APPLICATION_JSON
                )));
            }
        }

        let body: GenerateContentResponse = response.json().await?;
        body.into_content().map_err(AxiomError::GenerationError)
    }
}
