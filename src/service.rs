use std::sync::Arc;

use validator::Validate;

use crate::errors::AxiomError;
use crate::llm_client::ModelClient;
use crate::models::{DebateRequest, DebateResponse};
use crate::prompt::PromptStore;

pub struct DebateService {
    client: Arc<dyn ModelClient>,
    prompts: PromptStore,
    model: String,
}

impl DebateService {
    pub fn new(client: Arc<dyn ModelClient>, prompts: PromptStore, model: &str) -> Self {
        Self {
            client,
            prompts,
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Validates the request, then hands generation to its own runtime task
    /// and waits for it. Nothing reaches the provider unless validation passed.
    ///
    /// The task runs on the current worker's arbiter, not a thread pool; the
    /// outbound call is async and never blocks the arbiter.
    pub async fn debate(&self, request: DebateRequest) -> Result<DebateResponse, AxiomError> {
        request.validate()?;

        let system_prompt = self.prompts.get().await?;
        let client = Arc::clone(&self.client);
        let message = request.message;

        log::debug!(
            "generating response for {} character message",
            message.chars().count()
        );

        let content = actix_web::rt::spawn(async move {
            client.generate(&system_prompt, &message).await
        })
        .await
        .map_err(|e| AxiomError::GenerationError(format!("generation task failed: {}", e)))??;

        Ok(DebateResponse {
            response: content.to_text(),
            model: self.model.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ModelContent;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[derive(Default)]
    struct SlowClient {
        in_flight: AtomicUsize,
        peak: AtomicUsize,
    }

    #[async_trait]
    impl ModelClient for SlowClient {
        async fn generate(
            &self,
            _system_prompt: &str,
            user_message: &str,
        ) -> Result<ModelContent, AxiomError> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(50)).await;
            self.in_flight.fetch_sub(1, Ordering::SeqCst);
            Ok(ModelContent::from(format!("re: {}", user_message)))
        }
    }

    struct PanickingClient;

    #[async_trait]
    impl ModelClient for PanickingClient {
        async fn generate(&self, _: &str, _: &str) -> Result<ModelContent, AxiomError> {
            panic!("provider adapter bug");
        }
    }

    #[actix_web::test]
    async fn test_generations_overlap_and_each_caller_gets_its_own_result() {
        let client = Arc::new(SlowClient::default());
        let service = DebateService::new(client.clone(), PromptStore::preloaded("p"), "m");

        let (first, second) = tokio::join!(
            service.debate(DebateRequest::new("one")),
            service.debate(DebateRequest::new("two")),
        );

        assert_eq!(first.unwrap().response, "re: one");
        assert_eq!(second.unwrap().response, "re: two");
        assert_eq!(client.peak.load(Ordering::SeqCst), 2);
    }

    #[actix_web::test]
    async fn test_response_reports_configured_model() {
        let service =
            DebateService::new(Arc::new(SlowClient::default()), PromptStore::preloaded("p"), "gemini-x");
        assert_eq!(service.model(), "gemini-x");
        let response = service.debate(DebateRequest::new("claim")).await.unwrap();
        assert_eq!(response.model, service.model());
    }

    #[actix_web::test]
    async fn test_panicking_generation_becomes_generation_error() {
        let service = DebateService::new(Arc::new(PanickingClient), PromptStore::preloaded("p"), "m");
        match service.debate(DebateRequest::new("claim")).await {
            Err(AxiomError::GenerationError(msg)) => {
                assert!(msg.starts_with("generation task failed"))
            }
            other => panic!("Expected GenerationError, got {:?}", other),
        }
    }
}
