#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use axiom::errors::AxiomError;
use axiom::llm_client::ModelClient;
use axiom::models::ModelContent;

/// Scripted model client that records every call it receives.
pub struct MockModelClient {
    responses: Mutex<VecDeque<Result<ModelContent, AxiomError>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl MockModelClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(response: Result<ModelContent, AxiomError>) -> Self {
        let mock = Self::new();
        mock.add_response(response);
        mock
    }

    pub fn add_response(&self, response: Result<ModelContent, AxiomError>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<ModelContent, AxiomError> {
        self.calls
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_message.to_string()));

        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| {
            Err(AxiomError::GenerationError(
                "no scripted response left".to_string(),
            ))
        })
    }
}
