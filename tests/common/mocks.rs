use async_trait::async_trait;
use pyexpert_chat::llm::{InferenceResult, LlmClient};
use std::sync::{Arc, Mutex};

/// Mock inference client returning scripted results in order
#[derive(Debug, Clone)]
pub struct MockLlmClient {
    pub results: Arc<Mutex<Vec<InferenceResult>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub model: String,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            model: "mock-model".to_string(),
        }
    }

    pub fn with_results(self, results: Vec<InferenceResult>) -> Self {
        *self.results.lock().unwrap() = results;
        self
    }

    pub fn with_text(self, text: &str) -> Self {
        self.with_results(vec![InferenceResult::Text(text.to_string())])
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn get_response(&self, prompt: &str) -> InferenceResult {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            return InferenceResult::Text(format!("echo: {prompt}"));
        }
        results.remove(0)
    }

    fn model_name(&self) -> String {
        self.model.clone()
    }
}
