use pyexpert_chat::config::{Config, InferenceConfig};
use wiremock::MockServer;

pub const MODEL_PATH: &str = "/models/mistralai/Mistral-7B-Instruct-v0.3";
pub const TEST_API_KEY: &str = "hf_test_key";

/// Inference settings pointing at a mock backend
pub fn inference_config(server: &MockServer) -> InferenceConfig {
    InferenceConfig {
        endpoint: format!("{}{}", server.uri(), MODEL_PATH),
        api_key: TEST_API_KEY.to_string(),
        timeout_secs: 5,
        ..InferenceConfig::default()
    }
}

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.logs.level = "debug".to_string();
    config.inference.api_key = TEST_API_KEY.to_string();
    config
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  logs:
    level: "debug"

inference:
  endpoint: "http://localhost:8000/models/test-model"
  api_key: "hf_sample"
  timeout_secs: 30
  parameters:
    max_new_tokens: 256
    temperature: 0.2
    top_p: 0.95
    do_sample: false
    return_full_text: false
"#;
