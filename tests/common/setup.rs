use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use axiom::config::{MapSettingsLoader, Settings, SettingsLoader};
use axiom::llm_client::ModelClient;
use axiom::prompt::PromptStore;
use axiom::service::DebateService;

pub const TEST_MODEL: &str = "test-model";
pub const TEST_API_KEY: &str = "test-key";
pub const TEST_PROMPT: &str = "You are Axiom. Answer with logic only.";

pub fn create_test_settings(extra: &[(&str, &str)]) -> Settings {
    let mut values: HashMap<String, String> = HashMap::new();
    values.insert("GOOGLE_API_KEY".to_string(), TEST_API_KEY.to_string());
    values.insert("LLM_MODEL".to_string(), TEST_MODEL.to_string());
    values.insert("API_VERSION".to_string(), "9.9.9".to_string());
    for (key, value) in extra {
        values.insert(key.to_string(), value.to_string());
    }
    MapSettingsLoader::new(values)
        .load_settings()
        .expect("test settings should load")
}

pub fn create_test_service(client: Arc<dyn ModelClient>, prompts: PromptStore) -> Arc<DebateService> {
    Arc::new(DebateService::new(client, prompts, TEST_MODEL))
}

pub fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("axiom-test-{}-{}", std::process::id(), name))
}
