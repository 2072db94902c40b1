//! Runtime settings for the survey pipeline.
//!
//! Everything is overridable from the environment so the CLI and tests can
//! point at a non-default Ollama instance without code changes.

/// Default Ollama endpoint on the local machine.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Default model for semantic extraction and recommendations.
pub const DEFAULT_TEXT_MODEL: &str = "llama3.1:8b";

/// Default vision-capable model for reading photographed survey forms.
pub const DEFAULT_VISION_MODEL: &str = "llava:7b";

/// Default per-request timeout. Local models on CPU can be slow.
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Settings shared by every remote-model call in one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineSettings {
    /// Base URL of the Ollama instance.
    pub base_url: String,
    /// Model used for text generation (extraction fallback, recommendations).
    pub text_model: String,
    /// Model used for survey-image transcription.
    pub vision_model: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PipelineSettings {
    /// Defaults overlaid with `WELLSCAN_*` environment variables.
    pub fn from_env() -> Self {
        let mut settings = Self::default();
        if let Ok(url) = std::env::var("WELLSCAN_OLLAMA_URL") {
            settings.base_url = url;
        }
        if let Ok(model) = std::env::var("WELLSCAN_TEXT_MODEL") {
            settings.text_model = model;
        }
        if let Ok(model) = std::env::var("WELLSCAN_VISION_MODEL") {
            settings.vision_model = model;
        }
        if let Ok(secs) = std::env::var("WELLSCAN_TIMEOUT_SECS") {
            if let Ok(parsed) = secs.parse() {
                settings.timeout_secs = parsed;
            }
        }
        settings
    }
}

/// Log filter used when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "info,wellscan=debug".to_string()
}
