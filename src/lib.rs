pub mod config;
pub mod ollama;
pub mod pipeline;

pub use pipeline::extraction::types::{
    DietPattern, ExerciseHabit, ExtractionMethod, HealthSignals, RawInput,
};
pub use pipeline::processor::SurveyPipeline;
pub use pipeline::recommendation::types::{Priority, Recommendation};
pub use pipeline::report::HealthReport;
pub use pipeline::scoring::{score_signals, RiskLevel, RiskProfile};
pub use pipeline::{PipelineError, PipelinePhase};

pub const APP_NAME: &str = "Wellscan";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
