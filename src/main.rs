use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use wellscan::config::{default_log_filter, PipelineSettings};
use wellscan::ollama::{validate_model_name, OllamaClient};
use wellscan::pipeline::vision::SurveyImageReader;
use wellscan::{PipelinePhase, RawInput, SurveyPipeline};

/// Derive a lifestyle risk profile from a health survey, with AI wellness
/// suggestions from a local Ollama model.
#[derive(Parser, Debug)]
#[command(name = "wellscan", version, about)]
struct Cli {
    /// Survey file: JSON or free text. Reads stdin when no input is given.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Inline survey text instead of a file.
    #[arg(short, long, conflicts_with = "input")]
    text: Option<String>,

    /// Photographed or scanned survey form to transcribe before analysis.
    #[arg(long, conflicts_with_all = ["input", "text"])]
    image: Option<PathBuf>,

    /// Ollama base URL (default http://localhost:11434).
    #[arg(long)]
    base_url: Option<String>,

    /// Text model for extraction and recommendations.
    #[arg(long)]
    model: Option<String>,

    /// Vision model for image transcription.
    #[arg(long)]
    vision_model: Option<String>,

    /// Pretty-print the report JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = PipelineSettings::from_env();
    if let Some(base_url) = cli.base_url {
        settings.base_url = base_url;
    }
    if let Some(model) = cli.model {
        settings.text_model = model;
    }
    if let Some(model) = cli.vision_model {
        settings.vision_model = model;
    }

    for model in [&settings.text_model, &settings.vision_model] {
        if let Err(e) = validate_model_name(model) {
            tracing::error!(error = %e, "Refusing to run");
            return ExitCode::from(2);
        }
    }

    let input = match build_input(&cli.input, &cli.text, &cli.image) {
        Ok(input) => input,
        Err(message) => {
            tracing::error!(phase = %PipelinePhase::Error, "{message}");
            return ExitCode::from(2);
        }
    };

    tracing::info!("Wellscan starting v{}", wellscan::APP_VERSION);

    let client = Arc::new(OllamaClient::from_settings(&settings));
    let reader = SurveyImageReader::new(client.clone(), &settings.vision_model);
    let pipeline = SurveyPipeline::new(client, &settings).with_vision(reader);

    let report = match pipeline.run(&input, |phase| {
        tracing::info!(phase = %phase, "Pipeline phase");
    }) {
        Ok(report) => report,
        Err(e) => {
            // No partial report on a hard failure, only the error phase.
            tracing::error!(phase = %PipelinePhase::Error, error = %e, "Pipeline failed");
            return ExitCode::FAILURE;
        }
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&report)
    } else {
        serde_json::to_string(&report)
    };
    match rendered {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(phase = %PipelinePhase::Error, error = %e, "Report serialization failed");
            ExitCode::FAILURE
        }
    }
}

/// Resolve CLI flags into one pipeline input.
fn build_input(
    input: &Option<PathBuf>,
    text: &Option<String>,
    image: &Option<PathBuf>,
) -> Result<RawInput, String> {
    if let Some(path) = image {
        let bytes =
            std::fs::read(path).map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
        let mime = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        return Ok(RawInput::Image { bytes, mime });
    }

    if let Some(text) = text {
        return Ok(RawInput::from_text(text));
    }

    let body = match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read {}: {e}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|e| format!("Cannot read stdin: {e}"))?;
            buffer
        }
    };

    if body.trim().is_empty() {
        return Err("Empty survey input".to_string());
    }

    Ok(RawInput::from_text(&body))
}
