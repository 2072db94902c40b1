//! Survey-form OCR front-end.
//!
//! Photographed or scanned forms are transcribed by a vision-capable model
//! into the same JSON shape the deterministic parser reads, then fed back
//! into the normal input channel. No local image processing happens here;
//! the model does all the reading.

use std::sync::Arc;

use base64::Engine as _;
use thiserror::Error;

use crate::ollama::{LlmError, VisionClient};

/// Maximum accepted image size (bytes). Anything larger would also blow
/// past the model's context once base64-encoded.
pub const MAX_IMAGE_BYTES: usize = 20 * 1024 * 1024;

const SURVEY_OCR_SYSTEM_PROMPT: &str = "\
You are a survey-form transcriber. Your task is to read the provided image \
of a filled health survey and transcribe the respondent's answers. \
Transcribe only what is visibly written; never infer missing answers.";

const SURVEY_OCR_PROMPT: &str = r#"Read this health survey form image and extract the fields age, smoker (boolean), exercise, and diet.
Return strictly this JSON and nothing else:
{
  "answers": {"age": number, "smoker": boolean, "exercise": string, "diet": string},
  "missing_fields": ["names of unreadable or empty fields"],
  "confidence": number
}
Use null inside "answers" for any field that is unreadable."#;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error("Unsupported image type: {0}")]
    UnsupportedImageType(String),

    #[error("Image too large ({size} bytes), maximum is {max} bytes")]
    ImageTooLarge { size: usize, max: usize },
}

/// Vision-model reader for photographed survey forms.
pub struct SurveyImageReader {
    vision: Arc<dyn VisionClient + Send + Sync>,
    model: String,
}

impl SurveyImageReader {
    pub fn new(vision: Arc<dyn VisionClient + Send + Sync>, model: &str) -> Self {
        Self {
            vision,
            model: model.to_string(),
        }
    }

    /// Transcribe one survey image into JSON text for the input channel.
    pub fn read_survey_image(&self, image_bytes: &[u8], mime: &str) -> Result<String, OcrError> {
        if !mime.starts_with("image/") {
            return Err(OcrError::UnsupportedImageType(mime.to_string()));
        }
        if image_bytes.len() > MAX_IMAGE_BYTES {
            return Err(OcrError::ImageTooLarge {
                size: image_bytes.len(),
                max: MAX_IMAGE_BYTES,
            });
        }

        let _span = tracing::info_span!(
            "survey_image_ocr",
            model = %self.model,
            image_size = image_bytes.len(),
        )
        .entered();
        let start = std::time::Instant::now();

        let encoded = base64::engine::general_purpose::STANDARD.encode(image_bytes);
        let images = vec![encoded];

        let response = self.vision.chat_with_images(
            &self.model,
            SURVEY_OCR_PROMPT,
            &images,
            Some(SURVEY_OCR_SYSTEM_PROMPT),
        )?;

        tracing::info!(
            elapsed_ms = %start.elapsed().as_millis(),
            text_len = response.len(),
            "Survey image transcribed"
        );

        Ok(response.trim().to_string())
    }
}
