use serde_json::Value;

use super::rules::signals_from_value;
use super::types::HealthSignals;
use super::ExtractionError;

/// Parse the model's extraction reply into a lifestyle record.
///
/// Accepts a bare JSON object or one wrapped in a ```json fence; fields
/// are mapped leniently, so an off-schema value degrades to absent rather
/// than failing the parse.
pub fn parse_extraction_response(response: &str) -> Result<HealthSignals, ExtractionError> {
    let json_str = strip_json_fences(response);

    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| ExtractionError::MalformedResponse(e.to_string()))?;

    if !value.is_object() {
        return Err(ExtractionError::MalformedResponse(
            "expected a JSON object".into(),
        ));
    }

    Ok(signals_from_value(&value))
}

/// Return the JSON body of a response, unwrapping an optional code fence.
/// Models sometimes wrap output in ```json fences despite instructions.
pub(crate) fn strip_json_fences(response: &str) -> &str {
    let trimmed = response.trim();

    if let Some(start) = trimmed.find("```json") {
        let body = &trimmed[start + 7..];
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
        return body.trim();
    }

    if let Some(body) = trimmed.strip_prefix("```") {
        if let Some(end) = body.find("```") {
            return body[..end].trim();
        }
        return body.trim();
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::extraction::types::{DietPattern, ExerciseHabit};

    #[test]
    fn parses_bare_json_object() {
        let signals = parse_extraction_response(
            r#"{"age": 42, "smoker": false, "exercise": "regularly", "diet": null}"#,
        )
        .unwrap();
        assert_eq!(signals.age, Some(42));
        assert_eq!(signals.smoker, Some(false));
        assert_eq!(signals.exercise, Some(ExerciseHabit::Regularly));
        assert_eq!(signals.diet, None);
    }

    #[test]
    fn parses_fenced_json() {
        let response = "Here you go:\n```json\n{\"diet\": \"high sugar\", \"smoker\": true}\n```";
        let signals = parse_extraction_response(response).unwrap();
        assert_eq!(signals.diet, Some(DietPattern::HighSugar));
        assert_eq!(signals.smoker, Some(true));
    }

    #[test]
    fn parses_anonymous_fence() {
        let response = "```\n{\"age\": 61}\n```";
        let signals = parse_extraction_response(response).unwrap();
        assert_eq!(signals.age, Some(61));
    }

    #[test]
    fn all_nulls_yield_empty_record() {
        let signals = parse_extraction_response(
            r#"{"age": null, "smoker": null, "exercise": null, "diet": null}"#,
        )
        .unwrap();
        assert!(signals.is_empty());
    }

    #[test]
    fn off_schema_values_degrade_to_absent() {
        let signals = parse_extraction_response(
            r#"{"age": "unknown", "smoker": "yes", "exercise": "daily", "diet": "balanced"}"#,
        )
        .unwrap();
        assert_eq!(signals.populated_fields(), 1);
        assert_eq!(signals.diet, Some(DietPattern::Balanced));
    }

    #[test]
    fn invalid_json_is_an_error() {
        let result = parse_extraction_response("the respondent seems healthy");
        assert!(matches!(
            result,
            Err(ExtractionError::MalformedResponse(_))
        ));
    }

    #[test]
    fn non_object_json_is_an_error() {
        let result = parse_extraction_response("[1, 2, 3]");
        assert!(matches!(
            result,
            Err(ExtractionError::MalformedResponse(_))
        ));
    }

    #[test]
    fn unclosed_fence_is_still_parsed() {
        let response = "```json\n{\"smoker\": true}";
        let signals = parse_extraction_response(response).unwrap();
        assert_eq!(signals.smoker, Some(true));
    }
}
