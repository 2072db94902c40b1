use serde_json::Value;

use super::types::{Recommendation, MAX_RECOMMENDATIONS};
use super::RecommendationError;
use crate::pipeline::extraction::parser::strip_json_fences;

/// Parse the model's advice reply into at most
/// [`MAX_RECOMMENDATIONS`] items.
///
/// Accepts a bare JSON array, a fenced one, or an object wrapping the
/// array under "recommendations". Items that fail to deserialize are
/// skipped rather than failing the whole reply.
pub fn parse_recommendation_response(
    response: &str,
) -> Result<Vec<Recommendation>, RecommendationError> {
    let json_str = strip_json_fences(response);

    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| RecommendationError::MalformedResponse(e.to_string()))?;

    let items = match &value {
        Value::Array(items) => items.as_slice(),
        Value::Object(map) => map
            .get("recommendations")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| {
                RecommendationError::MalformedResponse("expected a JSON array".into())
            })?,
        _ => {
            return Err(RecommendationError::MalformedResponse(
                "expected a JSON array".into(),
            ))
        }
    };

    let mut recommendations: Vec<Recommendation> = items
        .iter()
        .filter_map(|item| serde_json::from_value(item.clone()).ok())
        .collect();
    recommendations.truncate(MAX_RECOMMENDATIONS);

    Ok(recommendations)
}
