//! Deterministic structured parse: free, instant, fully reproducible.
//! Runs before any model call and never fails; unusable input simply
//! yields an empty record.

use serde_json::Value;

use super::types::{DietPattern, ExerciseHabit, HealthSignals, RawInput};

/// Parse structured input into a lifestyle record without any I/O.
///
/// A nested `answers` object takes precedence as the field source,
/// mirroring the shape produced by form frontends and the vision
/// transcriber. Text input is attempted as JSON; images carry no
/// structure at this layer.
pub fn rule_based_extract(input: &RawInput) -> HealthSignals {
    let parsed;
    let value = match input {
        RawInput::Structured(value) => value,
        RawInput::Text(text) => match serde_json::from_str::<Value>(text) {
            Ok(v) => {
                parsed = v;
                &parsed
            }
            Err(_) => return HealthSignals::default(),
        },
        RawInput::Image { .. } => return HealthSignals::default(),
    };

    let source = match value.get("answers") {
        Some(answers) if answers.is_object() => answers,
        _ => value,
    };

    signals_from_value(source)
}

/// Map a JSON object onto the four lifestyle fields, leniently:
/// each field is read independently and anything unrecognized is absent.
pub(crate) fn signals_from_value(source: &Value) -> HealthSignals {
    HealthSignals {
        age: source.get("age").and_then(coerce_age),
        // Literal booleans only; "yes"/"no" strings stay absent.
        smoker: source.get("smoker").and_then(Value::as_bool),
        exercise: source
            .get("exercise")
            .and_then(Value::as_str)
            .and_then(ExerciseHabit::from_str),
        diet: source
            .get("diet")
            .and_then(Value::as_str)
            .and_then(DietPattern::from_str),
    }
}

/// Coerce an age value to a non-negative integer.
///
/// Accepts JSON numbers and numeric strings; fractional values truncate
/// toward zero. Negative or non-numeric values are treated as absent.
fn coerce_age(value: &Value) -> Option<u32> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    if !number.is_finite() || number < 0.0 || number > f64::from(u32::MAX) {
        return None;
    }
    Some(number as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nested_answers_object_is_the_field_source() {
        let input = RawInput::Structured(json!({
            "answers": {"age": 42, "smoker": true, "exercise": "rarely", "diet": "high sugar"}
        }));
        let signals = rule_based_extract(&input);
        assert_eq!(signals.age, Some(42));
        assert_eq!(signals.smoker, Some(true));
        assert_eq!(signals.exercise, Some(ExerciseHabit::Rarely));
        assert_eq!(signals.diet, Some(DietPattern::HighSugar));
    }

    #[test]
    fn top_level_fields_used_without_answers() {
        let input = RawInput::Structured(json!({"age": 30, "smoker": false}));
        let signals = rule_based_extract(&input);
        assert_eq!(signals.age, Some(30));
        assert_eq!(signals.smoker, Some(false));
        assert_eq!(signals.populated_fields(), 2);
    }

    #[test]
    fn json_text_is_parsed_like_structured_input() {
        let input = RawInput::Text(r#"{"age": "55", "diet": "balanced"}"#.to_string());
        let signals = rule_based_extract(&input);
        assert_eq!(signals.age, Some(55));
        assert_eq!(signals.diet, Some(DietPattern::Balanced));
    }

    #[test]
    fn prose_text_yields_empty_record() {
        let input = RawInput::Text("I am 42 and I smoke a pack a day".to_string());
        assert!(rule_based_extract(&input).is_empty());
    }

    #[test]
    fn image_input_yields_empty_record() {
        let input = RawInput::Image {
            bytes: vec![0xFF],
            mime: "image/jpeg".into(),
        };
        assert!(rule_based_extract(&input).is_empty());
    }

    #[test]
    fn non_object_json_yields_empty_record() {
        assert!(rule_based_extract(&RawInput::Text("42".into())).is_empty());
        assert!(rule_based_extract(&RawInput::Structured(json!([1, 2]))).is_empty());
    }

    #[test]
    fn smoker_string_is_not_coerced() {
        let input = RawInput::Structured(json!({"smoker": "yes", "age": 40}));
        let signals = rule_based_extract(&input);
        assert_eq!(signals.smoker, None);
        assert_eq!(signals.populated_fields(), 1);
    }

    #[test]
    fn unknown_enum_values_are_absent() {
        let input = RawInput::Structured(json!({"exercise": "sometimes", "diet": "keto"}));
        let signals = rule_based_extract(&input);
        assert!(signals.is_empty());
    }

    #[test]
    fn age_coercion_edge_cases() {
        assert_eq!(coerce_age(&json!(42)), Some(42));
        assert_eq!(coerce_age(&json!(42.9)), Some(42));
        assert_eq!(coerce_age(&json!("42")), Some(42));
        assert_eq!(coerce_age(&json!(" 42 ")), Some(42));
        assert_eq!(coerce_age(&json!(-3)), None);
        assert_eq!(coerce_age(&json!("forty")), None);
        assert_eq!(coerce_age(&json!(true)), None);
        assert_eq!(coerce_age(&json!(null)), None);
    }

    #[test]
    fn answers_must_be_an_object_to_take_precedence() {
        let input = RawInput::Structured(json!({"answers": "n/a", "age": 61}));
        let signals = rule_based_extract(&input);
        assert_eq!(signals.age, Some(61));
    }
}
