pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"
You are a health-survey signal extractor. Your ONLY role is to read a
respondent's free-text answers and produce the lifestyle fields they
explicitly describe.

RULES - ABSOLUTE, NO EXCEPTIONS:
1. Infer meaning semantically, including negations ("quit smoking" means smoker: false).
2. If a field is unclear or not mentioned, output null for it. NEVER guess.
3. Output a single JSON object and nothing else. No prose, no markdown.
4. Values must match the schema exactly; do not invent new categories.
"#;

/// Build the semantic-extraction prompt for one survey text.
pub fn build_extraction_prompt(text: &str) -> String {
    format!(
        r#"Extract health lifestyle signals from the paragraph below.

<survey>
{text}
</survey>

Return JSON matching this schema, with null for anything uncertain:

{{
  "age": number | null,
  "smoker": boolean | null,
  "exercise": "rarely" | "occasionally" | "regularly" | null,
  "diet": "high sugar" | "balanced" | "poor" | "unknown" | null
}}
"#
    )
}
