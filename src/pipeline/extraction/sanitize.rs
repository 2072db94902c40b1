// Sanitize raw survey text before sending it to the LLM.
// Prevents prompt injection, removes invisible Unicode, normalizes whitespace.

/// Maximum input length to send to the LLM (characters).
const MAX_INPUT_LENGTH: usize = 20_000;

/// Line fragments that indicate instruction-override attempts.
const INJECTION_MARKERS: &[&str] = &[
    "ignore previous instructions",
    "ignore all previous instructions",
    "disregard previous instructions",
    "system:",
    "assistant:",
];

/// Sanitize text for LLM consumption: strip invisible characters, drop
/// injection lines, normalize whitespace, and truncate. Injection hits are
/// logged by count only, never by content.
pub fn sanitize_for_llm(raw: &str) -> String {
    let cleaned = remove_invisible_chars(raw);
    let (no_injection, removed_count) = remove_injection_lines(&cleaned);

    if removed_count > 0 {
        tracing::warn!(
            removed_lines = removed_count,
            "Injection patterns detected and removed from survey input"
        );
    }

    let normalized = normalize_whitespace(&no_injection);
    truncate_to_max_length(&normalized, MAX_INPUT_LENGTH)
}

/// Remove invisible Unicode characters that could manipulate LLM behavior.
/// Preserves standard whitespace (space, newline, tab).
fn remove_invisible_chars(text: &str) -> String {
    text.chars()
        .filter(|c| {
            if *c == ' ' || *c == '\n' || *c == '\t' || *c == '\r' {
                return true;
            }
            !matches!(
                *c,
                '\u{200B}'..='\u{200F}' // Zero-width and directional marks
                | '\u{202A}'..='\u{202E}' // Directional embedding/override
                | '\u{2060}'..='\u{2064}' // Word joiner, invisible operators
                | '\u{FEFF}' // BOM / zero-width no-break space
            ) && !c.is_control()
        })
        .collect()
}

/// Drop whole lines matching known instruction-override patterns.
fn remove_injection_lines(text: &str) -> (String, usize) {
    let mut removed = 0;
    let kept: Vec<&str> = text
        .lines()
        .filter(|line| {
            let lower = line.trim().to_lowercase();
            let hit = INJECTION_MARKERS
                .iter()
                .any(|marker| lower.starts_with(marker) || lower.contains("ignore previous instructions"));
            if hit {
                removed += 1;
            }
            !hit
        })
        .collect();
    (kept.join("\n"), removed)
}

/// Collapse runs of blank lines and trim trailing space per line.
fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;
    for line in text.lines() {
        let trimmed = line.trim_end();
        if trimmed.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(trimmed);
        out.push('\n');
    }
    out.trim().to_string()
}

/// Truncate at a char boundary.
fn truncate_to_max_length(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    text.chars().take(max).collect()
}
