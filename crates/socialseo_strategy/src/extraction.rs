//! Normalization of model replies into typed records.
//!
//! Models often wrap JSON in markdown fences or surround it with prose,
//! especially when strict JSON output is unavailable because search is on.

use serde::de::DeserializeOwned;
use serde_json::Value;
use socialseo_error::{SocialSeoResult, StrategyError, StrategyErrorKind};
use tracing::{debug, warn};

/// Strip one leading and trailing markdown code fence.
///
/// Handles ```` ```json ```` and untagged fences. Unfenced text is returned
/// trimmed and otherwise unchanged.
///
/// # Examples
///
/// ```
/// use socialseo_strategy::strip_code_fence;
///
/// assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```"), "{\"a\": 1}");
/// assert_eq!(strip_code_fence("```\n[1, 2]\n```"), "[1, 2]");
/// assert_eq!(strip_code_fence("  {\"a\": 1} "), "{\"a\": 1}");
/// ```
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    let body = if let Some(rest) = trimmed.strip_prefix("```json") {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed;
    };

    let body = body.trim_start();
    body.strip_suffix("```").unwrap_or(body).trim_end()
}

/// Upper bound on embedded snippets tried per reply.
const MAX_EMBEDDED_CANDIDATES: usize = 64;

/// Parse a model reply into `T`.
///
/// 1. Blank or absent text is an empty-response error.
/// 2. The fence-stripped text is tried first, then a fenced block anywhere
///    in the text, then every balanced object or array in order of
///    appearance.
/// 3. The first candidate that is valid JSON and has the shape of `T` wins.
///
/// If some candidate was valid JSON but none had the right shape, the
/// first shape error is reported as a schema mismatch. No valid JSON at
/// all is malformed JSON.
///
/// # Examples
///
/// ```
/// use socialseo_strategy::parse_model_json;
///
/// let reply = "Here you go:\n```json\n{\"n\": 3}\n```\nEnjoy!";
/// let value: serde_json::Value = parse_model_json(Some(reply)).unwrap();
/// assert_eq!(value["n"], 3);
///
/// assert!(parse_model_json::<serde_json::Value>(Some("   ")).is_err());
/// ```
pub fn parse_model_json<T: DeserializeOwned>(text: Option<&str>) -> SocialSeoResult<T> {
    parse_model_json_with(text, |_| {})
}

/// [`parse_model_json`] with a hook that may adjust each candidate value
/// before it is converted into `T`.
///
/// # Examples
///
/// ```
/// use serde_json::{Value, json};
/// use socialseo_strategy::parse_model_json_with;
///
/// let value: Value = parse_model_json_with(Some("{\"a\": 1}"), |v| {
///     v["b"] = json!(2);
/// })
/// .unwrap();
/// assert_eq!(value, json!({"a": 1, "b": 2}));
/// ```
pub fn parse_model_json_with<T, F>(text: Option<&str>, mut adjust: F) -> SocialSeoResult<T>
where
    T: DeserializeOwned,
    F: FnMut(&mut Value),
{
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            warn!("Model returned no text payload");
            return Err(StrategyError::new(StrategyErrorKind::EmptyResponse).into());
        }
    };

    let cleaned = strip_code_fence(text);
    let mut candidates = vec![cleaned.to_string()];
    for snippet in embedded_candidates(text) {
        if !candidates.contains(&snippet) {
            candidates.push(snippet);
        }
    }

    let mut syntax_error: Option<serde_json::Error> = None;
    let mut shape_error: Option<serde_json::Error> = None;

    for (index, candidate) in candidates.iter().enumerate() {
        let mut value = match serde_json::from_str::<Value>(candidate) {
            Ok(value) => value,
            Err(e) => {
                if index == 0 {
                    debug!(
                        error = %e,
                        response_length = text.len(),
                        "Reply is not bare JSON, searching for embedded JSON"
                    );
                }
                syntax_error.get_or_insert(e);
                continue;
            }
        };

        adjust(&mut value);
        match serde_json::from_value::<T>(value) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => {
                debug!(candidate = index, error = %e, "Candidate has the wrong shape");
                shape_error.get_or_insert(e);
            }
        }
    }

    if let Some(e) = shape_error {
        warn!(error = %e, "Model reply does not match expected schema");
        return Err(StrategyError::new(StrategyErrorKind::SchemaMismatch(e.to_string())).into());
    }

    let message = syntax_error.map_or_else(|| "no JSON value found".to_string(), |e| e.to_string());
    warn!(error = %message, "No parseable JSON in model reply");
    Err(StrategyError::new(StrategyErrorKind::MalformedJson(message)).into())
}

/// Candidate JSON snippets embedded in prose: the first fenced block, then
/// each balanced object or array by position.
fn embedded_candidates(text: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    if let Some(block) = extract_from_code_block(text) {
        candidates.push(block);
    }

    for (start, ch) in text.char_indices() {
        if candidates.len() >= MAX_EMBEDDED_CANDIDATES {
            break;
        }
        if ch != '{' && ch != '[' {
            continue;
        }
        if let Some(snippet) = extract_balanced_at(text, start)
            && !candidates.iter().any(|c| c == snippet)
        {
            candidates.push(snippet.to_string());
        }
    }

    candidates
}

/// Content of the first fenced block, tagged or not.
fn extract_from_code_block(text: &str) -> Option<String> {
    let start = text.find("```")?;
    let after_fence = start + 3;
    // Skip the language tag, if any.
    let content_start = text[after_fence..]
        .find('\n')
        .map(|n| after_fence + n + 1)
        .unwrap_or(after_fence);
    let end = text[content_start..].find("```")?;
    Some(text[content_start..content_start + end].trim().to_string())
}

/// Text from the delimiter at byte `start` to its matching close, skipping
/// delimiters inside strings.
fn extract_balanced_at(text: &str, start: usize) -> Option<&str> {
    let open = text[start..].chars().next()?;
    let close = match open {
        '{' => '}',
        '[' => ']',
        _ => return None,
    };
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape_next = false;

    for (i, ch) in text[start..].char_indices() {
        if escape_next {
            escape_next = false;
            continue;
        }

        match ch {
            '\\' if in_string => escape_next = true,
            '"' => in_string = !in_string,
            c if c == open && !in_string => depth += 1,
            c if c == close && !in_string => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(&text[start..start + i + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
