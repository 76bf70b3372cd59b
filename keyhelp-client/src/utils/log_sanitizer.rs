//! Log sanitization utilities
//!
//! Keeps generated passwords, single-sign-on links and oversized panel
//! responses out of debug/error logs.

use serde_json::Value;

/// Maximum number of bytes of a body included in log output.
const TRUNCATE_LIMIT: usize = 256;

/// Body keys whose values are never logged. `url` carries the one-time
/// login link returned by `/login/{id}`.
const SECRET_KEYS: &[&str] = &["password", "api_key", "token", "url"];

const REDACTED: &str = "***";

/// Cut `s` to at most [`TRUNCATE_LIMIT`] bytes on a char boundary, noting
/// the full length when anything was dropped.
pub fn truncate_for_log(s: &str) -> String {
    if s.len() <= TRUNCATE_LIMIT {
        return s.to_string();
    }
    let cut = s
        .char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= TRUNCATE_LIMIT)
        .last()
        .unwrap_or(0);
    format!("{}... ({} bytes total)", &s[..cut], s.len())
}

/// Render a request body for logging with secret fields masked.
pub fn redact_body(body: &Value) -> String {
    let mut copy = body.clone();
    redact_in_place(&mut copy);
    truncate_for_log(&copy.to_string())
}

/// Render a raw response body for logging.
///
/// JSON bodies get the same masking as [`redact_body`]; anything else is
/// only truncated.
pub fn redact_text(text: &str) -> String {
    match serde_json::from_str::<Value>(text) {
        Ok(body) => redact_body(&body),
        Err(_) => truncate_for_log(text),
    }
}

fn redact_in_place(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, v) in map.iter_mut() {
                if SECRET_KEYS.contains(&key.as_str()) {
                    *v = Value::String(REDACTED.to_string());
                } else {
                    redact_in_place(v);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_in_place),
        _ => {}
    }
}
