//! Completion API proxy.
//!
//! Builds the per-mode instruction prompt, calls the chat-completion
//! endpoint, and sanitizes the raw model output before it leaves the
//! server. Reasoning markup must never reach a caller: some models lead
//! with a `<think>…</think>` block, some emit only the closing half, and
//! some scatter several blocks through the text, so the sanitizer handles
//! all three.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};
use writing::TransformMode;

use crate::{
    error::{upstream_message, AppError},
    state::State,
};

const THINK_CLOSE: &str = "</think>";

static THINK_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<think>.*?</think>").expect("valid regex"));

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

pub fn build_prompt(mode: TransformMode, text: &str) -> String {
    match mode {
        TransformMode::Professional => format!(
            "Rewrite the following text so it sounds highly professional, polished, \
and formal, while preserving the original meaning.\n\n\
Rules:\n\
- ONLY return the rewritten text.\n\
- Do NOT add any explanation, summary, analysis, commentary, or metadata.\n\
- Do NOT include any labels like \"Rewritten:\" or \"Here's your text:\".\n\
- Do NOT include <think> blocks or reasoning steps of any kind.\n\n\
Text to rewrite:\n\
\"\"\"{text}\"\"\""
        ),
        TransformMode::Simplify => format!(
            "Rewrite the following text so it is extremely clear, simple, casual, and \
human, like you're explaining it to a smart friend. Make it friendly and easy \
to understand. Remove formal/corporate tone, remove jargon, but keep the \
original meaning.\n\n\
Rules:\n\
- ONLY return the rewritten text.\n\
- Do NOT add explanation, notes, analysis, or bullet points.\n\
- Do NOT include <think> or reasoning steps of any kind.\n\n\
Text to rewrite:\n\
\"\"\"{text}\"\"\""
        ),
    }
}

fn temperature(mode: TransformMode) -> f64 {
    match mode {
        TransformMode::Professional => 0.5,
        TransformMode::Simplify => 0.6,
    }
}

/// Run one transformation through the completion API and return the
/// sanitized text.
pub async fn transform(state: &State, mode: TransformMode, text: &str) -> Result<String, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyText);
    }

    let response = state
        .http
        .post(format!("{}/chat/completions", state.config.completion_url))
        .bearer_auth(&state.config.completion_key)
        .header("HTTP-Referer", &state.config.referer)
        .header("X-Title", &state.config.app_title)
        .json(&json!({
            "model": state.config.model,
            "messages": [{ "role": "user", "content": build_prompt(mode, text) }],
            "temperature": temperature(mode),
        }))
        .send()
        .await?;

    let status = response.status();
    debug!("completion status: {status}");

    if !status.is_success() {
        let message = upstream_message(response)
            .await
            .unwrap_or_else(|| "Completion request failed".to_string());
        warn!("completion upstream error ({status}): {message}");

        return Err(AppError::Upstream(message));
    }

    let body: ChatResponse = response.json().await?;
    let raw = body
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .unwrap_or_default();

    Ok(sanitize(&raw))
}

/// Strip reasoning markup out of raw model output.
///
/// First keep only what follows a closing marker, then remove any paired
/// blocks that survived the cut, then trim.
pub fn sanitize(raw: &str) -> String {
    let tail = match raw.find(THINK_CLOSE) {
        Some(index) => &raw[index + THINK_CLOSE.len()..],
        None => raw,
    };

    THINK_BLOCK.replace_all(tail, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::{build_prompt, sanitize, temperature};
    use writing::TransformMode;

    #[test]
    fn test_sanitize_basic() {
        assert_eq!(sanitize("<think>x</think>keep"), "keep");
    }

    #[test]
    fn test_sanitize_clean_text_unchanged() {
        let clean = "Already clean output.";
        assert_eq!(sanitize(clean), clean);
        assert_eq!(sanitize(&sanitize(clean)), clean);
    }

    #[test]
    fn test_sanitize_lone_closing_marker() {
        assert_eq!(sanitize("planning planning</think>  result here"), "result here");
    }

    #[test]
    fn test_sanitize_multiple_blocks() {
        assert_eq!(
            sanitize("</think>a <think>more</think> b <THINK>shout</THINK> c"),
            "a  b  c"
        );
    }

    #[test]
    fn test_sanitize_multiline_block() {
        assert_eq!(sanitize("</think>ok <think>line\nline\nline</think> done"), "ok  done");
    }

    #[test]
    fn test_sanitize_trims() {
        assert_eq!(sanitize("<think>x</think>\n\n  spaced  \n"), "spaced");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("<think>only reasoning</think>"), "");
    }

    #[test]
    fn test_prompt_embeds_text() {
        let prompt = build_prompt(TransformMode::Professional, "my input words");
        assert!(prompt.contains("\"\"\"my input words\"\"\""));
        assert!(prompt.contains("professional"));

        let prompt = build_prompt(TransformMode::Simplify, "my input words");
        assert!(prompt.contains("\"\"\"my input words\"\"\""));
        assert!(prompt.contains("casual"));
    }

    #[test]
    fn test_temperature_per_mode() {
        assert_eq!(temperature(TransformMode::Professional), 0.5);
        assert_eq!(temperature(TransformMode::Simplify), 0.6);
    }
}
