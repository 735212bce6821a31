//! Response contract for the analysis service.
//!
//! The model is asked to answer in one of two shapes: an ordered run of
//! marker-delimited sections, or a flat JSON object with the same keys. Both
//! are defined here so the prompt builder and the parser cannot drift apart.

use crate::domain::entities::record::{AnalysisPayload, UNAVAILABLE};
use crate::domain::values::sentiment::Sentiment;
use serde::Deserialize;

/// Emphasis character the model sometimes wraps values in.
const EMPHASIS: char = '*';

/// One field of the marker contract, in response order.
pub struct ContractField {
    pub key: &'static str,
    pub marker: &'static str,
    /// Instruction shown to the model inside the prompt.
    pub hint: &'static str,
}

pub const TERMINATOR: &str = "#END#";

pub const ANALYSIS_CONTRACT: [ContractField; 6] = [
    ContractField {
        key: "sentiment",
        marker: "#SENTIMENT#",
        hint: "[Positive/Negative/Neutral]",
    },
    ContractField {
        key: "email_summary",
        marker: "#EMAIL_SUMMARY#",
        hint: "[Short summary, two sentences maximum]",
    },
    ContractField {
        key: "macro_explanation",
        marker: "#MACRO_EXPLANATION#",
        hint: "[Macro analysis: 2-3 clear sentences of context]",
    },
    ContractField {
        key: "strengths",
        marker: "#STRENGTHS#",
        hint: "[1-2 short dash-list points on opportunities/bullish factors]",
    },
    ContractField {
        key: "weaknesses",
        marker: "#WEAKNESSES#",
        hint: "[1-2 short dash-list points on risks/bearish factors]",
    },
    ContractField {
        key: "guidance",
        marker: "#GUIDANCE#",
        hint: "[One clear sentence with the direction or levels to watch]",
    },
];

/// Extract the section between two markers.
///
/// Missing start marker yields the fixed sentinel; missing end marker yields
/// the remainder of the text. Emphasis characters are stripped from the
/// result. Never fails: model output is untrusted.
pub fn extract_section(text: &str, start_marker: &str, end_marker: &str) -> String {
    let Some(start) = text.find(start_marker) else {
        return UNAVAILABLE.to_string();
    };
    let after = &text[start + start_marker.len()..];
    let section = match after.find(end_marker) {
        Some(end) => &after[..end],
        None => after,
    };
    section.replace(EMPHASIS, "").trim().to_string()
}

/// Walk the marker schema over a full response, using each field's successor
/// marker (the terminator for the last field) as its end marker.
pub fn parse_marker_response(text: &str) -> AnalysisPayload {
    let section = |i: usize| {
        let end = ANALYSIS_CONTRACT
            .get(i + 1)
            .map(|f| f.marker)
            .unwrap_or(TERMINATOR);
        extract_section(text, ANALYSIS_CONTRACT[i].marker, end)
    };
    AnalysisPayload {
        sentiment: Sentiment::from_text(&section(0)),
        email_take: section(1),
        web_explanation: section(2),
        strengths: section(3),
        weaknesses: section(4),
        guidance: section(5),
    }
}

#[derive(Deserialize)]
struct JsonContract {
    sentiment: String,
    email_summary: String,
    macro_explanation: String,
    strengths: String,
    weaknesses: String,
    guidance: String,
}

/// Strict structured variant: the whole payload parses or the whole call is
/// treated as failed. Code fences around the object are tolerated; anything
/// else malformed is an `Err` and the caller falls back wholesale.
pub fn parse_json_response(text: &str) -> Result<AnalysisPayload, String> {
    let body = strip_code_fence(text);
    let parsed: JsonContract =
        serde_json::from_str(body).map_err(|e| format!("Contract violation: {e}"))?;
    Ok(AnalysisPayload {
        sentiment: Sentiment::from_text(&parsed.sentiment),
        email_take: parsed.email_summary.replace(EMPHASIS, "").trim().to_string(),
        web_explanation: parsed.macro_explanation.replace(EMPHASIS, "").trim().to_string(),
        strengths: parsed.strengths.replace(EMPHASIS, "").trim().to_string(),
        weaknesses: parsed.weaknesses.replace(EMPHASIS, "").trim().to_string(),
        guidance: parsed.guidance.replace(EMPHASIS, "").trim().to_string(),
    })
}

fn strip_code_fence(text: &str) -> &str {
    let t = text.trim();
    let Some(rest) = t.strip_prefix("```") else {
        return t;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}
