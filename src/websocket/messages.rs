//! WebSocket message types for the analyzer protocol.
//!
//! The protocol is a single request/response pair:
//!
//! - outgoing: `{"code": "<source text>"}`
//! - incoming: an [`AnalysisResult`] JSON object, or the same object with an
//!   `error` field when the backend could not analyze the snippet.

use serde::{Deserialize, Serialize};

use crate::models::AnalysisResult;

use super::WsError;

/// Request to analyze a snippet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub code: String,
}

impl AnalyzeRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}

/// Messages sent to the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum WsOutgoingMessage {
    Analyze(AnalyzeRequest),
}

impl WsOutgoingMessage {
    pub fn analyze(code: impl Into<String>) -> Self {
        WsOutgoingMessage::Analyze(AnalyzeRequest::new(code))
    }
}

/// Messages received from the analyzer.
#[derive(Debug, Clone, PartialEq)]
pub enum WsIncomingMessage {
    /// A complete analysis that replaces the previous one
    Analysis(Box<AnalysisResult>),
    /// The backend reported a failure; the previous analysis stays current
    Rejected { error: String },
}

/// Parse an inbound text frame.
///
/// Anything that is not a JSON object is a parse error. An object carrying an
/// `error` field becomes [`WsIncomingMessage::Rejected`].
pub fn parse_incoming(text: &str) -> Result<WsIncomingMessage, WsError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| WsError::ParseError(e.to_string()))?;

    if !value.is_object() {
        return Err(WsError::ParseError(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    }

    let result: AnalysisResult =
        serde_json::from_value(value).map_err(|e| WsError::ParseError(e.to_string()))?;

    match result.error {
        Some(error) => Ok(WsIncomingMessage::Rejected { error }),
        None => Ok(WsIncomingMessage::Analysis(Box::new(result))),
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
