//! Caller-side request handling.
//!
//! Classification itself never fails. Rejections happen here, before the
//! classifier runs: a request needs a string `text` whose trimmed length is
//! at least [`MIN_REFLECTION_CHARS`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::classifier::Classifier;
use crate::types::Classification;

/// Minimum trimmed length of a reflection, in characters.
pub const MIN_REFLECTION_CHARS: usize = 5;

/// Message callers report for failures outside validation.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors that reject a request before classification.
///
/// These are client errors. An unparsable body is not one of them: it is
/// reported as an internal failure with [`ErrorBody::internal`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("Text input is required")]
    MissingText,

    #[error("Please provide a longer reflection for better analysis")]
    TooShort { min: usize },
}

impl RequestError {
    /// Body sent back to the caller.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

/// `{ "error": message }` response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    /// Generic body for unexpected failures; never carries internal detail.
    pub fn internal() -> Self {
        Self {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// An analysis request: `{ "text": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl AnalyzeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Parse a JSON request body.
    ///
    /// A missing or non-string `text` is not a parse error; it yields a
    /// request without text, which [`validate`] rejects as
    /// [`RequestError::MissingText`]. Invalid JSON is returned as the parser
    /// error so the caller can log it and answer generically.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(body)?;

        let text = value
            .get("text")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self { text })
    }
}

/// Check a request and return the text to classify.
///
/// The returned text is the original, untrimmed input.
pub fn validate(request: &AnalyzeRequest, min_chars: usize) -> Result<&str, RequestError> {
    let text = match request.text.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => return Err(RequestError::MissingText),
    };

    if text.trim().chars().count() < min_chars {
        return Err(RequestError::TooShort { min: min_chars });
    }

    Ok(text)
}

/// Validate a request and classify its text.
pub fn analyze(
    request: &AnalyzeRequest,
    classifier: &dyn Classifier,
    min_chars: usize,
) -> Result<Classification, RequestError> {
    let text = validate(request, min_chars).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected reflection");
    })?;

    let classification = classifier.classify(text);
    tracing::debug!(
        strategy = %classifier.strategy(),
        emotion = %classification.result.emotion,
        confidence = classification.result.confidence,
        "Reflection analyzed"
    );

    Ok(classification)
}
