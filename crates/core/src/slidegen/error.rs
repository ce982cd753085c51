use serde_json::Value;
use std::fmt;

/// Diagnostics for a failed slide-generation call: which stage broke, a
/// short detail line, and the raw response for offline inspection.
#[derive(Debug, Clone)]
pub struct SlidegenApiError {
    pub stage: &'static str,
    pub detail: String,
    pub raw_body: Option<String>,
    pub raw_response_json: Option<Value>,
}

impl fmt::Display for SlidegenApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "slide-gen API error (stage={}): {}",
            self.stage, self.detail
        )
    }
}

impl std::error::Error for SlidegenApiError {}
