use crate::config::Settings;
use crate::slidegen::error::SlidegenApiError;
use crate::slidegen::GeneratedDeck;
use anyhow::Context;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.slidesgpt.com";
const GENERATE_PATH: &str = "/v1/presentations/generate";
const DEFAULT_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Clone)]
pub struct SlidegenClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl SlidegenClient {
    pub fn from_settings(settings: &Settings) -> anyhow::Result<Self> {
        let api_key = settings.require_slidegen_api_key()?.to_string();
        let base_url = std::env::var("SLIDEGEN_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("SLIDEGEN_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("failed to build reqwest client")?;

        Ok(Self {
            http,
            api_key,
            base_url,
        })
    }

    /// Submit one flattened prompt and hand back whatever URLs the service
    /// returns. Single attempt; the client timeout bounds the whole call and
    /// a timeout or non-2xx status fails this path without retries.
    pub async fn generate(&self, prompt: &str) -> anyhow::Result<GeneratedDeck> {
        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))?,
        );

        let url = format!("{}{GENERATE_PATH}", self.base_url.trim_end_matches('/'));
        let res = self
            .http
            .post(url)
            .headers(headers)
            .json(&GenerateRequest { prompt })
            .send()
            .await
            .context("slide-gen request failed")?;

        let status = res.status();
        let text = res
            .text()
            .await
            .context("failed to read slide-gen response body")?;
        if !status.is_success() {
            let raw_response_json = serde_json::from_str::<serde_json::Value>(&text).ok();
            return Err(SlidegenApiError {
                stage: "http",
                detail: format!("status={status}"),
                raw_body: Some(text),
                raw_response_json,
            }
            .into());
        }

        serde_json::from_str::<GeneratedDeck>(&text)
            .with_context(|| format!("failed to parse slide-gen response JSON: {text}"))
    }
}

#[derive(Debug, Clone, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_is_a_single_prompt_field() {
        let body = serde_json::to_value(GenerateRequest { prompt: "deck it" }).unwrap();

        assert_eq!(body, serde_json::json!({ "prompt": "deck it" }));
    }
}
