//! Vision provider: read text from an image via an LLM vision endpoint
//!
//! Bridges the `vision_extract` capability to an OpenAI-compatible chat
//! completions endpoint. Locators that are http(s) URLs are passed to
//! the endpoint as-is; local paths are read and embedded as base64 data
//! URLs. Resource access happens only at extraction time.

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use crewrun_application::ports::capability_provider::{CapabilityProvider, ProviderError};
use crewrun_domain::{CapabilityBinding, CapabilityKind};
use serde_json::{Value, json};
use std::env;
use tracing::debug;

/// Instruction sent alongside the image
const OCR_PROMPT: &str =
    "Extract all readable text from this image. Return only the extracted text, \
     preserving its layout where possible.";

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Configuration for the vision endpoint.
///
/// Adapter configuration, not core state: the binaries read it from the
/// environment at wiring time.
#[derive(Debug, Clone)]
pub struct VisionConfig {
    /// Base URL of the OpenAI-compatible API
    pub endpoint: String,
    /// Bearer token
    pub api_key: String,
    /// Vision-capable model name
    pub model: String,
}

impl VisionConfig {
    /// Read configuration from the environment.
    ///
    /// `OPENAI_API_KEY` is required; `CREWRUN_VISION_ENDPOINT` and
    /// `CREWRUN_VISION_MODEL` override the defaults.
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = env::var("OPENAI_API_KEY").map_err(|_| {
            ProviderError::Endpoint("OPENAI_API_KEY is not set".to_string())
        })?;
        Ok(Self {
            endpoint: env::var("CREWRUN_VISION_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            api_key,
            model: env::var("CREWRUN_VISION_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}

/// Provider for the `vision_extract` capability.
pub struct VisionProvider {
    client: reqwest::Client,
    config: VisionConfig,
}

impl VisionProvider {
    pub fn new(config: VisionConfig) -> Self {
        Self {
            client: super::http_client(),
            config,
        }
    }
}

#[async_trait]
impl CapabilityProvider for VisionProvider {
    fn kind(&self) -> CapabilityKind {
        CapabilityKind::VisionExtract
    }

    async fn extract(&self, binding: &CapabilityBinding) -> Result<String, ProviderError> {
        let image_url = resolve_image_url(&binding.locator).await?;
        debug!(locator = %binding.locator, model = %self.config.model, "Dispatching image to vision endpoint");

        let url = format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        );
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.api_key)
            .header("User-Agent", super::USER_AGENT)
            .json(&request_body(&self.config.model, &image_url))
            .send()
            .await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to reach endpoint: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ProviderError::HttpStatus(format!(
                "{} {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown"),
                crewrun_domain::log_preview(&detail, 200)
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Endpoint(format!("Malformed response: {}", e)))?;
        parse_response(&payload)
    }
}

/// Resolve a locator to something the endpoint can dereference.
///
/// http(s) URLs pass through unchanged; anything else is treated as a
/// local file path, read, and embedded as a base64 data URL.
async fn resolve_image_url(locator: &str) -> Result<String, ProviderError> {
    if locator.starts_with("http://") || locator.starts_with("https://") {
        return Ok(locator.to_string());
    }
    let bytes = tokio::fs::read(locator).await?;
    Ok(format!(
        "data:{};base64,{}",
        mime_for_path(locator),
        STANDARD.encode(&bytes)
    ))
}

/// MIME type from the file extension, defaulting to PNG
fn mime_for_path(path: &str) -> &'static str {
    let ext = path.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "image/png",
    }
}

/// Build the chat completions request body
fn request_body(model: &str, image_url: &str) -> Value {
    json!({
        "model": model,
        "messages": [{
            "role": "user",
            "content": [
                {"type": "text", "text": OCR_PROMPT},
                {"type": "image_url", "image_url": {"url": image_url}}
            ]
        }]
    })
}

/// Pull the assistant text out of a chat completions response
fn parse_response(payload: &Value) -> Result<String, ProviderError> {
    let text = payload
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            ProviderError::Endpoint("Response carries no message content".to_string())
        })?;
    if text.trim().is_empty() {
        return Err(ProviderError::NothingExtracted(
            "endpoint returned empty text".to_string(),
        ));
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let body = request_body("gpt-4o-mini", "https://example.com/image.png");

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"][0]["type"], "text");
        assert_eq!(
            body["messages"][0]["content"][1]["image_url"]["url"],
            "https://example.com/image.png"
        );
    }

    #[test]
    fn test_parse_response() {
        let payload = json!({
            "choices": [{"message": {"role": "assistant", "content": "  extracted text  "}}]
        });
        assert_eq!(parse_response(&payload).unwrap(), "  extracted text  ");
    }

    #[test]
    fn test_parse_response_missing_content() {
        let payload = json!({"choices": []});
        let err = parse_response(&payload).unwrap_err();
        assert!(matches!(err, ProviderError::Endpoint(_)));
    }

    #[test]
    fn test_parse_response_empty_content() {
        let payload = json!({
            "choices": [{"message": {"content": "   "}}]
        });
        let err = parse_response(&payload).unwrap_err();
        assert!(matches!(err, ProviderError::NothingExtracted(_)));
    }

    #[test]
    fn test_mime_for_path() {
        assert_eq!(mime_for_path("scan.JPG"), "image/jpeg");
        assert_eq!(mime_for_path("a/b/pic.webp"), "image/webp");
        assert_eq!(mime_for_path("no_extension"), "image/png");
    }

    #[tokio::test]
    async fn test_http_locator_passes_through() {
        let url = resolve_image_url("https://example.com/Image%20.PNG")
            .await
            .unwrap();
        assert_eq!(url, "https://example.com/Image%20.PNG");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_io_error() {
        let err = resolve_image_url("/nonexistent/scan.png").await.unwrap_err();
        assert!(matches!(err, ProviderError::Io(_)));
    }
}
