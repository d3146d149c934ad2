use crate::config::GeminiConfig;
use crate::prelude::*;
use coderelay_core::directive::{parse_directive, CodeDirective, DirectiveReply};
use coderelay_core::gemini::{
    build_request, first_candidate_text, generate_content_url, GenerateContentResponse,
    API_KEY_HEADER,
};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

/// Client for the `generateContent` completion endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    url: String,
    timeout: std::time::Duration,
}

impl GeminiClient {
    /// Build a client whose every request carries the API key and is bounded by
    /// the configured timeout.
    pub fn new(config: &GeminiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut api_key = HeaderValue::from_str(&config.api_key)
            .map_err(|e| eyre!("Invalid API key header value: {}", e))?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| eyre!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            http,
            url: generate_content_url(&config.base_url, &config.model),
            timeout: config.timeout,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Send a prompt and return the raw text of the first candidate.
    pub async fn complete(&self, prompt: &str) -> std::result::Result<String, Error> {
        let response = self
            .http
            .post(&self.url)
            .json(&build_request(prompt))
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            return Err(Error::Status(response.status()));
        }

        let envelope: GenerateContentResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(self.timeout)
            } else {
                Error::Envelope(e.to_string())
            }
        })?;

        first_candidate_text(&envelope)
            .map(str::to_string)
            .ok_or_else(|| Error::Envelope("no text in the first candidate".to_string()))
    }

    /// Turn a prompt into a directive reply.
    ///
    /// Never fails: a failed call yields [`CodeDirective::unreachable`] and an
    /// unparseable reply yields [`CodeDirective::invalid`].
    pub async fn generate(&self, prompt: &str) -> DirectiveReply {
        match self.complete(prompt).await {
            Ok(text) => {
                let reply = parse_directive(&text);
                if reply.is_fallback() {
                    log::warn!("Completion reply is not valid JSON: {text:?}");
                }
                reply
            }
            Err(err) => {
                log::error!("Completion request failed: {err}");
                DirectiveReply::Fallback(CodeDirective::unreachable())
            }
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::Timeout(self.timeout)
        } else {
            Error::Network(err.to_string())
        }
    }
}
