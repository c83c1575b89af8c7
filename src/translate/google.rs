use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::errors::{NewsError, NewsResult};
use crate::translate::Translator;

pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single";

/// Client for the public Google translate endpoint (`client=gtx`).
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            endpoint: endpoint.to_string(),
        }
    }

    /// The endpoint answers with nested arrays: `[[["translated", "source", ...], ...], ...]`.
    /// Long inputs come back split into several segments.
    fn parse_response(body: &Value) -> NewsResult<String> {
        let segments = body
            .get(0)
            .and_then(Value::as_array)
            .ok_or_else(|| NewsError::Translation("Unexpected response shape".to_string()))?;

        let translated: String = segments
            .iter()
            .filter_map(|segment| segment.get(0).and_then(Value::as_str))
            .collect();

        if translated.is_empty() {
            return Err(NewsError::Translation("Empty translation".to_string()));
        }

        Ok(translated)
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, Duration::from_secs(10))
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> NewsResult<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(NewsError::HttpStatus {
                url: self.endpoint.clone(),
                status: response.status().as_u16(),
            });
        }

        let body: Value = response.json().await?;
        Self::parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_single_segment() {
        let body = json!([[["Merhaba dünya", "Hello world", null, null, 10]], null, "en"]);
        assert_eq!(GoogleTranslator::parse_response(&body).unwrap(), "Merhaba dünya");
    }

    #[test]
    fn test_parse_joins_segments() {
        let body = json!([
            [["Birinci cümle. ", "First sentence. "], ["İkinci cümle.", "Second sentence."]],
            null,
            "en"
        ]);

        assert_eq!(
            GoogleTranslator::parse_response(&body).unwrap(),
            "Birinci cümle. İkinci cümle."
        );
    }

    #[test]
    fn test_parse_rejects_unexpected_shape() {
        let body = json!({"error": "rate limited"});
        assert!(matches!(
            GoogleTranslator::parse_response(&body),
            Err(NewsError::Translation(_))
        ));
    }

    #[tokio::test]
    async fn test_blank_text_skips_request() {
        // Unroutable endpoint: any request would fail
        let translator = GoogleTranslator::new("http://127.0.0.1:9/", Duration::from_millis(50));
        assert_eq!(translator.translate("  ", "tr").await.unwrap(), "  ");
    }
}
