use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::Deserialize;

use crate::core::interfaces::adapters::TextDetector;
use crate::core::models::{AnnotateRequestBody, AnnotateResponseBody};
use crate::global_constants::{
    GOOGLE_VISION_ANNOTATE_URL, GOOGLE_VISION_FEATURE_TEXT_DETECTION, LOG_TAG_OCR,
};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Deserialize)]
struct VisionCredentials {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    endpoint: Option<String>,
    #[serde(default, rename = "type")]
    credentials_type: Option<String>,
}

#[cfg_attr(test, derive(Debug))]
pub struct GoogleVisionTextDetector {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GoogleVisionTextDetector {
    pub async fn from_credentials_file(credentials_path: &Path) -> Result<Self> {
        log::info!(
            "{} Loading Cloud Vision credentials from {:?}",
            LOG_TAG_OCR,
            credentials_path
        );

        let contents = tokio::fs::read_to_string(credentials_path)
            .await
            .with_context(|| format!("Failed to read credentials file {:?}", credentials_path))?;

        Self::from_credentials_json(&contents)
    }

    fn from_credentials_json(contents: &str) -> Result<Self> {
        let credentials: VisionCredentials =
            serde_json::from_str(contents).context("Credentials file is not valid JSON")?;

        let Some(api_key) = credentials.api_key.map(|key| key.trim().to_string()) else {
            if credentials.credentials_type.as_deref() == Some("service_account") {
                anyhow::bail!(
                    "Service-account key files are not supported; use a JSON file with an api_key"
                );
            }
            anyhow::bail!("Credentials file has no api_key");
        };
        if api_key.is_empty() {
            anyhow::bail!("Credentials file has an empty api_key");
        }

        Ok(Self {
            client: reqwest::Client::new(),
            api_key,
            endpoint: credentials
                .endpoint
                .unwrap_or_else(|| GOOGLE_VISION_ANNOTATE_URL.to_string()),
        })
    }


    fn build_request_body(encoded_image: &[u8]) -> AnnotateRequestBody {
        let base64_image = base64::engine::general_purpose::STANDARD.encode(encoded_image);
        AnnotateRequestBody::single_image(base64_image, GOOGLE_VISION_FEATURE_TEXT_DETECTION)
    }
}

#[async_trait]
impl TextDetector for GoogleVisionTextDetector {
    async fn detect_text(&self, encoded_image: &[u8]) -> Result<Option<String>> {
        log::info!(
            "{} Sending {} bytes to Cloud Vision",
            LOG_TAG_OCR,
            encoded_image.len()
        );

        let request_body = Self::build_request_body(encoded_image);
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to reach Cloud Vision")?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            log::debug!("{} Cloud Vision error body: {}", LOG_TAG_OCR, error_body);
            anyhow::bail!("Cloud Vision returned HTTP {}", status);
        }

        let response_body: AnnotateResponseBody = response
            .json()
            .await
            .map_err(reqwest::Error::without_url)
            .context("Failed to parse Cloud Vision response")?;

        let ocr_result = response_body.into_ocr_result().map_err(|status| {
            anyhow::anyhow!("Cloud Vision error {}: {}", status.code, status.message)
        })?;

        let full_text = ocr_result.full_text().map(str::to_string);

        log::info!(
            "{} Recognition complete, {} annotations, locale {}",
            LOG_TAG_OCR,
            ocr_result.text_annotations.len(),
            ocr_result.locale().unwrap_or("unknown")
        );

        Ok(full_text)
    }
}
