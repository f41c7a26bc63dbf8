use super::types::{DetailWrapper, PredictionResult, RemoteErrorBody};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::{
    StatusCode,
    multipart::{Form, Part},
};
use std::time::Duration;
use tracing::{debug, error, info};

#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn predict(&self, filename: &str, image: &[u8]) -> Result<PredictionResult>;

    /// Advisory liveness check. Never fails; any problem reads as `false`.
    async fn health_check(&self) -> bool;
}

pub struct HttpInferenceClient {
    client: reqwest::Client,
    base_url: String,
    health_timeout: Duration,
}

impl HttpInferenceClient {
    pub fn new(config: &InferenceConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("Failed to build inference HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            health_timeout: Duration::from_secs(config.health_timeout_secs),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn predict(&self, filename: &str, image: &[u8]) -> Result<PredictionResult> {
        if image.is_empty() {
            return Err(Error::FileRequired);
        }

        let url = format!("{}/predict", self.base_url);
        let part = Part::bytes(image.to_vec())
            .file_name(filename.to_string())
            .mime_str(mime_type_for(filename))
            .map_err(|e| Error::internal(format!("Failed to build multipart part: {e}")))?;
        let form = Form::new().part("file", part);

        info!(
            url = %url,
            filename = %filename,
            size = image.len(),
            "Sending prediction request to inference service"
        );

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::service_unavailable(format!("Failed to reach {url}: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::service_unavailable(format!("Failed to read response: {e}")))?;

        if status != StatusCode::OK {
            error!(
                status_code = status.as_u16(),
                response_body = %body,
                "Inference service error response"
            );
            return Err(remote_error(status, &body));
        }

        let prediction: PredictionResult = serde_json::from_str(&body)
            .map_err(|e| Error::protocol(format!("Failed to parse prediction: {e}")))?;
        if let Some(problem) = prediction.validate() {
            return Err(Error::protocol(problem));
        }

        info!(
            predicted_class = %prediction.predicted_class,
            confidence = prediction.confidence,
            "Received prediction from inference service"
        );

        Ok(prediction)
    }

    async fn health_check(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        let request = self.client.get(&url).timeout(self.health_timeout);
        match request.send().await {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                debug!("Inference health check failed: {}", e);
                false
            }
        }
    }
}

/// `.png` uploads are sent as `image/png`; everything else as `image/jpeg`.
pub fn mime_type_for(filename: &str) -> &'static str {
    if filename.to_ascii_lowercase().ends_with(".png") {
        "image/png"
    } else {
        "image/jpeg"
    }
}

// The inference service may return the envelope bare or nested under `detail`.
fn remote_error(status: StatusCode, body: &str) -> Error {
    let parsed = serde_json::from_str::<RemoteErrorBody>(body)
        .ok()
        .or_else(|| {
            serde_json::from_str::<DetailWrapper>(body)
                .ok()
                .map(|wrapper| wrapper.detail)
        })
        .filter(|envelope| envelope.error);

    match parsed {
        Some(envelope) => Error::remote(status.as_u16(), envelope.code, envelope.message),
        None => Error::remote(
            status.as_u16(),
            format!("HTTP_{}", status.as_u16()),
            format!("inference service returned status {}", status.as_u16()),
        ),
    }
}
