use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::PricePredictor;
use crate::core::error::{AppError, Result};
use crate::features::predictions::models::FeatureRecord;

/// Request body understood by the model-serving endpoint
#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    instances: [&'a FeatureRecord; 1],
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    predictions: Vec<f64>,
}

/// Client for a model served over HTTP (`{"instances": [...]}` in,
/// `{"predictions": [...]}` out)
pub struct HttpModelClient {
    http_client: reqwest::Client,
    url: String,
}

impl HttpModelClient {
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
    ) -> std::result::Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .user_agent("ImmoEstimator/1.0 (price-prediction)")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PricePredictor for HttpModelClient {
    async fn predict(&self, record: &FeatureRecord) -> Result<f64> {
        tracing::debug!("Requesting prediction from {}", self.url);

        let response = self
            .http_client
            .post(&self.url)
            .json(&PredictRequest { instances: [record] })
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Model request to {} failed: {}", self.url, e);
                AppError::ExternalServiceError(format!("Model service unreachable: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Model service error: HTTP {} - {}", status, body);
            return Err(AppError::ExternalServiceError(format!(
                "Model service error: HTTP {}",
                status
            )));
        }

        let payload = response.json::<PredictResponse>().await.map_err(|e| {
            tracing::error!("Failed to parse model response: {}", e);
            AppError::ExternalServiceError(format!("Failed to parse model response: {}", e))
        })?;

        payload.predictions.first().copied().ok_or_else(|| {
            AppError::ExternalServiceError("Model returned no prediction".to_string())
        })
    }
}
