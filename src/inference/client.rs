use super::types::*;
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Map, Value};
use tracing::debug;

#[async_trait]
pub trait InferenceClient: Send + Sync {
    /// Runs one generation and returns the artifact path.
    async fn generate(&self) -> Result<String>;
}

pub struct HttpInferenceClient {
    client: reqwest::Client,
    endpoint: String,
    output_file: String,
}

impl HttpInferenceClient {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint(),
            output_file: config.output_file,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InferenceClient for HttpInferenceClient {
    async fn generate(&self) -> Result<String> {
        let request = InferenceRequest::new(self.output_file.as_str());
        let body = serde_json::to_vec(&request)?;

        debug!("Posting inference request to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        debug!("Inference service replied with status {}", response.status());

        // The status code is not inspected; the body carries the outcome.
        let text = response.text().await?;
        let reply: Map<String, Value> = serde_json::from_str(&text).map_err(Error::Decode)?;

        InferenceResponse::from_map(&reply)?.into_result()
    }
}
