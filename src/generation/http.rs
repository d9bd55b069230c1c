use reqwest::Client;
use serde_json::Value;

use crate::config::ServiceConfig;

use super::error::ServiceError;
use super::service::GenerationService;
use super::types::{GenerationRequest, GenerationResult};

/// Generation service reached over HTTP.
///
/// Sends `POST {base_url}{generate_path}` with a JSON body and decodes the
/// `{"Ok": ..}` / `{"Err": ..}` answer. No timeout and no retries: a call
/// runs until the service answers or the connection fails.
pub struct HttpGenerationService {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpGenerationService {
    pub fn new(config: &ServiceConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .build()
            .map_err(ServiceError::ClientBuild)?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl GenerationService for HttpGenerationService {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationResult, ServiceError> {
        let mut builder = self.client.post(&self.endpoint).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|source| ServiceError::Connection {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(ServiceError::ReadBody)?;

        if !status.is_success() {
            return Err(ServiceError::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }

        let value: Value = serde_json::from_str(&body).map_err(ServiceError::Decode)?;
        Ok(GenerationResult::from_value(&value))
    }
}
