//! Assessments API Client
//!
//! A client for the assessment backend, allowing record retrieval and
//! insight generation over its JSON endpoints.

use crate::api::AssessmentsApi;
use crate::api::error::ApiError;
use crate::assessment::{Assessment, Insight};
use crate::environment::Environment;
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("leadership-cli/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    environment: Environment,
}

impl ApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(Duration::from_secs(10))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
        serde_json::from_slice(bytes).map_err(ApiError::Decode)
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_request<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        Self::decode_response(&response_bytes)
    }
}

#[async_trait::async_trait]
impl AssessmentsApi for ApiClient {
    fn environment(&self) -> &Environment {
        &self.environment
    }

    async fn get_assessments(&self) -> Result<Vec<Assessment>, ApiError> {
        self.get_request("api/assessments").await
    }

    async fn get_assessment(&self, id: &str) -> Result<Assessment, ApiError> {
        let endpoint = format!("api/assessments/{}", urlencoding::encode(id));
        self.get_request(&endpoint).await
    }

    async fn get_insight(&self, id: &str) -> Result<Insight, ApiError> {
        let endpoint = format!("api/insights/{}", urlencoding::encode(id));
        self.get_request(&endpoint).await
    }
}
