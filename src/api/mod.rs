use crate::api::error::ApiError;
use crate::assessment::{Assessment, Insight};
use crate::environment::Environment;

pub(crate) mod client;
pub use client::ApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AssessmentsApi: Send + Sync {
    fn environment(&self) -> &Environment;

    /// Fetch every assessment the backend exposes.
    async fn get_assessments(&self) -> Result<Vec<Assessment>, ApiError>;

    /// Fetch a single assessment by its identifier.
    async fn get_assessment(&self, id: &str) -> Result<Assessment, ApiError>;

    /// Ask the backend to generate a textual insight for one assessment.
    async fn get_insight(&self, id: &str) -> Result<Insight, ApiError>;
}
