//! CDN control-plane access

use crate::{InvalidationError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudfront::error::DisplayErrorContext;
use aws_sdk_cloudfront::types::{InvalidationBatch, Paths};
use aws_sdk_cloudfront::Client as CloudFrontClient;
use tracing::{debug, info};

/// A single invalidation request for one distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationRequest {
    pub distribution_id: String,
    pub paths: Vec<String>,
    pub caller_reference: String,
}

impl InvalidationRequest {
    pub fn new(
        distribution_id: impl Into<String>,
        paths: Vec<String>,
        caller_reference: impl Into<String>,
    ) -> Self {
        Self {
            distribution_id: distribution_id.into(),
            paths,
            caller_reference: caller_reference.into(),
        }
    }

    /// Path count as CloudFront expects it
    pub fn quantity(&self) -> Result<i32> {
        i32::try_from(self.paths.len()).map_err(|_| {
            InvalidationError::Request(format!("too many paths: {}", self.paths.len()))
        })
    }
}

/// CDN API capable of creating invalidations
///
/// Returns the id of the created invalidation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InvalidationApi: Send + Sync {
    async fn create_invalidation(&self, request: InvalidationRequest) -> Result<String>;
}

/// CloudFront-backed [`InvalidationApi`]
pub struct CloudFrontInvalidationApi {
    client: CloudFrontClient,
}

impl CloudFrontInvalidationApi {
    pub fn new(client: CloudFrontClient) -> Self {
        Self { client }
    }

    /// Create a client from the default AWS configuration
    ///
    /// Credentials and region come from the standard provider chain
    /// (environment variables, profile, Lambda execution role).
    pub async fn from_env() -> Self {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        info!("Initialized CloudFront client");
        Self::new(CloudFrontClient::new(&config))
    }

    fn build_batch(request: &InvalidationRequest) -> Result<InvalidationBatch> {
        let paths = Paths::builder()
            .quantity(request.quantity()?)
            .set_items(Some(request.paths.clone()))
            .build()
            .map_err(|e| InvalidationError::Request(e.to_string()))?;

        InvalidationBatch::builder()
            .paths(paths)
            .caller_reference(&request.caller_reference)
            .build()
            .map_err(|e| InvalidationError::Request(e.to_string()))
    }
}

#[async_trait]
impl InvalidationApi for CloudFrontInvalidationApi {
    async fn create_invalidation(&self, request: InvalidationRequest) -> Result<String> {
        let batch = Self::build_batch(&request)?;

        debug!(
            distribution_id = %request.distribution_id,
            caller_reference = %request.caller_reference,
            path_count = request.paths.len(),
            "Sending CreateInvalidation"
        );

        let response = self
            .client
            .create_invalidation()
            .distribution_id(&request.distribution_id)
            .invalidation_batch(batch)
            .send()
            .await
            .map_err(|e| InvalidationError::Api(DisplayErrorContext(&e).to_string()))?;

        let invalidation = response
            .invalidation()
            .ok_or(InvalidationError::MissingInvalidation)?;

        Ok(invalidation.id().to_string())
    }
}
