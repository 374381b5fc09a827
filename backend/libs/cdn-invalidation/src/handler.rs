//! Invalidation request handler

use crate::api::{InvalidationApi, InvalidationRequest};
use crate::config::{InvalidationConfig, DISTRIBUTION_ID_VAR};
use crate::helpers::{caller_reference, resolve_paths};
use crate::response::InvocationResult;
use crate::{InvalidationError, InvocationEvent, Result};
use chrono::Local;
use tracing::{error, info, warn};

/// Successful invalidation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidationOutcome {
    pub invalidation_id: String,
    /// Paths as submitted
    pub paths: Vec<String>,
}

/// Handles one invocation: resolve config, resolve paths, call the CDN API
pub struct InvalidationHandler<A> {
    config: InvalidationConfig,
    api: A,
}

impl<A: InvalidationApi> InvalidationHandler<A> {
    pub fn new(config: InvalidationConfig, api: A) -> Self {
        Self { config, api }
    }

    /// Run one invocation and map the outcome to a response
    ///
    /// Never fails: every error becomes a 400 or 500 response.
    pub async fn handle(&self, event: &InvocationEvent) -> InvocationResult {
        let result = self.invalidate(event).await;

        match &result {
            Err(err) if err.is_operational() => {
                error!(error = %err, "Error creating invalidation");
            }
            Err(err) => warn!("{}", err),
            Ok(_) => {}
        }

        InvocationResult::from(result)
    }

    /// Request an invalidation for the paths named by `event`
    pub async fn invalidate(&self, event: &InvocationEvent) -> Result<InvalidationOutcome> {
        let distribution_id = self
            .config
            .distribution_id()
            .ok_or(InvalidationError::MissingConfiguration(DISTRIBUTION_ID_VAR))?;

        let paths = resolve_paths(event)?;
        let request = InvalidationRequest::new(
            distribution_id,
            paths.clone(),
            caller_reference(Local::now().naive_local()),
        );

        let invalidation_id = self.api.create_invalidation(request).await?;

        info!(
            distribution_id = %distribution_id,
            invalidation_id = %invalidation_id,
            path_count = paths.len(),
            "Cache invalidation initiated"
        );

        Ok(InvalidationOutcome {
            invalidation_id,
            paths,
        })
    }
}
