//! CloudFront cache invalidation for Lambda
//!
//! Requests a CDN invalidation for a configured distribution and reports the
//! outcome as an HTTP-style `{statusCode, body}` response.
//!
//! # Flow
//!
//! ```text
//! event {"paths": [...]}?
//!   1. Resolve DISTRIBUTION_ID from injected config   -> 400 if missing/empty
//!   2. Use event paths verbatim, or the default list
//!   3. CreateInvalidation(distribution, paths, caller reference)
//!      ↓
//! CloudFront control plane
//!      ↓
//!   4. 200 {"message", "invalidationId", "paths"}     or 500 "Error creating invalidation: ..."
//! ```
//!
//! # Example
//!
//! ```no_run
//! use cdn_invalidation::{CloudFrontInvalidationApi, InvalidationConfig, InvalidationHandler};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = InvalidationConfig::from_env()?;
//!     let handler = InvalidationHandler::new(config, CloudFrontInvalidationApi::from_env().await);
//!
//!     let result = handler.handle(&json!({"paths": ["/index.html"]})).await;
//!     println!("{}: {}", result.status_code, result.body);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
mod error;
pub mod handler;
pub mod helpers;
pub mod response;

pub use api::{CloudFrontInvalidationApi, InvalidationApi, InvalidationRequest};
pub use config::InvalidationConfig;
pub use error::InvalidationError;
pub use handler::{InvalidationHandler, InvalidationOutcome};
pub use helpers::{caller_reference, resolve_paths, DEFAULT_PATHS};
pub use response::InvocationResult;

pub type Result<T> = std::result::Result<T, InvalidationError>;

/// Raw invocation payload; only `paths` is consulted
pub type InvocationEvent = serde_json::Value;
