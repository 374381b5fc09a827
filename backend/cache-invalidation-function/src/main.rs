use cdn_invalidation::{
    CloudFrontInvalidationApi, InvalidationApi, InvalidationConfig, InvalidationHandler,
    InvocationResult,
};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::Instrument;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch adds its own timestamps
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_ansi(false)
                .without_time()
                .with_target(false),
        )
        .init();

    tracing::info!("Starting cache-invalidation-function");

    let config = InvalidationConfig::from_env()?;
    if config.distribution_id().is_none() {
        tracing::warn!("DISTRIBUTION_ID is not set; invocations will be rejected");
    }

    let api = CloudFrontInvalidationApi::from_env().await;
    let handler = Arc::new(InvalidationHandler::new(config, api));

    run(service_fn(move |event: LambdaEvent<Value>| {
        let handler = Arc::clone(&handler);
        async move { function_handler(&*handler, event).await }
    }))
    .await
}

/// Lambda entry point; the context only feeds the log span
async fn function_handler<A: InvalidationApi>(
    handler: &InvalidationHandler<A>,
    event: LambdaEvent<Value>,
) -> Result<InvocationResult, Error> {
    let (payload, context) = event.into_parts();
    let span = tracing::info_span!("invocation", request_id = %context.request_id);

    Ok(handler.handle(&payload).instrument(span).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use cdn_invalidation::{InvalidationError, InvalidationRequest};
    use lambda_runtime::Context;
    use serde_json::json;

    struct StaticApi(Result<&'static str, &'static str>);

    #[async_trait]
    impl InvalidationApi for StaticApi {
        async fn create_invalidation(
            &self,
            _request: InvalidationRequest,
        ) -> cdn_invalidation::Result<String> {
            self.0
                .map(str::to_string)
                .map_err(|e| InvalidationError::Api(e.to_string()))
        }
    }

    fn handler(api: StaticApi) -> InvalidationHandler<StaticApi> {
        InvalidationHandler::new(
            InvalidationConfig::new(Some("EDFDVBD6EXAMPLE".to_string())),
            api,
        )
    }

    #[tokio::test]
    async fn test_function_handler_success() {
        let handler = handler(StaticApi(Ok("I2J3J7XYZLIAK3")));
        let event = LambdaEvent::new(json!({}), Context::default());

        let result = function_handler(&handler, event).await.unwrap();

        assert_eq!(result.status_code, 200);
        let body: Value = serde_json::from_str(&result.body).unwrap();
        assert_eq!(body["invalidationId"], "I2J3J7XYZLIAK3");
    }

    #[tokio::test]
    async fn test_function_handler_never_returns_err() {
        let handler = handler(StaticApi(Err("InternalError")));
        let event = LambdaEvent::new(json!({"paths": ["/x"]}), Context::default());

        let result = function_handler(&handler, event).await.unwrap();

        assert_eq!(result.status_code, 500);
        assert!(result.body.contains("InternalError"));
    }

    #[test]
    fn test_response_shape() {
        let result = InvocationResult {
            status_code: 400,
            body: "\"DISTRIBUTION_ID environment variable not set\"".to_string(),
        };
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["statusCode"], 400);
        assert!(value["body"].as_str().unwrap().contains("DISTRIBUTION_ID"));
    }
}
