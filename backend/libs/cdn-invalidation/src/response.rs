//! Mapping of invalidation outcomes into the function's response shape

use crate::{InvalidationError, InvalidationOutcome, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const SUCCESS_MESSAGE: &str = "Cache invalidation initiated successfully";

/// Response returned to the Lambda runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult {
    pub status_code: u16,
    /// Serialized JSON
    pub body: String,
}

impl InvocationResult {
    pub fn success(outcome: &InvalidationOutcome) -> Self {
        Self {
            status_code: 200,
            body: json!({
                "message": SUCCESS_MESSAGE,
                "invalidationId": outcome.invalidation_id,
                "paths": outcome.paths,
            })
            .to_string(),
        }
    }

    /// Body is the JSON-encoded error description
    pub fn failure(err: &InvalidationError) -> Self {
        let message = if err.is_operational() {
            format!("Error creating invalidation: {}", err)
        } else {
            err.to_string()
        };

        Self {
            status_code: err.status_code(),
            body: Value::String(message).to_string(),
        }
    }
}

impl From<Result<InvalidationOutcome>> for InvocationResult {
    fn from(result: Result<InvalidationOutcome>) -> Self {
        match result {
            Ok(outcome) => Self::success(&outcome),
            Err(err) => Self::failure(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_body() {
        let outcome = InvalidationOutcome {
            invalidation_id: "ABC123".to_string(),
            paths: vec!["/index.html".to_string()],
        };
        let result = InvocationResult::from(Ok::<_, InvalidationError>(outcome));

        assert_eq!(result.status_code, 200);
        let body: Value = serde_json::from_str(&result.body).unwrap();
        assert_eq!(body["message"], SUCCESS_MESSAGE);
        assert_eq!(body["invalidationId"], "ABC123");
        assert_eq!(body["paths"], json!(["/index.html"]));
    }

    #[test]
    fn test_configuration_failure_body() {
        let result = InvocationResult::failure(&InvalidationError::MissingConfiguration(
            "DISTRIBUTION_ID",
        ));

        assert_eq!(result.status_code, 400);
        assert_eq!(
            result.body,
            "\"DISTRIBUTION_ID environment variable not set\""
        );
    }

    #[test]
    fn test_operational_failure_body() {
        let outcome: Result<InvalidationOutcome> = Err(InvalidationError::Api(
            "AccessDenied: \"not authorized\"".to_string(),
        ));
        let result = InvocationResult::from(outcome);

        assert_eq!(result.status_code, 500);
        let body: String = serde_json::from_str(&result.body).unwrap();
        assert_eq!(
            body,
            "Error creating invalidation: AccessDenied: \"not authorized\""
        );
    }

    #[test]
    fn test_serializes_with_lambda_field_names() {
        let result = InvocationResult {
            status_code: 200,
            body: "{}".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({"statusCode": 200, "body": "{}"})
        );
    }
}
