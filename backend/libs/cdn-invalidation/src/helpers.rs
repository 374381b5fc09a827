//! Helper functions for building invalidation requests

use crate::{InvocationEvent, Result};
use chrono::NaiveDateTime;

/// Paths invalidated when the event does not name any
pub const DEFAULT_PATHS: [&str; 3] = [
    "/legal-calculator-widget.js",
    "/documentation.html",
    "/index.html",
];

/// Prefix of every caller reference sent to CloudFront
pub const CALLER_REFERENCE_PREFIX: &str = "cache-invalidation-";

/// Default path list as owned strings
pub fn default_paths() -> Vec<String> {
    DEFAULT_PATHS.iter().map(|p| p.to_string()).collect()
}

/// Resolve the path list for an event
///
/// A `paths` key is used verbatim, including an empty list. Events without
/// one (including non-object events) fall back to [`DEFAULT_PATHS`].
///
/// # Example
///
/// ```
/// use cdn_invalidation::helpers::resolve_paths;
/// use serde_json::json;
///
/// let paths = resolve_paths(&json!({"paths": ["/a.js", "/a.js"]})).unwrap();
/// assert_eq!(paths, vec!["/a.js", "/a.js"]);
///
/// let paths = resolve_paths(&json!({})).unwrap();
/// assert_eq!(paths.len(), 3);
/// ```
pub fn resolve_paths(event: &InvocationEvent) -> Result<Vec<String>> {
    match event.get("paths") {
        Some(paths) => Ok(serde_json::from_value(paths.clone())?),
        None => Ok(default_paths()),
    }
}

/// Build the caller reference for a request issued at `now`
///
/// Two requests within the same microsecond share a reference.
///
/// # Example
///
/// ```
/// use cdn_invalidation::helpers::caller_reference;
/// use chrono::NaiveDate;
///
/// let now = NaiveDate::from_ymd_opt(2024, 10, 18)
///     .unwrap()
///     .and_hms_micro_opt(9, 15, 2, 123456)
///     .unwrap();
/// assert_eq!(caller_reference(now), "cache-invalidation-2024-10-18T09:15:02.123456");
/// ```
pub fn caller_reference(now: NaiveDateTime) -> String {
    format!(
        "{}{}",
        CALLER_REFERENCE_PREFIX,
        now.format("%Y-%m-%dT%H:%M:%S%.6f")
    )
}
