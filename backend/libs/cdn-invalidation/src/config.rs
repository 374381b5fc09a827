//! Invalidation function configuration

use serde::Deserialize;
use std::ffi::OsString;

/// Environment variable holding the target CloudFront distribution
pub const DISTRIBUTION_ID_VAR: &str = "DISTRIBUTION_ID";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvalidationConfig {
    /// CloudFront distribution to invalidate (`DISTRIBUTION_ID`)
    distribution_id: Option<String>,
}

impl InvalidationConfig {
    pub fn new(distribution_id: Option<String>) -> Self {
        Self { distribution_id }
    }

    /// Load configuration from the process environment, seeding it from `.env` if present
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenv::dotenv().ok();
        Self::from_vars(utf8_vars(std::env::vars_os()))
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> Result<Self, envy::Error>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars)
    }

    /// Distribution id, if configured and non-empty
    pub fn distribution_id(&self) -> Option<&str> {
        self.distribution_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// Drop variables whose name or value is not valid UTF-8
fn utf8_vars<I>(vars: I) -> impl Iterator<Item = (String, String)>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
}
