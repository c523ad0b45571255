use std::env;

use crate::errors::PortalError;
use crate::forum::topics::DEFAULT_TOPIC;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_service_role_key: String,
    pub forum_default_topic: String,
}

impl AppConfig {
    /// # Errors
    ///
    /// Returns `PortalError::Config` naming the first missing variable.
    pub fn from_env() -> Result<Self, PortalError> {
        let supabase_url = required("SUPABASE_URL")?;
        Ok(Self {
            supabase_url: supabase_url.trim_end_matches('/').to_string(),
            supabase_anon_key: required("SUPABASE_ANON_KEY")?,
            supabase_service_role_key: required("SUPABASE_SERVICE_ROLE_KEY")?,
            forum_default_topic: env::var("FORUM_DEFAULT_TOPIC")
                .unwrap_or_else(|_| DEFAULT_TOPIC.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, PortalError> {
    env::var(name).map_err(|e| PortalError::Config(format!("{name}: {e}")))
}
