//! Identity collaborator
//!
//! Resolves a caller's access token into a user via the hosted auth service.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::HTTP_CLIENT;
use crate::core::config::AppConfig;
use crate::core::models::CallerIdentity;
use crate::errors::PortalError;

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Returns `Ok(None)` when the token is missing, expired or rejected.
    async fn current_user(&self, access_token: &str)
    -> Result<Option<CallerIdentity>, PortalError>;
}

/// Auth service client using the public (anon) API key.
pub struct HttpIdentityProvider {
    base_url: String,
    anon_key: String,
}

impl HttpIdentityProvider {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            anon_key: anon_key.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.supabase_url, &config.supabase_anon_key)
    }

    fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.base_url)
    }
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    async fn current_user(
        &self,
        access_token: &str,
    ) -> Result<Option<CallerIdentity>, PortalError> {
        let response = HTTP_CLIENT
            .get(self.user_url())
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK => {
                let user: CallerIdentity = response.json().await?;
                Ok(Some(user))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(None),
            status => Err(PortalError::Unauthorized(format!(
                "auth service returned {status}"
            ))),
        }
    }
}
