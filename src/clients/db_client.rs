//! Privileged forum data access
//!
//! Queries the database REST gateway with the service-role key, which
//! bypasses row-level security. Transient failures are retried.

use async_trait::async_trait;
use reqwest::StatusCode;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::warn;

use super::HTTP_CLIENT;
use crate::core::config::AppConfig;
use crate::core::models::MessageTopicTag;
use crate::errors::PortalError;

const MESSAGES_TABLE: &str = "messages";
const FORUM_MESSAGE_TYPE: &str = "forum";
const MAX_ATTEMPTS: usize = 3;
const RETRY_BASE_MS: u64 = 2;
const RETRY_FACTOR_MS: u64 = 50;

#[async_trait]
pub trait ForumTopicSource: Send + Sync {
    /// Topic tags of every forum message in `room_id` that has a topic.
    async fn forum_topic_tags(&self, room_id: &str) -> Result<Vec<MessageTopicTag>, PortalError>;
}

pub struct RestForumTopicSource {
    base_url: String,
    service_role_key: String,
}

impl RestForumTopicSource {
    pub fn new(base_url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            service_role_key: service_role_key.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(&config.supabase_url, &config.supabase_service_role_key)
    }

    pub fn topics_url(&self, room_id: &str) -> String {
        format!(
            "{}/rest/v1/{MESSAGES_TABLE}?select=topic,is_pinned&room_id=eq.{}&message_type=eq.{FORUM_MESSAGE_TYPE}&topic=not.is.null",
            self.base_url,
            urlencoding::encode(room_id)
        )
    }

    async fn fetch_once(&self, url: &str) -> Result<Vec<MessageTopicTag>, FetchError> {
        let response = HTTP_CLIENT
            .get(url)
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .send()
            .await
            .map_err(|e| FetchError::Transient(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = PortalError::Database(format!("{status}: {body}"));
            return if is_transient(status) {
                Err(FetchError::Transient(err))
            } else {
                Err(FetchError::Permanent(err))
            };
        }

        response
            .json::<Vec<MessageTopicTag>>()
            .await
            .map_err(|e| FetchError::Permanent(PortalError::Parse(e.to_string())))
    }
}

enum FetchError {
    Transient(PortalError),
    Permanent(PortalError),
}

impl FetchError {
    fn into_inner(self) -> PortalError {
        match self {
            FetchError::Transient(e) | FetchError::Permanent(e) => e,
        }
    }
}

fn is_transient(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

#[async_trait]
impl ForumTopicSource for RestForumTopicSource {
    async fn forum_topic_tags(&self, room_id: &str) -> Result<Vec<MessageTopicTag>, PortalError> {
        let url = self.topics_url(room_id);
        let url = url.as_str();
        // 100 ms, then 200 ms, each scaled by jitter.
        let strategy = ExponentialBackoff::from_millis(RETRY_BASE_MS)
            .factor(RETRY_FACTOR_MS)
            .map(jitter)
            .take(MAX_ATTEMPTS - 1);

        let action = move || async move {
            self.fetch_once(url).await.inspect_err(|e| {
                if let FetchError::Transient(err) = e {
                    warn!(room_id = %room_id, error = %err, "Transient forum query failure");
                }
            })
        };

        RetryIf::spawn(strategy, action, |e: &FetchError| {
            matches!(e, FetchError::Transient(_))
        })
        .await
        .map_err(FetchError::into_inner)
    }
}
