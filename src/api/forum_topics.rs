//! `GET /api/rooms/{roomId}/forum/topics`

use serde_json::Value;
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::clients::{ForumTopicSource, IdentityProvider};
use crate::core::models::TopicsResponse;
use crate::forum::TopicSummarizer;

/// Lists the forum topics of a room for an authenticated caller.
///
/// Any identity failure is answered with 401. Data-access failures are
/// logged and answered with a generic 500.
#[tracing::instrument(level = "info", skip_all, fields(room_id = %room_id))]
pub async fn handle_forum_topics(
    room_id: &str,
    headers: &Value,
    summarizer: &TopicSummarizer,
    identity: &dyn IdentityProvider,
    source: &dyn ForumTopicSource,
) -> Value {
    let Some(token) = parsing::access_token(headers) else {
        info!("Request without credentials");
        return helpers::err_response(401, "Unauthorized");
    };

    let user = match identity.current_user(&token).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            info!("Access token rejected");
            return helpers::err_response(401, "Unauthorized");
        }
        Err(e) => {
            warn!(error = %e, "Identity lookup failed");
            return helpers::err_response(401, "Unauthorized");
        }
    };

    let tags = match source.forum_topic_tags(room_id).await {
        Ok(tags) => tags,
        Err(e) => {
            error!(user_id = %user.id, error = %e, "Failed to load forum topics");
            return helpers::err_response(500, "Failed to load forum topics");
        }
    };

    let topics = summarizer.summarize(&tags);
    info!(
        user_id = %user.id,
        tag_count = tags.len(),
        topic_count = topics.len(),
        "Forum topics listed"
    );

    helpers::ok_json(&TopicsResponse { topics })
}
