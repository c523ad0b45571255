//! API Lambda handler - thin router that delegates to route handlers.
//!
//! This module handles:
//! - Configuration and collaborator setup per request
//! - Route and method matching
//! - Request correlation ids

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::{forum_topics, helpers, parsing};
use crate::clients::{
    ForumTopicSource, HttpIdentityProvider, IdentityProvider, RestForumTopicSource,
};
use crate::core::config::AppConfig;
use crate::forum::TopicSummarizer;

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never returns `Err`; every failure is mapped to an HTTP error response.
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!("api_request", request_id = %request_id);

    let response = async {
        let config = match AppConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                error!("Config error: {}", e);
                return helpers::err_response(500, "Server configuration error");
            }
        };

        let summarizer = TopicSummarizer::new(config.forum_default_topic.clone());
        let identity = HttpIdentityProvider::from_config(&config);
        let source = RestForumTopicSource::from_config(&config);

        route(&event.payload, &summarizer, &identity, &source).await
    }
    .instrument(span)
    .await;

    Ok(helpers::with_request_id(response, &request_id))
}

/// Dispatches a gateway payload to the matching route.
pub async fn route(
    payload: &Value,
    summarizer: &TopicSummarizer,
    identity: &dyn IdentityProvider,
    source: &dyn ForumTopicSource,
) -> Value {
    let path = parsing::request_path(payload).unwrap_or("");
    let method = parsing::request_method(payload).unwrap_or("GET");
    info!(path = %path, method = %method, "API request");

    let Some(segment) = parsing::match_forum_topics(path) else {
        return helpers::err_response(404, "Not found");
    };

    if !method.eq_ignore_ascii_case("GET") {
        return helpers::err_response(405, "Method not allowed");
    }

    let room_id = match parsing::decode_room_id(segment) {
        Ok(id) => id,
        Err(e) => {
            info!(error = %e, "Rejected room id");
            return helpers::err_response(400, "Invalid room id");
        }
    };

    let empty = json!({});
    let headers = payload.get("headers").unwrap_or(&empty);

    forum_topics::handle_forum_topics(&room_id, headers, summarizer, identity, source).await
}
