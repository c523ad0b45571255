use serde::{Deserialize, Deserializer, Serialize};

/// Topic fact carried by a single forum message.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MessageTopicTag {
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_pinned: bool,
}

impl MessageTopicTag {
    pub fn new(topic: impl Into<String>, is_pinned: bool) -> Self {
        Self {
            topic: Some(topic.into()),
            is_pinned,
        }
    }
}

/// One distinct topic in the forum navigation list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub topic: String,
    pub is_pinned: bool,
}

impl From<TopicSummary> for MessageTopicTag {
    fn from(summary: TopicSummary) -> Self {
        Self {
            topic: Some(summary.topic),
            is_pinned: summary.is_pinned,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicsResponse {
    pub topics: Vec<TopicSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CallerIdentity {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
