//! Forum topic navigation list.
//!
//! Reduces the per-message topic tags of a room into one entry per topic:
//! pinned topics first, then Turkish alphabetical order, with the default
//! topic always promoted to the front when it exists.

use std::collections::HashMap;

use crate::core::models::{MessageTopicTag, TopicSummary};
use crate::forum::collation::compare_tr;

/// Catch-all discussion label surfaced first in every room.
pub const DEFAULT_TOPIC: &str = "Genel";

/// Summarizer bound to the topic that is always listed first.
#[derive(Debug, Clone)]
pub struct TopicSummarizer {
    default_topic: String,
}

impl Default for TopicSummarizer {
    fn default() -> Self {
        Self::new(DEFAULT_TOPIC)
    }
}

impl TopicSummarizer {
    /// Creates a summarizer promoting `default_topic`; a blank label disables
    /// promotion.
    pub fn new(default_topic: impl Into<String>) -> Self {
        Self {
            default_topic: default_topic.into(),
        }
    }

    /// The label promoted to the front of every summary.
    pub fn default_topic(&self) -> &str {
        &self.default_topic
    }

    #[must_use]
    pub fn summarize(&self, tags: &[MessageTopicTag]) -> Vec<TopicSummary> {
        summarize(tags, &self.default_topic)
    }
}

/// Whitespace, including the byte-order mark, does not make a label.
fn is_blank(label: &str) -> bool {
    label
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

/// Builds the ordered, de-duplicated topic list for `tags`.
///
/// Tags without a topic, or with a blank one, are ignored. A topic is pinned
/// if any of its tags is pinned. A blank `default_topic` disables promotion.
#[must_use]
pub fn summarize(tags: &[MessageTopicTag], default_topic: &str) -> Vec<TopicSummary> {
    let mut summaries: Vec<TopicSummary> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tag in tags {
        let Some(topic) = tag.topic.as_deref() else {
            continue;
        };
        if is_blank(topic) {
            continue;
        }

        match index.get(topic) {
            Some(&pos) => summaries[pos].is_pinned |= tag.is_pinned,
            None => {
                index.insert(topic, summaries.len());
                summaries.push(TopicSummary {
                    topic: topic.to_string(),
                    is_pinned: tag.is_pinned,
                });
            }
        }
    }

    // Stable: labels are unique here, so ties never actually occur.
    summaries.sort_by(|a, b| {
        b.is_pinned
            .cmp(&a.is_pinned)
            .then_with(|| compare_tr(&a.topic, &b.topic))
    });

    if !is_blank(default_topic)
        && let Some(pos) = summaries.iter().position(|s| s.topic == default_topic)
    {
        let general = summaries.remove(pos);
        summaries.insert(0, general);
    }

    summaries
}
