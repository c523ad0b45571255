//! Forum domain logic.

pub mod collation;
pub mod topics;

pub use topics::{DEFAULT_TOPIC, TopicSummarizer, summarize};
