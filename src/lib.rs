//! MBDF-IT Portal - forum topic API for regulatory dossier-sharing rooms.
//!
//! This crate implements the serverless API function that lists the forum
//! topics of a room:
//! 1. The caller's access token is resolved through the hosted auth service
//! 2. Forum message topics are read with a privileged database client
//! 3. Topics are merged and ordered for the room's navigation list
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda behind an API gateway for request handling
//! - The hosted database's REST and auth endpoints via reqwest
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```
//! use mbdf_portal::core::models::MessageTopicTag;
//! use mbdf_portal::forum::TopicSummarizer;
//!
//! let tags = vec![
//!     MessageTopicTag::new("Genel", false),
//!     MessageTopicTag::new("Güvenlik", true),
//!     MessageTopicTag::new("Genel", false),
//! ];
//!
//! let topics = TopicSummarizer::default().summarize(&tags);
//! assert_eq!(topics[0].topic, "Genel");
//! assert_eq!(topics[1].topic, "Güvenlik");
//! assert!(topics[1].is_pinned);
//! ```

// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod forum;

pub use errors::PortalError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// The level is taken from `RUST_LOG`, defaulting to `info`. Calling this
/// more than once is harmless; later calls leave the first subscriber in
/// place.
///
/// # Example
///
/// ```
/// mbdf_portal::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
