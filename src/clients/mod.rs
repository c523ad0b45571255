//! Clients for the hosted auth and database services.

use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

pub mod auth_client;
pub mod db_client;

pub use auth_client::{HttpIdentityProvider, IdentityProvider};
pub use db_client::{ForumTopicSource, RestForumTopicSource};

pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create HTTP client")
});
