//! Mock BabelNet API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the BabelNet
//! HTTP API for integration and end-to-end testing. Unlike wiremock which
//! mocks at the HTTP level per-test, this server answers from a small
//! knowledge base, enabling realistic lookup chains (word -> synset -> edges).
//!
//! # Example
//!
//! ```ignore
//! use babelnet::mock_server::MockServer;
//! use babelnet::{BabelNetClient, WordQuery};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = BabelNetClient::builder("test-key")
//!         .base_url(server.url())
//!         .build()
//!         .unwrap();
//!
//!     // Server comes with default fixtures
//!     let ids = client.get_synset_ids(&WordQuery::new("dog")).await.unwrap();
//!     assert!(ids.contains(&"bn:00015267n".to_string()));
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures, CANINE, DOG, DOG_VERB, HOT_DOG};
pub use handlers::INVALID_KEY_MESSAGE;
pub use server::MockServer;
pub use state::{MockState, WordFilter};
