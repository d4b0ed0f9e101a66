//! BabelNet API client library.
//!
//! A Rust library for the BabelNet HTTP API: word senses, synset (concept)
//! identifiers, and semantic-graph edges. Each remote operation is a method
//! on [`BabelNetClient`] performing a single authenticated GET request.
//!
//! # Quick Start
//!
//! ```no_run
//! use babelnet::{BabelNetClient, WordQuery};
//!
//! #[tokio::main]
//! async fn main() -> babelnet::Result<()> {
//!     // Create client from environment variables
//!     let client = BabelNetClient::from_env()?;
//!
//!     println!("BabelNet {:?}", client.get_version().await?);
//!
//!     // Synsets denoted by an English word
//!     let ids = client.get_synset_ids(&WordQuery::new("dog").with_lang("EN")).await?;
//!
//!     // Details of the first one
//!     if let Some(id) = ids.first() {
//!         let synset = client.get_synset_by_id(id, Some("EN")).await?;
//!         println!("{:?}", synset.gloss_in("EN"));
//!
//!         for edge in client.get_edges(id).await? {
//!             println!("{} -> {}", edge.relation(), edge.target);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Default parameters
//!
//! Optional arguments left unset fall back to defaults configured on the
//! client. A default applies to every operation declaring a parameter of
//! that name:
//!
//! ```no_run
//! use babelnet::{BabelNetClient, WordQuery};
//!
//! # async fn example() -> babelnet::Result<()> {
//! let client = BabelNetClient::builder("your-api-key")
//!     .default_param("lang", "EN")
//!     .build()?;
//!
//! // Sends lang=EN
//! let senses = client.get_senses(&WordQuery::new("dog")).await?;
//!
//! // An explicit argument always wins
//! let senses = client.get_senses(&WordQuery::new("cane").with_lang("IT")).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `BABELNET_API_KEY` (required) - Your BabelNet API key
//! - `BABELNET_API_URL` (optional) - Base URL (defaults to `https://babelnet.io/v4/`)
//! - `BABELNET_ACCEPT_INVALID_CERTS` (optional) - Skip TLS verification

mod client;
mod endpoints;
mod error;
mod models;
mod params;

pub mod cli;
pub mod mcp;
pub mod output;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{BabelNetClient, BabelNetClientBuilder};
pub use endpoints::{GET_EDGES, GET_SENSES, GET_SYNSET, GET_SYNSET_IDS, GET_VERSION};
pub use error::{BabelNetError, Result};
pub use params::{DefaultParams, Endpoint, ParamSpec, QueryParams};

// Re-export models
pub use models::{
    // Synset types
    Category,
    Example,
    Gloss,
    Image,
    Synset,
    SynsetRef,
    // Sense types
    Sense,
    WordQuery,
    // Edge types
    Edge,
    Pointer,
};
