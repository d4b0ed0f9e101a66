//! MCP (Model Context Protocol) server and tool types.
//!
//! This module provides an MCP server implementation for the BabelNet API,
//! allowing AI assistants to look up senses, synsets, and semantic edges.
//!
//! # Example
//!
//! ```no_run
//! use babelnet::mcp::BabelNetServer;
//!
//! # fn main() -> babelnet::Result<()> {
//! let server = BabelNetServer::from_env()?;
//! // Server can now be used with rmcp transport
//! # Ok(())
//! # }
//! ```

mod params;
mod server;

pub use params::*;
pub use server::BabelNetServer;
