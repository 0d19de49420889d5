//! VSM Network Server
//!
//! HTTP surface over a single shared [`vsm_tree::TreeStore`].
//!
//! # Routes
//!
//! - `GET /nodes`: every node, keyed by tag
//! - `POST /nodes`: create the seed (conflict once it exists)
//! - `GET|DELETE /nodes/{tag}`: fetch or delete a node
//! - `PUT /nodes/{tag}/name`: rename a node
//! - `POST /nodes/children/{tag}`: expand a node, body `{"count": n}` optional
//! - `GET /nodes/{tag}/subtree`, `GET /nodes/{tag}/style`
//! - `GET /nearest?x=..&y=..`, `GET /view`, `GET /health`
//!
//! Tags in paths use `|` instead of `/`.
//!
//! # Usage
//!
//! ```ignore
//! let store = Arc::new(TreeStore::seeded(TreeConfig::default())?);
//! VsmServer::new(store).serve(addr).await?;
//! ```

mod config;
mod error;
mod server;

pub use config::{ServerConfig, DEFAULT_API_PORT};
pub use error::{ApiError, Error, Result};
pub use server::VsmServer;
