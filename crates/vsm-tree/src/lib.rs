//! VSM Network Node Tree
//!
//! A self-similar tree of spatial nodes. Each node is addressed by a
//! lineage-encoded [`Tag`] and placed by subdividing a regular polygon
//! around its parent.
//!
//! # Components
//!
//! - **Tag**: `0/0/1` for the seed, `parent-i` for the `i`-th child
//! - **NodeTree**: tag-keyed owner of every [`Node`]; enforces uniqueness
//!   and parent/child consistency
//! - **LayoutEngine**: computes child positions with `vsm-geometry` and
//!   registers the new nodes
//! - **TreeStore**: the facade external layers call; serializes writes and
//!   hands out owned [`NodeView`] snapshots
//!
//! # Example
//!
//! ```
//! use vsm_tree::{TreeConfig, TreeStore};
//!
//! let store = TreeStore::seeded(TreeConfig::default()).unwrap();
//! let ring = store.expand_node("0/0/1", Some(6)).unwrap();
//! assert_eq!(ring.len(), 6);
//! assert_eq!(ring[0].tag.as_str(), "0/0/1-1");
//!
//! // Expanding again adds nothing.
//! assert!(store.expand_node("0/0/1", Some(6)).unwrap().is_empty());
//! ```

mod config;
mod error;
mod layout;
mod node;
mod store;
mod tag;
mod tree;

pub use config::{TreeConfig, DEFAULT_MAX_POLY_ORDER};
pub use error::{Error, Result};
pub use layout::LayoutEngine;
pub use node::{Node, NodeView};
pub use store::{NodeStyle, TreeStore};
pub use tag::{Tag, ORDINAL_SEPARATOR};
pub use tree::NodeTree;

pub use vsm_geometry::{Bounds, Point, MIN_POLY_ORDER};
