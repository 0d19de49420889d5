//! Tree store facade.
//!
//! [`TreeStore`] is the one entry point the HTTP and rendering layers use.
//! It owns a single [`NodeTree`] behind a read-write lock:
//!
//! - every mutation (seed, expand, delete, rename) holds the write lock for
//!   its whole duration, so writes are serialized and an expansion's batch
//!   becomes visible to readers all at once
//! - reads take the read lock and return owned [`NodeView`]s, so a snapshot
//!   never changes after it is returned
//!
//! No operation blocks on I/O; each finishes in time proportional to the
//! polygon order or the tree size.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use vsm_geometry::{Bounds, Point};

use crate::{Error, LayoutEngine, NodeTree, NodeView, Result, Tag, TreeConfig};

/// Marker size and color for drawing a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub marker_size: f64,
    /// `#rrggbb`
    pub color: String,
    pub rgba: [f32; 4],
}

/// Single shared owner of a node tree.
#[derive(Debug)]
pub struct TreeStore {
    tree: RwLock<NodeTree>,
    layout: LayoutEngine,
    config: TreeConfig,
}

impl TreeStore {
    /// Create a store with an empty, unseeded tree.
    pub fn new(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            tree: RwLock::new(NodeTree::new()),
            layout: LayoutEngine::new(config.scale),
            config,
        })
    }

    /// Create a store and its seed node.
    pub fn seeded(config: TreeConfig) -> Result<Self> {
        let store = Self::new(config)?;
        store.create_seed()?;
        Ok(store)
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    // The tree never holds partial state across a panic: every mutation
    // validates before it writes.
    fn read(&self) -> RwLockReadGuard<'_, NodeTree> {
        self.tree.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, NodeTree> {
        self.tree.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Create the seed node. Fails with `AlreadyInitialized` after the first call.
    pub fn create_seed(&self) -> Result<NodeView> {
        let mut tree = self.write();
        let seed = tree
            .create_root(self.config.root_tag.clone(), self.config.default_poly_order)
            .map_err(|e| {
                tracing::warn!(error = %e, "seed creation rejected");
                e
            })?;
        tracing::info!(tag = %seed.tag(), poly_order = seed.poly_order(), "created seed node");
        Ok(seed.view())
    }

    /// Snapshot of every node, keyed by tag.
    pub fn get_all_nodes(&self) -> BTreeMap<Tag, NodeView> {
        self.read()
            .nodes()
            .map(|n| (n.tag().clone(), n.view()))
            .collect()
    }

    pub fn get_node(&self, tag: &str) -> Result<NodeView> {
        let tag = Tag::parse(tag)?;
        self.read()
            .get(tag.as_str())
            .map(|n| n.view())
            .ok_or_else(|| Error::NotFound(tag.into_string()))
    }

    /// Expand `tag` with `count` sides, or the node's stored polygon order.
    ///
    /// Returns only newly created nodes; re-expanding a complete node
    /// returns an empty list.
    pub fn expand_node(&self, tag: &str, count: Option<u32>) -> Result<Vec<NodeView>> {
        let tag = Tag::parse(tag)?;
        if let Some(order) = count {
            self.config.check_order(order).map_err(|e| {
                tracing::warn!(tag = %tag, order, "expansion rejected: {e}");
                e
            })?;
        }

        let mut tree = self.write();
        let created = self.layout.expand(&mut tree, tag.as_str(), count)?;
        Ok(created.iter().map(|n| n.view()).collect())
    }

    /// Delete a leaf node. Its tag is never issued again.
    pub fn delete_node(&self, tag: &str) -> Result<NodeView> {
        let tag = Tag::parse(tag)?;
        let removed = self.write().delete(tag.as_str()).map_err(|e| {
            if let Error::HasChildren { children, .. } = &e {
                tracing::warn!(tag = %tag, children, "refusing to delete non-leaf");
            }
            e
        })?;
        tracing::debug!(tag = %tag, "deleted node");
        Ok(removed.view())
    }

    /// Change a node's display name.
    pub fn rename_node(&self, tag: &str, name: &str) -> Result<NodeView> {
        let tag = Tag::parse(tag)?;
        let mut tree = self.write();
        let node = tree.rename(tag.as_str(), name)?;
        Ok(node.view())
    }

    /// A node and all its descendants, depth-first.
    pub fn subtree(&self, tag: &str) -> Result<Vec<NodeView>> {
        let tag = Tag::parse(tag)?;
        let tree = self.read();
        let nodes = tree.subtree(tag.as_str())?;
        Ok(nodes.into_iter().map(|n| n.view()).collect())
    }

    /// Node closest to `point`, with its distance.
    pub fn nearest_node(&self, point: Point) -> Option<(NodeView, f64)> {
        self.read().nearest(point).map(|(n, d)| (n.view(), d))
    }

    /// Drawing style for a node, scaled by its layer.
    pub fn node_style(&self, tag: &str) -> Result<NodeStyle> {
        let layer = self.get_node(tag)?.layer;
        let scale = &self.config.scale;
        let color = scale.color(layer);
        Ok(NodeStyle {
            marker_size: scale.marker_size(layer),
            color: color.to_hex(),
            rgba: color.to_array(),
        })
    }

    /// View rectangle fitting every node.
    pub fn view_bounds(&self) -> Bounds {
        Bounds::view_of(self.read().nodes().map(|n| n.position()))
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
