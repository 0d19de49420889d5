//! The node store.
//!
//! [`NodeTree`] exclusively owns every node, keyed by tag. Parent and child
//! links are tags resolved through the map, never references, so the
//! ownership graph stays a flat map.
//!
//! Invariants held across every public operation:
//! - a tag is used at most once for the lifetime of the tree, deleted tags
//!   included
//! - a non-root node's parent is present when the node is inserted
//! - a node's `children` lists exactly the nodes whose `parent` is that node
//! - `layer(child) == layer(parent) + 1`
//! - a node with children is never removed

use std::collections::{BTreeMap, HashMap, HashSet};

use vsm_geometry::Point;

use crate::{Error, Node, Result, Tag};

/// Tag-keyed store of all nodes.
#[derive(Debug, Default)]
pub struct NodeTree {
    nodes: HashMap<Tag, Node>,
    /// Seed tag, set once by `create_root` and never cleared.
    seed: Option<Tag>,
    /// Tags of deleted nodes. Never reissued.
    retired: HashSet<Tag>,
}

impl NodeTree {
    /// Create an empty, unseeded tree.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            seed: None,
            retired: HashSet::new(),
        }
    }

    /// Create the seed node at the origin.
    ///
    /// Succeeds once per tree. Later calls fail with `AlreadyInitialized`,
    /// even if the seed has since been deleted.
    pub fn create_root(&mut self, tag: Tag, poly_order: u32) -> Result<&Node> {
        if let Some(seed) = &self.seed {
            return Err(Error::AlreadyInitialized(seed.to_string()));
        }
        self.seed = Some(tag.clone());
        let node = self.nodes.entry(tag.clone()).or_insert(Node::seed(tag, poly_order));
        Ok(&*node)
    }

    /// Look up a node.
    pub fn get(&self, tag: &str) -> Option<&Node> {
        self.nodes.get(tag)
    }

    /// Owned copy of every node, ordered by tag.
    pub fn get_all(&self) -> BTreeMap<Tag, Node> {
        self.nodes
            .iter()
            .map(|(tag, node)| (tag.clone(), node.clone()))
            .collect()
    }

    /// Iterate over all nodes in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.nodes.contains_key(tag)
    }

    /// Whether `tag` was ever issued: it is live or belonged to a deleted node.
    pub fn is_issued(&self, tag: &str) -> bool {
        self.contains(tag) || self.retired.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Child tags of `tag` in generation order.
    pub fn children(&self, tag: &str) -> Result<&[Tag]> {
        self.get(tag)
            .map(Node::children)
            .ok_or_else(|| Error::NotFound(tag.to_string()))
    }

    /// Insert a batch of children under `parent`, all or nothing.
    ///
    /// Every node must name `parent` as its parent, sit one layer below it,
    /// and carry a tag never issued by this tree nor repeated in the batch.
    /// Nothing is inserted unless the whole batch passes.
    pub(crate) fn insert_children(&mut self, parent: &str, batch: Vec<Node>) -> Result<()> {
        let parent_layer = self
            .get(parent)
            .map(Node::layer)
            .ok_or_else(|| Error::NotFound(parent.to_string()))?;

        let mut seen = HashSet::with_capacity(batch.len());
        for node in &batch {
            debug_assert_eq!(node.parent.as_ref().map(Tag::as_str), Some(parent));
            debug_assert_eq!(node.layer, parent_layer + 1);
            if self.is_issued(node.tag.as_str()) || !seen.insert(node.tag.as_str()) {
                return Err(Error::DuplicateTag(node.tag.to_string()));
            }
        }

        let tags: Vec<Tag> = batch.iter().map(|n| n.tag.clone()).collect();
        for node in batch {
            self.nodes.insert(node.tag.clone(), node);
        }
        if let Some(parent) = self.nodes.get_mut(parent) {
            parent.children.extend(tags);
        }
        Ok(())
    }

    /// Remove a leaf and unlink it from its parent. The tag is retired.
    pub fn delete(&mut self, tag: &str) -> Result<Node> {
        let node = self
            .get(tag)
            .ok_or_else(|| Error::NotFound(tag.to_string()))?;
        if !node.is_leaf() {
            return Err(Error::HasChildren {
                tag: tag.to_string(),
                children: node.children.len(),
            });
        }

        let node = self
            .nodes
            .remove(tag)
            .ok_or_else(|| Error::NotFound(tag.to_string()))?;
        if let Some(parent) = node.parent.as_ref().and_then(|p| self.nodes.get_mut(p.as_str())) {
            parent.children.retain(|c| c != &node.tag);
        }
        self.retired.insert(node.tag.clone());
        Ok(node)
    }

    /// Change a node's display name. The tag is untouched.
    pub fn rename(&mut self, tag: &str, name: impl Into<String>) -> Result<&Node> {
        let node = self
            .nodes
            .get_mut(tag)
            .ok_or_else(|| Error::NotFound(tag.to_string()))?;
        node.name = name.into();
        Ok(&*node)
    }

    /// `tag` and all its descendants, depth-first in generation order.
    pub fn subtree(&self, tag: &str) -> Result<Vec<&Node>> {
        let root = self
            .get(tag)
            .ok_or_else(|| Error::NotFound(tag.to_string()))?;

        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            out.push(node);
            // Reverse so the first child is visited first.
            stack.extend(
                node.children
                    .iter()
                    .rev()
                    .filter_map(|c| self.nodes.get(c.as_str())),
            );
        }
        Ok(out)
    }

    /// Node closest to `point` and its distance. Ties go to the smaller tag.
    ///
    /// Linear scan over every node.
    pub fn nearest(&self, point: Point) -> Option<(&Node, f64)> {
        self.nodes
            .values()
            .map(|n| (n, n.position.distance(&point)))
            .min_by(|(a, da), (b, db)| da.total_cmp(db).then_with(|| a.tag.cmp(&b.tag)))
    }
}
