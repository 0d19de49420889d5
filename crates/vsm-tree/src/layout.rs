//! Expansion: placing a node's children on a regular polygon.
//!
//! Expanding a node at layer `n` with order `k` computes the `k` vertices of
//! a regular polygon of radius `edge_length(n)` around the node, then
//! creates child `i` (1-based) at vertex `i - 1`. The `i`-th child always
//! lands on the `i`-th vertex, counter-clockwise from angle 0.
//!
//! Slots whose tag already exists are skipped, which makes expansion
//! idempotent: expanding the same node twice with the same order creates
//! nothing the second time. Slots of deleted children stay empty, since
//! their tags are retired.

use vsm_geometry::{Polygon, ScaleConfig, MIN_POLY_ORDER};

use crate::{Error, Node, NodeTree, Result};

/// Places children around a parent and registers them in a [`NodeTree`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutEngine {
    scale: ScaleConfig,
}

impl LayoutEngine {
    pub fn new(scale: ScaleConfig) -> Self {
        Self { scale }
    }

    pub fn scale(&self) -> &ScaleConfig {
        &self.scale
    }

    /// Candidate children of `parent` for a polygon of `order` sides.
    ///
    /// Pure: nothing is inserted and existing tags are not checked.
    pub fn place(&self, parent: &Node, order: u32) -> Result<Vec<Node>> {
        if order < MIN_POLY_ORDER {
            return Err(Error::InvalidOrder {
                order,
                min: MIN_POLY_ORDER,
                max: u32::MAX,
            });
        }
        let radius = self.scale.edge_length(parent.layer());
        let polygon = Polygon::new(parent.position(), radius, order)?;

        Ok((1..=order)
            .zip(polygon)
            .map(|(ordinal, vertex)| Node::child_of(parent, ordinal, vertex, order))
            .collect())
    }

    /// Expand `parent_tag` with `order` sides, or the parent's stored
    /// polygon order when `order` is `None`.
    ///
    /// Returns only the nodes created by this call, already inserted and
    /// linked under the parent.
    pub fn expand(
        &self,
        tree: &mut NodeTree,
        parent_tag: &str,
        order: Option<u32>,
    ) -> Result<Vec<Node>> {
        let parent = tree
            .get(parent_tag)
            .ok_or_else(|| Error::NotFound(parent_tag.to_string()))?;
        let order = order.unwrap_or(parent.poly_order());

        let fresh: Vec<Node> = self
            .place(parent, order)?
            .into_iter()
            .filter(|candidate| !tree.is_issued(candidate.tag().as_str()))
            .collect();

        if fresh.is_empty() {
            tracing::debug!(parent = parent_tag, order, "expansion already complete");
            return Ok(fresh);
        }

        tree.insert_children(parent_tag, fresh.clone())?;
        tracing::debug!(
            parent = parent_tag,
            order,
            created = fresh.len(),
            "expanded node"
        );
        Ok(fresh)
    }
}
