//! Nodes and their serialized view.

use serde::{Deserialize, Serialize};
use vsm_geometry::Point;

use crate::Tag;

/// A node in the tree.
///
/// Identity (`tag`), placement and lineage are fixed at creation. Only the
/// display name and the children list change afterwards, and only through
/// [`crate::NodeTree`].
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub(crate) tag: Tag,
    pub(crate) position: Point,
    pub(crate) layer: u32,
    pub(crate) poly_order: u32,
    pub(crate) parent: Option<Tag>,
    pub(crate) children: Vec<Tag>,
    pub(crate) name: String,
}

impl Node {
    /// A seed node at the origin.
    pub(crate) fn seed(tag: Tag, poly_order: u32) -> Self {
        Self {
            name: tag.to_string(),
            tag,
            position: Point::ORIGIN,
            layer: 0,
            poly_order,
            parent: None,
            children: Vec::new(),
        }
    }

    /// A freshly placed child of `parent`.
    pub(crate) fn child_of(parent: &Node, ordinal: u32, position: Point, poly_order: u32) -> Self {
        let tag = parent.tag.child(ordinal);
        Self {
            name: tag.to_string(),
            tag,
            position,
            layer: parent.layer + 1,
            poly_order,
            parent: Some(parent.tag.clone()),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &Tag {
        &self.tag
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Depth from the seed (seed = 0).
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Polygon order used when this node is expanded without an explicit count.
    pub fn poly_order(&self) -> u32 {
        self.poly_order
    }

    pub fn parent(&self) -> Option<&Tag> {
        self.parent.as_ref()
    }

    /// Child tags in generation order.
    pub fn children(&self) -> &[Tag] {
        &self.children
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Serializable snapshot of this node.
    pub fn view(&self) -> NodeView {
        NodeView::from(self)
    }
}

/// Wire shape of a node. Field names and order are a compatibility
/// contract with existing consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    pub tag: Tag,
    pub position: Point,
    pub layer: u32,
    pub poly_order: u32,
    pub parent: Option<Tag>,
    pub name: String,
    pub children: Vec<Tag>,
}

impl From<&Node> for NodeView {
    fn from(node: &Node) -> Self {
        Self {
            tag: node.tag.clone(),
            position: node.position,
            layer: node.layer,
            poly_order: node.poly_order,
            parent: node.parent.clone(),
            name: node.name.clone(),
            children: node.children.clone(),
        }
    }
}
