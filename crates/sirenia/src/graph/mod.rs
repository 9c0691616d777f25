use serde::{Deserialize, Serialize};

/// Stable node identity (the caller's token id).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Viewport size handed to the bucket engine.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Written by every layout mode; nothing else about a node is touched.
    #[serde(default)]
    pub position: Point,
    #[serde(default)]
    pub sub_nodes: Vec<Node>,
    /// Outermost ancestor in the containment hierarchy. Roots point at themselves.
    pub top_level_ancestor_id: NodeId,
}

impl Node {
    /// A root node with no children, sitting at the origin.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            position: Point::ORIGIN,
            sub_nodes: Vec::new(),
            top_level_ancestor_id: id,
        }
    }

    /// A root node that adopts `sub_nodes`. Every descendant is re-pointed at `id` as its
    /// top-level ancestor, so nested groups can be assembled bottom-up.
    pub fn with_sub_nodes(id: NodeId, sub_nodes: Vec<Node>) -> Self {
        let mut node = Self::new(id);
        node.sub_nodes = sub_nodes;
        let ancestor = node.id;
        for child in &mut node.sub_nodes {
            child.set_top_level_ancestor(ancestor);
        }
        node
    }

    fn set_top_level_ancestor(&mut self, ancestor: NodeId) {
        self.top_level_ancestor_id = ancestor;
        for child in &mut self.sub_nodes {
            child.set_top_level_ancestor(ancestor);
        }
    }

    pub fn is_top_level(&self) -> bool {
        self.top_level_ancestor_id == self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub owner_id: NodeId,
    pub target_id: NodeId,
    weight: f64,
}

impl Edge {
    pub fn new(owner_id: NodeId, target_id: NodeId, weight: f64) -> Self {
        Self {
            owner_id,
            target_id,
            weight,
        }
    }

    /// Strength of the relationship. Expected to be finite and non-negative.
    pub fn weight(&self) -> f64 {
        self.weight
    }
}
