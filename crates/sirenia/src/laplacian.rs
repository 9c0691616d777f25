//! Reduction of a hierarchical, weighted graph to a Laplacian over its top-level groups.
//!
//! Only edges that cross group boundaries count: both endpoints are mapped to their top-level
//! ancestors and edges whose ancestors coincide (including self-loops) are dropped. The
//! surviving weights are aggregated symmetrically, so row `i` of the result holds the weighted
//! degree of group `i` on the diagonal and the negated coupling to every other group elsewhere.

use std::collections::VecDeque;

use indexmap::IndexMap;
use rustc_hash::{FxBuildHasher, FxHashMap};

use crate::error::{Error, Result};
use crate::graph::{Edge, Node, NodeId};
use crate::matrix::Matrix;

/// Flattened, read-only view of a node hierarchy, keyed by node id.
///
/// Built once per layout call by a breadth-first walk, so iteration yields the top-level nodes
/// first, then their children, and so on.
#[derive(Debug, Clone)]
pub struct NodeIndex<'a> {
    nodes: IndexMap<NodeId, &'a Node, FxBuildHasher>,
}

impl<'a> NodeIndex<'a> {
    pub fn build(top_level: &'a [Node]) -> Result<Self> {
        let mut nodes: IndexMap<NodeId, &'a Node, FxBuildHasher> = IndexMap::default();
        let mut queue: VecDeque<&'a Node> = top_level.iter().collect();

        while let Some(node) = queue.pop_front() {
            queue.extend(node.sub_nodes.iter());
            if nodes.insert(node.id, node).is_some() {
                return Err(Error::DuplicateNode { node_id: node.id });
            }
        }

        Ok(Self { nodes })
    }

    pub fn get(&self, id: NodeId) -> Option<&'a Node> {
        self.nodes.get(&id).copied()
    }

    pub fn top_level_ancestor(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(|n| n.top_level_ancestor_id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Node> + '_ {
        self.nodes.values().copied()
    }
}

/// Builds the group Laplacian for `nodes` (the top-level list) and `edges`.
///
/// The result is `nodes.len()` square and indexed in the order of `nodes`.
pub fn build_laplacian(nodes: &[Node], edges: &[Edge]) -> Result<Matrix<f64>> {
    let index = NodeIndex::build(nodes)?;

    let top_level: FxHashMap<NodeId, usize> =
        nodes.iter().enumerate().map(|(i, n)| (n.id, i)).collect();
    for node in index.iter() {
        let valid = if top_level.contains_key(&node.id) {
            node.is_top_level()
        } else {
            top_level.contains_key(&node.top_level_ancestor_id)
        };
        if !valid {
            return Err(Error::UnknownAncestor {
                node_id: node.id,
                ancestor_id: node.top_level_ancestor_id,
            });
        }
    }

    let weights = aggregate_weights(&index, edges)?;

    let n = nodes.len();
    let mut matrix: Matrix<f64> = Matrix::new(n, n);
    for x in 0..n {
        for y in x..n {
            let total = weights
                .get(&(nodes[x].id, nodes[y].id))
                .copied()
                .unwrap_or(0.0);
            if x == y {
                matrix[(x, y)] = total;
            } else {
                matrix[(x, y)] = -total;
                matrix[(y, x)] = -total;
            }
        }
    }

    tracing::debug!(
        groups = n,
        indexed_nodes = index.len(),
        edges = edges.len(),
        "built group laplacian"
    );
    Ok(matrix)
}

/// Running totals keyed by (group, group). Each cross-group edge feeds both off-diagonal cells
/// and both diagonal cells.
fn aggregate_weights(
    index: &NodeIndex<'_>,
    edges: &[Edge],
) -> Result<FxHashMap<(NodeId, NodeId), f64>> {
    let mut totals: FxHashMap<(NodeId, NodeId), f64> = FxHashMap::default();

    for (edge_index, edge) in edges.iter().enumerate() {
        let weight = edge.weight();
        if !weight.is_finite() || weight < 0.0 {
            return Err(Error::InvalidWeight { edge_index, weight });
        }

        let resolve = |node_id: NodeId| {
            index
                .top_level_ancestor(node_id)
                .ok_or(Error::MissingEndpoint {
                    edge_index,
                    node_id,
                })
        };
        let owner = resolve(edge.owner_id)?;
        let target = resolve(edge.target_id)?;
        if owner == target {
            continue;
        }

        for key in [
            (owner, target),
            (target, owner),
            (owner, owner),
            (target, target),
        ] {
            *totals.entry(key).or_insert(0.0) += weight;
        }
    }

    Ok(totals)
}

/// Groups joined by cross-group weight, each listed in ascending row order. Components are
/// ordered by their first row.
pub fn connected_groups(laplacian: &Matrix<f64>) -> Vec<Vec<usize>> {
    let n = laplacian.rows();
    let mut visited = vec![false; n];
    let mut out: Vec<Vec<usize>> = Vec::new();
    let mut queue: VecDeque<usize> = VecDeque::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        visited[start] = true;
        queue.push_back(start);
        let mut component: Vec<usize> = Vec::new();

        while let Some(v) = queue.pop_front() {
            component.push(v);
            for u in 0..n {
                if !visited[u] && u != v && laplacian[(v, u)] != 0.0 {
                    visited[u] = true;
                    queue.push_back(u);
                }
            }
        }

        component.sort_unstable();
        out.push(component);
    }

    out
}

/// Rows whose diagonal is zero, i.e. groups without any cross-group weight.
pub fn isolated_groups(laplacian: &Matrix<f64>) -> Vec<usize> {
    laplacian
        .diagonal()
        .iter()
        .enumerate()
        .filter(|(_, d)| **d == 0.0)
        .map(|(i, _)| i)
        .collect()
}
