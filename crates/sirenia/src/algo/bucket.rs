use crate::graph::{Edge, Node, Size};

/// Space-partitioning layout supplied by the caller.
///
/// The engine owns the placement strategy entirely; it is expected to overwrite node positions
/// (nested nodes included, if it chooses) and must not fail on well-formed input.
pub trait BucketLayout {
    fn layout(&self, nodes: &mut [Node], edges: &[Edge], viewport: Size);
}

impl<F> BucketLayout for F
where
    F: Fn(&mut [Node], &[Edge], Size),
{
    fn layout(&self, nodes: &mut [Node], edges: &[Edge], viewport: Size) {
        self(nodes, edges, viewport)
    }
}
