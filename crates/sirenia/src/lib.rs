#![forbid(unsafe_code)]

//! Headless layout for hierarchical, weighted graphs.
//!
//! `sirenia` assigns 2D positions to the top-level nodes of a containment hierarchy so the
//! graph can be drawn as a node-link diagram. Four modes are available:
//!
//! - [`LayoutMode::Raster`]: a square-ish grid in input order;
//! - [`LayoutMode::Ring`]: the first node centered, the rest on a circle;
//! - [`LayoutMode::Spectral`]: an embedding along the low-frequency eigenvectors of the
//!   normalized group Laplacian (see [`laplacian`] and [`algo::spectral`]);
//! - [`LayoutMode::Bucket`]: delegated to a caller-supplied [`BucketLayout`] engine.
//!
//! Layout only ever writes [`Node::position`]; nodes and edges are otherwise left alone.

pub mod algo;
pub mod error;
pub mod graph;
pub mod laplacian;
pub mod matrix;

pub use algo::bucket::BucketLayout;
pub use algo::{LayoutMode, RasterOptions, RingOptions, SpectralOptions};
pub use error::{Error, Result};
pub use graph::{Edge, Node, NodeId, Point, Size};
pub use laplacian::{NodeIndex, build_laplacian};
pub use matrix::Matrix;

/// Layout entry point. Holds the bucket engine used by [`LayoutMode::Bucket`].
#[derive(Debug, Clone, Default)]
pub struct Layouter<B> {
    bucket: B,
}

impl<B: BucketLayout> Layouter<B> {
    pub fn new(bucket: B) -> Self {
        Self { bucket }
    }

    pub fn bucket(&self) -> &B {
        &self.bucket
    }

    /// Runs exactly one layout strategy over `nodes`.
    ///
    /// Raster, ring and bucket layouts cannot fail. Spectral layout returns an error for
    /// malformed input (unknown endpoints, duplicate ids, bad weights) and for numerical
    /// failures; too-small or degenerate graphs are handled without an error.
    pub fn layout(&self, nodes: &mut [Node], edges: &[Edge], mode: &LayoutMode) -> Result<()> {
        match mode {
            LayoutMode::Raster(opts) => algo::raster::layout(nodes, opts),
            LayoutMode::Ring(opts) => algo::ring::layout(nodes, opts),
            LayoutMode::Spectral(opts) => algo::spectral::layout(nodes, edges, opts)?,
            LayoutMode::Bucket { viewport } => self.bucket.layout(nodes, edges, *viewport),
        }
        Ok(())
    }
}
