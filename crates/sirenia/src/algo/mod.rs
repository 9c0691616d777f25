pub mod bucket;
pub mod raster;
pub mod ring;
pub mod spectral;

use serde::{Deserialize, Serialize};

use crate::graph::Size;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LayoutMode {
    /// Square-ish grid in input order.
    Raster(RasterOptions),
    /// First node centered, the rest on a circle around it.
    Ring(RingOptions),
    /// Normalized-Laplacian embedding of the top-level groups.
    Spectral(SpectralOptions),
    /// Handed to the caller-provided [`bucket::BucketLayout`] engine.
    Bucket { viewport: Size },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterOptions {
    /// Distance between neighbouring grid cells, on both axes.
    pub cell_spacing: f64,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            cell_spacing: 150.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingOptions {
    pub radius: f64,
    /// Constant rotation (radians) added to every angle on the ring.
    pub angle_bias: f64,
}

impl Default for RingOptions {
    fn default() -> Self {
        Self {
            radius: 200.0,
            angle_bias: -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpectralOptions {
    /// Every embedded node is pushed onto a circle of this radius.
    pub display_radius: f64,
    /// Convergence threshold for the symmetric eigen solver.
    pub eigen_tolerance: f64,
    /// Iteration cap for the eigen solver; `0` lets it run until convergence.
    pub max_eigen_iterations: usize,
    /// Used when the graph is too small or degenerate for an embedding.
    pub fallback: RasterOptions,
}

impl Default for SpectralOptions {
    fn default() -> Self {
        Self {
            display_radius: 600.0,
            eigen_tolerance: f64::EPSILON,
            max_eigen_iterations: 10_000,
            fallback: RasterOptions::default(),
        }
    }
}
