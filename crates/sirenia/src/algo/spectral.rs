//! Spectral placement of top-level groups.
//!
//! The group Laplacian `L` is normalized as `N = D^-1/2 * L * D^-1/2` (with `D` its diagonal),
//! `N` is scaled to unit Frobenius norm and fully eigen-decomposed. The eigenvalues of a
//! normalized Laplacian lie in `[0, 2]`; the smallest one belongs to the trivial direction
//! `D^1/2 * 1`, so the two eigenvectors just above it become the X and Y axes. Each node's
//! `(x, y)` pair is then projected onto a circle of `display_radius`.
//!
//! Graphs that cannot be embedded (fewer than three groups, or any group without
//! cross-group weight) are laid out by [`raster`](super::raster) instead.
//!
//! A disconnected group graph has one zero eigenvalue per component, and the eigenvectors of
//! that repeated zero only tell components apart. Such graphs skip the decomposition: every
//! component gets its own point on the display circle, evenly spaced by angle.

use std::f64::consts::TAU;

use nalgebra::linalg::SymmetricEigen;
use nalgebra::{DMatrix, DVector, Dyn};

use crate::algo::{SpectralOptions, raster};
use crate::error::{Error, Result};
use crate::graph::{Edge, Node, Point};
use crate::laplacian::{build_laplacian, connected_groups, isolated_groups};

/// Embedding vectors shorter than this have no usable direction.
const ZERO_LENGTH: f64 = 1e-9;

/// Relative slack for eigenvalues of `D^-1` that round to just below zero.
const NEGATIVE_EIGENVALUE_SLACK: f64 = 1e-12;

/// The X/Y axes need eigenvectors with at least this many components.
const MIN_EMBEDDED_GROUPS: usize = 3;

pub fn layout(nodes: &mut [Node], edges: &[Edge], opts: &SpectralOptions) -> Result<()> {
    if nodes.len() < 2 {
        tracing::info!(nodes = nodes.len(), "not enough nodes to lay out");
        return Ok(());
    }

    let laplacian = build_laplacian(nodes, edges)?;

    let isolated = isolated_groups(&laplacian);
    if !isolated.is_empty() {
        tracing::debug!(
            isolated = ?isolated.iter().map(|&i| nodes[i].id).collect::<Vec<_>>(),
            "groups without cross-group edges; falling back to raster layout"
        );
        raster::layout(nodes, &opts.fallback);
        return Ok(());
    }

    let components = connected_groups(&laplacian);
    if components.len() > 1 {
        tracing::debug!(
            components = components.len(),
            "disconnected groups; placing each component on its own point"
        );
        place_components(nodes, &components, opts.display_radius);
        return Ok(());
    }

    if nodes.len() < MIN_EMBEDDED_GROUPS {
        tracing::debug!(
            nodes = nodes.len(),
            "too few groups for a two-axis embedding; falling back to raster layout"
        );
        raster::layout(nodes, &opts.fallback);
        return Ok(());
    }

    let l = laplacian.to_dmatrix();
    let degree = DMatrix::from_diagonal(&l.diagonal());
    let degree_inv = degree.try_inverse().ok_or(Error::SingularDegreeMatrix)?;
    let s = principal_sqrt(degree_inv, opts)?;

    let normalized = (&s * &l * &s).normalize();
    let eigen = symmetric_eigen(normalized, opts)?;

    let ranked = rank_descending(&eigen.eigenvalues);
    let x_axis = eigen.eigenvectors.column(ranked[ranked.len() - 2]);
    let y_axis = eigen.eigenvectors.column(ranked[ranked.len() - 3]);
    tracing::debug!(
        spectrum = ?eigen.eigenvalues.as_slice(),
        x_axis = ranked[ranked.len() - 2],
        y_axis = ranked[ranked.len() - 3],
        "spectral embedding"
    );

    let mut positions = Vec::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        let raw = Point::new(x_axis[i], y_axis[i]);
        let len = raw.length();
        if !len.is_finite() {
            return Err(Error::NonFiniteEmbedding { node_id: node.id });
        }
        positions.push(if len < ZERO_LENGTH {
            Point::ORIGIN
        } else {
            let scale = opts.display_radius / len;
            Point::new(raw.x * scale, raw.y * scale)
        });
    }

    for (node, position) in nodes.iter_mut().zip(positions) {
        node.position = position;
    }
    Ok(())
}

fn place_components(nodes: &mut [Node], components: &[Vec<usize>], radius: f64) {
    let step = TAU / components.len() as f64;
    for (c, component) in components.iter().enumerate() {
        let angle = step * c as f64;
        let position = Point::new(radius * angle.cos(), radius * angle.sin());
        for &i in component {
            nodes[i].position = position;
        }
    }
}

fn symmetric_eigen(m: DMatrix<f64>, opts: &SpectralOptions) -> Result<SymmetricEigen<f64, Dyn>> {
    let dimension = m.nrows();
    SymmetricEigen::try_new(m, opts.eigen_tolerance, opts.max_eigen_iterations)
        .ok_or(Error::EigenSolverDidNotConverge { dimension })
}

/// Principal square root of a symmetric positive semi-definite matrix, `V * sqrt(Λ) * V^T`.
fn principal_sqrt(m: DMatrix<f64>, opts: &SpectralOptions) -> Result<DMatrix<f64>> {
    let eigen = symmetric_eigen(m, opts)?;
    let slack = NEGATIVE_EIGENVALUE_SLACK * eigen.eigenvalues.amax().max(1.0);
    if eigen.eigenvalues.iter().any(|&v| !v.is_finite() || v < -slack) {
        return Err(Error::NoPrincipalSquareRoot);
    }

    let roots = eigen.eigenvalues.map(|v| v.max(0.0).sqrt());
    let v = &eigen.eigenvectors;
    Ok(v * DMatrix::from_diagonal(&roots) * v.transpose())
}

/// Eigenvalue indices, largest value first.
fn rank_descending(eigenvalues: &DVector<f64>) -> Vec<usize> {
    let mut ranked: Vec<(usize, f64)> = eigenvalues.iter().copied().enumerate().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.into_iter().map(|(i, _)| i).collect()
}
