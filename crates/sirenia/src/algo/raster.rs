use crate::algo::RasterOptions;
use crate::graph::{Node, Point};

/// Row-major grid, `ceil(sqrt(n))` cells wide, starting at the origin.
pub fn layout(nodes: &mut [Node], opts: &RasterOptions) {
    let width = columns(nodes.len());
    for (i, node) in nodes.iter_mut().enumerate() {
        let col = i % width;
        let row = i / width;
        node.position = Point::new(
            col as f64 * opts.cell_spacing,
            row as f64 * opts.cell_spacing,
        );
    }
}

/// Grid width in cells for `n` nodes (at least one).
pub fn columns(n: usize) -> usize {
    let mut width = (n as f64).sqrt().ceil() as usize;
    // Guard against float rounding on perfect squares.
    while width * width < n {
        width += 1;
    }
    while width > 1 && (width - 1) * (width - 1) >= n {
        width -= 1;
    }
    width.max(1)
}
