use std::f64::consts::TAU;

use crate::algo::RingOptions;
use crate::graph::{Node, Point};

/// Places the first node at the origin and spreads the others evenly on a circle around it.
///
/// Node `i >= 1` sits at angle `TAU / (n - 1) * i + angle_bias`.
pub fn layout(nodes: &mut [Node], opts: &RingOptions) {
    let Some((center, rest)) = nodes.split_first_mut() else {
        return;
    };
    center.position = Point::ORIGIN;

    if rest.is_empty() {
        return;
    }
    let step = TAU / rest.len() as f64;
    for (i, node) in rest.iter_mut().enumerate() {
        let angle = step * (i + 1) as f64 + opts.angle_bias;
        node.position = Point::new(opts.radius * angle.cos(), opts.radius * angle.sin());
    }
}
