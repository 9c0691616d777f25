use sirenia::algo::{raster, spectral};
use sirenia::{Edge, Error, Node, NodeId, Point, RasterOptions, SpectralOptions};

const RADIUS: f64 = 600.0;

fn node(id: u64) -> Node {
    Node::new(NodeId(id))
}

fn group(id: u64, sub_nodes: Vec<Node>) -> Node {
    Node::with_sub_nodes(NodeId(id), sub_nodes)
}

fn edge(owner: u64, target: u64, weight: f64) -> Edge {
    Edge::new(NodeId(owner), NodeId(target), weight)
}

fn positions(nodes: &[Node]) -> Vec<Point> {
    nodes.iter().map(|n| n.position).collect()
}

fn raster_positions(nodes: &[Node]) -> Vec<Point> {
    let mut expected = nodes.to_vec();
    raster::layout(&mut expected, &RasterOptions::default());
    positions(&expected)
}

fn assert_on_circle_or_origin(nodes: &[Node]) {
    for n in nodes {
        let p = n.position;
        assert!(p.x.is_finite() && p.y.is_finite(), "node {}: {p:?}", n.id);
        let r = p.length();
        assert!(
            r < 1e-9 || (r - RADIUS).abs() < 1e-6,
            "node {} at distance {r}",
            n.id
        );
    }
}

#[test]
fn single_node_is_left_untouched() {
    let mut nodes = vec![node(1)];
    nodes[0].position = Point::new(7.0, -7.0);

    spectral::layout(&mut nodes, &[], &SpectralOptions::default()).expect("layout");

    assert_eq!(nodes[0].position, Point::new(7.0, -7.0));
}

#[test]
fn empty_input_is_a_no_op() {
    let mut nodes: Vec<Node> = Vec::new();
    spectral::layout(&mut nodes, &[], &SpectralOptions::default()).expect("layout");
    assert!(nodes.is_empty());
}

#[test]
fn isolated_group_sends_every_node_to_the_raster() {
    let mut nodes = vec![node(1), node(2), node(3), node(4), node(5)];
    for n in &mut nodes {
        n.position = Point::new(-1.0, -1.0);
    }
    // Group 5 has no cross-group edges; everything else is well connected.
    let edges = vec![
        edge(1, 2, 1.0),
        edge(2, 3, 1.0),
        edge(3, 4, 1.0),
        edge(4, 1, 1.0),
        edge(1, 3, 2.0),
    ];

    spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).expect("layout");

    assert_eq!(positions(&nodes), raster_positions(&nodes));
}

#[test]
fn group_with_only_internal_edges_is_degenerate() {
    let mut nodes = vec![
        group(1, vec![node(11), node(12)]),
        node(2),
        node(3),
    ];
    let edges = vec![edge(11, 12, 4.0), edge(2, 3, 1.0)];

    spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).expect("layout");

    assert_eq!(
        positions(&nodes),
        vec![
            Point::new(0.0, 0.0),
            Point::new(150.0, 0.0),
            Point::new(0.0, 150.0),
        ]
    );
    // Nested nodes are never positioned by the spectral path.
    assert_eq!(nodes[0].sub_nodes[0].position, Point::ORIGIN);
}

#[test]
fn fallback_uses_the_configured_raster_spacing() {
    let mut nodes = vec![node(1), node(2), node(3)];
    let opts = SpectralOptions {
        fallback: RasterOptions { cell_spacing: 40.0 },
        ..SpectralOptions::default()
    };

    spectral::layout(&mut nodes, &[], &opts).expect("layout");

    assert_eq!(
        positions(&nodes),
        vec![
            Point::new(0.0, 0.0),
            Point::new(40.0, 0.0),
            Point::new(0.0, 40.0),
        ]
    );
}

#[test]
fn two_connected_nodes_fall_back_to_raster() {
    let mut nodes = vec![node(1), node(2)];
    let edges = vec![edge(1, 2, 5.0)];

    spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).expect("layout");

    assert_eq!(
        positions(&nodes),
        vec![Point::new(0.0, 0.0), Point::new(150.0, 0.0)]
    );
}

#[test]
fn two_clusters_land_on_opposite_sides() {
    // Two heavy triangles joined by a light bridge between 3 and 4.
    let mut nodes: Vec<Node> = (1..=6).map(node).collect();
    let edges = vec![
        edge(1, 2, 10.0),
        edge(2, 3, 10.0),
        edge(3, 1, 10.0),
        edge(4, 5, 10.0),
        edge(5, 6, 10.0),
        edge(6, 4, 10.0),
        edge(3, 4, 1.0),
    ];

    spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).expect("layout");

    for n in &nodes {
        assert!(
            (n.position.length() - RADIUS).abs() < 1e-6,
            "node {} off the circle: {:?}",
            n.id,
            n.position
        );
    }
    let left = nodes[0].position.x.signum();
    for n in &nodes[..3] {
        assert_eq!(n.position.x.signum(), left, "node {}", n.id);
    }
    for n in &nodes[3..] {
        assert_eq!(n.position.x.signum(), -left, "node {}", n.id);
    }
}

#[test]
fn star_center_sits_at_the_origin() {
    let mut nodes: Vec<Node> = (1..=5).map(node).collect();
    let edges = vec![
        edge(1, 2, 1.0),
        edge(1, 3, 1.0),
        edge(1, 4, 1.0),
        edge(1, 5, 1.0),
    ];

    spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).expect("layout");

    assert!(nodes[0].position.length() < 1e-6, "{:?}", nodes[0].position);
    assert_on_circle_or_origin(&nodes);
}

#[test]
fn block_diagonal_pairs_stay_together() {
    let mut nodes = vec![node(1), node(2), node(3), node(4)];
    let edges = vec![edge(1, 2, 1.0), edge(3, 4, 1.0)];

    spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).expect("layout");

    assert_on_circle_or_origin(&nodes);
    let [a, b, c, d] = [0, 1, 2, 3].map(|i| nodes[i].position);
    assert_eq!(a, b);
    assert_eq!(c, d);
    assert!((a.x - RADIUS).abs() < 1e-9 && a.y.abs() < 1e-9, "{a:?}");
    assert!((c.x + RADIUS).abs() < 1e-9 && c.y.abs() < 1e-9, "{c:?}");
}

#[test]
fn components_are_spread_evenly_around_the_circle() {
    let mut nodes: Vec<Node> = (1..=7).map(node).collect();
    let edges = vec![
        edge(1, 4, 1.0),
        edge(4, 7, 2.0),
        edge(2, 5, 1.0),
        edge(3, 6, 3.0),
    ];

    spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).expect("layout");

    let step = std::f64::consts::TAU / 3.0;
    let expected = |c: f64| Point::new(RADIUS * (step * c).cos(), RADIUS * (step * c).sin());
    for (i, c) in [(0, 0.0), (3, 0.0), (6, 0.0), (1, 1.0), (4, 1.0), (2, 2.0), (5, 2.0)] {
        let p = nodes[i].position;
        let e = expected(c);
        assert!(
            (p.x - e.x).abs() < 1e-9 && (p.y - e.y).abs() < 1e-9,
            "node {}: {p:?} != {e:?}",
            nodes[i].id
        );
    }
}

#[test]
fn groups_are_embedded_through_their_nested_edges() {
    let mut nodes = vec![
        group(1, vec![node(11)]),
        group(2, vec![node(21), group(22, vec![node(220)])]),
        group(3, vec![node(31)]),
        node(4),
    ];
    let edges = vec![
        edge(11, 220, 2.0),
        edge(21, 31, 1.0),
        edge(31, 4, 3.0),
        edge(4, 11, 1.0),
        edge(21, 22, 100.0),
    ];

    spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).expect("layout");

    assert_on_circle_or_origin(&nodes);
    assert_eq!(nodes[1].sub_nodes[1].sub_nodes[0].position, Point::ORIGIN);
}

#[test]
fn display_radius_is_configurable() {
    let mut nodes: Vec<Node> = (1..=4).map(node).collect();
    let edges = vec![
        edge(1, 2, 1.0),
        edge(2, 3, 2.0),
        edge(3, 4, 1.0),
        edge(4, 1, 2.0),
    ];
    let opts = SpectralOptions {
        display_radius: 10.0,
        ..SpectralOptions::default()
    };

    spectral::layout(&mut nodes, &edges, &opts).expect("layout");

    for n in &nodes {
        let r = n.position.length();
        assert!(r < 1e-9 || (r - 10.0).abs() < 1e-9, "node {}: {r}", n.id);
    }
}

#[test]
fn unknown_endpoint_is_an_error_and_leaves_positions_alone() {
    let mut nodes = vec![node(1), node(2), node(3)];
    let edges = vec![edge(1, 2, 1.0), edge(2, 77, 1.0)];

    let err = spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).unwrap_err();

    assert!(matches!(err, Error::MissingEndpoint { node_id, .. } if node_id == NodeId(77)));
    assert!(!err.is_numerical());
    assert!(nodes.iter().all(|n| n.position == Point::ORIGIN));
}

#[test]
fn vanishing_degrees_are_a_numerical_error() {
    let mut nodes: Vec<Node> = (1..=3).map(node).collect();
    for n in &mut nodes {
        n.position = Point::new(5.0, 5.0);
    }
    let edges = vec![edge(1, 2, 1e-320), edge(2, 3, 1e-320), edge(3, 1, 1e-320)];

    let err = spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).unwrap_err();

    assert!(matches!(err, Error::SingularDegreeMatrix));
    assert!(err.is_numerical());
    assert!(nodes.iter().all(|n| n.position == Point::new(5.0, 5.0)));
}

#[test]
fn overflowing_degrees_are_a_numerical_error() {
    let mut nodes: Vec<Node> = (1..=3).map(node).collect();
    let edges = vec![edge(1, 2, 1e308), edge(2, 3, 1e308), edge(3, 1, 1e308)];

    let err = spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).unwrap_err();

    assert!(err.is_numerical(), "{err:?}");
    assert!(nodes.iter().all(|n| n.position == Point::ORIGIN));
}

#[test]
fn non_finite_weight_is_an_error() {
    let mut nodes = vec![node(1), node(2), node(3)];
    let edges = vec![edge(1, 2, f64::NAN)];

    let err = spectral::layout(&mut nodes, &edges, &SpectralOptions::default()).unwrap_err();

    assert!(matches!(err, Error::InvalidWeight { edge_index: 0, .. }));
}
