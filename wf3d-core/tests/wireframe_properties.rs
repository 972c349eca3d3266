use std::collections::HashSet;

use nalgebra::{Point2, Point3};
use wf3d_core::{Axis, Node, Transform, Wireframe, WireframeError};

const EPS: f64 = 1e-9;

fn assert_nodes_close(actual: &Wireframe, expected: &Wireframe) {
    assert_eq!(actual.node_count(), expected.node_count());
    for (i, (a, e)) in actual.nodes().zip(expected.nodes()).enumerate() {
        let dist = (a.position() - e.position()).norm();
        assert!(dist < 1e-6, "node {i}: {a} != {e}");
    }
}

fn sample() -> Wireframe {
    let mut wf = Wireframe::cube(Point3::new(50.0, 50.0, 50.0), 200.0);
    wf.add_nodes([(13.0, -7.5, 91.25), (0.0, 0.0, 0.0)]);
    wf
}

#[test]
fn rotation_about_centroid_is_reversible() {
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        for theta in [0.1, -0.75, 1.0, 3.0, 10.0] {
            let original = sample();
            let mut wf = original.clone();
            let center = wf.find_center().unwrap();
            wf.rotate(axis, center, theta);
            wf.rotate(axis, center, -theta);
            assert_nodes_close(&wf, &original);
        }
    }
}

#[test]
fn rotation_center_is_fixed_point() {
    let mut wf = sample();
    let pivot = wf.node(3).unwrap();
    for axis in [Axis::X, Axis::Y, Axis::Z] {
        wf.rotate(axis, pivot.position(), 0.9);
        let moved = wf.node(3).unwrap();
        assert!(!moved.x.is_nan() && !moved.y.is_nan() && !moved.z.is_nan());
        assert!((moved.position() - pivot.position()).norm() < EPS);
    }
}

#[test]
fn rotation_preserves_distance_to_center() {
    let mut wf = sample();
    let center = Point3::new(1.0, 2.0, 3.0);
    let before: Vec<f64> = wf.nodes().map(|n| (n.position() - center).norm()).collect();
    wf.rotate_x(center, 0.3);
    wf.rotate_y(center, -1.2);
    wf.rotate_z(center, 2.5);
    for (node, d) in wf.nodes().zip(before) {
        assert!(((node.position() - center).norm() - d).abs() < 1e-6);
    }
}

#[test]
fn find_center_is_mean() {
    let mut wf = Wireframe::new();
    wf.add_nodes([
        (0.0, 0.0, 0.0),
        (2.0, 0.0, 0.0),
        (1.0, 3.0, 0.0),
        (1.0, -1.0, 0.0),
    ]);
    assert_eq!(wf.find_center(), Ok(Point3::new(1.0, 0.5, 0.0)));
}

#[test]
fn scale_about_origin_scales_z_too() {
    let mut wf = Wireframe::new();
    wf.add_nodes([(1.0, 1.0, 5.0)]);
    let mut half = wf.clone();

    wf.scale(Point2::origin(), 2.0);
    assert_eq!(wf.node(0), Some(Node::new(2.0, 2.0, 10.0)));

    half.scale(Point2::origin(), 0.5);
    assert_eq!(half.node(0), Some(Node::new(0.5, 0.5, 2.5)));
}

#[test]
fn scale_z_ignores_center() {
    let mut wf = Wireframe::new();
    wf.add_nodes([(10.0, 10.0, 10.0)]);
    wf.scale(Point2::new(10.0, 10.0), 3.0);
    assert_eq!(wf.node(0), Some(Node::new(10.0, 10.0, 30.0)));
}

#[test]
fn translation_matrix_and_inverse() {
    let mut wf = Wireframe::new();
    wf.add_nodes([(0.0, 0.0, 0.0)]);
    wf.transform(&Transform::translation_matrix(5.0, 0.0, 0.0)).unwrap();
    assert_eq!(wf.node(0), Some(Node::new(5.0, 0.0, 0.0)));
    assert_eq!(wf.node_matrix()[(0, 3)], 1.0);

    let original = sample();
    let mut moved = original.clone();
    moved.transform(&Transform::translation_matrix(3.5, -2.0, 11.0)).unwrap();
    moved.transform(&Transform::translation_matrix(-3.5, 2.0, -11.0)).unwrap();
    assert_nodes_close(&moved, &original);
}

#[test]
fn builtin_matrices_keep_w_at_one() {
    let mut wf = sample();
    for m in [
        Transform::translation_matrix(-4.0, 9.0, 1.5),
        Transform::scale_matrix(1.25, 0.75, 2.0),
        Transform::rotate_x_matrix(0.1),
        Transform::rotate_y_matrix(-0.1),
        Transform::rotate_z_matrix(2.0),
    ] {
        wf.transform(&m).unwrap();
        assert!(wf.node_matrix().column(3).iter().all(|w| *w == 1.0));
    }
    assert_eq!(wf.node_count(), 10);
}

#[test]
fn reversed_edges_track_node_motion() {
    let mut wf = Wireframe::new();
    wf.add_nodes([(0.0, 0.0, 0.0), (1.0, 1.0, 1.0)]);
    wf.add_edges([(0, 1), (1, 0)]).unwrap();
    assert_eq!(wf.edge_count(), 2);
    assert_ne!(wf.edges()[0], wf.edges()[1]);

    wf.translate(Axis::X, 4.0);
    let (first_start, _) = wf.endpoints(&wf.edges()[0]).unwrap();
    let (_, second_stop) = wf.endpoints(&wf.edges()[1]).unwrap();
    assert_eq!(first_start, Node::new(4.0, 0.0, 0.0));
    assert_eq!(second_stop, Node::new(4.0, 0.0, 0.0));

    wf.transform(&Transform::translation_matrix(0.0, 1.0, 0.0)).unwrap();
    let (first_start, _) = wf.endpoints(&wf.edges()[0]).unwrap();
    assert_eq!(first_start, Node::new(4.0, 1.0, 0.0));
}

#[test]
fn cube_topology() {
    let cube = Wireframe::cube(Point3::origin(), 1.0);
    assert_eq!(cube.node_count(), 8);
    assert_eq!(cube.edge_count(), 12);

    let pairs: HashSet<_> = cube.edges().iter().map(|e| e.unordered()).collect();
    assert_eq!(pairs.len(), 12);

    // Every edge is axis-aligned with unit length
    for (a, b) in cube.segments() {
        let d = b.position() - a.position();
        assert!((d.norm() - 1.0).abs() < EPS);
        assert_eq!(d.iter().filter(|c| c.abs() > EPS).count(), 1);
    }

    // Each corner meets exactly three edges
    let mut degree = [0; 8];
    for e in cube.edges() {
        degree[e.start] += 1;
        degree[e.stop] += 1;
    }
    assert!(degree.iter().all(|d| *d == 3));
}

#[test]
fn edge_out_of_range_is_reported() {
    let mut wf = Wireframe::new();
    assert_eq!(
        wf.add_edges([(0, 1)]),
        Err(WireframeError::NodeIndexOutOfRange {
            start: 0,
            stop: 1,
            node_count: 0
        })
    );
    wf.add_nodes([(0.0, 0.0, 0.0), (1.0, 0.0, 0.0)]);
    assert!(wf.add_edges([(0, 1)]).is_ok());
}

#[test]
fn invalid_axis_is_reported() {
    let err = "q".parse::<Axis>().unwrap_err();
    assert_eq!(err, WireframeError::InvalidAxis("q".to_string()));
    assert_eq!(err.to_string(), "invalid axis 'q', expected one of x, y, z");
}
