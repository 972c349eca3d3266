/// Wireframe model: nodes, edges and the operations that move them
use log::{debug, trace, warn};
use nalgebra::{DMatrix, Matrix4, MatrixXx4, Point2, Point3};
use std::fmt;

use crate::error::{Result, WireframeError};
use crate::geometry::{Axis, Edge, Node};

/// A set of nodes joined by edges.
///
/// Nodes are kept as one N x 4 block of homogeneous rows `(x, y, z, 1)`.
/// nalgebra stores it column-major, so each coordinate is a contiguous
/// column and [`Wireframe::transform`] is a single matrix product.
/// Edges refer to nodes by row index, so they follow every mutation.
#[derive(Debug, Clone)]
pub struct Wireframe {
    nodes: MatrixXx4<f64>,
    edges: Vec<Edge>,
}

impl Wireframe {
    pub fn new() -> Self {
        Self {
            nodes: MatrixXx4::zeros(0),
            edges: Vec::new(),
        }
    }

    /// Build the 12-edge cube spanning `origin` to `origin + size` on every axis
    pub fn cube(origin: Point3<f64>, size: f64) -> Self {
        let mut cube = Self::new();
        let offsets = [0.0, size];
        let mut corners = Vec::with_capacity(8);
        for dx in offsets {
            for dy in offsets {
                for dz in offsets {
                    corners.push((origin.x + dx, origin.y + dy, origin.z + dz));
                }
            }
        }
        cube.add_nodes(corners);

        // Indices stay below 8, no range check needed
        cube.edges.extend(
            (0..4)
                .map(|n| Edge::new(n, n + 4))
                .chain((0..8).step_by(2).map(|n| Edge::new(n, n + 1)))
                .chain([0, 1, 4, 5].into_iter().map(|n| Edge::new(n, n + 2))),
        );
        cube
    }

    pub fn node_count(&self) -> usize {
        self.nodes.nrows()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }

    pub fn node(&self, index: usize) -> Option<Node> {
        (index < self.node_count()).then(|| self.node_at(index))
    }

    fn node_at(&self, index: usize) -> Node {
        Node::new(
            self.nodes[(index, 0)],
            self.nodes[(index, 1)],
            self.nodes[(index, 2)],
        )
    }

    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.nodes
            .row_iter()
            .map(|row| Node::new(row[0], row[1], row[2]))
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Current positions of an edge's two nodes, `None` if either index
    /// is not a node of this wireframe
    pub fn endpoints(&self, edge: &Edge) -> Option<(Node, Node)> {
        Some((self.node(edge.start)?, self.node(edge.stop)?))
    }

    /// Every edge as a pair of current node positions
    pub fn segments(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        // Stored edges were range checked when added
        self.edges
            .iter()
            .map(|edge| (self.node_at(edge.start), self.node_at(edge.stop)))
    }

    /// The homogeneous coordinate block, one row per node
    pub fn node_matrix(&self) -> &MatrixXx4<f64> {
        &self.nodes
    }

    /// Append nodes in order. New nodes take the indices following the
    /// current node count.
    pub fn add_nodes<I, P>(&mut self, nodes: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Node>,
    {
        let added: Vec<Node> = nodes.into_iter().map(Into::into).collect();
        if added.is_empty() {
            return;
        }

        let start = self.node_count();
        let old = &self.nodes;
        let grown = MatrixXx4::from_fn(start + added.len(), |row, col| {
            if row < start {
                old[(row, col)]
            } else {
                added[row - start].to_homogeneous()[col]
            }
        });
        self.nodes = grown;
        debug!(
            "added {} nodes ({} total)",
            added.len(),
            self.node_count()
        );
    }

    /// Append edges between existing nodes.
    ///
    /// Every pair is checked before anything is appended, so a rejected
    /// batch leaves the edge list untouched.
    pub fn add_edges<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let node_count = self.node_count();
        let added: Vec<Edge> = edges
            .into_iter()
            .map(|(start, stop)| Edge::new(start, stop))
            .collect();

        if let Some(bad) = added
            .iter()
            .find(|e| e.start >= node_count || e.stop >= node_count)
        {
            warn!("rejecting edge {bad}: only {node_count} nodes");
            return Err(WireframeError::NodeIndexOutOfRange {
                start: bad.start,
                stop: bad.stop,
                node_count,
            });
        }

        debug!("added {} edges", added.len());
        self.edges.extend(added);
        Ok(())
    }

    /// Move every node by `distance` along `axis`
    pub fn translate(&mut self, axis: Axis, distance: f64) {
        for value in self.nodes.column_mut(axis.index()).iter_mut() {
            *value += distance;
        }
    }

    /// Arithmetic mean of all node positions
    pub fn find_center(&self) -> Result<Point3<f64>> {
        if self.is_empty() {
            return Err(WireframeError::EmptyWireframe);
        }
        Ok(Point3::new(
            self.nodes.column(0).mean(),
            self.nodes.column(1).mean(),
            self.nodes.column(2).mean(),
        ))
    }

    /// Scale x and y about `center` and z about 0
    pub fn scale(&mut self, center: Point2<f64>, factor: f64) {
        for x in self.nodes.column_mut(0).iter_mut() {
            *x = center.x + factor * (*x - center.x);
        }
        for y in self.nodes.column_mut(1).iter_mut() {
            *y = center.y + factor * (*y - center.y);
        }
        for z in self.nodes.column_mut(2).iter_mut() {
            *z *= factor;
        }
    }

    /// Rotate every node about the line through `center` parallel to `axis`.
    ///
    /// Works in polar form within the plane perpendicular to the axis. The
    /// angle is measured from the `cos` coordinate toward the `sin`
    /// coordinate: z toward y for X, x toward z for Y, x toward y for Z.
    /// For X and Y that is the opposite sense to
    /// [`Transform::rotation_matrix`](crate::Transform::rotation_matrix).
    pub fn rotate(&mut self, axis: Axis, center: Point3<f64>, radians: f64) {
        let (sin_col, cos_col) = match axis {
            Axis::X => (1, 2),
            Axis::Y => (2, 0),
            Axis::Z => (1, 0),
        };
        let (sin_center, cos_center) = (center[sin_col], center[cos_col]);

        for mut row in self.nodes.row_iter_mut() {
            let a = row[sin_col] - sin_center;
            let b = row[cos_col] - cos_center;
            let d = a.hypot(b);
            let theta = a.atan2(b) + radians;
            row[cos_col] = cos_center + d * theta.cos();
            row[sin_col] = sin_center + d * theta.sin();
        }
    }

    pub fn rotate_x(&mut self, center: Point3<f64>, radians: f64) {
        self.rotate(Axis::X, center, radians);
    }

    pub fn rotate_y(&mut self, center: Point3<f64>, radians: f64) {
        self.rotate(Axis::Y, center, radians);
    }

    pub fn rotate_z(&mut self, center: Point3<f64>, radians: f64) {
        self.rotate(Axis::Z, center, radians);
    }

    /// Multiply the node block by `matrix` (row-vector convention).
    ///
    /// Rows whose w moves away from 1 are divided through by w. If any row
    /// ends up with w = 0 the wireframe is left unchanged.
    pub fn transform(&mut self, matrix: &Matrix4<f64>) -> Result<()> {
        let mut product = &self.nodes * matrix;

        for (index, mut row) in product.row_iter_mut().enumerate() {
            let w = row[3];
            if w == 1.0 {
                continue;
            }
            if !w.is_finite() || w.abs() < f64::EPSILON {
                warn!("transform sends node {index} to infinity");
                return Err(WireframeError::DegenerateHomogeneous { index, w });
            }
            for value in row.iter_mut() {
                *value /= w;
            }
            row[3] = 1.0;
        }

        trace!("transformed {} nodes", product.nrows());
        self.nodes = product;
        Ok(())
    }

    /// [`Wireframe::transform`] for a matrix whose size is only known at runtime
    pub fn transform_dyn(&mut self, matrix: &DMatrix<f64>) -> Result<()> {
        if matrix.shape() != (4, 4) {
            return Err(WireframeError::DimensionMismatch {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        // Both sides iterate column-major
        let fixed = Matrix4::from_iterator(matrix.iter().copied());
        self.transform(&fixed)
    }
}

impl Default for Wireframe {
    fn default() -> Self {
        Self::new()
    }
}

/// Node and edge listing, one entry per line
impl fmt::Display for Wireframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---Nodes---")?;
        for (i, node) in self.nodes().enumerate() {
            writeln!(f, "{i}: {node}")?;
        }
        writeln!(f, "---Edges---")?;
        for (i, (start, stop)) in self.segments().enumerate() {
            writeln!(f, "{i}: {start} to {stop}")?;
        }
        Ok(())
    }
}
