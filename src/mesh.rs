use nalgebra::{Matrix3xX, Vector3};
use num::Float;
use crate::data::{LabelField, PointArray, ScalarField, LABEL_ARRAY_NAME};
use crate::error::GraphError;

/// Index of a node inside a `NodeGraph`. A `NodeIndex` can only be obtained from a
/// `NodeGraphBuilder`, which checks it against the number of nodes in the graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    fn checked(index: usize, len: usize, edge: usize) -> Result<Self, GraphError> {
        if index < len {
            Ok(NodeIndex(index))
        } else {
            Err(GraphError::EdgeOutOfRange { edge, index, len })
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

/// A line segment between two nodes. The orientation given at construction is preserved in the
/// written file.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    a: NodeIndex,
    b: NodeIndex,
}

impl Edge {
    pub fn a(&self) -> NodeIndex {
        self.a
    }

    pub fn b(&self) -> NodeIndex {
        self.b
    }

    pub fn indices(&self) -> [usize; 2] {
        [self.a.0, self.b.0]
    }
}

/// A graph of nodes in 3-D space with optional line edges and per-node point data.
///
/// The point data has at most three arrays, which are always written in the same order: the
/// primary scalar, the secondary scalar and the node labels (`"tag"`).
#[derive(Clone, Debug, PartialEq)]
pub struct NodeGraph {
    points: Matrix3xX<f64>,
    edges: Vec<Edge>,
    primary: Option<PointArray>,
    secondary: Option<PointArray>,
    labels: Option<PointArray>,
}

impl NodeGraph {
    /// Returns the number of nodes in the graph.
    pub fn num_nodes(&self) -> usize {
        self.points.ncols()
    }

    /// Node coordinates, one column per node.
    pub fn points(&self) -> &Matrix3xX<f64> {
        &self.points
    }

    pub fn node(&self, idx: NodeIndex) -> Vector3<f64> {
        self.points.column(idx.0).into_owned()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns `true` if the graph carries line topology.
    pub fn has_lines(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn primary_scalar(&self) -> Option<&PointArray> {
        self.primary.as_ref()
    }

    pub fn secondary_scalar(&self) -> Option<&PointArray> {
        self.secondary.as_ref()
    }

    pub fn labels(&self) -> Option<&PointArray> {
        self.labels.as_ref()
    }

    /// Iterates over all attached point data arrays in write order.
    pub fn point_data(&self) -> impl Iterator<Item = &PointArray> {
        self.primary.iter()
            .chain(self.secondary.iter())
            .chain(self.labels.iter())
    }
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum Slot {
    Primary,
    Secondary,
    Labels,
}

/// Builder for `NodeGraph`. Every optional part of the graph is checked against the node count
/// when it is added, so mismatched lengths and dangling edge indices are reported before
/// anything is written.
///
/// # Example
///
/// ````rust
/// use vtk_graph::prelude::*;
///
/// let graph = NodeGraphBuilder::new(vec![
///         [0.0, 0.0, 0.0],
///         [1.0, 0.0, 0.0],
///         [0.0, 1.0, 0.0],
///     ])
///     .with_edges(vec![[0usize, 1], [1, 2]]).unwrap()
///     .with_primary_scalar(ScalarField::new("r", vec![1.0, 4.0, 9.0]).with_power(0.5)).unwrap()
///     .build();
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.edges().len(), 2);
/// ````
pub struct NodeGraphBuilder {
    points: Matrix3xX<f64>,
    edges: Vec<Edge>,
    primary: Option<PointArray>,
    secondary: Option<PointArray>,
    labels: Option<PointArray>,
}

impl NodeGraphBuilder {
    /// Starts a new graph from a list of node coordinates. Nodes are identified by their
    /// position in the list.
    pub fn new<P, I>(nodes: I) -> Self
    where
        P: Into<Vector3<f64>>,
        I: IntoIterator<Item = P>,
    {
        let coords: Vec<f64> = nodes.into_iter()
            .flat_map(|p| {
                let p: Vector3<f64> = p.into();
                [p.x, p.y, p.z]
            })
            .collect();
        NodeGraphBuilder {
            points: Matrix3xX::from_iterator(coords.len() / 3, coords),
            edges: Vec::new(),
            primary: None,
            secondary: None,
            labels: None,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.points.ncols()
    }

    /// Sets the line topology of the graph. Each edge is a pair of node indices; all indices
    /// must refer to existing nodes.
    pub fn with_edges<E, I>(mut self, edges: I) -> Result<Self, GraphError>
    where
        E: Into<(usize, usize)>,
        I: IntoIterator<Item = E>,
    {
        let len = self.num_nodes();
        self.edges = edges.into_iter()
            .enumerate()
            .map(|(id, edge)| {
                let (a, b) = edge.into();
                Ok(Edge {
                    a: NodeIndex::checked(a, len, id)?,
                    b: NodeIndex::checked(b, len, id)?,
                })
            })
            .collect::<Result<_, GraphError>>()?;
        Ok(self)
    }

    pub fn with_primary_scalar<T: Float>(mut self, field: ScalarField<T>) -> Result<Self, GraphError> {
        self.check_field(Slot::Primary, &field.name, field.len())?;
        self.primary = Some(PointArray::from(&field));
        Ok(self)
    }

    pub fn with_secondary_scalar<T: Float>(mut self, field: ScalarField<T>) -> Result<Self, GraphError> {
        self.check_field(Slot::Secondary, &field.name, field.len())?;
        self.secondary = Some(PointArray::from(&field));
        Ok(self)
    }

    pub fn with_labels(mut self, labels: LabelField) -> Result<Self, GraphError> {
        self.check_field(Slot::Labels, LABEL_ARRAY_NAME, labels.len())?;
        self.labels = Some(PointArray::from(labels));
        Ok(self)
    }

    pub fn build(self) -> NodeGraph {
        NodeGraph {
            points: self.points,
            edges: self.edges,
            primary: self.primary,
            secondary: self.secondary,
            labels: self.labels,
        }
    }

    fn check_field(&self, slot: Slot, name: &str, len: usize) -> Result<(), GraphError> {
        if len != self.num_nodes() {
            return Err(GraphError::LengthMismatch {
                field: name.to_owned(),
                expected: self.num_nodes(),
                got: len,
            });
        }
        let slots = [
            (Slot::Primary, self.primary.as_ref()),
            (Slot::Secondary, self.secondary.as_ref()),
            (Slot::Labels, self.labels.as_ref()),
        ];
        // unnamed arrays never clash, they are told apart by their position
        let taken = !name.is_empty() && slots.into_iter()
            .filter(|&(other, _)| other != slot)
            .filter_map(|(_, array)| array)
            .any(|array| array.name == name);
        if taken {
            return Err(GraphError::DuplicateArrayName(name.to_owned()));
        }
        Ok(())
    }
}
