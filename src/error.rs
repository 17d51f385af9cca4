use thiserror::Error;
use crate::xml::WriteState;

/// Errors raised while assembling a `NodeGraph`. All of them are detected before anything is
/// written, so a graph that builds successfully always serializes into a consistent file.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("edge {edge} references node {index}, but the graph only has {len} nodes")]
    EdgeOutOfRange {
        edge: usize,
        index: usize,
        len: usize,
    },
    #[error("field '{field}' has {got} values, expected one per node ({expected})")]
    LengthMismatch {
        field: String,
        expected: usize,
        got: usize,
    },
    #[error("point data array '{0}' is already attached to the graph")]
    DuplicateArrayName(String),
}

#[derive(Debug, Error)]
pub enum XmlError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("VTK error: {0}")]
    Vtk(#[from] vtkio::Error),
    #[error("Cannot apply operation {op} to XML VTK writer in state {state}")]
    State {
        state: WriteState,
        op: String,
    },
    #[error("header announced {expected} {section}, but the geometry has {got}")]
    CountMismatch {
        section: &'static str,
        expected: usize,
        got: usize,
    },
}

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("VTK error: {0}")]
    Vtk(#[from] vtkio::Error),
    #[error("malformed VTK file: {0}")]
    Malformed(String),
}

impl ReadError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Xml(#[from] XmlError),
    #[error("unknown VTK dataset '{0}', expected vtkPolyData or vtkUnstructuredGrid")]
    UnknownDataset(String),
    #[error("series step must be greater than zero")]
    InvalidStep,
    #[error("series of {len} files starting at {start} with step {step} overflows the file number")]
    SeriesOverflow {
        start: usize,
        step: usize,
        len: usize,
    },
}
