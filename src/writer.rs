use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use nalgebra::Matrix3xX;
use crate::data::PointArray;
use crate::error::ExportError;
use crate::mesh::{Edge, NodeGraph};

/// The VTK dataset describes which container a graph is written to. Both containers are XML
/// based and hold the same points, line cells and point data; they differ in what downstream
/// filters can do with them (e.g. ParaView's Tube filter only works on poly data).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VTKDataset {
    /// `vtkPolyData`, written as `.vtp`
    PolyData,
    /// `vtkUnstructuredGrid`, written as `.vtu`
    UnstructuredGrid,
}

impl VTKDataset {
    /// Returns the file extension for the dataset, without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::PolyData => "vtp",
            Self::UnstructuredGrid => "vtu",
        }
    }
}

impl Display for VTKDataset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolyData => write!(f, "vtkPolyData"),
            Self::UnstructuredGrid => write!(f, "vtkUnstructuredGrid"),
        }
    }
}

impl FromStr for VTKDataset {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vtkpolydata" | "polydata" | "vtp" => Ok(Self::PolyData),
            "vtkunstructuredgrid" | "unstructuredgrid" | "vtu" => Ok(Self::UnstructuredGrid),
            _ => Err(ExportError::UnknownDataset(s.to_owned())),
        }
    }
}


/// Geometry of a graph: node coordinates and line cells.
pub struct MeshData<'a> {
    pub points: &'a Matrix3xX<f64>,
    pub lines: &'a [Edge],
}

impl<'a> From<&'a NodeGraph> for MeshData<'a> {
    fn from(value: &'a NodeGraph) -> Self {
        MeshData {
            points: value.points(),
            lines: value.edges(),
        }
    }
}

/// Point data arrays of a graph, in write order.
pub struct PointData<'a>(pub Vec<&'a PointArray>);

impl<'a> From<&'a NodeGraph> for PointData<'a> {
    fn from(value: &'a NodeGraph) -> Self {
        PointData(value.point_data().collect())
    }
}


pub trait VTKWriter {
    type Error: Error;

    /// Starts a file for the given dataset. The number of points and cells of the single piece
    /// has to be known up front.
    fn write_header(&mut self, dataset: VTKDataset, num_points: usize, num_cells: usize) -> Result<(), Self::Error>;
    /// Serializes everything collected so far and flushes the underlying writer.
    fn finish(&mut self) -> Result<(), Self::Error>;
}

pub trait VTKGeometryWriter<T>: VTKWriter {
    fn write_geometry(&mut self, geometry: T) -> Result<(), Self::Error>;
}

pub trait VTKDataWriter<T>: VTKWriter {
    fn write(&mut self, data: T) -> Result<(), Self::Error>;
}

pub trait VTKGeneralWriter: VTKWriter
    + for<'a> VTKGeometryWriter<MeshData<'a>>
    + for<'a> VTKDataWriter<PointData<'a>> {}
