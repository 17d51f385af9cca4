//! Reads back graphs written by this crate.
//!
//! Parsing is done by `vtkio`. On top of that, the file has to hold a single piece of poly data
//! or unstructured grid with line cells and single component point data.

use std::path::Path;
use nalgebra::{DVector, Matrix3xX};
use vtkio::model::{Attribute, Attributes, CellType, Cells, DataArray, DataSet, IOBuffer, PolyDataPiece, UnstructuredGridPiece, VertexNumbers, Vtk};
use crate::data::PointArray;
use crate::error::ReadError;
use crate::writer::VTKDataset;

/// Contents of a file written by `MeshExporter`.
#[derive(Clone, Debug, PartialEq)]
pub struct ReadGraph {
    pub dataset: VTKDataset,
    pub points: Matrix3xX<f64>,
    pub lines: Vec<[usize; 2]>,
    /// point data arrays in file order
    pub point_data: Vec<PointArray>,
}

impl ReadGraph {
    pub fn num_points(&self) -> usize {
        self.points.ncols()
    }

    /// Looks up a point data array by name.
    pub fn array(&self, name: &str) -> Option<&PointArray> {
        self.point_data.iter().find(|a| a.name == name)
    }
}

/// Reads a `.vtp` or `.vtu` file written by this crate.
pub fn read_graph(path: impl AsRef<Path>) -> Result<ReadGraph, ReadError> {
    let vtk = Vtk::import(path.as_ref())?;
    log::debug!("imported {}", path.as_ref().display());
    ReadGraph::try_from(vtk)
}

/// Parses the content of a `.vtp` or `.vtu` file written by this crate.
pub fn read_graph_from(bytes: &[u8]) -> Result<ReadGraph, ReadError> {
    ReadGraph::try_from(Vtk::parse_xml(bytes)?)
}

/// Loads the data of the only piece in `$pieces`.
macro_rules! single_piece(
    ($pieces:expr, $source:expr) => (
        match $pieces.as_slice() {
            [piece] => piece.load_piece_data($source).map_err(vtkio::Error::from)?,
            pieces => return Err(ReadError::malformed(format!(
                "expected a single piece, found {}", pieces.len()))),
        }
    );
);

impl TryFrom<Vtk> for ReadGraph {
    type Error = ReadError;

    fn try_from(vtk: Vtk) -> Result<Self, Self::Error> {
        let Vtk { file_path, data, .. } = vtk;
        let source = file_path.as_deref();
        let (dataset, points, lines, attributes) = match data {
            DataSet::PolyData { pieces, .. } => {
                let PolyDataPiece { points, verts, lines, polys, strips, data, .. } = single_piece!(pieces, source);
                let other_cells = [verts, polys, strips].iter()
                    .flatten()
                    .any(|topo| topo.num_cells() > 0);
                if other_cells {
                    return Err(ReadError::malformed("only line cells are supported"));
                }
                let lines = match lines {
                    Some(topo) => two_point_cells(topo)?,
                    None => Vec::new(),
                };
                (VTKDataset::PolyData, points, lines, data)
            }
            DataSet::UnstructuredGrid { pieces, .. } => {
                let UnstructuredGridPiece { points, cells: Cells { cell_verts, types }, data, .. } = single_piece!(pieces, source);
                if types.iter().any(|t| *t != CellType::Line) {
                    return Err(ReadError::malformed("only line cells are supported"));
                }
                (VTKDataset::UnstructuredGrid, points, two_point_cells(cell_verts)?, data)
            }
            _ => return Err(ReadError::malformed("expected poly data or an unstructured grid")),
        };

        let points = read_points(points)?;
        let point_data = read_point_data(attributes, points.ncols())?;
        if let Some(&[a, b]) = lines.iter().find(|&&[a, b]| a.max(b) >= points.ncols()) {
            return Err(ReadError::malformed(format!(
                "line {a}-{b} references a node past the {} points of the file", points.ncols())));
        }
        Ok(ReadGraph {
            dataset,
            points,
            lines,
            point_data,
        })
    }
}

fn read_points(points: IOBuffer) -> Result<Matrix3xX<f64>, ReadError> {
    let coords: Vec<f64> = points.cast_into()
        .ok_or_else(|| ReadError::malformed("point coordinates are not numeric"))?;
    if coords.len() % 3 != 0 {
        return Err(ReadError::malformed("point coordinates are not 3-dimensional"));
    }
    Ok(Matrix3xX::from_iterator(coords.len() / 3, coords))
}

/// Splits cells into node pairs. Every cell has to hold exactly two points.
fn two_point_cells(topo: VertexNumbers) -> Result<Vec<[usize; 2]>, ReadError> {
    let (connectivity, offsets) = topo.into_xml();
    let mut lines = Vec::with_capacity(offsets.len());
    let mut begin = 0usize;
    for &offset in &offsets {
        let end = usize::try_from(offset)
            .map_err(|_| ReadError::malformed(format!("cell offset {offset} is out of range")))?;
        match connectivity.get(begin..end) {
            Some(&[a, b]) => lines.push([a as usize, b as usize]),
            _ => return Err(ReadError::malformed(format!("cell ending at {end} is not a line"))),
        }
        begin = end;
    }
    Ok(lines)
}

fn read_point_data(attributes: Attributes, num_points: usize) -> Result<Vec<PointArray>, ReadError> {
    attributes.point.into_iter()
        .filter_map(|attribute| match attribute {
            Attribute::DataArray(array) => Some(array),
            Attribute::Field { name, .. } => {
                log::debug!("skipping field data '{name}'");
                None
            }
        })
        .map(|DataArray { name, data, .. }| {
            let values: Vec<f32> = data.cast_into()
                .ok_or_else(|| ReadError::malformed(format!("point data '{name}' is not numeric")))?;
            if values.len() != num_points {
                return Err(ReadError::malformed(format!(
                    "point data '{name}' has {} values for {num_points} points", values.len())));
            }
            Ok(PointArray::new(name, DVector::from_vec(values)))
        })
        .collect()
}
