use nalgebra::Matrix3xX;
use vtkio::model::{Attribute, Attributes, CellType, Cells, DataSet, IOBuffer, PolyDataPiece, UnstructuredGridPiece, VertexNumbers};
use crate::mesh::Edge;
use crate::writer::{MeshData, PointData, VTKDataset};

/// Node coordinates as `x0 y0 z0 x1 y1 z1 ..`. This is exactly the column major storage of
/// `points`, so no reordering is needed.
pub(crate) fn points_buffer(points: &Matrix3xX<f64>) -> IOBuffer {
    IOBuffer::F64(points.as_slice().to_vec())
}

/// Two point line cells in XML form. Edge `i` occupies `connectivity[2i..2i + 2]` and ends at
/// offset `2 * (i + 1)`.
pub(crate) fn line_cells(edges: &[Edge]) -> VertexNumbers {
    let connectivity = edges.iter()
        .flat_map(|edge| edge.indices())
        .map(|idx| idx as u64)
        .collect();
    let offsets = (1..=edges.len() as u64)
        .map(|cell| 2 * cell)
        .collect();
    VertexNumbers::XML {
        connectivity,
        offsets,
    }
}

/// One single component `Float32` scalar attribute per point data array, in write order.
pub(crate) fn point_attributes(data: &PointData<'_>) -> Attributes {
    Attributes {
        point: data.0.iter()
            .map(|array| Attribute::scalars(array.name.as_str(), 1)
                .with_data(IOBuffer::F32(array.values.as_slice().to_vec())))
            .collect(),
        cell: Vec::new(),
    }
}

/// Assembles the single inline piece of a file.
///
/// Poly data only gets a line section if the graph has edges. An unstructured grid always has a
/// cell section, which may be empty.
pub(crate) fn piece(dataset: VTKDataset, geometry: &MeshData<'_>, data: Attributes) -> DataSet {
    let points = points_buffer(geometry.points);
    match dataset {
        VTKDataset::PolyData => DataSet::inline(PolyDataPiece {
            points,
            lines: (!geometry.lines.is_empty()).then(|| line_cells(geometry.lines)),
            data,
            ..Default::default()
        }),
        VTKDataset::UnstructuredGrid => DataSet::inline(UnstructuredGridPiece {
            points,
            cells: Cells {
                cell_verts: line_cells(geometry.lines),
                types: vec![CellType::Line; geometry.lines.len()],
            },
            data,
        }),
    }
}
