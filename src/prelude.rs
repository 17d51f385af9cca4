pub use crate::writer::VTKWriter;
pub use crate::writer::VTKGeometryWriter;
pub use crate::writer::VTKDataWriter;
pub use crate::writer::VTKGeneralWriter;
pub use crate::writer::VTKDataset;
pub use crate::writer::MeshData;
pub use crate::writer::PointData;
pub use crate::xml::XmlWriter;
pub use crate::data::ScalarField;
pub use crate::data::LabelField;
pub use crate::data::PointArray;
pub use crate::data::LABEL_ARRAY_NAME;

pub use crate::mesh::NodeGraph;
pub use crate::mesh::NodeGraphBuilder;
pub use crate::mesh::NodeIndex;
pub use crate::mesh::Edge;
pub use crate::export::MeshExporter;
pub use crate::export::export;
pub use crate::reader::read_graph;
pub use crate::reader::read_graph_from;
pub use crate::reader::ReadGraph;
pub use crate::series::numbered_stems;
pub use crate::error::{ExportError, GraphError, ReadError, XmlError};
