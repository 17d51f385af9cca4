use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use crate::error::{ExportError, XmlError};
use crate::mesh::NodeGraph;
use crate::series::numbered_stems;
use crate::writer::{MeshData, PointData, VTKDataWriter, VTKDataset, VTKGeneralWriter, VTKGeometryWriter, VTKWriter};
use crate::xml::XmlWriter;

/// Writes `NodeGraph`s to VTK XML files.
///
/// The exporter only holds the target dataset, so the same exporter can be reused for any number
/// of graphs. Every call to [`MeshExporter::export`] writes exactly one file.
///
/// # Example
///
/// ````rust,no_run
/// use vtk_graph::prelude::*;
///
/// let graph = NodeGraphBuilder::new(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]])
///     .with_edges(vec![[0usize, 1]]).unwrap()
///     .build();
/// let path = MeshExporter::new(VTKDataset::PolyData).export(&graph, "chain").unwrap();
/// assert_eq!(path.to_str(), Some("chain.vtp"));
/// ````
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MeshExporter {
    dataset: VTKDataset,
}

impl MeshExporter {
    pub fn new(dataset: VTKDataset) -> Self {
        MeshExporter {
            dataset,
        }
    }

    pub fn dataset(&self) -> VTKDataset {
        self.dataset
    }

    /// Returns the path a graph exported under `base` is written to. The dataset extension is
    /// appended to the base name, so `run.001` becomes `run.001.vtp`.
    pub fn output_path(&self, base: impl AsRef<Path>) -> PathBuf {
        let mut name = base.as_ref().as_os_str().to_owned();
        name.push(".");
        name.push(self.dataset.extension());
        PathBuf::from(name)
    }

    /// Serializes `graph` into `write`.
    pub fn write_to<W: Write>(&self, graph: &NodeGraph, write: W) -> Result<(), ExportError> {
        let mut writer = XmlWriter::new(write);
        write_graph(&mut writer, self.dataset, graph)?;
        Ok(())
    }

    /// Writes `graph` to `base` plus the dataset extension, replacing any existing file, and
    /// returns the written path.
    pub fn export(&self, graph: &NodeGraph, base: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
        let path = self.output_path(base);
        let file = File::create(&path).map_err(XmlError::from)?;
        self.write_to(graph, BufWriter::new(file))?;
        log::info!(
            "exported {} with {} points, {} lines and {} point data arrays to {}",
            self.dataset,
            graph.num_nodes(),
            graph.edges().len(),
            graph.point_data().count(),
            path.display(),
        );
        Ok(path)
    }

    /// Exports a sequence of graphs as a numbered series: the `i`-th graph is written to
    /// `prefix{start + i * step}` plus the dataset extension.
    pub fn export_series(
        &self,
        graphs: &[NodeGraph],
        prefix: &str,
        start: usize,
        step: usize,
    ) -> Result<Vec<PathBuf>, ExportError> {
        if graphs.is_empty() {
            return Ok(Vec::new());
        }
        let last = step.checked_mul(graphs.len() - 1)
            .and_then(|span| span.checked_add(start))
            .ok_or(ExportError::SeriesOverflow {
                start,
                step,
                len: graphs.len(),
            })?;
        let stems = numbered_stems(prefix, start, last, step)?;
        graphs.iter()
            .zip(stems)
            .map(|(graph, stem)| self.export(graph, stem))
            .collect()
    }
}

/// Writes a complete graph with any general VTK writer.
fn write_graph<Wr: VTKGeneralWriter>(
    writer: &mut Wr,
    dataset: VTKDataset,
    graph: &NodeGraph,
) -> Result<(), <Wr as VTKWriter>::Error> {
    writer.write_header(dataset, graph.num_nodes(), graph.edges().len())?;
    writer.write(PointData::from(graph))?;
    writer.write_geometry(MeshData::from(graph))?;
    writer.finish()
}

/// Writes `graph` to `base` plus the extension of `dataset`. Shorthand for
/// `MeshExporter::new(dataset).export(graph, base)`.
pub fn export(graph: &NodeGraph, dataset: VTKDataset, base: impl AsRef<Path>) -> Result<PathBuf, ExportError> {
    MeshExporter::new(dataset).export(graph, base)
}
