mod dataset;

use std::fmt::{Display, Formatter};
use std::io::Write;
use vtkio::model::{Attributes, ByteOrder, DataSet, Version, Vtk};
use crate::error::XmlError;
use crate::writer::{MeshData, PointData, VTKDataWriter, VTKDataset, VTKGeneralWriter, VTKGeometryWriter, VTKWriter};
use crate::xml::dataset::{piece, point_attributes};

#[derive(Clone, Copy, PartialOrd, PartialEq, Debug)]
pub enum WriteState {
    Header,
    Data,
    Geometry,
    Footer,
    Closed,
}

impl WriteState {
    /// Consumes the write state and returns the write state that follows it.
    fn advance(self) -> Self {
        match self {
            WriteState::Header => WriteState::Data,
            WriteState::Data => WriteState::Geometry,
            WriteState::Geometry => WriteState::Footer,
            WriteState::Footer => WriteState::Closed,
            WriteState::Closed => WriteState::Closed,
        }
    }
}

impl Display for WriteState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Header => write!(f, "header"),
            Self::Data => write!(f, "data"),
            Self::Geometry => write!(f, "geometry"),
            Self::Footer => write!(f, "footer"),
            Self::Closed => write!(f, "closed"),
        }
    }
}


/// Implements the XML VTK format as a writer.
///
/// The writer has to be driven in order: header, point data, geometry, finish. Calls out of
/// order are rejected with `XmlError::State`. The sections are collected into a `vtkio` model,
/// which is serialized into the wrapped writer on `finish`.
pub struct XmlWriter<W: Write> {
    writer: W,
    state: WriteState,
    dataset: VTKDataset,
    num_points: usize,
    num_cells: usize,
    attributes: Attributes,
    data: Option<DataSet>,
}

impl<W: Write> XmlWriter<W> {
    pub fn new(writer: W) -> Self {
        XmlWriter {
            writer,
            state: WriteState::Header,
            dataset: VTKDataset::PolyData,
            num_points: 0,
            num_cells: 0,
            attributes: Attributes::new(),
            data: None,
        }
    }

    pub fn state(&self) -> WriteState {
        self.state
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn check_state(&self, expected: WriteState, op: &str) -> Result<(), XmlError> {
        if self.state != expected {
            return Err(XmlError::State {
                state: self.state,
                op: op.to_owned(),
            });
        }
        Ok(())
    }

    fn check_count(section: &'static str, expected: usize, got: usize) -> Result<(), XmlError> {
        if expected != got {
            return Err(XmlError::CountMismatch {
                section,
                expected,
                got,
            });
        }
        Ok(())
    }
}

impl<W: Write> VTKWriter for XmlWriter<W> {
    type Error = XmlError;

    fn write_header(&mut self, dataset: VTKDataset, num_points: usize, num_cells: usize) -> Result<(), Self::Error> {
        self.check_state(WriteState::Header, "write header")?;
        self.dataset = dataset;
        self.num_points = num_points;
        self.num_cells = num_cells;
        log::debug!("started {dataset} with {num_points} points and {num_cells} cells");
        self.state = self.state.advance();
        Ok(())
    }

    fn finish(&mut self) -> Result<(), Self::Error> {
        self.check_state(WriteState::Footer, "finish")?;
        let data = self.data.take().ok_or(XmlError::State {
            state: self.state,
            op: "finish without geometry".to_owned(),
        })?;
        Vtk {
            version: Version::new_xml(1, 0),
            title: String::new(),
            byte_order: ByteOrder::LittleEndian,
            file_path: None,
            data,
        }.write_xml(&mut self.writer)?;
        self.writer.flush()?;
        log::debug!("serialized {}", self.dataset);
        self.state = self.state.advance();
        Ok(())
    }
}

impl<'a, W: Write> VTKDataWriter<PointData<'a>> for XmlWriter<W> {
    fn write(&mut self, data: PointData<'a>) -> Result<(), Self::Error> {
        self.check_state(WriteState::Data, "write point data")?;
        for array in &data.0 {
            Self::check_count("point data values", self.num_points, array.values.len())?;
        }
        self.attributes = point_attributes(&data);
        log::debug!("collected {} point data arrays", data.0.len());
        self.state = self.state.advance();
        Ok(())
    }
}

impl<'a, W: Write> VTKGeometryWriter<MeshData<'a>> for XmlWriter<W> {
    fn write_geometry(&mut self, geometry: MeshData<'a>) -> Result<(), Self::Error> {
        self.check_state(WriteState::Geometry, "write geometry")?;
        Self::check_count("points", self.num_points, geometry.points.ncols())?;
        Self::check_count("cells", self.num_cells, geometry.lines.len())?;
        let attributes = std::mem::replace(&mut self.attributes, Attributes::new());
        self.data = Some(piece(self.dataset, &geometry, attributes));
        log::debug!(
            "collected geometry with {} points and {} lines",
            geometry.points.ncols(),
            geometry.lines.len(),
        );
        self.state = self.state.advance();
        Ok(())
    }
}

impl<W: Write> VTKGeneralWriter for XmlWriter<W> {}
