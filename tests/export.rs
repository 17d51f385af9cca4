use std::error::Error;
use std::fs;
use approx::assert_relative_eq;
use vtk_graph::prelude::*;

fn triangle() -> Result<NodeGraph, GraphError> {
    Ok(NodeGraphBuilder::new(vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, 1.0, 0.0],
        ])
        .with_edges(vec![[0usize, 1], [1, 2]])?
        .with_primary_scalar(ScalarField::new("r", vec![1.0, 4.0, 9.0]).with_power(0.5))?
        .build())
}

#[test]
fn triangle_poly_data() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let path = export(&triangle()?, "vtkPolyData".parse()?, dir.path().join("tri"))?;
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("tri.vtp"));

    let read = read_graph(&path)?;
    assert_eq!(read.dataset, VTKDataset::PolyData);
    assert_eq!(read.num_points(), 3);
    assert_eq!(read.points.column(1).as_slice(), &[1.0, 0.0, 0.0]);
    assert_eq!(read.lines, vec![[0, 1], [1, 2]]);
    assert_eq!(read.point_data.len(), 1);
    let r = read.array("r").ok_or("missing array r")?;
    assert_relative_eq!(r.values[0], 1.0f32, epsilon = 1e-6);
    assert_relative_eq!(r.values[1], 2.0f32, epsilon = 1e-6);
    assert_relative_eq!(r.values[2], 3.0f32, epsilon = 1e-6);
    Ok(())
}

#[test]
fn triangle_unstructured_grid() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let exporter = MeshExporter::new(VTKDataset::UnstructuredGrid);
    let path = exporter.export(&triangle()?, dir.path().join("tri"))?;
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("vtu"));

    let read = read_graph(&path)?;
    assert_eq!(read.dataset, VTKDataset::UnstructuredGrid);
    assert_eq!(read.lines, vec![[0, 1], [1, 2]]);
    Ok(())
}

#[test]
fn all_point_data_in_order() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let graph = NodeGraphBuilder::new(vec![[0.0, 0.0, 0.0], [2.0, 0.0, 0.0]])
        .with_primary_scalar(ScalarField::new("radius", vec![0.5, 2.0]))?
        .with_secondary_scalar(ScalarField::new("volume", vec![0.5, 2.0]).with_power(3.0))?
        .with_labels(LabelField::new(vec![4u32, 11]))?
        .build();
    let path = export(&graph, VTKDataset::PolyData, dir.path().join("particles"))?;

    let read = read_graph(&path)?;
    let names: Vec<_> = read.point_data.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["radius", "volume", "tag"]);
    assert_eq!(read.array("volume").map(|a| a.values.as_slice().to_vec()), Some(vec![0.125, 8.0]));
    assert_eq!(read.array("tag").map(|a| a.values.as_slice().to_vec()), Some(vec![4.0, 11.0]));
    assert!(read.lines.is_empty());
    Ok(())
}

#[test]
fn empty_graph_writes_valid_file() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let graph = NodeGraphBuilder::new(Vec::<[f64; 3]>::new()).build();
    for dataset in [VTKDataset::PolyData, VTKDataset::UnstructuredGrid] {
        let path = export(&graph, dataset, dir.path().join("empty"))?;
        let read = read_graph(&path)?;
        assert_eq!(read.dataset, dataset);
        assert_eq!(read.num_points(), 0);
        assert!(read.lines.is_empty());
    }
    Ok(())
}

#[test]
fn file_matches_in_memory_output() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let graph = NodeGraphBuilder::new(vec![[0.1, 0.2, 0.3], [-4.0, 5.5, 1e-9], [7.0, 8.0, 1e300]])
        .with_edges(vec![(2usize, 0), (0, 1)])?
        .with_primary_scalar(ScalarField::new("r", vec![0.3, 0.6, 0.9]).with_power(3.0))?
        .with_labels(LabelField::new(vec![1, 2, 3]))?
        .build();
    for dataset in [VTKDataset::PolyData, VTKDataset::UnstructuredGrid] {
        let exporter = MeshExporter::new(dataset);
        let path = exporter.export(&graph, dir.path().join("graph"))?;
        let mut memory = Vec::new();
        exporter.write_to(&graph, &mut memory)?;
        assert_eq!(fs::read(&path)?, memory);

        let read = read_graph(&path)?;
        assert_eq!(&read.points, graph.points());
        assert_eq!(read, read_graph_from(&memory)?);
    }
    Ok(())
}

#[test]
fn existing_file_is_replaced() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let base = dir.path().join("graph");
    fs::write(dir.path().join("graph.vtp"), "stale content that is much longer than nothing")?;

    let graph = NodeGraphBuilder::new(vec![[1.0, 1.0, 1.0]]).build();
    let path = export(&graph, VTKDataset::PolyData, &base)?;
    assert!(!fs::read_to_string(&path)?.contains("stale"));
    assert_eq!(read_graph(&path)?.points.column(0).as_slice(), &[1.0, 1.0, 1.0]);
    Ok(())
}

#[test]
fn series_is_numbered() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let graphs: Vec<_> = (0..3)
        .map(|i| NodeGraphBuilder::new(vec![[i as f64, 0.0, 0.0]]).build())
        .collect();
    let prefix = dir.path().join("chains_");
    let exporter = MeshExporter::new(VTKDataset::PolyData);
    let paths = exporter.export_series(&graphs, prefix.to_str().ok_or("non utf-8 temp dir")?, 0, 3000)?;
    let names: Vec<_> = paths.iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(str::to_owned))
        .collect();
    assert_eq!(names, vec!["chains_0.vtp", "chains_3000.vtp", "chains_6000.vtp"]);
    assert_eq!(read_graph(&paths[2])?.points.column(0).as_slice(), &[2.0, 0.0, 0.0]);
    Ok(())
}

#[test]
fn unnamed_scalars_are_both_written() -> Result<(), Box<dyn Error>> {
    let dir = tempfile::tempdir()?;
    let graph = NodeGraphBuilder::new(vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]])
        .with_primary_scalar(ScalarField::new("", vec![1.0, 2.0]))?
        .with_secondary_scalar(ScalarField::new("", vec![3.0, 4.0]))?
        .build();
    let read = read_graph(export(&graph, VTKDataset::PolyData, dir.path().join("unnamed"))?)?;
    let values: Vec<_> = read.point_data.iter().map(|a| a.values.as_slice().to_vec()).collect();
    assert_eq!(values, vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    Ok(())
}

#[test]
fn invalid_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let result = NodeGraphBuilder::new(vec![[0.0, 0.0, 0.0]])
        .with_edges(vec![[0usize, 1]]);
    assert!(matches!(result, Err(GraphError::EdgeOutOfRange { edge: 0, index: 1, len: 1 })));
    assert!("vtkImageData".parse::<VTKDataset>().is_err());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}
