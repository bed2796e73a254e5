/// Integration tests for the application layer
mod test_utilities;

use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::mocks::*;
use depgraph_viz::prelude::*;

const FIXTURE: &str = "tests/fixtures/Packages";

const SAMPLE_INDEX: &str = "
Package: package-a
Depends: package-b, package-c

Package: package-b
Depends: package-d

Package: package-c
Depends:

Package: package-d
Depends: package-e

Package: package-e
Depends:
";

fn fixture_index() -> DependencyIndex {
    FileSystemIndexReader::new()
        .read_index(Path::new(FIXTURE))
        .unwrap()
}

#[test]
fn test_visualize_happy_path() {
    let progress_reporter = MockProgressReporter::new();
    let use_case =
        VisualizeDependenciesUseCase::new(MockIndexReader::new(SAMPLE_INDEX), progress_reporter.clone());
    let mut renderer = RecordingRenderer::new();

    let request = VisualizeRequest::new("package-a", "Packages", "package-a_dependencies");
    let response = use_case.execute(request, &mut renderer).unwrap();

    assert_eq!(response.index_size, 5);
    assert_eq!(
        response.graph.packages().collect::<Vec<_>>(),
        vec!["package-a", "package-b", "package-d", "package-e", "package-c"]
    );
    assert_eq!(
        renderer.calls,
        vec![
            RecordedCall::Node("package-a".to_string()),
            RecordedCall::Edge("package-a".to_string(), "package-b".to_string()),
            RecordedCall::Edge("package-a".to_string(), "package-c".to_string()),
            RecordedCall::Node("package-b".to_string()),
            RecordedCall::Edge("package-b".to_string(), "package-d".to_string()),
            RecordedCall::Node("package-d".to_string()),
            RecordedCall::Edge("package-d".to_string(), "package-e".to_string()),
            RecordedCall::Node("package-e".to_string()),
            RecordedCall::Node("package-c".to_string()),
            RecordedCall::Render(PathBuf::from("package-a_dependencies")),
        ]
    );
    let messages = progress_reporter.get_messages();
    assert_eq!(messages.len(), 9);
    assert_eq!(messages[3], "Progress: 1/5 - package-a");
    assert_eq!(messages[7], "Progress: 5/5 - package-c");
    assert!(messages[8].starts_with("Completed: "));
}

#[test]
fn test_visualize_unknown_package_skips_rendering() {
    let use_case =
        VisualizeDependenciesUseCase::new(MockIndexReader::new(SAMPLE_INDEX), MockProgressReporter::new());
    let mut renderer = RecordingRenderer::new();

    let err = use_case
        .execute(VisualizeRequest::new("unknown-pkg", "Packages", "out"), &mut renderer)
        .unwrap_err();

    assert!(err.to_string().contains("'unknown-pkg' was not found"));
    assert!(renderer.calls.is_empty());
}

#[test]
fn test_visualize_reader_failure() {
    let use_case =
        VisualizeDependenciesUseCase::new(MockIndexReader::with_failure(), MockProgressReporter::new());
    let mut renderer = RecordingRenderer::new();

    let err = use_case
        .execute(VisualizeRequest::new("package-a", "Packages", "out"), &mut renderer)
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DepgraphError>(),
        Some(DepgraphError::IndexFormatError { .. })
    ));
    assert_eq!(renderer.render_count(), 0);
}

#[test]
fn test_fixture_strips_versions_and_keeps_first_alternative() {
    let index = fixture_index();

    assert_eq!(index.len(), 7);
    assert_eq!(
        index.dependencies_of("package-a").unwrap(),
        ["package-b".to_string(), "package-c".to_string()]
    );
    assert_eq!(
        index.dependencies_of("package-b").unwrap(),
        ["package-d".to_string(), "libc6".to_string()]
    );
    assert!(index.dependencies_of("package-c").unwrap().is_empty());
    assert!(index.dependencies_of("package-e").unwrap().is_empty());
    assert!(!index.contains("libc6"));
}

#[test]
fn test_fixture_expansion_keeps_unindexed_dependencies_as_edges_only() {
    let graph = GraphExpander::expand("package-a", &fixture_index());

    assert_eq!(
        graph.packages().collect::<Vec<_>>(),
        vec!["package-a", "package-b", "package-d", "package-e", "package-c"]
    );
    assert!(!graph.contains("libc6"));
    assert_eq!(
        graph.dependencies_of("package-b").unwrap(),
        ["package-d".to_string(), "libc6".to_string()]
    );
    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn test_fixture_cycle_terminates() {
    let graph = GraphExpander::expand("cycle-x", &fixture_index());

    assert_eq!(graph.packages().collect::<Vec<_>>(), vec!["cycle-x", "cycle-y"]);
    assert_eq!(
        graph.dependencies_of("cycle-y").unwrap(),
        ["cycle-x".to_string()]
    );
}

#[test]
fn test_graph_entries_match_index_entries() {
    let index = fixture_index();
    for package in index.package_names() {
        let graph = GraphExpander::expand(package, &index);
        assert_eq!(graph.packages().next(), Some(package));
        for (name, dependencies) in graph.iter() {
            assert_eq!(index.dependencies_of(name), Some(dependencies));
            for dependency in dependencies {
                // Indexed dependencies are always expanded
                assert_eq!(graph.contains(dependency), index.contains(dependency));
            }
        }
    }
}

#[test]
fn test_gzip_index_matches_plain_index() {
    let temp_dir = TempDir::new().unwrap();
    let gz_path = temp_dir.path().join("Packages.gz");

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&fs::read(FIXTURE).unwrap())
        .unwrap();
    fs::write(&gz_path, encoder.finish().unwrap()).unwrap();

    let compressed = FileSystemIndexReader::new().read_index(&gz_path).unwrap();
    assert_eq!(compressed.as_map(), fixture_index().as_map());
}

#[test]
fn test_missing_index_file() {
    let err = FileSystemIndexReader::new()
        .read_index(Path::new("tests/fixtures/does-not-exist"))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DepgraphError>(),
        Some(DepgraphError::IndexNotFound { .. })
    ));
}

#[test]
fn test_dot_source_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let use_case =
        VisualizeDependenciesUseCase::new(FileSystemIndexReader::new(), MockProgressReporter::new());
    let mut renderer = DotSourceRenderer::new();

    let response = use_case
        .execute(
            VisualizeRequest::new("package-b", FIXTURE, temp_dir.path().join("graph")),
            &mut renderer,
        )
        .unwrap();

    assert_eq!(response.output_path, temp_dir.path().join("graph.dot"));
    let source = fs::read_to_string(&response.output_path).unwrap();
    assert!(source.starts_with("digraph {"));
    assert!(source.contains("0 [ label = \"package-b\" ]"));
    assert!(source.contains("2 [ label = \"libc6\" ]"));
    assert!(source.contains("0 -> 1"));
    assert!(source.contains("0 -> 2"));
    assert!(!source.contains("package-a"));
}

#[test]
fn test_json_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let use_case =
        VisualizeDependenciesUseCase::new(FileSystemIndexReader::new(), MockProgressReporter::new());
    let mut renderer = JsonRenderer::new();

    let response = use_case
        .execute(
            VisualizeRequest::new("package-d", FIXTURE, temp_dir.path().join("graph.JSON")),
            &mut renderer,
        )
        .unwrap();

    assert_eq!(response.output_path, temp_dir.path().join("graph.JSON"));
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&response.output_path).unwrap()).unwrap();
    assert_eq!(value["root"], "package-d");
    assert_eq!(value["packages"]["package-d"], serde_json::json!(["package-e"]));
    assert_eq!(value["packages"]["package-e"], serde_json::json!([]));
}
