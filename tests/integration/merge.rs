//! Integration tests for merging several documents.

use pdfsplit::assembly::{AssemblyEngine, AssemblyMode, AssemblyRequest};
use pdfsplit::config::Config;
use pdfsplit::edit::RotationDirection;
use pdfsplit::io::LopdfCodec;
use pdfsplit::notify::Notices;
use pdfsplit::output::OutputFormatter;
use pdfsplit::range::PageSet;
use serial_test::serial;
use std::path::PathBuf;
use tempfile::tempdir;

use crate::common::{create_test_pdf, page_markers};

#[tokio::test]
async fn test_merge_three_and_two_pages() {
    let dir = tempdir().unwrap();
    let a = create_test_pdf(dir.path(), "a.pdf", 3);
    let b = create_test_pdf(dir.path(), "b.pdf", 2);

    let config = Config {
        inputs: vec![a, b],
        quiet: true,
        ..Default::default()
    };
    let report = pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    let merged = dir.path().join("merged.pdf");
    assert_eq!(report.mode, AssemblyMode::MergeDocuments);
    assert_eq!(report.pages_written, 5);
    assert_eq!(page_markers(&merged), vec![1, 2, 3, 1, 2]);
}

#[test]
fn test_merge_ignores_selection_and_edits() {
    let dir = tempdir().unwrap();
    let a = create_test_pdf(dir.path(), "a.pdf", 2);
    let b = create_test_pdf(dir.path(), "b.pdf", 2);

    let mut request = AssemblyRequest {
        documents: vec![b, a],
        merge: false,
        ..Default::default()
    };
    request.selection.pages = PageSet::parse("2").unwrap();
    request.edits.rotate(1, RotationDirection::Clockwise);

    let notices = Notices::new();
    let report = AssemblyEngine::new(LopdfCodec::default(), &notices)
        .assemble(&request)
        .unwrap();

    assert_eq!(report.pages_written, 4);
    assert_eq!(page_markers(&dir.path().join("merged.pdf")), vec![1, 2, 1, 2]);
    assert!(notices.errors().is_empty());
}

#[tokio::test]
async fn test_merge_glob_inputs_in_sorted_order() {
    let dir = tempdir().unwrap();
    create_test_pdf(dir.path(), "part2.pdf", 1);
    create_test_pdf(dir.path(), "part1.pdf", 2);

    let pattern = dir.path().join("part*.pdf").display().to_string();
    let cli = <pdfsplit::cli::Cli as clap::Parser>::try_parse_from(["pdfsplit", &pattern]).unwrap();
    let config = cli.resolve_config().await.unwrap();

    assert_eq!(
        config.inputs,
        vec![dir.path().join("part1.pdf"), dir.path().join("part2.pdf")]
    );

    pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();
    assert_eq!(page_markers(&dir.path().join("merged.pdf")), vec![1, 2, 1]);
}

#[tokio::test]
#[serial]
async fn test_merge_relative_inputs_writes_beside_first() {
    let dir = tempdir().unwrap();
    create_test_pdf(dir.path(), "a.pdf", 1);
    create_test_pdf(dir.path(), "b.pdf", 1);

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    let config = Config {
        inputs: vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")],
        ..Default::default()
    };
    let result = pdfsplit::run(&config, OutputFormatter::quiet()).await;

    std::env::set_current_dir(previous).unwrap();

    let report = result.unwrap();
    assert_eq!(report.outputs, vec![PathBuf::from("merged.pdf")]);
    assert!(dir.path().join("merged.pdf").exists());
}
