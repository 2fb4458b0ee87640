//! Integration tests for splitting a single document.

use clap::Parser;
use pdfsplit::cli::Cli;
use pdfsplit::config::Config;
use pdfsplit::output::OutputFormatter;
use pdfsplit::range::PageSet;
use tempfile::tempdir;

use crate::common::{create_test_pdf, file_names, first_page_rotation, page_markers};

fn config_for(args: &[&str]) -> Config {
    let mut argv = vec!["pdfsplit"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap().to_config().unwrap()
}

#[tokio::test]
async fn test_split_every_page() {
    let dir = tempdir().unwrap();
    let input = create_test_pdf(dir.path(), "report.pdf", 3);

    let config = config_for(&[input.to_str().unwrap()]);
    let report = pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(report.pages_written, 3);
    assert_eq!(
        file_names(dir.path()),
        vec!["report.pdf", "report_1.pdf", "report_2.pdf", "report_3.pdf"]
    );
    for n in 1..=3 {
        let output = dir.path().join(format!("report_{n}.pdf"));
        assert_eq!(page_markers(&output), vec![n]);
    }
}

#[tokio::test]
async fn test_split_selection_is_zero_padded() {
    let dir = tempdir().unwrap();
    let input = create_test_pdf(dir.path(), "book.pdf", 12);

    let config = config_for(&[input.to_str().unwrap(), "--pages", "1, 10-11"]);
    pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(
        file_names(dir.path()),
        vec!["book.pdf", "book_01.pdf", "book_10.pdf", "book_11.pdf"]
    );
    assert_eq!(page_markers(&dir.path().join("book_10.pdf")), vec![10]);
}

#[tokio::test]
async fn test_split_with_explicit_bounds() {
    let dir = tempdir().unwrap();
    let input = create_test_pdf(dir.path(), "doc.pdf", 5);

    let config = config_for(&[input.to_str().unwrap(), "--start", "2", "--end", "3"]);
    let report = pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(
        report.outputs,
        vec![dir.path().join("doc_2.pdf"), dir.path().join("doc_3.pdf")]
    );
}

#[tokio::test]
async fn test_split_to_single_file() {
    let dir = tempdir().unwrap();
    let input = create_test_pdf(dir.path(), "doc.pdf", 8);

    let config = config_for(&[input.to_str().unwrap(), "--pages", "2,5-7", "--merge"]);
    let report = pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    let merged = dir.path().join("doc_merged.pdf");
    assert_eq!(report.outputs, vec![merged.clone()]);
    assert_eq!(page_markers(&merged), vec![2, 5, 6, 7]);
}

#[tokio::test]
async fn test_rotations_applied_when_splitting() {
    let dir = tempdir().unwrap();
    let input = create_test_pdf(dir.path(), "scan.pdf", 3);

    let config = config_for(&[
        input.to_str().unwrap(),
        "--rotate",
        "1:cw",
        "--rotate",
        "2:ccw",
        "--rotate",
        "3:cw",
        "--rotate",
        "3:ccw",
    ]);
    pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(first_page_rotation(&dir.path().join("scan_1.pdf")), 90);
    assert_eq!(first_page_rotation(&dir.path().join("scan_2.pdf")), 270);
    assert_eq!(first_page_rotation(&dir.path().join("scan_3.pdf")), 0);
}

#[tokio::test]
async fn test_split_then_merge_round_trip() {
    let dir = tempdir().unwrap();
    let input = create_test_pdf(dir.path(), "doc.pdf", 4);

    let config = config_for(&[input.to_str().unwrap()]);
    let split = pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    let config = Config {
        inputs: split.outputs.clone(),
        ..Default::default()
    };
    let merged = pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(merged.outputs, vec![dir.path().join("merged.pdf")]);
    assert_eq!(page_markers(&merged.outputs[0]), vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_resources_inherited_from_page_tree() {
    let dir = tempdir().unwrap();
    let input = create_test_pdf(dir.path(), "doc.pdf", 2);

    let mut config = config_for(&[input.to_str().unwrap()]);
    config.pages = PageSet::from_pages([2]);
    pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    let doc = lopdf::Document::load(dir.path().join("doc_2.pdf")).unwrap();
    let (_, page_id) = doc.get_pages().into_iter().next().unwrap();
    let page = doc.get_object(page_id).unwrap().as_dict().unwrap();
    let resources = match page.get(b"Resources").unwrap() {
        lopdf::Object::Reference(id) => doc.get_object(*id).unwrap().as_dict().unwrap(),
        other => other.as_dict().unwrap(),
    };
    assert!(resources.has(b"Font"));
}
