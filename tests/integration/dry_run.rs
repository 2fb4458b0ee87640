//! Integration tests for dry-run functionality.

use pdfsplit::config::Config;
use pdfsplit::output::{OutputFormatter, report_to_json};
use tempfile::tempdir;

use crate::common::{create_test_pdf, file_names};

#[tokio::test]
async fn test_dry_run_does_not_create_output() {
    let dir = tempdir().unwrap();
    let input = create_test_pdf(dir.path(), "doc.pdf", 3);

    let config = Config {
        inputs: vec![input],
        dry_run: true,
        ..Default::default()
    };
    let report = pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    assert!(report.dry_run);
    assert_eq!(report.pages_written, 3);
    assert_eq!(report.outputs.len(), 3);
    assert_eq!(file_names(dir.path()), vec!["doc.pdf"]);
}

#[tokio::test]
async fn test_dry_run_merge_plans_single_output() {
    let dir = tempdir().unwrap();
    let a = create_test_pdf(dir.path(), "a.pdf", 2);
    let b = create_test_pdf(dir.path(), "b.pdf", 2);

    let config = Config {
        inputs: vec![a, b],
        dry_run: true,
        ..Default::default()
    };
    let report = pdfsplit::run(&config, OutputFormatter::quiet())
        .await
        .unwrap();

    assert_eq!(report.outputs, vec![dir.path().join("merged.pdf")]);
    assert_eq!(report.pages_written, 4);
    assert!(!dir.path().join("merged.pdf").exists());
}

#[tokio::test]
async fn test_dry_run_report_as_json() {
    let dir = tempdir().unwrap();
    let input = create_test_pdf(dir.path(), "doc.pdf", 2);

    let config = Config {
        inputs: vec![input],
        dry_run: true,
        merge: true,
        json: true,
        ..Default::default()
    };
    let report = pdfsplit::run(&config, OutputFormatter::from_config(&config))
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&report_to_json(&report).unwrap()).unwrap();
    assert_eq!(value["mode"], "split-to-single");
    assert_eq!(value["dry_run"], true);
    assert_eq!(value["pages_written"], 2);
}
