//! End-to-end harvest runs against an in-memory portal

use assert_fs::prelude::*;
use dgca_harvest::{HarvestConfig, run_generate, run_harvest};
use tempfile::TempDir;

mod common;
use common::{
    PageGraph, RecordingProgress, STORAGE_BASE, page_anchor, public_url, root_listing,
    spreadsheet_anchor,
};

fn config(dir: &TempDir) -> HarvestConfig {
    HarvestConfig::builder()
        .output_dir(dir.path())
        .storage_base_url(STORAGE_BASE)
        .request_delay_ms(0)
        .quarterly_years(24, 24)
        .quarterly_tables(1)
        .save_report(true)
        .build()
        .unwrap()
}

fn lines(path: &std::path::Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[tokio::test]
async fn test_harvest_writes_all_views() {
    let temp_dir = TempDir::new().unwrap();
    let config = config(&temp_dir);
    let graph = PageGraph::new()
        .with_root_listing(&root_listing(&["100"]))
        .with_page("100", &format!("{}{}", spreadsheet_anchor("JAN 2024.xlsx"), page_anchor("200")))
        .with_page("200", &spreadsheet_anchor("FEB 2024.xls"));

    let summary = run_harvest(&config, graph, RecordingProgress::new())
        .await
        .unwrap();

    let domestic = lines(&config.domestic_list_path());
    let international = lines(&config.international_list_path());
    let merged = lines(&config.merged_list_path());

    assert_eq!(domestic, vec![public_url("FEB 2024.xls"), public_url("JAN 2024.xlsx")]);
    assert_eq!(international.len(), 4);
    assert!(international[0].ends_with("/quaterly/24Q1_1.xlsx"));
    assert_eq!(merged.len(), 6);
    assert!(merged.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(summary.lists.merged, merged);

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(config.report_path()).unwrap()).unwrap();
    assert_eq!(report["root_content_id"], "4184");
    assert_eq!(report["spreadsheet_urls"], 2);
    assert_eq!(report["stats"]["nodes_fetched"], 2);
}

#[tokio::test]
async fn test_root_failure_still_saves_generated_urls() {
    let temp = assert_fs::TempDir::new().unwrap();
    let config = HarvestConfig::builder()
        .output_dir(temp.path())
        .storage_base_url(STORAGE_BASE)
        .request_delay_ms(0)
        .quarterly_years(24, 24)
        .quarterly_tables(1)
        .build()
        .unwrap();
    let progress = RecordingProgress::new();

    let summary = run_harvest(&config, PageGraph::new(), progress.clone())
        .await
        .unwrap();

    assert!(summary.report.root_listing_failed);
    temp.child("urls/domestic.txt").assert("");
    temp.child("urls.txt")
        .assert(summary.lists.international.join("\n") + "\n");
    assert!(!config.report_path().exists());
    assert_eq!(lines(&config.international_list_path()).len(), 4);
    assert_eq!(progress.count("root_failed"), 1);
}

#[tokio::test]
async fn test_generate_writes_only_international() {
    let temp_dir = TempDir::new().unwrap();
    let config = HarvestConfig::builder()
        .output_dir(temp_dir.path())
        .build()
        .unwrap();

    let urls = run_generate(&config).await.unwrap();

    assert_eq!(urls.len(), 176);
    assert_eq!(lines(&config.international_list_path()), urls);
    assert!(!config.domestic_list_path().exists());
    assert!(!config.merged_list_path().exists());
}
