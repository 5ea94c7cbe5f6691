//! End-to-end harvest run
//!
//! root listing → crawl → quarterly generation → merge → save. Only writing
//! the output can fail the run; crawl problems only shrink the result.

use log::info;

use super::crawl_types::CrawlReport;
use super::orchestrator::crawl_from_root;
use super::progress::ProgressReporter;
use super::traversal::Traversal;
use crate::config::HarvestConfig;
use crate::content_id::ContentId;
use crate::content_saver::{SaveError, save_json_data, save_url_list};
use crate::portal_client::ContentSource;
use crate::url_aggregator::UrlLists;
use crate::url_generator::QuarterlyUrlGenerator;

/// Everything a harvest run produced
#[derive(Debug, Clone)]
pub struct HarvestSummary {
    pub lists: UrlLists,
    pub report: CrawlReport,
}

/// Run a full harvest against `source` and persist the three URL lists.
///
/// # Errors
///
/// Returns `SaveError` if an output file cannot be written. Fetch and
/// parse failures never surface here.
pub async fn run_harvest<S, P>(
    config: &HarvestConfig,
    source: S,
    progress: P,
) -> Result<HarvestSummary, SaveError>
where
    S: ContentSource,
    P: ProgressReporter,
{
    let traversal = Traversal::from_config(source, progress, config);
    let root = ContentId::from(config.root_content_id());

    let outcome = crawl_from_root(&traversal, &root).await;

    info!(target: "dgca_harvest::harvest", "Generating international URLs...");
    let generated = QuarterlyUrlGenerator::from_config(config).urls();

    info!(target: "dgca_harvest::harvest", "Merging all URLs...");
    let lists = UrlLists::new(outcome.urls, generated);
    lists.save(config).await?;

    if config.save_report() {
        save_json_data(&outcome.report, &config.report_path()).await?;
    }

    info!(
        target: "dgca_harvest::harvest",
        "Done! Found {} total URLs saved to {}",
        lists.merged.len(),
        config.merged_list_path().display()
    );

    Ok(HarvestSummary {
        lists,
        report: outcome.report,
    })
}

/// Write only the generated quarterly list. No network access.
///
/// # Errors
///
/// Returns `SaveError` if the list cannot be written.
pub async fn run_generate(config: &HarvestConfig) -> Result<Vec<String>, SaveError> {
    let mut urls = QuarterlyUrlGenerator::from_config(config).urls();
    urls.sort();
    save_url_list(urls.as_slice(), &config.international_list_path()).await?;
    Ok(urls)
}
