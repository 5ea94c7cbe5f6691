pub mod config;
pub mod content_id;
pub mod content_saver;
pub mod crawl_engine;
pub mod normalize;
pub mod page_extractor;
pub mod portal_client;
pub mod url_aggregator;
pub mod url_generator;
pub mod utils;

use anyhow::Context;

pub use config::{ConfigError, HarvestConfig};
pub use content_id::ContentId;
pub use content_saver::SaveError;
pub use crawl_engine::{
    CrawlOutcome, CrawlReport, CrawlState, HarvestSummary, LogProgress, NoOpProgress,
    ProgressReporter, RequestPacer, Traversal, crawl_from_root, run_generate, run_harvest,
};
pub use normalize::{LookupTables, Period};
pub use page_extractor::{ContentExtractor, ExtractionResult};
pub use portal_client::{ContentSource, PortalClient, ServiceName, TransportError};
pub use url_aggregator::{UrlLists, merge};
pub use url_generator::QuarterlyUrlGenerator;

/// Harvest the live portal with the given configuration, logging progress.
pub async fn harvest(config: &HarvestConfig) -> anyhow::Result<HarvestSummary> {
    let client = PortalClient::new(config).context("Failed to create portal client")?;
    run_harvest(config, client, LogProgress)
        .await
        .context("Failed to save harvest results")
}
