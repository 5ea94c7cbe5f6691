//! Crawl Engine Module
//!
//! Recursive discovery of spreadsheet URLs over the portal's content-ID
//! graph, plus the orchestration of a complete harvest run.

// Sub-modules
pub mod crawl_types;
pub mod execution;
pub mod orchestrator;
pub mod progress;
pub mod rate_limiter;
pub mod traversal;

// Re-exports for public API
pub use crawl_types::{CrawlOutcome, CrawlReport, CrawlState, CrawlStats, YearSummary};
pub use execution::{HarvestSummary, run_generate, run_harvest};
pub use orchestrator::crawl_from_root;
pub use progress::{LogProgress, NoOpProgress, ProgressReporter};
pub use rate_limiter::RequestPacer;
pub use traversal::Traversal;
