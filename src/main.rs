//! dgca-harvest: discover every downloadable DGCA traffic spreadsheet.
//!
//! Writes `urls/domestic.txt` (crawled), `urls/international.txt`
//! (generated) and `urls.txt` (both) under the output directory.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dgca_harvest::config::{HarvestConfigBuilder, WithOutputDir};
use dgca_harvest::page_extractor::{city_pair_content_id, root_listing_ids};
use dgca_harvest::{ContentExtractor, HarvestConfig, harvest, run_generate};

#[derive(Parser)]
#[command(
    name = "dgca-harvest",
    about = "Crawl the DGCA portal for air-traffic spreadsheet URLs",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Crawl the portal, generate the quarterly URLs and write all lists.
    Crawl {
        #[command(flatten)]
        config: ConfigArgs,

        /// Portal endpoint.
        #[arg(long)]
        endpoint: Option<String>,

        /// Seconds to wait after every request.
        #[arg(long)]
        delay: Option<f64>,

        /// Deepest recursion level below a yearly page.
        #[arg(long)]
        max_depth: Option<u8>,

        /// Content ID of the root listing.
        #[arg(long)]
        root: Option<String>,

        /// Also write crawl_report.json.
        #[arg(long)]
        report: bool,
    },

    /// Write only the generated quarterly international list.
    Generate {
        #[command(flatten)]
        config: ConfigArgs,

        /// First two-digit year.
        #[arg(long)]
        first_year: Option<u8>,

        /// Last two-digit year.
        #[arg(long)]
        last_year: Option<u8>,
    },

    /// Run the extractor on a saved response body and print what it finds.
    Extract {
        /// File holding a raw portal response.
        file: PathBuf,

        /// Treat the file as the root listing and print the yearly IDs.
        #[arg(long, conflicts_with = "city_pair")]
        root_listing: bool,

        /// Treat the file as a yearly page and print its city-pair content ID.
        #[arg(long)]
        city_pair: bool,

        /// Storage base used for the prefix rewrite.
        #[arg(long)]
        storage_base: Option<String>,
    },
}

#[derive(Args)]
struct ConfigArgs {
    /// JSON config file; flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory the URL lists are written under.
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
}

impl ConfigArgs {
    fn builder(&self) -> Result<HarvestConfigBuilder<WithOutputDir>> {
        let base = match &self.config {
            Some(path) => HarvestConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => HarvestConfig::default(),
        };
        let builder = base.into_builder();
        Ok(match &self.output_dir {
            Some(dir) => builder.with_output_dir(dir),
            None => builder,
        })
    }
}

fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Commands::Crawl {
            config,
            endpoint,
            delay,
            max_depth,
            root,
            report,
        } => {
            let mut builder = config.builder()?;
            if let Some(endpoint) = endpoint {
                builder = builder.endpoint(endpoint);
            }
            if let Some(delay) = delay {
                let delay = Duration::try_from_secs_f64(delay)
                    .with_context(|| format!("Invalid delay {delay}"))?;
                builder = builder.request_delay_ms(
                    u64::try_from(delay.as_millis()).context("Delay too large")?,
                );
            }
            if let Some(max_depth) = max_depth {
                builder = builder.max_depth(max_depth);
            }
            if let Some(root) = root {
                builder = builder.root_content_id(root);
            }
            if report {
                builder = builder.save_report(true);
            }
            let config = builder.build().context("Invalid configuration")?;

            let summary = harvest(&config).await?;
            let stats = summary.report.stats;
            tracing::info!(
                domestic = summary.lists.domestic.len(),
                international = summary.lists.international.len(),
                merged = summary.lists.merged.len(),
                fetched = stats.nodes_fetched,
                failed = stats.fetch_failures,
                "Harvest finished"
            );
        }

        Commands::Generate {
            config,
            first_year,
            last_year,
        } => {
            let mut builder = config.builder()?;
            if first_year.is_some() || last_year.is_some() {
                let defaults = HarvestConfig::default().quarterly_years();
                builder = builder.quarterly_years(
                    first_year.unwrap_or(*defaults.start()),
                    last_year.unwrap_or(*defaults.end()),
                );
            }
            let config = builder.build().context("Invalid configuration")?;
            let urls = run_generate(&config).await?;
            tracing::info!(count = urls.len(), "Generated quarterly URLs");
        }

        Commands::Extract {
            file,
            root_listing,
            city_pair,
            storage_base,
        } => {
            let body = tokio::fs::read_to_string(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;

            if city_pair {
                match city_pair_content_id(&body) {
                    Some(id) => println!("{id}"),
                    None => tracing::warn!("No city-pair link in {}", file.display()),
                }
                return Ok(());
            }

            if root_listing {
                for id in root_listing_ids(&body) {
                    println!("{id}");
                }
                return Ok(());
            }

            let storage_base = storage_base
                .unwrap_or_else(|| HarvestConfig::default().storage_base_url().to_string());
            let result = ContentExtractor::new(storage_base).extract(&body);
            for url in &result.spreadsheet_urls {
                println!("url\t{url}");
            }
            for id in &result.child_ids {
                println!("child\t{id}");
            }
        }
    }

    Ok(())
}
