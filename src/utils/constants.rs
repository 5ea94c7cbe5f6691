//! Shared configuration constants for dgca_harvest
//!
//! Default values for the portal request shape, the crawl bounds and the
//! generated quarterly URL set. Every value here can be overridden through
//! `HarvestConfig`.

/// Portal endpoint that serves both the root listing and per-node content.
pub const DEFAULT_ENDPOINT: &str = "https://www.dgca.gov.in/digigov-portal/scan?";

/// Content ID of the monthly statistics listing the crawl starts from.
pub const DEFAULT_ROOT_CONTENT_ID: &str = "4184";

/// Rule book the statistics pages belong to.
pub const DEFAULT_RULE_BOOK_ID: &str = "259";

/// Public storage base that replaces [`INTERNAL_STORAGE_PREFIX`].
pub const DEFAULT_STORAGE_BASE_URL: &str = "https://public-prd-dgca.s3.ap-south-1.amazonaws.com";

/// Internal path prefix the portal uses for files in public storage.
pub const INTERNAL_STORAGE_PREFIX: &str = "jsp/dgca";

/// Default delay after every fetch: 3 seconds
///
/// The portal has no documented rate limit. Three seconds between requests
/// has been tolerated without throttling or blocked connections.
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 3_000;

/// Default maximum recursion depth below a yearly page: 10 levels
pub const DEFAULT_MAX_DEPTH: u8 = 10;

/// Per-request timeout: 60 seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Default directory the URL lists are written to.
pub const DEFAULT_OUTPUT_DIR: &str = ".";

/// First two-digit year of the quarterly international tables.
pub const DEFAULT_QUARTERLY_FIRST_YEAR: u8 = 15;

/// Last two-digit year of the quarterly international tables.
pub const DEFAULT_QUARTERLY_LAST_YEAR: u8 = 25;

/// Number of quarterly international tables (numbered from 1).
pub const DEFAULT_QUARTERLY_TABLES: u8 = 4;

/// Path of the quarterly international tables under the storage base.
///
/// `quaterly` is misspelled in the real storage layout.
pub const QUARTERLY_PATH: &str =
    "InventoryList/dataReports/aviationDataStatistics/airTransport/international/quaterly";

/// File name for the crawled URL list, relative to the output directory.
pub const DOMESTIC_LIST_FILE: &str = "urls/domestic.txt";

/// File name for the generated URL list, relative to the output directory.
pub const INTERNATIONAL_LIST_FILE: &str = "urls/international.txt";

/// File name for the merged URL list, relative to the output directory.
pub const MERGED_LIST_FILE: &str = "urls.txt";

/// File name for the JSON crawl report, relative to the output directory.
pub const REPORT_FILE: &str = "crawl_report.json";

/// Browser-like user agent sent with every portal request
///
/// The portal rejects some requests that carry no user agent at all.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
