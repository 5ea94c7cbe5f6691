//! Test utilities shared by the integration tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use dgca_harvest::{ContentId, ContentSource, ProgressReporter, ServiceName, TransportError};

/// Storage base used by every fixture body.
#[allow(dead_code)]
pub const STORAGE_BASE: &str = "https://storage.test";

/// In-memory portal: one body (or failure) per content ID.
///
/// Clones share the fetch log so a test can hand one copy to the crawler
/// and inspect the other afterwards.
#[derive(Clone, Default)]
pub struct PageGraph {
    root_listing: Option<String>,
    pages: HashMap<String, Result<String, String>>,
    fetched: Arc<Mutex<Vec<(String, ServiceName)>>>,
}

#[allow(dead_code)]
impl PageGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body returned for the `getParentData` request.
    pub fn with_root_listing(mut self, body: &str) -> Self {
        self.root_listing = Some(body.to_string());
        self
    }

    pub fn with_page(mut self, id: &str, body: &str) -> Self {
        self.pages.insert(id.to_string(), Ok(body.to_string()));
        self
    }

    pub fn with_failure(mut self, id: &str, reason: &str) -> Self {
        self.pages.insert(id.to_string(), Err(reason.to_string()));
        self
    }

    /// Every request issued so far, in order.
    pub fn fetched(&self) -> Vec<(String, ServiceName)> {
        self.fetched.lock().unwrap().clone()
    }

    /// Content IDs of the node requests issued so far, in order.
    pub fn fetched_nodes(&self) -> Vec<String> {
        self.fetched()
            .into_iter()
            .filter(|(_, service)| *service == ServiceName::NodeContent)
            .map(|(id, _)| id)
            .collect()
    }
}

impl ContentSource for PageGraph {
    async fn fetch(
        &self,
        content_id: &ContentId,
        service: ServiceName,
    ) -> Result<String, TransportError> {
        self.fetched
            .lock()
            .unwrap()
            .push((content_id.to_string(), service));

        let unavailable = |reason: &str| TransportError::Unavailable {
            content_id: content_id.clone(),
            reason: reason.to_string(),
        };

        match service {
            ServiceName::ParentListing => self
                .root_listing
                .clone()
                .ok_or_else(|| unavailable("no root listing")),
            ServiceName::NodeContent => match self.pages.get(content_id.as_str()) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(reason)) => Err(unavailable(reason)),
                None => Err(unavailable("unknown page")),
            },
        }
    }
}

/// Progress reporter that keeps every event as a short string.
#[derive(Clone, Default)]
pub struct RecordingProgress {
    events: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl RecordingProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn count(&self, prefix: &str) -> usize {
        self.events()
            .iter()
            .filter(|event| event.starts_with(prefix))
            .count()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for RecordingProgress {
    fn report_root_listing(&self, root: &ContentId, yearly: usize) {
        self.push(format!("root {root} {yearly}"));
    }

    fn report_root_failed(&self, root: &ContentId, _error: &str) {
        self.push(format!("root_failed {root}"));
    }

    fn report_fetch_started(&self, id: &ContentId, depth: u32) {
        self.push(format!("fetch {id} {depth}"));
    }

    fn report_urls_found(&self, id: &ContentId, _depth: u32, count: usize) {
        self.push(format!("found {id} {count}"));
    }

    fn report_fetch_failed(&self, id: &ContentId, _depth: u32, _error: &str) {
        self.push(format!("failed {id}"));
    }

    fn report_depth_pruned(&self, id: &ContentId, depth: u32) {
        self.push(format!("pruned {id} {depth}"));
    }

    fn report_year_completed(&self, id: &ContentId, found: usize, _total: usize) {
        self.push(format!("year {id} {found}"));
    }

    fn report_completed(&self, total: usize) {
        self.push(format!("completed {total}"));
    }
}

/// HTML anchor pointing at a spreadsheet under the internal prefix.
#[allow(dead_code)]
pub fn spreadsheet_anchor(path: &str) -> String {
    format!(r#"<a data-url="jsp/dgca/{path}">file</a>"#)
}

/// HTML anchor pointing at another portal page.
#[allow(dead_code)]
pub fn page_anchor(id: &str) -> String {
    format!(r#"<a data-url="yearly/259/{id}/html">page</a>"#)
}

/// Public URL a spreadsheet anchor is rewritten to.
#[allow(dead_code)]
pub fn public_url(path: &str) -> String {
    format!("{STORAGE_BASE}/{path}")
}

/// Root listing body enumerating the given yearly pages.
#[allow(dead_code)]
pub fn root_listing(ids: &[&str]) -> String {
    ids.iter()
        .map(|id| format!(r#"<li><a data-url="monthlyStatistics/259/{id}/html">{id}</a></li>"#))
        .collect::<Vec<_>>()
        .join("\n")
}
