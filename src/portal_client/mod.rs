//! Request client for the portal's `scan` endpoint
//!
//! Every page of the portal is reached through the same form POST: a static
//! metadata block plus the two variable fields `contentId` and `serviceName`.
//! The response is arbitrary text (JSON, HTML, or an error page) and is
//! returned untouched; interpreting it is the extractor's job.
//!
//! The traversal only depends on the [`ContentSource`] trait so it can be
//! driven by an in-memory page graph in tests.

use std::collections::BTreeMap;
use std::future::Future;

use reqwest::Client;
use tracing::{debug, warn};

use crate::config::HarvestConfig;
use crate::content_id::ContentId;
use crate::utils::USER_AGENT;

/// The two logical operations the traversal uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceName {
    /// Root listing of a rule book section (`getParentData`)
    ParentListing,
    /// Content of a single node (`fetchRulebookContentDtlsList`)
    NodeContent,
}

impl ServiceName {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ParentListing => "getParentData",
            Self::NodeContent => "fetchRulebookContentDtlsList",
        }
    }
}

impl std::fmt::Display for ServiceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Network or HTTP failure for a single fetch. Never retried.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection, timeout or body read failure
    #[error("Request for content {content_id} ({service}) failed: {source}")]
    Request {
        content_id: ContentId,
        service: ServiceName,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response
    #[error("Content {content_id} ({service}) returned HTTP {status}")]
    Status {
        content_id: ContentId,
        service: ServiceName,
        status: u16,
    },

    /// Source-specific failure (used by non-HTTP sources)
    #[error("Content {content_id} unavailable: {reason}")]
    Unavailable { content_id: ContentId, reason: String },
}

/// Anything that can answer `fetch(contentId, serviceName)` with a body.
pub trait ContentSource {
    /// Issue one request and return the raw response text.
    fn fetch(
        &self,
        content_id: &ContentId,
        service: ServiceName,
    ) -> impl Future<Output = Result<String, TransportError>>;
}

/// HTTP implementation of [`ContentSource`] against the live portal
#[derive(Debug, Clone)]
pub struct PortalClient {
    client: Client,
    endpoint: String,
    metadata: BTreeMap<String, String>,
}

impl PortalClient {
    /// Build a client from the endpoint, metadata and timeout in `config`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Client` if the TLS backend cannot be set up.
    pub fn new(config: &HarvestConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(TransportError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint().to_string(),
            metadata: config.request_metadata().clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Form fields for one request: the static block plus the two variables.
    fn form_fields<'a>(
        &'a self,
        content_id: &'a ContentId,
        service: ServiceName,
    ) -> Vec<(&'a str, &'a str)> {
        let mut fields: Vec<(&str, &str)> = self
            .metadata
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        fields.push(("contentId", content_id.as_str()));
        fields.push(("serviceName", service.as_str()));
        fields
    }
}

impl ContentSource for PortalClient {
    async fn fetch(
        &self,
        content_id: &ContentId,
        service: ServiceName,
    ) -> Result<String, TransportError> {
        debug!(%content_id, %service, "Posting portal request");

        let request_error = |source| TransportError::Request {
            content_id: content_id.clone(),
            service,
            source,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .form(&self.form_fields(content_id, service))
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(%content_id, %service, status = status.as_u16(), "Portal returned error status");
            return Err(TransportError::Status {
                content_id: content_id.clone(),
                service,
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(request_error)?;
        debug!(%content_id, %service, bytes = body.len(), "Portal response received");
        Ok(body)
    }
}
