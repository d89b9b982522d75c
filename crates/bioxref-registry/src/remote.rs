//! Remote fetcher for the published db-xrefs document.

use bioxref_core::{DbXref, LoadError};

/// Where the Gene Ontology pipeline publishes the current document.
pub const DB_XREFS_URL: &str = "https://current.geneontology.org/metadata/db-xrefs.json";

/// Fetches and parses a db-xrefs document over HTTP.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct XrefFetcher {
    client: reqwest::Client,
    url: String,
}

impl XrefFetcher {
    /// Create a fetcher pointed at [`DB_XREFS_URL`].
    ///
    /// No request timeout is set: a stalled fetch blocks the caller until
    /// the transport itself gives up.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("bioxref/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            url: DB_XREFS_URL.to_string(),
        }
    }

    /// Point the fetcher at a different document, e.g. a mirror or a
    /// test server.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// The URL this fetcher reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the document and parse it into xref records.
    pub async fn fetch(&self) -> Result<Vec<DbXref>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Http(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for XrefFetcher {
    fn default() -> Self {
        Self::new()
    }
}
