//! In-memory xref registry — load lifecycle and URL resolution.

use std::sync::{Arc, RwLock};

use bioxref_core::{DbXref, TracingSink, WarningSink, XrefWarning};

use crate::remote::XrefFetcher;

#[derive(Debug, Default)]
struct Inner {
    xrefs: Vec<DbXref>,
    ready: bool,
    error: bool,
}

/// Lookup state for database cross-references.
///
/// Owns the loaded records plus the ready/error lifecycle flags, so
/// embedders can run several independent registries side by side. Clones
/// share state; the expected pattern is one [`init`](Self::init) at
/// startup followed by any number of concurrent lookups.
#[derive(Clone)]
pub struct XrefRegistry {
    inner: Arc<RwLock<Inner>>,
    fetcher: XrefFetcher,
    sink: Arc<dyn WarningSink>,
}

impl XrefRegistry {
    /// Empty registry reading from the published document, warnings
    /// routed to [`TracingSink`].
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            fetcher: XrefFetcher::new(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Load the document from a different URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.fetcher = self.fetcher.with_url(url);
        self
    }

    /// Route warnings to `sink` instead of [`TracingSink`].
    pub fn with_sink(mut self, sink: Arc<dyn WarningSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Fetch the db-xrefs document and replace the in-memory records.
    ///
    /// Always leaves the registry ready. On success the error flag is
    /// cleared and the loaded records are returned; on failure the sink
    /// receives [`XrefWarning::LoadFailed`], the error flag is set, and
    /// any previously loaded records are kept.
    pub async fn init(&self) -> Option<Vec<DbXref>> {
        match self.fetcher.fetch().await {
            Ok(xrefs) => {
                {
                    let mut inner = self.inner.write().unwrap();
                    inner.xrefs = xrefs.clone();
                    inner.ready = true;
                    inner.error = false;
                }
                tracing::debug!(count = xrefs.len(), url = self.fetcher.url(), "loaded db-xrefs");
                Some(xrefs)
            }
            Err(e) => {
                self.sink.warn(XrefWarning::LoadFailed {
                    reason: e.to_string(),
                });
                let mut inner = self.inner.write().unwrap();
                inner.ready = true;
                inner.error = true;
                None
            }
        }
    }

    /// Resolve `(database, entity type, id)` to a concrete entity URL.
    ///
    /// The database name is matched case-insensitively against canonical
    /// names and exactly against synonyms, in document order. When
    /// `entity_type` is `None` the record's first entity kind is used; a
    /// named entity kind that does not exist is a miss, not a fallback.
    /// Every failure path reports one [`XrefWarning`] to the sink and
    /// returns `None`. The ID is substituted as-is, without validation.
    pub fn resolve_url(
        &self,
        database: &str,
        entity_type: Option<&str>,
        id: &str,
    ) -> Option<String> {
        // Clone the matching record out so no lock is held while the
        // sink runs.
        let xref = self.find(database);

        let xref = match xref {
            Some(xref) => xref,
            None => {
                self.sink.warn(XrefWarning::DatabaseNotFound {
                    database: database.to_string(),
                });
                return None;
            }
        };

        let entity = match xref.entity_for(entity_type) {
            Some(entity) => entity,
            None => {
                self.sink.warn(XrefWarning::EntityTypeNotFound {
                    database: database.to_string(),
                    entity_type: entity_type.map(str::to_string),
                });
                return None;
            }
        };

        match entity.url_for(id) {
            Some(url) => Some(url),
            None => {
                self.sink.warn(XrefWarning::NoUrlSyntax {
                    database: database.to_string(),
                    entity_type: entity.type_name.clone(),
                });
                None
            }
        }
    }

    /// First record matching `database`, if any. Does not report a
    /// warning on a miss.
    pub fn find(&self, database: &str) -> Option<DbXref> {
        self.inner
            .read()
            .unwrap()
            .xrefs
            .iter()
            .find(|x| x.matches(database))
            .cloned()
    }

    /// Snapshot of all loaded records, in document order.
    pub fn xrefs(&self) -> Vec<DbXref> {
        self.inner.read().unwrap().xrefs.clone()
    }

    /// Number of loaded records.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().xrefs.len()
    }

    /// Returns `true` if no records are loaded.
    pub fn is_empty(&self) -> bool {
        self.inner.read().unwrap().xrefs.is_empty()
    }

    /// Returns `true` once a load attempt has settled, whatever its outcome.
    pub fn is_ready(&self) -> bool {
        self.inner.read().unwrap().ready
    }

    /// Returns `true` if the most recent load attempt failed.
    pub fn has_error(&self) -> bool {
        self.inner.read().unwrap().error
    }
}

impl Default for XrefRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
