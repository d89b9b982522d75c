//! # bioxref-registry
//!
//! Fetches the Gene Ontology `db-xrefs.json` document and resolves
//! `(database, entity type, id)` triples to concrete entity URLs.
//!
//! The expected lifecycle:
//!
//! 1. Build an [`XrefRegistry`], optionally pointing it at a mirror with
//!    [`XrefRegistry::with_url`] or routing warnings with
//!    [`XrefRegistry::with_sink`].
//! 2. Call [`XrefRegistry::init`] once at startup to load the document.
//! 3. Resolve URLs from any number of threads via
//!    [`XrefRegistry::resolve_url`].
//!
//! A failed load leaves the registry ready-with-error; lookups against it
//! simply miss. [`XrefFetcher`] is exposed separately for callers that
//! want the raw records without the registry state.

pub mod memory;
pub mod remote;

pub use memory::XrefRegistry;
pub use remote::{XrefFetcher, DB_XREFS_URL};
