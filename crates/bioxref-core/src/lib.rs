//! # bioxref-core
//!
//! Core types for resolving biological database cross-references: the
//! records of the GO `db-xrefs.json` metadata file, the errors its load
//! path can produce, and the warning sink that lookup failures report to.
//!
//! - [`DbXref`] / [`EntityType`] — one database's xref rules and its
//!   entity kinds, as published on the wire
//! - [`LoadError`] — why a document failed to load
//! - [`WarningSink`] — pluggable destination for non-fatal warnings,
//!   with [`TracingSink`] and [`NullSink`] implementations
//!
//! Fetching and the lookup state live in `bioxref-registry`; this crate
//! has no HTTP dependency.

pub mod error;
pub mod sink;
pub mod types;

pub use error::LoadError;
pub use sink::{NullSink, TracingSink, WarningSink, XrefWarning};
pub use types::{DbXref, EntityType, ID_PLACEHOLDER};
