//! Warning sink — where lookup and load failures are reported.
//!
//! Every failure path emits a structured [`XrefWarning`] instead of writing
//! to a logger directly, so embedders can route warnings wherever they like
//! (or drop them). [`TracingSink`] is the default route.

use std::fmt;

// ─── XrefWarning ──────────────────────────────────────────────────────────────

/// A non-fatal condition encountered while loading or resolving xrefs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XrefWarning {
    /// No record matched the requested database name.
    DatabaseNotFound { database: String },
    /// The database matched but the entity kind could not be selected.
    /// `entity_type` is the caller's request: `Some` for a named miss,
    /// `None` when the record defines no entity types at all.
    EntityTypeNotFound {
        database: String,
        entity_type: Option<String>,
    },
    /// The selected entity kind has no URL template.
    NoUrlSyntax {
        database: String,
        entity_type: String,
    },
    /// The db-xrefs document could not be fetched or parsed.
    LoadFailed { reason: String },
}

impl fmt::Display for XrefWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatabaseNotFound { database } => {
                write!(f, "database not found: {database}")
            }
            Self::EntityTypeNotFound {
                database,
                entity_type: Some(entity_type),
            } => {
                write!(f, "entity type '{entity_type}' not found in database '{database}'")
            }
            Self::EntityTypeNotFound {
                database,
                entity_type: None,
            } => {
                write!(f, "no entity types defined for database '{database}'")
            }
            Self::NoUrlSyntax {
                database,
                entity_type,
            } => {
                write!(
                    f,
                    "no URL syntax defined for entity type '{entity_type}' in database '{database}'"
                )
            }
            Self::LoadFailed { reason } => {
                write!(f, "failed to load db-xrefs: {reason}")
            }
        }
    }
}

// ─── WarningSink ──────────────────────────────────────────────────────────────

/// Receiver for [`XrefWarning`]s. Implementations must be thread-safe; the
/// registry shares one sink across clones.
pub trait WarningSink: Send + Sync {
    fn warn(&self, warning: XrefWarning);
}

/// Forwards warnings to [`tracing`] with structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, warning: XrefWarning) {
        match &warning {
            XrefWarning::DatabaseNotFound { database } => {
                tracing::warn!(%database, "database not found in db-xrefs");
            }
            XrefWarning::EntityTypeNotFound {
                database,
                entity_type: Some(entity_type),
            } => {
                tracing::warn!(%database, %entity_type, "entity type not found");
            }
            XrefWarning::EntityTypeNotFound {
                database,
                entity_type: None,
            } => {
                tracing::warn!(%database, "no entity types defined");
            }
            XrefWarning::NoUrlSyntax {
                database,
                entity_type,
            } => {
                tracing::warn!(%database, %entity_type, "no URL syntax defined");
            }
            XrefWarning::LoadFailed { reason } => {
                tracing::warn!(%reason, "failed to load db-xrefs");
            }
        }
    }
}

/// Discards every warning. Useful in tests and batch tools.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl WarningSink for NullSink {
    fn warn(&self, _warning: XrefWarning) {}
}

// ─── Tests ────────────────────────────────────────────────────────────────────
