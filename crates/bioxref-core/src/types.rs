//! Xref record types — the in-memory representation of the db-xrefs document.
//!
//! Field names follow the snake_case wire format of the GO metadata file
//! (`db-xrefs.json`, schema `db-xrefs.schema.yaml`). Only the two lookup
//! keys are required at parse time; published documents omit nominally
//! required descriptive fields often enough that strict parsing would
//! reject them.

use serde::{Deserialize, Serialize};

/// Placeholder token inside a URL template, swapped for the caller's ID.
pub const ID_PLACEHOLDER: &str = "[example_id]";

// ─── EntityType ───────────────────────────────────────────────────────────────

/// One kind of identifiable entity within a database (e.g. gene, protein).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityType {
    /// Ontology identifier for the entity kind, e.g. `"SO:0000704"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    /// Entity kind name — the lookup key, matched case-insensitively.
    pub type_name: String,
    /// Regex describing well-formed local IDs for this entity kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_syntax: Option<String>,
    /// URL template containing the `[example_id]` placeholder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_syntax: Option<String>,
    /// Example local ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_id: Option<String>,
    /// Fully resolved URL for the example ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example_url: Option<String>,
}

impl EntityType {
    /// Substitute `id` into the URL template — first occurrence only.
    /// Returns `None` when this entity kind has no template.
    pub fn url_for(&self, id: &str) -> Option<String> {
        self.url_syntax
            .as_ref()
            .map(|syntax| syntax.replacen(ID_PLACEHOLDER, id, 1))
    }
}

// ─── DbXref ───────────────────────────────────────────────────────────────────

/// One external database's cross-reference rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbXref {
    /// Canonical database name, matched case-insensitively.
    pub database: String,
    /// Alternate names; matched by exact string comparison.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    /// Human-readable database name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text description of the database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Prefix for minting RDF subject URIs for entities in this database.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rdf_uri_prefix: Option<String>,
    /// Top-level URLs for the database itself (not per-entity).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generic_urls: Vec<String>,
    /// Entity kinds this database can resolve, in document order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_types: Option<Vec<EntityType>>,
}

impl DbXref {
    /// Returns `true` if `database` names this record: the canonical name
    /// matches case-insensitively, synonyms only by exact comparison.
    pub fn matches(&self, database: &str) -> bool {
        self.database.eq_ignore_ascii_case(database)
            || self
                .synonyms
                .as_ref()
                .map_or(false, |syns| syns.iter().any(|s| s == database))
    }

    /// Select an entity kind: by name (case-insensitive) when one is given,
    /// otherwise the first in document order. A named miss does not fall
    /// back to the first entry.
    pub fn entity_for(&self, type_name: Option<&str>) -> Option<&EntityType> {
        let entity_types = self.entity_types.as_deref()?;
        match type_name {
            Some(name) => entity_types
                .iter()
                .find(|e| e.type_name.eq_ignore_ascii_case(name)),
            None => entity_types.first(),
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(type_name: &str, url_syntax: Option<&str>) -> EntityType {
        EntityType {
            type_id: None,
            type_name: type_name.to_string(),
            id_syntax: None,
            url_syntax: url_syntax.map(str::to_string),
            example_id: None,
            example_url: None,
        }
    }

    fn testdb() -> DbXref {
        DbXref {
            database: "testdb".into(),
            synonyms: Some(vec!["testdbsyn".into()]),
            name: None,
            description: None,
            rdf_uri_prefix: None,
            generic_urls: vec![],
            entity_types: Some(vec![
                entity("gene", Some("https://example.com/gene/[example_id]")),
                entity("protein", Some("https://example.com/protein/[example_id]")),
                entity("no_url_syntax", None),
            ]),
        }
    }

    #[test]
    fn parse_minimal_record() {
        let json = r#"{
            "database": "testdb",
            "synonyms": ["testdbsyn"],
            "entity_types": [
                { "type_name": "gene", "url_syntax": "https://example.com/gene/[example_id]" }
            ]
        }"#;
        let xref: DbXref = serde_json::from_str(json).unwrap();
        assert_eq!(xref.database, "testdb");
        assert_eq!(xref.synonyms.as_deref(), Some(&["testdbsyn".to_string()][..]));
        assert!(xref.name.is_none());
        assert!(xref.generic_urls.is_empty());
        let types = xref.entity_types.as_deref().unwrap();
        assert_eq!(types.len(), 1);
        assert!(types[0].type_id.is_none());
    }

    #[test]
    fn parse_full_record() {
        let json = r#"{
            "database": "UniProtKB",
            "synonyms": ["UniProt", "Swiss-Prot"],
            "name": "Universal Protein Knowledgebase",
            "description": "A central repository of protein sequence and function",
            "rdf_uri_prefix": "http://identifiers.org/uniprot/",
            "generic_urls": ["https://www.uniprot.org"],
            "entity_types": [{
                "type_id": "PR:000000001",
                "type_name": "protein",
                "id_syntax": "([OPQ][0-9][A-Z0-9]{3}[0-9]|[A-NR-Z][0-9]([A-Z][A-Z0-9]{2}[0-9]){1,2})",
                "url_syntax": "https://www.uniprot.org/uniprotkb/[example_id]/entry",
                "example_id": "UniProtKB:P51587",
                "example_url": "https://www.uniprot.org/uniprotkb/P51587/entry"
            }]
        }"#;
        let xref: DbXref = serde_json::from_str(json).unwrap();
        assert_eq!(xref.name.as_deref(), Some("Universal Protein Knowledgebase"));
        assert_eq!(xref.generic_urls.len(), 1);
        let protein = &xref.entity_types.as_deref().unwrap()[0];
        assert_eq!(protein.type_id.as_deref(), Some("PR:000000001"));
        assert_eq!(
            protein.url_for("P51587").unwrap(),
            "https://www.uniprot.org/uniprotkb/P51587/entry"
        );
    }

    #[test]
    fn serialize_skips_absent_fields() {
        let json = r#"{ "database": "testdb" }"#;
        let xref: DbXref = serde_json::from_str(json).unwrap();
        let out = serde_json::to_string(&xref).unwrap();
        assert!(!out.contains("rdf_uri_prefix"));
        assert!(!out.contains("generic_urls"));
        let back: DbXref = serde_json::from_str(&out).unwrap();
        assert_eq!(back, xref);
    }

    #[test]
    fn matches_primary_name_case_insensitive() {
        let xref = testdb();
        assert!(xref.matches("testdb"));
        assert!(xref.matches("TESTDB"));
        assert!(xref.matches("TestDb"));
        assert!(!xref.matches("otherdb"));
    }

    #[test]
    fn synonym_match_is_case_sensitive() {
        // Primary names match case-insensitively; synonyms only exactly.
        let xref = testdb();
        assert!(xref.matches("testdbsyn"));
        assert!(!xref.matches("TESTDBSYN"));
        assert!(!xref.matches("TestDbSyn"));
    }

    #[test]
    fn entity_for_named_case_insensitive() {
        let xref = testdb();
        let e = xref.entity_for(Some("PROTEIN")).unwrap();
        assert_eq!(e.type_name, "protein");
    }

    #[test]
    fn entity_for_defaults_to_first() {
        let xref = testdb();
        let e = xref.entity_for(None).unwrap();
        assert_eq!(e.type_name, "gene");
    }

    #[test]
    fn entity_for_named_miss_has_no_fallback() {
        let xref = testdb();
        assert!(xref.entity_for(Some("transcript")).is_none());
    }

    #[test]
    fn entity_for_none_without_entity_types() {
        let mut xref = testdb();
        xref.entity_types = None;
        assert!(xref.entity_for(None).is_none());
        assert!(xref.entity_for(Some("gene")).is_none());
    }

    #[test]
    fn url_for_substitutes_id() {
        let e = entity("gene", Some("https://example.com/gene/[example_id]"));
        assert_eq!(
            e.url_for("12345").unwrap(),
            "https://example.com/gene/12345"
        );
    }

    #[test]
    fn url_for_replaces_first_occurrence_only() {
        let e = entity(
            "gene",
            Some("https://example.com/[example_id]?highlight=[example_id]"),
        );
        assert_eq!(
            e.url_for("12345").unwrap(),
            "https://example.com/12345?highlight=[example_id]"
        );
    }

    #[test]
    fn url_for_none_without_template() {
        let e = entity("no_url_syntax", None);
        assert!(e.url_for("12345").is_none());
    }
}
