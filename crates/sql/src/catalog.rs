//! The engine's relation registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::schema::Table;

/// A catalog entry. Row storage lives elsewhere; the schema front end only
/// registers the table definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation {
    table: Table,
}

impl Relation {
    pub fn new(table: Table) -> Self {
        Relation { table }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
}

/// Registry mapping table names to relations.
///
/// Names are unique, and entries are only inserted after full validation, so
/// a partially-defined table is never visible. Nothing here removes entries;
/// DROP and ALTER are separate subsystems.
#[derive(Debug, Default)]
pub struct Catalog {
    relations: HashMap<String, Relation>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog { relations: HashMap::new() }
    }

    /// Looks up a relation by table name.
    pub fn lookup(&self, name: &str) -> Option<&Relation> {
        self.relations.get(name)
    }

    /// Registers a relation under the given name.
    pub fn insert(&mut self, name: impl Into<String>, relation: Relation) {
        self.relations.insert(name.into(), relation);
    }

    pub fn table_exists(&self, name: &str) -> bool {
        self.relations.contains_key(name)
    }

    /// All registered table names.
    pub fn list_tables(&self) -> Vec<String> {
        self.relations.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}
