//! Schema value types: attributes, tables, and table collections.
//!
//! These are passive values built by the executor from a parsed declaration
//! tree. A table is never partially visible: it is assembled locally and
//! only enters the catalog once every attribute converts cleanly.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::value::Value;
use crate::error::{Error, Result};
use crate::parsing::{Decl, TokenKind};

/// A single column definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    /// Column name.
    pub name: String,
    /// Declared type name, as written.
    pub type_name: String,
    /// Declared size for sized types such as `VARCHAR(255)`.
    pub size: Option<u64>,
    /// UNIQUE constraint.
    pub unique: bool,
    /// False when declared NOT NULL.
    pub nullable: bool,
    /// Inline PRIMARY KEY constraint.
    pub primary_key: bool,
    /// AUTOINCREMENT constraint.
    pub autoincrement: bool,
    /// WITH TIME ZONE, legal only on timestamp columns.
    pub with_time_zone: bool,
    /// DEFAULT literal, if declared.
    pub default: Option<Value>,
}

impl Attribute {
    /// Creates an attribute with no constraints.
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            type_name: type_name.into(),
            size: None,
            unique: false,
            nullable: true,
            primary_key: false,
            autoincrement: false,
            with_time_zone: false,
            default: None,
        }
    }

    /// Converts a parsed column declaration into an attribute.
    ///
    /// The first child is the type; the remaining children are constraints
    /// in source order. Constraint order does not affect the result.
    pub fn from_decl(decl: &Decl) -> Result<Attribute> {
        let mut children = decl.children.iter();
        let type_decl = children
            .next()
            .filter(|child| child.kind == TokenKind::Identifier)
            .ok_or_else(|| {
                Error::MalformedQuery(format!("column {} has no type", decl.lexeme))
            })?;

        let mut attribute = Attribute::new(decl.lexeme.clone(), type_decl.lexeme.clone());
        for child in &type_decl.children {
            match child.kind {
                TokenKind::Number => {
                    let size = child.lexeme.parse::<u64>().map_err(|_| {
                        Error::InvalidValue(format!("invalid type size '{}'", child.lexeme))
                    })?;
                    attribute.size = Some(size);
                }
                TokenKind::With => attribute.with_time_zone = true,
                _ => {
                    return Err(Error::MalformedQuery(format!(
                        "unexpected token '{}' in type of column {}",
                        child.lexeme, decl.lexeme
                    )))
                }
            }
        }

        for child in children {
            match child.kind {
                TokenKind::Unique => attribute.unique = true,
                TokenKind::Not => attribute.nullable = false,
                TokenKind::Primary => attribute.primary_key = true,
                TokenKind::Autoincrement => attribute.autoincrement = true,
                TokenKind::Default => {
                    let value = child.children.first().ok_or_else(|| {
                        Error::MalformedQuery(format!(
                            "DEFAULT on column {} has no value",
                            decl.lexeme
                        ))
                    })?;
                    attribute.default = Some(Value::from_decl(value)?);
                }
                _ => {
                    return Err(Error::MalformedQuery(format!(
                        "unexpected constraint '{}' on column {}",
                        child.lexeme, decl.lexeme
                    )))
                }
            }
        }

        Ok(attribute)
    }
}

/// A table schema: a name, an optional alias, and ordered attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    name: String,
    alias: Option<String>,
    attributes: Vec<Attribute>,
}

impl Table {
    /// Creates an empty table schema.
    pub fn new(name: impl Into<String>) -> Self {
        Table { name: name.into(), alias: None, attributes: Vec::new() }
    }

    /// Creates an empty table schema with an alias.
    pub fn with_alias(name: impl Into<String>, alias: impl Into<String>) -> Self {
        Table {
            name: name.into(),
            alias: Some(alias.into()),
            attributes: Vec::new(),
        }
    }

    /// Creates a table from its name declaration, honoring an `AS` alias
    /// child if the parser attached one.
    pub fn from_decl(decl: &Decl) -> Self {
        let alias = decl
            .child_of_kind(TokenKind::As)
            .and_then(|as_decl| as_decl.children.first());
        match alias {
            Some(alias) => Table::with_alias(decl.lexeme.clone(), alias.lexeme.clone()),
            None => Table::new(decl.lexeme.clone()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The alias if set, else the table name.
    pub fn alias(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    /// The table's attributes, in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Appends an attribute, rejecting duplicate column names.
    pub fn add_attribute(&mut self, attribute: Attribute) -> Result<()> {
        if self.attributes.iter().any(|a| a.name == attribute.name) {
            return Err(Error::DuplicateColumn(attribute.name));
        }
        self.attributes.push(attribute);
        Ok(())
    }
}

// Formats the schema as a re-parseable CREATE TABLE statement.
impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE TABLE {} (", self.name)?;
        for (i, attribute) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", attribute.name, attribute.type_name)?;
            if let Some(size) = attribute.size {
                write!(f, "({})", size)?;
            }
            if attribute.with_time_zone {
                write!(f, " WITH TIME ZONE")?;
            }
            if attribute.unique {
                write!(f, " UNIQUE")?;
            }
            if !attribute.nullable {
                write!(f, " NOT NULL")?;
            }
            if attribute.primary_key {
                write!(f, " PRIMARY KEY")?;
            }
            if attribute.autoincrement {
                write!(f, " AUTOINCREMENT")?;
            }
            if let Some(default) = &attribute.default {
                write!(f, " DEFAULT {}", default)?;
            }
        }
        write!(f, ")")
    }
}

/// An ordered collection of tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tables(pub Vec<Table>);

impl Tables {
    /// Resolves a table by alias; the first match wins.
    pub fn by_alias(&self, alias: &str) -> Option<&Table> {
        self.0.iter().find(|table| table.alias() == alias)
    }
}
